// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod build;
pub mod init;
pub mod serve;
pub mod show;
