// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod category;
pub mod content;
pub mod katex_compat;
pub mod pagination;
