// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;

pub const DEFAULT_TOPICS: [&str; 13] = [
    "三角函数与解三角形",
    "解析几何",
    "数列",
    "函数与导数",
    "立体几何",
    "概率与统计",
    "不等式",
    "集合",
    "复数",
    "平面向量",
    "算法",
    "排列组合",
    "新定义",
];

pub const DEFAULT_TYPES: [&str; 3] = ["单选题", "填空题", "解答题"];

/// The fixed topic and type lists offered by the category navigator.
#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Bank {
    pub topics: Vec<String>,
    pub types: Vec<String>,
    pub page_size: usize,
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            topics: DEFAULT_TOPICS.iter().map(|s| s.to_string()).collect(),
            types: DEFAULT_TYPES.iter().map(|s| s.to_string()).collect(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Bank {
    pub fn topic_index(&self, topic: &str) -> Option<usize> {
        self.topics.iter().position(|t| t == topic)
    }

    pub fn type_index(&self, kind: &str) -> Option<usize> {
        self.types.iter().position(|t| t == kind)
    }
}
