// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Any JSON scalar, shown as written. `null` shows as nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Label(Value);

impl From<Value> for Label {
    fn from(value: Value) -> Self {
        Label(value)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            value => write!(f, "{}", value),
        }
    }
}

/// `null` is read as the default value, like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One record of the dataset.
///
/// Records are not validated: every field may be absent or `null`, in which
/// case it is simply left out when the question is rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Question {
    pub year: Label,
    pub source: Label,
    pub no: Label,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Choice label to choice text, in document order.
    pub choices: Option<IndexMap<String, Label>>,
}

impl Question {
    pub fn has_tag(&self, topic: &str) -> bool {
        self.tags.iter().any(|t| t == topic)
    }

    pub fn matches(&self, topic: &str, kind: &str) -> bool {
        self.has_tag(topic) && self.kind == kind
    }
}

pub fn parse_questions(json: &str) -> eyre::Result<Vec<Question>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let questions = parse_questions(
            r#"[{
                "year": 2023,
                "source": "全国甲卷",
                "no": 7,
                "type": "单选题",
                "tags": ["数列", "不等式"],
                "content": "已知 $a_n$ 为等差数列",
                "choices": {"A": "1", "B": "2", "C": "[c](images/c.png)", "D": "4"}
            }]"#,
        )
        .unwrap();

        let q = &questions[0];
        assert_eq!(q.year.to_string(), "2023");
        assert_eq!(q.no.to_string(), "7");
        assert_eq!(q.kind, "单选题");
        assert!(q.matches("不等式", "单选题"));
        assert!(!q.matches("不等式", "填空题"));
        let labels: Vec<&str> = q.choices.as_ref().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let questions = parse_questions(r#"[{"type": "解答题"}, {}]"#).unwrap();
        assert_eq!(questions.len(), 2);
        assert!(questions[0].tags.is_empty());
        assert!(questions[0].choices.is_none());
        assert_eq!(questions[0].year.to_string(), "");
        assert!(!questions[1].matches("数列", ""));
    }

    #[test]
    fn test_null_and_mistyped_fields_still_load() {
        let questions = parse_questions(
            r#"[
                {"year": 2023, "no": 1, "type": "单选题", "tags": ["数列"], "content": "ok"},
                {"year": null, "no": null, "source": null, "type": null, "tags": null,
                 "content": null, "choices": null},
                {"year": "2022", "no": "12", "source": 2022, "type": "填空题", "tags": ["数列"],
                 "content": "q3", "choices": {"A": 3.14, "B": null}}
            ]"#,
        )
        .unwrap();

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].content, "ok");

        let empty = &questions[1];
        assert_eq!(empty.content, "");
        assert_eq!(empty.kind, "");
        assert!(empty.tags.is_empty());
        assert!(empty.choices.is_none());
        assert_eq!(empty.year.to_string(), "");

        let mixed = &questions[2];
        assert_eq!(mixed.year.to_string(), "2022");
        assert_eq!(mixed.no.to_string(), "12");
        assert_eq!(mixed.source.to_string(), "2022");
        let choices = mixed.choices.as_ref().unwrap();
        assert_eq!(choices["A"].to_string(), "3.14");
        assert_eq!(choices["B"].to_string(), "");
        assert!(mixed.matches("数列", "填空题"));
    }

    #[test]
    fn test_not_an_array() {
        assert!(parse_questions(r#"{"questions": []}"#).is_err());
    }
}
