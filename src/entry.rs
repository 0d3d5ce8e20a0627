use serde::{Deserialize, Serialize};

/// One word-frequency record.
///
/// Field order matters: serialization must emit `w` before `f` to match the
/// dictionary format downstream consumers diff against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "w")]
    pub word: String,
    #[serde(rename = "f")]
    pub frequency: i64,
}

impl Entry {
    pub fn new(word: impl Into<String>, frequency: i64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}
