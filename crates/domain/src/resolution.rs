//! JSON shape shared by the upstream DoH resolver and our own responses.
//!
//! Field names follow the resolver's JSON API exactly (`Question`, `Answer`,
//! `TTL`), so a parsed [`Resolution`] serializes back to the same document
//! minus any fields we do not model.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub name: String,

    /// Numeric DNS record type (1 = A, 28 = AAAA, ...).
    #[serde(rename = "type", default)]
    pub record_type: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub record_type: u16,

    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(rename = "Question", default, deserialize_with = "null_as_empty")]
    pub questions: Vec<Question>,

    #[serde(rename = "Answer", default, deserialize_with = "null_as_empty")]
    pub answers: Vec<Answer>,
}

impl Resolution {
    pub fn new(questions: Vec<Question>, answers: Vec<Answer>) -> Self {
        Self { questions, answers }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
