use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Record keys arrive as JSON numbers or strings depending on the dataset;
/// both collapse into one canonical string key.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Int(i64),
    Text(String),
}

impl RawKey {
    fn into_string(self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                RawKey::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(NpcId);
id_newtype!(PropId);

/// A character that can receive gifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub icon: String,
    pub birthday: String,
}

/// An object that can be given to an [`Npc`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub id: PropId,
    pub prop_name: String,
    pub prop_icon: String,
    pub prop_type: String,
    pub prop_universality: String,
}

impl Prop {
    pub fn kind(&self) -> PropType {
        PropType::parse(&self.prop_type)
    }
}

/// Join record pairing one npc with one prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub npc: NpcId,
    pub prop: PropId,
    #[serde(deserialize_with = "deserialize_favor")]
    pub favor: i64,
    pub gift_level: String,
}

impl Gift {
    pub fn level(&self) -> GiftLevel {
        GiftLevel::parse(&self.gift_level)
    }

    pub fn is_disliked(&self) -> bool {
        self.favor <= 0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFavor {
    Int(i64),
    Text(String),
}

fn deserialize_favor<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawFavor::deserialize(deserializer)? {
        RawFavor::Int(value) => Ok(value),
        RawFavor::Text(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("favor is not an integer: {value:?}"))),
    }
}

/// Last dotted segment, lowercased: `GiftLevel.LOVE` and `love` both give `love`.
pub fn tag_key(raw: &str) -> String {
    raw.trim()
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GiftLevel {
    Love,
    Like,
    Dislike,
    Hate,
    Other(String),
}

impl GiftLevel {
    pub fn parse(raw: &str) -> Self {
        match tag_key(raw).as_str() {
            "love" | "excellent" => Self::Love,
            "like" => Self::Like,
            "dislike" => Self::Dislike,
            "hate" => Self::Hate,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical tag name, shared by style classes and reports.
    pub fn key(&self) -> &str {
        match self {
            Self::Love => "love",
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Hate => "hate",
            Self::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropType {
    CookablePc,
    CookableAck,
    Relic,
    Craftable,
    Other(String),
}

impl PropType {
    pub fn parse(raw: &str) -> Self {
        match tag_key(raw).as_str() {
            "cookable_pc" => Self::CookablePc,
            "cookable_ack" => Self::CookableAck,
            "relic" => Self::Relic,
            "craftable" => Self::Craftable,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::CookablePc => "cookable_pc",
            Self::CookableAck => "cookable_ack",
            Self::Relic => "relic",
            Self::Craftable => "craftable",
            Self::Other(tag) => tag,
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
