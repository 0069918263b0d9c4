use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity {
    fn id(&self) -> &ID;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Identifier of a stored record. New ids are derived from the timestamp at
/// which the record was created, like `rappel-1613862000000`, so records
/// created in the same millisecond would collide. Ids received over the wire
/// are treated as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ID(String);
impl ID {
    pub fn from_timestamp(prefix: &str, timestamp_millis: i64) -> Self {
        Self(format!("{}-{}", prefix, timestamp_millis))
    }

    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    pub fn inner_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(InvalidIDError::Malformed(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IDVisitor;

        impl<'de> Visitor<'de> for IDVisitor {
            type Value = ID;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid string id representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ID>()
                    .map_err(|_| E::custom(format!("Malformed id: {}", value)))
            }
        }

        deserializer.deserialize_str(IDVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_timestamped_ids() {
        let id = ID::from_timestamp("rappel", 1613862000000);
        assert_eq!(id.as_string(), "rappel-1613862000000");
    }

    #[test]
    fn parses_opaque_ids() {
        let id: ID = "DEVIS-2024-001".parse().expect("To parse id");
        assert_eq!(id.to_string(), "DEVIS-2024-001");
        assert!("".parse::<ID>().is_err());
        assert!("  ".parse::<ID>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ID::from_timestamp("email", 1613862000000);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"email-1613862000000\"");
        let back: ID = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
