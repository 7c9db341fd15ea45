//! Serde adapters for the on-disk JSON format.
//!
//! Category files use "zero values" for unset fields: the zero instant for
//! timestamps and an empty string for enumerations. In memory both are `None`.

/// `Option<DateTime<FixedOffset>>` stored as an RFC 3339 string, with the zero
/// instant standing in for `None`
pub mod timestamp {
    use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const ZERO: &str = "0001-01-01T00:00:00Z";

    pub fn serialize<S>(value: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => {
                serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_str(ZERO),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => {
                let instant = DateTime::parse_from_rfc3339(text).map_err(serde::de::Error::custom)?;
                // Year 1 is the zero instant written for unset times
                Ok((instant.year() > 1).then_some(instant))
            }
        }
    }
}

/// `Option<T>` for string-valued enums, with `""` standing in for `None`
pub mod blank_as_none {
    use serde::de::value::StringDeserializer;
    use serde::de::{DeserializeOwned, IntoDeserializer};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if !text.trim().is_empty() => {
                let inner: StringDeserializer<D::Error> = text.into_deserializer();
                T::deserialize(inner).map(Some)
            }
            _ => Ok(None),
        }
    }
}
