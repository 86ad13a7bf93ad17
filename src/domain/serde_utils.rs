//! Serde utilities for API payloads.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;

/// Parses an ISO-8601 timestamp as sent by the API.
///
/// Values with an offset are converted to UTC. Values without one are
/// taken to be UTC already. A bare date is midnight UTC.
///
/// # Errors
///
/// Returns an error if the value matches none of the accepted layouts.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Ok(naive.and_utc()),
        Err(err) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
            .map_err(|_| err),
    }
}

/// Module to handle timestamps that may or may not carry a UTC offset.
pub mod timestamp {
    use super::{DateTime, Deserializer, Serializer, Utc, Visitor, de, fmt, parse_timestamp};

    /// Serializes a timestamp as RFC 3339.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// Deserializes a timestamp with or without offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string or cannot be parsed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = DateTime<Utc>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO-8601 timestamp")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_timestamp(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }

    /// Module to handle optional timestamps.
    pub mod option {
        use super::{DateTime, Deserializer, Serializer, Utc, Visitor, de, fmt};

        /// Serializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Returns an error if the serializer fails.
        #[allow(clippy::ref_option)]
        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(v) => super::serialize(v, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional timestamp; `null` becomes `None`.
        ///
        /// # Errors
        ///
        /// Returns an error if a present value cannot be parsed.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct OptionVisitor;

            impl<'de> Visitor<'de> for OptionVisitor {
                type Value = Option<DateTime<Utc>>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("optional ISO-8601 timestamp")
                }

                fn visit_none<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_unit<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    super::deserialize(deserializer).map(Some)
                }
            }

            deserializer.deserialize_option(OptionVisitor)
        }
    }
}

/// Treats an explicit `null` the same as a missing field.
///
/// # Errors
///
/// Returns an error if a present value cannot be deserialized as `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(with = "timestamp")]
        at: DateTime<Utc>,
        #[serde(default, with = "timestamp::option")]
        maybe: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_naive_timestamp_is_utc() {
        let parsed = parse_timestamp("2024-03-05T14:30:00.123456").unwrap();
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.day(), 5);
    }

    #[test]
    fn test_offset_timestamp_is_converted() {
        let parsed = parse_timestamp("2024-03-05T14:30:00-05:00").unwrap();
        assert_eq!(parsed.hour(), 19);
    }

    #[test]
    fn test_bare_date_is_midnight() {
        let parsed = parse_timestamp("2024-03-05").unwrap();
        assert_eq!(parsed.hour(), 0);
        assert_eq!(parsed.month(), 3);
    }

    #[test]
    fn test_garbage_timestamp_fails() {
        assert!(parse_timestamp("next tuesday").is_err());
    }

    #[test]
    fn test_struct_with_nulls() {
        let stamped: Stamped =
            serde_json::from_str(r#"{"at":"2024-01-01T00:00:00","maybe":null,"tags":null}"#)
                .unwrap();
        assert_eq!(stamped.at.year(), 2024);
        assert!(stamped.maybe.is_none());
        assert!(stamped.tags.is_empty());
    }

    #[test]
    fn test_struct_with_missing_optional() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":"2024-01-01T00:00:00Z"}"#).unwrap();
        assert!(stamped.maybe.is_none());
    }
}
