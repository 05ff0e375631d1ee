//
//  kongo
//  api/common/time.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Flexible Timestamp Codec
//!
//! Kong reports `created_at`/`updated_at` as Unix seconds, but depending on the
//! endpoint and the server version the value arrives as a quoted string
//! (`"1422386534"`), a bare number, or an empty string for "never set". This
//! module decodes all of those shapes into a single [`Timestamp`] value.
//!
//! # Wire Format
//!
//! | Token | Result |
//! |-------|--------|
//! | `""` | [`Timestamp::ZERO`] |
//! | `"1422386534"` | 2015-01-27T20:42:14Z |
//! | `1422386534` | 2015-01-27T20:42:14Z |
//! | `{}`, `[]`, `true`, `"abc"` | [`TimestampFormatError`] |
//!
//! # Example
//!
//! ```rust
//! use kongo::api::common::Timestamp;
//!
//! let ts = Timestamp::parse("\"1422386534\"").unwrap();
//! assert_eq!(ts.to_string(), "2015-01-27T20:42:14Z");
//!
//! assert!(Timestamp::parse("").unwrap().is_zero());
//! assert!(Timestamp::parse("{}").is_err());
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Returned when a timestamp token is neither empty nor base-10 Unix seconds.
///
/// When decoding a response body this error is wrapped by serde and reaches
/// the caller as [`KongError::Decode`](super::KongError::Decode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timestamp {token:?}: expected an empty string or Unix seconds")]
pub struct TimestampFormatError {
    token: String,
}

impl TimestampFormatError {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The raw token that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// A point in time as reported by the Kong Admin API.
///
/// The zero value ([`Timestamp::ZERO`], also the [`Default`]) stands for an
/// empty timestamp on the wire. It carries no instant, so
/// [`Timestamp::as_datetime`] returns `None` for it.
///
/// Serializing writes the wire format back out: the zero value becomes `""`
/// and any other instant becomes a quoted Unix-seconds string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The empty timestamp.
    pub const ZERO: Self = Self(None);

    /// Creates a timestamp from whole seconds since the Unix epoch (UTC).
    ///
    /// Returns `None` when the value is outside the range chrono can represent.
    pub fn from_unix(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(|dt| Self(Some(dt)))
    }

    /// Decodes a raw scalar token.
    ///
    /// Surrounding `"` characters are stripped first. An empty remainder is
    /// the zero timestamp; otherwise the remainder must be a base-10 signed
    /// integer of Unix seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampFormatError`] for any other token, including JSON
    /// objects and arrays.
    pub fn parse(token: &str) -> Result<Self, TimestampFormatError> {
        let trimmed = token.trim_matches('"');
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }

        let seconds: i64 = trimmed
            .parse()
            .map_err(|_| TimestampFormatError::new(token))?;

        Self::from_unix(seconds).ok_or_else(|| TimestampFormatError::new(token))
    }

    /// Returns `true` for the empty timestamp.
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// The instant, or `None` for the empty timestamp.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Seconds since the Unix epoch, or `None` for the empty timestamp.
    pub fn unix_seconds(&self) -> Option<i64> {
        self.0.map(|dt| dt.timestamp())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    /// Sub-second precision is dropped; the wire format only carries whole seconds.
    fn from(value: DateTime<Utc>) -> Self {
        Self(DateTime::from_timestamp(value.timestamp(), 0).or(Some(value)))
    }
}

impl fmt::Display for Timestamp {
    /// RFC 3339 with second precision; the zero timestamp renders as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => Ok(()),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.unix_seconds() {
            Some(seconds) => serializer.serialize_str(&seconds.to_string()),
            None => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            other => other.to_string(),
        };
        Timestamp::parse(&token).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Record {
        created: Timestamp,
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(Timestamp::parse("").unwrap(), Timestamp::ZERO);
        assert_eq!(Timestamp::parse("\"\"").unwrap(), Timestamp::ZERO);
        assert!(Timestamp::ZERO.as_datetime().is_none());
    }

    #[test]
    fn test_parse_unix_seconds() {
        let ts = Timestamp::parse("1422386534").unwrap();
        assert_eq!(ts.unix_seconds(), Some(1_422_386_534));
        assert_eq!(ts.to_string(), "2015-01-27T20:42:14Z");

        let quoted = Timestamp::parse("\"1422386534\"").unwrap();
        assert_eq!(ts, quoted);
    }

    #[test]
    fn test_parse_negative_seconds() {
        let ts = Timestamp::parse("-86400").unwrap();
        assert_eq!(ts.to_string(), "1969-12-31T00:00:00Z");
    }

    #[test]
    fn test_parse_rejects_non_integer_tokens() {
        for token in ["{}", "[]", "abc", "1.5", "true", "2015-01-27T20:42:14Z"] {
            let err = Timestamp::parse(token).unwrap_err();
            assert_eq!(err.token(), token);
        }
    }

    #[test]
    fn test_parse_is_repeatable() {
        let first = Timestamp::parse("1522832400").unwrap();
        let second = Timestamp::parse("1522832400").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_from_json_string() {
        let record: Record = serde_json::from_str(r#"{"created": "1522832400"}"#).unwrap();
        let date = record.created.as_datetime().unwrap().date_naive();
        assert_eq!(date.to_string(), "2018-04-04");
    }

    #[test]
    fn test_decode_from_json_number() {
        let record: Record = serde_json::from_str(r#"{"created": 1522832400}"#).unwrap();
        assert_eq!(record.created.unix_seconds(), Some(1_522_832_400));
    }

    #[test]
    fn test_decode_empty_string() {
        let record: Record = serde_json::from_str(r#"{"created": ""}"#).unwrap();
        assert!(record.created.is_zero());
    }

    #[test]
    fn test_decode_object_fails() {
        let err = serde_json::from_str::<Record>(r#"{"created": {}}"#).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn test_serialize_wire_format() {
        let ts = Timestamp::from_unix(1_422_386_534).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"1422386534\"");
        assert_eq!(serde_json::to_string(&Timestamp::ZERO).unwrap(), "\"\"");
    }

    #[test]
    fn test_round_trip() {
        for ts in [
            Timestamp::from_unix(1_422_386_534).unwrap(),
            Timestamp::from_unix(-86_400).unwrap(),
            Timestamp::ZERO,
        ] {
            let bytes = serde_json::to_vec(&ts).unwrap();
            let decoded: Timestamp = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(decoded, ts);
        }
    }
}
