//! Epoch-millisecond timestamp adapter
//!
//! Jenkins reports build start times as integer milliseconds since the Unix
//! epoch (`"timestamp": 1503146442652`) rather than as an RFC 3339 string,
//! so the stock chrono serde impls do not apply. [`EpochMillis`] wraps a
//! `DateTime<Utc>` and overrides the wire format: decoding accepts the raw
//! integer (quoted or not) and truncates to whole seconds, encoding emits
//! the integer form back.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a raw timestamp is not a decimal integer.
#[derive(Debug, Error)]
#[error("invalid epoch-millisecond timestamp {raw:?}")]
pub struct ParseTimestampError {
    /// The rejected input, quotes already stripped.
    raw: String,
    #[source]
    source: std::num::ParseIntError,
}

/// An absolute instant speaking Jenkins' epoch-millisecond wire format.
///
/// Precision is whole seconds: the decode direction truncates the
/// sub-second part away, so an instant survives an encode/decode round
/// trip truncated to the second it fell in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochMillis(DateTime<Utc>);

impl EpochMillis {
    /// Decode a raw epoch-millisecond value.
    ///
    /// Quote characters are stripped first; Jenkins itself sends a bare
    /// integer, but the value survives being re-quoted along the way.
    /// Anything that is not a decimal integer afterwards is a
    /// [`ParseTimestampError`].
    pub fn parse(raw: &str) -> Result<Self, ParseTimestampError> {
        let digits = raw.replace('"', "");
        let millis: i64 = digits.parse().map_err(|source| ParseTimestampError {
            raw: digits.clone(),
            source,
        })?;
        Ok(Self::from_millis(millis))
    }

    /// Interpret epoch milliseconds, truncated to whole seconds, UTC.
    pub fn from_millis(millis: i64) -> Self {
        // i64 epoch seconds can exceed chrono's representable range; such
        // values collapse to the epoch instead of panicking.
        Self(DateTime::from_timestamp(millis / 1000, 0).unwrap_or_default())
    }

    /// Epoch milliseconds as a decimal string, the reverse of [`parse`].
    ///
    /// [`parse`]: EpochMillis::parse
    pub fn encode(&self) -> String {
        self.0.timestamp_millis().to_string()
    }

    /// The wrapped UTC instant.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for EpochMillis {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

/// The Unix epoch, which is what a missing `timestamp` field decays to.
impl Default for EpochMillis {
    fn default() -> Self {
        Self(DateTime::<Utc>::default())
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl Serialize for EpochMillis {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0.timestamp_millis())
    }
}

impl<'de> Deserialize<'de> for EpochMillis {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochMillisVisitor)
    }
}

struct EpochMillisVisitor;

impl<'de> Visitor<'de> for EpochMillisVisitor {
    type Value = EpochMillis;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("epoch milliseconds as an integer or string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(EpochMillis::from_millis(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(value)
            .map(EpochMillis::from_millis)
            .map_err(|_| E::custom(format!("epoch milliseconds {value} out of range")))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        EpochMillis::parse(value).map_err(E::custom)
    }
}
