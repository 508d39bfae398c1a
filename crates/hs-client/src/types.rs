//! Scalar wrappers for HubSpot's loosely typed JSON.
//!
//! HubSpot encodes the same logical value differently depending on the
//! endpoint: booleans arrive as `true` or `"true"`, integers as `12` or `"12"`,
//! timestamps as ISO-8601 strings or epoch milliseconds, and any of them may be
//! `null` or `""`. The wrappers in this module accept every observed shape.
//!
//! Wrap a field in `Option` to keep "absent" apart from "present but empty":
//! a missing key or `null` decodes to `None`, while `""` decodes to the empty
//! value of the wrapper.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A HubSpot string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HsStr(String);

impl HsStr {
    /// Create a new string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// An explicitly empty string.
    ///
    /// Use this to clear a property; a `None` field is omitted from the
    /// request body instead of being sent as `""`.
    pub fn blank() -> Self {
        Self(String::new())
    }

    /// Returns true if the value is the empty string.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HsStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HsStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HsStr {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for HsStr {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A HubSpot boolean value.
///
/// Decodes from a JSON boolean or from the string `"true"`. Every other
/// input, including `"TRUE"`, numbers and nested values, decodes to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HsBool(bool);

impl HsBool {
    pub fn new(value: bool) -> Self {
        Self(value)
    }

    pub fn get(self) -> bool {
        self.0
    }
}

impl From<bool> for HsBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<HsBool> for bool {
    fn from(value: HsBool) -> Self {
        value.0
    }
}

impl fmt::Display for HsBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for HsBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HsBoolVisitor)
    }
}

struct HsBoolVisitor;

impl<'de> Visitor<'de> for HsBoolVisitor {
    type Value = HsBool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or a boolean string")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<HsBool, E> {
        Ok(HsBool(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<HsBool, E> {
        Ok(HsBool(v == "true"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<HsBool, E> {
        Ok(HsBool(false))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<HsBool, E> {
        Ok(HsBool(false))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<HsBool, E> {
        Ok(HsBool(false))
    }

    fn visit_unit<E: de::Error>(self) -> Result<HsBool, E> {
        Ok(HsBool(false))
    }

    fn visit_none<E: de::Error>(self) -> Result<HsBool, E> {
        Ok(HsBool(false))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<HsBool, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<HsBool, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(HsBool(false))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HsBool, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(HsBool(false))
    }
}

/// A HubSpot integer value.
///
/// Decodes from a JSON number or a numeric string. `""` decodes to zero.
/// Non-numeric strings are decode errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HsInt(i64);

impl HsInt {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for HsInt {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<HsInt> for i64 {
    fn from(value: HsInt) -> Self {
        value.0
    }
}

impl fmt::Display for HsInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for HsInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HsIntVisitor)
    }
}

struct HsIntVisitor;

impl<'de> Visitor<'de> for HsIntVisitor {
    type Value = HsInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<HsInt, E> {
        Ok(HsInt(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<HsInt, E> {
        i64::try_from(v)
            .map(HsInt)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<HsInt, E> {
        let digits = v.replace('"', "");
        if digits.is_empty() {
            return Ok(HsInt(0));
        }
        digits
            .parse::<i64>()
            .map(HsInt)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

/// A HubSpot timestamp.
///
/// The zero value (no instant) is distinct from an absent field: `""` and
/// `null` decode to zero on a bare `HsTime`, while `Option<HsTime>` maps
/// `null` to `None`.
///
/// Accepted inputs:
/// - ISO-8601 strings (any string containing `-`): RFC 3339, a date-time
///   without offset (taken as UTC), or a bare `YYYY-MM-DD` date.
/// - Epoch milliseconds, as a JSON number or a numeric string, integral or
///   fractional.
///
/// Other strings without a hyphen decode to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HsTime(Option<DateTime<Utc>>);

impl HsTime {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self(Some(time))
    }

    /// The zero timestamp.
    pub fn zero() -> Self {
        Self(None)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// The instant, or `None` for the zero timestamp.
    pub fn to_time(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Build a timestamp from epoch milliseconds.
    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::new)
    }

    fn from_fractional_millis(millis: f64) -> Option<Self> {
        if !millis.is_finite() {
            return None;
        }
        let secs = (millis / 1000.0).floor();
        let micros = ((millis - secs * 1000.0) * 1000.0).round() as u32;
        let nanos = (micros * 1000).min(999_999_999);
        DateTime::from_timestamp(secs as i64, nanos).map(Self::new)
    }

    fn parse_iso8601(value: &str) -> Result<Self, chrono::ParseError> {
        if let Ok(time) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self::new(time.with_timezone(&Utc)));
        }
        if let Ok(time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self::new(time.and_utc()));
        }
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")?;
        Ok(Self::new(date.and_time(NaiveTime::default()).and_utc()))
    }
}

impl From<DateTime<Utc>> for HsTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

/// Renders `2022-02-28 00:00:00 +0000 UTC`; the zero timestamp renders as `""`.
impl fmt::Display for HsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(time) => write!(f, "{}", time.format("%Y-%m-%d %H:%M:%S%.f +0000 UTC")),
            None => Ok(()),
        }
    }
}

impl Serialize for HsTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(time) => {
                serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            None => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for HsTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HsTimeVisitor)
    }
}

struct HsTimeVisitor;

impl<'de> Visitor<'de> for HsTimeVisitor {
    type Value = HsTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 timestamp or epoch milliseconds")
    }

    fn visit_unit<E: de::Error>(self) -> Result<HsTime, E> {
        Ok(HsTime::zero())
    }

    fn visit_none<E: de::Error>(self) -> Result<HsTime, E> {
        Ok(HsTime::zero())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<HsTime, E> {
        HsTime::from_unix_millis(v)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<HsTime, E> {
        i64::try_from(v)
            .ok()
            .and_then(HsTime::from_unix_millis)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<HsTime, E> {
        HsTime::from_fractional_millis(v)
            .ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<HsTime, E> {
        if v.is_empty() {
            return Ok(HsTime::zero());
        }
        if v.contains('-') {
            return HsTime::parse_iso8601(v).map_err(E::custom);
        }
        if let Ok(millis) = v.parse::<i64>() {
            return self.visit_i64(millis);
        }
        if let Ok(millis) = v.parse::<f64>() {
            return self.visit_f64(millis);
        }
        Ok(HsTime::zero())
    }
}

/// String rendering of optional HubSpot values.
///
/// An absent string renders as `""` and an absent timestamp as `"nil"`.
pub trait HsValueExt {
    fn to_hs_string(&self) -> String;
}

impl HsValueExt for Option<HsStr> {
    fn to_hs_string(&self) -> String {
        self.as_ref().map(|s| s.0.clone()).unwrap_or_default()
    }
}

impl HsValueExt for Option<HsTime> {
    fn to_hs_string(&self) -> String {
        match self {
            Some(time) => time.to_string(),
            None => "nil".to_string(),
        }
    }
}
