use std::{borrow::Borrow, fmt::Display};
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

/// A UTC timestamp with subsecond precision.
///
/// Every persisted record carries a creation and an update timestamp of this
/// type. Values are normalized to UTC on construction and (de)serialize as
/// RFC 3339 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DateTime(#[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))] OffsetDateTime);

impl DateTime {
    /// The current time.
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

impl<T: Borrow<OffsetDateTime>> From<T> for DateTime {
    fn from(value: T) -> Self {
        Self(value.borrow().to_offset(UtcOffset::UTC))
    }
}

impl From<DateTime> for OffsetDateTime {
    fn from(value: DateTime) -> Self {
        value.0
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for DateTime {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> std::borrow::Cow<'static, str> {
        "DateTime".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "format": "date-time",
        })
    }
}
