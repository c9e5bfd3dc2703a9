use chrono::{SecondsFormat, Utc};

/// RFC 3339 timestamp used for every persisted artifact.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
