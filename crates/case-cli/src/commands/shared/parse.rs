use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value via serde, accepting hyphens and any case.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_timestamp(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    anyhow::bail!("invalid {field} '{raw}': expected an RFC 3339 timestamp or YYYY-MM-DD")
}

#[cfg(test)]
mod tests {
    use case_core::enums::NotificationKind;
    use chrono::{TimeZone, Utc};

    use super::{parse_enum, parse_timestamp};

    #[test]
    fn parses_snake_case_enum() {
        let kind: NotificationKind =
            parse_enum("document_request", "kind").expect("kind should parse");
        assert_eq!(kind, NotificationKind::DocumentRequest);
    }

    #[test]
    fn parses_hyphenated_uppercase_alias() {
        let kind: NotificationKind = parse_enum("Case-Update", "kind").expect("kind should parse");
        assert_eq!(kind, NotificationKind::CaseUpdate);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<NotificationKind>("nonsense", "kind").expect_err("should fail");
        assert!(err.to_string().contains("invalid kind 'nonsense'"));
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        let ts = parse_timestamp("2026-03-01T12:30:00Z", "--since").expect("should parse");
        assert_eq!(ts, Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        let ts = parse_timestamp("2026-03-01", "--since").expect("should parse");
        assert_eq!(ts, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_other_formats() {
        let err = parse_timestamp("03/01/2026", "--until").expect_err("should fail");
        assert!(err.to_string().contains("--until"));
    }
}
