//!
//! ISO-8601 timestamps with millisecond precision.
//!

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::SubsecRound;
use chrono::Utc;

///
/// Returns the current time truncated to milliseconds.
///
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

///
/// Serializes a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(
        timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .as_str(),
    )
}

///
/// Deserializes any RFC 3339 timestamp.
///
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let string = <String as serde::Deserialize>::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(string.as_str())
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Stamped {
        #[serde(with = "super")]
        timestamp: chrono::DateTime<chrono::Utc>,
    }

    #[test]
    fn serializes_milliseconds_with_zulu_suffix() {
        let stamped = Stamped {
            timestamp: chrono::Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("Always valid"),
        };

        let json = serde_json::to_string(&stamped).expect("Serialization");
        assert_eq!(json, r#"{"timestamp":"2024-01-01T00:00:00.000Z"}"#);
    }

    #[test]
    fn accepts_timestamps_without_fraction() {
        let stamped: Stamped = serde_json::from_str(r#"{"timestamp":"2024-01-01T00:00:00Z"}"#)
            .expect("Deserialization");

        assert_eq!(
            stamped.timestamp,
            chrono::Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("Always valid")
        );
    }

    #[test]
    fn rejects_garbage() {
        let result = serde_json::from_str::<Stamped>(r#"{"timestamp":"yesterday"}"#);

        assert!(result.is_err());
    }
}
