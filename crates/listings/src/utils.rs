use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, de};

pub fn deserialize_opt_epoch_seconds<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    // Reddit sends created_utc as fractional epoch seconds, or omits it.
    let seconds: Option<f64> = Option::deserialize(deserializer)?;

    seconds
        .map(|s| {
            DateTime::from_timestamp(s as i64, 0).ok_or_else(|| {
                de::Error::custom(format!("epoch seconds out of range: {}", s))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(default)]
        #[serde(deserialize_with = "super::deserialize_opt_epoch_seconds")]
        created_utc: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[test]
    fn parses_fractional_epoch_seconds() {
        let stamped: Stamped = serde_json::from_str(r#"{"created_utc":1721824001.5}"#).unwrap();
        assert_eq!(stamped.created_utc.unwrap().timestamp(), 1_721_824_001);
    }

    #[test]
    fn missing_and_null_timestamps_become_none() {
        let missing: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.created_utc, None);

        let null: Stamped = serde_json::from_str(r#"{"created_utc":null}"#).unwrap();
        assert_eq!(null.created_utc, None);
    }
}
