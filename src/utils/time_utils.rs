use chrono::DateTime;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M";
}

/// Used for display purposes. Empty string for out-of-range timestamps.
pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    DateTime::from_timestamp(epoch_sec, 0)
        .map(|dt| dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_sec_to_utc() {
        assert_eq!(epoch_sec_to_utc(0), "1970-01-01 00:00");
        assert_eq!(epoch_sec_to_utc(1_700_000_000), "2023-11-14 22:13");
        assert_eq!(epoch_sec_to_utc(i64::MAX), "");
    }
}
