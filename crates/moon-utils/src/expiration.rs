//! Expiration of stored excel files.

use chrono::{DateTime, Duration, Utc};

/// Days a stored file stays downloadable.
pub const EXPIRATION_DAYS: i64 = 30;

/// Now plus [`EXPIRATION_DAYS`].
pub fn expiration_date() -> DateTime<Utc> {
    expiration_date_from(Utc::now())
}

/// `now` plus [`EXPIRATION_DAYS`].
pub fn expiration_date_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(EXPIRATION_DAYS)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_thirty_days_later() {
        let now = Utc.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).unwrap();
        assert_eq!(
            expiration_date_from(now),
            Utc.with_ymd_and_hms(2024, 3, 11, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_expiration_date_is_in_the_future() {
        let before = Utc::now();
        let expires = expiration_date();
        assert!(expires >= before + Duration::days(EXPIRATION_DAYS));
        assert!(expires <= Utc::now() + Duration::days(EXPIRATION_DAYS));
    }
}
