//! Domain registration record

use crate::facts::error::ServiceError;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Registration dates of a domain, as reported by WHOIS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecordInfo {
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl DomainRecordInfo {
    /// Build a record from the RFC 3339 dates a WHOIS parser extracted
    pub fn from_rfc3339(created: &str, updated: &str, expires: &str) -> Result<Self, ServiceError> {
        Ok(DomainRecordInfo {
            created: parse_date("created", created)?,
            updated: parse_date("updated", updated)?,
            expires: parse_date("expiration", expires)?,
        })
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}

fn parse_date(field: &str, value: &str) -> Result<DateTime<Utc>, ServiceError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|date: DateTime<FixedOffset>| date.with_timezone(&Utc))
        .map_err(|e| {
            error!("whois {} date missing or malformed: {}", field, e);
            ServiceError::WhoIsParsing
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_rfc3339() {
        let record = DomainRecordInfo::from_rfc3339(
            "2019-03-04T10:00:00Z",
            "2023-03-01T08:30:00+02:00",
            "2025-03-04T10:00:00Z",
        )
        .unwrap();

        assert_eq!(record.created, Utc.with_ymd_and_hms(2019, 3, 4, 10, 0, 0).unwrap());
        assert_eq!(record.updated, Utc.with_ymd_and_hms(2023, 3, 1, 6, 30, 0).unwrap());
        assert!(record.is_expired_at(Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap()));
        assert!(!record.is_expired_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_missing_date_is_parse_error() {
        let result =
            DomainRecordInfo::from_rfc3339("2019-03-04T10:00:00Z", "", "2025-03-04T10:00:00Z");
        assert_eq!(result, Err(ServiceError::WhoIsParsing));
    }

    #[test]
    fn test_date_only_is_rejected() {
        let result = DomainRecordInfo::from_rfc3339("2019-03-04", "2019-03-04", "2019-03-04");
        assert_eq!(result, Err(ServiceError::WhoIsParsing));
    }
}
