//! TLS certificate validity window

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validity window of the leaf certificate a site presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsInfo {
    pub issued_on: DateTime<Utc>,
    pub expires_on: DateTime<Utc>,
}

impl TlsInfo {
    pub fn new(issued_on: DateTime<Utc>, expires_on: DateTime<Utc>) -> Self {
        TlsInfo {
            issued_on,
            expires_on,
        }
    }

    /// Whether `now` falls strictly inside the validity window
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.issued_on < now && self.expires_on > now
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}
