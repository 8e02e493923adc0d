//! User-facing reports built from the trust verdict and gathered facts
//!
//! The two reports mirror the two verification modes: a host report for
//! "is this site who it says it is", and a contract report for "does this
//! site really belong to this contract".

pub mod builder;
pub mod provider;
pub mod types;

pub use crate::facts::ServiceError;
pub use builder::ReportBuilder;
pub use provider::FactProvider;
pub use types::{ContractReport, HostReport};
