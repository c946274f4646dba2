//! Client SDK for the Calltouch call-tracking API.
//!
//! Fetches date-ranged diary reports (calls and leads), walking paginated
//! responses and decoding records either into the canonical typed shapes
//! or into normalized string maps.
//!
//! ```no_run
//! use calltouch::{CallOptions, Client, Period};
//! use chrono::NaiveDate;
//!
//! # async fn run() -> Result<(), calltouch::Error> {
//! let client = Client::new("client-api-id");
//! let period = Period::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
//! );
//! let options = CallOptions {
//!     unique_only: Some(true),
//!     ..CallOptions::default()
//! };
//! let calls = client.calls_diary(12345, period, &options).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod options;
pub mod period;
pub mod record;
pub mod types;

// Re-exports
pub use client::{Client, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, PAGE_LIMIT};
pub use error::Error;
pub use options::{CallOptions, LeadOptions};
pub use period::Period;
pub use record::RawRecord;
pub use types::{Call, CallReport, Lead};
