use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by the diary fetch operations.
///
/// Every failure is surfaced to the caller as-is; nothing is retried or
/// recovered internally. A failure on any page of a multi-page fetch
/// discards the pages accumulated so far.
#[derive(Debug, Error)]
pub enum Error {
    /// The query window is inverted. Checked before any request is built,
    /// so no network call is made.
    #[error("dateFrom {date_from} must not be after dateTo {date_to}")]
    InvalidWindow {
        date_from: NaiveDate,
        date_to: NaiveDate,
    },

    /// The server answered with a non-2xx status.
    #[error("status code - {status}, reason - {reason}")]
    Status { status: u16, reason: String },

    /// Connection-level failure (DNS, TLS, timeout, aborted body).
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not valid JSON or does not match the
    /// expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The paginated fetch walked `limit` pages without the server ever
    /// reporting the last one.
    #[error("fetched {limit} pages without reaching the reported page total")]
    PageLimitExceeded { limit: u32 },

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}
