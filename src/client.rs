use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::options::{CallOptions, LeadOptions};
use crate::period::{Period, CALLS_DATE_FORMAT, LEADS_DATE_FORMAT};
use crate::record::RawRecord;
use crate::types::{Call, CallReport, Lead};

pub const DEFAULT_BASE_URL: &str = "https://api.calltouch.ru";

/// Records per page, fixed by the API.
pub const PAGE_LIMIT: u32 = 1000;

/// Default upper bound on pages walked per fetch. The server is supposed to
/// report `pageTotal`; the bound keeps a misbehaving one from turning the
/// fetch loop into an infinite loop.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Calltouch API client.
///
/// Holds only immutable state (token, base URL, HTTP client), so it is
/// cheap to clone and safe to share. Requests within one fetch are issued
/// strictly sequentially; every page await is a cancellation point, so
/// wrapping a fetch in `tokio::time::timeout` aborts it promptly.
/// Per-request timeouts belong on the `reqwest::Client` passed to
/// [`Client::with_http_client`].
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    access_token: String,
    max_pages: u32,
}

impl Client {
    pub fn new(access_token: impl Into<String>) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url parses"),
            access_token: access_token.into(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Overrides the API host, e.g. to point at a test server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Supplies a preconfigured HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Overrides the pagination safety bound.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetches the complete call diary for the window, walking every page.
    ///
    /// Records are returned in page order, then intra-page order as the
    /// server sent them. Any page failing discards the whole fetch; use
    /// [`Client::calls_diary_page`] to checkpoint at page granularity.
    pub async fn calls_diary(
        &self,
        site_id: u64,
        period: Period,
        options: &CallOptions,
    ) -> Result<Vec<Call>, Error> {
        self.fetch_call_pages(site_id, period, options).await
    }

    /// Same as [`Client::calls_diary`], but each record is decoded as a
    /// [`RawRecord`] string mapping instead of the fixed `Call` shape.
    pub async fn calls_diary_raw(
        &self,
        site_id: u64,
        period: Period,
        options: &CallOptions,
    ) -> Result<Vec<RawRecord>, Error> {
        self.fetch_call_pages(site_id, period, options).await
    }

    /// Fetches exactly one page of the call diary, envelope included.
    pub async fn calls_diary_page(
        &self,
        site_id: u64,
        period: Period,
        page: u32,
        options: &CallOptions,
    ) -> Result<CallReport<Call>, Error> {
        self.fetch_call_page(site_id, period, page, options).await
    }

    /// Fetches the lead (request) diary for the window.
    ///
    /// The endpoint returns a bare JSON array and exposes no pagination,
    /// so this is a single request regardless of window size.
    pub async fn leads_diary(
        &self,
        period: Period,
        options: &LeadOptions,
    ) -> Result<Vec<Lead>, Error> {
        let url = self.leads_url(period, options)?;
        let body = self.get(url).await?;
        let leads = serde_json::from_str(&body)?;
        Ok(leads)
    }

    async fn fetch_call_pages<R: DeserializeOwned>(
        &self,
        site_id: u64,
        period: Period,
        options: &CallOptions,
    ) -> Result<Vec<R>, Error> {
        let mut records = Vec::new();
        let mut page = 1u32;
        loop {
            let report: CallReport<R> =
                self.fetch_call_page(site_id, period, page, options).await?;
            debug!(
                "calls diary page {}/{}: {} records",
                report.page,
                report.page_total,
                report.records.len()
            );
            records.extend(report.records);
            if report.page >= report.page_total {
                break;
            }
            if page >= self.max_pages {
                return Err(Error::PageLimitExceeded {
                    limit: self.max_pages,
                });
            }
            page += 1;
        }
        Ok(records)
    }

    async fn fetch_call_page<R: DeserializeOwned>(
        &self,
        site_id: u64,
        period: Period,
        page: u32,
        options: &CallOptions,
    ) -> Result<CallReport<R>, Error> {
        let url = self.calls_url(site_id, period, page, options)?;
        let body = self.get(url).await?;
        let report = serde_json::from_str(&body)?;
        Ok(report)
    }

    async fn get(&self, url: Url) -> Result<String, Error> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown")
                    .to_string(),
            });
        }
        let body = response.text().await?;
        Ok(body)
    }

    fn calls_url(
        &self,
        site_id: u64,
        period: Period,
        page: u32,
        options: &CallOptions,
    ) -> Result<Url, Error> {
        period.validate()?;
        let mut url = self
            .base_url
            .join(&format!("calls-service/RestAPI/{}/calls-diary/calls", site_id))?;
        let (date_from, date_to) = period.format_with(CALLS_DATE_FORMAT);
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("clientApiId", &self.access_token)
                .append_pair("dateFrom", &date_from)
                .append_pair("dateTo", &date_to)
                .append_pair("page", &page.to_string())
                .append_pair("limit", &PAGE_LIMIT.to_string());
            for (name, value) in options.query_pairs() {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    fn leads_url(&self, period: Period, options: &LeadOptions) -> Result<Url, Error> {
        period.validate()?;
        let mut url = self.base_url.join("calls-service/RestAPI/requests/")?;
        let (date_from, date_to) = period.format_with(LEADS_DATE_FORMAT);
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("clientApiId", &self.access_token)
                .append_pair("dateFrom", &date_from)
                .append_pair("dateTo", &date_to);
            for (name, value) in options.query_pairs() {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn period() -> Period {
        Period::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        )
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn calls_url_embeds_site_id_and_parameters() {
        let client = Client::new("secret-token");
        let options = CallOptions {
            unique_only: Some(true),
            ..CallOptions::default()
        };
        let url = client.calls_url(12345, period(), 3, &options).unwrap();

        assert_eq!(url.host_str(), Some("api.calltouch.ru"));
        assert_eq!(url.path(), "/calls-service/RestAPI/12345/calls-diary/calls");

        let query = query_map(&url);
        assert_eq!(query["clientApiId"], "secret-token");
        assert_eq!(query["dateFrom"], "01/06/2024");
        assert_eq!(query["dateTo"], "30/06/2024");
        assert_eq!(query["page"], "3");
        assert_eq!(query["limit"], "1000");
        assert_eq!(query["uniqueOnly"], "true");
    }

    #[test]
    fn leads_url_has_no_pagination_parameters() {
        let client = Client::new("secret-token");
        let url = client
            .leads_url(period(), &LeadOptions::default())
            .unwrap();

        assert_eq!(url.path(), "/calls-service/RestAPI/requests/");

        let query = query_map(&url);
        assert_eq!(query["dateFrom"], "06/01/2024");
        assert_eq!(query["dateTo"], "06/30/2024");
        assert!(!query.contains_key("page"));
        assert!(!query.contains_key("limit"));
    }

    #[test]
    fn inverted_window_fails_before_building_a_url() {
        let client = Client::new("secret-token");
        let inverted = Period::new(
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        assert!(matches!(
            client.calls_url(1, inverted, 1, &CallOptions::default()),
            Err(Error::InvalidWindow { .. })
        ));
        assert!(matches!(
            client.leads_url(inverted, &LeadOptions::default()),
            Err(Error::InvalidWindow { .. })
        ));
    }
}
