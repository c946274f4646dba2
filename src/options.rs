//! Report options for the diary endpoints.
//!
//! Every recognized flag is enumerated explicitly. A flag left at `None` is
//! omitted from the query string and the server applies its default; a set
//! flag is serialized as a literal `"true"`/`"false"` parameter under its
//! camelCase wire name.

/// Options accepted by the call diary endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Only unique calls.
    pub unique_only: Option<bool>,
    /// Only target calls.
    pub target_only: Option<bool>,
    /// Only unique-target calls.
    pub uniq_target_only: Option<bool>,
    /// Only callback calls.
    pub callback_only: Option<bool>,
    /// Include the caller's site-visit history.
    pub with_map_visits: Option<bool>,
    /// Include orders linked to the call.
    pub with_orders: Option<bool>,
    /// Include call tags.
    pub with_call_tags: Option<bool>,
    /// Include comments left in the call-log player.
    pub with_comments: Option<bool>,
    /// Include Yandex.Direct campaign data.
    pub with_yandex_direct: Option<bool>,
    /// Include Google AdWords campaign data.
    pub with_google_adwords: Option<bool>,
    /// Include the call transcript.
    pub with_text: Option<bool>,
    /// Include DoubleClick Campaign Manager data.
    pub with_dcm: Option<bool>,
}

impl CallOptions {
    fn flags(&self) -> [(&'static str, Option<bool>); 12] {
        [
            ("uniqueOnly", self.unique_only),
            ("targetOnly", self.target_only),
            ("uniqTargetOnly", self.uniq_target_only),
            ("callbackOnly", self.callback_only),
            ("withMapVisits", self.with_map_visits),
            ("withOrders", self.with_orders),
            ("withCallTags", self.with_call_tags),
            ("withComments", self.with_comments),
            ("withYandexDirect", self.with_yandex_direct),
            ("withGoogleAdwords", self.with_google_adwords),
            ("withText", self.with_text),
            ("withDcm", self.with_dcm),
        ]
    }

    /// Query parameters for every flag that is set.
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        serialize_flags(&self.flags())
    }

    /// Rebuilds options from query parameters. Unrecognized keys and
    /// non-boolean values are ignored and fall back to the server default.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = CallOptions::default();
        for (name, value) in pairs {
            let Some(flag) = parse_flag(value) else {
                continue;
            };
            match name {
                "uniqueOnly" => options.unique_only = Some(flag),
                "targetOnly" => options.target_only = Some(flag),
                "uniqTargetOnly" => options.uniq_target_only = Some(flag),
                "callbackOnly" => options.callback_only = Some(flag),
                "withMapVisits" => options.with_map_visits = Some(flag),
                "withOrders" => options.with_orders = Some(flag),
                "withCallTags" => options.with_call_tags = Some(flag),
                "withComments" => options.with_comments = Some(flag),
                "withYandexDirect" => options.with_yandex_direct = Some(flag),
                "withGoogleAdwords" => options.with_google_adwords = Some(flag),
                "withText" => options.with_text = Some(flag),
                "withDcm" => options.with_dcm = Some(flag),
                _ => {}
            }
        }
        options
    }
}

/// Options accepted by the lead diary endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadOptions {
    /// Include the visitor's site-visit history.
    pub with_map_visits: Option<bool>,
    /// Include tags assigned to the lead.
    pub with_request_tags: Option<bool>,
    /// Include Yandex.Direct campaign data.
    pub with_yandex_direct: Option<bool>,
    /// Include Google AdWords campaign data.
    pub with_google_adwords: Option<bool>,
    /// Include DoubleClick Campaign Manager data.
    pub with_dcm: Option<bool>,
}

impl LeadOptions {
    fn flags(&self) -> [(&'static str, Option<bool>); 5] {
        [
            ("withMapVisits", self.with_map_visits),
            ("withRequestTags", self.with_request_tags),
            ("withYandexDirect", self.with_yandex_direct),
            ("withGoogleAdwords", self.with_google_adwords),
            ("withDcm", self.with_dcm),
        ]
    }

    /// Query parameters for every flag that is set.
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        serialize_flags(&self.flags())
    }

    /// Rebuilds options from query parameters. Unrecognized keys and
    /// non-boolean values are ignored and fall back to the server default.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = LeadOptions::default();
        for (name, value) in pairs {
            let Some(flag) = parse_flag(value) else {
                continue;
            };
            match name {
                "withMapVisits" => options.with_map_visits = Some(flag),
                "withRequestTags" => options.with_request_tags = Some(flag),
                "withYandexDirect" => options.with_yandex_direct = Some(flag),
                "withGoogleAdwords" => options.with_google_adwords = Some(flag),
                "withDcm" => options.with_dcm = Some(flag),
                _ => {}
            }
        }
        options
    }
}

fn serialize_flags(flags: &[(&'static str, Option<bool>)]) -> Vec<(&'static str, &'static str)> {
    flags
        .iter()
        .filter_map(|(name, value)| value.map(|v| (*name, if v { "true" } else { "false" })))
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
