//! Canonical record shapes returned by the diary endpoints.
//!
//! One versioned schema: every field the current API revision documents,
//! with `Option` for fields the server omits or nulls out and container
//! defaults so partial objects still decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paginated envelope wrapping one page of the call diary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallReport<R> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_total: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub records_total: u32,
    #[serde(default = "Vec::new")]
    pub records: Vec<R>,
}

/// One call entry from the call diary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Call {
    /// Unique call identifier in Calltouch.
    pub call_id: String,
    /// Call phase at the moment of the request.
    pub callphase: String,
    /// Attribution model the call was attributed under.
    pub attribution: i64,
    pub call_tags: Option<Vec<Tag>>,
    pub date: String,
    /// Conversation duration, seconds as a string.
    pub duration: String,
    pub caller_number: String,
    pub redirect_number: String,
    pub phone_number: String,
    /// Manager assigned to this call via the lead-assignment API.
    pub manager: String,
    pub successful: bool,
    pub unique_call: String,
    pub target_call: String,
    pub uniq_target_call: String,
    pub callback_call: bool,
    pub city: String,
    pub source: String,
    pub medium: String,
    pub keyword: String,
    pub url: String,
    /// Page the visitor was on when the call happened.
    pub call_url: String,
    #[serde(rename = "ref")]
    pub referrer: String,
    pub hostname: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_content: String,
    pub utm_term: String,
    pub session_id: i64,
    pub ct_caller_id: String,
    /// Universal Analytics client identifier.
    pub client_id: Option<String>,
    /// Yandex.Metrica client identifier.
    pub ya_client_id: Option<String>,
    pub sip_call_id: String,
    pub user_agent: String,
    pub ip: String,
    /// Ring time before the call was answered.
    pub waiting_connect: i64,
    /// Call id from the customer's own PBX, if one was passed in.
    pub call_reference_id: String,
    pub map_visits: Option<Vec<MapVisit>>,
    /// Arbitrary third-party attributes previously pushed to Calltouch.
    pub attrs: Value,
    pub comments: Option<Vec<Comment>>,
    /// Transcript phrases in conversation order.
    pub phrases: Option<Vec<Phrase>>,
    pub additional_tags: Vec<ValueField>,
    /// Every order linked to the call.
    pub orders: Vec<CallOrder>,
    pub yandex_direct: Option<YandexDirect>,
    pub google_ad_words: Option<GoogleAdWords>,
    pub callback_info: CallbackInfo,
    pub ct_client_id: Option<i64>,
    pub dcm: Option<Dcm>,
    /// Phone numbers spoken during the conversation.
    pub phones_in_text: Option<Vec<String>>,
    pub ct_global_id: Option<i64>,
    /// Subpool the tracking number belongs to.
    pub sub_pool_name: Option<String>,
    pub status_details: String,
}

/// One lead (request) entry from the lead diary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lead {
    /// Creation time, Unix timestamp in milliseconds.
    pub date: i64,
    pub comments: Vec<Comment>,
    /// Creation time as `dd/mm/yyyy hh:mm:ss`.
    pub date_str: String,
    pub manager: String,
    /// The visit this lead was attributed to.
    pub session: Session,
    /// Name of the site form the lead was submitted through.
    pub subject: String,
    pub uniq_target_request: bool,
    pub unique_request: bool,
    pub yandex_direct: Option<YandexDirect>,
    pub google_ad_words: Option<GoogleAdWords>,
    /// Lead identifier on the customer's site.
    pub request_number: String,
    /// Lead identifier in Calltouch.
    pub request_id: i64,
    pub client: ClientInfo,
    pub orders: Vec<LeadOrder>,
    pub target_request: bool,
    pub map_visits: Option<Vec<MapVisit>>,
    pub ct_client_id: Option<i64>,
    pub dcm: Option<Vec<Dcm>>,
    pub ct_global_id: Option<i64>,
    /// Custom widget form fields.
    pub widget_info: Value,
    #[serde(rename = "RequestTags")]
    pub request_tags: Option<Vec<Vec<Tag>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tag {
    pub category: String,
    #[serde(rename = "type")]
    pub tag_type: String,
    pub names: Vec<String>,
}

/// An order (deal) linked to a call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallOrder {
    /// Actual contract amount.
    pub completed_amount: i64,
    pub completed_date: String,
    pub created_date: String,
    pub order_date: String,
    /// Order identifier in Calltouch.
    pub order_id: i64,
    /// Order identifier in the customer's CRM.
    pub order_number: String,
    /// Planned contract amount.
    pub planned_amount: i64,
}

/// An order (deal) linked to a lead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadOrder {
    pub order_id: i64,
    /// Creation time, Unix timestamp in milliseconds.
    pub date_created: i64,
    pub status: String,
    /// Order budget; the API serves this as a string.
    pub sum: String,
    pub order_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    /// Lead the comment was left on.
    pub request_id: i64,
    pub comment: String,
    pub party_id: i64,
    pub party_name: String,
}

/// The visit a lead was attributed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub session_id: i64,
    pub keywords: String,
    pub city: String,
    pub ip: String,
    pub source: String,
    pub medium: String,
    #[serde(rename = "ref")]
    pub referrer: String,
    /// Landing page; may differ from the page the lead was sent from.
    pub url: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_term: String,
    pub utm_content: String,
    pub utm_campaign: String,
    /// Google Client ID, present when Google Analytics is integrated.
    pub gua_client_id: String,
    pub attrs: Value,
    pub attribution: i64,
    /// Yandex Client ID, present when Yandex.Metrica is integrated.
    pub ya_client_id: String,
    pub ct_global_id: Option<i64>,
    pub browser: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientInfo {
    pub client_id: i64,
    pub fio: String,
    pub phones: Vec<ClientPhone>,
    pub contacts: Vec<ClientContact>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientPhone {
    pub phone_number: String,
    pub phone_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientContact {
    pub contact_type: String,
    pub contact_value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct YandexDirect {
    pub campaign_id: i64,
    pub ad_group_id: i64,
    pub ad_id: i64,
    pub criteria_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoogleAdWords {
    pub campaign_id: i64,
    pub ad_group_id: i64,
    pub creative_id: i64,
    pub criteria_id: i64,
}

/// DoubleClick Campaign Manager delivery data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dcm {
    #[serde(rename = "profileIdDCM")]
    pub profile_id_dcm: i64,
    pub floodlight_configuration_id: String,
    pub floodlight_activity_id: String,
    pub request_status: String,
    pub request_errors: Option<String>,
}

/// One entry of a visitor's site-visit history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapVisit {
    pub utm_source: String,
    pub session_date: String,
    pub city: String,
    pub ip: String,
    pub utm_term: String,
    pub utm_content: String,
    pub user_agent: String,
    pub session_id: i64,
    pub source: String,
    pub medium: String,
    pub utm_campaign: String,
    pub url: String,
    #[serde(rename = "ref")]
    pub referrer: String,
    pub additional_tags: Vec<Value>,
    pub utm_medium: String,
    pub gua_client_id: String,
    pub keyword: String,
    pub ct_client_id: i64,
    pub ct_global_id: Option<i64>,
}

/// One transcript phrase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Phrase {
    /// 1 for the operator, 0 for the client.
    pub channel: i64,
    /// Offset of the phrase start, `MM:SS`.
    pub time: String,
    pub message: String,
}

/// Contact fields from callback forms left in social networks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallbackInfo {
    pub fields: Vec<ValueField>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueField {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_decodes_from_partial_object() {
        let call: Call = serde_json::from_value(json!({
            "callId": "abc-123",
            "date": "21/06/2024 10:15:00",
            "successful": true,
            "ref": "https://example.com",
            "orders": [{"orderId": 7, "completedAmount": 1500}]
        }))
        .unwrap();
        assert_eq!(call.call_id, "abc-123");
        assert!(call.successful);
        assert_eq!(call.referrer, "https://example.com");
        assert_eq!(call.orders.len(), 1);
        assert_eq!(call.orders[0].order_id, 7);
        assert_eq!(call.client_id, None);
        assert!(call.attrs.is_null());
    }

    #[test]
    fn lead_decodes_with_capitalized_request_tags_key() {
        let lead: Lead = serde_json::from_value(json!({
            "requestId": 99,
            "date": 1718900000000i64,
            "RequestTags": [[{"category": "c", "type": "t", "names": ["n"]}]]
        }))
        .unwrap();
        assert_eq!(lead.request_id, 99);
        let tags = lead.request_tags.unwrap();
        assert_eq!(tags[0][0].tag_type, "t");
    }

    #[test]
    fn envelope_counters_decode() {
        let report: CallReport<Call> = serde_json::from_value(json!({
            "page": 2,
            "pageTotal": 5,
            "pageSize": 1000,
            "recordsTotal": 4321,
            "records": []
        }))
        .unwrap();
        assert_eq!(report.page, 2);
        assert_eq!(report.page_total, 5);
        assert_eq!(report.records_total, 4321);
        assert!(report.records.is_empty());
    }

    #[test]
    fn dcm_profile_id_uses_uppercase_suffix() {
        let dcm: Dcm = serde_json::from_value(json!({
            "profileIdDCM": 12,
            "requestStatus": "SENT"
        }))
        .unwrap();
        assert_eq!(dcm.profile_id_dcm, 12);
        assert_eq!(dcm.request_status, "SENT");
    }
}
