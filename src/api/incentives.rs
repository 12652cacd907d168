//! One-off and recurring incentives (bonuses, commissions).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    error::RemoteError,
    http::{Method, RemoteApiClient, to_json},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListIncentivesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter incentives by amount.")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter incentives by their amount tax type.")]
    pub amount_tax_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter incentives by their effective date.")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter incentives by their expected payout date.")]
    pub expected_payout_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter incentives by their note.")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter incentives by their recurring incentive ID.")]
    pub recurring_incentive_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter incentives by their status.")]
    pub status: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter incentives by their type.")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Filter incentives for a specific employment ID. Must be a valid employment ID from the list_employments tool."
    )]
    pub employment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Page number for pagination (>= 1).", range(min = 1))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of items per page (1-100).", range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Incentive {
    pub id: String,
    pub amount: i64,
    pub amount_tax_type: String,
    pub effective_date: Option<String>,
    pub employment_id: String,
    pub expected_payout_date: Option<String>,
    pub note: Option<String>,
    pub recurring_incentive_id: Option<String>,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListIncentivesResponse {
    pub current_page: u32,
    pub incentives: Vec<Incentive>,
    pub total_count: u32,
    pub total_pages: u32,
}

impl RemoteApiClient {
    pub async fn list_incentives<R: DeserializeOwned>(
        &self,
        params: &ListIncentivesParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["incentives"], Method::GET, Some(&to_json(params)?), None)
            .await
    }
}
