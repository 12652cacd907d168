//! Leave policy balances and details for an employment.
//!
//! The shape of a policy varies with the employment's country, so only the
//! common fields are typed and the rest is carried through untouched.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    api::timeoff::TimeOffLeavePolicy,
    error::RemoteError,
    http::{Method, RemoteApiClient},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeavePolicySummary {
    pub timeoff_type: Option<String>,
    pub leave_policy: Option<TimeOffLeavePolicy>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeavePoliciesSummaryResponse {
    pub data: Vec<LeavePolicySummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeavePolicyDetail {
    pub name: Option<String>,
    pub leave_type: Option<String>,
    pub leave_policy_variant_slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeavePoliciesDetailsResponse {
    pub data: Vec<LeavePolicyDetail>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoteApiClient {
    /// Balances of every leave policy attached to `employment_id`.
    pub async fn get_leave_policies_summary<R: DeserializeOwned>(
        &self,
        employment_id: &str,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["leave-policies", "summary", employment_id],
            Method::GET,
            None,
            None,
        )
        .await
    }

    pub async fn get_leave_policies_details<R: DeserializeOwned>(
        &self,
        employment_id: &str,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["leave-policies", "details", employment_id],
            Method::GET,
            None,
            None,
        )
        .await
    }
}
