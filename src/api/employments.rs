//! Employment records.
//!
//! Employments carry country-specific data whose fields depend on the
//! employment's country; those are preserved in `Employment::country_data`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    error::RemoteError,
    http::{Method, RemoteApiClient, to_json},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    Created,
    CreatedAwaitingReserve,
    CreatedReservePaid,
    Initiated,
    Pending,
    Invited,
    Review,
    PreHire,
    JobTitleReview,
    Archived,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Contractor,
    DirectEmployee,
    Employee,
    GlobalPayrollEmployee,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListEmploymentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Company ID to filter by.")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Email to filter by.")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Status to filter by.")]
    pub status: Option<EmploymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Employment type to filter by.")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Page number for pagination (>= 1).", range(min = 1))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of items per page (1-100).", range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Employment {
    pub id: String,
    pub company_id: String,
    pub user_id: String,
    pub status: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub employment_type: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub country_data: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListEmploymentsResponse {
    pub current_page: u32,
    pub employments: Vec<Employment>,
    pub total_count: u32,
    pub total_pages: u32,
}

impl RemoteApiClient {
    /// Lists employments, except deleted ones.
    pub async fn list_employments<R: DeserializeOwned>(
        &self,
        params: &ListEmploymentsParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["employments"], Method::GET, Some(&to_json(params)?), None)
            .await
    }

    pub async fn show_employment<R: DeserializeOwned>(
        &self,
        employment_id: &str,
    ) -> Result<R, RemoteError> {
        self.fetch(&["employments", employment_id], Method::GET, None, None)
            .await
    }
}
