//! Payroll runs and payslips.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    error::RemoteError,
    http::{Method, RemoteApiClient, to_json},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollRun {
    pub id: String,
    pub status: String,
    pub period_start: String,
    pub period_end: String,
    pub processed_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListPayrollRunsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The payroll period to fetch. Must be in YYYY-MM-DD format.")]
    pub payroll_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Page number for pagination (>= 1).", range(min = 1))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of items per page (1-100).", range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPayrollRunsResponse {
    pub payroll_runs: Vec<PayrollRun>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListPayslipsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The ID of the employment to filter payslips for.")]
    pub employment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Filters by payslips issued_at field, for payslips issued on or after this date (YYYY-MM-DD)."
    )]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Filters by payslips issued_at field, for payslips issued on or before this date (YYYY-MM-DD)."
    )]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Filters by payslips expected_payout_date field, for payslips expected on or after this date (YYYY-MM-DD)."
    )]
    pub expected_payout_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Filters by payslips expected_payout_date field, for payslips expected on or before this date (YYYY-MM-DD)."
    )]
    pub expected_payout_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The page number for pagination (>= 1).", range(min = 1))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "The number of items per page for pagination (defaults to 20, max 100).",
        range(min = 1, max = 100)
    )]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payslip {
    pub id: String,
    pub employment_id: String,
    pub issued_at: String,
    pub expected_payout_date: Option<String>,
    pub net_pay_converted_amount: Option<i64>,
    pub net_pay_source_amount: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPayslipsResponse {
    pub current_page: u32,
    pub payslips: Vec<Payslip>,
    pub total_count: u32,
    pub total_pages: u32,
}

impl RemoteApiClient {
    pub async fn list_payroll_runs<R: DeserializeOwned>(
        &self,
        params: &ListPayrollRunsParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["payroll-runs"], Method::GET, Some(&to_json(params)?), None)
            .await
    }

    pub async fn show_payroll_run<R: DeserializeOwned>(
        &self,
        payroll_run_id: &str,
    ) -> Result<R, RemoteError> {
        self.fetch(&["payroll-runs", payroll_run_id], Method::GET, None, None)
            .await
    }

    pub async fn list_payslips<R: DeserializeOwned>(
        &self,
        params: &ListPayslipsParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["payslips"], Method::GET, Some(&to_json(params)?), None)
            .await
    }
}
