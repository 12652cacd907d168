//! Typed request and response records for each Remote API resource, plus the
//! `RemoteApiClient` methods that call the matching endpoints.
//!
//! Endpoint methods decode into whatever the caller asks for: the records
//! defined here (`let run: PayrollRun = client.show_payroll_run(id).await?`)
//! or `serde_json::Value` to keep the reply exactly as the API sent it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod billing;
pub mod company_managers;
pub mod employments;
pub mod expenses;
pub mod incentives;
pub mod leave_policies;
pub mod payroll;
pub mod timeoff;
pub mod timesheets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}
