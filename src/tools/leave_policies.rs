//! Leave balance and leave policy tools, keyed by employment.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    config::Context,
    error::RemoteError,
    tools::{Tool, ToolOutput, Validate, require_id},
};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EmploymentIdParams {
    #[schemars(
        description = "The employment ID to fetch leave policies for. Must be a valid employment ID from the list_employments tool, in UUID format."
    )]
    pub employment_id: String,
}

impl Validate for EmploymentIdParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("employment_id", &self.employment_id)
    }
}

pub fn list_leave_balances(_context: &Context) -> Tool {
    Tool::new::<EmploymentIdParams, _, _>(
        "list_leave_balances",
        "List Leave Balances",
        "This tool lists all leave policy balances for a given employment from the Remote API.\n\
         It returns a summary of all leave policies and their balances for the specified employment_id.",
        "fetch leave balances",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(
                client
                    .get_leave_policies_summary(&params.employment_id)
                    .await?,
            ))
        },
    )
}

pub fn list_leave_policies_details(_context: &Context) -> Tool {
    Tool::new::<EmploymentIdParams, _, _>(
        "list_leave_policies_details",
        "List Leave Policies Details",
        "This tool lists all leave policy details for a given employment from the Remote API.\n\
         It returns a list of leave policies (custom or not) for the specified employment_id.",
        "fetch leave policies details",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(
                client
                    .get_leave_policies_details(&params.employment_id)
                    .await?,
            ))
        },
    )
}
