//! Incentive tool.

use crate::{
    api::incentives::ListIncentivesParams,
    config::Context,
    error::RemoteError,
    tools::{Tool, ToolOutput, Validate, check_pagination},
};

impl Validate for ListIncentivesParams {
    fn validate(&self) -> Result<(), RemoteError> {
        check_pagination(self.page, self.page_size)
    }
}

pub fn list_incentives(_context: &Context) -> Tool {
    Tool::new::<ListIncentivesParams, _, _>(
        "list_incentives",
        "List Incentives",
        "This tool lists Incentives from the Remote API.\n\
         It can be filtered by employment_id, status, recurring_incentive_id, and supports pagination.",
        "list incentives",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_incentives(&params).await?))
        },
    )
}
