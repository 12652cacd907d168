//! Company manager tool.

use crate::{
    api::company_managers::ListCompanyManagersParams,
    config::Context,
    error::RemoteError,
    tools::{Tool, ToolOutput, Validate, check_pagination},
};

impl Validate for ListCompanyManagersParams {
    fn validate(&self) -> Result<(), RemoteError> {
        check_pagination(self.page, self.page_size)
    }
}

pub fn list_company_managers(_context: &Context) -> Tool {
    Tool::new::<ListCompanyManagersParams, _, _>(
        "list_company_managers",
        "List Company Managers",
        "This tool lists company managers (approvers) from the Remote API.\n\
         You can optionally filter by company_id, and supports pagination.",
        "list company managers",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_company_managers(&params).await?))
        },
    )
}
