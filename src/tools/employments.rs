//! Employment tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    api::employments::ListEmploymentsParams,
    config::Context,
    error::RemoteError,
    tools::{Tool, ToolOutput, Validate, check_pagination, require_id},
};

impl Validate for ListEmploymentsParams {
    fn validate(&self) -> Result<(), RemoteError> {
        check_pagination(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShowEmploymentParams {
    #[schemars(description = "The ID of the employment to fetch.")]
    pub employment_id: String,
}

impl Validate for ShowEmploymentParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("employment_id", &self.employment_id)
    }
}

pub fn list_employments(_context: &Context) -> Tool {
    Tool::new::<ListEmploymentsParams, _, _>(
        "list_employments",
        "List Employments",
        "This tool lists all employments from the Remote API, except for deleted ones.\n\
         It supports pagination. Note that the response includes country-specific data,\n\
         where the exact fields will vary depending on which country the employment is in.",
        "list employments",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_employments(&params).await?))
        },
    )
}

pub fn show_employment(_context: &Context) -> Tool {
    Tool::new::<ShowEmploymentParams, _, _>(
        "show_employment",
        "Show Employment",
        "This tool fetches a single employment record by its ID from the Remote API.\n\
         It returns detailed information about the employment, including country-specific data\n\
         that varies depending on which country the employment is in.",
        "show employment",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.show_employment(&params.employment_id).await?))
        },
    )
}
