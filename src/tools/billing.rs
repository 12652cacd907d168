//! Billing document tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    api::billing::{BillingDocumentBreakdownParams, ListBillingDocumentsParams},
    config::Context,
    error::RemoteError,
    tools::{Tool, ToolOutput, Validate, check_pagination, require_id},
};

impl Validate for ListBillingDocumentsParams {
    fn validate(&self) -> Result<(), RemoteError> {
        if let Some(period) = &self.period {
            chrono::NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d").map_err(|_| {
                RemoteError::InvalidParams(format!(
                    "period must be a month in YYYY-MM format, got {period:?}"
                ))
            })?;
        }
        check_pagination(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShowBillingDocumentParams {
    #[schemars(description = "The ID of the billing document to fetch.")]
    pub billing_document_id: String,
}

impl Validate for ShowBillingDocumentParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("billing_document_id", &self.billing_document_id)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BillingDocumentBreakdownToolParams {
    #[schemars(description = "The billing document's ID.")]
    pub billing_document_id: String,
    #[serde(rename = "type", default)]
    #[schemars(description = "Filters the results by the type of the billing breakdown item.")]
    pub kind: Option<String>,
}

impl Validate for BillingDocumentBreakdownToolParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("billing_document_id", &self.billing_document_id)
    }
}

pub fn list_billing_documents(_context: &Context) -> Tool {
    Tool::new::<ListBillingDocumentsParams, _, _>(
        "list_billing_documents",
        "List Billing Documents",
        "This tool lists billing documents for a company from the Remote API.\n\n\
         It takes the following parameters:\n\
         - period: The month for the billing documents (in ISO-8601 format), (YYYY-MM format like \"2024-01\").\n\
         - page: Starts fetching records after the given page (>= 1).\n\
         - page_size: Number of items per page (1-100), defaults to 20.",
        "list billing documents",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_billing_documents(&params).await?))
        },
    )
}

pub fn show_billing_document(_context: &Context) -> Tool {
    Tool::new::<ShowBillingDocumentParams, _, _>(
        "show_billing_document",
        "Show Billing Document",
        "This tool fetches a single billing document by its ID from the Remote API.\n\n\
         It takes the following parameters:\n\
         - billing_document_id: The ID of the billing document to fetch.\n\n\
         It returns the following data:\n\
         - billing_document: The billing document details.",
        "show billing document",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(
                client
                    .show_billing_document(&params.billing_document_id)
                    .await?,
            ))
        },
    )
}

pub fn get_billing_document_breakdown(_context: &Context) -> Tool {
    Tool::new::<BillingDocumentBreakdownToolParams, _, _>(
        "get_billing_document_breakdown",
        "Get Billing Document Breakdown",
        "This tool fetches the breakdown of a billing document by its ID from the Remote API.\n\n\
         It takes the following parameters:\n\
         - billing_document_id: The ID of the billing document to get the breakdown for.\n\
         - type: Filters the results by the type of the billing breakdown item.\n\n\
         It returns the following data:\n\
         - billing_document_breakdown: The detailed breakdown of the billing document.",
        "get billing document breakdown",
        |client, _context, params| async move {
            let filter = BillingDocumentBreakdownParams { kind: params.kind };
            Ok(ToolOutput::Data(
                client
                    .get_billing_document_breakdown(&params.billing_document_id, &filter)
                    .await?,
            ))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("2024-01"), true)]
    #[case(Some("2024-13"), false)]
    #[case(Some("January"), false)]
    #[case(None, true)]
    fn period_is_a_month(#[case] period: Option<&str>, #[case] valid: bool) {
        let params = ListBillingDocumentsParams {
            period: period.map(ToString::to_string),
            ..ListBillingDocumentsParams::default()
        };
        assert_eq!(params.validate().is_ok(), valid);
    }
}
