//! Billing documents (invoices and credit notes) issued to the company.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    error::RemoteError,
    http::{Method, RemoteApiClient, to_json},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListBillingDocumentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "The month for the billing documents (in ISO-8601 format), (YYYY-MM format like \"2024-01\")."
    )]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Starts fetching records after the given page (>= 1).",
        range(min = 1)
    )]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Number of items per page (1-100), defaults to 20.",
        range(min = 1, max = 100)
    )]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListBillingDocument {
    pub id: String,
    pub bill_from: Option<String>,
    pub billing_document_period: String,
    pub billing_document_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListBillingDocumentsResponse {
    pub billing_documents: Vec<ListBillingDocument>,
    pub current_page: u32,
    pub total_count: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingDocumentItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub billing_document_amount: i64,
    pub billing_document_currency: Option<String>,
    pub employment_id: Option<String>,
    pub source_amount: i64,
    pub source_currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingDocument {
    pub id: String,
    pub billing_document_currency: String,
    pub billing_document_number: String,
    pub billing_document_period: String,
    pub billing_document_type: String,
    pub company_id: String,
    pub issued_date: String,
    pub items: Vec<BillingDocumentItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowBillingDocumentResponse {
    pub billing_document: BillingDocument,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct BillingDocumentBreakdownParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Breakdown rows differ per item type, so they stay untyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingDocumentBreakdownResponse {
    pub billing_document_breakdown: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoteApiClient {
    pub async fn list_billing_documents<R: DeserializeOwned>(
        &self,
        params: &ListBillingDocumentsParams,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["billing-documents"],
            Method::GET,
            Some(&to_json(params)?),
            None,
        )
        .await
    }

    pub async fn show_billing_document<R: DeserializeOwned>(
        &self,
        billing_document_id: &str,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["billing-documents", billing_document_id],
            Method::GET,
            None,
            None,
        )
        .await
    }

    pub async fn get_billing_document_breakdown<R: DeserializeOwned>(
        &self,
        billing_document_id: &str,
        params: &BillingDocumentBreakdownParams,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["billing-documents", billing_document_id, "breakdown"],
            Method::GET,
            Some(&to_json(params)?),
            None,
        )
        .await
    }
}
