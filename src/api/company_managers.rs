//! Company managers, the users allowed to approve time off and expenses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    error::RemoteError,
    http::{Method, RemoteApiClient, to_json},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyManager {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListCompanyManagersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by company ID.")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Page number for pagination (>= 1).", range(min = 1))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of items per page (1-100).", range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyManagersPage {
    pub company_managers: Vec<CompanyManager>,
    pub current_page: u32,
    pub total_count: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListCompanyManagersResponse {
    pub data: CompanyManagersPage,
}

impl ListCompanyManagersResponse {
    /// The first listed manager, used as the default approver.
    #[must_use]
    pub fn first_manager(&self) -> Option<&CompanyManager> {
        self.data.company_managers.first()
    }
}

impl RemoteApiClient {
    pub async fn list_company_managers<R: DeserializeOwned>(
        &self,
        params: &ListCompanyManagersParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["company-managers"], Method::GET, Some(&to_json(params)?), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn managers_use_camel_case_fields() {
        let body = json!({
            "data": {
                "company_managers": [
                    { "userId": "u-1", "userName": "Ana", "userEmail": "ana@example.com", "role": "admin" },
                    { "userId": "u-2", "userName": "Rui", "userEmail": "rui@example.com", "role": "manager" }
                ],
                "current_page": 1,
                "total_count": 2,
                "total_pages": 1
            }
        });
        let parsed: ListCompanyManagersResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.first_manager().map(|m| m.user_id.as_str()), Some("u-1"));
        assert_eq!(parsed.data.total_count, 2);
    }

    #[test]
    fn empty_listing_has_no_first_manager() {
        let parsed: ListCompanyManagersResponse =
            serde_json::from_value(json!({ "data": { "company_managers": [] } })).unwrap();
        assert!(parsed.first_manager().is_none());
    }
}
