//! Expenses submitted against an employment.
//!
//! Amounts are integers in the currency's minor unit (cents).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    error::RemoteError,
    http::{Method, RemoteApiClient, to_json},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    CarRental,
    CoworkingOffice,
    EducationTraining,
    Entertainment,
    Flight,
    Fuel,
    Gifts,
    Insurance,
    Lodging,
    Meals,
    Mileage,
    Other,
    ParkingToll,
    PerDiem,
    Subscription,
    TechEquipment,
    Telecommunication,
    Transport,
    Utilities,
    VaccinationTesting,
    #[serde(rename = "visa")]
    Visas,
    Wellness,
    Coworking,
    HomeOffice,
    PhoneUtilities,
    Travel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    Canceled,
    Pending,
    Declined,
    Approved,
    Processing,
    Reimbursed,
}

/// Review outcome accepted by an expense update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseDecision {
    Approved,
    Declined,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListExpensesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Page number for pagination (>= 1).", range(min = 1))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of items per page (1-100).", range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyDefinition {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReceipt {
    pub id: String,
    pub inserted_at: String,
    pub name: String,
    pub sub_type: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseReviewer {
    pub user_email: String,
    pub user_id: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub employment_id: String,
    pub amount: i64,
    pub converted_amount: i64,
    pub currency: Option<CurrencyDefinition>,
    pub converted_currency: Option<CurrencyDefinition>,
    pub expense_date: String,
    pub tax_amount: Option<i64>,
    pub converted_tax_amount: Option<i64>,
    pub receipts: Vec<FileReceipt>,
    pub status: String,
    pub category: String,
    pub invoice_period: Option<String>,
    pub notes: Option<String>,
    pub reason: Option<String>,
    pub reviewed_at: Option<String>,
    pub reviewer: Option<ExpenseReviewer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpensesPage {
    pub expenses: Vec<Expense>,
    pub current_page: u32,
    pub total_count: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListExpensesResponse {
    pub data: ExpensesPage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseData {
    pub expense: Expense,
}

/// Envelope shared by create, show and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseResponse {
    pub data: ExpenseData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Base64File {
    #[schemars(description = "Base64 encoded file content.")]
    pub content: String,
    #[schemars(description = "File name.")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateExpenseParams {
    #[schemars(description = "Date of the purchase, must be in the past (YYYY-MM-DD).")]
    pub expense_date: String,
    #[schemars(description = "Title of the expense.")]
    pub title: String,
    #[schemars(
        description = "Amount of the expense in the specified currency. The amount is in cents."
    )]
    pub amount: i64,
    #[schemars(description = "Three-letter code for the expense currency (e.g., USD, EUR).")]
    pub currency: String,
    #[schemars(description = "Category of the expense.")]
    pub category: ExpenseCategory,
    #[schemars(description = "The uuid of the employment to which this expense relates.")]
    pub employment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Tax amount for the expense.")]
    pub tax_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "A single receipt file (base64 encoded). Cannot be used with receipts."
    )]
    pub receipt: Option<Base64File>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "An array of up to 5 receipt files (base64 encoded). Cannot be used with receipt.",
        length(max = 5)
    )]
    pub receipts: Option<Vec<Base64File>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The date and time the expense was reviewed (ISO8601).")]
    pub reviewed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "User ID of the reviewer. If not provided, the user who created the token will be used."
    )]
    pub reviewer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Timezone for the expense dates.")]
    pub timezone: Option<String>,
}

/// Body of an expense review. `reason` is only sent with a decline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExpenseParams {
    pub status: ExpenseDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RemoteApiClient {
    pub async fn list_expenses<R: DeserializeOwned>(
        &self,
        params: &ListExpensesParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["expenses"], Method::GET, Some(&to_json(params)?), None)
            .await
    }

    /// Creates an expense that is already approved.
    pub async fn create_expense<R: DeserializeOwned>(
        &self,
        params: &CreateExpenseParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["expenses"], Method::POST, None, Some(&to_json(params)?))
            .await
    }

    pub async fn get_expense<R: DeserializeOwned>(&self, id: &str) -> Result<R, RemoteError> {
        self.fetch(&["expenses", id], Method::GET, None, None).await
    }

    pub async fn update_expense<R: DeserializeOwned>(
        &self,
        id: &str,
        params: &UpdateExpenseParams,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["expenses", id],
            Method::PATCH,
            None,
            Some(&to_json(params)?),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn visa_category_uses_singular_wire_name() {
        assert_eq!(serde_json::to_value(ExpenseCategory::Visas).unwrap(), "visa");
        assert_eq!(
            serde_json::from_value::<ExpenseCategory>(json!("parking_toll")).unwrap(),
            ExpenseCategory::ParkingToll
        );
    }

    #[test]
    fn approval_omits_reason() {
        let approve = UpdateExpenseParams {
            status: ExpenseDecision::Approved,
            reason: None,
        };
        assert_eq!(serde_json::to_value(&approve).unwrap(), json!({ "status": "approved" }));

        let decline = UpdateExpenseParams {
            status: ExpenseDecision::Declined,
            reason: Some("duplicate".into()),
        };
        assert_eq!(
            serde_json::to_value(&decline).unwrap(),
            json!({ "status": "declined", "reason": "duplicate" })
        );
    }

    #[test]
    fn expense_envelope_parses() {
        let body = json!({
            "data": {
                "expense": {
                    "id": "exp-1",
                    "title": "Train",
                    "amount": 1250,
                    "currency": { "code": "EUR", "name": "Euro", "symbol": "€" },
                    "status": "approved",
                    "category": "transport",
                    "receipts": []
                }
            }
        });
        let parsed: ExpenseResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.data.expense.amount, 1250);
        assert_eq!(
            parsed.data.expense.currency.map(|c| c.code),
            Some("EUR".to_string())
        );
    }
}
