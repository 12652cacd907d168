//! Expense tools.
//!
//! Amounts are in cents; the descriptions tell the agent so.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    api::expenses::{CreateExpenseParams, ExpenseDecision, ListExpensesParams, UpdateExpenseParams},
    config::Context,
    error::RemoteError,
    tools::{Tool, ToolOutput, Validate, check_date, check_pagination, require_id},
};

const MAX_RECEIPTS: usize = 5;

impl Validate for ListExpensesParams {
    fn validate(&self) -> Result<(), RemoteError> {
        check_pagination(self.page, self.page_size)
    }
}

impl Validate for CreateExpenseParams {
    fn validate(&self) -> Result<(), RemoteError> {
        check_date("expense_date", &self.expense_date)?;
        require_id("employment_id", &self.employment_id)?;
        if let Some(receipts) = &self.receipts {
            if self.receipt.is_some() {
                return Err(RemoteError::InvalidParams(
                    "receipt and receipts cannot be used together".to_string(),
                ));
            }
            if receipts.len() > MAX_RECEIPTS {
                return Err(RemoteError::InvalidParams(format!(
                    "at most {MAX_RECEIPTS} receipts are allowed, got {}",
                    receipts.len()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetExpenseParams {
    #[schemars(description = "The ID of the expense to fetch.")]
    pub id: String,
}

impl Validate for GetExpenseParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateExpenseToolParams {
    #[schemars(description = "The ID of the expense to update.")]
    pub id: String,
    #[schemars(description = "The new status for the expense.")]
    pub status: ExpenseDecision,
    #[serde(default)]
    #[schemars(
        description = "The reason for the status change. Should only be provided if the status is declined."
    )]
    pub reason: Option<String>,
}

impl Validate for UpdateExpenseToolParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)?;
        let has_reason = self.reason.as_deref().is_some_and(|r| !r.trim().is_empty());
        if self.status == ExpenseDecision::Declined && !has_reason {
            return Err(RemoteError::InvalidParams(
                "a reason is required when declining an expense".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<UpdateExpenseToolParams> for UpdateExpenseParams {
    fn from(params: UpdateExpenseToolParams) -> Self {
        let reason = match params.status {
            ExpenseDecision::Approved => None,
            ExpenseDecision::Declined => params.reason,
        };
        Self {
            status: params.status,
            reason,
        }
    }
}

pub fn list_expenses(_context: &Context) -> Tool {
    Tool::new::<ListExpensesParams, _, _>(
        "list_expenses",
        "List Expenses",
        "This tool lists Expense records from the Remote API. It can be used to get the expenses \
         that requires action from the user (to approve or reject pending expense requests). \
         Declined or Approved expenses do not require action from the user.\n\
         It supports pagination.\n\
         The amount is in cents, take that into account when returning the result, \
         {\"amount\": 1000, \"currency\": \"USD\"} means 10 dollars.",
        "list expenses",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_expenses(&params).await?))
        },
    )
}

pub fn create_expense(_context: &Context) -> Tool {
    Tool::new::<CreateExpenseParams, _, _>(
        "create_expense",
        "Create Expense",
        "This tool creates an approved expense in the Remote API.\n\
         The amount is expected to be in cents, confirm this with the user if unclear.",
        "create expense",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.create_expense(&params).await?))
        },
    )
}

pub fn get_expense(_context: &Context) -> Tool {
    Tool::new::<GetExpenseParams, _, _>(
        "get_expense",
        "Get Expense",
        "This tool fetches a single expense record by its ID from the Remote API.\n\
         The amount is in cents, take that into account when returning the result, \
         {\"amount\": 1000, \"currency\": \"USD\"} means 10 dollars.",
        "fetch expense",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.get_expense(&params.id).await?))
        },
    )
}

pub fn update_expense(_context: &Context) -> Tool {
    Tool::new::<UpdateExpenseToolParams, _, _>(
        "update_expense",
        "Update Expense",
        "This tool updates an expense (e.g., approve or decline) in the Remote API.",
        "update expense",
        |client, _context, params| async move {
            let id = params.id.clone();
            let update = UpdateExpenseParams::from(params);
            Ok(ToolOutput::Data(client.update_expense(&id, &update).await?))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expense_args() -> serde_json::Value {
        json!({
            "expense_date": "2025-01-15",
            "title": "Conference ticket",
            "amount": 25000,
            "currency": "EUR",
            "category": "education_training",
            "employment_id": "emp-1"
        })
    }

    fn receipt(name: &str) -> serde_json::Value {
        json!({ "content": "aGVsbG8=", "name": name })
    }

    #[test]
    fn expense_without_receipts_is_valid() {
        let params: CreateExpenseParams = serde_json::from_value(expense_args()).unwrap();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn more_than_five_receipts_are_rejected() {
        let mut args = expense_args();
        args["receipts"] = json!((0..6).map(|i| receipt(&format!("r{i}.pdf"))).collect::<Vec<_>>());
        let params: CreateExpenseParams = serde_json::from_value(args).unwrap();
        assert!(matches!(params.validate(), Err(RemoteError::InvalidParams(_))));
    }

    #[test]
    fn receipt_and_receipts_are_exclusive() {
        let mut args = expense_args();
        args["receipt"] = receipt("a.pdf");
        args["receipts"] = json!([receipt("b.pdf")]);
        let params: CreateExpenseParams = serde_json::from_value(args).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn expense_date_must_be_a_date() {
        let mut args = expense_args();
        args["expense_date"] = json!("last tuesday");
        let params: CreateExpenseParams = serde_json::from_value(args).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn decline_requires_a_reason_and_approve_drops_it() {
        let decline: UpdateExpenseToolParams =
            serde_json::from_value(json!({ "id": "exp-1", "status": "declined" })).unwrap();
        assert!(decline.validate().is_err());

        let approve: UpdateExpenseToolParams = serde_json::from_value(
            json!({ "id": "exp-1", "status": "approved", "reason": "looks fine" }),
        )
        .unwrap();
        assert!(approve.validate().is_ok());
        assert!(UpdateExpenseParams::from(approve).reason.is_none());
    }
}
