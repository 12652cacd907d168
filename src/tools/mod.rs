//! Agent tools for the Remote API.
//!
//! Every tool wraps one remote operation behind a name, a natural-language
//! description and a JSON Schema for its arguments. Tools are grouped by
//! resource:
//! - `time_off`: Time off records and the approval workflow
//! - `leave_policies`: Leave balances and policy details
//! - `employments`: Employment records
//! - `company_managers`: Managers who can approve requests
//! - `payroll`: Payroll runs and payslips
//! - `expenses`: Expense submission and review
//! - `timesheets`: Timesheet review
//! - `billing`: Billing documents and their breakdowns
//! - `incentives`: Bonuses and commissions
//!
//! All tools share one `RemoteApiClient` and one `Context`.

pub mod billing;
pub mod company_managers;
pub mod employments;
pub mod expenses;
pub mod incentives;
pub mod leave_policies;
pub mod payroll;
pub mod time_off;
pub mod timesheets;

use std::{fmt, future::Future, pin::Pin, sync::Arc};

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{error, warn};

use crate::{config::Context, error::RemoteError, http::RemoteApiClient};

/// What a tool hands back to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// The API's JSON reply, as sent.
    Data(Value),
    /// A human readable message: a confirmation or an error description.
    Text(String),
}

impl ToolOutput {
    /// Renders the output the way both hosts expect it: text verbatim, data as
    /// pretty-printed JSON.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Data(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// Checks that go beyond what the argument types can express.
pub trait Validate {
    fn validate(&self) -> Result<(), RemoteError> {
        Ok(())
    }
}

/// Arguments of tools that take none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

impl Validate for NoParams {}

pub(crate) fn check_pagination(page: Option<u32>, page_size: Option<u32>) -> Result<(), RemoteError> {
    if page == Some(0) {
        return Err(RemoteError::InvalidParams("page must be >= 1".to_string()));
    }
    match page_size {
        Some(size) if !(1..=100).contains(&size) => Err(RemoteError::InvalidParams(format!(
            "page_size must be between 1 and 100, got {size}"
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn require_id(field: &str, value: &str) -> Result<(), RemoteError> {
    if value.trim().is_empty() {
        return Err(RemoteError::InvalidParams(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub(crate) fn check_date(field: &str, value: &str) -> Result<chrono::NaiveDate, RemoteError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        RemoteError::InvalidParams(format!("{field} must be a date in YYYY-MM-DD format, got {value:?}"))
    })
}

/// Deserializes raw arguments and runs their extra checks.
///
/// Missing arguments are treated as an empty object so tools without
/// required fields can be called bare. Unknown keys are ignored.
fn parse_params<P: DeserializeOwned + Validate>(args: Value) -> Result<P, RemoteError> {
    let args = if args.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        args
    };
    let params: P =
        serde_json::from_value(args).map_err(|e| RemoteError::InvalidParams(e.to_string()))?;
    params.validate()?;
    Ok(params)
}

pub type ToolFuture = Pin<Box<dyn Future<Output = Result<ToolOutput, RemoteError>> + Send>>;

type Handler = Arc<
    dyn Fn(Arc<RemoteApiClient>, Arc<Context>, Value) -> Result<ToolFuture, RemoteError>
        + Send
        + Sync,
>;

/// One callable remote operation.
#[derive(Clone)]
pub struct Tool {
    /// Machine name, unique across the registry.
    pub method: &'static str,
    /// Display name, matched against the allow-list.
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema of the arguments.
    pub parameters: Arc<JsonObject>,
    /// Verb phrase used in failure messages, e.g. `list time off`.
    action: &'static str,
    handler: Handler,
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("method", &self.method)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Tool {
    /// Builds a tool whose arguments are `P` and whose body is `run`.
    ///
    /// The schema is generated from `P`; arguments are parsed and validated
    /// before `run` is called.
    pub fn new<P, F, Fut>(
        method: &'static str,
        name: &'static str,
        description: &'static str,
        action: &'static str,
        run: F,
    ) -> Self
    where
        P: DeserializeOwned + JsonSchema + Validate + Send + 'static,
        F: Fn(Arc<RemoteApiClient>, Arc<Context>, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ToolOutput, RemoteError>> + Send + 'static,
    {
        let parameters = schemars::schema_for!(P)
            .as_object()
            .cloned()
            .unwrap_or_default();
        let handler: Handler = Arc::new(
            move |client: Arc<RemoteApiClient>,
                  context: Arc<Context>,
                  args: Value|
                  -> Result<ToolFuture, RemoteError> {
                let params = parse_params::<P>(args)?;
                Ok(Box::pin(run(client, context, params)))
            },
        );
        Self {
            method,
            name,
            description,
            parameters: Arc::new(parameters),
            action,
            handler,
        }
    }

    /// How hosts report a failure that escaped `execute`.
    #[must_use]
    pub fn error_text(&self, error: &RemoteError) -> String {
        format!("Error in {}: {error}", self.method)
    }

    /// Runs the tool.
    ///
    /// # Errors
    /// Only `InvalidParams`, when the arguments do not match the schema or
    /// fail validation; the API is not called in that case. Failures of the
    /// call itself are reported as `ToolOutput::Text("Failed to ...")`.
    pub async fn execute(
        &self,
        client: Arc<RemoteApiClient>,
        context: Arc<Context>,
        args: Value,
    ) -> Result<ToolOutput, RemoteError> {
        let call = (self.handler)(client, context, args)?;
        match call.await {
            Ok(output) => Ok(output),
            Err(error) => {
                error!(tool = self.method, %error, "Failed to {}", self.action);
                Ok(ToolOutput::Text(format!("Failed to {}: {error}", self.action)))
            }
        }
    }
}

pub type ToolFactory = fn(&Context) -> Tool;

/// Every tool, in the order hosts list them.
pub const TOOL_FACTORIES: &[ToolFactory] = &[
    time_off::list_time_off,
    employments::list_employments,
    employments::show_employment,
    time_off::create_time_off,
    company_managers::list_company_managers,
    time_off::update_time_off,
    time_off::get_time_off,
    time_off::approve_time_off,
    time_off::cancel_time_off,
    time_off::decline_time_off,
    time_off::approve_cancel_request,
    time_off::decline_cancel_request,
    time_off::list_time_off_types,
    payroll::list_payroll_runs,
    payroll::show_payroll_run,
    leave_policies::list_leave_balances,
    leave_policies::list_leave_policies_details,
    expenses::list_expenses,
    expenses::create_expense,
    expenses::get_expense,
    expenses::update_expense,
    timesheets::list_timesheets,
    timesheets::get_timesheet,
    timesheets::approve_timesheet,
    timesheets::send_back_timesheet,
    payroll::list_payslips,
    billing::list_billing_documents,
    incentives::list_incentives,
    billing::show_billing_document,
    billing::get_billing_document_breakdown,
];

/// Instantiates the registry, keeping only allow-listed display names when
/// the context carries an allow-list.
pub fn get_all_tools(context: &Context) -> Vec<Tool> {
    let tools = TOOL_FACTORIES.iter().map(|factory| factory(context));
    let Some(allowed) = &context.allowed_tools else {
        return tools.collect();
    };

    let (kept, dropped): (Vec<Tool>, Vec<Tool>) =
        tools.partition(|tool| allowed.iter().any(|name| name == tool.name));
    if kept.is_empty() {
        let available = dropped.iter().map(|tool| tool.name).collect::<Vec<_>>();
        warn!(
            ?allowed,
            ?available,
            "No tools matched the allow-list; no tools will be exposed"
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashSet;

    fn context(allowed: Option<&[&str]>) -> Context {
        Context::new(
            "ra_test_12345",
            allowed.map(|names| names.iter().map(ToString::to_string).collect()),
        )
    }

    #[test]
    fn registry_exposes_every_tool_once() {
        let tools = get_all_tools(&context(None));
        assert_eq!(tools.len(), 30);

        let methods: HashSet<_> = tools.iter().map(|t| t.method).collect();
        let names: HashSet<_> = tools.iter().map(|t| t.name).collect();
        assert_eq!(methods.len(), tools.len());
        assert_eq!(names.len(), tools.len());
        assert_eq!(tools[0].method, "list_time_off");
        assert_eq!(tools[29].method, "get_billing_document_breakdown");
    }

    #[test]
    fn every_schema_is_an_object() {
        for tool in get_all_tools(&context(None)) {
            assert_eq!(
                tool.parameters.get("type"),
                Some(&json!("object")),
                "{}",
                tool.method
            );
            assert!(!tool.description.trim().is_empty(), "{}", tool.method);
        }
    }

    #[test]
    fn allow_list_keeps_registry_order() {
        let tools = get_all_tools(&context(Some(&["Get Time Off", "List Time Off"])));
        let names: Vec<_> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["List Time Off", "Get Time Off"]);
    }

    #[test]
    fn allow_list_matches_display_names_not_methods() {
        assert!(get_all_tools(&context(Some(&["list_time_off"]))).is_empty());
        assert!(get_all_tools(&context(Some(&[]))).is_empty());
    }

    #[test]
    fn pagination_bounds() {
        assert!(check_pagination(None, None).is_ok());
        assert!(check_pagination(Some(1), Some(100)).is_ok());
        assert!(check_pagination(Some(0), None).is_err());
        assert!(check_pagination(None, Some(0)).is_err());
        assert!(check_pagination(None, Some(101)).is_err());
    }

    #[test]
    fn dates_must_be_calendar_days() {
        assert!(check_date("start_date", "2025-02-28").is_ok());
        assert!(check_date("start_date", "2025-02-30").is_err());
        assert!(check_date("start_date", "28-02-2025").is_err());
    }

    #[test]
    fn failures_name_the_tool_method() {
        let tool = time_off::get_time_off(&context(None));
        let error = RemoteError::EmptyResponse("/timeoff/to-1".into());
        assert_eq!(
            tool.error_text(&error),
            format!("Error in get_time_off: {error}")
        );
    }

    #[test]
    fn text_output_is_verbatim_and_data_is_pretty() {
        assert_eq!(ToolOutput::Text("done".into()).into_text(), "done");
        assert_eq!(
            ToolOutput::Data(json!({ "a": 1 })).into_text(),
            "{\n  \"a\": 1\n}"
        );
    }
}
