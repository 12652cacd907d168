//! Payroll run and payslip tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    api::payroll::{ListPayrollRunsParams, ListPayslipsParams},
    config::Context,
    error::RemoteError,
    tools::{Tool, ToolOutput, Validate, check_date, check_pagination, require_id},
};

impl Validate for ListPayrollRunsParams {
    fn validate(&self) -> Result<(), RemoteError> {
        if let Some(period) = &self.payroll_period {
            check_date("payroll_period", period)?;
        }
        check_pagination(self.page, self.page_size)
    }
}

impl Validate for ListPayslipsParams {
    fn validate(&self) -> Result<(), RemoteError> {
        check_pagination(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShowPayrollRunParams {
    #[schemars(description = "The ID of the payroll run to fetch.")]
    pub payroll_run_id: String,
}

impl Validate for ShowPayrollRunParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("payroll_run_id", &self.payroll_run_id)
    }
}

pub fn list_payroll_runs(_context: &Context) -> Tool {
    Tool::new::<ListPayrollRunsParams, _, _>(
        "list_payroll_runs",
        "List Payroll Runs",
        "This tool lists all payroll runs for a company from the Remote API.\n\
         It supports pagination.",
        "list payroll runs",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_payroll_runs(&params).await?))
        },
    )
}

pub fn show_payroll_run(_context: &Context) -> Tool {
    Tool::new::<ShowPayrollRunParams, _, _>(
        "show_payroll_run",
        "Show Payroll Run",
        "This tool fetches a single payroll run by its ID from the Remote API.",
        "show payroll run",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(
                client.show_payroll_run(&params.payroll_run_id).await?,
            ))
        },
    )
}

pub fn list_payslips(_context: &Context) -> Tool {
    Tool::new::<ListPayslipsParams, _, _>(
        "list_payslips",
        "List Payslips",
        "This tool lists payslips for a company.\n\
         You can filter by employment_id, issue date range (start_date, end_date), \
         expected payout date range (expected_payout_start_date, expected_payout_end_date).\n\
         Pagination is supported with page and page_size.",
        "list payslips",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_payslips(&params).await?))
        },
    )
}
