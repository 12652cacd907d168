//! Timesheet review tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    api::timesheets::{ListTimesheetsParams, SendBackTimesheetParams},
    config::Context,
    error::RemoteError,
    tools::{Tool, ToolOutput, Validate, check_pagination, require_id},
};

impl Validate for ListTimesheetsParams {
    fn validate(&self) -> Result<(), RemoteError> {
        check_pagination(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TimesheetIdParams {
    #[schemars(description = "The ID of the timesheet.")]
    pub id: String,
}

impl Validate for TimesheetIdParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SendBackTimesheetToolParams {
    #[schemars(description = "The ID of the timesheet to send back.")]
    pub id: String,
    #[schemars(description = "The reason for sending the timesheet back.")]
    pub sent_back_reason: String,
}

impl Validate for SendBackTimesheetToolParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)?;
        require_id("sent_back_reason", &self.sent_back_reason)
    }
}

pub fn list_timesheets(_context: &Context) -> Tool {
    Tool::new::<ListTimesheetsParams, _, _>(
        "list_timesheets",
        "List Timesheets",
        "This tool lists all timesheets from the Remote API. It can be used to get the timesheets \
         that requires action from the user (to approve or reject pending timesheet submissions).\n\
         It can be filtered by status and supports pagination and sorting.",
        "list timesheets",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_timesheets(&params).await?))
        },
    )
}

pub fn get_timesheet(_context: &Context) -> Tool {
    Tool::new::<TimesheetIdParams, _, _>(
        "get_timesheet",
        "Get Timesheet",
        "This tool fetches a single Timesheet record by its ID from the Remote API.",
        "fetch timesheet",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.get_timesheet(&params.id).await?))
        },
    )
}

pub fn approve_timesheet(_context: &Context) -> Tool {
    Tool::new::<TimesheetIdParams, _, _>(
        "approve_timesheet",
        "Approve Timesheet",
        "This tool approves a Timesheet by its ID in the Remote API.",
        "approve timesheet",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.approve_timesheet(&params.id).await?))
        },
    )
}

pub fn send_back_timesheet(_context: &Context) -> Tool {
    Tool::new::<SendBackTimesheetToolParams, _, _>(
        "send_back_timesheet",
        "Send Back Timesheet",
        "This tool sends a Timesheet back to the employee for review or modification by its ID in the Remote API.",
        "send back timesheet",
        |client, _context, params| async move {
            let body = SendBackTimesheetParams {
                sent_back_reason: params.sent_back_reason,
            };
            Ok(ToolOutput::Data(client.send_back_timesheet(&params.id, &body).await?))
        },
    )
}
