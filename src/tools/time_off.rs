//! Time off tools.
//!
//! Covers listing and reading time off, creating pre-approved time off,
//! editing it, and the approve / cancel / decline workflow including
//! cancellation requests raised by employees.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::{
    api::{
        company_managers::{ListCompanyManagersParams, ListCompanyManagersResponse},
        timeoff::{
            ListTimeOffParams, TimeOffDay, TimeOffParams, TimeOffStatus, TimeOffType,
            UpdateTimeOffParams,
        },
    },
    config::Context,
    error::RemoteError,
    http::RemoteApiClient,
    tools::{NoParams, Tool, ToolOutput, Validate, check_date, check_pagination, require_id},
};

impl Validate for ListTimeOffParams {
    fn validate(&self) -> Result<(), RemoteError> {
        check_pagination(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TimeOffIdParams {
    #[schemars(description = "The ID of the time off record.")]
    pub id: String,
}

impl Validate for TimeOffIdParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTimeOffParams {
    #[schemars(description = "The ID of the employment for which to create the time off.")]
    pub employment_id: String,
    #[schemars(description = "The start date of the time off (YYYY-MM-DD).")]
    pub start_date: String,
    #[schemars(description = "The end date of the time off (YYYY-MM-DD).")]
    pub end_date: String,
    #[schemars(
        description = "The type of time off. MUST be one of the available time off types from the list_time_off_types tool."
    )]
    pub timeoff_type: TimeOffType,
    #[schemars(description = "The timezone for the time off dates.")]
    pub timezone: String,
    #[serde(default)]
    #[schemars(description = "Optional notes about the time off request.")]
    pub notes: Option<String>,
    #[schemars(description = "Array of specific day entries with hours.")]
    pub timeoff_days: Vec<TimeOffDay>,
    #[serde(default)]
    #[schemars(
        description = "The user ID of the approver (company admin/manager). If not provided, the first company manager will be used."
    )]
    pub approver_id: Option<String>,
    #[serde(default)]
    #[schemars(
        description = "The approval datetime in ISO8601 format. If not provided, the current date and time will be used."
    )]
    pub approved_at: Option<String>,
}

impl Validate for CreateTimeOffParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("employment_id", &self.employment_id)?;
        let start = check_date("start_date", &self.start_date)?;
        let end = check_date("end_date", &self.end_date)?;
        if start > end {
            return Err(RemoteError::InvalidParams(format!(
                "start_date {} is after end_date {}",
                self.start_date, self.end_date
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTimeOffToolParams {
    #[schemars(description = "The ID of the time off to update.")]
    pub id: String,
    #[serde(flatten)]
    pub changes: UpdateTimeOffParams,
}

impl Validate for UpdateTimeOffToolParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ApproveTimeOffParams {
    #[schemars(
        description = "The UUID of the time off to approve. Must be in valid UUID format from the list_time_off tool."
    )]
    pub id: String,
    #[schemars(
        description = "The UUID of the approver. The approver's user ID. If not provided, use the first company manager from the list_company_managers tool."
    )]
    pub approver_id: String,
}

impl Validate for ApproveTimeOffParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)?;
        require_id("approver_id", &self.approver_id)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CancelTimeOffParams {
    #[schemars(description = "The UUID of the time off to cancel. Use list_time_off to get the UUID.")]
    pub id: String,
    #[schemars(description = "The reason for cancelling the time off.")]
    pub cancel_reason: String,
}

impl Validate for CancelTimeOffParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeclineTimeOffParams {
    #[schemars(description = "The ID of the time off to decline.")]
    pub id: String,
    #[schemars(description = "The reason for declining the time off.")]
    pub decline_reason: String,
}

impl Validate for DeclineTimeOffParams {
    fn validate(&self) -> Result<(), RemoteError> {
        require_id("id", &self.id)
    }
}

pub fn list_time_off(_context: &Context) -> Tool {
    Tool::new::<ListTimeOffParams, _, _>(
        "list_time_off",
        "List Time Off",
        "This tool lists Time Off records from the Remote API.\n\
         It can be filtered by employment_id, timeoff_type, status, and supports pagination and sorting.",
        "list time off",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.list_time_off(&params).await?))
        },
    )
}

/// Creates a pre-approved time off.
///
/// When no approver is given the first company manager is used, and the
/// approval time defaults to now.
async fn create(
    client: Arc<RemoteApiClient>,
    params: CreateTimeOffParams,
) -> Result<ToolOutput, RemoteError> {
    let approver_id = match params.approver_id.filter(|id| !id.is_empty()) {
        Some(id) => Some(id),
        None => {
            let managers: ListCompanyManagersResponse = client
                .list_company_managers(&ListCompanyManagersParams::default())
                .await?;
            let first = managers.first_manager().map(|m| m.user_id.clone());
            debug!(approver_id = ?first, "Defaulting approver to first company manager");
            first
        }
    };
    let approved_at = params
        .approved_at
        .filter(|at| !at.is_empty())
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    let payload = TimeOffParams {
        employment_id: params.employment_id,
        start_date: params.start_date,
        end_date: params.end_date,
        timeoff_type: params.timeoff_type,
        timezone: params.timezone,
        timeoff_days: params.timeoff_days,
        notes: params.notes,
        document: None,
        status: Some(TimeOffStatus::Approved),
        approver_id,
        approved_at: Some(approved_at),
    };
    Ok(ToolOutput::Data(client.create_time_off(&payload).await?))
}

pub fn create_time_off(_context: &Context) -> Tool {
    Tool::new::<CreateTimeOffParams, _, _>(
        "create_time_off",
        "Create Time Off",
        "This tool creates a PRE-APPROVED Time Off record in the Remote API.\n\
         It requires employment_id, start_date, end_date, timeoff_type, timezone, and timeoff_days.\n\
         IMPORTANT: Because this tool creates a time off request with an 'approved' status, \
         the 'timeoff_type' MUST be one of the available time off types from the list_time_off_types tool.",
        "create time off",
        |client, _context, params| create(client, params),
    )
}

pub fn update_time_off(_context: &Context) -> Tool {
    Tool::new::<UpdateTimeOffToolParams, _, _>(
        "update_time_off",
        "Update Time Off",
        "This tool updates a Time Off record in the Remote API.\n\
         You must provide the time off ID and any fields you wish to update.",
        "update time off",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(
                client.update_time_off(&params.id, &params.changes).await?,
            ))
        },
    )
}

pub fn get_time_off(_context: &Context) -> Tool {
    Tool::new::<TimeOffIdParams, _, _>(
        "get_time_off",
        "Get Time Off",
        "This tool fetches a single Time Off record by its ID from the Remote API.",
        "fetch time off",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(client.get_time_off(&params.id).await?))
        },
    )
}

pub fn approve_time_off(_context: &Context) -> Tool {
    Tool::new::<ApproveTimeOffParams, _, _>(
        "approve_time_off",
        "Approve Time Off",
        "This tool approves a Time Off request by its ID in the Remote API.",
        "approve time off",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(
                client
                    .approve_time_off(&params.id, &params.approver_id)
                    .await?,
            ))
        },
    )
}

pub fn cancel_time_off(_context: &Context) -> Tool {
    Tool::new::<CancelTimeOffParams, _, _>(
        "cancel_time_off",
        "Cancel Time Off",
        "This tool cancels a Time Off request by its ID in the Remote API.",
        "cancel time off",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(
                client
                    .cancel_time_off(&params.id, &params.cancel_reason)
                    .await?,
            ))
        },
    )
}

pub fn decline_time_off(_context: &Context) -> Tool {
    Tool::new::<DeclineTimeOffParams, _, _>(
        "decline_time_off",
        "Decline Time Off",
        "This tool declines a Time Off request by its ID in the Remote API.",
        "decline time off",
        |client, _context, params| async move {
            Ok(ToolOutput::Data(
                client
                    .decline_time_off(&params.id, &params.decline_reason)
                    .await?,
            ))
        },
    )
}

pub fn approve_cancel_request(_context: &Context) -> Tool {
    Tool::new::<TimeOffIdParams, _, _>(
        "approve_cancel_request",
        "Approve Cancel Request",
        "This tool approves a cancellation request for a Time Off by its ID in the Remote API.",
        "approve cancellation request",
        |client, _context, params| async move {
            match client.approve_cancel_request(&params.id).await? {
                Some(response) => Ok(ToolOutput::Data(response)),
                None => Ok(ToolOutput::Text(format!(
                    "Cancellation request for time off {} approved.",
                    params.id
                ))),
            }
        },
    )
}

pub fn decline_cancel_request(_context: &Context) -> Tool {
    Tool::new::<TimeOffIdParams, _, _>(
        "decline_cancel_request",
        "Decline Cancel Request",
        "This tool declines a cancellation request for a Time Off by its ID in the Remote API.",
        "decline cancellation request",
        |client, _context, params| async move {
            match client.decline_cancel_request(&params.id).await? {
                Some(response) => Ok(ToolOutput::Data(response)),
                None => Ok(ToolOutput::Text(format!(
                    "Cancellation request for time off {} declined.",
                    params.id
                ))),
            }
        },
    )
}

pub fn list_time_off_types(_context: &Context) -> Tool {
    Tool::new::<NoParams, _, _>(
        "list_time_off_types",
        "List Time Off Types",
        "This tool lists all available time off types from the Remote API.",
        "list time off types",
        |client, _context, _params| async move {
            Ok(ToolOutput::Data(client.list_time_off_types().await?))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_args() -> serde_json::Value {
        json!({
            "employment_id": "emp-1",
            "start_date": "2025-03-03",
            "end_date": "2025-03-04",
            "timeoff_type": "paid_time_off",
            "timezone": "Europe/Lisbon",
            "timeoff_days": [
                { "day": "2025-03-03", "hours": 8 },
                { "day": "2025-03-04", "hours": 8 }
            ]
        })
    }

    #[test]
    fn create_accepts_a_well_formed_request() {
        let params: CreateTimeOffParams = serde_json::from_value(create_args()).unwrap();
        assert!(params.validate().is_ok());
        assert!(params.approver_id.is_none());
    }

    #[test]
    fn create_rejects_reversed_dates() {
        let mut args = create_args();
        args["start_date"] = json!("2025-03-05");
        let params: CreateTimeOffParams = serde_json::from_value(args).unwrap();
        assert!(matches!(params.validate(), Err(RemoteError::InvalidParams(_))));
    }

    #[test]
    fn create_rejects_unknown_time_off_type() {
        let mut args = create_args();
        args["timeoff_type"] = json!("sabbatical");
        assert!(serde_json::from_value::<CreateTimeOffParams>(args).is_err());
    }

    #[test]
    fn update_splits_id_from_changes() {
        let params: UpdateTimeOffToolParams = serde_json::from_value(json!({
            "id": "to-1",
            "notes": "moved a day",
            "edit_reason": "travel"
        }))
        .unwrap();
        assert_eq!(params.id, "to-1");
        assert_eq!(
            serde_json::to_value(&params.changes).unwrap(),
            json!({ "notes": "moved a day", "edit_reason": "travel" })
        );
    }

    #[test]
    fn empty_ids_are_rejected() {
        let params = TimeOffIdParams { id: "  ".into() };
        assert!(params.validate().is_err());
    }
}
