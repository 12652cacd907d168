//! Contractor and employee timesheets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    api::SortOrder,
    error::RemoteError,
    http::{Method, RemoteApiClient, to_json},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetStatus {
    Submitted,
    Approved,
    SentBack,
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetSortBy {
    SubmittedAt,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTimesheetsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter timesheets by their status.")]
    pub status: Option<TimesheetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Sort order: asc or desc.")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Field to sort by. Only submitted_at is supported.")]
    pub sort_by: Option<TimesheetSortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Page number for pagination (>= 1).", range(min = 1))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of items per page (1-100).", range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursAndMinutes {
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeTracking {
    pub clock_in: String,
    pub clock_out: String,
    pub has_holiday_hours: bool,
    pub has_night_hours: bool,
    pub has_weekend_hours: bool,
    pub holiday_hours: HoursAndMinutes,
    pub night_hours: HoursAndMinutes,
    pub weekend_hours: HoursAndMinutes,
    pub total_hours: HoursAndMinutes,
    pub notes: Option<String>,
    pub timezone: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time_breakdown: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Timesheet {
    pub id: String,
    pub employment_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub country_code: String,
    pub submitted_at: Option<String>,
    pub approval_required: bool,
    pub notes: Option<String>,
    pub regular_hours: HoursAndMinutes,
    pub total_hours: HoursAndMinutes,
    pub break_hours: HoursAndMinutes,
    pub unpaid_break_hours: HoursAndMinutes,
    pub overtime_hours: HoursAndMinutes,
    pub holiday_hours: HoursAndMinutes,
    pub weekend_hours: HoursAndMinutes,
    pub night_hours: HoursAndMinutes,
    pub on_call_hours: HoursAndMinutes,
    pub time_trackings: Vec<TimeTracking>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetsPage {
    pub current_page: u32,
    pub timesheets: Vec<Timesheet>,
    pub total_count: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTimesheetsResponse {
    pub data: TimesheetsPage,
}

/// Returned by show and approve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetResponse {
    pub timesheet: Timesheet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendBackTimesheetParams {
    pub sent_back_reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentBackTimesheetResponse {
    pub timesheet: Timesheet,
    pub sent_back_reason: String,
}

impl RemoteApiClient {
    pub async fn list_timesheets<R: DeserializeOwned>(
        &self,
        params: &ListTimesheetsParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["timesheets"], Method::GET, Some(&to_json(params)?), None)
            .await
    }

    pub async fn get_timesheet<R: DeserializeOwned>(&self, id: &str) -> Result<R, RemoteError> {
        self.fetch(&["timesheets", id], Method::GET, None, None).await
    }

    pub async fn approve_timesheet<R: DeserializeOwned>(&self, id: &str) -> Result<R, RemoteError> {
        self.fetch(&["timesheets", id, "approve"], Method::POST, None, None)
            .await
    }

    /// Returns a submitted timesheet to the worker for changes.
    pub async fn send_back_timesheet<R: DeserializeOwned>(
        &self,
        id: &str,
        params: &SendBackTimesheetParams,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["timesheets", id, "send-back"],
            Method::POST,
            None,
            Some(&to_json(params)?),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_filters_use_wire_names() {
        let params = ListTimesheetsParams {
            status: Some(TimesheetStatus::SentBack),
            order: Some(SortOrder::Desc),
            sort_by: Some(TimesheetSortBy::SubmittedAt),
            ..ListTimesheetsParams::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "status": "sent_back", "order": "desc", "sort_by": "submitted_at" })
        );
    }

    #[test]
    fn timesheet_hours_parse() {
        let body = json!({
            "data": {
                "timesheets": [{
                    "id": "ts-1",
                    "status": "submitted",
                    "total_hours": { "hours": 38, "minutes": 30 },
                    "time_trackings": [{ "type": "regular", "total_hours": { "hours": 8 } }]
                }],
                "total_count": 1
            }
        });
        let parsed: ListTimesheetsResponse = serde_json::from_value(body).unwrap();
        let sheet = &parsed.data.timesheets[0];
        assert_eq!(sheet.total_hours, HoursAndMinutes { hours: 38, minutes: 30 });
        assert_eq!(sheet.time_trackings[0].kind, "regular");
        assert_eq!(sheet.time_trackings[0].total_hours.minutes, 0);
    }
}
