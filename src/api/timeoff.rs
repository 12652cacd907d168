//! Time off records, time off types and the time off approval workflow.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};

use crate::{
    api::SortOrder,
    error::RemoteError,
    http::{Method, RemoteApiClient, to_json},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffType {
    PaidTimeOff,
    SickLeave,
    PublicHoliday,
    UnpaidLeave,
    ExtendedLeave,
    InLieuTime,
    MaternityLeave,
    PaternityLeave,
    ParentalLeave,
    Bereavement,
    MilitaryLeave,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffStatus {
    Approved,
    Cancelled,
    Declined,
    Requested,
    Taken,
    CancelRequested,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTimeOffParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Page number for pagination (>= 1).", range(min = 1))]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of items per page (1-100).", range(min = 1, max = 100))]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter time off for a specific employment ID.")]
    pub employment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter time off by its type (e.g., sick_leave, paid_time_off).")]
    pub timeoff_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter time off by its status (e.g., approved, requested).")]
    pub status: Option<TimeOffStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Sort order: asc or desc.")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Field to sort by (e.g., timeoff_type, start_date).")]
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOffDocument {
    pub id: String,
    pub inserted_at: String,
    pub name: String,
    pub sub_type: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOffLeavePolicy {
    pub leave_policy_variant_slug: String,
    pub leave_type: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimeOffDay {
    #[schemars(description = "The specific day for the time off entry (YYYY-MM-DD).")]
    pub day: String,
    #[schemars(description = "The number of hours for this specific day.")]
    pub hours: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOffEntry {
    pub id: String,
    pub employment_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub timeoff_type: String,
    pub timezone: Option<String>,
    pub notes: Option<String>,
    pub approved_at: Option<String>,
    pub approver_id: Option<String>,
    pub automatic: bool,
    pub cancel_reason: Option<String>,
    pub cancelled_at: Option<String>,
    pub document: Option<TimeOffDocument>,
    pub leave_policy: Option<TimeOffLeavePolicy>,
    pub timeoff_days: Vec<TimeOffDay>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTimeOffResponse {
    pub current_page: u32,
    pub timeoffs: Vec<TimeOffEntry>,
    pub total_count: u32,
    pub total_pages: u32,
}

/// Payload of a time off creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffParams {
    pub employment_id: String,
    pub start_date: String,
    pub end_date: String,
    pub timeoff_type: TimeOffType,
    pub timezone: String,
    pub timeoff_days: Vec<TimeOffDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TimeOffStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
}

/// Fields of a time off update; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTimeOffParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The employment ID.")]
    pub employment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The start date (YYYY-MM-DD).")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The end date (YYYY-MM-DD).")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The type of time off.")]
    pub timeoff_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The timezone.")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The reason for the edit.")]
    pub edit_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Array of day/hour entries.")]
    pub timeoff_days: Option<Vec<TimeOffDay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Notes for the time off.")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Optional document.")]
    pub document: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The approver's user ID.")]
    pub approver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "The approval datetime (ISO8601).")]
    pub approved_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOffResponse {
    pub timeoff: TimeOffEntry,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOffActionResponse {
    pub success: bool,
    pub message: Option<String>,
    pub timeoff: Option<TimeOffEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOffTypeDetail {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTimeOffTypesResponse {
    pub timeoff_types: Vec<TimeOffTypeDetail>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoteApiClient {
    /// Lists time off records, optionally filtered and paginated.
    pub async fn list_time_off<R: DeserializeOwned>(
        &self,
        params: &ListTimeOffParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["timeoff"], Method::GET, Some(&to_json(params)?), None)
            .await
    }

    pub async fn get_time_off<R: DeserializeOwned>(&self, id: &str) -> Result<R, RemoteError> {
        self.fetch(&["timeoff", id], Method::GET, None, None).await
    }

    pub async fn create_time_off<R: DeserializeOwned>(
        &self,
        params: &TimeOffParams,
    ) -> Result<R, RemoteError> {
        self.fetch(&["timeoff"], Method::POST, None, Some(&to_json(params)?))
            .await
    }

    /// Patches the given fields of time off `id`.
    pub async fn update_time_off<R: DeserializeOwned>(
        &self,
        id: &str,
        params: &UpdateTimeOffParams,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["timeoff", id],
            Method::PATCH,
            None,
            Some(&to_json(params)?),
        )
        .await
    }

    pub async fn approve_time_off<R: DeserializeOwned>(
        &self,
        id: &str,
        approver_id: &str,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["timeoff", id, "approve"],
            Method::POST,
            None,
            Some(&json!({ "approver_id": approver_id })),
        )
        .await
    }

    pub async fn cancel_time_off<R: DeserializeOwned>(
        &self,
        id: &str,
        cancel_reason: &str,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["timeoff", id, "cancel"],
            Method::POST,
            None,
            Some(&json!({ "cancel_reason": cancel_reason })),
        )
        .await
    }

    pub async fn decline_time_off<R: DeserializeOwned>(
        &self,
        id: &str,
        decline_reason: &str,
    ) -> Result<R, RemoteError> {
        self.fetch(
            &["timeoff", id, "decline"],
            Method::POST,
            None,
            Some(&json!({ "decline_reason": decline_reason })),
        )
        .await
    }

    /// Approves a pending cancellation. `None` when the API answers 204.
    pub async fn approve_cancel_request<R: DeserializeOwned>(
        &self,
        id: &str,
    ) -> Result<Option<R>, RemoteError> {
        self.request(
            &["timeoff", id, "cancel-request", "approve"],
            Method::POST,
            None,
            None,
        )
        .await
    }

    /// Declines a pending cancellation. `None` when the API answers 204.
    pub async fn decline_cancel_request<R: DeserializeOwned>(
        &self,
        id: &str,
    ) -> Result<Option<R>, RemoteError> {
        self.request(
            &["timeoff", id, "cancel-request", "decline"],
            Method::POST,
            None,
            None,
        )
        .await
    }

    pub async fn list_time_off_types<R: DeserializeOwned>(&self) -> Result<R, RemoteError> {
        self.fetch(&["timeoff", "types"], Method::GET, None, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_payload_omits_unset_fields() {
        let payload = TimeOffParams {
            employment_id: "emp-1".into(),
            start_date: "2025-03-03".into(),
            end_date: "2025-03-04".into(),
            timeoff_type: TimeOffType::PaidTimeOff,
            timezone: "Europe/Lisbon".into(),
            timeoff_days: vec![TimeOffDay {
                day: "2025-03-03".into(),
                hours: 8.0,
            }],
            notes: None,
            document: None,
            status: Some(TimeOffStatus::Approved),
            approver_id: Some("mgr-1".into()),
            approved_at: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "employment_id": "emp-1",
                "start_date": "2025-03-03",
                "end_date": "2025-03-04",
                "timeoff_type": "paid_time_off",
                "timezone": "Europe/Lisbon",
                "timeoff_days": [{ "day": "2025-03-03", "hours": 8.0 }],
                "status": "approved",
                "approver_id": "mgr-1",
            })
        );
    }

    #[test]
    fn entries_tolerate_missing_and_extra_fields() {
        let body = json!({
            "timeoffs": [{
                "id": "to-1",
                "status": "requested",
                "timeoff_type": "sick_leave",
                "unexpected": true,
            }],
            "current_page": 1,
        });
        let parsed: ListTimeOffResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.timeoffs.len(), 1);
        assert_eq!(parsed.timeoffs[0].status, "requested");
        assert!(parsed.timeoffs[0].leave_policy.is_none());
        assert_eq!(parsed.total_pages, 0);
    }
}
