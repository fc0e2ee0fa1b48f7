use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatusCount {
    /// Event status name
    #[serde(rename = "_id", default)]
    pub status: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentParticipation {
    /// Department name
    #[serde(rename = "_id", default)]
    pub department: String,
    #[serde(default)]
    pub student_count: u64,
}

/// Organizer-wide counters computed by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverallInsights {
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub total_registrations: u64,
    #[serde(default)]
    pub event_status_breakdown: Vec<StatusCount>,
    #[serde(default)]
    pub department_participation: Vec<DepartmentParticipation>,
}

/// Body of `GET /api/analytics/overall-insights`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InsightsResponse {
    #[serde(default)]
    pub insights: Option<OverallInsights>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insights_decode() {
        let body: InsightsResponse = serde_json::from_str(
            r#"{"insights":{"totalEvents":4,"totalRegistrations":120,
                "eventStatusBreakdown":[{"_id":"upcoming","count":3}],
                "departmentParticipation":[{"_id":"Physics","studentCount":12}]}}"#,
        )
        .unwrap();
        let insights = body.insights.unwrap();
        assert_eq!(insights.total_events, 4);
        assert_eq!(insights.event_status_breakdown[0].status, "upcoming");
        assert_eq!(insights.department_participation[0].student_count, 12);
    }

    #[test]
    fn missing_insights_is_none() {
        let body: InsightsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.insights, None);
    }
}
