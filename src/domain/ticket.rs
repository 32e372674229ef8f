use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

const UNKNOWN: &str = "Unknown";
const DEFAULT_JOB_TITLE: &str = "Analyst";
const DEFAULT_TEAM: &str = "N/A";
const DEFAULT_USERNAME: &str = "unknown.user";

/// Normalized view of one onboarding ticket. Built once per request from the
/// inbound payload and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub key: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub location: String,
    pub job_title: String,
    pub username: String,
    pub team: String,
}

impl TicketRecord {
    /// Extracts a ticket record from an inbound webhook payload.
    ///
    /// Two shapes are accepted: a flat record (`ticket_id`, `first_name`,
    /// `last_name`, `email`, `department`, `location`, `job_title`) and a
    /// Jira-style payload with the key at `key` or `issue.key` and the rest
    /// under `fields`. Absent fields fall back to defaults; only a payload
    /// without any ticket key is rejected, since the reporter cannot address
    /// a ticket it cannot name.
    pub fn from_payload(payload: &Value) -> AppResult<Self> {
        let key = payload
            .get("ticket_id")
            .and_then(Value::as_str)
            .or_else(|| payload.get("key").and_then(Value::as_str))
            .or_else(|| payload.pointer("/issue/key").and_then(Value::as_str))
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Payload("no ticket key at 'ticket_id', 'key' or 'issue.key'".to_string())
            })?;

        let null = Value::Null;
        let fields = payload
            .get("fields")
            .or_else(|| payload.pointer("/issue/fields"))
            .unwrap_or(&null);

        let pick = |flat: &str, nested: &str, default: &str| -> String {
            payload
                .get(flat)
                .and_then(Value::as_str)
                .or_else(|| fields.pointer(nested).and_then(Value::as_str))
                .unwrap_or(default)
                .to_string()
        };

        Ok(Self {
            key: key.to_string(),
            first_name: pick("first_name", "/customfield_first_name", UNKNOWN),
            last_name: pick("last_name", "/customfield_last_name", UNKNOWN),
            email: pick("email", "/customfield_email", UNKNOWN),
            department: pick("department", "/department/value", UNKNOWN),
            location: pick("location", "/location/value", UNKNOWN),
            job_title: pick("job_title", "/customfield_role", DEFAULT_JOB_TITLE),
            username: pick("username", "/customfield_username", DEFAULT_USERNAME),
            team: pick("team", "/customfield_team", DEFAULT_TEAM),
        })
    }

    /// The fixed field subset forwarded to the orchestration API as launch
    /// variables.
    pub fn launch_variables(&self) -> Map<String, Value> {
        let mut variables = Map::new();
        variables.insert("first_name".to_string(), self.first_name.clone().into());
        variables.insert("last_name".to_string(), self.last_name.clone().into());
        variables.insert("email".to_string(), self.email.clone().into());
        variables.insert("department".to_string(), self.department.clone().into());
        variables.insert("location".to_string(), self.location.clone().into());
        variables.insert("job_title".to_string(), self.job_title.clone().into());
        variables
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn adapts_flat_payload() {
        let payload = json!({
            "ticket_id": "T1",
            "first_name": "Ann",
            "last_name": "Lee",
            "email": "a@x.com",
            "department": "IT",
            "location": "Singapore",
            "job_title": "Engineer"
        });

        let ticket = TicketRecord::from_payload(&payload).unwrap();
        assert_eq!(ticket.key, "T1");
        assert_eq!(ticket.first_name, "Ann");
        assert_eq!(ticket.last_name, "Lee");
        assert_eq!(ticket.email, "a@x.com");
        assert_eq!(ticket.department, "IT");
        assert_eq!(ticket.location, "Singapore");
        assert_eq!(ticket.job_title, "Engineer");
        assert_eq!(ticket.username, "unknown.user");
        assert_eq!(ticket.team, "N/A");
    }

    #[test]
    fn adapts_nested_issue_payload() {
        let payload = json!({
            "issue": {
                "key": "ONB-42",
                "fields": {
                    "department": { "value": "HR" },
                    "location": { "value": "Malaysia" },
                    "customfield_role": "Recruiter",
                    "customfield_team": "People Ops",
                    "customfield_username": "jane.tan"
                }
            }
        });

        let ticket = TicketRecord::from_payload(&payload).unwrap();
        assert_eq!(ticket.key, "ONB-42");
        assert_eq!(ticket.department, "HR");
        assert_eq!(ticket.location, "Malaysia");
        assert_eq!(ticket.job_title, "Recruiter");
        assert_eq!(ticket.team, "People Ops");
        assert_eq!(ticket.username, "jane.tan");
        assert_eq!(ticket.first_name, "Unknown");
    }

    #[test]
    fn accepts_top_level_key_with_fields() {
        let payload = json!({
            "key": "ONB-7",
            "fields": {
                "department": { "value": "Finance" }
            }
        });

        let ticket = TicketRecord::from_payload(&payload).unwrap();
        assert_eq!(ticket.key, "ONB-7");
        assert_eq!(ticket.department, "Finance");
        assert_eq!(ticket.location, "Unknown");
        assert_eq!(ticket.job_title, "Analyst");
    }

    #[test]
    fn rejects_payload_without_ticket_key() {
        let payload = json!({ "fields": { "department": { "value": "IT" } } });
        let error = TicketRecord::from_payload(&payload).unwrap_err();
        assert!(matches!(error, AppError::Payload(_)));
    }

    #[test]
    fn launch_variables_cover_exactly_the_documented_subset() {
        let payload = json!({
            "ticket_id": "T1",
            "first_name": "Ann",
            "last_name": "Lee",
            "email": "a@x.com",
            "department": "IT",
            "location": "Singapore",
            "job_title": "Engineer"
        });
        let ticket = TicketRecord::from_payload(&payload).unwrap();

        let variables = ticket.launch_variables();
        let mut keys = variables.keys().cloned().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "department",
                "email",
                "first_name",
                "job_title",
                "last_name",
                "location"
            ]
        );
        assert_eq!(variables["location"], "Singapore");
    }
}
