//! Serde records for the agent-message boundary.
//!
//! The engine fills these payloads; transporting them (HTTP, queue, stdio)
//! is the caller's concern.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assign::AssignmentReport;
use crate::model::{Milestone, Task, TeamMember, Timeline};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MessagePart {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    pub role: String,
    pub parts: Vec<MessagePart>,
    pub message_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MessageParams {
    pub message: Message,
}

/// Inbound request wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MessageEnvelope {
    pub id: String,
    pub params: MessageParams,
}

impl MessageEnvelope {
    pub fn user_message(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            params: MessageParams {
                message: Message {
                    role: String::from("user"),
                    parts: vec![MessagePart { text: text.into() }],
                    message_id: Uuid::new_v4().to_string(),
                    timestamp: Utc::now(),
                },
            },
        }
    }

    /// Concatenated text of all message parts.
    pub fn text(&self) -> String {
        self.params
            .message
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Resource payload attached to a planning response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResourceAllocation {
    pub teams: Vec<TeamMember>,
    pub total_members: usize,
    /// Sum over members of hourly rate times assigned hours.
    pub estimated_cost: f64,
    pub timeline: Timeline,
    pub recommendations: Vec<String>,
}

impl ResourceAllocation {
    pub fn build(team: &[TeamMember], report: &AssignmentReport, timeline: &Timeline) -> Self {
        let estimated_cost = report
            .member_loads
            .iter()
            .map(|load| {
                let rate = team
                    .iter()
                    .find(|m| m.name == load.name)
                    .map(|m| m.hourly_rate)
                    .unwrap_or(0);
                rate as f64 * load.total_hours
            })
            .sum();

        Self {
            teams: team.to_vec(),
            total_members: team.len(),
            estimated_cost,
            timeline: timeline.clone(),
            recommendations: report.recommendations.clone(),
        }
    }
}

/// Outbound response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResponseEnvelope {
    pub id: String,
    pub response: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<Milestone>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_breakdown: Option<Vec<Task>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_allocation: Option<ResourceAllocation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_round_trip_text() {
        let envelope = MessageEnvelope::user_message("build a shop");
        assert_eq!(envelope.text(), "build a shop");
        assert_eq!(envelope.params.message.role, "user");
        assert_ne!(envelope.id, envelope.params.message.message_id);
    }

    #[test]
    fn test_response_envelope_omits_empty_sections() {
        let response = ResponseEnvelope {
            id: "r1".into(),
            response: "done".into(),
            milestones: None,
            task_breakdown: None,
            resource_allocation: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("milestones"));
        assert!(!json.contains("resource_allocation"));
    }
}
