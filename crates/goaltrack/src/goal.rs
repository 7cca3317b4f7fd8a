//! Core goal types for goaltrack.
//!
//! A [`Goal`] is a tracked objective. Its wire format is camelCase JSON, the
//! shape page templates consume. Dates are opaque strings and are never parsed.

use serde::{Deserialize, Serialize};

/// When and how often time is put into a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSchedule {
    /// First day of work, ISO-like.
    pub start_date: String,
    /// Target completion day, ISO-like.
    pub end_date: String,
    /// How often sessions happen (e.g. "daily").
    pub frequency: String,
}

/// A tracked goal.
///
/// Deserialization goes through [`GoalRecord`]: the schedule fields must be
/// all present or all absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GoalRecord")]
pub struct Goal {
    /// Identifier; unique by convention only.
    pub id: i64,

    /// Display title. Also usable as a lookup key.
    pub title: String,

    /// Free-form due date, e.g. "15/06/2024".
    pub due_date: String,

    /// Hours invested per week.
    pub hours_per_week: u32,

    /// Free-form start hint, e.g. "next week".
    pub starting_time: String,

    /// Completion percentage. Not range-checked.
    pub progress: u8,

    /// Optional planned date range.
    #[serde(flatten)]
    pub schedule: Option<GoalSchedule>,
}

/// Wire form of a [`Goal`] before the schedule fields are checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    id: i64,
    title: String,
    due_date: String,
    #[serde(alias = "hoursInvestedPerWeek")]
    hours_per_week: u32,
    starting_time: String,
    progress: u8,
    start_date: Option<String>,
    end_date: Option<String>,
    frequency: Option<String>,
}

impl TryFrom<GoalRecord> for Goal {
    type Error = String;

    fn try_from(record: GoalRecord) -> Result<Self, Self::Error> {
        let schedule = match (record.start_date, record.end_date, record.frequency) {
            (None, None, None) => None,
            (Some(start_date), Some(end_date), Some(frequency)) => Some(GoalSchedule {
                start_date,
                end_date,
                frequency,
            }),
            (start, end, frequency) => {
                let missing: Vec<&str> = [
                    ("startDate", start.is_none()),
                    ("endDate", end.is_none()),
                    ("frequency", frequency.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(format!(
                    "goal {} has an incomplete schedule, missing {}",
                    record.id,
                    missing.join(", ")
                ));
            }
        };
        Ok(Self {
            id: record.id,
            title: record.title,
            due_date: record.due_date,
            hours_per_week: record.hours_per_week,
            starting_time: record.starting_time,
            progress: record.progress,
            schedule,
        })
    }
}

/// The reduced projection used by the goal listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    /// Goal identifier.
    pub id: i64,
    /// Goal title.
    pub title: String,
    /// Schedule start, if the goal has one.
    pub start_date: Option<String>,
    /// Schedule end, if the goal has one.
    pub end_date: Option<String>,
    /// Hours invested per week.
    pub hours_invested_per_week: u32,
}

impl Goal {
    /// Project this goal onto the listing shape.
    #[must_use]
    pub fn summary(&self) -> GoalSummary {
        GoalSummary {
            id: self.id,
            title: self.title.clone(),
            start_date: self.schedule.as_ref().map(|s| s.start_date.clone()),
            end_date: self.schedule.as_ref().map(|s| s.end_date.clone()),
            hours_invested_per_week: self.hours_per_week,
        }
    }
}

/// The goals every process starts with when no seed file is configured.
#[must_use]
pub fn builtin_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            title: "Get a 6-pack".to_string(),
            due_date: "15/06/2024".to_string(),
            hours_per_week: 2,
            starting_time: "next week".to_string(),
            progress: 25,
            schedule: Some(GoalSchedule {
                start_date: "2024-03-01".to_string(),
                end_date: "2024-06-15".to_string(),
                frequency: "weekly".to_string(),
            }),
        },
        Goal {
            id: 2,
            title: "Run a marathon".to_string(),
            due_date: "30/09/2024".to_string(),
            hours_per_week: 3,
            starting_time: "tomorrow".to_string(),
            progress: 10,
            schedule: Some(GoalSchedule {
                start_date: "2024-04-01".to_string(),
                end_date: "2024-09-30".to_string(),
                frequency: "daily".to_string(),
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare_goal() -> Goal {
        Goal {
            id: 7,
            title: "Learn Rust".to_string(),
            due_date: "01/01/2025".to_string(),
            hours_per_week: 5,
            starting_time: "now".to_string(),
            progress: 0,
            schedule: None,
        }
    }

    #[test]
    fn test_builtin_goals() {
        let goals = builtin_goals();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].id, 1);
        assert_eq!(goals[0].title, "Get a 6-pack");
        assert_eq!(goals[1].id, 2);
        assert_eq!(goals[1].title, "Run a marathon");
    }

    #[test]
    fn test_goal_wire_format() {
        let json = serde_json::to_value(&builtin_goals()[0]).unwrap();
        assert_eq!(
            json,
            json!({
                "id": 1,
                "title": "Get a 6-pack",
                "dueDate": "15/06/2024",
                "hoursPerWeek": 2,
                "startingTime": "next week",
                "progress": 25,
                "startDate": "2024-03-01",
                "endDate": "2024-06-15",
                "frequency": "weekly"
            })
        );
    }

    #[test]
    fn test_goal_without_schedule_omits_dates() {
        let json = serde_json::to_value(bare_goal()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("startDate"));
        assert!(!obj.contains_key("frequency"));
    }

    #[test]
    fn test_goal_deserialize_without_schedule() {
        let raw = r#"{
            "id": 3, "title": "Read more", "dueDate": "soon",
            "hoursPerWeek": 1, "startingTime": "today", "progress": 50
        }"#;
        let goal: Goal = serde_json::from_str(raw).unwrap();
        assert_eq!(goal.id, 3);
        assert!(goal.schedule.is_none());
    }

    #[test]
    fn test_goal_rejects_partial_schedule() {
        let raw = r#"{
            "id": 4, "title": "Swim", "dueDate": "july", "hoursPerWeek": 2,
            "startingTime": "monday", "progress": 0,
            "startDate": "2024-05-01", "endDate": "2024-07-01"
        }"#;
        let err = serde_json::from_str::<Goal>(raw).unwrap_err().to_string();
        assert!(err.contains("incomplete schedule"));
        assert!(err.contains("frequency"));
        assert!(!err.contains("startDate"));
    }

    #[test]
    fn test_goal_accepts_hours_invested_per_week() {
        let raw = r#"{
            "id": 6, "title": "Paint", "dueDate": "autumn",
            "hoursInvestedPerWeek": 3, "startingTime": "weekend", "progress": 40
        }"#;
        let goal: Goal = serde_json::from_str(raw).unwrap();
        assert_eq!(goal.hours_per_week, 3);
    }

    #[test]
    fn test_summary_projection() {
        let summary = builtin_goals()[1].summary();
        assert_eq!(summary.id, 2);
        assert_eq!(summary.title, "Run a marathon");
        assert_eq!(summary.start_date.as_deref(), Some("2024-04-01"));
        assert_eq!(summary.end_date.as_deref(), Some("2024-09-30"));
        assert_eq!(summary.hours_invested_per_week, 3);
    }

    #[test]
    fn test_summary_exposes_only_projected_fields() {
        let json = serde_json::to_value(builtin_goals()[0].summary()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "endDate",
                "hoursInvestedPerWeek",
                "id",
                "startDate",
                "title"
            ]
        );
    }

    #[test]
    fn test_summary_without_schedule_has_null_dates() {
        let json = serde_json::to_value(bare_goal().summary()).unwrap();
        assert!(json["startDate"].is_null());
        assert!(json["endDate"].is_null());
    }
}
