use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::hours::ActiveHours;
use crate::models::task::{Category, Priority, Task};

/// Blueprint for one task inside a template scenario. Deadlines are relative
/// to the instantiation instant; a seed without an explicit priority gets one
/// inferred from deadline proximity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSeed {
    pub name: String,
    pub duration_minutes: i64,
    pub min_session_minutes: i64,
    pub max_session_minutes: i64,
    pub category: Category,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub deadline_in_hours: Option<i64>,
    #[serde(default)]
    pub allow_split: bool,
}

/// A named bundle of preset tasks used only to seed scheduler input; never
/// part of the engine's runtime state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateScenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tasks: Vec<TaskSeed>,
    #[serde(default)]
    pub active_hours: Option<ActiveHours>,
}

impl TemplateScenario {
    /// Materializes the scenario's tasks with fresh ids and deadlines
    /// anchored at `now`.
    pub fn instantiate(&self, now: DateTime<FixedOffset>) -> Vec<Task> {
        self.tasks
            .iter()
            .map(|seed| {
                let deadline = seed
                    .deadline_in_hours
                    .map(|hours| now + Duration::hours(hours));
                Task {
                    id: Uuid::new_v4().to_string(),
                    name: seed.name.clone(),
                    duration_minutes: seed.duration_minutes,
                    min_session_minutes: seed.min_session_minutes,
                    max_session_minutes: seed.max_session_minutes,
                    category: seed.category,
                    priority: seed
                        .priority
                        .unwrap_or_else(|| Priority::infer(deadline, now)),
                    deadline,
                    allow_split: seed.allow_split,
                }
            })
            .collect()
    }

    pub fn builtins() -> Vec<TemplateScenario> {
        vec![
            TemplateScenario {
                id: "focused-workday".to_string(),
                name: "Focused workday".to_string(),
                description: "A single deep-work block plus a short sync and an errand."
                    .to_string(),
                tasks: vec![
                    TaskSeed {
                        name: "Deep work: quarterly report".to_string(),
                        duration_minutes: 180,
                        min_session_minutes: 60,
                        max_session_minutes: 120,
                        category: Category::Work,
                        priority: Some(Priority::High),
                        deadline_in_hours: Some(30),
                        allow_split: true,
                    },
                    TaskSeed {
                        name: "Team sync".to_string(),
                        duration_minutes: 30,
                        min_session_minutes: 30,
                        max_session_minutes: 30,
                        category: Category::Meeting,
                        priority: Some(Priority::Normal),
                        deadline_in_hours: None,
                        allow_split: false,
                    },
                    TaskSeed {
                        name: "Pick up groceries".to_string(),
                        duration_minutes: 45,
                        min_session_minutes: 45,
                        max_session_minutes: 60,
                        category: Category::Personal,
                        priority: None,
                        deadline_in_hours: None,
                        allow_split: false,
                    },
                ],
                active_hours: None,
            },
            TemplateScenario {
                id: "deadline-crunch".to_string(),
                name: "Deadline crunch".to_string(),
                description: "Two urgent deliverables competing for the same day.".to_string(),
                tasks: vec![
                    TaskSeed {
                        name: "Ship release candidate".to_string(),
                        duration_minutes: 240,
                        min_session_minutes: 60,
                        max_session_minutes: 120,
                        category: Category::Work,
                        priority: None,
                        deadline_in_hours: Some(10),
                        allow_split: true,
                    },
                    TaskSeed {
                        name: "Customer demo prep".to_string(),
                        duration_minutes: 90,
                        min_session_minutes: 45,
                        max_session_minutes: 90,
                        category: Category::Work,
                        priority: None,
                        deadline_in_hours: Some(26),
                        allow_split: true,
                    },
                    TaskSeed {
                        name: "Stakeholder review".to_string(),
                        duration_minutes: 60,
                        min_session_minutes: 60,
                        max_session_minutes: 60,
                        category: Category::Meeting,
                        priority: Some(Priority::Critical),
                        deadline_in_hours: Some(8),
                        allow_split: false,
                    },
                ],
                active_hours: None,
            },
            TemplateScenario {
                id: "mixed-week".to_string(),
                name: "Mixed week".to_string(),
                description: "A spread of work, meetings and personal tasks over several days."
                    .to_string(),
                tasks: vec![
                    TaskSeed {
                        name: "Architecture proposal".to_string(),
                        duration_minutes: 300,
                        min_session_minutes: 60,
                        max_session_minutes: 120,
                        category: Category::Work,
                        priority: Some(Priority::High),
                        deadline_in_hours: Some(96),
                        allow_split: true,
                    },
                    TaskSeed {
                        name: "One-on-one".to_string(),
                        duration_minutes: 45,
                        min_session_minutes: 45,
                        max_session_minutes: 45,
                        category: Category::Meeting,
                        priority: Some(Priority::Normal),
                        deadline_in_hours: Some(72),
                        allow_split: false,
                    },
                    TaskSeed {
                        name: "Gym sessions".to_string(),
                        duration_minutes: 180,
                        min_session_minutes: 60,
                        max_session_minutes: 60,
                        category: Category::Personal,
                        priority: Some(Priority::Low),
                        deadline_in_hours: None,
                        allow_split: true,
                    },
                    TaskSeed {
                        name: "Expense report".to_string(),
                        duration_minutes: 30,
                        min_session_minutes: 15,
                        max_session_minutes: 30,
                        category: Category::Work,
                        priority: Some(Priority::Low),
                        deadline_in_hours: Some(120),
                        allow_split: false,
                    },
                ],
                active_hours: None,
            },
        ]
    }
}
