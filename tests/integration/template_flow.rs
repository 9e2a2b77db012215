use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use chronoplan::{schedule_with_defaults, ActiveHours, LogLevel, TemplateScenario};

fn now() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(0).expect("offset");
    let naive = NaiveDate::from_ymd_opt(2025, 6, 2)
        .expect("valid date")
        .and_hms_opt(8, 0, 0)
        .expect("valid time");
    offset
        .from_local_datetime(&naive)
        .single()
        .expect("valid datetime")
}

#[test]
fn builtin_scenarios_schedule_end_to_end() {
    for scenario in TemplateScenario::builtins() {
        let tasks = scenario.instantiate(now());
        let hours = scenario.active_hours.clone().unwrap_or_default();

        let outcome = schedule_with_defaults(&tasks, &hours, &[], now())
            .unwrap_or_else(|err| panic!("scenario {} failed: {err}", scenario.id));

        // Default hours run 07:00-23:00 every day; every preset fits without
        // unschedulable tasks.
        assert!(
            !outcome
                .logs
                .iter()
                .any(|log| log.level == LogLevel::Error),
            "scenario {} produced errors: {:?}",
            scenario.id,
            outcome.logs
        );

        for task in &tasks {
            let placed: i64 = outcome
                .events
                .iter()
                .filter(|e| e.task_id.as_deref() == Some(task.id.as_str()))
                .map(|e| e.range.duration_minutes())
                .sum();
            assert_eq!(placed, task.duration_minutes, "task {}", task.name);
        }
    }
}

#[test]
fn scenario_overriding_hours_uses_them() {
    let mut scenario = TemplateScenario::builtins()[0].clone();
    scenario.active_hours = Some(ActiveHours::default());
    let tasks = scenario.instantiate(now());
    let hours = scenario.active_hours.clone().expect("override");

    let outcome = schedule_with_defaults(&tasks, &hours, &[], now()).expect("schedule");
    assert!(!outcome.events.is_empty());
}

#[test]
fn instantiation_is_fresh_per_call() {
    let scenario = &TemplateScenario::builtins()[0];
    let first = scenario.instantiate(now());
    let second = scenario.instantiate(now());
    let first_ids: Vec<&str> = first.iter().map(|t| t.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|t| t.id.as_str()).collect();
    assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
}
