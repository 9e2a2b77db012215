use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use chronoplan::{
    schedule, schedule_with_defaults, ActiveHours, Category, DayWindow, Event, LogLevel, Priority,
    SchedulerConfig, Task, TimeRange,
};

fn dt(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(0).expect("offset");
    let naive = NaiveDate::from_ymd_opt(2025, 6, day)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time");
    offset
        .from_local_datetime(&naive)
        .single()
        .expect("valid datetime")
}

fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

fn hours_for(category: Category, windows: Vec<DayWindow>) -> ActiveHours {
    let mut hours = ActiveHours {
        work: Vec::new(),
        personal: Vec::new(),
        meeting: Vec::new(),
    };
    match category {
        Category::Work => hours.work = windows,
        Category::Personal => hours.personal = windows,
        Category::Meeting => hours.meeting = windows,
    }
    hours
}

fn task(id: &str, duration: i64, min: i64, max: i64) -> Task {
    Task {
        id: id.to_string(),
        name: id.to_string(),
        duration_minutes: duration,
        min_session_minutes: min,
        max_session_minutes: max,
        category: Category::Work,
        priority: Priority::Normal,
        deadline: None,
        allow_split: false,
    }
}

fn assert_no_overlaps(events: &[Event], locked: &[Event]) {
    let all: Vec<&Event> = events.iter().chain(locked.iter()).collect();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert!(
                !a.range.overlaps(&b.range),
                "events {} and {} overlap",
                a.id,
                b.id
            );
        }
    }
}

// Scenario: a 2-hour unsplittable task in a 4-hour window lands as one exact
// event with no diagnostics.
#[test]
fn single_task_fits_cleanly() {
    let tasks = vec![task("report", 120, 60, 120)];
    let hours = hours_for(Category::Work, vec![DayWindow { start: t(9, 0), end: t(13, 0) }]);

    let outcome = schedule_with_defaults(&tasks, &hours, &[], dt(2, 8, 0)).expect("schedule");

    assert_eq!(outcome.events.len(), 1);
    let event = &outcome.events[0];
    assert_eq!(event.range.start, dt(2, 9, 0));
    assert_eq!(event.range.end, dt(2, 11, 0));
    assert!(event.part_number.is_none());
    assert!(!event.is_past_deadline);
    assert!(outcome.logs.is_empty());
}

// Scenario: a 5-hour splittable task capped at 2-hour sessions becomes three
// parts in one day, with a single informational split log.
#[test]
fn splittable_task_becomes_numbered_parts() {
    let mut long = task("course", 300, 60, 120);
    long.allow_split = true;
    let hours = hours_for(Category::Work, vec![DayWindow { start: t(9, 0), end: t(17, 0) }]);

    let outcome = schedule_with_defaults(&[long], &hours, &[], dt(2, 8, 0)).expect("schedule");

    assert_eq!(outcome.events.len(), 3);
    let lengths: Vec<i64> = outcome
        .events
        .iter()
        .map(|e| e.range.duration_minutes())
        .collect();
    assert_eq!(lengths, vec![120, 120, 60]);
    for (i, event) in outcome.events.iter().enumerate() {
        assert_eq!(event.part_number, Some(i as u32 + 1));
        assert_eq!(event.total_parts, Some(3));
        assert_eq!(event.name, format!("course ({}/3)", i + 1));
    }
    assert_eq!(outcome.logs.len(), 1);
    assert_eq!(outcome.logs[0].level, LogLevel::Info);
}

// Scenario: the only window starts after the deadline; the task is still
// scheduled, flagged, and warned about.
#[test]
fn deadline_miss_is_flagged_not_dropped() {
    let mut urgent = task("urgent", 180, 60, 180);
    urgent.deadline = Some(dt(2, 10, 0));
    let hours = hours_for(Category::Work, vec![DayWindow { start: t(11, 0), end: t(14, 0) }]);

    let outcome = schedule_with_defaults(&[urgent], &hours, &[], dt(2, 9, 0)).expect("schedule");

    assert_eq!(outcome.events.len(), 1);
    assert!(outcome.events[0].is_past_deadline);
    let warnings: Vec<_> = outcome
        .logs
        .iter()
        .filter(|log| log.level == LogLevel::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("end after the deadline"));
}

// Scenario: a meeting task with no meeting windows fails alone; other tasks
// are unaffected.
#[test]
fn empty_category_fails_only_its_own_task() {
    let mut sync = task("sync", 60, 30, 60);
    sync.category = Category::Meeting;
    let doc = task("doc", 60, 30, 60);
    let hours = hours_for(Category::Work, vec![DayWindow { start: t(9, 0), end: t(17, 0) }]);

    let outcome =
        schedule_with_defaults(&[sync, doc], &hours, &[], dt(2, 8, 0)).expect("schedule");

    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].task_id.as_deref(), Some("doc"));
    let errors: Vec<_> = outcome
        .logs
        .iter()
        .filter(|log| log.level == LogLevel::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("sync"));
}

// Scenario: two critical tasks contending for a single one-hour slot; input
// order breaks the tie and the loser is reported.
#[test]
fn tie_break_prefers_input_order_when_only_one_fits() {
    let mut first = task("first", 60, 60, 60);
    first.priority = Priority::Critical;
    let mut second = task("second", 60, 60, 60);
    second.priority = Priority::Critical;
    let hours = hours_for(Category::Work, vec![DayWindow { start: t(9, 0), end: t(10, 0) }]);

    let outcome = schedule(
        &[first, second],
        &hours,
        &[],
        dt(2, 8, 0),
        &SchedulerConfig { horizon_days: 1 },
    )
    .expect("schedule");

    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].task_id.as_deref(), Some("first"));
    assert!(outcome
        .logs
        .iter()
        .any(|log| log.level == LogLevel::Error && log.message.contains("second")));
}

// Scenario: a locked event splits a 4-hour window into two 90-minute-ish
// halves; a task needing 3 contiguous hours fits neither even though 4 free
// hours exist in total.
#[test]
fn fragmented_window_cannot_host_contiguous_session() {
    let locked = vec![Event::locked(
        "evt-standup",
        "Standup",
        TimeRange {
            start: dt(2, 11, 0),
            end: dt(2, 12, 0),
        },
        Category::Work,
    )];
    let workshop = task("workshop", 180, 180, 180);
    let hours = hours_for(Category::Work, vec![DayWindow { start: t(9, 0), end: t(14, 0) }]);

    let outcome = schedule(
        &[workshop],
        &hours,
        &locked,
        dt(2, 8, 0),
        &SchedulerConfig { horizon_days: 1 },
    )
    .expect("schedule");

    assert!(outcome.events.is_empty());
    assert!(outcome
        .logs
        .iter()
        .any(|log| log.level == LogLevel::Error && log.message.contains("workshop")));
}

// Higher-priority work wins contested availability; at equal priority the
// earlier deadline wins.
#[test]
fn priority_and_deadline_precedence() {
    let mut low = task("background", 60, 60, 60);
    low.priority = Priority::Low;
    let mut high = task("incident", 60, 60, 60);
    high.priority = Priority::Critical;
    let hours = hours_for(Category::Work, vec![DayWindow { start: t(9, 0), end: t(10, 0) }]);

    let outcome = schedule(
        &[low.clone(), high.clone()],
        &hours,
        &[],
        dt(2, 8, 0),
        &SchedulerConfig { horizon_days: 1 },
    )
    .expect("schedule");
    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].task_id.as_deref(), Some("incident"));

    let mut due_soon = task("due-soon", 60, 60, 60);
    due_soon.deadline = Some(dt(2, 12, 0));
    let mut due_late = task("due-late", 60, 60, 60);
    due_late.deadline = Some(dt(3, 12, 0));
    let outcome = schedule(
        &[due_late, due_soon],
        &hours,
        &[],
        dt(2, 8, 0),
        &SchedulerConfig { horizon_days: 1 },
    )
    .expect("schedule");
    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].task_id.as_deref(), Some("due-soon"));
}

// Placed events never overlap each other or the locked obstacles, durations
// are conserved exactly, and sessions stay inside their category's windows.
#[test]
fn packing_invariants_hold_under_load() {
    let locked = vec![
        Event::locked(
            "evt-lunch",
            "Lunch",
            TimeRange {
                start: dt(2, 12, 0),
                end: dt(2, 13, 0),
            },
            Category::Personal,
        ),
        Event::locked(
            "evt-review",
            "Design review",
            TimeRange {
                start: dt(2, 15, 0),
                end: dt(2, 16, 30),
            },
            Category::Meeting,
        ),
    ];

    let hours = ActiveHours {
        work: vec![
            DayWindow { start: t(9, 0), end: t(12, 0) },
            DayWindow { start: t(13, 0), end: t(18, 0) },
        ],
        personal: vec![DayWindow { start: t(18, 0), end: t(21, 0) }],
        meeting: vec![DayWindow { start: t(10, 0), end: t(16, 0) }],
    };

    let mut thesis = task("thesis", 300, 60, 120);
    thesis.allow_split = true;
    thesis.priority = Priority::High;
    let mut standup = task("standup", 30, 30, 30);
    standup.category = Category::Meeting;
    standup.priority = Priority::Critical;
    let mut gym = task("gym", 120, 60, 60);
    gym.category = Category::Personal;
    gym.priority = Priority::Low;
    gym.allow_split = true;
    let tasks = vec![thesis, standup, gym];

    let outcome = schedule_with_defaults(&tasks, &hours, &locked, dt(2, 8, 0)).expect("schedule");

    assert_no_overlaps(&outcome.events, &locked);

    for source in &tasks {
        let placed: i64 = outcome
            .events
            .iter()
            .filter(|e| e.task_id.as_deref() == Some(source.id.as_str()))
            .map(|e| e.range.duration_minutes())
            .sum();
        assert_eq!(placed, source.duration_minutes, "task {}", source.id);
    }

    for event in &outcome.events {
        let source = tasks
            .iter()
            .find(|t| Some(t.id.as_str()) == event.task_id.as_deref())
            .expect("owning task");
        let minutes = event.range.duration_minutes();
        assert!(minutes >= source.min_session_minutes);
        assert!(minutes <= source.max_session_minutes);

        let windows = hours.windows_for(event.category);
        let inside = windows.iter().any(|w| {
            event.range.start.time() >= w.start && event.range.end.time() <= w.end
        });
        assert!(inside, "event {} escapes its category windows", event.id);
    }
}

// Identical inputs must produce byte-identical outputs.
#[test]
fn scheduling_is_deterministic() {
    let locked = vec![Event::locked(
        "evt-hold",
        "Focus hold",
        TimeRange {
            start: dt(2, 10, 0),
            end: dt(2, 11, 0),
        },
        Category::Work,
    )];
    let mut a = task("a", 240, 60, 120);
    a.allow_split = true;
    a.deadline = Some(dt(3, 12, 0));
    let mut b = task("b", 90, 45, 90);
    b.priority = Priority::High;
    let tasks = vec![a, b];
    let hours = ActiveHours::default();

    let first = schedule_with_defaults(&tasks, &hours, &locked, dt(2, 8, 0)).expect("schedule");
    let second = schedule_with_defaults(&tasks, &hours, &locked, dt(2, 8, 0)).expect("schedule");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

// The engine never mutates or re-emits caller-owned locked events.
#[test]
fn locked_events_pass_through_untouched() {
    let locked_range = TimeRange {
        start: dt(2, 9, 0),
        end: dt(2, 10, 0),
    };
    let locked = vec![Event::locked("evt-1on1", "1:1", locked_range, Category::Meeting)];
    let before = locked.clone();

    let outcome =
        schedule_with_defaults(&[task("a", 60, 30, 60)], &ActiveHours::default(), &locked, dt(2, 8, 0))
            .expect("schedule");

    assert_eq!(locked, before);
    assert!(outcome.events.iter().all(|e| e.id != "evt-1on1"));
    assert!(outcome.events.iter().all(|e| !e.locked));
    assert!(!outcome.events[0].range.overlaps(&locked_range));
}

// Invalid structural input is a hard error before any placement happens.
#[test]
fn invalid_input_fails_fast() {
    let mut bad = task("bad", 60, 90, 60);
    assert!(schedule_with_defaults(&[bad.clone()], &ActiveHours::default(), &[], dt(2, 8, 0)).is_err());

    bad.min_session_minutes = 30;
    let mut hours = ActiveHours::default();
    hours.work = vec![DayWindow { start: t(12, 0), end: t(12, 0) }];
    assert!(schedule_with_defaults(&[bad], &hours, &[], dt(2, 8, 0)).is_err());
}
