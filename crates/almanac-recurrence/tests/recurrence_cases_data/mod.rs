use chrono::{NaiveDate, TimeZone, Utc};

use crate::{ExpansionOptions, RawRecurrenceRule, SchedulableItem, Window, expand_item};

pub struct RecurrenceCase {
    pub name: &'static str,
    /// Seed due date, `YYYY-MM-DD`; the item is due at 09:00 UTC that day.
    pub seed: &'static str,
    /// Stored rule document as JSON.
    pub rule: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub expected: &'static [&'static str],
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "monthly_day31_clips_in_leap_february",
            seed: "2024-01-31",
            rule: r#"{ "type": "monthly", "interval": 1 }"#,
            from: "2024-02-01",
            to: "2024-04-30",
            expected: &["2024-02-29", "2024-03-31", "2024-04-30"],
        },
        RecurrenceCase {
            name: "weekly_mon_wed_fri",
            seed: "2024-06-03",
            rule: r#"{ "type": "weekly", "interval": 1, "daysOfWeek": ["monday", "wednesday", "friday"] }"#,
            from: "2024-06-01",
            to: "2024-06-14",
            expected: &[
                "2024-06-03",
                "2024-06-05",
                "2024-06-07",
                "2024-06-10",
                "2024-06-12",
                "2024-06-14",
            ],
        },
        RecurrenceCase {
            name: "daily_exception",
            seed: "2024-06-01",
            rule: r#"{ "type": "daily", "interval": 1, "exceptions": ["2024-06-05"] }"#,
            from: "2024-06-04",
            to: "2024-06-06",
            expected: &["2024-06-04", "2024-06-06"],
        },
        RecurrenceCase {
            name: "monthly_day31_clips_in_common_february",
            seed: "2023-01-31",
            rule: r#"{ "type": "monthly" }"#,
            from: "2023-02-01",
            to: "2023-02-28",
            expected: &["2023-02-28"],
        },
        RecurrenceCase {
            name: "yearly_leap_day",
            seed: "2024-02-29",
            rule: r#"{ "type": "yearly", "interval": 1 }"#,
            from: "2025-01-01",
            to: "2028-12-31",
            expected: &["2025-02-28", "2026-02-28", "2027-02-28", "2028-02-29"],
        },
        RecurrenceCase {
            name: "daily_interval_fast_forward",
            seed: "2020-01-01",
            rule: r#"{ "type": "daily", "interval": 3 }"#,
            from: "2024-06-01",
            to: "2024-06-10",
            expected: &["2024-06-02", "2024-06-05", "2024-06-08"],
        },
        RecurrenceCase {
            name: "daily_count_is_lifetime",
            seed: "2024-06-01",
            rule: r#"{ "type": "daily", "interval": 1, "count": 5 }"#,
            from: "2024-06-04",
            to: "2024-06-30",
            expected: &["2024-06-04", "2024-06-05"],
        },
        RecurrenceCase {
            name: "daily_count_exhausted_before_window",
            seed: "2024-06-01",
            rule: r#"{ "type": "daily", "interval": 1, "count": 3 }"#,
            from: "2024-06-10",
            to: "2024-06-20",
            expected: &[],
        },
        RecurrenceCase {
            name: "daily_end_date_inclusive",
            seed: "2024-06-01",
            rule: r#"{ "type": "daily", "interval": 1, "endDate": "2024-06-03" }"#,
            from: "2024-06-01",
            to: "2024-06-10",
            expected: &["2024-06-01", "2024-06-02", "2024-06-03"],
        },
        RecurrenceCase {
            name: "end_date_reached_before_count",
            seed: "2024-06-01",
            rule: r#"{ "type": "daily", "count": 10, "endDate": "2024-06-05T12:00:00Z" }"#,
            from: "2024-06-01",
            to: "2024-06-30",
            expected: &[
                "2024-06-01",
                "2024-06-02",
                "2024-06-03",
                "2024-06-04",
                "2024-06-05",
            ],
        },
        RecurrenceCase {
            name: "window_before_seed",
            seed: "2024-07-01",
            rule: r#"{ "type": "daily" }"#,
            from: "2024-06-01",
            to: "2024-06-30",
            expected: &[],
        },
        RecurrenceCase {
            name: "count_skips_exceptions",
            seed: "2024-06-01",
            rule: r#"{ "type": "daily", "count": 3, "exceptions": ["2024-06-02"] }"#,
            from: "2024-06-01",
            to: "2024-06-30",
            expected: &["2024-06-01", "2024-06-03", "2024-06-04"],
        },
        RecurrenceCase {
            name: "weekly_every_other_week_on_seed_day",
            seed: "2024-06-04",
            rule: r#"{ "type": "weekly", "interval": 2 }"#,
            from: "2024-06-01",
            to: "2024-07-15",
            expected: &["2024-06-04", "2024-06-18", "2024-07-02"],
        },
        RecurrenceCase {
            name: "weekly_skips_days_before_seed",
            seed: "2024-06-12",
            rule: r#"{ "type": "weekly", "daysOfWeek": ["Monday", "Friday"] }"#,
            from: "2024-06-01",
            to: "2024-06-21",
            expected: &["2024-06-14", "2024-06-17", "2024-06-21"],
        },
        RecurrenceCase {
            name: "weekly_count_counts_landings_before_window",
            seed: "2024-06-03",
            rule: r#"{ "type": "weekly", "daysOfWeek": ["monday", "wednesday", "friday"], "count": 4 }"#,
            from: "2024-06-06",
            to: "2024-06-30",
            expected: &["2024-06-07", "2024-06-10"],
        },
        RecurrenceCase {
            name: "weekly_exception",
            seed: "2024-06-03",
            rule: r#"{ "type": "weekly", "daysOfWeek": ["monday", "thursday"], "exceptions": ["2024-06-10"] }"#,
            from: "2024-06-01",
            to: "2024-06-16",
            expected: &["2024-06-03", "2024-06-06", "2024-06-13"],
        },
        RecurrenceCase {
            name: "monthly_anchor_before_seed_day",
            seed: "2024-06-20",
            rule: r#"{ "type": "monthly", "dayOfMonth": 5 }"#,
            from: "2024-06-01",
            to: "2024-08-31",
            expected: &["2024-07-05", "2024-08-05"],
        },
        RecurrenceCase {
            name: "monthly_quarterly",
            seed: "2024-01-15",
            rule: r#"{ "type": "monthly", "interval": 3 }"#,
            from: "2024-01-01",
            to: "2024-12-31",
            expected: &["2024-01-15", "2024-04-15", "2024-07-15", "2024-10-15"],
        },
        RecurrenceCase {
            name: "yearly_explicit_anchor",
            seed: "2024-03-10",
            rule: r#"{ "type": "yearly", "month": 12, "day": 25 }"#,
            from: "2024-01-01",
            to: "2026-12-31",
            expected: &["2024-12-25", "2025-12-25", "2026-12-25"],
        },
        RecurrenceCase {
            name: "custom_every_two_weeks",
            seed: "2024-06-03",
            rule: r#"{ "type": "custom", "unit": "week", "interval": 2 }"#,
            from: "2024-06-01",
            to: "2024-07-31",
            expected: &[
                "2024-06-03",
                "2024-06-17",
                "2024-07-01",
                "2024-07-15",
                "2024-07-29",
            ],
        },
        RecurrenceCase {
            name: "custom_month_end",
            seed: "2024-01-31",
            rule: r#"{ "type": "custom", "unit": "month" }"#,
            from: "2024-02-01",
            to: "2024-05-31",
            expected: &["2024-02-29", "2024-03-31", "2024-04-30", "2024-05-31"],
        },
        RecurrenceCase {
            name: "custom_every_ten_days_window_end_inclusive",
            seed: "2024-06-01",
            rule: r#"{ "type": "custom", "unit": "day", "interval": 10 }"#,
            from: "2024-06-05",
            to: "2024-07-01",
            expected: &["2024-06-11", "2024-06-21", "2024-07-01"],
        },
    ]
}

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn assert_case(case: &RecurrenceCase) {
    let seed = day(case.seed);
    let rule: RawRecurrenceRule = serde_json::from_str(case.rule)
        .unwrap_or_else(|e| panic!("{}: rule does not parse: {e}", case.name));
    let item = SchedulableItem {
        id: case.name.to_string(),
        title: case.name.to_string(),
        due_date: Some(
            Utc.from_utc_datetime(&seed.and_hms_opt(9, 0, 0).unwrap()),
        ),
        is_recurring: true,
        recurrence_rule: Some(rule),
        ..SchedulableItem::default()
    };
    let window = Window::new(day(case.from), day(case.to)).unwrap();

    let occurrences = expand_item(&item, &window, &ExpansionOptions::default())
        .unwrap_or_else(|e| panic!("{}: expansion failed: {e}", case.name));
    let actual: Vec<String> = occurrences
        .iter()
        .map(|o| o.date.format("%Y-%m-%d").to_string())
        .collect();

    assert_eq!(actual, case.expected, "case {}", case.name);
}
