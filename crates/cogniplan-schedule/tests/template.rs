use cogniplan_core::models::weekday::Weekday;
use cogniplan_schedule::error::ScheduleError;
use cogniplan_schedule::{AvailabilityScheduler, WeeklyTemplate};
use jiff::civil::{date, time};

#[test]
fn default_template_matches_published_hours() {
    let template = WeeklyTemplate::default();

    let starts = |day| -> Vec<_> {
        template
            .windows(day)
            .unwrap()
            .iter()
            .map(|w| (w.start, w.end, w.capacity))
            .collect()
    };

    assert_eq!(
        starts(Weekday::Monday),
        vec![
            (time(9, 0, 0, 0), time(11, 0, 0, 0), 4),
            (time(14, 0, 0, 0), time(16, 0, 0, 0), 4),
        ]
    );
    assert_eq!(
        starts(Weekday::Tuesday),
        vec![
            (time(10, 0, 0, 0), time(12, 0, 0, 0), 4),
            (time(15, 0, 0, 0), time(17, 0, 0, 0), 4),
        ]
    );
    assert_eq!(
        starts(Weekday::Wednesday),
        vec![
            (time(9, 30, 0, 0), time(11, 30, 0, 0), 4),
            (time(14, 30, 0, 0), time(16, 30, 0, 0), 4),
        ]
    );
    assert_eq!(
        starts(Weekday::Thursday),
        vec![
            (time(10, 30, 0, 0), time(12, 30, 0, 0), 4),
            (time(15, 30, 0, 0), time(17, 30, 0, 0), 4),
        ]
    );
    assert_eq!(starts(Weekday::Friday), starts(Weekday::Monday));
    assert!(template.windows(Weekday::Saturday).is_none());
    assert!(template.windows(Weekday::Sunday).is_none());
    assert_eq!(template.total_capacity(Weekday::Wednesday), 8);
    assert_eq!(template.total_capacity(Weekday::Sunday), 0);
}

#[test]
fn json_template_accepts_legacy_capacity_field() {
    let template = WeeklyTemplate::from_json(
        r#"{
            "Saturday": [
                {"start": "08:00", "end": "10:00", "max_patients": 2},
                {"start": "11:00", "end": "12:00", "capacity": 3}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(template.days().collect::<Vec<_>>(), vec![Weekday::Saturday]);
    assert_eq!(template.total_capacity(Weekday::Saturday), 5);
}

#[test]
fn zero_capacity_window_is_rejected() {
    let err = WeeklyTemplate::from_json(
        r#"{"Monday": [{"start": "09:00", "end": "11:00", "capacity": 0}]}"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("zero capacity"), "{err}");
}

#[test]
fn day_capacity_past_u32_is_rejected() {
    let err = WeeklyTemplate::from_json(
        r#"{"Monday": [
            {"start": "09:00", "end": "11:00", "capacity": 4294967295},
            {"start": "14:00", "end": "16:00", "capacity": 2}
        ]}"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("more than one day can hold"), "{err}");
}

#[test]
fn day_capacity_at_u32_max_still_books() {
    let template = WeeklyTemplate::from_json(
        r#"{"Monday": [
            {"start": "09:00", "end": "11:00", "capacity": 4294967294},
            {"start": "14:00", "end": "16:00", "capacity": 1}
        ]}"#,
    )
    .unwrap();
    assert_eq!(template.total_capacity(Weekday::Monday), u32::MAX);

    let mut scheduler = AvailabilityScheduler::new(template);
    assert!(
        scheduler
            .find_next_available_slot("any", Some(date(2024, 1, 1)))
            .is_booked()
    );
}

#[test]
fn day_without_windows_is_rejected() {
    let err = WeeklyTemplate::new([(Weekday::Friday, Vec::new())].into()).unwrap_err();

    assert!(matches!(err, ScheduleError::EmptyDay { day: Weekday::Friday }));
}

#[test]
fn window_ending_before_start_is_rejected() {
    let err = WeeklyTemplate::from_json(
        r#"{"Monday": [{"start": "11:00", "end": "09:00", "capacity": 2}]}"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("ends before it starts"), "{err}");
}

#[test]
fn malformed_time_is_rejected() {
    assert!(
        WeeklyTemplate::from_json(
            r#"{"Monday": [{"start": "9am", "end": "11:00", "capacity": 2}]}"#,
        )
        .is_err()
    );
}

#[test]
fn template_round_trips_through_json() {
    let template = WeeklyTemplate::default();

    let json = serde_json::to_string(&template).unwrap();

    assert!(json.starts_with(r#"{"Monday":[{"start":"09:00","end":"11:00","capacity":4}"#));
    assert_eq!(WeeklyTemplate::from_json(&json).unwrap(), template);
}
