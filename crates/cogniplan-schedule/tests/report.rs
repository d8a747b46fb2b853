use cogniplan_core::models::weekday::Weekday;
use cogniplan_schedule::AvailabilityScheduler;
use jiff::civil::date;

#[test]
fn empty_report_lists_open_weekdays_fully_available() {
    let scheduler = AvailabilityScheduler::default();

    let report = scheduler.availability_report();

    let days: Vec<_> = report.keys().copied().collect();
    assert_eq!(
        days,
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ]
    );
    for day in report.values() {
        assert_eq!(day.total_slots, 8);
        assert_eq!(day.booked_slots, 0);
        assert_eq!(day.availability_percentage, 100.0);
    }
}

#[test]
fn percentage_tracks_every_booking() {
    let mut scheduler = AvailabilityScheduler::default();
    let mut previous = 0;

    for _ in 0..12 {
        scheduler.find_next_available_slot("any", Some(date(2024, 1, 1)));

        let report = scheduler.availability_report();
        for day in report.values() {
            let expected = (1.0 - day.booked_slots as f64 / day.total_slots as f64) * 100.0;
            assert_eq!(day.availability_percentage, expected);
        }

        let booked: usize = report.values().map(|d| d.booked_slots).sum();
        assert!(booked > previous);
        previous = booked;
    }

    let report = scheduler.availability_report();
    assert_eq!(report[&Weekday::Monday].booked_slots, 8);
    assert_eq!(report[&Weekday::Monday].availability_percentage, 0.0);
    assert_eq!(report[&Weekday::Tuesday].booked_slots, 4);
    assert_eq!(report[&Weekday::Tuesday].availability_percentage, 50.0);
}

#[test]
fn report_serializes_keyed_by_weekday_name() {
    let mut scheduler = AvailabilityScheduler::default();
    scheduler.find_next_available_slot("any", Some(date(2024, 1, 1)));

    let json = serde_json::to_value(scheduler.availability_report()).unwrap();

    assert_eq!(
        json["Monday"],
        serde_json::json!({
            "total_slots": 8,
            "booked_slots": 1,
            "availability_percentage": 87.5,
        })
    );
    assert!(json.get("Saturday").is_none());
}

#[test]
fn export_matches_report_counts() {
    let mut scheduler = AvailabilityScheduler::default();
    for start in [date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 3), date(2024, 1, 6)] {
        scheduler.find_next_available_slot("MODERATE_DEMENTED", Some(start));
    }

    let exported: serde_json::Value =
        serde_json::from_str(&scheduler.export_bookings().unwrap()).unwrap();
    let report = scheduler.availability_report();

    for (day, availability) in &report {
        let listed = exported[day.name()].as_array().unwrap();
        assert_eq!(listed.len(), availability.booked_slots, "{day}");
    }
}

#[test]
fn export_renders_dates_and_times_as_strings() {
    let mut scheduler = AvailabilityScheduler::default();
    scheduler.find_next_available_slot("VERY_MILD_DEMENTED", Some(date(2024, 1, 4)));

    let exported: serde_json::Value =
        serde_json::from_str(&scheduler.export_bookings().unwrap()).unwrap();

    assert_eq!(
        exported["Thursday"],
        serde_json::json!([{
            "date": "2024-01-04",
            "day": "Thursday",
            "time": "10:30",
            "dementia_level": "VERY_MILD_DEMENTED",
        }])
    );
    assert_eq!(exported["Monday"], serde_json::json!([]));
}

#[test]
fn export_does_not_change_state() {
    let mut scheduler = AvailabilityScheduler::default();
    scheduler.find_next_available_slot("any", Some(date(2024, 1, 1)));

    let first = scheduler.export_bookings().unwrap();
    let second = scheduler.export_bookings().unwrap();

    assert_eq!(first, second);
    assert_eq!(scheduler.ledger().total(), 1);
}
