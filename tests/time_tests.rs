use sarthi::shared::{Duration, Time};

#[test]
fn valid_time_test_1() {
    assert_eq!(Time::from_hms("00:00").unwrap().as_seconds(), 0);
}

#[test]
fn valid_time_test_2() {
    assert_eq!(Time::from_hms("01:01:30").unwrap().as_seconds(), 3690);
}

#[test]
fn invalid_time_test_1() {
    assert!(Time::from_hms("00:0a").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(Time::from_hms("06:75").is_none());
    assert!(Time::from_hms("06").is_none());
    assert!(Time::from_hms("06:30:00:00").is_none());
}

#[test]
fn duration_between_times() {
    let departure = Time::from_hm(14, 20);
    let arrival = Time::from_hm(17, 45);
    assert_eq!((arrival - departure).to_string(), "3h 25m");
    assert_eq!(departure + Duration::from_minutes(40), Time::from_hm(15, 0));
}

#[test]
fn overnight_duration_wraps() {
    let departure = Time::from_hm(23, 30);
    let arrival = Time::from_hm(1, 0);
    assert_eq!(arrival - departure, Duration::from_minutes(90));
}

#[test]
fn short_duration_has_no_hours() {
    assert_eq!(Duration::from_minutes(45).to_string(), "45m");
    assert_eq!(Duration::from_hours(2).to_string(), "2h 0m");
}

#[test]
fn times_render_zero_padded() {
    assert_eq!(Time::from_hm(5, 0).to_string(), "05:00");
    assert_eq!(Time::from_hm(23, 30).to_string(), "23:30");
}
