use chrono::NaiveDate;
use sarthi::{
    booking::{self, BookingRequest, Error},
    repository::Repository,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

fn request(date: &str, passengers: u32) -> BookingRequest {
    BookingRequest {
        from: "Ludhiana".into(),
        to: "Jalandhar".into(),
        date: date.into(),
        passengers,
    }
}

#[test]
fn tomorrow_is_the_earliest_date() {
    assert_eq!(
        booking::earliest_travel_date(today()),
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    );
    assert!(request("2024-03-11", 1).validate_on(today()).is_ok());
    assert_eq!(
        request("2024-03-10", 1).validate_on(today()),
        Err(Error::DateTooEarly(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()))
    );
}

#[test]
fn missing_fields() {
    let mut req = request("2024-03-12", 1);
    req.from = " ".into();
    assert_eq!(req.validate_on(today()), Err(Error::MissingFrom));
    let mut req = request("2024-03-12", 1);
    req.to = String::new();
    assert_eq!(req.validate_on(today()), Err(Error::MissingTo));
    assert_eq!(request("", 1).validate_on(today()), Err(Error::MissingDate));
}

#[test]
fn malformed_date() {
    assert_eq!(
        request("12/03/2024", 1).validate_on(today()),
        Err(Error::InvalidDate("12/03/2024".into()))
    );
}

#[test]
fn passenger_bounds() {
    assert_eq!(
        request("2024-03-12", 0).validate_on(today()),
        Err(Error::InvalidPassengers(0))
    );
    assert!(request("2024-03-12", 6).validate_on(today()).is_ok());
    assert_eq!(
        request("2024-03-12", 7).validate_on(today()),
        Err(Error::InvalidPassengers(7))
    );
}

#[test]
fn search_offers_every_option() {
    let repository = Repository::new().with_catalog();
    let options = booking::search(&repository, &request("2024-03-12", 2), today()).unwrap();
    assert_eq!(options.len(), 3);
    assert!(booking::search(&repository, &request("2024-03-01", 2), today()).is_err());
}

#[test]
fn confirmation_totals_the_fare() {
    let repository = Repository::new().with_catalog();
    let confirmation =
        booking::confirm_by_id(&repository, "2", &request("2024-03-12", 4), today()).unwrap();
    assert_eq!(confirmation.operator, "Express Travels");
    assert_eq!(confirmation.journey, "Ludhiana → Jalandhar");
    assert_eq!(confirmation.date, "2024-03-12");
    assert_eq!(confirmation.departure.to_string(), "08:00");
    assert_eq!(confirmation.arrival.to_string(), "11:30");
    assert_eq!(confirmation.fare, 550);
    assert_eq!(confirmation.total_fare, 2200);
}

#[test]
fn not_enough_seats() {
    let repository = Repository::new().with_catalog();
    let mut option = repository.booking_option_by_id("2").unwrap().clone();
    option.seats_available = 2;
    assert_eq!(
        booking::confirm(&option, &request("2024-03-12", 3), today()),
        Err(Error::NotEnoughSeats {
            available: 2,
            requested: 3
        })
    );
}

#[test]
fn unknown_option() {
    let repository = Repository::new().with_catalog();
    assert_eq!(
        booking::confirm_by_id(&repository, "x", &request("2024-03-12", 1), today()),
        Err(Error::UnknownOption("x".into()))
    );
}
