//! Ticket search and booking confirmation. Nothing is charged or stored,
//! a confirmation only summarises the fare.

use chrono::{Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{
    repository::{BusService, Repository},
    shared::time::Time,
};

pub const MIN_PASSENGERS: u32 = 1;
pub const MAX_PASSENGERS: u32 = 6;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Departure city is required")]
    MissingFrom,
    #[error("Destination city is required")]
    MissingTo,
    #[error("Departure and destination must differ")]
    SameEndpoints,
    #[error("Travel date is required")]
    MissingDate,
    #[error("Travel date {0} is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("Travel date must be on or after {0}")]
    DateTooEarly(NaiveDate),
    #[error("Passengers must be between 1 and 6, got {0}")]
    InvalidPassengers(u32),
    #[error("Only {available} seats left, {requested} requested")]
    NotEnoughSeats { available: u32, requested: u32 },
    #[error("Bus option {0} does not exist")]
    UnknownOption(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub from: String,
    pub to: String,
    pub date: String,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
}

fn default_passengers() -> u32 {
    MIN_PASSENGERS
}

/// First date a ticket can be booked for, seen from `today`.
pub fn earliest_travel_date(today: NaiveDate) -> NaiveDate {
    today + TimeDelta::days(1)
}

/// Today on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl BookingRequest {
    /// Returns the parsed travel date when the request is bookable from `today`.
    pub fn validate_on(&self, today: NaiveDate) -> Result<NaiveDate, self::Error> {
        let from = self.from.trim();
        let to = self.to.trim();
        if from.is_empty() {
            return Err(Error::MissingFrom);
        }
        if to.is_empty() {
            return Err(Error::MissingTo);
        }
        if from.eq_ignore_ascii_case(to) {
            return Err(Error::SameEndpoints);
        }

        let date = self.date.trim();
        if date.is_empty() {
            return Err(Error::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(date.to_string()))?;
        let earliest = earliest_travel_date(today);
        if date < earliest {
            return Err(Error::DateTooEarly(earliest));
        }

        if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&self.passengers) {
            return Err(Error::InvalidPassengers(self.passengers));
        }
        Ok(date)
    }

    /// `Ludhiana → Jalandhar`.
    pub fn journey(&self) -> String {
        format!("{} → {}", self.from.trim(), self.to.trim())
    }
}

/// Options for a valid request. Every journey is served by the same mock operators.
pub fn search<'a>(
    repository: &'a Repository,
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<&'a [BusService], self::Error> {
    request.validate_on(today)?;
    Ok(&repository.booking_options)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub operator: String,
    pub journey: String,
    pub date: String,
    pub departure: Time,
    pub arrival: Time,
    pub passengers: u32,
    pub fare: u32,
    pub total_fare: u32,
}

/// Builds the confirmation summary for a chosen option.
pub fn confirm(
    option: &BusService,
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<BookingConfirmation, self::Error> {
    let date = request.validate_on(today)?;
    if request.passengers > option.seats_available {
        return Err(Error::NotEnoughSeats {
            available: option.seats_available,
            requested: request.passengers,
        });
    }

    let confirmation = BookingConfirmation {
        operator: option.operator.to_string(),
        journey: request.journey(),
        date: date.to_string(),
        departure: option.departure,
        arrival: option.arrival,
        passengers: request.passengers,
        fare: option.price,
        total_fare: option.price * request.passengers,
    };
    info!(
        "Confirmed {} seat(s) with {} for {} on {}",
        confirmation.passengers, confirmation.operator, confirmation.journey, confirmation.date
    );
    Ok(confirmation)
}

/// Looks the option up by id before confirming.
pub fn confirm_by_id(
    repository: &Repository,
    option_id: &str,
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<BookingConfirmation, self::Error> {
    let option = repository
        .booking_option_by_id(option_id)
        .ok_or_else(|| Error::UnknownOption(option_id.to_string()))?;
    confirm(option, request, today)
}

/// `1 Passenger`, `2 Passengers`, ... for the passenger selector.
pub fn passenger_labels() -> Vec<(u32, String)> {
    (MIN_PASSENGERS..=MAX_PASSENGERS)
        .map(|count| {
            let suffix = if count > 1 { "s" } else { "" };
            (count, format!("{count} Passenger{suffix}"))
        })
        .collect()
}

#[test]
fn passenger_labels_pluralise() {
    let labels = passenger_labels();
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[0].1, "1 Passenger");
    assert_eq!(labels[5].1, "6 Passengers");
}
