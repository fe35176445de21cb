pub mod booking;
pub mod contact;
pub mod filter;
pub mod repository;
pub mod shared;
pub mod site;
pub mod tracking;

pub mod prelude {
    pub use crate::booking::{BookingConfirmation, BookingRequest};
    pub use crate::contact::{Category, ContactForm};
    pub use crate::filter::{PriceRange, SearchFilters, TimeWindow};
    pub use crate::repository::*;
    pub use crate::shared::{Coordinate, Distance, Duration, Preview, Time};
    pub use crate::site::{Page, QuickSearch};
}
