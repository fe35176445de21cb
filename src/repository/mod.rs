use std::{collections::HashMap, sync::Arc};

mod catalog;
mod models;
pub use models::*;
use rand::Rng;
use tracing::debug;

use crate::{
    filter::SearchFilters,
    shared::{
        self,
        geo::{Coordinate, Distance},
        text::any_contains_ci,
    },
    tracking,
};

type IdToIndex = HashMap<Arc<str>, usize>;

/// Values of the city selector that mean "no city constraint".
const ALL_CITIES: [&str; 3] = ["", "all", "All Cities"];

#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub routes: Box<[Route]>,
    pub stops: Box<[BusStop]>,
    pub buses: Box<[TrackedBus]>,
    pub services: Box<[BusService]>,
    pub booking_options: Box<[BusService]>,
    pub cities: Box<[City]>,

    route_lookup: Arc<IdToIndex>,
    stop_lookup: Arc<IdToIndex>,
    bus_lookup: Arc<IdToIndex>,
    booking_option_lookup: Arc<IdToIndex>,
}

fn index<T, F>(values: &mut [T], mut f: F) -> IdToIndex
where
    F: FnMut(&mut T, usize) -> Arc<str>,
{
    values
        .iter_mut()
        .enumerate()
        .map(|(i, value)| (f(value, i), i))
        .collect()
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the built-in mock tables and builds the id lookups.
    pub fn with_catalog(mut self) -> Self {
        let mut routes = catalog::routes();
        self.route_lookup = index(&mut routes, |route, i| {
            route.index = i as u32;
            route.id.clone()
        })
        .into();
        self.routes = routes.into();
        debug!("Loaded {} routes", self.routes.len());

        let mut stops = catalog::stops();
        self.stop_lookup = index(&mut stops, |stop, i| {
            stop.index = i as u32;
            stop.id.clone()
        })
        .into();
        self.stops = stops.into();
        debug!("Loaded {} stops", self.stops.len());

        let mut buses = catalog::buses();
        self.bus_lookup = index(&mut buses, |bus, i| {
            bus.index = i as u32;
            bus.id.clone()
        })
        .into();
        self.buses = buses.into();
        debug!("Loaded {} tracked buses", self.buses.len());

        let mut services = catalog::services();
        services
            .iter_mut()
            .enumerate()
            .for_each(|(i, service)| service.index = i as u32);
        self.services = services.into();

        let mut booking_options = catalog::booking_options();
        self.booking_option_lookup = index(&mut booking_options, |option, i| {
            option.index = i as u32;
            option.id.clone()
        })
        .into();
        self.booking_options = booking_options.into();

        // Every city a traveller could type: stop cities, route endpoints and major stops
        let mut cities: Vec<&str> = self
            .stops
            .iter()
            .map(|stop| stop.city.as_ref())
            .chain(self.routes.iter().flat_map(|route| {
                [route.from.as_ref(), route.to.as_ref()]
                    .into_iter()
                    .chain(route.major_stops.iter().map(|stop| stop.as_ref()))
            }))
            .collect();
        cities.sort_unstable();
        cities.dedup();
        self.cities = cities.into_iter().map(City::from).collect();
        debug!("Indexed {} cities", self.cities.len());
        self
    }

    /// Routes whose name or endpoints contain the query.
    /// `None` as region matches every region.
    pub fn routes(&self, query: &str, region: Option<Region>) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|route| any_contains_ci(&[&*route.name, &*route.from, &*route.to], query))
            .filter(|route| region.is_none_or(|region| route.region == region))
            .collect()
    }

    pub fn route_by_id(&self, id: &str) -> Option<&Route> {
        let route_index = self.route_lookup.get(id)?;
        Some(&self.routes[*route_index])
    }

    /// Stops whose name, city or address contain the query, limited to one city
    /// unless the city is `all`.
    pub fn stops(&self, query: &str, city: &str) -> Vec<&BusStop> {
        let city = city.trim();
        let any_city = ALL_CITIES
            .iter()
            .any(|value| value.eq_ignore_ascii_case(city));
        self.stops
            .iter()
            .filter(|stop| any_contains_ci(&[&*stop.name, &*stop.city, &*stop.address], query))
            .filter(|stop| any_city || stop.city.eq_ignore_ascii_case(city))
            .collect()
    }

    pub fn stop_by_id(&self, id: &str) -> Option<&BusStop> {
        let stop_index = self.stop_lookup.get(id)?;
        Some(&self.stops[*stop_index])
    }

    /// Sorted, deduplicated cities that have at least one stop.
    pub fn stop_cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.stops.iter().map(|stop| stop.city.as_ref()).collect();
        cities.sort_unstable();
        cities.dedup();
        cities
    }

    /// Returns stops within the distance of the coordinate, nearest first.
    pub fn stops_by_coordinate(
        &self,
        coordinate: &Coordinate,
        distance: Distance,
    ) -> Vec<(&BusStop, Distance)> {
        let mut stops: Vec<_> = self
            .stops
            .iter()
            .map(|stop| (stop, stop.coordinate.haversine_distance(coordinate)))
            .filter(|(_, d)| *d <= distance)
            .collect();
        stops.sort_by(|(_, a), (_, b)| a.as_meters().total_cmp(&b.as_meters()));
        stops
    }

    /// Tracked buses whose number, route or current location contain the query.
    pub fn buses(&self, query: &str) -> Vec<&TrackedBus> {
        self.buses
            .iter()
            .filter(|bus| {
                any_contains_ci(&[&*bus.bus_number, &*bus.route, &*bus.current_location], query)
            })
            .collect()
    }

    pub fn bus_by_id(&self, id: &str) -> Option<&TrackedBus> {
        let bus_index = self.bus_lookup.get(id)?;
        Some(&self.buses[*bus_index])
    }

    /// Search page results matching every active filter.
    pub fn services(&self, filters: &SearchFilters) -> Vec<&BusService> {
        self.services
            .iter()
            .filter(|service| filters.matches(service))
            .collect()
    }

    pub fn booking_option_by_id(&self, id: &str) -> Option<&BusService> {
        let option_index = self.booking_option_lookup.get(id)?;
        Some(&self.booking_options[*option_index])
    }

    /// Does a fuzzy search on all the known cities, comparing there name to the needle.
    pub fn suggest_cities<'a>(&'a self, needle: &'a str) -> Vec<&'a City> {
        shared::search(needle, &self.cities)
    }

    /// Advances the simulated live feed of every tracked bus by one step.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        self.buses
            .iter_mut()
            .for_each(|bus| tracking::simulate(bus, rng));
    }
}
