use serde::Serialize;

use crate::weather::{Weather, Weight};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoutingPathLeg {
    from: String,
    to: String,
    weight: Weight,
}

impl RoutingPathLeg {
    pub fn new(from: String, to: String, weight: Weight) -> RoutingPathLeg {
        RoutingPathLeg { from, to, weight }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Ordered sequence of cities from start to end with the travel time of every leg.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoutingPath {
    cities: Vec<String>,
    legs: Vec<RoutingPathLeg>,
    cost: Weight,
    weather: Weather,
}

impl RoutingPath {
    pub fn new(start: String, legs: Vec<RoutingPathLeg>, weather: Weather) -> RoutingPath {
        let cost = legs.iter().map(|leg| leg.weight()).sum();
        let mut cities = Vec::with_capacity(legs.len() + 1);
        cities.push(start);
        cities.extend(legs.iter().map(|leg| leg.to.clone()));

        RoutingPath {
            cities,
            legs,
            cost,
            weather,
        }
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }

    /// Sum of the leg weights.
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// Weather the path was computed under.
    pub fn weather(&self) -> Weather {
        self.weather
    }
}
