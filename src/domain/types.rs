use std::fmt;

use crate::domain::offer::Offer;
use crate::error::FleetError;
use crate::evaluation::cost::compute_delivery_cost;

/// A parcel to be priced and delivered. Identity is `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    pub id: String,
    pub weight: f64,
    pub distance: f64,
    pub base_cost: f64,
    pub offer: Option<Offer>,
    /// Set only on parcels returned by the fleet assignment.
    pub delivery_time: Option<DeliveryTime>,
}

impl Parcel {
    pub fn new(id: impl Into<String>, weight: f64, distance: f64, base_cost: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            distance,
            base_cost,
            offer: None,
            delivery_time: None,
        }
    }

    pub fn with_offer(mut self, offer: Option<Offer>) -> Self {
        self.offer = offer;
        self
    }

    pub fn calculate_delivery_cost(&self) -> DeliveryCost {
        compute_delivery_cost(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryCost {
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

/// Estimated hours until delivery. Displays with exactly two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DeliveryTime(pub f64);

impl DeliveryTime {
    pub fn hours(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for DeliveryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Projection used to order parcels by weight during enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightEntry {
    pub id: String,
    pub weight: f64,
    /// Position in the caller's parcel slice.
    pub index: usize,
}

/// Candidate batch for a single trip. Members index into the parcel slice
/// the group was enumerated from, heaviest-first in construction order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelGroup {
    pub members: Vec<usize>,
    pub weight: f64,
    pub distance: f64,
}

impl ParcelGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn ids<'a>(&'a self, parcels: &'a [Parcel]) -> impl Iterator<Item = &'a str> + 'a {
        self.members.iter().map(move |&ind| parcels[ind].id.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetSpec {
    pub vehicle_count: usize,
    pub max_speed: f64,
    pub max_load: f64,
}

impl FleetSpec {
    pub fn new(vehicle_count: usize, max_speed: f64, max_load: f64) -> Result<Self, FleetError> {
        let fleet = Self {
            vehicle_count,
            max_speed,
            max_load,
        };
        fleet.validate()?;
        Ok(fleet)
    }

    /// Rejects fleets the engine cannot run on, e.g. a zero speed that would divide by zero.
    pub fn validate(&self) -> Result<(), FleetError> {
        if self.vehicle_count == 0 {
            return Err(FleetError::NoVehicles);
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(FleetError::InvalidSpeed(self.max_speed));
        }
        if !self.max_load.is_finite() || self.max_load < 0.0 {
            return Err(FleetError::InvalidLoad(self.max_load));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_time_has_two_decimals() {
        assert_eq!(DeliveryTime(1.0).to_string(), "1.00");
        assert_eq!(DeliveryTime(0.42).to_string(), "0.42");
        assert_eq!(DeliveryTime(2.0 + 0.28).to_string(), "2.28");
    }

    #[test]
    fn fleet_rejects_zero_speed_and_empty_fleet() {
        assert_eq!(FleetSpec::new(2, 0.0, 200.0), Err(FleetError::InvalidSpeed(0.0)));
        assert_eq!(FleetSpec::new(0, 70.0, 200.0), Err(FleetError::NoVehicles));
        assert_eq!(FleetSpec::new(1, 70.0, -1.0), Err(FleetError::InvalidLoad(-1.0)));
        assert!(FleetSpec::new(1, 70.0, 0.0).is_ok());
    }
}
