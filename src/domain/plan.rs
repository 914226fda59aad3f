use itertools::Itertools;

use crate::domain::types::DeliveryTime;

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledDelivery {
    pub parcel_id: String,
    pub delivery_time: DeliveryTime,
}

/// One vehicle run: leaves at `departure`, drops every parcel, returns at `returns_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub vehicle: usize,
    pub departure: f64,
    /// Longest single leg of the trip.
    pub outbound: f64,
    pub returns_at: f64,
    pub deliveries: Vec<ScheduledDelivery>,
}

/// Result of one fleet assignment run. Trips are in priority order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetPlan {
    pub trips: Vec<Trip>,
    /// Parcels no accepted group covered, in input order.
    pub unassigned: Vec<String>,
}

impl FleetPlan {
    pub fn delivery_time(&self, parcel_id: &str) -> Option<DeliveryTime> {
        self.trips
            .iter()
            .flat_map(|trip| &trip.deliveries)
            .find(|d| d.parcel_id == parcel_id)
            .map(|d| d.delivery_time)
    }

    /// All deliveries in ascending (lexicographic) parcel id order.
    pub fn deliveries_by_id(&self) -> Vec<&ScheduledDelivery> {
        self.trips
            .iter()
            .flat_map(|trip| &trip.deliveries)
            .sorted_by(|a, b| a.parcel_id.cmp(&b.parcel_id))
            .collect()
    }

    /// Time at which the last vehicle is back.
    pub fn makespan(&self) -> f64 {
        self.trips
            .iter()
            .map(|trip| trip.returns_at)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(id: &str, hours: f64) -> ScheduledDelivery {
        ScheduledDelivery {
            parcel_id: id.to_string(),
            delivery_time: DeliveryTime(hours),
        }
    }

    #[test]
    fn lookups_span_all_trips() {
        let plan = FleetPlan {
            trips: vec![
                Trip {
                    vehicle: 0,
                    departure: 0.0,
                    outbound: 1.0,
                    returns_at: 2.0,
                    deliveries: vec![delivery("pkg3", 1.0), delivery("pkg2", 0.42)],
                },
                Trip {
                    vehicle: 1,
                    departure: 0.0,
                    outbound: 1.35,
                    returns_at: 2.7,
                    deliveries: vec![delivery("pkg10", 1.35)],
                },
            ],
            unassigned: vec![],
        };

        assert_eq!(plan.delivery_time("pkg2"), Some(DeliveryTime(0.42)));
        assert_eq!(plan.delivery_time("pkg9"), None);
        let ids: Vec<_> = plan.deliveries_by_id().iter().map(|d| d.parcel_id.as_str()).collect();
        assert_eq!(ids, ["pkg10", "pkg2", "pkg3"]);
        assert_eq!(plan.makespan(), 2.7);
    }
}
