use std::cmp::Ordering;

use tracing::debug;

use crate::domain::plan::{ScheduledDelivery, Trip};
use crate::domain::types::{DeliveryTime, FleetSpec, Parcel, ParcelGroup};
use crate::utils::truncate_hundredths;

/// Time a vehicle has accumulated over its round trips so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub id: usize,
    pub total_time_taken: f64,
}

impl VehicleState {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            total_time_taken: 0.0,
        }
    }
}

/// Hours to cover `distance`, truncated (not rounded) to two decimals.
pub fn leg_time(distance: f64, max_speed: f64) -> f64 {
    truncate_hundredths(distance / max_speed)
}

/// Hand each group, in order, to the vehicle that frees up first.
///
/// A trip is bounded by its farthest stop: the vehicle's time is raised to any
/// leg longer than what it has accumulated so far, and the result is doubled
/// for the return. The leg is compared against the accumulated time, not
/// against the trip's own legs.
pub fn schedule_trips(groups: &[ParcelGroup], parcels: &[Parcel], fleet: &FleetSpec) -> Vec<Trip> {
    let mut vehicles: Vec<VehicleState> = (0..fleet.vehicle_count).map(VehicleState::new).collect();
    let mut trips = Vec::with_capacity(groups.len());

    for group in groups {
        // stable, so equally free vehicles keep the order left by earlier trips
        vehicles.sort_by(|a, b| {
            a.total_time_taken
                .partial_cmp(&b.total_time_taken)
                .unwrap_or(Ordering::Equal)
        });
        let Some(vehicle) = vehicles.first_mut() else {
            break;
        };
        let departure = vehicle.total_time_taken;

        let mut outbound: f64 = 0.0;
        let mut deliveries = Vec::with_capacity(group.len());

        for &ind in &group.members {
            let parcel = &parcels[ind];
            let leg = leg_time(parcel.distance, fleet.max_speed);

            deliveries.push(ScheduledDelivery {
                parcel_id: parcel.id.clone(),
                delivery_time: DeliveryTime(leg + departure),
            });

            outbound = outbound.max(leg);
            if leg > vehicle.total_time_taken {
                vehicle.total_time_taken = leg;
            }
        }

        vehicle.total_time_taken *= 2.0;

        debug!(
            "Vehicle {} departs at {:.2}, back at {:.2} with {} parcels",
            vehicle.id,
            departure,
            vehicle.total_time_taken,
            deliveries.len()
        );

        trips.push(Trip {
            vehicle: vehicle.id,
            departure,
            outbound,
            returns_at: vehicle.total_time_taken,
            deliveries,
        });
    }

    trips
}
