use std::collections::HashSet;

use tracing::{info, span, warn, Level};

use crate::domain::plan::FleetPlan;
use crate::domain::types::{FleetSpec, Parcel};
use crate::error::FleetError;

use super::cover::select_disjoint_groups;
use super::priority::sort_by_priority;
use super::subsets::enumerate_subsets;
use super::timing::schedule_trips;

/// Check parcel ids are unique and weights/distances are usable numbers.
fn validate_parcels(parcels: &[Parcel]) -> Result<(), FleetError> {
    let mut seen = HashSet::with_capacity(parcels.len());

    for parcel in parcels {
        for (field, value) in [("weight", parcel.weight), ("distance", parcel.distance)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FleetError::InvalidParcel {
                    id: parcel.id.clone(),
                    field,
                    value,
                });
            }
        }
        if !seen.insert(parcel.id.as_str()) {
            return Err(FleetError::DuplicateParcelId(parcel.id.clone()));
        }
    }

    Ok(())
}

/// Run the four assignment phases and describe the resulting trips.
pub fn plan_fleet(parcels: &[Parcel], fleet: &FleetSpec) -> Result<FleetPlan, FleetError> {
    fleet.validate()?;
    validate_parcels(parcels)?;

    let plan_span = span!(
        Level::INFO,
        "plan_fleet",
        parcels = parcels.len(),
        vehicles = fleet.vehicle_count
    );
    let _plan_guard = plan_span.enter();

    let mut groups = {
        let span = span!(Level::DEBUG, "enumerate_subsets");
        let _g = span.enter();
        enumerate_subsets(parcels, fleet.max_load)
    };

    {
        let span = span!(Level::DEBUG, "sort_by_priority");
        let _g = span.enter();
        sort_by_priority(&mut groups);
    }

    let accepted = {
        let span = span!(Level::DEBUG, "select_disjoint_groups");
        let _g = span.enter();
        select_disjoint_groups(&groups, parcels)
    };

    let trips = {
        let span = span!(Level::DEBUG, "schedule_trips");
        let _g = span.enter();
        schedule_trips(&accepted, parcels, fleet)
    };

    let assigned: HashSet<usize> = accepted.iter().flat_map(|g| g.members.iter().copied()).collect();
    let unassigned: Vec<String> = parcels
        .iter()
        .enumerate()
        .filter(|(ind, _)| !assigned.contains(ind))
        .map(|(_, parcel)| parcel.id.clone())
        .collect();

    if !unassigned.is_empty() {
        warn!(
            "{} parcels could not be assigned to any trip: {:?}",
            unassigned.len(),
            unassigned
        );
    }

    let plan = FleetPlan { trips, unassigned };
    info!(
        "Planned {} trips, last vehicle back at {:.2}",
        plan.trips.len(),
        plan.makespan()
    );

    Ok(plan)
}

/// Copies of the planned parcels, sorted by id, each carrying its delivery time.
pub fn apply_plan(parcels: &[Parcel], plan: &FleetPlan) -> Vec<Parcel> {
    plan.deliveries_by_id()
        .into_iter()
        .filter_map(|delivery| {
            parcels
                .iter()
                .find(|parcel| parcel.id == delivery.parcel_id)
                .map(|parcel| Parcel {
                    delivery_time: Some(delivery.delivery_time),
                    ..parcel.clone()
                })
        })
        .collect()
}

/// Assigned parcels, sorted by id, each carrying its delivery time.
///
/// The input is left untouched. Parcels no trip covers are not returned; see
/// [`FleetPlan::unassigned`] via [`plan_fleet`].
pub fn assign_fleet(parcels: &[Parcel], fleet: &FleetSpec) -> Result<Vec<Parcel>, FleetError> {
    let plan = plan_fleet(parcels, fleet)?;
    Ok(apply_plan(parcels, &plan))
}
