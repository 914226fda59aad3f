use std::collections::HashSet;

use tracing::trace;

use crate::domain::types::{Parcel, ParcelGroup};

/// Greedy cover: walk groups in priority order and keep a group only if none of
/// its parcels were taken by an earlier accepted group. No partial acceptance.
pub fn select_disjoint_groups(groups: &[ParcelGroup], parcels: &[Parcel]) -> Vec<ParcelGroup> {
    let mut remaining: HashSet<&str> = parcels.iter().map(|p| p.id.as_str()).collect();
    let mut accepted = Vec::new();

    for group in groups {
        if remaining.is_empty() {
            break;
        }

        if group.ids(parcels).all(|id| remaining.contains(id)) {
            for id in group.ids(parcels) {
                remaining.remove(id);
            }
            accepted.push(group.clone());
        } else {
            trace!("Rejected group {:?}", group.ids(parcels).collect::<Vec<_>>());
        }
    }

    accepted
}
