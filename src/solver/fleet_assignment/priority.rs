use std::cmp::Ordering;

use crate::domain::types::ParcelGroup;

/// Larger groups first, then heavier, then shorter total distance.
pub fn group_priority(a: &ParcelGroup, b: &ParcelGroup) -> Ordering {
    b.len()
        .cmp(&a.len())
        .then_with(|| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal))
        .then_with(|| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal))
}

/// Stable: groups that tie on every key keep their enumeration order.
pub fn sort_by_priority(groups: &mut [ParcelGroup]) {
    groups.sort_by(group_priority);
}
