//! Phase 1: enumerate every parcel group that fits within the max load.
//!
//! Parcels are taken heaviest first. Each one extends every group recorded so
//! far that can still carry it, then opens a group of its own. The same set of
//! parcels is never produced twice here, but the construction order is what
//! later phases tie-break on, so it must not change.
//!
//! Scaling limit: n parcels can produce up to 2^n - 1 groups. Nothing caps
//! this; callers are expected to run small batches.

use std::cmp::Ordering;

use tracing::{debug, trace, warn};

use crate::config::constant::SUBSET_WARN_THRESHOLD;
use crate::domain::types::{Parcel, ParcelGroup, WeightEntry};

/// Parcels ordered by descending weight. Equal weights keep input order.
pub fn sort_by_heaviest(parcels: &[Parcel]) -> Vec<WeightEntry> {
    let mut weights: Vec<WeightEntry> = parcels
        .iter()
        .enumerate()
        .map(|(index, parcel)| WeightEntry {
            id: parcel.id.clone(),
            weight: parcel.weight,
            index,
        })
        .collect();

    // partial_cmp keeps 0.0 and -0.0 equal; NaN is rejected before we get here
    weights.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    weights
}

#[derive(Debug, Clone, Copy)]
struct SubsetRecord {
    parent: Option<usize>,
    item: usize,
    size: usize,
    weight: f64,
    distance: f64,
}

/// Groups stored as parent links: a record is its parent's group plus one parcel.
#[derive(Debug, Default)]
pub struct SubsetArena {
    records: Vec<SubsetRecord>,
}

impl SubsetArena {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn weight(&self, record: usize) -> f64 {
        self.records[record].weight
    }

    pub fn push_singleton(&mut self, item: usize, parcel: &Parcel) -> usize {
        self.records.push(SubsetRecord {
            parent: None,
            item,
            size: 1,
            weight: parcel.weight,
            distance: parcel.distance,
        });
        self.records.len() - 1
    }

    pub fn extend(&mut self, parent: usize, item: usize, parcel: &Parcel) -> usize {
        let base = self.records[parent];
        self.records.push(SubsetRecord {
            parent: Some(parent),
            item,
            size: base.size + 1,
            weight: base.weight + parcel.weight,
            distance: base.distance + parcel.distance,
        });
        self.records.len() - 1
    }

    /// Parcel indices of a record, oldest (heaviest) first.
    pub fn members(&self, record: usize) -> Vec<usize> {
        let mut members = Vec::with_capacity(self.records[record].size);
        let mut cursor = Some(record);
        while let Some(ind) = cursor {
            members.push(self.records[ind].item);
            cursor = self.records[ind].parent;
        }
        members.reverse();
        members
    }

    pub fn to_group(&self, record: usize) -> ParcelGroup {
        let rec = self.records[record];
        ParcelGroup {
            members: self.members(record),
            weight: rec.weight,
            distance: rec.distance,
        }
    }
}

/// Grow the arena with every group that fits `max_load`, in construction order.
pub fn build_arena(parcels: &[Parcel], weights: &[WeightEntry], max_load: f64) -> SubsetArena {
    let mut arena = SubsetArena::default();

    for entry in weights {
        let parcel = &parcels[entry.index];
        let existing = arena.len();

        for record in 0..existing {
            if arena.weight(record) + entry.weight <= max_load {
                arena.extend(record, entry.index, parcel);
            }
        }

        if entry.weight <= max_load {
            arena.push_singleton(entry.index, parcel);
        } else {
            trace!("Parcel {} ({}) exceeds max load {}", entry.id, entry.weight, max_load);
        }
    }

    arena
}

/// All groups whose total weight is within `max_load`, in construction order.
pub fn enumerate_subsets(parcels: &[Parcel], max_load: f64) -> Vec<ParcelGroup> {
    if parcels.len() > SUBSET_WARN_THRESHOLD {
        warn!(
            "Enumerating groups for {} parcels; this grows as 2^n",
            parcels.len()
        );
    }

    let weights = sort_by_heaviest(parcels);
    let arena = build_arena(parcels, &weights, max_load);

    let groups: Vec<ParcelGroup> = (0..arena.len())
        .filter(|&record| arena.weight(record) <= max_load)
        .map(|record| arena.to_group(record))
        .collect();

    debug!("Enumerated {} candidate groups", groups.len());
    groups
}
