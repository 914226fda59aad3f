use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::catalog::OfferCatalog;
use crate::domain::types::Parcel;

/// Deterministic parcels `pkg1..pkgN` with integral weights and distances in 1..=200.
pub fn generate_random_parcels(count: usize, seed: u64, base_cost: f64) -> Vec<Parcel> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (1..=count)
        .map(|n| {
            let weight = rng.gen_range(1..=200) as f64;
            let distance = rng.gen_range(1..=200) as f64;
            Parcel::new(format!("pkg{n}"), weight, distance, base_cost)
        })
        .collect()
}

/// Give roughly two thirds of the parcels a random offer from the catalog.
pub fn assign_random_offers(parcels: &mut [Parcel], catalog: &OfferCatalog, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let codes: Vec<&str> = catalog.titles().collect();

    for parcel in parcels.iter_mut() {
        if rng.gen_bool(1.0 / 3.0) {
            continue;
        }
        parcel.offer = codes
            .choose(&mut rng)
            .and_then(|code| catalog.find(code))
            .cloned();
    }
}

/// Parcels for the demo run, offers included.
pub fn generate_demo_parcels(
    count: usize,
    seed: u64,
    base_cost: f64,
    catalog: &OfferCatalog,
) -> Vec<Parcel> {
    let mut parcels = generate_random_parcels(count, seed, base_cost);
    assign_random_offers(&mut parcels, catalog, seed);

    info!(
        "Generated {} demo parcels: {:?}",
        parcels.len(),
        parcels
            .iter()
            .map(|p| (&p.id, p.weight, p.distance))
            .collect::<Vec<_>>()
    );
    parcels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_parcels() {
        assert_eq!(generate_random_parcels(6, 7, 100.0), generate_random_parcels(6, 7, 100.0));
    }

    #[test]
    fn values_stay_in_range() {
        let parcels = generate_random_parcels(50, 3, 100.0);
        assert_eq!(parcels.len(), 50);
        assert_eq!(parcels[49].id, "pkg50");
        assert!(parcels
            .iter()
            .all(|p| (1.0..=200.0).contains(&p.weight) && (1.0..=200.0).contains(&p.distance)));
    }

    #[test]
    fn offers_come_from_catalog() {
        let catalog = OfferCatalog::builtin().unwrap();
        let parcels = generate_demo_parcels(30, 11, 100.0, &catalog);
        for offer in parcels.iter().filter_map(|p| p.offer.as_ref()) {
            assert!(catalog.find(&offer.title).is_some());
        }
    }
}
