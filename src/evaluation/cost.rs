use crate::config::constant::{PER_KG_RATE, PER_KM_RATE};
use crate::domain::types::{DeliveryCost, Parcel};

/// Linear tariff on weight and distance, less the parcel's offer if it applies.
pub fn compute_delivery_cost(parcel: &Parcel) -> DeliveryCost {
    let subtotal = find_subtotal(parcel.base_cost, parcel.weight, parcel.distance);

    let discount = match &parcel.offer {
        None => 0.0,
        Some(offer) => offer.calculate_discount(parcel.weight, parcel.distance, subtotal),
    };

    DeliveryCost {
        subtotal,
        discount,
        total: subtotal - discount,
    }
}

pub fn find_subtotal(base_cost: f64, weight: f64, distance: f64) -> f64 {
    base_cost + weight * PER_KG_RATE + distance * PER_KM_RATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::offer::{Offer, Operator, RuleSpec, Threshold};
    use crate::domain::OfferCatalog;

    fn ten_percent_offer() -> Offer {
        Offer::new(
            "OFFER01",
            10.0,
            RuleSpec::new(Operator::Between, Threshold::Range { from: 50.0, to: 150.0 }),
            RuleSpec::new(Operator::GreaterThan, Threshold::Scalar(200.0)),
        )
        .unwrap()
    }

    #[test]
    fn applies_matching_offer() {
        let parcel = Parcel::new("PKG1", 60.0, 500.0, 100.0).with_offer(Some(ten_percent_offer()));
        let cost = compute_delivery_cost(&parcel);

        assert_eq!(cost.subtotal, 3200.0);
        assert_eq!(cost.subtotal / cost.discount, 10.0);
        assert_eq!(cost.total, 2880.0);
    }

    #[test]
    fn no_offer_means_no_discount() {
        let cost = Parcel::new("PKG1", 60.0, 500.0, 100.0).calculate_delivery_cost();
        assert_eq!(cost.discount, 0.0);
        assert_eq!(cost.total, cost.subtotal);
    }

    #[test]
    fn unmatched_offer_means_no_discount() {
        let parcel = Parcel::new("PKG1", 30.0, 100.0, 100.0).with_offer(Some(ten_percent_offer()));
        let cost = parcel.calculate_delivery_cost();
        assert_eq!(cost.discount, 0.0);
        assert_eq!(cost.total, 1100.0);
    }

    #[test]
    fn builtin_offers_price_the_sample_batch() {
        let catalog = OfferCatalog::builtin().unwrap();
        let with = |id: &str, w: f64, d: f64, code: &str| {
            Parcel::new(id, w, d, 100.0).with_offer(catalog.find(code).cloned())
        };

        let pkg1 = with("PKG1", 5.0, 5.0, "OFR001").calculate_delivery_cost();
        let pkg2 = with("PKG2", 15.0, 5.0, "OFR002").calculate_delivery_cost();
        let pkg3 = with("PKG3", 10.0, 100.0, "OFR003").calculate_delivery_cost();

        assert_eq!((pkg1.discount, pkg1.total), (0.0, 175.0));
        assert_eq!((pkg2.discount, pkg2.total), (0.0, 275.0));
        assert_eq!((pkg3.discount, pkg3.total), (35.0, 665.0));
    }
}
