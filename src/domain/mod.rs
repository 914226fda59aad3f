pub mod catalog;
pub mod offer;
pub mod plan;
pub mod types;

pub use catalog::OfferCatalog;
pub use offer::{Offer, OfferRules, OfferSpec, Operator, PricingRule, RuleSpec, Threshold};
pub use plan::{FleetPlan, ScheduledDelivery, Trip};
pub use types::{DeliveryCost, DeliveryTime, FleetSpec, Parcel, ParcelGroup, WeightEntry};
