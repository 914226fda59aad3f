pub mod cost;

pub use cost::{compute_delivery_cost, find_subtotal};
