pub mod fleet_assignment;
