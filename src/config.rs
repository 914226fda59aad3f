pub mod constant {
    /// Tariff applied per unit of parcel weight.
    pub const PER_KG_RATE: f64 = 10.0;
    /// Tariff applied per unit of delivery distance.
    pub const PER_KM_RATE: f64 = 5.0;

    pub const OFFERS_PATH_ENV: &str = "COURIER_OFFERS_PATH";
    pub const REPORT_CSV_ENV: &str = "COURIER_REPORT_CSV";

    // Subset enumeration doubles with every parcel; past this we only warn.
    pub const SUBSET_WARN_THRESHOLD: usize = 20;

    pub const SEED: u64 = 64;
    pub const DEMO_PARCEL_COUNT: usize = 8;
    pub const DEMO_BASE_COST: f64 = 100.0;
    /// (vehicle count, max speed, max load)
    pub const DEMO_FLEET: (usize, f64, f64) = (2, 70.0, 200.0);
}
