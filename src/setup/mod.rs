pub mod init;
pub mod input;

pub use init::{init_tracing_and_env, load_offer_catalog, report_csv_path};
pub use input::{
    parse_courier_line, parse_fleet_line, parse_parcel_line, wants_delivery_time, CourierInput,
    Session,
};
