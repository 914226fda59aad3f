use std::env;
use std::error::Error;

use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{OFFERS_PATH_ENV, REPORT_CSV_ENV};
use crate::domain::catalog::OfferCatalog;
use crate::error::CatalogError;

/// Initialize tracing and environment. Logs go to stderr so stdout stays the result.
pub fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(fmt::format::FmtSpan::CLOSE),
        )
        .try_init()?;

    dotenv().ok();
    Ok(())
}

/// Offers from `COURIER_OFFERS_PATH` if set, otherwise the built-in set.
pub fn load_offer_catalog() -> Result<OfferCatalog, CatalogError> {
    match env::var(OFFERS_PATH_ENV) {
        Ok(path) => OfferCatalog::load(&path),
        Err(_) => {
            let catalog = OfferCatalog::builtin()?;
            info!("Using {} built-in offers", catalog.len());
            Ok(catalog)
        }
    }
}

/// Where to export the result table, if anywhere.
pub fn report_csv_path() -> Option<String> {
    env::var(REPORT_CSV_ENV).ok().filter(|path| !path.trim().is_empty())
}
