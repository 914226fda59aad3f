use std::fs;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::offer::{Offer, OfferSpec};
use crate::error::CatalogError;

const BUILTIN_OFFERS: &str = include_str!("../../data/offers.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    offers: Vec<OfferSpec>,
}

/// Offers available to parcels, looked up by their code (title).
#[derive(Debug, Clone, Default)]
pub struct OfferCatalog {
    offers: Vec<Offer>,
}

impl OfferCatalog {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    /// The standard OFR001, OFR002 and OFR003 offers.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_OFFERS)
    }

    pub fn load(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!("Loaded {} offers from {}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;

        let offers = file
            .offers
            .into_iter()
            .map(|spec| {
                let title = spec.title.clone();
                Offer::try_from(spec).map_err(|source| CatalogError::Invalid { title, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Offer catalog: {:?}", offers.iter().map(|o| &o.title).collect::<Vec<_>>());
        Ok(Self { offers })
    }

    /// First offer whose title matches `code` exactly.
    pub fn find(&self, code: &str) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.title == code)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.offers.iter().map(|offer| offer.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
