//! # Service Catalog
//!
//! The static list of bookable services and the professionals offering them.
//! Both are loaded from JSON seed files once at startup and never change while
//! the process runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Service {
    /// Number or string; compared by exact JSON equality
    pub id: Value,
    pub name: String,
    /// Any other seed fields (description, price, sub-services...) passed through as-is
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Professional {
    pub id: Value,
    pub name: String,
    /// Id of the [`Service`] this professional offers, same JSON type as that id
    pub service_id: Value,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Read-only catalog of services and professionals.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<Service>,
    professionals: Vec<Professional>,
}

impl Catalog {
    /// Reads and parses both seed files.
    pub fn load(
        services_path: impl AsRef<Path>,
        professionals_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let services_raw = read_file(services_path.as_ref())?;
        let professionals_raw = read_file(professionals_path.as_ref())?;
        Self::from_json(&services_raw, &professionals_raw)
    }

    /// Builds the catalog from the raw JSON arrays.
    pub fn from_json(services_raw: &str, professionals_raw: &str) -> Result<Self, CatalogError> {
        let services: Vec<Service> =
            serde_json::from_str(services_raw).map_err(|source| CatalogError::Parse {
                what: "services",
                source,
            })?;
        let professionals: Vec<Professional> = serde_json::from_str(professionals_raw)
            .map_err(|source| CatalogError::Parse {
                what: "professionals",
                source,
            })?;

        for professional in professionals
            .iter()
            .filter(|p| !services.iter().any(|s| s.id == p.service_id))
        {
            warn!(
                professional_id = %professional.id,
                service_id = %professional.service_id,
                "Professional references an unknown service"
            );
        }

        info!(
            services = services.len(),
            professionals = professionals.len(),
            "Catalog loaded"
        );

        Ok(Self {
            services,
            professionals,
        })
    }

    /// All services, unfiltered.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Professionals, optionally narrowed to the service with exactly `service_name`.
    ///
    /// No filter returns everyone. A filter naming no known service returns nothing.
    pub fn professionals(&self, service_name: Option<&str>) -> Vec<Professional> {
        let Some(name) = service_name.filter(|name| !name.is_empty()) else {
            return self.professionals.clone();
        };

        let Some(service) = self.services.iter().find(|s| s.name == name) else {
            return Vec::new();
        };

        self.professionals
            .iter()
            .filter(|p| p.service_id == service.id)
            .cloned()
            .collect()
    }
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })
}
