//! Quirk registration descriptors and the load-time registry

use crate::error::QuirkError;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// ZCL cluster role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterRole {
    Server,
    Client,
}

/// One default cluster handler replaced by a quirk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterReplacement {
    pub cluster_id: u16,
    pub role: ClusterRole,
}

impl ClusterReplacement {
    /// Replace the server-role instance of a cluster
    #[must_use] pub fn server(cluster_id: u16) -> Self {
        Self {
            cluster_id,
            role: ClusterRole::Server,
        }
    }

    /// Replace the client-role instance of a cluster
    #[must_use] pub fn client(cluster_id: u16) -> Self {
        Self {
            cluster_id,
            role: ClusterRole::Client,
        }
    }
}

/// User-facing control surfaced from a quirk attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExposedEntity {
    /// A boolean attribute exposed as an on/off switch
    Switch {
        /// Attribute name within the cluster schema
        attribute: String,
        /// Cluster the attribute lives on
        cluster_id: u16,
        /// Key used by the frontend to localize the control's label
        translation_key: String,
    },
}

/// Declarative composition for one device quirk
///
/// Evaluated once when registered; carries no runtime behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuirkDescriptor {
    /// Manufacturer string exactly as the device reports it
    pub manufacturer: String,
    /// Model string exactly as the device reports it
    pub model: String,
    /// Default cluster handlers this quirk replaces
    pub replaces: Vec<ClusterReplacement>,
    /// Controls surfaced to the end user
    #[serde(default)]
    pub entities: Vec<ExposedEntity>,
}

impl QuirkDescriptor {
    /// Check internal consistency: every exposed entity must live on a
    /// cluster the descriptor actually replaces
    pub fn validate(&self) -> Result<(), QuirkError> {
        for entity in &self.entities {
            let ExposedEntity::Switch { cluster_id, .. } = entity;
            if !self.replaces.iter().any(|r| r.cluster_id == *cluster_id) {
                return Err(QuirkError::EntityClusterNotReplaced(*cluster_id));
            }
        }
        Ok(())
    }
}

/// Registry of quirks, keyed by the device identity strings
#[derive(Default)]
pub struct QuirkRegistry {
    quirks: DashMap<(String, String), QuirkDescriptor>,
}

impl QuirkRegistry {
    #[must_use] pub fn new() -> Self {
        Self {
            quirks: DashMap::new(),
        }
    }

    /// Register a quirk descriptor at load time
    ///
    /// Validates the descriptor and rejects duplicate registrations for
    /// the same manufacturer/model pair.
    pub fn register(&self, descriptor: QuirkDescriptor) -> Result<(), QuirkError> {
        descriptor.validate()?;

        let key = (descriptor.manufacturer.clone(), descriptor.model.clone());
        if self.quirks.contains_key(&key) {
            return Err(QuirkError::DuplicateQuirk {
                manufacturer: key.0,
                model: key.1,
            });
        }

        tracing::info!(
            "Registered quirk for {:?} / {:?} replacing {} cluster(s)",
            descriptor.manufacturer,
            descriptor.model,
            descriptor.replaces.len()
        );
        self.quirks.insert(key, descriptor);
        Ok(())
    }

    /// Look up the quirk for a device by its exact identity strings
    #[must_use] pub fn quirk_for(&self, manufacturer: &str, model: &str) -> Option<QuirkDescriptor> {
        self.quirks
            .get(&(manufacturer.to_owned(), model.to_owned()))
            .map(|r| r.value().clone())
    }

    /// Number of registered quirks
    #[must_use] pub fn len(&self) -> usize {
        self.quirks.len()
    }

    #[must_use] pub fn is_empty(&self) -> bool {
        self.quirks.is_empty()
    }
}
