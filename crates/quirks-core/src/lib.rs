//! Host-runtime contracts for Zigbee device quirks
//!
//! This crate defines the schema records, cluster behavior traits and
//! registration model that device-specific quirk crates are written
//! against. The device-management runtime itself (attribute registries,
//! binding, network transport, persistence) lives elsewhere; quirks only
//! consume and extend these contracts.

pub mod cluster;
pub mod error;
pub mod registry;
pub mod schema;
pub mod value;

pub use cluster::{AttributeSink, WriteResult, ZclStatus, ZclTransport};
pub use error::QuirkError;
pub use registry::{
    ClusterReplacement, ClusterRole, ExposedEntity, QuirkDescriptor, QuirkRegistry,
};
pub use schema::{AttributeDef, AttributeSet, CommandDef};
pub use value::{DataType, ZclValue};
