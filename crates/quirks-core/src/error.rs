//! Error types shared by quirk crates

use thiserror::Error;

/// Errors surfaced by quirk operations
#[derive(Error, Debug)]
pub enum QuirkError {
    /// Opaque failure propagated from the host transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// A quirk for this manufacturer/model pair is already registered
    #[error("Quirk already registered for {manufacturer:?} / {model:?}")]
    DuplicateQuirk { manufacturer: String, model: String },

    /// A descriptor exposes an entity on a cluster it does not replace
    #[error("Entity references cluster {0:#06x} which is not replaced by the descriptor")]
    EntityClusterNotReplaced(u16),

    /// Enumeration code outside the defined range
    #[error("Unsupported enumeration value: {0:#04x}")]
    UnsupportedValue(u8),
}
