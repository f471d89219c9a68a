//! Cluster behavior contracts between quirks and the host runtime

use crate::error::QuirkError;
use crate::value::ZclValue;
use serde::{Deserialize, Serialize};

/// ZCL write-attributes status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ZclStatus {
    Success = 0x00,
    Failure = 0x01,
    UnsupportedAttribute = 0x86,
    InvalidValue = 0x87,
    ReadOnly = 0x88,
    InvalidDataType = 0x8D,
}

/// Per-attribute outcome of a delegated write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResult {
    pub attr_id: u16,
    pub status: ZclStatus,
}

impl WriteResult {
    /// A successful write record for the given attribute
    #[must_use] pub fn success(attr_id: u16) -> Self {
        Self {
            attr_id,
            status: ZclStatus::Success,
        }
    }
}

/// Outbound ZCL traffic, owned by the host runtime
///
/// Quirks rewrite requests and delegate here; failure semantics are
/// inherited unchanged from the implementation. The delegated call is the
/// only suspension point on the write path.
#[allow(async_fn_in_trait)]
pub trait ZclTransport {
    /// Write a batch of attributes, in request order
    async fn write_attributes(
        &self,
        attrs: Vec<(u16, ZclValue)>,
        manufacturer: Option<u16>,
    ) -> Result<Vec<WriteResult>, QuirkError>;

    /// Send a cluster-specific command
    async fn command(
        &self,
        command_id: u8,
        payload: Vec<u8>,
        manufacturer: Option<u16>,
    ) -> Result<(), QuirkError>;
}

/// The host-owned per-cluster attribute cache and report fan-out
///
/// Invocation order is the observable ordering of update events. Called
/// on the host's dispatch path for incoming reports, so implementations
/// must not block.
pub trait AttributeSink {
    /// Store and publish an observed attribute value
    fn update_attribute(&mut self, attr_id: u16, value: ZclValue);
}
