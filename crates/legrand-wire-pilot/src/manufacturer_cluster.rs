//! Legrand manufacturer-specific cluster (0xFC01)
//!
//! Carries the opaque device mode and the indicator LED flags. The friendly
//! `wire_pilot_mode` boolean is synthetic: writes to it are rewritten into
//! `device_mode` writes, and observed `device_mode` values derive it back.

use quirks_core::{AttributeSink, QuirkError, WriteResult, ZclTransport, ZclValue};

/// Cluster identifier of the Legrand manufacturer-specific cluster
pub const MANUFACTURER_SPECIFIC_CLUSTER_ID: u16 = 0xFC01;

/// Device mode payload selecting wire-pilot control, heating on
pub const DEVICE_MODE_WIRE_PILOT_ON: [u8; 2] = [0x02, 0x00];

/// Device mode payload selecting wire-pilot control, heating off
pub const DEVICE_MODE_WIRE_PILOT_OFF: [u8; 2] = [0x01, 0x00];

/// Attribute schema for cluster 0xFC01
pub mod attrs {
    use quirks_core::{AttributeDef, AttributeSet, DataType};

    /// Opaque 16-bit device mode reported by the outlet
    pub const DEVICE_MODE: AttributeDef = AttributeDef {
        id: 0x0000,
        name: "device_mode",
        data_type: DataType::Data16,
        manufacturer_specific: true,
    };

    /// Indicator LED behavior while the output is off
    pub const LED_DARK: AttributeDef = AttributeDef {
        id: 0x0001,
        name: "led_dark",
        data_type: DataType::Bool,
        manufacturer_specific: true,
    };

    /// Indicator LED behavior while the output is on
    pub const LED_ON: AttributeDef = AttributeDef {
        id: 0x0002,
        name: "led_on",
        data_type: DataType::Bool,
        manufacturer_specific: true,
    };

    /// Synthetic boolean derived from `DEVICE_MODE`; never written directly
    pub const WIRE_PILOT_MODE: AttributeDef = AttributeDef {
        id: 0x4000,
        name: "wire_pilot_mode",
        data_type: DataType::Bool,
        manufacturer_specific: true,
    };

    /// Lookup table over the cluster's attributes
    pub const ALL: AttributeSet =
        AttributeSet::new(&[DEVICE_MODE, LED_DARK, LED_ON, WIRE_PILOT_MODE]);
}

/// Device mode payload for a wire-pilot switch state
#[must_use] pub fn device_mode_for(on: bool) -> [u8; 2] {
    if on {
        DEVICE_MODE_WIRE_PILOT_ON
    } else {
        DEVICE_MODE_WIRE_PILOT_OFF
    }
}

/// Derived update produced by an observed attribute value, if any
///
/// An observed `device_mode` yields a `wire_pilot_mode` update, true iff
/// the mode code equals the pilot-on literal byte-for-byte. Unrecognized
/// codes derive `false` rather than an error.
#[must_use] pub fn derived_update(attr_id: u16, value: &ZclValue) -> Option<(u16, ZclValue)> {
    if attr_id != attrs::DEVICE_MODE.id {
        return None;
    }
    let on = matches!(value, ZclValue::Data16(mode) if *mode == DEVICE_MODE_WIRE_PILOT_ON);
    Some((attrs::WIRE_PILOT_MODE.id, ZclValue::Bool(on)))
}

/// Behavior for the Legrand manufacturer-specific cluster
///
/// Stateless apart from the transport handle; the attribute cache is owned
/// by the host runtime and reached through [`AttributeSink`].
pub struct LegrandCluster<T> {
    transport: T,
}

impl<T: ZclTransport> LegrandCluster<T> {
    #[must_use] pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get the underlying transport
    #[must_use] pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Write attributes, substituting the synthetic wire-pilot boolean
    ///
    /// An entry resolving to `wire_pilot_mode` becomes a `device_mode`
    /// write with the matching mode code; every other entry, known or not,
    /// passes through with key and value unmodified. Failure semantics are
    /// the transport's.
    pub async fn write_attributes(
        &self,
        attributes: Vec<(u16, ZclValue)>,
        manufacturer: Option<u16>,
    ) -> Result<Vec<WriteResult>, QuirkError> {
        let mut rewritten = Vec::with_capacity(attributes.len());
        for (attr_id, value) in attributes {
            match attrs::ALL.find(attr_id) {
                Some(def) if def.id == attrs::WIRE_PILOT_MODE.id => {
                    let on = value.is_truthy();
                    let mode = device_mode_for(on);
                    tracing::debug!(
                        "Rewriting wire_pilot_mode={} to device_mode={:02x?}",
                        on,
                        mode
                    );
                    rewritten.push((attrs::DEVICE_MODE.id, ZclValue::Data16(mode)));
                }
                _ => rewritten.push((attr_id, value)),
            }
        }
        self.transport
            .write_attributes(rewritten, manufacturer)
            .await
    }

    /// Apply an observed attribute value and its derived updates
    ///
    /// The raw update always reaches the sink first; an observed
    /// `device_mode` additionally publishes the derived `wire_pilot_mode`
    /// boolean. Runs synchronously on the host's dispatch path.
    pub fn handle_attribute_update<S: AttributeSink>(
        &self,
        sink: &mut S,
        attr_id: u16,
        value: ZclValue,
    ) {
        let derived = derived_update(attr_id, &value);
        sink.update_attribute(attr_id, value);
        if let Some((derived_id, derived_value)) = derived {
            tracing::debug!("Derived update {:#06x} = {:?}", derived_id, derived_value);
            sink.update_attribute(derived_id, derived_value);
        }
    }
}
