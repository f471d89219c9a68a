//! Quirk for the Legrand Cable Outlet with pilot wire functionality
//!
//! The outlet exposes two manufacturer-specific clusters. The manufacturer
//! cluster carries an opaque 16-bit device mode from which a friendly
//! on/off `wire_pilot_mode` boolean is derived; the wire pilot cluster
//! carries the six-valued heat mode used by French pilot-wire heaters.

pub mod manufacturer_cluster;
pub mod wire_pilot;

use quirks_core::{ClusterReplacement, ExposedEntity, QuirkDescriptor, QuirkError, QuirkRegistry};

pub use manufacturer_cluster::{LegrandCluster, MANUFACTURER_SPECIFIC_CLUSTER_ID};
pub use wire_pilot::{HeatMode, WirePilotCluster, WIRE_PILOT_CLUSTER_ID};

/// Legrand Group Zigbee manufacturer code
pub const LEGRAND_MANUFACTURER_CODE: u16 = 0x1021;

/// Manufacturer string as reported by the device (leading space included)
pub const LEGRAND: &str = " Legrand";

/// Model string as reported by the device (leading space included)
pub const CABLE_OUTLET: &str = " Cable outlet";

/// Registration descriptor for the Cable Outlet quirk
///
/// Replaces the device's default handlers for the manufacturer-specific
/// cluster (both roles) and the wire pilot cluster, and surfaces the
/// derived wire-pilot boolean as a switch.
#[must_use] pub fn descriptor() -> QuirkDescriptor {
    QuirkDescriptor {
        manufacturer: LEGRAND.to_string(),
        model: CABLE_OUTLET.to_string(),
        replaces: vec![
            ClusterReplacement::server(MANUFACTURER_SPECIFIC_CLUSTER_ID),
            ClusterReplacement::client(MANUFACTURER_SPECIFIC_CLUSTER_ID),
            ClusterReplacement::server(WIRE_PILOT_CLUSTER_ID),
        ],
        entities: vec![ExposedEntity::Switch {
            attribute: manufacturer_cluster::attrs::WIRE_PILOT_MODE.name.to_string(),
            cluster_id: MANUFACTURER_SPECIFIC_CLUSTER_ID,
            translation_key: "wire_pilot_mode".to_string(),
        }],
    }
}

/// Register the Cable Outlet quirk with the host registry
pub fn register(registry: &QuirkRegistry) -> Result<(), QuirkError> {
    registry.register(descriptor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quirks_core::ClusterRole;

    #[test]
    fn test_descriptor_replaces_both_clusters() {
        let desc = descriptor();
        assert_eq!(desc.manufacturer, " Legrand");
        assert_eq!(desc.model, " Cable outlet");

        let server_roles: Vec<u16> = desc
            .replaces
            .iter()
            .filter(|r| r.role == ClusterRole::Server)
            .map(|r| r.cluster_id)
            .collect();
        assert_eq!(server_roles, vec![0xFC01, 0xFC40]);
        assert!(desc
            .replaces
            .iter()
            .any(|r| r.cluster_id == 0xFC01 && r.role == ClusterRole::Client));
    }

    #[test]
    fn test_descriptor_exposes_wire_pilot_switch() {
        let desc = descriptor();
        let ExposedEntity::Switch {
            attribute,
            cluster_id,
            translation_key,
        } = &desc.entities[0];
        assert_eq!(attribute, "wire_pilot_mode");
        assert_eq!(*cluster_id, MANUFACTURER_SPECIFIC_CLUSTER_ID);
        assert_eq!(translation_key, "wire_pilot_mode");
    }

    #[test]
    fn test_register_with_registry() {
        let registry = QuirkRegistry::new();
        register(&registry).unwrap();
        assert!(registry.quirk_for(LEGRAND, CABLE_OUTLET).is_some());
    }
}
