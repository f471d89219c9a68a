//! Immutable attribute and command schema records
//!
//! A cluster's schema is a plain `'static` table of definitions, separate
//! from any behavior. Lookup misses are `None`, never errors: write
//! requests referencing unknown identifiers pass through untouched.

use crate::value::DataType;

/// Definition of a single cluster attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDef {
    /// Attribute identifier within the cluster
    pub id: u16,
    /// Stable attribute name
    pub name: &'static str,
    /// ZCL data type of the attribute value
    pub data_type: DataType,
    /// Requests referencing this attribute carry the manufacturer code
    pub manufacturer_specific: bool,
}

/// Definition of a cluster-specific command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDef {
    /// Command identifier within the cluster
    pub id: u8,
    /// Stable command name
    pub name: &'static str,
    /// The command carries the manufacturer code on the wire
    pub manufacturer_specific: bool,
}

/// Ordered attribute schema for one cluster
#[derive(Debug, Clone, Copy)]
pub struct AttributeSet {
    defs: &'static [AttributeDef],
}

impl AttributeSet {
    #[must_use] pub const fn new(defs: &'static [AttributeDef]) -> Self {
        Self { defs }
    }

    /// Look up an attribute definition by identifier
    #[must_use] pub fn find(&self, id: u16) -> Option<&'static AttributeDef> {
        self.defs.iter().find(|def| def.id == id)
    }

    /// Look up an attribute definition by name
    #[must_use] pub fn find_by_name(&self, name: &str) -> Option<&'static AttributeDef> {
        self.defs.iter().find(|def| def.name == name)
    }

    /// All definitions, in declaration order
    #[must_use] pub fn defs(&self) -> &'static [AttributeDef] {
        self.defs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ATTRS: AttributeSet = AttributeSet::new(&[
        AttributeDef {
            id: 0x0000,
            name: "mode",
            data_type: DataType::Data16,
            manufacturer_specific: true,
        },
        AttributeDef {
            id: 0x4000,
            name: "derived",
            data_type: DataType::Bool,
            manufacturer_specific: true,
        },
    ]);

    #[test]
    fn test_find_by_id() {
        assert_eq!(TEST_ATTRS.find(0x4000).map(|d| d.name), Some("derived"));
        assert!(TEST_ATTRS.find(0x1234).is_none());
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(TEST_ATTRS.find_by_name("mode").map(|d| d.id), Some(0x0000));
        assert!(TEST_ATTRS.find_by_name("missing").is_none());
    }
}
