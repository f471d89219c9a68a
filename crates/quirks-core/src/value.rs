//! Typed ZCL attribute values

use serde::{Deserialize, Serialize};

/// ZCL data-type discriminants used by manufacturer-specific quirks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DataType {
    Data16 = 0x09,
    Bool = 0x10,
    Enum8 = 0x30,
}

/// A typed ZCL attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ZclValue {
    /// Boolean (ZCL type 0x10)
    Bool(bool),
    /// Opaque 2-byte data, wire byte order preserved as-is (ZCL type 0x09)
    Data16([u8; 2]),
    /// 8-bit enumeration (ZCL type 0x30)
    Enum8(u8),
}

impl ZclValue {
    /// The ZCL data type of this value
    #[must_use] pub fn data_type(&self) -> DataType {
        match self {
            Self::Bool(_) => DataType::Bool,
            Self::Data16(_) => DataType::Data16,
            Self::Enum8(_) => DataType::Enum8,
        }
    }

    /// The boolean payload, if this is a Bool value
    #[must_use] pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Truthiness of the value: `false`, zero and the all-zero byte pair
    /// are falsy, everything else is truthy
    #[must_use] pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Data16(bytes) => *bytes != [0x00, 0x00],
            Self::Enum8(v) => *v != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type() {
        assert_eq!(ZclValue::Bool(true).data_type(), DataType::Bool);
        assert_eq!(ZclValue::Data16([0x02, 0x00]).data_type(), DataType::Data16);
        assert_eq!(ZclValue::Enum8(3).data_type(), DataType::Enum8);
    }

    #[test]
    fn test_truthiness() {
        assert!(ZclValue::Bool(true).is_truthy());
        assert!(!ZclValue::Bool(false).is_truthy());
        assert!(ZclValue::Enum8(1).is_truthy());
        assert!(!ZclValue::Enum8(0).is_truthy());
        assert!(ZclValue::Data16([0x01, 0x00]).is_truthy());
        assert!(!ZclValue::Data16([0x00, 0x00]).is_truthy());
    }

    #[test]
    fn test_as_bool_only_for_bool() {
        assert_eq!(ZclValue::Bool(false).as_bool(), Some(false));
        assert_eq!(ZclValue::Enum8(1).as_bool(), None);
    }
}
