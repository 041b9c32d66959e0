//! QPU.Math+ safety ceilings and device safety classifications

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Amount ceilings (in smallest token unit)
pub mod limits {
    /// Sentinel for the largest representable unsigned 64-bit amount
    pub const MAX_UINT64: u64 = u64::MAX;

    pub const MIN_AMOUNT: u64 = 0;

    /// 1B tokens max per transfer
    pub const MAX_TRANSFER_AMOUNT: u64 = 1_000_000_000_000_000_000;

    /// 10B tokens max delegation
    pub const MAX_DELEGATION: u64 = 10_000_000_000_000_000_000;
}

/// Amounts are serialized as decimal strings; most exceed the signed 64-bit
/// integer range of TOML and JSON consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyLimits {
    #[serde(with = "decimal_string")]
    pub max_uint64: u64,
    #[serde(with = "decimal_string")]
    pub min_amount: u64,
    #[serde(with = "decimal_string")]
    pub max_transfer_amount: u64,
    #[serde(with = "decimal_string")]
    pub max_delegation: u64,
}

impl Default for SafetyLimits {
    fn default() -> Self {
        Self {
            max_uint64: limits::MAX_UINT64,
            min_amount: limits::MIN_AMOUNT,
            max_transfer_amount: limits::MAX_TRANSFER_AMOUNT,
            max_delegation: limits::MAX_DELEGATION,
        }
    }
}

impl SafetyLimits {
    /// `min_amount <= max_transfer_amount <= max_delegation <= max_uint64`
    pub fn is_ordered(&self) -> bool {
        self.min_amount <= self.max_transfer_amount
            && self.max_transfer_amount <= self.max_delegation
            && self.max_delegation <= self.max_uint64
    }

    pub fn allows_transfer(&self, amount: u64) -> bool {
        (self.min_amount..=self.max_transfer_amount).contains(&amount)
    }

    pub fn allows_delegation(&self, amount: u64) -> bool {
        (self.min_amount..=self.max_delegation).contains(&amount)
    }
}

mod decimal_string {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

keyed_enum! {
    /// Nanoswarm safety classifications, least to most restricted
    pub enum NanoswarmClass: "nanoswarm class" {
        Minimal => "class_1_minimal",
        Controlled => "class_2_controlled",
        Contained => "class_3_contained",
        Restricted => "class_4_restricted",
    }
}

keyed_enum! {
    /// BCI safety levels
    pub enum BciSafetyLevel: "BCI safety level" {
        ReadOnly => "read_only",
        WriteSupervised => "write_supervised",
        WriteEmergency => "write_emergency",
    }
}

impl BciSafetyLevel {
    pub fn allows_write(&self) -> bool {
        !matches!(self, BciSafetyLevel::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_limits() {
        let limits = SafetyLimits::default();
        assert_eq!(limits.max_uint64, 18_446_744_073_709_551_615);
        assert!(limits.is_ordered());
        assert!(limits.allows_transfer(limits.max_transfer_amount));
        assert!(!limits.allows_transfer(limits.max_transfer_amount + 1));
        assert!(limits.allows_delegation(limits.max_transfer_amount + 1));
    }

    #[test]
    fn test_amounts_serialize_as_strings() {
        let json = serde_json::to_value(SafetyLimits::default()).unwrap();
        assert_eq!(json["max_uint64"], "18446744073709551615");
        assert_eq!(json["max_delegation"], "10000000000000000000");

        let back: SafetyLimits = serde_json::from_value(json).unwrap();
        assert_eq!(back, SafetyLimits::default());
    }

    #[test]
    fn test_classes_ordered() {
        let keys: Vec<&str> = NanoswarmClass::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            keys,
            [
                "class_1_minimal",
                "class_2_controlled",
                "class_3_contained",
                "class_4_restricted"
            ]
        );
        assert!(NanoswarmClass::Minimal < NanoswarmClass::Restricted);
    }

    #[test]
    fn test_bci_levels() {
        assert_eq!(BciSafetyLevel::ALL.len(), 3);
        assert!(!BciSafetyLevel::ReadOnly.allows_write());
        assert!("write_emergency".parse::<BciSafetyLevel>().unwrap().allows_write());
    }
}
