//! Errors raised when a registry or chat metadata fails validation
//!
//! The predicates on [`crate::ProtocolConstants`] are total and never fail.
//! These errors only surface from explicit validation passes: checking a
//! loaded registry against its bound invariants, and admitting chat metadata
//! against the registry's limits.

use thiserror::Error;

/// A registry value violates one of its bound invariants
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// Gas limits must satisfy `min <= max <= block_limit`
    #[error("Gas limits out of order: min {min}, max {max}, block_limit {block_limit}")]
    GasLimitsOutOfOrder { min: u64, max: u64, block_limit: u64 },

    /// Default gas price must lie within `[minimum, maximum]`
    #[error("Gas price default {default} outside [{minimum}, {maximum}]")]
    GasPriceOutOfRange { minimum: u64, default: u64, maximum: u64 },

    /// Voting periods must satisfy `min <= default <= max`
    #[error("Voting periods out of order: min {min}, default {default}, max {max} (blocks)")]
    VotingPeriodsOutOfOrder { min: u64, default: u64, max: u64 },

    /// Quorum or threshold outside `(0, 1]`
    #[error("{kind} {field} {value} is outside (0, 1]")]
    FractionOutOfRange {
        kind: String,
        field: &'static str,
        value: f64,
    },

    /// TPS burst target lower than its sustained baseline
    #[error("TPS target for {subsystem}: burst {burst} is below baseline {baseline}")]
    BurstBelowBaseline {
        subsystem: String,
        baseline: u64,
        burst: u64,
    },

    /// A limit that must be strictly positive is zero
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },

    /// Safety ceilings must satisfy `min_amount <= max_transfer <= max_delegation <= max_uint64`
    #[error("Safety limits out of order: min_amount {min_amount}, max_transfer {max_transfer_amount}, max_delegation {max_delegation}, max_uint64 {max_uint64}")]
    SafetyLimitsOutOfOrder {
        min_amount: u64,
        max_transfer_amount: u64,
        max_delegation: u64,
        max_uint64: u64,
    },

    #[error("Jurisdiction set is empty")]
    EmptyJurisdictionSet,

    #[error("Jurisdiction tag '{tag}' appears more than once")]
    DuplicateJurisdiction { tag: String },
}

/// Chat-native transaction metadata rejected at admission
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("chat_context_id is {len} characters, limit is {max}")]
    ContextIdTooLong { len: usize, max: usize },

    #[error("transcript_hash is {len} characters, limit is {max}")]
    TranscriptHashTooLong { len: usize, max: usize },

    #[error("{count} jurisdiction tags exceed limit of {max}")]
    TooManyJurisdictionTags { count: usize, max: usize },

    #[error("Invalid jurisdiction tag {tag}")]
    UnknownJurisdiction { tag: String },

    /// Field required by the transaction kind is absent
    #[error("{kind} transactions require {field}")]
    MissingField { field: &'static str, kind: String },
}

/// String key did not name any variant of a closed category
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {key}")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub key: String,
}
