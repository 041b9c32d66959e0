//! # ALN Protocol Constants
//!
//! Single source of truth for ALN protocol constants. Contracts, SDKs, CLIs
//! and services read values from this crate instead of hard-coding them.
//!
//! ## Features
//!
//! - **Treasury**: Reserved treasury address and live flag
//! - **Network**: Block time, gas limits and pricing, ports, rate limits
//! - **Governance**: Voting periods and per-kind quorum/threshold
//! - **Compliance**: Jurisdiction tags, chat field limits, policy versions
//! - **Registry**: [`ProtocolConstants`] bundles all of the above, with
//!   validation and deploy-time overrides
//!
//! ## Usage
//!
//! ```rust
//! use aln_config::{is_valid_jurisdiction, is_valid_treasury_address, reference, ProposalKind};
//!
//! assert!(is_valid_treasury_address("ALN18sd2ujv24ual9c9pshtxys6j8knh6xaek9z83t"));
//! assert!(is_valid_jurisdiction("GDPR"));
//!
//! let quorum = reference().requirement(ProposalKind::TreasurySpend).quorum;
//! assert_eq!(quorum, 0.5);
//! ```

#[macro_use]
mod keyed;

pub mod compliance;
pub mod error;
pub mod governance;
pub mod loader;
pub mod network;
pub mod performance;
pub mod registry;
pub mod safety;
pub mod treasury;

// Re-export commonly used types
pub use compliance::{
    is_valid_jurisdiction, parse_jurisdiction_tags, ChatFieldLimits, ChatMetadata,
    JurisdictionSet, PolicyVersions, RegulatoryRegime, TransactionKind, JURISDICTIONS,
};
pub use error::{MetadataError, RegistryError, UnknownKey};
pub use governance::{
    governance_address, GovernanceAddress, GovernancePeriods, GovernancePolicyTag, ProposalKind,
    ProposalRequirement, ProposalRequirementOverride, ProposalRequirements,
    ProposalRequirementsOverride,
};
pub use loader::load_constants;
pub use network::{ApiTier, GasLimits, GasPrice, NetworkParameters, PortAssignments, RateLimits, Service};
pub use performance::{Subsystem, TpsTarget, TpsTargetOverride, TpsTargets, TpsTargetsOverride};
pub use registry::{reference, ProtocolConstants};
pub use safety::{BciSafetyLevel, NanoswarmClass, SafetyLimits};
pub use treasury::{
    is_treasury_live, is_valid_treasury_address, TreasuryConfig, TreasuryRoutingPurpose,
    ALN_TREASURY_ADDRESS, ALN_TREASURY_LIVE,
};
