//! Governance parameters
//!
//! Voting periods are counted in blocks. Quorum is the fraction of eligible
//! voting power that must participate; threshold is the fraction of
//! participating votes needed for approval.

use serde::{Deserialize, Serialize};

/// Governance voting periods (in blocks)
pub mod periods {
    /// ~1.4 hours at 5s blocks
    pub const MIN_VOTING: u64 = 1_000;

    /// ~5.8 days
    pub const MAX_VOTING: u64 = 100_000;

    /// 1 day
    pub const DEFAULT_VOTING: u64 = 17_280;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernancePeriods {
    pub min_voting: u64,
    pub default_voting: u64,
    pub max_voting: u64,
}

impl Default for GovernancePeriods {
    fn default() -> Self {
        Self {
            min_voting: periods::MIN_VOTING,
            default_voting: periods::DEFAULT_VOTING,
            max_voting: periods::MAX_VOTING,
        }
    }
}

impl GovernancePeriods {
    /// `min_voting <= default_voting <= max_voting`
    pub fn is_ordered(&self) -> bool {
        self.min_voting <= self.default_voting && self.default_voting <= self.max_voting
    }

    /// Clamp a requested voting period into the allowed range
    pub fn clamp(&self, blocks: u64) -> u64 {
        blocks.clamp(self.min_voting, self.max_voting.max(self.min_voting))
    }
}

keyed_enum! {
    /// Governance proposal categories
    pub enum ProposalKind: "proposal kind" {
        ParameterChange => "PARAMETER_CHANGE",
        TreasurySpend => "TREASURY_SPEND",
        ContractUpgrade => "CONTRACT_UPGRADE",
    }
}

/// Participation and approval fractions for one proposal kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProposalRequirement {
    pub quorum: f64,
    pub threshold: f64,
}

impl ProposalRequirement {
    pub const fn new(quorum: f64, threshold: f64) -> Self {
        Self { quorum, threshold }
    }

    /// Whether a tally passes
    ///
    /// `participating` out of `eligible` voting power took part and
    /// `approving` of the participants voted yes. An inconsistent tally
    /// (more participants than eligible, or more approvals than participants)
    /// never passes.
    pub fn is_met(&self, eligible: u64, participating: u64, approving: u64) -> bool {
        if eligible == 0 || participating == 0 {
            return false;
        }
        if participating > eligible || approving > participating {
            return false;
        }
        let turnout = participating as f64 / eligible as f64;
        let approval = approving as f64 / participating as f64;
        turnout >= self.quorum && approval >= self.threshold
    }
}

pub const PARAMETER_CHANGE: ProposalRequirement = ProposalRequirement::new(0.4, 0.66);
pub const TREASURY_SPEND: ProposalRequirement = ProposalRequirement::new(0.5, 0.75);
pub const CONTRACT_UPGRADE: ProposalRequirement = ProposalRequirement::new(0.6, 0.8);

/// Requirements for every proposal kind
///
/// Deserializes field-wise over the reference values, so a source that sets
/// only `treasury_spend.quorum` keeps the reference threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProposalRequirementsOverride")]
pub struct ProposalRequirements {
    pub parameter_change: ProposalRequirement,
    pub treasury_spend: ProposalRequirement,
    pub contract_upgrade: ProposalRequirement,
}

impl Default for ProposalRequirements {
    fn default() -> Self {
        Self {
            parameter_change: PARAMETER_CHANGE,
            treasury_spend: TREASURY_SPEND,
            contract_upgrade: CONTRACT_UPGRADE,
        }
    }
}

/// Optional quorum and threshold for one proposal kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProposalRequirementOverride {
    pub quorum: Option<f64>,
    pub threshold: Option<f64>,
}

impl ProposalRequirementOverride {
    pub fn apply(self, base: ProposalRequirement) -> ProposalRequirement {
        ProposalRequirement {
            quorum: self.quorum.unwrap_or(base.quorum),
            threshold: self.threshold.unwrap_or(base.threshold),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProposalRequirementsOverride {
    pub parameter_change: ProposalRequirementOverride,
    pub treasury_spend: ProposalRequirementOverride,
    pub contract_upgrade: ProposalRequirementOverride,
}

impl From<ProposalRequirementsOverride> for ProposalRequirements {
    fn from(overrides: ProposalRequirementsOverride) -> Self {
        Self {
            parameter_change: overrides.parameter_change.apply(PARAMETER_CHANGE),
            treasury_spend: overrides.treasury_spend.apply(TREASURY_SPEND),
            contract_upgrade: overrides.contract_upgrade.apply(CONTRACT_UPGRADE),
        }
    }
}

impl ProposalRequirements {
    pub fn requirement(&self, kind: ProposalKind) -> &ProposalRequirement {
        match kind {
            ProposalKind::ParameterChange => &self.parameter_change,
            ProposalKind::TreasurySpend => &self.treasury_spend,
            ProposalKind::ContractUpgrade => &self.contract_upgrade,
        }
    }
}

keyed_enum! {
    /// Accounts reserved for governance. Placeholders until genesis assigns
    /// the final bech32 addresses.
    pub enum GovernanceAddress: "governance address" {
        /// Governance council and proposal registry
        Council => "COUNCIL",
        /// Policy and compliance registry submissions
        PolicyRegistry => "POLICY_REGISTRY",
        /// Migragraph and bridge governance hooks
        MigragraphRouter => "MIGRAGRAPH_ROUTER",
    }
}

impl GovernanceAddress {
    pub fn address(&self) -> &'static str {
        match self {
            GovernanceAddress::Council => "aln1governance000000000000000000000000000",
            GovernanceAddress::PolicyRegistry => "aln1policy000000000000000000000000000",
            GovernanceAddress::MigragraphRouter => "aln1migrationgov00000000000000000000",
        }
    }
}

/// Resolve a governance address by its key, `None` for unknown keys
pub fn governance_address(key: &str) -> Option<&'static str> {
    key.parse::<GovernanceAddress>().ok().map(|a| a.address())
}

keyed_enum! {
    pub enum GovernancePolicyTag: "governance policy tag" {
        ChataiDao => "CHATAI_DAO",
        AugmentedPolicy => "AUGMENTED_POLICY",
        MigragraphBridge => "MIGRAGRAPH_BRIDGE",
        LawEnfAssist => "LAW_ENF_ASSIST",
    }
}

impl GovernancePolicyTag {
    pub fn tag(&self) -> &'static str {
        match self {
            GovernancePolicyTag::ChataiDao => "dao.chatai",
            GovernancePolicyTag::AugmentedPolicy => "policy.augmented.capability",
            GovernancePolicyTag::MigragraphBridge => "policy.migration.bridge",
            GovernancePolicyTag::LawEnfAssist => "policy.law_enf_assist",
        }
    }
}
