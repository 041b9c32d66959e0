//! The protocol constants registry
//!
//! [`ProtocolConstants`] gathers every protocol value into one immutable
//! struct. Consumers take it by reference so tests can hand in alternate
//! values (a live treasury, tighter gas limits) without touching shared state.
//! [`reference`] returns the process-wide instance holding the compiled-in
//! values.

use crate::compliance::{
    ChatFieldLimits, JurisdictionSet, PolicyVersions, RegulatoryRegime, AUDIT_RETENTION_MS,
};
use crate::error::RegistryError;
use crate::governance::{GovernancePeriods, ProposalKind, ProposalRequirement, ProposalRequirements};
use crate::network::{ApiTier, NetworkParameters, PortAssignments, RateLimits, Service};
use crate::performance::{Subsystem, TpsTarget, TpsTargets};
use crate::safety::SafetyLimits;
use crate::treasury::TreasuryConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

static REFERENCE: Lazy<ProtocolConstants> = Lazy::new(ProtocolConstants::default);

/// Process-wide registry holding the compiled-in reference values
pub fn reference() -> &'static ProtocolConstants {
    &REFERENCE
}

/// Immutable registry of protocol values
///
/// `Default` yields the reference configuration. Deserializing fills any
/// missing section from the reference values; the treasury and safety
/// sections are never read from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConstants {
    pub audit_retention_ms: u64,
    #[serde(skip_deserializing)]
    pub treasury: TreasuryConfig,
    pub network: NetworkParameters,
    pub governance: GovernancePeriods,
    pub proposals: ProposalRequirements,
    pub chat_limits: ChatFieldLimits,
    pub jurisdictions: JurisdictionSet,
    pub tps_targets: TpsTargets,
    #[serde(skip_deserializing)]
    pub safety: SafetyLimits,
    pub policy_versions: PolicyVersions,
    pub ports: PortAssignments,
    pub rate_limits: RateLimits,
}

impl Default for ProtocolConstants {
    fn default() -> Self {
        Self {
            audit_retention_ms: AUDIT_RETENTION_MS,
            treasury: TreasuryConfig::default(),
            network: NetworkParameters::default(),
            governance: GovernancePeriods::default(),
            proposals: ProposalRequirements::default(),
            chat_limits: ChatFieldLimits::default(),
            jurisdictions: JurisdictionSet::default(),
            tps_targets: TpsTargets::default(),
            safety: SafetyLimits::default(),
            policy_versions: PolicyVersions::default(),
            ports: PortAssignments::default(),
            rate_limits: RateLimits::default(),
        }
    }
}

impl ProtocolConstants {
    /// Same registry with a different treasury binding
    pub fn with_treasury(self, treasury: TreasuryConfig) -> Self {
        Self { treasury, ..self }
    }

    pub fn is_treasury_live(&self) -> bool {
        self.treasury.is_live()
    }

    pub fn is_valid_treasury_address(&self, address: &str) -> bool {
        self.treasury.is_valid_address(address)
    }

    pub fn is_valid_jurisdiction(&self, tag: &str) -> bool {
        self.jurisdictions.contains(tag)
    }

    pub fn requirement(&self, kind: ProposalKind) -> &ProposalRequirement {
        self.proposals.requirement(kind)
    }

    pub fn tps_target(&self, subsystem: Subsystem) -> TpsTarget {
        self.tps_targets.tps_target(subsystem)
    }

    pub fn port(&self, service: Service) -> u16 {
        self.ports.port(service)
    }

    pub fn rate_limit(&self, tier: ApiTier) -> u32 {
        self.rate_limits.rate_limit(tier)
    }

    pub fn policy_version(&self, regime: RegulatoryRegime) -> &str {
        self.policy_versions.policy_version(regime)
    }

    /// Check every bound invariant, returning the first violation
    pub fn validate(&self) -> Result<(), RegistryError> {
        let network = &self.network;
        non_zero(network.block_time_ms, "network.block_time_ms")?;
        non_zero(
            network.max_transactions_per_block as u64,
            "network.max_transactions_per_block",
        )?;

        let gas = &network.gas_limits;
        non_zero(gas.min, "network.gas_limits.min")?;
        if !gas.is_ordered() {
            return Err(RegistryError::GasLimitsOutOfOrder {
                min: gas.min,
                max: gas.max,
                block_limit: gas.block_limit,
            });
        }

        let price = &network.gas_price;
        if price.minimum > price.maximum || !price.accepts(price.default) {
            return Err(RegistryError::GasPriceOutOfRange {
                minimum: price.minimum,
                default: price.default,
                maximum: price.maximum,
            });
        }

        let periods = &self.governance;
        non_zero(periods.min_voting, "governance.min_voting")?;
        if !periods.is_ordered() {
            return Err(RegistryError::VotingPeriodsOutOfOrder {
                min: periods.min_voting,
                default: periods.default_voting,
                max: periods.max_voting,
            });
        }

        for kind in ProposalKind::ALL {
            let req = self.requirement(*kind);
            check_fraction(*kind, "quorum", req.quorum)?;
            check_fraction(*kind, "threshold", req.threshold)?;
        }

        for (subsystem, target) in self.tps_targets.iter() {
            if target.burst < target.baseline {
                return Err(RegistryError::BurstBelowBaseline {
                    subsystem: subsystem.to_string(),
                    baseline: target.baseline,
                    burst: target.burst,
                });
            }
        }

        let limits = &self.chat_limits;
        non_zero(
            limits.max_chat_context_id_length as u64,
            "chat_limits.max_chat_context_id_length",
        )?;
        non_zero(
            limits.max_transcript_hash_length as u64,
            "chat_limits.max_transcript_hash_length",
        )?;
        non_zero(
            limits.max_jurisdiction_tags as u64,
            "chat_limits.max_jurisdiction_tags",
        )?;

        if self.jurisdictions.is_empty() {
            return Err(RegistryError::EmptyJurisdictionSet);
        }
        let mut seen = HashSet::new();
        if let Some(tag) = self.jurisdictions.iter().find(|tag| !seen.insert(*tag)) {
            return Err(RegistryError::DuplicateJurisdiction {
                tag: tag.to_string(),
            });
        }

        let safety = &self.safety;
        if !safety.is_ordered() {
            return Err(RegistryError::SafetyLimitsOutOfOrder {
                min_amount: safety.min_amount,
                max_transfer_amount: safety.max_transfer_amount,
                max_delegation: safety.max_delegation,
                max_uint64: safety.max_uint64,
            });
        }

        non_zero(self.audit_retention_ms, "audit_retention_ms")?;

        for service in Service::ALL {
            if self.port(*service) == 0 {
                return Err(RegistryError::NonPositive { field: port_field(*service) });
            }
        }

        for tier in ApiTier::ALL {
            if self.rate_limit(*tier) == 0 {
                return Err(RegistryError::NonPositive { field: rate_field(*tier) });
            }
        }

        debug!("Protocol constants passed validation");
        Ok(())
    }
}

fn non_zero(value: u64, field: &'static str) -> Result<(), RegistryError> {
    if value == 0 {
        return Err(RegistryError::NonPositive { field });
    }
    Ok(())
}

fn check_fraction(kind: ProposalKind, field: &'static str, value: f64) -> Result<(), RegistryError> {
    // NaN fails both comparisons
    if value > 0.0 && value <= 1.0 {
        return Ok(());
    }
    Err(RegistryError::FractionOutOfRange {
        kind: kind.to_string(),
        field,
        value,
    })
}

fn port_field(service: Service) -> &'static str {
    match service {
        Service::HttpApi => "ports.http_api",
        Service::WebSocket => "ports.websocket",
        Service::Explorer => "ports.explorer",
        Service::Metrics => "ports.metrics",
    }
}

fn rate_field(tier: ApiTier) -> &'static str {
    match tier {
        ApiTier::PublicApi => "rate_limits.public_api",
        ApiTier::AuthenticatedApi => "rate_limits.authenticated_api",
        ApiTier::AgentApi => "rate_limits.agent_api",
        ApiTier::WebsocketSubscriptions => "rate_limits.websocket_subscriptions",
    }
}
