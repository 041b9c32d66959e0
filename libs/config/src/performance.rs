//! Throughput targets per subsystem
//!
//! Baseline is the sustained target, burst the short-term peak. Both are in
//! transactions per second.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TpsTarget {
    pub baseline: u64,
    pub burst: u64,
}

impl TpsTarget {
    pub const fn new(baseline: u64, burst: u64) -> Self {
        Self { baseline, burst }
    }

    /// Burst headroom over baseline, e.g. 10 for a 10x burst
    pub fn burst_ratio(&self) -> f64 {
        if self.baseline == 0 {
            return 0.0;
        }
        self.burst as f64 / self.baseline as f64
    }
}

pub const CHAT_ROUTER: TpsTarget = TpsTarget::new(10_000, 100_000);
pub const WALLET: TpsTarget = TpsTarget::new(15_000, 150_000);
pub const GOVERNANCE: TpsTarget = TpsTarget::new(5_000, 50_000);
pub const AGENT: TpsTarget = TpsTarget::new(8_000, 80_000);
pub const MIGRATION: TpsTarget = TpsTarget::new(2_000, 10_000);
pub const TOTAL_NETWORK: TpsTarget = TpsTarget::new(200_000, 500_000);

keyed_enum! {
    pub enum Subsystem: "subsystem" {
        ChatRouter => "CHAT_ROUTER",
        Wallet => "WALLET",
        Governance => "GOVERNANCE",
        Agent => "AGENT",
        Migration => "MIGRATION",
        TotalNetwork => "TOTAL_NETWORK",
    }
}

/// Deserializes field-wise over the reference targets, so a source that
/// sets only `agent.burst` keeps the reference baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TpsTargetsOverride")]
pub struct TpsTargets {
    pub chat_router: TpsTarget,
    pub wallet: TpsTarget,
    pub governance: TpsTarget,
    pub agent: TpsTarget,
    pub migration: TpsTarget,
    pub total_network: TpsTarget,
}

impl Default for TpsTargets {
    fn default() -> Self {
        Self {
            chat_router: CHAT_ROUTER,
            wallet: WALLET,
            governance: GOVERNANCE,
            agent: AGENT,
            migration: MIGRATION,
            total_network: TOTAL_NETWORK,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TpsTargetOverride {
    pub baseline: Option<u64>,
    pub burst: Option<u64>,
}

impl TpsTargetOverride {
    pub fn apply(self, base: TpsTarget) -> TpsTarget {
        TpsTarget {
            baseline: self.baseline.unwrap_or(base.baseline),
            burst: self.burst.unwrap_or(base.burst),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TpsTargetsOverride {
    pub chat_router: TpsTargetOverride,
    pub wallet: TpsTargetOverride,
    pub governance: TpsTargetOverride,
    pub agent: TpsTargetOverride,
    pub migration: TpsTargetOverride,
    pub total_network: TpsTargetOverride,
}

impl From<TpsTargetsOverride> for TpsTargets {
    fn from(overrides: TpsTargetsOverride) -> Self {
        Self {
            chat_router: overrides.chat_router.apply(CHAT_ROUTER),
            wallet: overrides.wallet.apply(WALLET),
            governance: overrides.governance.apply(GOVERNANCE),
            agent: overrides.agent.apply(AGENT),
            migration: overrides.migration.apply(MIGRATION),
            total_network: overrides.total_network.apply(TOTAL_NETWORK),
        }
    }
}

impl TpsTargets {
    pub fn tps_target(&self, subsystem: Subsystem) -> TpsTarget {
        match subsystem {
            Subsystem::ChatRouter => self.chat_router,
            Subsystem::Wallet => self.wallet,
            Subsystem::Governance => self.governance,
            Subsystem::Agent => self.agent,
            Subsystem::Migration => self.migration,
            Subsystem::TotalNetwork => self.total_network,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subsystem, TpsTarget)> + '_ {
        Subsystem::ALL.iter().map(move |s| (*s, self.tps_target(*s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_at_least_baseline() {
        for (subsystem, target) in TpsTargets::default().iter() {
            assert!(
                target.burst >= target.baseline,
                "{} burst {} below baseline {}",
                subsystem,
                target.burst,
                target.baseline
            );
        }
    }

    #[test]
    fn test_lookup() {
        let targets = TpsTargets::default();
        assert_eq!(targets.tps_target(Subsystem::Wallet), TpsTarget::new(15_000, 150_000));
        assert_eq!(targets.tps_target(Subsystem::Migration).burst_ratio(), 5.0);
        assert_eq!(targets.iter().count(), 6);
    }

    #[test]
    fn test_partial_target_keeps_reference_fields() {
        let targets: TpsTargets = toml::from_str("[agent]\nburst = 90000\n").unwrap();
        assert_eq!(targets.agent, TpsTarget::new(8_000, 90_000));
        assert_eq!(targets.wallet, WALLET);

        let targets: TpsTargets = toml::from_str("[migration]\nbaseline = 3000\n").unwrap();
        assert_eq!(targets.migration, TpsTarget::new(3_000, 10_000));
    }
}
