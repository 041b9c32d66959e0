//! Treasury address and routing
//!
//! The treasury address is RESERVED and not yet live on-chain. It stays a
//! placeholder until mainnet genesis is announced; nothing should route funds
//! to it while [`ALN_TREASURY_LIVE`] is false.

use serde::{Deserialize, Serialize};

/// Canonical ALN treasury address for governance votes, protocol fees and refills
pub const ALN_TREASURY_ADDRESS: &str = "ALN18sd2ujv24ual9c9pshtxys6j8knh6xaek9z83t";

/// Set to true only after mainnet genesis
pub const ALN_TREASURY_LIVE: bool = false;

/// Whether the compiled-in treasury is live and ready for transactions
pub fn is_treasury_live() -> bool {
    ALN_TREASURY_LIVE
}

/// Byte-exact comparison against [`ALN_TREASURY_ADDRESS`]
///
/// No case folding, trimming or checksum decoding is applied.
pub fn is_valid_treasury_address(address: &str) -> bool {
    address == ALN_TREASURY_ADDRESS
}

/// Treasury binding held by a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryConfig {
    pub address: String,
    pub is_live: bool,
}

impl TreasuryConfig {
    pub fn new(address: impl Into<String>, is_live: bool) -> Self {
        Self {
            address: address.into(),
            is_live,
        }
    }

    pub fn is_live(&self) -> bool {
        self.is_live
    }

    /// True iff `address` is exactly this treasury's address
    pub fn is_valid_address(&self, address: &str) -> bool {
        address == self.address
    }
}

impl Default for TreasuryConfig {
    fn default() -> Self {
        Self::new(ALN_TREASURY_ADDRESS, ALN_TREASURY_LIVE)
    }
}

keyed_enum! {
    /// Why funds are being routed to the treasury
    pub enum TreasuryRoutingPurpose: "treasury routing purpose" {
        /// CHATAI voting power and proposal fees
        GovernanceVote => "governance_vote",
        /// Transaction, bridge and contract deployment fees
        ProtocolFee => "protocol_fee",
        /// Community contributions, grants and incentives
        TreasuryRefill => "treasury_refill",
    }
}
