//! Network parameters, service ports and API rate limits
//!
//! Block production and gas parameters are declared here for consumers that
//! build or check blocks. Nothing in this crate produces blocks.

use serde::{Deserialize, Serialize};

/// Block time in milliseconds (5 seconds for solo consensus)
pub const BLOCK_TIME_MS: u64 = 5_000;

/// Maximum transactions per block
pub const MAX_TRANSACTIONS_PER_BLOCK: u32 = 1_000;

/// Gas limits
pub mod gas_limits {
    /// Minimum gas for a simple transfer
    pub const MIN: u64 = 21_000;

    /// Maximum gas per transaction
    pub const MAX: u64 = 10_000_000;

    /// Maximum gas per block
    pub const BLOCK_LIMIT: u64 = 30_000_000;
}

/// Gas pricing (in smallest unit)
pub mod gas_price {
    pub const DEFAULT: u64 = 100;
    pub const MINIMUM: u64 = 1;
    pub const MAXIMUM: u64 = 1_000_000;
}

/// Default API ports
pub mod ports {
    pub const HTTP_API: u16 = 3000;
    pub const WEBSOCKET: u16 = 3001;
    pub const EXPLORER: u16 = 8080;
    pub const METRICS: u16 = 9090;
}

/// API rate limits (requests per minute)
pub mod rate_limits {
    pub const PUBLIC_API: u32 = 1_000;
    pub const AUTHENTICATED_API: u32 = 10_000;
    pub const AGENT_API: u32 = 50_000;
    pub const WEBSOCKET_SUBSCRIPTIONS: u32 = 100;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasLimits {
    pub min: u64,
    pub max: u64,
    pub block_limit: u64,
}

impl Default for GasLimits {
    fn default() -> Self {
        Self {
            min: gas_limits::MIN,
            max: gas_limits::MAX,
            block_limit: gas_limits::BLOCK_LIMIT,
        }
    }
}

impl GasLimits {
    /// `min <= max <= block_limit`
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max && self.max <= self.block_limit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasPrice {
    pub default: u64,
    pub minimum: u64,
    pub maximum: u64,
}

impl Default for GasPrice {
    fn default() -> Self {
        Self {
            default: gas_price::DEFAULT,
            minimum: gas_price::MINIMUM,
            maximum: gas_price::MAXIMUM,
        }
    }
}

impl GasPrice {
    /// Whether `price` lies within `[minimum, maximum]`
    pub fn accepts(&self, price: u64) -> bool {
        (self.minimum..=self.maximum).contains(&price)
    }
}

/// Block production and gas parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkParameters {
    pub block_time_ms: u64,
    pub max_transactions_per_block: u32,
    pub gas_limits: GasLimits,
    pub gas_price: GasPrice,
}

impl Default for NetworkParameters {
    fn default() -> Self {
        Self {
            block_time_ms: BLOCK_TIME_MS,
            max_transactions_per_block: MAX_TRANSACTIONS_PER_BLOCK,
            gas_limits: GasLimits::default(),
            gas_price: GasPrice::default(),
        }
    }
}

keyed_enum! {
    /// Services with a reserved listening port
    pub enum Service: "service" {
        HttpApi => "HTTP_API",
        WebSocket => "WEBSOCKET",
        Explorer => "EXPLORER",
        Metrics => "METRICS",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortAssignments {
    pub http_api: u16,
    pub websocket: u16,
    pub explorer: u16,
    pub metrics: u16,
}

impl Default for PortAssignments {
    fn default() -> Self {
        Self {
            http_api: ports::HTTP_API,
            websocket: ports::WEBSOCKET,
            explorer: ports::EXPLORER,
            metrics: ports::METRICS,
        }
    }
}

impl PortAssignments {
    pub fn port(&self, service: Service) -> u16 {
        match service {
            Service::HttpApi => self.http_api,
            Service::WebSocket => self.websocket,
            Service::Explorer => self.explorer,
            Service::Metrics => self.metrics,
        }
    }
}

keyed_enum! {
    /// API access tiers with their own request quota
    pub enum ApiTier: "API tier" {
        PublicApi => "PUBLIC_API",
        AuthenticatedApi => "AUTHENTICATED_API",
        AgentApi => "AGENT_API",
        WebsocketSubscriptions => "WEBSOCKET_SUBSCRIPTIONS",
    }
}

/// Requests per minute per [`ApiTier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimits {
    pub public_api: u32,
    pub authenticated_api: u32,
    pub agent_api: u32,
    pub websocket_subscriptions: u32,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            public_api: rate_limits::PUBLIC_API,
            authenticated_api: rate_limits::AUTHENTICATED_API,
            agent_api: rate_limits::AGENT_API,
            websocket_subscriptions: rate_limits::WEBSOCKET_SUBSCRIPTIONS,
        }
    }
}

impl RateLimits {
    pub fn rate_limit(&self, tier: ApiTier) -> u32 {
        match tier {
            ApiTier::PublicApi => self.public_api,
            ApiTier::AuthenticatedApi => self.authenticated_api,
            ApiTier::AgentApi => self.agent_api,
            ApiTier::WebsocketSubscriptions => self.websocket_subscriptions,
        }
    }
}
