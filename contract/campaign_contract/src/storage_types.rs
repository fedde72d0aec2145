use soroban_sdk::{contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Deployment,
    Campaign,
    TotalRaised,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Donor(Address),
}

/// Who signs off on `config`, `refund` and `transferfund`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AdminPolicy {
    Community,
    Deployer,
}

/// Collaborators fixed at deploy time.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Deployment {
    pub deployer: Address,
    pub token: Address,    // accepted donation token
    pub treasury: Address, // receives refunds and released funds
    pub registry: Address, // owns the governance code registry
    pub designer: Address, // executes governance code
    pub admin_policy: AdminPolicy,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignConfig {
    pub community: Address,
    pub donor_position_id: u64,
    pub start_at: u64,
    pub funding_end_at: u64,
    pub end_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignState {
    Uninitialized,
    Configured(CampaignConfig),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignPhase {
    PreFunding,
    Funding,
    Execution,
    Ended,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DonorRecord {
    pub donor: Address,
    pub quantity: i128,
}

// Memo prefixes
pub const DONATE_PREFIX: &[u8] = b"donate";
pub const REFUND_PREFIX: &[u8] = b"refund";
pub const TRANSFER_PREFIX: &[u8] = b"transfer";
pub const APPOINT_REASON_PREFIX: &[u8] = b"appoint donor-position to";

pub const APPOINT_POSITION: &str = "appointpos";

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
