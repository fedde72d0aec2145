use soroban_sdk::{contractclient, contracttype, Address, Env, Symbol, Vec};

use crate::error::{fail, CampaignError};

/// Kind of governance code, the low half of a reference key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CodeCategory {
    Normal = 0,
    PositionConfig = 1,
    PositionAppoint = 2,
    PositionDismiss = 3,
    BadgeConfig = 4,
    BadgeIssue = 5,
    BadgeRevoke = 6,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ExecutionType {
    SoleDecision = 0,
    CollectiveDecision = 1,
    Both = 2,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CodeType {
    pub category: u32,
    pub reference_id: u64, // position or badge the code acts on
}

/// Registry row owned by the governance system.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GovernanceCode {
    pub code_id: u64,
    pub code_name: Symbol,
    pub contract_name: Address,
    pub code_actions: Vec<Symbol>,
    pub code_exec_type: ExecutionType,
    pub amendment_exec_type: ExecutionType,
    pub code_type: CodeType,
}

impl GovernanceCode {
    /// Registry key of this row. Agrees with `build_reference_id` for every
    /// `u8` category and never folds wider categories onto it.
    pub fn reference_key(&self) -> u128 {
        pack_reference(self.code_type.reference_id, self.code_type.category)
    }
}

/// Read side of the external code registry, indexed by reference key.
#[contractclient(name = "GovernanceRegistryClient")]
pub trait GovernanceRegistry {
    fn code_by_reference(
        env: Env,
        community: Address,
        owner: Address,
        reference: u128,
    ) -> Option<GovernanceCode>;
}

/// `reference_id` in the high 64 bits, `category` in the low bits.
pub fn build_reference_id(reference_id: u64, category: u8) -> u128 {
    pack_reference(reference_id, category as u32)
}

fn pack_reference(reference_id: u64, category: u32) -> u128 {
    (reference_id as u128) << 64 | category as u128
}

/// Looks up the code id registered for `reference` in the community's registry.
pub fn resolve_code_id(
    env: &Env,
    registry: &Address,
    community: &Address,
    reference: u128,
) -> Result<u64, CampaignError> {
    let client = GovernanceRegistryClient::new(env, registry);
    client
        .code_by_reference(community, &env.current_contract_address(), &reference)
        .map(|code| code.code_id)
        .ok_or_else(|| fail(env, CampaignError::CodeNotFound))
}
