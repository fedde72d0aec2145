use soroban_sdk::{Address, Env};

use crate::error::{fail, verify, CampaignError};
use crate::storage_types::{
    AdminPolicy, CampaignConfig, CampaignState, DataKey, Deployment, TTL_INSTANCE,
};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn write_deployment(env: &Env, deployment: &Deployment) {
    env.storage().instance().set(&DataKey::Deployment, deployment);
    env.storage()
        .instance()
        .set(&DataKey::Campaign, &CampaignState::Uninitialized);
    extend_instance(env);
}

pub fn read_deployment(env: &Env) -> Result<Deployment, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Deployment)
        .ok_or(CampaignError::NotInitialized)
}

pub fn read_state(env: &Env) -> CampaignState {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .unwrap_or(CampaignState::Uninitialized)
}

/// Loads the config, failing with `NotInitialized` before `initialize` ran.
pub fn read_config(env: &Env) -> Result<CampaignConfig, CampaignError> {
    match read_state(env) {
        CampaignState::Configured(config) => Ok(config),
        CampaignState::Uninitialized => Err(fail(env, CampaignError::NotInitialized)),
    }
}

pub fn is_configured(env: &Env) -> bool {
    matches!(read_state(env), CampaignState::Configured(_))
}

/// Moves `Uninitialized -> Configured`. Fails if already configured.
pub fn create(env: &Env, config: &CampaignConfig) -> Result<(), CampaignError> {
    verify(env, !is_configured(env), CampaignError::AlreadyInitialized)?;
    store(env, config)
}

/// Overwrites boundary values and position of a configured campaign.
pub fn update(
    env: &Env,
    donor_position_id: u64,
    start_at: u64,
    funding_end_at: u64,
    end_at: u64,
) -> Result<CampaignConfig, CampaignError> {
    let mut config = read_config(env)?;
    config.donor_position_id = donor_position_id;
    config.start_at = start_at;
    config.funding_end_at = funding_end_at;
    config.end_at = end_at;
    store(env, &config)?;
    Ok(config)
}

fn store(env: &Env, config: &CampaignConfig) -> Result<(), CampaignError> {
    verify(env, config.is_ordered(), CampaignError::InvalidSchedule)?;
    env.storage()
        .instance()
        .set(&DataKey::Campaign, &CampaignState::Configured(config.clone()));
    extend_instance(env);
    Ok(())
}

/// Identity that must authorize administrative actions under the deployment policy.
pub fn admin(deployment: &Deployment, config: &CampaignConfig) -> Address {
    match deployment.admin_policy {
        AdminPolicy::Community => config.community.clone(),
        AdminPolicy::Deployer => deployment.deployer.clone(),
    }
}
