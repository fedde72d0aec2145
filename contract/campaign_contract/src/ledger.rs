use soroban_sdk::{Address, Env};

use crate::config_store::extend_instance;
use crate::error::{fail, CampaignError};
use crate::storage_types::{DataKey, DonorRecord, PersistentKey, TTL_PERSISTENT};

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn lookup(env: &Env, donor: &Address) -> Option<DonorRecord> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Donor(donor.clone()))
}

pub fn total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

fn set_total_raised(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &total);
    extend_instance(env);
}

/// Adds `amount` to the donor's record, creating it on first contribution.
/// Returns `true` when the record did not exist before. Callers validate `amount > 0`.
pub fn record_contribution(
    env: &Env,
    donor: &Address,
    amount: i128,
) -> Result<bool, CampaignError> {
    let key = PersistentKey::Donor(donor.clone());
    let (record, first) = match lookup(env, donor) {
        Some(mut record) => {
            record.quantity = record
                .quantity
                .checked_add(amount)
                .ok_or_else(|| fail(env, CampaignError::Overflow))?;
            (record, false)
        }
        None => (
            DonorRecord {
                donor: donor.clone(),
                quantity: amount,
            },
            true,
        ),
    };

    let total = total_raised(env)
        .checked_add(amount)
        .ok_or_else(|| fail(env, CampaignError::Overflow))?;

    env.storage().persistent().set(&key, &record);
    extend_persistent(env, &key);
    set_total_raised(env, total);

    Ok(first)
}

/// Erases the donor's record and returns the quantity it held.
pub fn remove_donor(env: &Env, donor: &Address) -> Result<i128, CampaignError> {
    let record = lookup(env, donor).ok_or_else(|| fail(env, CampaignError::DonorNotFound))?;

    env.storage()
        .persistent()
        .remove(&PersistentKey::Donor(donor.clone()));
    set_total_raised(env, total_raised(env) - record.quantity);

    Ok(record.quantity)
}
