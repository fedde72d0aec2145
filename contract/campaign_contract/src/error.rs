use soroban_sdk::{contracterror, log, Env};

/// Verification failures. Every variant aborts the whole invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    NotSelfInvolved = 1,
    InvalidAmount = 2,
    NonPositiveAmount = 3,
    NotInitialized = 4,
    AlreadyInitialized = 5,
    OutOfFundingWindow = 6,
    OutOfExecutionWindow = 7,
    MalformedMemo = 8,
    /// The memo names the campaign itself as donor.
    UnauthorizedDonor = 9,
    /// The campaign cannot be its own community.
    UnauthorizedCommunity = 10,
    DonorNotFound = 11,
    /// The refunded account is the campaign itself.
    AccountNotFound = 12,
    CodeNotFound = 13,
    /// Boundaries must satisfy start_at <= funding_end_at <= end_at.
    InvalidSchedule = 14,
    Overflow = 15,
}

/// Logs the reason code and hands the error back for returning.
pub fn fail(env: &Env, err: CampaignError) -> CampaignError {
    log!(env, "ERR::VERIFY_FAILED::{}", err as u32);
    err
}

/// Fails with `err` unless `condition` holds.
pub fn verify(env: &Env, condition: bool, err: CampaignError) -> Result<(), CampaignError> {
    if condition {
        Ok(())
    } else {
        Err(fail(env, err))
    }
}
