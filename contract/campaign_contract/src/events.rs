use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignInitializedEvent {
    pub community: Address,
    pub donor_position_id: u64,
    pub start_at: u64,
    pub funding_end_at: u64,
    pub end_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignConfiguredEvent {
    pub donor_position_id: u64,
    pub start_at: u64,
    pub funding_end_at: u64,
    pub end_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationRecordedEvent {
    pub donor: Address,
    pub amount: i128,
    pub total: i128,
    pub first: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationRefundedEvent {
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsReleasedEvent {
    pub receiver: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct PaymentSentEvent {
    pub to: Address,
    pub amount: i128,
    pub memo: String,
}

#[contracttype]
#[derive(Clone)]
pub struct CodeDispatchedEvent {
    pub community: Address,
    pub code_id: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct DispatchFailedEvent {
    pub community: Address,
    pub code_id: u64,
}

pub fn emit_campaign_initialized(env: &Env, event: CampaignInitializedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_initialized"),), event);
}

pub fn emit_campaign_configured(env: &Env, event: CampaignConfiguredEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_configured"),), event);
}

pub fn emit_donation_recorded(env: &Env, event: DonationRecordedEvent) {
    env.events()
        .publish((Symbol::new(env, "donation_recorded"),), event);
}

pub fn emit_donation_refunded(env: &Env, event: DonationRefundedEvent) {
    env.events()
        .publish((Symbol::new(env, "donation_refunded"),), event);
}

pub fn emit_funds_released(env: &Env, event: FundsReleasedEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_released"),), event);
}

pub fn emit_payment_sent(env: &Env, event: PaymentSentEvent) {
    env.events()
        .publish((Symbol::new(env, "payment_sent"),), event);
}

pub fn emit_code_dispatched(env: &Env, event: CodeDispatchedEvent) {
    env.events()
        .publish((Symbol::new(env, "position_dispatched"),), event);
}

pub fn emit_dispatch_failed(env: &Env, event: DispatchFailedEvent) {
    env.events()
        .publish((Symbol::new(env, "dispatch_failed"),), event);
}
