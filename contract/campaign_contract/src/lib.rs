#![no_std]

mod config_store;
mod dispatch;
mod error;
mod events;
mod governance;
mod ledger;
mod memo;
mod period;
mod storage_types;


use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, String, Vec};

use error::verify;
use storage_types::{REFUND_PREFIX, TRANSFER_PREFIX};

pub use dispatch::{
    CodeExecution, ExecCodeData, GovernanceDesigner, GovernanceDesignerClient, OutboundCommand,
    Payment,
};
pub use error::CampaignError;
pub use governance::{
    build_reference_id, CodeCategory, CodeType, ExecutionType, GovernanceCode,
    GovernanceRegistry, GovernanceRegistryClient,
};
pub use storage_types::{
    AdminPolicy, CampaignConfig, CampaignPhase, CampaignState, Deployment, DonorRecord,
};

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Record the collaborators this campaign talks to. The campaign itself
    /// stays uninitialized until the deployer calls `initialize`.
    pub fn __constructor(env: Env, deployment: Deployment) {
        config_store::write_deployment(&env, &deployment);
    }

    /// Set up the campaign. Executed only once, by the deployer.
    pub fn initialize(
        env: Env,
        community: Address,
        donor_position_id: u64,
        start_at: u64,
        funding_end_at: u64,
        end_at: u64,
    ) -> Result<(), CampaignError> {
        verify(
            &env,
            !config_store::is_configured(&env),
            CampaignError::AlreadyInitialized,
        )?;
        let deployment = config_store::read_deployment(&env)?;
        deployment.deployer.require_auth();
        verify(
            &env,
            community != env.current_contract_address(),
            CampaignError::UnauthorizedCommunity,
        )?;

        let config = CampaignConfig {
            community: community.clone(),
            donor_position_id,
            start_at,
            funding_end_at,
            end_at,
        };
        config_store::create(&env, &config)?;

        events::emit_campaign_initialized(
            &env,
            events::CampaignInitializedEvent {
                community,
                donor_position_id,
                start_at,
                funding_end_at,
                end_at,
            },
        );
        Ok(())
    }

    /// Replace the donor position and all three boundaries in one step.
    pub fn config(
        env: Env,
        donor_position_id: u64,
        start_at: u64,
        funding_end_at: u64,
        end_at: u64,
    ) -> Result<(), CampaignError> {
        let current = config_store::read_config(&env)?;
        let deployment = config_store::read_deployment(&env)?;
        config_store::admin(&deployment, &current).require_auth();

        config_store::update(&env, donor_position_id, start_at, funding_end_at, end_at)?;

        events::emit_campaign_configured(
            &env,
            events::CampaignConfiguredEvent {
                donor_position_id,
                start_at,
                funding_end_at,
                end_at,
            },
        );
        Ok(())
    }

    /// Inbound donation. Moves `amount` of the campaign token from `from` into
    /// the campaign and credits the donor named by a `donate-<donor>` memo.
    /// A donor's first contribution appoints them to the donor position.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token: Address,
        amount: i128,
        memo: String,
    ) -> Result<Vec<OutboundCommand>, CampaignError> {
        let this = env.current_contract_address();
        let mut outbound = Vec::new(&env);
        // Outgoing payments from the campaign are not donations.
        if from == this {
            return Ok(outbound);
        }

        verify(&env, to == this, CampaignError::NotSelfInvolved)?;
        let deployment = config_store::read_deployment(&env)?;
        verify(&env, token == deployment.token, CampaignError::InvalidAmount)?;
        verify(&env, amount > 0, CampaignError::NonPositiveAmount)?;
        let config = config_store::read_config(&env)?;
        verify(
            &env,
            config.is_within_funding(period::now(&env)),
            CampaignError::OutOfFundingWindow,
        )?;

        let donor = memo::parse_donation(&env, &memo)?;
        verify(&env, donor != this, CampaignError::UnauthorizedDonor)?;
        from.require_auth();
        if donor != from {
            donor.require_auth();
        }

        if ledger::lookup(&env, &donor).is_none() {
            outbound.push_back(dispatch::appoint_position(
                &env,
                &deployment,
                &config,
                &donor,
            )?);
        }

        token::Client::new(&env, &deployment.token).transfer(&from, &this, &amount);
        let first = ledger::record_contribution(&env, &donor, amount)?;

        events::emit_donation_recorded(
            &env,
            events::DonationRecordedEvent {
                donor,
                amount,
                total: ledger::total_raised(&env),
                first,
            },
        );

        dispatch::deliver(&env, &deployment.designer, &outbound);
        Ok(outbound)
    }

    /// Release collected funds during the execution window. The payment goes
    /// to the treasury and names `receiver` in its `transfer-<receiver>` memo.
    pub fn transferfund(
        env: Env,
        amount: i128,
        receiver: Address,
    ) -> Result<Vec<OutboundCommand>, CampaignError> {
        let config = config_store::read_config(&env)?;
        verify(
            &env,
            config.is_within_execution(period::now(&env)),
            CampaignError::OutOfExecutionWindow,
        )?;
        verify(&env, amount > 0, CampaignError::NonPositiveAmount)?;
        let deployment = config_store::read_deployment(&env)?;
        config_store::admin(&deployment, &config).require_auth();

        let outbound = vec![
            &env,
            dispatch::treasury_payment(&env, &deployment, amount, TRANSFER_PREFIX, &receiver),
        ];

        events::emit_funds_released(&env, events::FundsReleasedEvent { receiver, amount });

        dispatch::deliver(&env, &deployment.designer, &outbound);
        Ok(outbound)
    }

    /// Return a revoked donor's whole contribution to the treasury with a
    /// `refund-<account>` memo and forget the donor.
    pub fn refund(
        env: Env,
        revoked_account: Address,
    ) -> Result<Vec<OutboundCommand>, CampaignError> {
        verify(
            &env,
            revoked_account != env.current_contract_address(),
            CampaignError::AccountNotFound,
        )?;
        let config = config_store::read_config(&env)?;
        verify(
            &env,
            config.is_within_funding(period::now(&env)),
            CampaignError::OutOfFundingWindow,
        )?;
        let deployment = config_store::read_deployment(&env)?;
        config_store::admin(&deployment, &config).require_auth();

        let amount = ledger::remove_donor(&env, &revoked_account)?;
        let outbound = vec![
            &env,
            dispatch::treasury_payment(&env, &deployment, amount, REFUND_PREFIX, &revoked_account),
        ];

        events::emit_donation_refunded(
            &env,
            events::DonationRefundedEvent {
                donor: revoked_account,
                amount,
            },
        );

        dispatch::deliver(&env, &deployment.designer, &outbound);
        Ok(outbound)
    }

    pub fn get_config(env: Env) -> Result<CampaignConfig, CampaignError> {
        config_store::read_config(&env)
    }

    pub fn get_deployment(env: Env) -> Result<Deployment, CampaignError> {
        config_store::read_deployment(&env)
    }

    pub fn get_donation(env: Env, donor: Address) -> Option<DonorRecord> {
        ledger::lookup(&env, &donor)
    }

    pub fn get_total_raised(env: Env) -> i128 {
        ledger::total_raised(&env)
    }

    /// Where the campaign stands at the current ledger time.
    pub fn phase(env: Env) -> Result<CampaignPhase, CampaignError> {
        let config = config_store::read_config(&env)?;
        Ok(config.phase(period::now(&env)))
    }
}
