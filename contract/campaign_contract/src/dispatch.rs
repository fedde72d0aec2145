use soroban_sdk::{
    contractclient, contracttype, log, token, vec, xdr::ToXdr, Address, Bytes, Env, String,
    Symbol, Vec,
};

use crate::error::CampaignError;
use crate::events;
use crate::governance::{build_reference_id, resolve_code_id, CodeCategory};
use crate::memo;
use crate::storage_types::{CampaignConfig, Deployment, APPOINT_POSITION, APPOINT_REASON_PREFIX};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ExecCodeData {
    pub code_action: Symbol,
    pub packed_params: Bytes,
}

/// Write side of the governance system: runs a registered code on behalf of `exec_account`.
#[contractclient(name = "GovernanceDesignerClient")]
pub trait GovernanceDesigner {
    fn exec_code(
        env: Env,
        community: Address,
        exec_account: Address,
        code_id: u64,
        code_actions: Vec<ExecCodeData>,
    );
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Payment {
    pub token: Address,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub memo: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CodeExecution {
    pub community: Address,
    pub exec_account: Address,
    pub code_id: u64,
    pub code_actions: Vec<ExecCodeData>,
}

/// Instruction produced by an action and delivered once its state changes are written.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum OutboundCommand {
    Payment(Payment),
    ExecCode(CodeExecution),
}

/// XDR of `(community, position_id, holders, reason)` as expected by `appointpos`.
pub fn pack_appointment(
    env: &Env,
    community: &Address,
    position_id: u64,
    holders: &Vec<Address>,
    reason: &String,
) -> Bytes {
    (community.clone(), position_id, holders.clone(), reason.clone()).to_xdr(env)
}

/// Resolves the appoint code of the donor position and wraps one `appointpos` call for `donor`.
pub fn appoint_position(
    env: &Env,
    deployment: &Deployment,
    config: &CampaignConfig,
    donor: &Address,
) -> Result<OutboundCommand, CampaignError> {
    let reference = build_reference_id(
        config.donor_position_id,
        CodeCategory::PositionAppoint as u8,
    );
    let code_id = resolve_code_id(env, &deployment.registry, &config.community, reference)?;

    let holders = vec![env, donor.clone()];
    let reason = memo::join(env, APPOINT_REASON_PREFIX, b' ', donor);
    let action = ExecCodeData {
        code_action: Symbol::new(env, APPOINT_POSITION),
        packed_params: pack_appointment(
            env,
            &config.community,
            config.donor_position_id,
            &holders,
            &reason,
        ),
    };

    Ok(OutboundCommand::ExecCode(CodeExecution {
        community: config.community.clone(),
        exec_account: env.current_contract_address(),
        code_id,
        code_actions: vec![env, action],
    }))
}

/// Payment from the campaign to the treasury, tagged `<prefix>-<subject>`.
pub fn treasury_payment(
    env: &Env,
    deployment: &Deployment,
    amount: i128,
    prefix: &[u8],
    subject: &Address,
) -> OutboundCommand {
    OutboundCommand::Payment(Payment {
        token: deployment.token.clone(),
        from: env.current_contract_address(),
        to: deployment.treasury.clone(),
        amount,
        memo: memo::compose(env, prefix, subject),
    })
}

/// Sends every command in order. Payments abort the invocation on failure;
/// code executions are not awaited and a rejection is only reported.
pub fn deliver(env: &Env, designer: &Address, commands: &Vec<OutboundCommand>) {
    for command in commands.iter() {
        match command {
            OutboundCommand::Payment(payment) => {
                let token_client = token::Client::new(env, &payment.token);
                token_client.transfer(&payment.from, &payment.to, &payment.amount);
                events::emit_payment_sent(
                    env,
                    events::PaymentSentEvent {
                        to: payment.to,
                        amount: payment.amount,
                        memo: payment.memo,
                    },
                );
            }
            OutboundCommand::ExecCode(execution) => {
                let client = GovernanceDesignerClient::new(env, designer);
                let outcome = client.try_exec_code(
                    &execution.community,
                    &execution.exec_account,
                    &execution.code_id,
                    &execution.code_actions,
                );
                match outcome {
                    Ok(Ok(())) => events::emit_code_dispatched(
                        env,
                        events::CodeDispatchedEvent {
                            community: execution.community,
                            code_id: execution.code_id,
                        },
                    ),
                    _ => {
                        log!(env, "execcode rejected for code {}", execution.code_id);
                        events::emit_dispatch_failed(
                            env,
                            events::DispatchFailedEvent {
                                community: execution.community,
                                code_id: execution.code_id,
                            },
                        );
                    }
                }
            }
        }
    }
}
