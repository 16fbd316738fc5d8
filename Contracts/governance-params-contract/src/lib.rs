#![no_std]
//! Checkpointed Governance Parameters
//!
//! Per-(parameter, proposal-kind) governance values evolve as an append-only
//! checkpoint history keyed by ledger sequence, so a proposal created in the
//! past keeps resolving the value that was in force at its creation sequence.
//! Parameter updates take effect strictly for timepoints at or after the
//! current sequence and never alter history. A one-time migration routine
//! carries the single pre-checkpoint-era global value forward as a fallback
//! for pre-history queries.

mod access;
mod checkpoint;
mod error;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::{
    access::{CAP_GOVERNANCE, CAP_UPGRADER},
    checkpoint::CheckpointStore,
    error::ParamsError,
    events::Events,
    storage::Storage,
};
pub use crate::types::{Checkpoint, ParamKind, ProposalKind};

/// Bumped on every storage-layout-affecting release; read by the upgrade
/// proxy's validation hook before an implementation swap.
pub const SCHEMA_VERSION: u32 = 2;

#[contract]
pub struct GovernanceParamsContract;

pub trait GovernanceParamsTrait {
    /// Store the roles contract address. Callable once.
    fn init(env: Env, roles: Address) -> Result<(), ParamsError>;

    /// Bind a proposal kind to the store and fix its immutable deposit
    /// threshold cap.
    fn register_proposal_kind(
        env: Env,
        kind: ProposalKind,
        deposit_threshold_cap: i128,
        caller: Address,
    ) -> Result<(), ParamsError>;

    // Checkpointed setters; each appends a checkpoint at the current
    // ledger sequence.
    fn set_quorum_numerator(
        env: Env,
        kind: ProposalKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError>;
    fn set_voting_threshold(
        env: Env,
        kind: ProposalKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError>;
    fn set_required_level(
        env: Env,
        kind: ProposalKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError>;
    fn set_deposit_threshold_base(
        env: Env,
        kind: ProposalKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError>;

    /// One-time migration: seed the pre-checkpoint-era global value for a
    /// parameter. Rejected once any checkpoint exists for it.
    fn seed_legacy_default(
        env: Env,
        param: ParamKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError>;

    // Historical and current reads.
    fn value_at(env: Env, param: ParamKind, kind: ProposalKind, timepoint: u32) -> i128;
    fn quorum_numerator(env: Env, kind: ProposalKind) -> i128;
    fn quorum_numerator_at(env: Env, kind: ProposalKind, timepoint: u32) -> i128;
    fn voting_threshold(env: Env, kind: ProposalKind) -> i128;
    fn required_level(env: Env, kind: ProposalKind) -> i128;
    fn deposit_threshold_base(env: Env, kind: ProposalKind) -> i128;
    fn deposit_threshold_cap(env: Env, kind: ProposalKind) -> Result<i128, ParamsError>;
    fn checkpoint_count(env: Env, param: ParamKind, kind: ProposalKind) -> u32;

    /// Schema version exposed for upgrade validation.
    fn schema_version(env: Env) -> u32;
}

#[contractimpl]
impl GovernanceParamsTrait for GovernanceParamsContract {
    fn init(env: Env, roles: Address) -> Result<(), ParamsError> {
        let storage = Storage::new(&env);
        if storage.is_initialized() {
            return Err(ParamsError::AlreadyInitialized);
        }
        storage.init(&roles);
        Ok(())
    }

    fn register_proposal_kind(
        env: Env,
        kind: ProposalKind,
        deposit_threshold_cap: i128,
        caller: Address,
    ) -> Result<(), ParamsError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_GOVERNANCE)?;
        if storage.is_kind_registered(kind) {
            return Err(ParamsError::KindAlreadyRegistered);
        }
        storage.set_deposit_cap(kind, deposit_threshold_cap);
        Events::emit_kind_registered(&env, kind, deposit_threshold_cap);
        Ok(())
    }

    fn set_quorum_numerator(
        env: Env,
        kind: ProposalKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError> {
        set_param(&env, ParamKind::QuorumNumerator, kind, value, caller)
    }

    fn set_voting_threshold(
        env: Env,
        kind: ProposalKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError> {
        set_param(&env, ParamKind::VotingThreshold, kind, value, caller)
    }

    fn set_required_level(
        env: Env,
        kind: ProposalKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError> {
        set_param(&env, ParamKind::RequiredLevel, kind, value, caller)
    }

    fn set_deposit_threshold_base(
        env: Env,
        kind: ProposalKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError> {
        set_param(&env, ParamKind::DepositThresholdBase, kind, value, caller)
    }

    fn seed_legacy_default(
        env: Env,
        param: ParamKind,
        value: i128,
        caller: Address,
    ) -> Result<(), ParamsError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_UPGRADER)?;
        CheckpointStore::new(&env).seed_legacy_default(param, value)?;
        Events::emit_legacy_default_seeded(&env, param, value);
        Ok(())
    }

    fn value_at(env: Env, param: ParamKind, kind: ProposalKind, timepoint: u32) -> i128 {
        CheckpointStore::new(&env).value_at(param, kind, timepoint)
    }

    fn quorum_numerator(env: Env, kind: ProposalKind) -> i128 {
        CheckpointStore::new(&env).latest(ParamKind::QuorumNumerator, kind)
    }

    fn quorum_numerator_at(env: Env, kind: ProposalKind, timepoint: u32) -> i128 {
        CheckpointStore::new(&env).value_at(ParamKind::QuorumNumerator, kind, timepoint)
    }

    fn voting_threshold(env: Env, kind: ProposalKind) -> i128 {
        CheckpointStore::new(&env).latest(ParamKind::VotingThreshold, kind)
    }

    fn required_level(env: Env, kind: ProposalKind) -> i128 {
        CheckpointStore::new(&env).latest(ParamKind::RequiredLevel, kind)
    }

    fn deposit_threshold_base(env: Env, kind: ProposalKind) -> i128 {
        CheckpointStore::new(&env).latest(ParamKind::DepositThresholdBase, kind)
    }

    fn deposit_threshold_cap(env: Env, kind: ProposalKind) -> Result<i128, ParamsError> {
        Storage::new(&env).deposit_cap(kind)
    }

    fn checkpoint_count(env: Env, param: ParamKind, kind: ProposalKind) -> u32 {
        CheckpointStore::new(&env).count(param, kind)
    }

    fn schema_version(_env: Env) -> u32 {
        SCHEMA_VERSION
    }
}

fn set_param(
    env: &Env,
    param: ParamKind,
    kind: ProposalKind,
    value: i128,
    caller: Address,
) -> Result<(), ParamsError> {
    let storage = Storage::new(env);
    storage.require_initialized()?;
    caller.require_auth();
    access::require_capability(env, &storage.roles()?, &caller, &CAP_GOVERNANCE)?;
    if !storage.is_kind_registered(kind) {
        return Err(ParamsError::KindNotRegistered);
    }
    CheckpointStore::new(env).append(param, kind, value)?;
    Events::emit_checkpoint_written(env, param, kind, env.ledger().sequence(), value);
    Ok(())
}

#[cfg(test)]
mod test_migration;
