#![no_std]
//! Grant Escrow Contract
//!
//! Treasury-disbursement engine for grant proposals. An approved grant's
//! funds move from the DAO treasury into per-grant escrow on execution and
//! are released milestone by milestone: approval is strictly sequential,
//! claiming is independent per approved milestone, and rejection terminally
//! rejects every non-claimed milestone and returns their combined amount to
//! the treasury in one movement. The contract also snapshots each proposal's
//! deposit threshold at creation (clamped to the kind's cap) and accumulates
//! depositor contributions against it.
//!
//! Voting, tallying and the proposal execution pipeline live in the external
//! governor; this contract only reads its `state(proposal_id)` ordinals.

mod access;
mod custody;
mod error;
mod events;
mod helper;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use crate::{
    access::PROPOSAL_STATE_EXECUTED,
    custody::FundsCustodian,
    error::GrantError,
    events::Events,
    helper::{CAP_GOVERNANCE, CAP_GRANTS_APPROVER, CAP_GRANTS_REJECTOR, CAP_PAUSER},
    storage::Storage,
};
pub use crate::types::{
    DepositRecord, GrantProposal, GrantState, Milestone, MilestoneState, ProposalAction,
    ProposalKind,
};

/// Bumped on every storage-layout-affecting release; read by the upgrade
/// proxy's validation hook before an implementation swap.
pub const SCHEMA_VERSION: u32 = 1;

#[contract]
pub struct GrantEscrowContract;

pub trait GrantEscrowTrait {
    /// Store collaborator addresses and the milestone floor (0 selects the
    /// default of 2). Callable once.
    fn init(
        env: Env,
        governor: Address,
        roles: Address,
        params: Address,
        treasury: Address,
        token: Address,
        min_milestones: u32,
    ) -> Result<(), GrantError>;

    // Grant ledger operations
    fn create_milestones(
        env: Env,
        proposal_id: u64,
        metadata_uri: String,
        proposer: Address,
        grants_receiver: Address,
        amounts: Vec<i128>,
        actions: Vec<ProposalAction>,
        caller: Address,
    ) -> Result<(), GrantError>;
    fn update_milestone_metadata_uri(
        env: Env,
        proposal_id: u64,
        new_uri: String,
        caller: Address,
    ) -> Result<(), GrantError>;
    fn update_grants_receiver(
        env: Env,
        proposal_id: u64,
        new_receiver: Address,
        caller: Address,
    ) -> Result<(), GrantError>;

    // Milestone state machine
    fn approve_milestone(
        env: Env,
        proposal_id: u64,
        index: u32,
        caller: Address,
    ) -> Result<(), GrantError>;
    fn claim_milestone(
        env: Env,
        proposal_id: u64,
        index: u32,
        caller: Address,
    ) -> Result<(), GrantError>;
    fn reject_grant(env: Env, proposal_id: u64, caller: Address) -> Result<(), GrantError>;

    // Funds custody
    fn fund_grant(env: Env, proposal_id: u64, caller: Address) -> Result<(), GrantError>;
    fn escrow_balance(env: Env, proposal_id: u64) -> i128;

    // Deposit escrow
    fn snapshot_threshold(
        env: Env,
        proposal_id: u64,
        proposal_kind: ProposalKind,
        current_dynamic_value: i128,
        caller: Address,
    ) -> Result<i128, GrantError>;
    fn deposit(
        env: Env,
        proposal_id: u64,
        depositor: Address,
        amount: i128,
    ) -> Result<(), GrantError>;
    fn is_threshold_reached(env: Env, proposal_id: u64) -> Result<bool, GrantError>;
    fn deposit_record(env: Env, proposal_id: u64) -> Result<DepositRecord, GrantError>;
    fn deposit_of(env: Env, proposal_id: u64, depositor: Address) -> i128;

    // Derived state
    fn grant_state(env: Env, proposal_id: u64) -> Result<GrantState, GrantError>;
    fn milestone_state(env: Env, proposal_id: u64, index: u32)
        -> Result<MilestoneState, GrantError>;
    fn get_grant(env: Env, proposal_id: u64) -> Result<GrantProposal, GrantError>;
    fn get_milestones(env: Env, proposal_id: u64) -> Result<Vec<Milestone>, GrantError>;

    // Pause wiring: pausing blocks claims only.
    fn pause(env: Env, caller: Address) -> Result<(), GrantError>;
    fn unpause(env: Env, caller: Address) -> Result<(), GrantError>;
    fn is_paused(env: Env) -> bool;

    /// Schema version exposed for upgrade validation.
    fn schema_version(env: Env) -> u32;
}

#[contractimpl]
impl GrantEscrowTrait for GrantEscrowContract {
    fn init(
        env: Env,
        governor: Address,
        roles: Address,
        params: Address,
        treasury: Address,
        token: Address,
        min_milestones: u32,
    ) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        if storage.is_initialized() {
            return Err(GrantError::AlreadyInitialized);
        }
        storage.init(&governor, &roles, &params, &treasury, &token, min_milestones);
        Ok(())
    }

    fn create_milestones(
        env: Env,
        proposal_id: u64,
        metadata_uri: String,
        proposer: Address,
        grants_receiver: Address,
        amounts: Vec<i128>,
        actions: Vec<ProposalAction>,
        caller: Address,
    ) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_GOVERNANCE)?;

        if storage.has_grant(proposal_id) {
            return Err(GrantError::GrantAlreadyExists);
        }
        helper::validate_metadata_uri(&metadata_uri)?;
        let total_amount = helper::validate_amounts(&amounts, storage.min_milestones())?;
        helper::validate_actions(&actions, amounts.len())?;

        let mut milestones = Vec::new(&env);
        for amount in amounts.iter() {
            milestones.push_back(Milestone {
                amount,
                state: MilestoneState::Pending,
            });
        }

        let grant = GrantProposal {
            proposal_id,
            proposer,
            grants_receiver: grants_receiver.clone(),
            metadata_uri,
            total_amount,
            rejected: false,
            funded: false,
        };
        storage.save_grant(&grant);
        storage.save_milestones(proposal_id, &milestones);

        Events::emit_milestones_created(
            &env,
            proposal_id,
            &grants_receiver,
            total_amount,
            milestones.len(),
        );
        Ok(())
    }

    fn update_milestone_metadata_uri(
        env: Env,
        proposal_id: u64,
        new_uri: String,
        caller: Address,
    ) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();

        helper::validate_metadata_uri(&new_uri)?;
        let mut grant = storage.get_grant(proposal_id)?;
        if caller != grant.proposer {
            return Err(GrantError::NotAuthorized);
        }
        grant.metadata_uri = new_uri;
        storage.save_grant(&grant);

        Events::emit_metadata_updated(&env, proposal_id);
        Ok(())
    }

    fn update_grants_receiver(
        env: Env,
        proposal_id: u64,
        new_receiver: Address,
        caller: Address,
    ) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();

        let mut grant = storage.get_grant(proposal_id)?;
        if caller != grant.grants_receiver
            && !access::has_capability(&env, &storage.roles()?, &caller, &CAP_GOVERNANCE)
        {
            return Err(GrantError::NotAuthorized);
        }
        let old_receiver = grant.grants_receiver.clone();
        grant.grants_receiver = new_receiver.clone();
        storage.save_grant(&grant);

        Events::emit_receiver_updated(&env, proposal_id, &old_receiver, &new_receiver);
        Ok(())
    }

    fn approve_milestone(
        env: Env,
        proposal_id: u64,
        index: u32,
        caller: Address,
    ) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_GRANTS_APPROVER)?;

        let grant = storage.get_grant(proposal_id)?;
        if grant.rejected {
            return Err(GrantError::GrantRejected);
        }
        access::require_executed(&env, &storage.governor()?, proposal_id)?;

        let mut milestones = storage.milestones(proposal_id)?;
        if index >= milestones.len() {
            return Err(GrantError::MilestoneIndexOutOfBounds);
        }
        // Strictly sequential: every earlier milestone must already be
        // approved or claimed.
        for i in 0..index {
            let state = milestones.get_unchecked(i).state;
            if state != MilestoneState::Approved && state != MilestoneState::Claimed {
                return Err(GrantError::PreviousMilestoneNotApproved);
            }
        }

        let mut milestone = milestones.get_unchecked(index);
        match milestone.state {
            MilestoneState::Pending => {}
            MilestoneState::Approved => return Err(GrantError::MilestoneAlreadyApproved),
            MilestoneState::Claimed => return Err(GrantError::MilestoneAlreadyClaimed),
            MilestoneState::Rejected => return Err(GrantError::GrantRejected),
        }
        milestone.state = MilestoneState::Approved;
        milestones.set(index, milestone);
        storage.save_milestones(proposal_id, &milestones);

        Events::emit_milestone_approved(&env, proposal_id, index);
        Ok(())
    }

    fn claim_milestone(
        env: Env,
        proposal_id: u64,
        index: u32,
        caller: Address,
    ) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        if storage.is_paused() {
            return Err(GrantError::ContractPaused);
        }

        let grant = storage.get_grant(proposal_id)?;
        if caller != grant.proposer && caller != grant.grants_receiver {
            return Err(GrantError::CallerIsNotTheGrantReceiver);
        }

        let mut milestones = storage.milestones(proposal_id)?;
        if index >= milestones.len() {
            return Err(GrantError::MilestoneIndexOutOfBounds);
        }
        let mut milestone = milestones.get_unchecked(index);
        match milestone.state {
            MilestoneState::Approved => {}
            MilestoneState::Claimed => return Err(GrantError::MilestoneAlreadyClaimed),
            _ => return Err(GrantError::MilestoneNotApprovedByAdmin),
        }

        // Claimed is committed before the token leaves escrow; a reentrant
        // claim observes the terminal state and fails above.
        let amount = milestone.amount;
        milestone.state = MilestoneState::Claimed;
        milestones.set(index, milestone);
        storage.save_milestones(proposal_id, &milestones);

        FundsCustodian::new(&env).pay_milestone(proposal_id, &grant.grants_receiver, amount)?;

        Events::emit_milestone_claimed(&env, proposal_id, index, &grant.grants_receiver, amount);
        Ok(())
    }

    fn reject_grant(env: Env, proposal_id: u64, caller: Address) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_GRANTS_REJECTOR)?;

        let mut grant = storage.get_grant(proposal_id)?;
        if grant.rejected {
            return Err(GrantError::GrantRejected);
        }

        let mut milestones = storage.milestones(proposal_id)?;
        let mut returned: i128 = 0;
        let mut rejected_count: u32 = 0;
        for i in 0..milestones.len() {
            let mut milestone = milestones.get_unchecked(i);
            if milestone.state != MilestoneState::Claimed {
                returned += milestone.amount;
                milestone.state = MilestoneState::Rejected;
                milestones.set(i, milestone);
                rejected_count += 1;
            }
        }

        grant.rejected = true;
        storage.save_grant(&grant);
        storage.save_milestones(proposal_id, &milestones);

        // A grant that never reached funding has nothing in escrow.
        if grant.funded && returned > 0 {
            FundsCustodian::new(&env).return_to_treasury(proposal_id, returned)?;
        }

        Events::emit_grant_rejected(&env, proposal_id, returned, rejected_count);
        Ok(())
    }

    fn fund_grant(env: Env, proposal_id: u64, caller: Address) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_GOVERNANCE)?;

        let mut grant = storage.get_grant(proposal_id)?;
        if grant.funded {
            return Err(GrantError::GrantAlreadyFunded);
        }
        if grant.rejected {
            return Err(GrantError::GrantRejected);
        }
        access::require_executed(&env, &storage.governor()?, proposal_id)?;

        grant.funded = true;
        storage.save_grant(&grant);
        FundsCustodian::new(&env).fund_grant(proposal_id, grant.total_amount)?;

        Events::emit_grant_funded(&env, proposal_id, grant.total_amount);
        Ok(())
    }

    fn escrow_balance(env: Env, proposal_id: u64) -> i128 {
        Storage::new(&env).escrow_balance(proposal_id)
    }

    fn snapshot_threshold(
        env: Env,
        proposal_id: u64,
        proposal_kind: ProposalKind,
        current_dynamic_value: i128,
        caller: Address,
    ) -> Result<i128, GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_GOVERNANCE)?;

        if storage.has_deposit_record(proposal_id) {
            return Err(GrantError::ThresholdAlreadySnapshot);
        }
        let cap = access::deposit_threshold_cap(&env, &storage.params()?, proposal_kind);
        let snapshot = current_dynamic_value.min(cap);
        storage.save_deposit_record(
            proposal_id,
            &DepositRecord {
                proposal_kind,
                snapshot_threshold: snapshot,
                total_deposited: 0,
            },
        );

        Events::emit_threshold_snapshot(&env, proposal_id, snapshot);
        Ok(snapshot)
    }

    fn deposit(
        env: Env,
        proposal_id: u64,
        depositor: Address,
        amount: i128,
    ) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        depositor.require_auth();

        if amount <= 0 {
            return Err(GrantError::InvalidAmount);
        }
        let mut record = storage.deposit_record(proposal_id)?;
        if storage.has_grant(proposal_id) {
            let grant = storage.get_grant(proposal_id)?;
            if depositor == grant.grants_receiver {
                return Err(GrantError::GranteeCannotDepositOwnGrant);
            }
        }

        // Tallies are checked before any token moves.
        record.total_deposited = record
            .total_deposited
            .checked_add(amount)
            .ok_or(GrantError::InvalidAmount)?;
        let depositor_tally = storage
            .deposit_of(proposal_id, &depositor)
            .checked_add(amount)
            .ok_or(GrantError::InvalidAmount)?;

        FundsCustodian::new(&env).collect_deposit(&depositor, amount)?;
        storage.save_deposit_record(proposal_id, &record);
        storage.set_deposit_of(proposal_id, &depositor, depositor_tally);

        Events::emit_deposit_received(&env, proposal_id, &depositor, amount, record.total_deposited);
        Ok(())
    }

    fn is_threshold_reached(env: Env, proposal_id: u64) -> Result<bool, GrantError> {
        let record = Storage::new(&env).deposit_record(proposal_id)?;
        Ok(record.total_deposited >= record.snapshot_threshold)
    }

    fn deposit_record(env: Env, proposal_id: u64) -> Result<DepositRecord, GrantError> {
        Storage::new(&env).deposit_record(proposal_id)
    }

    fn deposit_of(env: Env, proposal_id: u64, depositor: Address) -> i128 {
        Storage::new(&env).deposit_of(proposal_id, &depositor)
    }

    fn grant_state(env: Env, proposal_id: u64) -> Result<GrantState, GrantError> {
        let storage = Storage::new(&env);
        let grant = storage.get_grant(proposal_id)?;

        let ordinal = access::proposal_state(&env, &storage.governor()?, proposal_id);
        if ordinal != PROPOSAL_STATE_EXECUTED {
            return Ok(GrantState::from_proposal_ordinal(ordinal));
        }
        if grant.rejected {
            return Ok(GrantState::Canceled);
        }
        let milestones = storage.milestones(proposal_id)?;
        for milestone in milestones.iter() {
            if milestone.state != MilestoneState::Claimed {
                return Ok(GrantState::InDevelopment);
            }
        }
        Ok(GrantState::Completed)
    }

    fn milestone_state(
        env: Env,
        proposal_id: u64,
        index: u32,
    ) -> Result<MilestoneState, GrantError> {
        let milestones = Storage::new(&env).milestones(proposal_id)?;
        if index >= milestones.len() {
            return Err(GrantError::MilestoneIndexOutOfBounds);
        }
        Ok(milestones.get_unchecked(index).state)
    }

    fn get_grant(env: Env, proposal_id: u64) -> Result<GrantProposal, GrantError> {
        Storage::new(&env).get_grant(proposal_id)
    }

    fn get_milestones(env: Env, proposal_id: u64) -> Result<Vec<Milestone>, GrantError> {
        Storage::new(&env).milestones(proposal_id)
    }

    fn pause(env: Env, caller: Address) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_PAUSER)?;
        if storage.is_paused() {
            return Err(GrantError::AlreadyPaused);
        }
        storage.set_paused(true);
        Events::emit_paused(&env, &caller);
        Ok(())
    }

    fn unpause(env: Env, caller: Address) -> Result<(), GrantError> {
        let storage = Storage::new(&env);
        storage.require_initialized()?;
        caller.require_auth();
        access::require_capability(&env, &storage.roles()?, &caller, &CAP_PAUSER)?;
        if !storage.is_paused() {
            return Err(GrantError::NotPaused);
        }
        storage.set_paused(false);
        Events::emit_unpaused(&env, &caller);
        Ok(())
    }

    fn is_paused(env: Env) -> bool {
        Storage::new(&env).is_paused()
    }

    fn schema_version(_env: Env) -> u32 {
        SCHEMA_VERSION
    }
}

#[cfg(test)]
mod test_deposits;
