use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone)]
pub struct MilestonesCreatedEvent {
    pub proposal_id: u64,
    pub grants_receiver: Address,
    pub total_amount: i128,
    pub milestone_count: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ThresholdSnapshotEvent {
    pub proposal_id: u64,
    pub snapshot_threshold: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct DepositReceivedEvent {
    pub proposal_id: u64,
    pub depositor: Address,
    pub amount: i128,
    pub total_deposited: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct GrantFundedEvent {
    pub proposal_id: u64,
    pub total_amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct MilestoneApprovedEvent {
    pub proposal_id: u64,
    pub index: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct MilestoneClaimedEvent {
    pub proposal_id: u64,
    pub index: u32,
    pub receiver: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct GrantRejectedEvent {
    pub proposal_id: u64,
    pub returned_amount: i128,
    pub rejected_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct GrantsReceiverUpdatedEvent {
    pub proposal_id: u64,
    pub old_receiver: Address,
    pub new_receiver: Address,
}

pub struct Events;

impl Events {
    pub fn emit_milestones_created(
        env: &Env,
        proposal_id: u64,
        grants_receiver: &Address,
        total_amount: i128,
        milestone_count: u32,
    ) {
        let event = MilestonesCreatedEvent {
            proposal_id,
            grants_receiver: grants_receiver.clone(),
            total_amount,
            milestone_count,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("ms_create"),), event);
    }

    pub fn emit_threshold_snapshot(env: &Env, proposal_id: u64, snapshot_threshold: i128) {
        let event = ThresholdSnapshotEvent {
            proposal_id,
            snapshot_threshold,
        };
        env.events().publish((symbol_short!("dep_snap"),), event);
    }

    pub fn emit_deposit_received(
        env: &Env,
        proposal_id: u64,
        depositor: &Address,
        amount: i128,
        total_deposited: i128,
    ) {
        let event = DepositReceivedEvent {
            proposal_id,
            depositor: depositor.clone(),
            amount,
            total_deposited,
        };
        env.events().publish((symbol_short!("dep_recv"),), event);
    }

    pub fn emit_grant_funded(env: &Env, proposal_id: u64, total_amount: i128) {
        let event = GrantFundedEvent {
            proposal_id,
            total_amount,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish((symbol_short!("grt_fund"),), event);
    }

    pub fn emit_milestone_approved(env: &Env, proposal_id: u64, index: u32) {
        let event = MilestoneApprovedEvent { proposal_id, index };
        env.events().publish((symbol_short!("ms_appr"),), event);
    }

    pub fn emit_milestone_claimed(
        env: &Env,
        proposal_id: u64,
        index: u32,
        receiver: &Address,
        amount: i128,
    ) {
        let event = MilestoneClaimedEvent {
            proposal_id,
            index,
            receiver: receiver.clone(),
            amount,
        };
        env.events().publish((symbol_short!("ms_claim"),), event);
    }

    pub fn emit_grant_rejected(
        env: &Env,
        proposal_id: u64,
        returned_amount: i128,
        rejected_count: u32,
    ) {
        let event = GrantRejectedEvent {
            proposal_id,
            returned_amount,
            rejected_count,
        };
        env.events().publish((symbol_short!("grt_rej"),), event);
    }

    pub fn emit_receiver_updated(
        env: &Env,
        proposal_id: u64,
        old_receiver: &Address,
        new_receiver: &Address,
    ) {
        let event = GrantsReceiverUpdatedEvent {
            proposal_id,
            old_receiver: old_receiver.clone(),
            new_receiver: new_receiver.clone(),
        };
        env.events().publish((symbol_short!("rcv_upd"),), event);
    }

    pub fn emit_metadata_updated(env: &Env, proposal_id: u64) {
        env.events()
            .publish((symbol_short!("meta_upd"),), proposal_id);
    }

    pub fn emit_paused(env: &Env, by: &Address) {
        env.events().publish((symbol_short!("paused"),), by.clone());
    }

    pub fn emit_unpaused(env: &Env, by: &Address) {
        env.events().publish((symbol_short!("unpaused"),), by.clone());
    }
}
