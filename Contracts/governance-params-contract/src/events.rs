use soroban_sdk::{contracttype, symbol_short, Env};

use crate::types::{ParamKind, ProposalKind};

#[contracttype]
#[derive(Clone)]
pub struct CheckpointWrittenEvent {
    pub param: ParamKind,
    pub kind: ProposalKind,
    pub at_block: u32,
    pub value: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct LegacyDefaultSeededEvent {
    pub param: ParamKind,
    pub value: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct KindRegisteredEvent {
    pub kind: ProposalKind,
    pub deposit_threshold_cap: i128,
}

pub struct Events;

impl Events {
    pub fn emit_checkpoint_written(
        env: &Env,
        param: ParamKind,
        kind: ProposalKind,
        at_block: u32,
        value: i128,
    ) {
        let event = CheckpointWrittenEvent {
            param,
            kind,
            at_block,
            value,
        };
        env.events().publish((symbol_short!("chk_set"),), event);
    }

    pub fn emit_legacy_default_seeded(env: &Env, param: ParamKind, value: i128) {
        let event = LegacyDefaultSeededEvent { param, value };
        env.events().publish((symbol_short!("lgcy_seed"),), event);
    }

    pub fn emit_kind_registered(env: &Env, kind: ProposalKind, deposit_threshold_cap: i128) {
        let event = KindRegisteredEvent {
            kind,
            deposit_threshold_cap,
        };
        env.events().publish((symbol_short!("kind_reg"),), event);
    }
}
