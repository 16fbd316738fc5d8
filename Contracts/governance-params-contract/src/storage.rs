use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{
    error::ParamsError,
    types::{Checkpoint, ParamKind, ProposalKind},
};

// Stable key space: variants are append-only and never reordered or
// repurposed, so every record stays addressable across schema versions.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Roles,
    DepositCap(ProposalKind),
    Checkpoints(ParamKind, ProposalKind),
    LegacyDefault(ParamKind),
}

pub struct Storage<'a> {
    env: &'a Env,
}

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn is_initialized(&self) -> bool {
        self.env.storage().instance().has(&DataKey::Roles)
    }

    pub fn require_initialized(&self) -> Result<(), ParamsError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(ParamsError::NotInitialized)
        }
    }

    pub fn init(&self, roles: &Address) {
        self.env.storage().instance().set(&DataKey::Roles, roles);
    }

    pub fn roles(&self) -> Result<Address, ParamsError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Roles)
            .ok_or(ParamsError::NotInitialized)
    }

    pub fn checkpoints(&self, param: ParamKind, kind: ProposalKind) -> Vec<Checkpoint> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Checkpoints(param, kind))
            .unwrap_or_else(|| Vec::new(self.env))
    }

    pub fn save_checkpoints(&self, param: ParamKind, kind: ProposalKind, list: &Vec<Checkpoint>) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Checkpoints(param, kind), list);
    }

    pub fn legacy_default(&self, param: ParamKind) -> Option<i128> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::LegacyDefault(param))
    }

    pub fn set_legacy_default(&self, param: ParamKind, value: i128) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::LegacyDefault(param), &value);
    }

    pub fn is_kind_registered(&self, kind: ProposalKind) -> bool {
        self.env.storage().persistent().has(&DataKey::DepositCap(kind))
    }

    pub fn deposit_cap(&self, kind: ProposalKind) -> Result<i128, ParamsError> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::DepositCap(kind))
            .ok_or(ParamsError::KindNotRegistered)
    }

    pub fn set_deposit_cap(&self, kind: ProposalKind, cap: i128) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::DepositCap(kind), &cap);
    }
}
