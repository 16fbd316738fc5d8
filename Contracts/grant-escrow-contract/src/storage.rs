use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{
    error::GrantError,
    helper::DEFAULT_MINIMUM_MILESTONE_COUNT,
    types::{DepositRecord, GrantProposal, Milestone},
};

// Stable key space: variants are append-only and never reordered or
// repurposed, so every record stays addressable across schema versions.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Governor,
    Roles,
    Params,
    Treasury,
    Token,
    MinMilestones,
    Paused,
    Grant(u64),
    Milestones(u64),
    EscrowBalance(u64),
    Deposit(u64),
    DepositOf(u64, Address),
}

pub struct Storage<'a> {
    env: &'a Env,
}

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn is_initialized(&self) -> bool {
        self.env.storage().instance().has(&DataKey::Governor)
    }

    pub fn require_initialized(&self) -> Result<(), GrantError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GrantError::NotInitialized)
        }
    }

    pub fn init(
        &self,
        governor: &Address,
        roles: &Address,
        params: &Address,
        treasury: &Address,
        token: &Address,
        min_milestones: u32,
    ) {
        let instance = self.env.storage().instance();
        instance.set(&DataKey::Governor, governor);
        instance.set(&DataKey::Roles, roles);
        instance.set(&DataKey::Params, params);
        instance.set(&DataKey::Treasury, treasury);
        instance.set(&DataKey::Token, token);
        let minimum = if min_milestones == 0 {
            DEFAULT_MINIMUM_MILESTONE_COUNT
        } else {
            min_milestones
        };
        instance.set(&DataKey::MinMilestones, &minimum);
    }

    pub fn governor(&self) -> Result<Address, GrantError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Governor)
            .ok_or(GrantError::NotInitialized)
    }

    pub fn roles(&self) -> Result<Address, GrantError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Roles)
            .ok_or(GrantError::NotInitialized)
    }

    pub fn params(&self) -> Result<Address, GrantError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Params)
            .ok_or(GrantError::NotInitialized)
    }

    pub fn treasury(&self) -> Result<Address, GrantError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Treasury)
            .ok_or(GrantError::NotInitialized)
    }

    pub fn token(&self) -> Result<Address, GrantError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(GrantError::NotInitialized)
    }

    pub fn min_milestones(&self) -> u32 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::MinMilestones)
            .unwrap_or(DEFAULT_MINIMUM_MILESTONE_COUNT)
    }

    pub fn is_paused(&self) -> bool {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(&self, paused: bool) {
        self.env.storage().instance().set(&DataKey::Paused, &paused);
    }

    pub fn has_grant(&self, proposal_id: u64) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&DataKey::Grant(proposal_id))
    }

    pub fn save_grant(&self, grant: &GrantProposal) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Grant(grant.proposal_id), grant);
    }

    pub fn get_grant(&self, proposal_id: u64) -> Result<GrantProposal, GrantError> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Grant(proposal_id))
            .ok_or(GrantError::GrantNotFound)
    }

    pub fn save_milestones(&self, proposal_id: u64, milestones: &Vec<Milestone>) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Milestones(proposal_id), milestones);
    }

    pub fn milestones(&self, proposal_id: u64) -> Result<Vec<Milestone>, GrantError> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Milestones(proposal_id))
            .ok_or(GrantError::GrantNotFound)
    }

    pub fn escrow_balance(&self, proposal_id: u64) -> i128 {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::EscrowBalance(proposal_id))
            .unwrap_or(0)
    }

    pub fn set_escrow_balance(&self, proposal_id: u64, balance: i128) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::EscrowBalance(proposal_id), &balance);
    }

    pub fn has_deposit_record(&self, proposal_id: u64) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&DataKey::Deposit(proposal_id))
    }

    pub fn save_deposit_record(&self, proposal_id: u64, record: &DepositRecord) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Deposit(proposal_id), record);
    }

    pub fn deposit_record(&self, proposal_id: u64) -> Result<DepositRecord, GrantError> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Deposit(proposal_id))
            .ok_or(GrantError::DepositRecordNotFound)
    }

    pub fn deposit_of(&self, proposal_id: u64, depositor: &Address) -> i128 {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::DepositOf(proposal_id, depositor.clone()))
            .unwrap_or(0)
    }

    pub fn set_deposit_of(&self, proposal_id: u64, depositor: &Address, amount: i128) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::DepositOf(proposal_id, depositor.clone()), &amount);
    }
}
