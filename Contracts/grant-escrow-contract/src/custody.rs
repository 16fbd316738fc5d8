//! Treasury <-> escrow token movements.
//!
//! Callers commit milestone/grant state before invoking these transfers so a
//! reentrant call observes the already-updated terminal state.

use soroban_sdk::{token, Address, Env};

use crate::error::GrantError;
use crate::storage::Storage;

pub struct FundsCustodian<'a> {
    env: &'a Env,
}

impl<'a> FundsCustodian<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Pull a grant's full amount from the DAO treasury into escrow.
    pub fn fund_grant(&self, proposal_id: u64, total_amount: i128) -> Result<(), GrantError> {
        let storage = Storage::new(self.env);
        let token_client = token::Client::new(self.env, &storage.token()?);
        token_client.transfer(
            &storage.treasury()?,
            &self.env.current_contract_address(),
            &total_amount,
        );
        storage.set_escrow_balance(proposal_id, storage.escrow_balance(proposal_id) + total_amount);
        Ok(())
    }

    /// Pay one claimed milestone out of the grant's escrow balance.
    pub fn pay_milestone(
        &self,
        proposal_id: u64,
        receiver: &Address,
        amount: i128,
    ) -> Result<(), GrantError> {
        self.pay_out(proposal_id, receiver, amount)
    }

    /// Return the non-claimed remainder of a rejected grant to the treasury.
    pub fn return_to_treasury(&self, proposal_id: u64, amount: i128) -> Result<(), GrantError> {
        let storage = Storage::new(self.env);
        let treasury = storage.treasury()?;
        self.pay_out(proposal_id, &treasury, amount)
    }

    /// Collect a proposal deposit from a depositor.
    pub fn collect_deposit(&self, depositor: &Address, amount: i128) -> Result<(), GrantError> {
        let storage = Storage::new(self.env);
        let token_client = token::Client::new(self.env, &storage.token()?);
        token_client.transfer(depositor, &self.env.current_contract_address(), &amount);
        Ok(())
    }

    fn pay_out(&self, proposal_id: u64, to: &Address, amount: i128) -> Result<(), GrantError> {
        let storage = Storage::new(self.env);
        let balance = storage.escrow_balance(proposal_id);
        if balance < amount {
            return Err(GrantError::InsufficientEscrowBalance);
        }
        storage.set_escrow_balance(proposal_id, balance - amount);
        let token_client = token::Client::new(self.env, &storage.token()?);
        token_client.transfer(&self.env.current_contract_address(), to, &amount);
        Ok(())
    }
}
