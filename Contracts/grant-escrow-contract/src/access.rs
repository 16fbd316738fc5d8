//! External collaborator reads: capability checks on the roles contract,
//! lifecycle state on the governor, deposit caps on the params contract.
//! All are consulted, never mutated.

use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use crate::error::GrantError;
use crate::types::ProposalKind;

/// Governor proposal-state ordinal for "Executed".
pub const PROPOSAL_STATE_EXECUTED: u32 = 7;

pub fn has_capability(env: &Env, roles: &Address, who: &Address, capability: &Symbol) -> bool {
    env.invoke_contract(
        roles,
        &Symbol::new(env, "has_capability"),
        vec![env, who.into_val(env), capability.into_val(env)],
    )
}

pub fn require_capability(
    env: &Env,
    roles: &Address,
    who: &Address,
    capability: &Symbol,
) -> Result<(), GrantError> {
    if has_capability(env, roles, who, capability) {
        Ok(())
    } else {
        Err(GrantError::NotAuthorized)
    }
}

/// Read the owning proposal's lifecycle state ordinal from the governor.
pub fn proposal_state(env: &Env, governor: &Address, proposal_id: u64) -> u32 {
    env.invoke_contract(
        governor,
        &Symbol::new(env, "state"),
        vec![env, proposal_id.into_val(env)],
    )
}

pub fn require_executed(env: &Env, governor: &Address, proposal_id: u64) -> Result<(), GrantError> {
    if proposal_state(env, governor, proposal_id) == PROPOSAL_STATE_EXECUTED {
        Ok(())
    } else {
        Err(GrantError::ProposalNotExecuted)
    }
}

/// Read the immutable deposit threshold cap for a proposal kind from the
/// governance-params contract.
pub fn deposit_threshold_cap(env: &Env, params: &Address, kind: ProposalKind) -> i128 {
    env.invoke_contract(
        params,
        &Symbol::new(env, "deposit_threshold_cap"),
        vec![env, kind.into_val(env)],
    )
}
