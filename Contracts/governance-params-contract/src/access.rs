//! Capability checks against the external roles contract.
//!
//! The roles contract is consulted, never mutated: the single entry point
//! used here is `has_capability(principal, capability) -> bool`.

use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal, Symbol};

use crate::error::ParamsError;

/// Capability required for registering kinds and writing checkpoints.
pub const CAP_GOVERNANCE: Symbol = symbol_short!("GOVERN");
/// Capability required for one-time migration routines.
pub const CAP_UPGRADER: Symbol = symbol_short!("UPGRADER");

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
) -> Result<(), ParamsError> {
    if has_capability(env, roles, who, capability) {
        Ok(())
    } else {
        Err(ParamsError::NotAuthorized)
    }
}
