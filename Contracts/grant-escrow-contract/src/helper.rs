use soroban_sdk::{symbol_short, String, Symbol, Vec};

use crate::error::GrantError;
use crate::types::ProposalAction;

/// Milestone floor applied when `init` is passed 0.
pub const DEFAULT_MINIMUM_MILESTONE_COUNT: u32 = 2;

/// Well-known function symbol of the recognized treasury transfer call.
pub const FN_TREASURY_TRANSFER: Symbol = symbol_short!("TRS_XFER");

// Capability symbols consulted on the roles contract.
pub const CAP_GOVERNANCE: Symbol = symbol_short!("GOVERN");
pub const CAP_GRANTS_APPROVER: Symbol = symbol_short!("APPROVER");
pub const CAP_GRANTS_REJECTOR: Symbol = symbol_short!("REJECTOR");
pub const CAP_PAUSER: Symbol = symbol_short!("PAUSER");

/// Validates the milestone amount list and returns the grant total.
pub fn validate_amounts(amounts: &Vec<i128>, minimum: u32) -> Result<i128, GrantError> {
    if amounts.len() < minimum {
        return Err(GrantError::InvalidNumberOfMilestones);
    }
    let mut total: i128 = 0;
    for amount in amounts.iter() {
        if amount <= 0 {
            return Err(GrantError::InvalidAmount);
        }
        total = total.checked_add(amount).ok_or(GrantError::InvalidAmount)?;
    }
    Ok(total)
}

/// The proposal's declared call count must match the milestone count and
/// every call must be the recognized treasury transfer operation.
pub fn validate_actions(actions: &Vec<ProposalAction>, expected: u32) -> Result<(), GrantError> {
    if actions.len() != expected {
        return Err(GrantError::InvalidNumberOfMilestones);
    }
    for action in actions.iter() {
        if action.function != FN_TREASURY_TRANSFER {
            return Err(GrantError::InvalidFunctionSelector);
        }
    }
    Ok(())
}

pub fn validate_metadata_uri(uri: &String) -> Result<(), GrantError> {
    if uri.len() == 0 {
        return Err(GrantError::MilestoneDetailsMetadataURIEmpty);
    }
    Ok(())
}
