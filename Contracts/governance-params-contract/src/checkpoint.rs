//! Append-only checkpoint log with O(log n) historical lookup.
//!
//! One list per (parameter, proposal kind) pair, strictly ascending by
//! ledger sequence. A write at the sequence of the latest entry replaces
//! that entry instead of appending a duplicate. Queries that precede the
//! first entry fall back to the seeded legacy default for the parameter,
//! then to a hard default constant.

use soroban_sdk::{Env, Vec};

use crate::{
    error::ParamsError,
    storage::Storage,
    types::{Checkpoint, ParamKind, ProposalKind},
};

/// Hard fallbacks used when a parameter has neither checkpoints nor a
/// seeded legacy default.
pub const DEFAULT_QUORUM_NUMERATOR: i128 = 4;
pub const DEFAULT_DEPOSIT_THRESHOLD_BASE: i128 = 0;
pub const DEFAULT_VOTING_THRESHOLD: i128 = 50;
pub const DEFAULT_REQUIRED_LEVEL: i128 = 1;

const ALL_PROPOSAL_KINDS: [ProposalKind; 2] = [ProposalKind::Standard, ProposalKind::Grant];

pub fn hard_default(param: ParamKind) -> i128 {
    match param {
        ParamKind::QuorumNumerator => DEFAULT_QUORUM_NUMERATOR,
        ParamKind::DepositThresholdBase => DEFAULT_DEPOSIT_THRESHOLD_BASE,
        ParamKind::VotingThreshold => DEFAULT_VOTING_THRESHOLD,
        ParamKind::RequiredLevel => DEFAULT_REQUIRED_LEVEL,
    }
}

pub struct CheckpointStore<'a> {
    env: &'a Env,
}

impl<'a> CheckpointStore<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Write `value` for (param, kind) at the current ledger sequence.
    pub fn append(&self, param: ParamKind, kind: ProposalKind, value: i128) -> Result<(), ParamsError> {
        self.append_at(param, kind, self.env.ledger().sequence(), value)
    }

    fn append_at(
        &self,
        param: ParamKind,
        kind: ProposalKind,
        at_block: u32,
        value: i128,
    ) -> Result<(), ParamsError> {
        let storage = Storage::new(self.env);
        let mut list = storage.checkpoints(param, kind);
        let len = list.len();
        if len > 0 {
            let last = list.get_unchecked(len - 1);
            if last.at_block > at_block {
                return Err(ParamsError::CheckpointNotMonotonic);
            }
            if last.at_block == at_block {
                // Same-sequence write replaces the latest entry.
                list.set(len - 1, Checkpoint { at_block, value });
                storage.save_checkpoints(param, kind, &list);
                return Ok(());
            }
        }
        list.push_back(Checkpoint { at_block, value });
        storage.save_checkpoints(param, kind, &list);
        Ok(())
    }

    /// Value in force at `timepoint`: the last checkpoint with
    /// `at_block <= timepoint`, else the legacy default, else the hard
    /// default for the parameter.
    pub fn value_at(&self, param: ParamKind, kind: ProposalKind, timepoint: u32) -> i128 {
        let storage = Storage::new(self.env);
        let list = storage.checkpoints(param, kind);
        if let Some(checkpoint) = Self::lookup(&list, timepoint) {
            return checkpoint.value;
        }
        storage
            .legacy_default(param)
            .unwrap_or_else(|| hard_default(param))
    }

    pub fn latest(&self, param: ParamKind, kind: ProposalKind) -> i128 {
        self.value_at(param, kind, self.env.ledger().sequence())
    }

    pub fn count(&self, param: ParamKind, kind: ProposalKind) -> u32 {
        Storage::new(self.env).checkpoints(param, kind).len()
    }

    /// One-time migration routine: carries the single pre-typed value of the
    /// previous system generation forward as a pre-history fallback, without
    /// fabricating a checkpoint at the migration sequence. Rejected once any
    /// checkpoint exists for the parameter under any proposal kind.
    pub fn seed_legacy_default(&self, param: ParamKind, value: i128) -> Result<(), ParamsError> {
        let storage = Storage::new(self.env);
        if storage.legacy_default(param).is_some() {
            return Err(ParamsError::LegacyDefaultAlreadySeeded);
        }
        for kind in ALL_PROPOSAL_KINDS {
            if storage.checkpoints(param, kind).len() > 0 {
                return Err(ParamsError::CheckpointHistoryExists);
            }
        }
        storage.set_legacy_default(param, value);
        Ok(())
    }

    // Binary search for the last entry with at_block <= timepoint.
    fn lookup(list: &Vec<Checkpoint>, timepoint: u32) -> Option<Checkpoint> {
        let mut lo: u32 = 0;
        let mut hi: u32 = list.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if list.get_unchecked(mid).at_block <= timepoint {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        if lo == 0 {
            None
        } else {
            Some(list.get_unchecked(lo - 1))
        }
    }
}
