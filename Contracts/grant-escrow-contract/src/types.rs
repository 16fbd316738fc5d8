use soroban_sdk::{contracttype, Address, String, Symbol};

/// Proposal categories recognized by the deposit escrow. Must stay
/// wire-compatible with the governance-params contract's enum.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalKind {
    Standard = 0,
    Grant = 1,
}

/// Milestone lifecycle. One-directional: Pending -> Approved -> Claimed,
/// or Pending/Approved -> Rejected. Claimed and Rejected are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MilestoneState {
    Pending = 0,
    Approved = 1,
    Claimed = 2,
    Rejected = 3,
}

/// One unit of a grant's payout, independently approved and claimed.
/// Its index is its position in the grant's milestone list.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub amount: i128,
    pub state: MilestoneState,
}

#[contracttype]
#[derive(Clone)]
pub struct GrantProposal {
    pub proposal_id: u64,
    pub proposer: Address,
    pub grants_receiver: Address,
    pub metadata_uri: String,
    pub total_amount: i128,
    pub rejected: bool,
    pub funded: bool,
}

/// Deposit bookkeeping for one proposal. The threshold is frozen at
/// proposal creation (clamped to the kind's cap); later parameter changes
/// never touch it.
#[contracttype]
#[derive(Clone)]
pub struct DepositRecord {
    pub proposal_kind: ProposalKind,
    pub snapshot_threshold: i128,
    pub total_deposited: i128,
}

/// A declared call of the owning proposal. Only the recognized treasury
/// transfer operation may back a milestone.
#[contracttype]
#[derive(Clone)]
pub struct ProposalAction {
    pub target: Address,
    pub function: Symbol,
}

/// Externally reported grant state. Ordinals 0..=7 mirror the governor's
/// proposal states one-to-one; the last two exist only after execution.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GrantState {
    Pending = 0,
    Active = 1,
    Canceled = 2,
    Defeated = 3,
    Succeeded = 4,
    Queued = 5,
    Expired = 6,
    Executed = 7,
    InDevelopment = 8,
    Completed = 9,
}

impl GrantState {
    /// Mirror a governor state ordinal verbatim (states prior to execution).
    pub fn from_proposal_ordinal(ordinal: u32) -> GrantState {
        match ordinal {
            0 => GrantState::Pending,
            1 => GrantState::Active,
            2 => GrantState::Canceled,
            3 => GrantState::Defeated,
            4 => GrantState::Succeeded,
            5 => GrantState::Queued,
            6 => GrantState::Expired,
            _ => GrantState::Executed,
        }
    }
}
