use soroban_sdk::contracttype;

/// Governance parameter kinds tracked by the checkpoint store.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ParamKind {
    QuorumNumerator = 0,
    DepositThresholdBase = 1,
    VotingThreshold = 2,
    RequiredLevel = 3,
}

/// Proposal categories whose parameters evolve independently of each other.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalKind {
    Standard = 0,
    Grant = 1,
}

/// A (ledger sequence, value) pair recording a parameter's value at a point
/// in time. Lists of these are kept strictly ascending by `at_block`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub at_block: u32,
    pub value: i128,
}
