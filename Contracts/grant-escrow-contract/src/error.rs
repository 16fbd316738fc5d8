use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GrantError {
    // Common
    NotAuthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    GrantNotFound = 4,
    GrantAlreadyExists = 5,

    // Validation
    InvalidNumberOfMilestones = 6,
    InvalidAmount = 7,
    MilestoneDetailsMetadataURIEmpty = 8,
    InvalidFunctionSelector = 9,

    // Sequencing
    ProposalNotExecuted = 10,
    PreviousMilestoneNotApproved = 11,
    MilestoneAlreadyApproved = 12,
    MilestoneNotApprovedByAdmin = 13,
    MilestoneAlreadyClaimed = 14,
    MilestoneIndexOutOfBounds = 15,
    GrantRejected = 16,

    // Authorization
    CallerIsNotTheGrantReceiver = 17,

    // Deposits
    GranteeCannotDepositOwnGrant = 18,
    DepositRecordNotFound = 19,
    ThresholdAlreadySnapshot = 20,

    // Funds
    GrantAlreadyFunded = 21,
    InsufficientEscrowBalance = 22,

    // Pause
    ContractPaused = 23,
    AlreadyPaused = 24,
    NotPaused = 25,
}

impl fmt::Display for GrantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Common
            GrantError::NotAuthorized => write!(f, "Not authorized"),
            GrantError::AlreadyInitialized => write!(f, "Contract is already initialized"),
            GrantError::NotInitialized => write!(f, "Contract is not initialized"),
            GrantError::GrantNotFound => write!(f, "Grant proposal not found"),
            GrantError::GrantAlreadyExists => write!(f, "Grant proposal already exists"),

            // Validation
            GrantError::InvalidNumberOfMilestones => write!(f, "Invalid number of milestones"),
            GrantError::InvalidAmount => write!(f, "Invalid amount"),
            GrantError::MilestoneDetailsMetadataURIEmpty => {
                write!(f, "Milestone details metadata URI is empty")
            }
            GrantError::InvalidFunctionSelector => {
                write!(f, "Declared call is not the treasury transfer operation")
            }

            // Sequencing
            GrantError::ProposalNotExecuted => write!(f, "Owning proposal is not executed"),
            GrantError::PreviousMilestoneNotApproved => {
                write!(f, "Previous milestone is not approved")
            }
            GrantError::MilestoneAlreadyApproved => write!(f, "Milestone already approved"),
            GrantError::MilestoneNotApprovedByAdmin => {
                write!(f, "Milestone not approved by admin")
            }
            GrantError::MilestoneAlreadyClaimed => write!(f, "Milestone already claimed"),
            GrantError::MilestoneIndexOutOfBounds => write!(f, "Milestone index out of bounds"),
            GrantError::GrantRejected => write!(f, "Grant has been rejected"),

            // Authorization
            GrantError::CallerIsNotTheGrantReceiver => {
                write!(f, "Caller is not the grant receiver")
            }

            // Deposits
            GrantError::GranteeCannotDepositOwnGrant => {
                write!(f, "Grantee cannot deposit on their own grant")
            }
            GrantError::DepositRecordNotFound => write!(f, "Deposit record not found"),
            GrantError::ThresholdAlreadySnapshot => {
                write!(f, "Deposit threshold already snapshot")
            }

            // Funds
            GrantError::GrantAlreadyFunded => write!(f, "Grant already funded"),
            GrantError::InsufficientEscrowBalance => write!(f, "Insufficient escrow balance"),

            // Pause
            GrantError::ContractPaused => write!(f, "Contract is paused"),
            GrantError::AlreadyPaused => write!(f, "Contract is already paused"),
            GrantError::NotPaused => write!(f, "Contract is not paused"),
        }
    }
}
