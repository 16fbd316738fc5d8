use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ParamsError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    KindAlreadyRegistered = 4,
    KindNotRegistered = 5,
    CheckpointNotMonotonic = 6,
    CheckpointHistoryExists = 7,
    LegacyDefaultAlreadySeeded = 8,
}
