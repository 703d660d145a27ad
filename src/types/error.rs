use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
// Contract error codes
pub enum Error {
    // Contract has been already initialized
    AlreadyInitialized = 0,
    // Caller is not the current fee receiver
    Unauthorized = 1,
    // Contract has not been initialized
    NotInitialized = 2,
    // Attached amount does not cover the required fee
    InsufficientFee = 3,
    // Fee token transfer has been rejected
    FeeTransferFailed = 4,
    // Deployment with this ID does not exist
    DeploymentNotFound = 5,
    // Template parameters are not valid
    InvalidConfig = 6
}
