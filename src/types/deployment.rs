use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// Deployment record properties
pub struct Deployment {
    // Account that requested the deployment
    pub owner: Address,
    // Template version at the time of deployment
    pub version: u32,
    // Amount forwarded to the fee receiver
    pub fee_paid: u64,
    // Creation timestamp, in milliseconds
    pub created: u64
}
