use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// Paid template parameters
pub struct PaidTemplate {
    // Account that receives the creator share
    pub creator: Address,
    // Creator fee charged on top of the base fee
    pub creator_fee: u64,
    // Supported chain IDs, empty list means all chains
    pub chains: Vec<u32>
}
