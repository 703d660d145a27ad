use soroban_sdk::{contracttype, Address};

use super::template_kind::TemplateKind;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// Initial contract configuration parameters
pub struct ContractConfig {
    // Account that receives collected fees
    pub receiver: Address,
    // Fee token address
    pub token: Address,
    // Template implementation served by this instance
    pub kind: TemplateKind
}
