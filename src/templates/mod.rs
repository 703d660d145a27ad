pub mod fee_gate;
pub mod free_template;
pub mod paid_template;

use soroban_sdk::{Address, Env, Vec};

use crate::types::template_kind::TemplateKind;
use fee_gate::FeeGate;
use free_template::FreeTemplate;

// Route the gate to the template implementation configured for this instance
impl FeeGate for TemplateKind {
    fn supported_chains(&self, e: &Env) -> Vec<u32> {
        match self {
            TemplateKind::Free => FreeTemplate.supported_chains(e),
            TemplateKind::Paid(paid) => paid.supported_chains(e),
        }
    }

    fn declared_fee(&self) -> u64 {
        match self {
            TemplateKind::Free => FreeTemplate.declared_fee(),
            TemplateKind::Paid(paid) => paid.declared_fee(),
        }
    }

    fn after_fee(&self, e: &Env, payer: &Address, amount: u64) {
        match self {
            TemplateKind::Free => FreeTemplate.after_fee(e, payer, amount),
            TemplateKind::Paid(paid) => paid.after_fee(e, payer, amount),
        }
    }
}
