use soroban_sdk::contracttype;

use super::paid_template::PaidTemplate;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TemplateKind {
    // Deployments are free of charge
    Free,
    // Deployments charge the base fee plus the creator fee
    Paid(PaidTemplate)
}
