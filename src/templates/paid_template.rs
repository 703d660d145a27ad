use soroban_sdk::{panic_with_error, symbol_short, Address, Env, Vec};

use super::fee_gate::FeeGate;
use crate::{
    holdings,
    types::{error::Error, paid_template::PaidTemplate},
    withdraw, BASE_FEE, TEMPLATE,
};

impl FeeGate for PaidTemplate {
    fn supported_chains(&self, _e: &Env) -> Vec<u32> {
        self.chains.clone()
    }

    fn declared_fee(&self) -> u64 {
        // Bounds are checked on config
        BASE_FEE.saturating_add(self.creator_fee)
    }

    // Pay the creator share
    //
    // The gate has already forwarded the whole attached amount to the fee receiver,
    // so the creator is paid out of the contract holdings, never from the payer again.
    fn after_fee(&self, e: &Env, _payer: &Address, amount: u64) {
        if amount < self.declared_fee() {
            panic_with_error!(e, Error::InsufficientFee);
        }
        // Do not pay more than the contract holds
        let mut payout = self.creator_fee;
        let available = holdings(e);
        if available < payout {
            payout = available;
        }
        if payout == 0 {
            return;
        }
        withdraw(e, &self.creator, payout);
        e.events().publish(
            (TEMPLATE, symbol_short!("payout"), self.creator.clone()),
            payout,
        );
    }
}
