use soroban_sdk::{log, panic_with_error, symbol_short, Address, Env, Vec};

use crate::{
    calc_ledgers_to_live, current_version, deposit,
    extensions::env_extensions::EnvExtensions,
    now,
    types::{deployment::Deployment, error::Error},
    withdraw,
    BASE_FEE, TEMPLATE,
};

// Fee collection hook shared by all deployment templates
//
// Templates declare their fee and supported chains, the gate collects the fee before
// the template-specific deployment logic runs.
//
// The attached amount is escrowed on the contract balance, the payer is never charged more.
//
// Note: once the base fee check passes, the entire attached amount is forwarded to the
// fee receiver, not just the base fee. A surcharge bundled into the same amount goes to
// the receiver as well, so templates paying their own share can only pay it out of
// whatever the contract holds afterwards.
pub trait FeeGate {
    // Chains the template can be deployed to, an empty list means all chains
    fn supported_chains(&self, e: &Env) -> Vec<u32>;

    // Fee expected from the caller, either 0 or at least BASE_FEE
    fn declared_fee(&self) -> u64;

    // Template-specific logic executed right after the fee has been collected
    fn after_fee(&self, _e: &Env, _payer: &Address, _amount: u64) {}

    // Collect deployment fee from the payer
    //
    // # Arguments
    //
    // * `payer` - Account attaching the fee
    // * `amount` - Attached amount
    //
    // # Returns
    //
    // Amount forwarded to the fee receiver
    //
    // # Panics
    //
    // Panics if the amount is less than the base fee
    // Panics if the token transfer fails
    fn collect_fee(&self, e: &Env, payer: &Address, amount: u64) -> u64 {
        // Free tier
        if self.declared_fee() == 0 {
            log!(e, "free template, fee collection skipped");
            return 0;
        }
        if amount < BASE_FEE {
            panic_with_error!(e, Error::InsufficientFee);
        }
        let receiver = e
            .get_receiver()
            .unwrap_or_else(|| panic_with_error!(e, Error::NotInitialized));
        deposit(e, payer, amount);
        // Forward everything that was attached
        withdraw(e, &receiver, amount);
        log!(e, "fee collected", payer.clone(), amount);
        e.events()
            .publish((TEMPLATE, symbol_short!("fee_paid"), payer.clone()), amount);
        amount
    }

    // Collect the fee, run template logic and record the deployment
    //
    // # Arguments
    //
    // * `owner` - Account requesting the deployment
    // * `amount` - Attached amount
    //
    // # Returns
    //
    // Deployment ID
    //
    // # Panics
    //
    // Panics if the fee cannot be collected
    fn deploy(&self, e: &Env, owner: &Address, amount: u64) -> u64 {
        let fee_paid = self.collect_fee(e, owner, amount);
        self.after_fee(e, owner, amount);

        let version = current_version(e);
        let deployment_id = e.get_last_deployment_id() + 1;
        let deployment = Deployment {
            owner: owner.clone(),
            version,
            fee_paid,
            created: now(e),
        };
        e.set_deployment(deployment_id, &deployment);
        e.set_last_deployment_id(deployment_id);
        e.extend_deployment_ttl(deployment_id, calc_ledgers_to_live(e));

        e.events().publish(
            (TEMPLATE, symbol_short!("deployed"), owner.clone()),
            (deployment_id, version),
        );
        deployment_id
    }
}
