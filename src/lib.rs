#![no_std]

mod extensions;
mod templates;
mod types;

use extensions::env_extensions::EnvExtensions;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, symbol_short, token::TokenClient, Address,
    Env, IntoVal, Symbol, Val, Vec,
};
use templates::fee_gate::FeeGate;
use types::{
    contract_config::ContractConfig, deployment::Deployment, error::Error,
    template_kind::TemplateKind,
};

const TEMPLATE: Symbol = symbol_short!("template");

// Minimum fee attached to a paid deployment, in token units
pub const BASE_FEE: u64 = 250;

// 1 day in ledgers
const DAY_LEDGERS: u32 = 17280;

// Deployment records are kept alive for 30 days
const DEPLOYMENT_TTL: u32 = DAY_LEDGERS * 30;

#[contract]
pub struct TemplateContract;

#[contractimpl]
impl TemplateContract {
    // Admin only

    // Initialize the newly created contract
    // Can be invoked only once
    //
    // # Arguments
    //
    // * `config` - Contract configuration
    //
    // # Panics
    //
    // Panics if the contract is already initialized
    // Panics if the paid template fee overflows
    pub fn config(e: Env, config: ContractConfig) {
        config.receiver.require_auth();
        if e.is_initialized() {
            e.panic_with_error(Error::AlreadyInitialized);
        }
        if let TemplateKind::Paid(paid) = &config.kind {
            if BASE_FEE.checked_add(paid.creator_fee).is_none() {
                e.panic_with_error(Error::InvalidConfig);
            }
        }

        e.set_receiver(&config.receiver);
        e.set_token(&config.token);
        e.set_template_kind(&config.kind);
        e.set_version(package_version());
        e.set_last_deployment_id(0);

        publish_updated_event(&e, &symbol_short!("config"), config);
    }

    // Hand over the fee receiver role to another account
    // Can be invoked only by the current fee receiver
    //
    // # Arguments
    //
    // * `caller` - Current fee receiver address
    // * `receiver` - New fee receiver address
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller doesn't match the current fee receiver
    pub fn set_receiver(e: Env, caller: Address, receiver: Address) {
        panic_if_not_initialized(&e);
        caller.require_auth();
        e.panic_if_not_receiver(&caller);
        e.set_receiver(&receiver);
        log!(&e, "fee receiver updated", caller, receiver.clone());

        publish_updated_event(&e, &symbol_short!("receiver"), receiver);
    }

    // Public

    // Deploy the template, collecting the declared fee first
    //
    // # Arguments
    //
    // * `owner` - Account requesting the deployment
    // * `amount` - Amount of tokens attached to cover the fee
    //
    // # Returns
    //
    // Deployment ID
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller doesn't match the owner address
    // Panics if the amount doesn't cover the fee
    // Panics if the token transfer fails
    pub fn deploy(e: Env, owner: Address, amount: u64) -> u64 {
        panic_if_not_initialized(&e);
        owner.require_auth();
        e.get_template_kind().deploy(&e, &owner, amount)
    }

    // Get deployment record by ID
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the deployment is not found
    pub fn get_deployment(e: Env, deployment_id: u64) -> Deployment {
        panic_if_not_initialized(&e);
        e.get_deployment(deployment_id)
            .unwrap_or_else(|| panic_with_error!(e, Error::DeploymentNotFound))
    }

    // Get the last deployment ID
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    pub fn last_id(e: Env) -> u64 {
        panic_if_not_initialized(&e);
        e.get_last_deployment_id()
    }

    // Get the fee that has to be attached to the deployment call, 0 means free
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    pub fn fee(e: Env) -> u64 {
        panic_if_not_initialized(&e);
        e.get_template_kind().declared_fee()
    }

    // Get the minimum fee accepted by paid templates
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    pub fn base_fee(e: Env) -> u64 {
        panic_if_not_initialized(&e);
        BASE_FEE
    }

    // Get the list of supported chain IDs, empty list means all chains
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    pub fn supported_chains(e: Env) -> Vec<u32> {
        panic_if_not_initialized(&e);
        e.get_template_kind().supported_chains(&e)
    }

    // Get template implementation served by this contract
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    pub fn kind(e: Env) -> TemplateKind {
        panic_if_not_initialized(&e);
        e.get_template_kind()
    }

    // Get current fee receiver address
    pub fn receiver(e: Env) -> Option<Address> {
        e.get_receiver()
    }

    // Get contract version stamped on initialization
    pub fn version(e: Env) -> u32 {
        current_version(&e)
    }

    // Retrieve fee token contract address
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    pub fn token(e: Env) -> Address {
        panic_if_not_initialized(&e);
        e.get_token()
    }
}

// Major version of the cargo package
fn package_version() -> u32 {
    env!("CARGO_PKG_VERSION_MAJOR")
        .parse::<u32>()
        .unwrap_or_default()
}

// Version stamped on initialization, or the package version before that
fn current_version(e: &Env) -> u32 {
    e.get_version().unwrap_or_else(package_version)
}

// Check that contract has been properly initialized already
fn panic_if_not_initialized(e: &Env) {
    if !e.is_initialized() {
        panic_with_error!(e, Error::NotInitialized);
    }
}

// Initialize a client for the fee token contract
fn get_token_client(e: &Env) -> TokenClient {
    TokenClient::new(e, &e.get_token())
}

// Move tokens between accounts, rolling back the whole call on failure
fn transfer(e: &Env, from: &Address, to: &Address, amount: u64) {
    let result = get_token_client(e).try_transfer(from, to, &(amount as i128));
    if !matches!(result, Ok(Ok(()))) {
        panic_with_error!(e, Error::FeeTransferFailed);
    }
}

// Transfer attached tokens to the contract balance
fn deposit(e: &Env, from: &Address, amount: u64) {
    transfer(e, from, &e.current_contract_address(), amount);
}

// Withdraw tokens from contract balance
fn withdraw(e: &Env, to: &Address, amount: u64) {
    transfer(e, &e.current_contract_address(), to, amount);
}

// Tokens currently held by the contract
fn holdings(e: &Env) -> u64 {
    let balance = get_token_client(e).balance(&e.current_contract_address());
    if balance <= 0 {
        return 0;
    }
    u64::try_from(balance).unwrap_or(u64::MAX)
}

// Get timestamp as milliseconds
fn now(e: &Env) -> u64 {
    e.ledger().timestamp() * 1000
}

// Number of ledgers to keep a deployment record alive
fn calc_ledgers_to_live(e: &Env) -> u32 {
    let max_ttl = e.storage().max_ttl();
    if DEPLOYMENT_TTL > max_ttl {
        return max_ttl;
    }
    DEPLOYMENT_TTL
}

fn publish_updated_event<T>(e: &Env, sub_topic: &Symbol, data: T)
    where T: IntoVal<Env, Val>
{
    e.events().publish(
        (TEMPLATE, symbol_short!("updated"), sub_topic),
        data
    );
}
