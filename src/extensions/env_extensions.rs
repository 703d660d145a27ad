use soroban_sdk::storage::{Instance, Persistent};
use soroban_sdk::{panic_with_error, Address, Env};

use crate::types;

use types::{deployment::Deployment, error::Error, template_kind::TemplateKind};
const RECEIVER_KEY: &str = "receiver";
const TOKEN_KEY: &str = "token";
const KIND_KEY: &str = "kind";
const VERSION_KEY: &str = "version";
const LAST_DEPLOYMENT_ID: &str = "last";

pub trait EnvExtensions {
    fn get_receiver(&self) -> Option<Address>;

    fn set_receiver(&self, receiver: &Address);

    fn get_token(&self) -> Address;

    fn set_token(&self, token: &Address);

    fn get_template_kind(&self) -> TemplateKind;

    fn set_template_kind(&self, kind: &TemplateKind);

    fn get_version(&self) -> Option<u32>;

    fn set_version(&self, version: u32);

    fn get_last_deployment_id(&self) -> u64;

    fn set_last_deployment_id(&self, last_deployment_id: u64);

    fn get_deployment(&self, deployment_id: u64) -> Option<Deployment>;

    fn set_deployment(&self, deployment_id: u64, deployment: &Deployment);

    fn extend_deployment_ttl(&self, deployment_id: u64, extend_to: u32);

    fn panic_if_not_receiver(&self, caller: &Address);

    fn is_initialized(&self) -> bool;
}

impl EnvExtensions for Env {
    fn is_initialized(&self) -> bool {
        get_instance_storage(&self).has(&RECEIVER_KEY)
    }

    fn get_receiver(&self) -> Option<Address> {
        get_instance_storage(&self).get(&RECEIVER_KEY)
    }

    fn set_receiver(&self, receiver: &Address) {
        get_instance_storage(&self).set(&RECEIVER_KEY, receiver);
    }

    fn get_token(&self) -> Address {
        get_instance_storage(&self)
            .get(&TOKEN_KEY)
            .unwrap_or_else(|| panic_with_error!(self, Error::NotInitialized))
    }

    fn set_token(&self, token: &Address) {
        get_instance_storage(&self).set(&TOKEN_KEY, token);
    }

    fn get_template_kind(&self) -> TemplateKind {
        get_instance_storage(&self)
            .get(&KIND_KEY)
            .unwrap_or_else(|| panic_with_error!(self, Error::NotInitialized))
    }

    fn set_template_kind(&self, kind: &TemplateKind) {
        get_instance_storage(&self).set(&KIND_KEY, kind);
    }

    fn get_version(&self) -> Option<u32> {
        get_instance_storage(&self).get(&VERSION_KEY)
    }

    fn set_version(&self, version: u32) {
        get_instance_storage(&self).set(&VERSION_KEY, &version);
    }

    fn get_last_deployment_id(&self) -> u64 {
        get_instance_storage(&self)
            .get(&LAST_DEPLOYMENT_ID)
            .unwrap_or(0)
    }

    fn set_last_deployment_id(&self, last_deployment_id: u64) {
        get_instance_storage(&self).set(&LAST_DEPLOYMENT_ID, &last_deployment_id);
    }

    fn get_deployment(&self, deployment_id: u64) -> Option<Deployment> {
        get_persistent_storage(&self).get(&deployment_id)
    }

    fn set_deployment(&self, deployment_id: u64, deployment: &Deployment) {
        get_persistent_storage(&self).set(&deployment_id, deployment);
    }

    fn extend_deployment_ttl(&self, deployment_id: u64, extend_to: u32) {
        get_persistent_storage(&self).extend_ttl(&deployment_id, extend_to, extend_to)
    }

    fn panic_if_not_receiver(&self, caller: &Address) {
        match self.get_receiver() {
            Some(receiver) if receiver == *caller => {}
            _ => panic_with_error!(self, Error::Unauthorized),
        }
    }
}

fn get_instance_storage(e: &Env) -> Instance {
    e.storage().instance()
}

fn get_persistent_storage(e: &Env) -> Persistent {
    e.storage().persistent()
}
