pub mod contract_config;
pub mod deployment;
pub mod error;
pub mod paid_template;
pub mod template_kind;
