use std::sync::Arc;

use bunner_router_rs::constants::config;
use bunner_router_rs::{CorsGate, EnvConfig, GateOptions};

use crate::routes;

pub mod service;

pub type SharedGate = Arc<CorsGate>;

const ENV_PREFIX: &str = "DEMO";

pub fn build_gate() -> Result<SharedGate, Box<dyn std::error::Error + Send + Sync>> {
    let router = routes::router()?;
    let gate = CorsGate::new(router, EnvConfig::with_prefix(ENV_PREFIX), GateOptions::default())?;
    Ok(Arc::new(gate))
}

pub fn allow_list_variable() -> String {
    EnvConfig::with_prefix(ENV_PREFIX).variable_name(config::CORS_ALLOWED_LIST)
}
