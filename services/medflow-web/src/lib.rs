// services/medflow-web/src/lib.rs
//
// MedFlow Site - Library exports
//

pub mod app;
pub mod components;
pub mod dom;
pub mod mock;
pub mod state;

use anyhow::Context;
use leptos::*;
use medflow_shared::config::{load_config_str, MedflowConfig};

const CONFIG_YAML: &str = include_str!("../config/medflow.yaml");

/// Parse the configuration embedded at build time.
pub fn load_config() -> anyhow::Result<MedflowConfig> {
    load_config_str(CONFIG_YAML).context("Embedded config/medflow.yaml is invalid")
}

/// Load config (falling back to defaults) and mount the app.
pub fn mount() {
    let config = load_config().unwrap_or_else(|err| {
        log::warn!("{err:#}; using default configuration");
        MedflowConfig::default()
    });

    mount_to_body(move || {
        view! { <app::App config=config /> }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = load_config().unwrap();
        assert_eq!(config, MedflowConfig::default());
    }
}
