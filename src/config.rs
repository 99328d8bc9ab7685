use std::env;
use anyhow::{Context, Result};

use crate::operation::{OperationCatalog, OperationId};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub model_management_group: String,
    pub default_locale: String,
    pub extra_operations: Vec<String>,
    pub auth_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let model_management_group = lookup("NAV_MODEL_MANAGEMENT_GROUP")
            .unwrap_or_else(|| "modelManagement".to_string());
        if model_management_group.trim().is_empty() {
            anyhow::bail!("NAV_MODEL_MANAGEMENT_GROUP must not be empty");
        }

        let default_locale = lookup("NAV_DEFAULT_LOCALE")
            .unwrap_or_else(|| "zh_CN".to_string());

        let extra_operations = lookup("NAV_EXTRA_OPERATIONS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let auth_enabled = match lookup("NAV_AUTH_ENABLED") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .context("NAV_AUTH_ENABLED must be 'true' or 'false'")?,
            None => true,
        };

        Ok(Config {
            service_port,
            service_host,
            model_management_group,
            default_locale,
            extra_operations,
            auth_enabled,
        })
    }

    /// Navigation settings handed to the page declarations.
    pub fn nav(&self) -> NavConfig {
        let mut operations = OperationCatalog::default();
        operations.extend(self.extra_operations.iter().cloned().map(OperationId::new));

        NavConfig {
            model_management_group: self.model_management_group.clone(),
            operations,
        }
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Model management nav group: {}", self.model_management_group);
        tracing::info!("  Default locale: {}", self.default_locale);
        tracing::info!("  Extra operations: {:?}", self.extra_operations);
        tracing::info!("  Menu authorization: {}",
            if self.auth_enabled { "enabled" } else { "disabled (all entries visible)" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

/// Values the route declarations would otherwise import as globals.
#[derive(Debug, Clone)]
pub struct NavConfig {
    pub model_management_group: String,
    pub operations: OperationCatalog,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            model_management_group: "modelManagement".to_string(),
            operations: OperationCatalog::default(),
        }
    }
}
