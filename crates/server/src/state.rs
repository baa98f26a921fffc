//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use parking_lot::RwLock;
use retiree_resources_config::{load_settings, Settings};
use retiree_resources_tools::{create_registry_from_factory, SpecialistToolFactory, ToolRegistry};

use crate::ServerError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration, swapped on reload
    pub config: Arc<RwLock<Settings>>,
    /// Builds the registry; kept to rebuild it when tool settings change
    pub factory: Arc<SpecialistToolFactory>,
    tools: Arc<RwLock<Arc<ToolRegistry>>>,
    /// Environment name for config reload
    env: Option<String>,
}

impl AppState {
    pub fn new(config: Settings) -> Result<Self, ServerError> {
        Self::with_env(config, None)
    }

    /// State that reloads `config/<env>` on `/admin/reload-config`
    pub fn with_env(config: Settings, env: Option<String>) -> Result<Self, ServerError> {
        Self::with_factory(config, env, Arc::new(SpecialistToolFactory::new()))
    }

    pub fn with_factory(
        config: Settings,
        env: Option<String>,
        factory: Arc<SpecialistToolFactory>,
    ) -> Result<Self, ServerError> {
        let registry = build_registry(&factory, &config)?;
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            factory,
            tools: Arc::new(RwLock::new(Arc::new(registry))),
            env,
        })
    }

    /// Current registry; the lock is released before the caller awaits
    pub fn tools(&self) -> Arc<ToolRegistry> {
        self.tools.read().clone()
    }

    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }

    /// Reload configuration from disk and rebuild the tool registry
    ///
    /// Server settings such as the port and CORS apply only at startup.
    pub fn reload_config(&self) -> Result<(), ServerError> {
        let new_config = load_settings(self.env.as_deref())?;
        self.apply_config(new_config)
    }

    /// Swap in already-loaded settings
    pub fn apply_config(&self, new_config: Settings) -> Result<(), ServerError> {
        new_config.validate()?;
        let registry = build_registry(&self.factory, &new_config)?;

        *self.tools.write() = Arc::new(registry);
        *self.config.write() = new_config;

        tracing::info!("Configuration reloaded successfully");
        Ok(())
    }
}

fn build_registry(
    factory: &Arc<SpecialistToolFactory>,
    config: &Settings,
) -> Result<ToolRegistry, ServerError> {
    create_registry_from_factory(factory.clone(), &config.tools)
        .map_err(|e| ServerError::Internal(format!("Failed to build tool registry: {}", e)))
}
