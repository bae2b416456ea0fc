use crate::{
    di::{DependenciesInject, DependenciesInjectDeps},
    model::product::Product as ProductModel,
    store::ProductStore,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::utils::SystemMetrics;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    /// Builds the state around a fresh product store holding `seed`.
    pub fn new(seed: Vec<ProductModel>) -> Result<Self> {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let store = Arc::new(ProductStore::new(seed).context("Failed to seed product store")?);

        let deps = DependenciesInjectDeps { store };
        let di_container = DependenciesInject::new(deps, &mut registry);

        registry.register_metrics(&system_metrics);

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
        })
    }
}

trait MetricsRegister {
    fn register_metrics(&mut self, metrics: &SystemMetrics);
}

impl MetricsRegister for Registry {
    fn register_metrics(&mut self, metrics: &SystemMetrics) {
        metrics.register(self);
    }
}
