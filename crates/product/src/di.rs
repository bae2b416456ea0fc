use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    repository::{command::ProductCommandRepository, query::ProductQueryRepository},
    service::{command::ProductCommandService, query::ProductQueryService},
    store::SharedProductStore,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub store: SharedProductStore,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { store } = deps;

        let product_query_repo = Arc::new(ProductQueryRepository::new(store.clone()));
        let product_command_repo = Arc::new(ProductCommandRepository::new(store.clone()));

        let product_query = Arc::new(ProductQueryService::new(
            product_query_repo.clone(),
            registry,
        )) as DynProductQueryService;

        let product_command = Arc::new(ProductCommandService::new(
            product_query_repo,
            product_command_repo,
            registry,
        )) as DynProductCommandService;

        Self {
            product_query,
            product_command,
        }
    }
}
