use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", "ProductQueryService", registry);

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Finding all products");

        let tracing_ctx = TracingContext::start("product", "find_all");

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(e) => {
                let msg = format!("Failed to fetch all products: {e:?}");
                error!("❌ {msg}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        tracing_ctx.complete_success(&self.metrics, Method::Get, "Products retrieved");
        info!("✅ Found {} products", data.len());

        Ok(data)
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let tracing_ctx = TracingContext::start("product", "find_by_id");

        let product = match self.query.find_by_id(id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, "Product not found");
                return Err(ServiceError::NotFound("Product not found".into()));
            }
            Err(e) => {
                let msg = format!("Failed to fetch product {id}: {e:?}");
                error!("❌ {msg}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        tracing_ctx.complete_success(&self.metrics, Method::Get, "Product retrieved");

        Ok(ProductResponse::from(product))
    }
}
