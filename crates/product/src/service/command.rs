use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{
            CreateProductRequest, NewProduct, UpdateProductRequest, first_validation_message,
        },
        response::{api::MessageResponse, product::ProductResponse},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use tracing::{error, info};
use validator::Validate;

const NOT_FOUND: &str = "Product not found";

#[derive(Clone)]
pub struct ProductCommandService {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", "ProductCommandService", registry);

        Self {
            query,
            command,
            metrics,
        }
    }

    fn fail(&self, tracing_ctx: &TracingContext, method: Method, err: ServiceError) -> ServiceError {
        tracing_ctx.complete_error(&self.metrics, method, &err.to_string());
        err
    }
}

fn map_repo_error(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound(NOT_FOUND.into()),
        other => ServiceError::Repo(other),
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: Option<&CreateProductRequest>,
    ) -> Result<ProductResponse, ServiceError> {
        info!(
            "🏗️ Creating new product: {:?}",
            req.and_then(|r| r.name.as_deref())
        );

        let method = Method::Post;
        let tracing_ctx = TracingContext::start("product", "create_product");

        let new_product = NewProduct::from_request(req)
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), e))?;

        let product = self
            .command
            .create_product(&new_product)
            .await
            .map_err(|e| {
                error!("❌ Failed to create product: {e:?}");
                self.fail(&tracing_ctx, method.clone(), ServiceError::Repo(e))
            })?;

        tracing_ctx.complete_success(&self.metrics, method, "Product created successfully");

        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        id: i32,
        req: Option<&UpdateProductRequest>,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🔄 Updating product ID: {id}");

        let method = Method::Put;
        let tracing_ctx = TracingContext::start("product", "update_product");

        let existing = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), ServiceError::Repo(e)))?;

        if existing.is_none() {
            return Err(self.fail(
                &tracing_ctx,
                method,
                ServiceError::NotFound(NOT_FOUND.into()),
            ));
        }

        let Some(req) = req.filter(|r| !r.is_empty()) else {
            return Err(self.fail(
                &tracing_ctx,
                method,
                ServiceError::Validation("No update data provided".into()),
            ));
        };

        if let Err(errors) = req.validate() {
            return Err(self.fail(
                &tracing_ctx,
                method,
                ServiceError::Validation(first_validation_message(&errors)),
            ));
        }

        let product = self
            .command
            .update_product(id, req)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), map_repo_error(e)))?;

        tracing_ctx.complete_success(&self.metrics, method, "Product updated successfully");

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = TracingContext::start("product", "delete_product");

        self.command
            .delete_product(id)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), map_repo_error(e)))?;

        tracing_ctx.complete_success(&self.metrics, method, "Product deleted successfully");

        Ok(MessageResponse::success("Product deleted"))
    }
}
