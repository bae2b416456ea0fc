use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel, store::SharedProductStore,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: SharedProductStore,
}

impl ProductQueryRepository {
    pub fn new(db: SharedProductStore) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");

        let table = self.db.read().await;
        let products = table.rows.clone();

        info!("✅ Fetched {} products", products.len());

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let table = self.db.read().await;
        let product = table.rows.iter().find(|p| p.id == id).cloned();

        match &product {
            Some(p) => info!("✅ Found product: {} (ID: {})", p.name, p.id),
            None => info!("⚠️ Product with ID {id} not found"),
        }

        Ok(product)
    }
}
