use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{NewProduct, UpdateProductRequest},
    model::product::Product as ProductModel,
    store::SharedProductStore,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: SharedProductStore,
}

impl ProductCommandRepository {
    pub fn new(db: SharedProductStore) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, req: &NewProduct) -> Result<ProductModel, RepositoryError> {
        info!("🆕 Creating product: {}", req.name);

        let mut table = self.db.write().await;

        let id = table.next_id().inspect_err(|e| {
            error!("❌ Cannot assign an id to product {}: {e}", req.name);
        })?;

        let product = ProductModel {
            id,
            name: req.name.clone(),
            price: req.price,
            stock: req.stock,
        };
        table.rows.push(product.clone());

        info!("✅ Created product: {} (ID: {})", product.name, product.id);

        Ok(product)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        info!("🔄 Updating product ID: {id}");

        let mut table = self.db.write().await;

        let Some(product) = table.rows.iter_mut().find(|p| p.id == id) else {
            error!("❌ Product with ID {id} not found for update");
            return Err(RepositoryError::NotFound);
        };

        if let Some(name) = &req.name {
            product.name = name.clone();
        }
        if let Some(price) = req.price {
            product.price = price;
        }
        if let Some(stock) = req.stock {
            product.stock = stock;
        }

        info!("✅ Updated product: {} (ID: {})", product.name, product.id);

        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🧨 Deleting product ID: {id}");

        let mut table = self.db.write().await;

        let Some(pos) = table.position(id) else {
            error!("❌ Product with ID {id} not found for delete");
            return Err(RepositoryError::NotFound);
        };
        table.rows.remove(pos);

        info!("✅ Product ID {id} deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProductStore;
    use std::sync::Arc;

    fn repo() -> (ProductCommandRepository, SharedProductStore) {
        let store = Arc::new(
            ProductStore::new(vec![
                ProductModel {
                    id: 1,
                    name: "Laptop".into(),
                    price: 1000.0,
                    stock: 5,
                },
                ProductModel {
                    id: 2,
                    name: "Smartphone".into(),
                    price: 600.0,
                    stock: 10,
                },
            ])
            .unwrap(),
        );
        (ProductCommandRepository::new(store.clone()), store)
    }

    #[tokio::test]
    async fn create_appends_with_next_id() {
        let (repo, store) = repo();
        let created = repo
            .create_product(&NewProduct {
                name: "Tablet".into(),
                price: 600.0,
                stock: 8,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 3);
        let ids: Vec<i32> = store.read().await.rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_only_touches_provided_fields() {
        let (repo, _) = repo();
        let updated = repo
            .update_product(
                1,
                &UpdateProductRequest {
                    stock: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Laptop");
        assert_eq!(updated.price, 1000.0);
        assert_eq!(updated.stock, 0);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let (repo, _) = repo();
        let update = repo
            .update_product(42, &UpdateProductRequest::default())
            .await;
        assert!(matches!(update, Err(RepositoryError::NotFound)));

        let delete = repo.delete_product(42).await;
        assert!(matches!(delete, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_keeps_remaining_order() {
        let (repo, store) = repo();
        repo.delete_product(1).await.unwrap();

        let ids: Vec<i32> = store.read().await.rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
