use crate::model::product::Product as ProductModel;
use shared::errors::RepositoryError;
use std::{collections::HashSet, sync::Arc};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

pub type SharedProductStore = Arc<ProductStore>;

/// Rows of the in-memory product table, kept in insertion order.
#[derive(Debug, Default)]
pub struct ProductTable {
    pub rows: Vec<ProductModel>,
    last_id: i32,
}

impl ProductTable {
    /// Reserves the next id. Ids are never handed out twice, even after the
    /// row holding the highest id has been removed.
    pub fn next_id(&mut self) -> Result<i32, RepositoryError> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Custom("product id space exhausted".into()))?;

        self.last_id = id;
        Ok(id)
    }

    pub fn position(&self, id: i32) -> Option<usize> {
        self.rows.iter().position(|p| p.id == id)
    }
}

#[derive(Debug)]
pub struct ProductStore {
    table: RwLock<ProductTable>,
}

impl ProductStore {
    pub fn new(seed: Vec<ProductModel>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::with_capacity(seed.len());
        if let Some(dup) = seed.iter().find(|p| !seen.insert(p.id)) {
            return Err(RepositoryError::AlreadyExists(format!(
                "product id {} is seeded more than once",
                dup.id
            )));
        }

        let last_id = seed.iter().map(|p| p.id).max().unwrap_or(0);

        info!("📦 Product store seeded with {} products", seed.len());

        Ok(Self {
            table: RwLock::new(ProductTable {
                rows: seed,
                last_id,
            }),
        })
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ProductTable> {
        self.table.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ProductTable> {
        self.table.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str) -> ProductModel {
        ProductModel {
            id,
            name: name.into(),
            price: 10.0,
            stock: 1,
        }
    }

    #[tokio::test]
    async fn next_id_starts_at_one_when_empty() {
        let store = ProductStore::new(Vec::new()).unwrap();
        assert_eq!(store.write().await.next_id().unwrap(), 1);
    }

    #[tokio::test]
    async fn next_id_follows_highest_seeded_id() {
        let store = ProductStore::new(vec![product(7, "a"), product(3, "b")]).unwrap();
        let mut table = store.write().await;
        assert_eq!(table.next_id().unwrap(), 8);
        assert_eq!(table.next_id().unwrap(), 9);
    }

    #[tokio::test]
    async fn removing_highest_row_does_not_recycle_its_id() {
        let store = ProductStore::new(vec![product(1, "a"), product(2, "b")]).unwrap();
        let mut table = store.write().await;
        let pos = table.position(2).unwrap();
        table.rows.remove(pos);
        assert_eq!(table.next_id().unwrap(), 3);
    }

    #[tokio::test]
    async fn next_id_fails_once_ids_run_out() {
        let store = ProductStore::new(vec![product(i32::MAX, "last")]).unwrap();
        let mut table = store.write().await;

        let err = table.next_id().unwrap_err();
        assert!(matches!(err, RepositoryError::Custom(ref m) if m == "product id space exhausted"));

        // a failed reservation leaves the high-water mark untouched
        assert!(table.next_id().is_err());
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let err = ProductStore::new(vec![product(1, "a"), product(1, "b")]).unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn rows_keep_seed_order() {
        let store = ProductStore::new(vec![product(2, "b"), product(1, "a")]).unwrap();
        let ids: Vec<i32> = store.read().await.rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
