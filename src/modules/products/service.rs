use serde_json::Value;

use crate::client::ApiClient;
use crate::core::traits::VariableStore;
use crate::core::{EntityKind, Result};
use crate::fixtures::FixtureCache;

use super::models::{ProductCategoryRequest, ProductRequest};

/// Products and their categories
pub struct ProductService<'a, S: VariableStore> {
    api: &'a ApiClient,
    cache: &'a mut FixtureCache<S>,
}

impl<'a, S: VariableStore> ProductService<'a, S> {
    pub fn new(api: &'a ApiClient, cache: &'a mut FixtureCache<S>) -> Self {
        Self { api, cache }
    }

    pub async fn create_category(&mut self, request: &ProductCategoryRequest) -> Result<Value> {
        let api = self.api;
        self.cache
            .get_or_create(EntityKind::ProductCategory, &request.name, || {
                api.create(EntityKind::ProductCategory, request)
            })
            .await
    }

    pub async fn create(&mut self, request: &ProductRequest) -> Result<Value> {
        let api = self.api;
        self.cache
            .get_or_create(EntityKind::Product, &request.name, || {
                api.create(EntityKind::Product, request)
            })
            .await
    }

    pub async fn delete(&mut self, product_id: &str) -> Result<()> {
        let api = self.api;
        self.cache
            .delete(EntityKind::Product, product_id, |id| async move {
                api.delete(EntityKind::Product, &id).await
            })
            .await
    }

    pub async fn delete_category(&mut self, category_id: &str) -> Result<()> {
        let api = self.api;
        self.cache
            .delete(EntityKind::ProductCategory, category_id, |id| async move {
                api.delete(EntityKind::ProductCategory, &id).await
            })
            .await
    }
}
