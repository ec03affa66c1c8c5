use std::sync::Arc;

use tracing::{info, warn};

use crate::client::{ApiClient, ReqwestHttpClient};
use crate::config::{ApiConfig, TestIdentity};
use crate::core::traits::{HttpClient, MemoryStore, VariableStore};
use crate::core::Result;
use crate::modules::auth::AuthService;
use crate::modules::customers::CustomerService;
use crate::modules::inventory::InventoryService;
use crate::modules::payments::PaymentService;
use crate::modules::products::ProductService;
use crate::modules::purchases::PurchaseOrderService;
use crate::modules::receiving::ReceivingService;
use crate::modules::vendors::VendorService;

use super::cache::FixtureCache;

/// Everything one test run needs: an API client and its own fixture cache.
///
/// Contexts share nothing, so tests that build their own context are
/// isolated from each other.
pub struct FixtureContext<S: VariableStore = MemoryStore> {
    api: ApiClient,
    cache: FixtureCache<S>,
}

impl FixtureContext<MemoryStore> {
    /// Context talking to the configured backend over reqwest
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(config)?);
        Ok(Self::new(
            ApiClient::new(http, config.clone()),
            MemoryStore::new(),
        ))
    }
}

impl<S: VariableStore> FixtureContext<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self {
            api,
            cache: FixtureCache::new(store),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &FixtureCache<S> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut FixtureCache<S> {
        &mut self.cache
    }

    /// Log in (or register) the test identity and keep the token for the run
    pub async fn bootstrap(&mut self, identity: &TestIdentity) -> Result<String> {
        AuthService::new(&mut self.api, self.cache.store_mut())
            .bootstrap(identity)
            .await
    }

    pub fn customers(&mut self) -> CustomerService<'_, S> {
        CustomerService::new(&self.api, &mut self.cache)
    }

    pub fn products(&mut self) -> ProductService<'_, S> {
        ProductService::new(&self.api, &mut self.cache)
    }

    pub fn inventory(&mut self) -> InventoryService<'_, S> {
        InventoryService::new(&self.api, &mut self.cache)
    }

    pub fn vendors(&mut self) -> VendorService<'_, S> {
        VendorService::new(&self.api, &mut self.cache)
    }

    pub fn purchase_orders(&mut self) -> PurchaseOrderService<'_, S> {
        PurchaseOrderService::new(&self.api, &mut self.cache)
    }

    pub fn receiving(&self) -> ReceivingService<'_> {
        ReceivingService::new(&self.api)
    }

    pub fn payments(&self) -> PaymentService<'_> {
        PaymentService::new(&self.api)
    }

    /// Delete every cached fixture, newest first, so dependents go before
    /// the entities they reference.
    ///
    /// Stops at the first failed deletion and returns its error; entries not
    /// yet deleted stay cached. Returns the number of entities deleted.
    pub async fn teardown(&mut self) -> Result<usize> {
        let names: Vec<String> = self.cache.created_names().iter().rev().cloned().collect();
        let mut deleted = 0;

        for name in names {
            let Some(entry) = self.cache.get(&name) else {
                self.cache.forget(&name);
                continue;
            };

            let id = entry.id().unwrap_or_default();
            if id.is_empty() || !entry.kind.is_deletable() {
                warn!(fixture = %name, kind = %entry.kind, "Dropping fixture that cannot be deleted");
                self.cache.forget(&name);
                continue;
            }

            let api = &self.api;
            let kind = entry.kind;
            self.cache
                .delete(kind, &id, |id| async move { api.delete(kind, &id).await })
                .await?;
            self.cache.forget(&name);
            deleted += 1;
        }

        info!(deleted = deleted, "Fixture teardown complete");
        Ok(deleted)
    }
}
