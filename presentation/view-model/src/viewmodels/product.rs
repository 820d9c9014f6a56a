use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::watch;
use tokio::time::sleep;

use business::domain::logger::Logger;
use business::domain::product::model::{Product, ProductList};
use business::domain::product::use_cases::get_all::GetProductsUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::shared::value_objects::ProductId;

use super::errors::ProductViewError;
use crate::config::latency_config::LatencyConfig;

/// Everything the product screens render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductViewState {
    pub items: Vec<Product>,
    pub product_list: Option<ProductList>,
    pub detail: Option<Product>,
    pub is_loading: bool,
    pub error: Option<ProductViewError>,
}

pub struct ProductUseCases {
    pub get_products: Arc<dyn GetProductsUseCase>,
    pub get_detail: Arc<dyn GetProductDetailUseCase>,
    pub search: Arc<dyn SearchProductsUseCase>,
    pub get_by_category: Arc<dyn GetProductsByCategoryUseCase>,
}

/// Orchestrates the product use cases and publishes [`ProductViewState`].
///
/// Each triggering operation takes a new generation number when it starts.
/// A completion is applied only if its generation is still the latest, so
/// an older request finishing late never overwrites a newer one and
/// `is_loading` stays set until the latest request lands.
pub struct ProductViewModel {
    use_cases: ProductUseCases,
    logger: Arc<dyn Logger>,
    latency: LatencyConfig,
    state: watch::Sender<ProductViewState>,
    generation: AtomicU64,
}

impl ProductViewModel {
    pub fn new(use_cases: ProductUseCases, logger: Arc<dyn Logger>, latency: LatencyConfig) -> Self {
        let (state, _) = watch::channel(ProductViewState::default());
        Self {
            use_cases,
            logger,
            latency,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> ProductViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProductViewState> {
        self.state.subscribe()
    }

    pub async fn load_list(&self) {
        let ticket = self.begin(true);
        sleep(self.latency.list).await;

        match self.use_cases.get_products.execute().await {
            Ok(list) => self.complete(ticket, move |state| {
                state.items = list.products.clone();
                state.product_list = Some(list);
            }),
            Err(err) => {
                self.logger
                    .error(&format!("Error loading products: {:?}", err));
                self.complete(ticket, |state| {
                    state.error = Some(ProductViewError::LoadFailed);
                });
            }
        }
    }

    pub async fn load_detail(&self, id: impl Into<ProductId>) {
        let id = id.into();
        let ticket = self.begin(true);
        sleep(self.latency.detail).await;

        let result = self
            .use_cases
            .get_detail
            .execute(GetProductDetailParams { id: id.clone() })
            .await;

        match result {
            Ok(product) => {
                if product.is_none() {
                    self.logger.warn(&format!("Product {} not found", id));
                }
                self.complete(ticket, move |state| {
                    if product.is_none() {
                        state.error = Some(ProductViewError::NotFound);
                    }
                    state.detail = product;
                });
            }
            Err(err) => {
                self.logger
                    .error(&format!("Error loading product detail {}: {:?}", id, err));
                self.complete(ticket, |state| {
                    state.error = Some(ProductViewError::DetailFailed);
                });
            }
        }
    }

    /// A blank query falls back to the unfiltered listing. An empty result
    /// is not an error.
    pub async fn search(&self, query: &str) {
        if query.trim().is_empty() {
            self.load_list().await;
            return;
        }

        let ticket = self.begin(false);
        sleep(self.latency.search).await;

        let result = self
            .use_cases
            .search
            .execute(SearchProductsParams {
                query: query.to_string(),
            })
            .await;

        match result {
            Ok(products) => self.complete(ticket, move |state| state.items = products),
            Err(err) => {
                self.logger
                    .error(&format!("Error searching products: {:?}", err));
                self.complete(ticket, |state| {
                    state.error = Some(ProductViewError::SearchFailed);
                });
            }
        }
    }

    pub async fn filter_by_category(&self, category: &str) {
        let ticket = self.begin(false);
        sleep(self.latency.search).await;

        let result = self
            .use_cases
            .get_by_category
            .execute(GetProductsByCategoryParams {
                category: category.to_string(),
            })
            .await;

        match result {
            Ok(products) => self.complete(ticket, move |state| state.items = products),
            Err(err) => {
                self.logger
                    .error(&format!("Error filtering category '{}': {:?}", category, err));
                self.complete(ticket, |state| {
                    state.error = Some(ProductViewError::CategoryFailed);
                });
            }
        }
    }

    pub fn clear_selection(&self) {
        self.state.send_modify(|state| {
            state.detail = None;
            state.error = None;
        });
    }

    fn begin(&self, clear_error: bool) -> u64 {
        let mut ticket = 0;
        self.state.send_modify(|state| {
            ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.is_loading = true;
            if clear_error {
                state.error = None;
            }
        });
        ticket
    }

    fn complete(&self, ticket: u64, apply: impl FnOnce(&mut ProductViewState)) {
        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != ticket {
                return false;
            }
            apply(state);
            state.is_loading = false;
            true
        });

        if !applied {
            self.logger
                .debug(&format!("Discarded superseded request #{}", ticket));
        }
    }
}
