use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::CatalogStore;
use persistence::product::repository::ProductRepositoryInMemory;
use persistence::user::repository::UserRepositoryStatic;

use business::application::product::get_all::GetProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_detail::GetProductDetailUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::user::get_age::GetAgeUseCaseImpl;
use business::application::user::get_user::GetUserUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::user::repository::UserRepository;

use crate::config::app_config::AppConfig;
use crate::config::latency_config::LatencyConfig;
use crate::viewmodels::product::{ProductUseCases, ProductViewModel};
use crate::viewmodels::user::UserViewModel;

pub struct DependencyContainer {
    pub product_view_model: ProductViewModel,
    pub user_view_model: UserViewModel,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store = Arc::new(CatalogStore::seeded()?);

        Ok(Self::with_adapters(
            Arc::new(ProductRepositoryInMemory::new(store)),
            Arc::new(UserRepositoryStatic::default()),
            Arc::new(TracingLogger),
            config.latency,
        ))
    }

    /// Wires the view-models over explicit adapters, e.g. a different store.
    pub fn with_adapters(
        product_repository: Arc<dyn ProductRepository>,
        user_repository: Arc<dyn UserRepository>,
        logger: Arc<dyn Logger>,
        latency: LatencyConfig,
    ) -> Self {
        // Product use cases
        let product_use_cases = ProductUseCases {
            get_products: Arc::new(GetProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            get_detail: Arc::new(GetProductDetailUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            search: Arc::new(SearchProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            get_by_category: Arc::new(GetProductsByCategoryUseCaseImpl {
                repository: product_repository,
                logger: logger.clone(),
            }),
        };

        // User use cases
        let get_user_use_case = Arc::new(GetUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_age_use_case = Arc::new(GetAgeUseCaseImpl {
            repository: user_repository,
            logger: logger.clone(),
        });

        Self {
            product_view_model: ProductViewModel::new(product_use_cases, logger.clone(), latency),
            user_view_model: UserViewModel::new(get_user_use_case, get_age_use_case, logger),
        }
    }
}
