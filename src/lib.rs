pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::accounts;
pub use modules::catalog;
pub use modules::news;

use std::sync::Arc;

use crate::accounts::application::use_cases::{
    IFetchProfileUseCase, IRegisterAccountUseCase, IUpdateProfileUseCase,
};
use crate::catalog::application::CatalogUseCases;
use crate::news::application::ports::incoming::use_cases::{
    BulkDeleteNewsUseCase, CreateNewsUseCase, GetNewsListUseCase, RestoreNewsUseCase,
    SoftDeleteNewsUseCase, UpdateNewsUseCase,
};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    // news
    pub create_news_use_case: Arc<dyn CreateNewsUseCase + Send + Sync>,
    pub update_news_use_case: Arc<dyn UpdateNewsUseCase + Send + Sync>,
    pub get_news_list_use_case: Arc<dyn GetNewsListUseCase + Send + Sync>,
    pub soft_delete_news_use_case: Arc<dyn SoftDeleteNewsUseCase + Send + Sync>,
    pub restore_news_use_case: Arc<dyn RestoreNewsUseCase + Send + Sync>,
    pub bulk_delete_news_use_case: Arc<dyn BulkDeleteNewsUseCase + Send + Sync>,
    // catalog
    pub catalog: CatalogUseCases,
    // accounts
    pub register_account_use_case: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
}
