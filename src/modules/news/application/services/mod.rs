mod bulk_delete_news_service;
mod create_news_service;
mod get_news_list_service;
mod restore_news_service;
mod soft_delete_news_service;
mod update_news_service;

pub use bulk_delete_news_service::BulkDeleteNewsService;
pub use create_news_service::CreateNewsService;
pub use get_news_list_service::GetNewsListService;
pub use restore_news_service::RestoreNewsService;
pub use soft_delete_news_service::SoftDeleteNewsService;
pub use update_news_service::UpdateNewsService;
