mod bulk_delete_news;
mod create_news;
mod get_news_list;
mod restore_news;
mod soft_delete_news;
mod update_news;

pub use bulk_delete_news::{BulkDeleteNewsError, BulkDeleteNewsUseCase};
pub use create_news::{
    CreateNewsCommand, CreateNewsCommandError, CreateNewsError, CreateNewsUseCase,
    NEWS_PREAMBLE_MAX, NEWS_TITLE_MAX,
};
pub use get_news_list::{GetNewsListError, GetNewsListUseCase};
pub use restore_news::{RestoreNewsError, RestoreNewsUseCase};
pub use soft_delete_news::{SoftDeleteNewsError, SoftDeleteNewsUseCase};
pub use update_news::{UpdateNewsCommand, UpdateNewsCommandError, UpdateNewsError, UpdateNewsUseCase};
