mod bulk_delete_news;
mod create_news;
mod get_news_feed;
mod moderation_list_news;
mod restore_news;
mod soft_delete_news;
mod update_news;

pub use bulk_delete_news::bulk_delete_news_handler;
pub use create_news::create_news_handler;
pub use get_news_feed::get_news_feed_handler;
pub use moderation_list_news::moderation_list_news_handler;
pub use restore_news::restore_news_handler;
pub use soft_delete_news::soft_delete_news_handler;
pub use update_news::update_news_handler;
