mod news_query;
mod news_repository;

pub use news_query::{NewsListFilter, NewsQuery, NewsQueryError, NewsView};
pub use news_repository::{
    CreateNewsData, NewsPatch, NewsRepository, NewsRepositoryError, NewsResult,
};
