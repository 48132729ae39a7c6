//! Markdown article store for the folio blog.
//!
//! Articles are `*.md` files with YAML front matter (`title`, `date`,
//! `excerpt`, `tags`). The store is a plain read-through: [`ArticleStore::list`]
//! returns summaries newest first, [`ArticleStore::get`] returns one article
//! or [`ArticleError::NotFound`].

pub mod error;
pub mod front_matter;
pub mod store;

pub use error::{ArticleError, ArticleResult};
pub use front_matter::FrontMatter;
pub use store::{Article, ArticleStore, ArticleSummary, DEFAULT_ARTICLES_DIR};
