//! Error types for the article store.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    /// No readable, parseable article for this slug.
    #[error("article not found: {slug}")]
    NotFound { slug: String },

    #[error("failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Front matter present but not valid YAML of the expected shape.
    #[error("invalid front matter in {}: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },
}

pub type ArticleResult<T> = Result<T, ArticleError>;
