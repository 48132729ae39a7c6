//! Read-through article store over a directory of markdown files.
//!
//! No caching: every call reads the directory again.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ArticleError, ArticleResult};
use crate::front_matter::{self, FrontMatter};

const EXTENSION: &str = "md";

/// Default articles directory, relative to the site root.
pub const DEFAULT_ARTICLES_DIR: &str = "data/articles";

/// List entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
}

/// Full article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl ArticleSummary {
    pub fn published(&self) -> Option<NaiveDateTime> {
        front_matter::parse_date(&self.date)
    }
}

#[derive(Debug, Clone)]
pub struct ArticleStore {
    dir: PathBuf,
}

impl ArticleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every parseable article, newest first.
    ///
    /// An unreadable directory yields an empty list. Files that fail to parse
    /// are skipped. Articles with an unparseable date sort last.
    pub fn list(&self) -> Vec<ArticleSummary> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "cannot read articles directory");
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_markdown_extension(path))
            .collect();
        paths.sort();

        let mut articles: Vec<ArticleSummary> = paths
            .iter()
            .filter_map(|path| {
                let slug = path.file_stem()?.to_str()?.to_string();
                match read_article(path) {
                    Ok((matter, _)) => Some(ArticleSummary {
                        slug,
                        title: matter.title,
                        date: matter.date,
                        excerpt: matter.excerpt,
                        tags: matter.tags,
                    }),
                    Err(e) => {
                        warn!(error = %e, "skipping article");
                        None
                    }
                }
            })
            .collect();

        articles.sort_by(|a, b| b.published().cmp(&a.published()));
        debug!(count = articles.len(), "listed articles");
        articles
    }

    /// Article by slug. Absent, unreadable and unparseable all read as not found.
    pub fn get(&self, slug: &str) -> ArticleResult<Article> {
        let not_found = || ArticleError::NotFound {
            slug: slug.to_string(),
        };

        if !is_safe_slug(slug) {
            return Err(not_found());
        }

        let path = self.dir.join(format!("{slug}.{EXTENSION}"));
        match read_article(&path) {
            Ok((matter, content)) => Ok(Article {
                title: matter.title,
                date: matter.date,
                tags: matter.tags,
                content,
            }),
            Err(e) => {
                debug!(slug, error = %e, "article lookup failed");
                Err(not_found())
            }
        }
    }
}

fn read_article(path: &Path) -> ArticleResult<(FrontMatter, String)> {
    let source = std::fs::read_to_string(path).map_err(|e| ArticleError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let (matter, body) = front_matter::split(&source).map_err(|message| {
        ArticleError::FrontMatter {
            path: path.to_path_buf(),
            message,
        }
    })?;
    Ok((matter, body.to_string()))
}

fn has_markdown_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(EXTENSION)
}

fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '\\']) && !slug.contains("..")
}
