use folio_articles::{ArticleError, ArticleStore};

use super::super::args::{ArticlesArgs, ArticlesSub};
use crate::exit_codes;

pub fn run(args: ArticlesArgs) -> anyhow::Result<i32> {
    let store = ArticleStore::new(args.dir);
    match args.cmd {
        ArticlesSub::List { json } => cmd_list(&store, json),
        ArticlesSub::Show { slug, json } => cmd_show(&store, &slug, json),
    }
}

fn cmd_list(store: &ArticleStore, json: bool) -> anyhow::Result<i32> {
    let articles = store.list();
    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(exit_codes::SUCCESS);
    }

    if articles.is_empty() {
        println!("No articles in {}", store.dir().display());
    }
    for article in &articles {
        let tags = if article.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", article.tags.join(", "))
        };
        println!("{:<12} {:<32} {}{}", article.date, article.slug, article.title, tags);
    }
    Ok(exit_codes::SUCCESS)
}

fn cmd_show(store: &ArticleStore, slug: &str, json: bool) -> anyhow::Result<i32> {
    match store.get(slug) {
        Ok(article) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&article)?);
            } else {
                println!("# {}", article.title);
                println!("{}", article.date);
                if !article.tags.is_empty() {
                    println!("tags: {}", article.tags.join(", "));
                }
                println!();
                print!("{}", article.content);
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(e @ ArticleError::NotFound { .. }) => {
            eprintln!("{e}");
            Ok(exit_codes::REJECTED)
        }
        Err(e) => Err(e.into()),
    }
}
