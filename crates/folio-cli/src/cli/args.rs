use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Portfolio site tooling: contact form submission and blog articles"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send one message through the contact pipeline
    Contact(ContactArgs),
    /// Blog article store
    Articles(ArticlesArgs),
    /// Environment configuration
    Env(EnvArgs),
}

#[derive(Parser, Debug)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub message: String,

    /// Token issued by the challenge widget
    #[arg(long)]
    pub captcha_token: Option<String>,

    /// Decoy field; leave empty
    #[arg(long, default_value = "", hide = true)]
    pub website: String,

    /// Print the final status as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ArticlesArgs {
    /// Directory holding the markdown articles
    #[arg(long, env = "FOLIO_ARTICLES_DIR", default_value = folio_articles::DEFAULT_ARTICLES_DIR)]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub cmd: ArticlesSub,
}

#[derive(Subcommand, Debug)]
pub enum ArticlesSub {
    /// List articles, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one article
    Show {
        slug: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
pub struct EnvArgs {
    #[command(subcommand)]
    pub cmd: EnvSub,
}

#[derive(Subcommand, Debug)]
pub enum EnvSub {
    /// Check that every required variable is configured
    Check,
}
