use super::args::*;

pub mod articles;
pub mod contact;
pub mod env;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Contact(args) => contact::run(args).await,
        Command::Articles(args) => articles::run(args),
        Command::Env(args) => match args.cmd {
            EnvSub::Check => env::cmd_check(),
        },
    }
}
