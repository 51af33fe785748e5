//! CourseOp CLI - companion for the CourseHub learning platform

use clap::{CommandFactory, Parser};

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod guard;
mod models;
mod notify;
mod output;
mod session;

use cli::{
    BankCommands, CacheCommands, CategoryCommands, Cli, Commands, CourseCommands,
    FavoriteCommands, GlobalOptions, MediaCommands, OrderCommands, PermissionCommands,
    RoleCommands, TagCommands, UserCommands,
};
use error::{Error, Result};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // API failures already surfaced a notification
        if !matches!(err, Error::Api(_)) {
            eprintln!("Error: {}", err);
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let env = env_logger::Env::default();
    let env = if cli.debug {
        env.default_filter_or("debug")
    } else {
        env
    };
    env_logger::Builder::from_env(env).init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username } => cli::login::run(&opts, username).await,
        Commands::Logout => cli::login::logout(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Whoami => cli::whoami::run(&opts).await,
        Commands::Version => {
            println!("courseop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Course(cmd) => match cmd {
            CourseCommands::List { pagination, all } => {
                cli::course::list(&opts, &pagination, all).await
            }
            CourseCommands::Get { course_id } => cli::course::get(&opts, &course_id).await,
            CourseCommands::Chapters { course_id } => {
                cli::course::chapters(&opts, &course_id).await
            }
            CourseCommands::Sections { chapter_id } => {
                cli::course::sections(&opts, &chapter_id).await
            }
        },
        Commands::Order(OrderCommands::List { pagination }) => {
            cli::order::list(&opts, &pagination).await
        }
        Commands::User(UserCommands::List { pagination }) => {
            cli::user::list(&opts, &pagination).await
        }
        Commands::Role(RoleCommands::List) => cli::role::list(&opts).await,
        Commands::Permission(PermissionCommands::List) => cli::permission::list(&opts).await,
        Commands::Media(cmd) => match cmd {
            MediaCommands::List { pagination } => cli::media::list(&opts, &pagination).await,
            MediaCommands::Quota => cli::media::quota(&opts).await,
        },
        Commands::Favorite(FavoriteCommands::List { pagination }) => {
            cli::favorite::list(&opts, &pagination).await
        }
        Commands::Bank(BankCommands::List { pagination }) => {
            cli::bank::list(&opts, &pagination).await
        }
        Commands::Tag(cmd) => match cmd {
            TagCommands::List => cli::tag::list(&opts).await,
            TagCommands::Create { name } => cli::tag::create(&opts, &name).await,
        },
        Commands::Category(CategoryCommands::List) => cli::category::list(&opts).await,
        Commands::Cache(cmd) => match cmd {
            CacheCommands::Status => cli::cache::status(),
            CacheCommands::Clear => cli::cache::clear(),
            CacheCommands::Path => cli::cache::path(),
        },
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "courseop", &mut std::io::stdout());
            Ok(())
        }
    }
}
