//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod bank;
pub mod cache;
pub mod category;
pub mod context;
pub mod course;
pub mod favorite;
pub mod handlers;
pub mod login;
pub mod media;
pub mod order;
pub mod permission;
pub mod role;
pub mod status;
pub mod tag;
pub mod user;
pub mod whoami;

pub use args::{GlobalOptions, OutputFormat, PaginationArgs, SortDir};
pub use context::CommandContext;

/// CourseOp CLI - companion for the CourseHub learning platform
#[derive(Parser, Debug)]
#[command(name = "courseop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "COURSEOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "COURSEOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override API host
    #[arg(long, global = true, env = "COURSEOP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "COURSEOP_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from API
    #[arg(long, global = true, env = "COURSEOP_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to CourseHub
    Login {
        /// Username (prompted when omitted)
        username: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show authentication and configuration status
    Status,

    /// Show the signed-in user
    Whoami,

    /// Display version information
    Version,

    /// Browse the course catalog
    #[command(subcommand)]
    Course(CourseCommands),

    /// View course purchase orders
    #[command(subcommand)]
    Order(OrderCommands),

    /// Manage platform user accounts
    #[command(subcommand)]
    User(UserCommands),

    /// List role definitions
    #[command(subcommand)]
    Role(RoleCommands),

    /// List the permission tree
    #[command(subcommand)]
    Permission(PermissionCommands),

    /// Browse media assets and storage quota
    #[command(subcommand)]
    Media(MediaCommands),

    /// List favorited courses
    #[command(subcommand)]
    Favorite(FavoriteCommands),

    /// List question banks
    #[command(subcommand)]
    Bank(BankCommands),

    /// Manage course tags
    #[command(subcommand)]
    Tag(TagCommands),

    /// List course categories
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Manage local response cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   courseop completion bash > /etc/bash_completion.d/courseop
  zsh:    courseop completion zsh > \"${fpath[1]}/_courseop\"
  fish:   courseop completion fish > ~/.config/fish/completions/courseop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    /// List courses
    List {
        #[command(flatten)]
        pagination: PaginationArgs,

        /// Fetch every page, not just the first
        #[arg(long)]
        all: bool,
    },

    /// Get course details
    Get {
        /// Course ID
        course_id: String,
    },

    /// List chapters of a course
    Chapters {
        /// Course ID
        course_id: String,
    },

    /// List sections of a chapter
    Sections {
        /// Chapter ID
        chapter_id: String,
    },
}

/// Order subcommands
#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// List course purchase orders
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// User account subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List platform user accounts
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Role subcommands
#[derive(Subcommand, Debug)]
pub enum RoleCommands {
    /// List role definitions
    List,
}

/// Permission subcommands
#[derive(Subcommand, Debug)]
pub enum PermissionCommands {
    /// List the permission tree
    List,
}

/// Media subcommands
#[derive(Subcommand, Debug)]
pub enum MediaCommands {
    /// List uploaded media assets
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show the media storage quota
    Quota,
}

/// Favorite subcommands
#[derive(Subcommand, Debug)]
pub enum FavoriteCommands {
    /// List favorited courses
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Question bank subcommands
#[derive(Subcommand, Debug)]
pub enum BankCommands {
    /// List question banks
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Tag subcommands
#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// List course tags
    List,

    /// Create a course tag
    Create {
        /// Tag name
        name: String,
    },
}

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List course categories
    List,
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,
    /// Clear all cached data
    Clear,
    /// Print cache directory path
    Path,
}
