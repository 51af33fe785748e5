//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "CourseOp Configuration Status".bold());

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let config_path = Config::resolve_path(opts.config_ref())?;
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!("API host: {}", config.api_base().cyan());
            println!();

            match &config.session {
                Some(session) => {
                    println!(
                        "{} Signed in as {}",
                        "✓".green(),
                        session.user.username.bold()
                    );
                    if !session.user.roles.is_empty() {
                        println!("  Roles: {}", session.user.roles.join(", "));
                    }

                    if config.is_session_expired() {
                        println!(
                            "{} Session expired (will refresh on next command)",
                            "⚠".yellow()
                        );
                    } else {
                        let remaining = session
                            .expires_at
                            .signed_duration_since(chrono::Utc::now());
                        let hours = remaining.num_hours();
                        let mins = remaining.num_minutes() % 60;
                        println!(
                            "{} Session valid (expires in {}h {}m)",
                            "✓".green(),
                            hours,
                            mins
                        );
                    }
                }
                None => {
                    println!("{} Not signed in", "○".dimmed());
                    println!("  → Run 'courseop login' to sign in");
                }
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to sign in and create one.",
                "courseop login".cyan()
            );
            println!();
        }
    }

    Ok(())
}
