//! Login and logout command implementations

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AuthApi;
use crate::client::models::LoginRequest;
use crate::config::PersistedSession;
use crate::error::Result;
use crate::guard::LOGIN_PATH;

/// Run the login command
pub async fn run(opts: &GlobalOptions, username: Option<String>) -> Result<()> {
    let mut ctx = CommandContext::new(opts, LOGIN_PATH).await?;

    println!("{}", "Welcome to CourseOp!".bold().green());
    println!("Sign in to {}\n", ctx.config.api_base());

    let username = match username {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()?,
    };

    let password: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;

    // The platform requires a captcha answer alongside credentials
    let captcha = ctx.client.captcha().await?;
    let captcha_code: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Captcha ({})", captcha.question))
        .interact_text()?;

    println!("\n{}", "Signing in...".cyan());
    let session = ctx
        .session
        .login(&LoginRequest {
            username,
            password,
            captcha_id: captcha.id,
            captcha_code,
        })
        .await?;

    // Persist for later invocations
    if let Some(tokens) = ctx.session.tokens().await {
        ctx.config.session = Some(PersistedSession::from_parts(&tokens, &session.user));
        ctx.save_config()?;
    }

    println!("{}", "✓ Signed in!".green());
    println!("  User:  {}", session.user.username.bold());
    if !session.user.roles.is_empty() {
        println!("  Roles: {}", session.user.roles.join(", "));
    }

    println!("\n{}", "Try running:".bold());
    println!("  {} - Show session status", "courseop status".cyan());
    println!("  {} - Browse the catalog", "courseop course list".cyan());

    Ok(())
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts, "/auth/logout").await?;

    if ctx.session.tokens().await.is_none() {
        println!("Not signed in.");
        return Ok(());
    }

    // Local sign-out happens regardless of what the server says
    ctx.session.logout().await?;
    ctx.config.clear_session();
    ctx.save_config()?;

    println!("{} Signed out.", "✓".green());
    Ok(())
}
