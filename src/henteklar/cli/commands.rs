//! # CLI Layer
//!
//! One client of the Henteklar API. This is the only place that knows about
//! terminal I/O, argument parsing and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap definitions in `setup.rs`
//! 2. **Context Setup**: logging, data directory, config, session rehydration
//! 3. **API Dispatch**: one `handle_*` per subcommand
//! 4. **Output Formatting**: `render.rs` turns `CmdResult` into text
//!
//! The roster lives in memory and resets with every process. One-shot
//! subcommands therefore only show a toggle's effect in their own output; the
//! `shell` subcommand keeps one roster alive across many commands.

use super::render::{
    describe_error, print_messages, render_check_in_out, render_config, render_contact_actions,
    render_counts, render_dashboard, render_event, render_profile, render_user,
};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use henteklar::api::{ConfigAction, HenteklarApi, HenteklarPaths, RosterFilter, StatusFilter};
use henteklar::config::HenteklarConfig;
use henteklar::error::{HenteklarError, Result};
use henteklar::i18n::Translator;
use henteklar::session::{DemoAuthenticator, FileKvStore};
use henteklar::store::memory::InMemoryStore;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub(super) type Api = HenteklarApi<InMemoryStore, FileKvStore, DemoAuthenticator>;

pub(super) struct AppContext {
    pub api: Api,
}

/// Runs one invocation. A failure comes back as the line to show the user,
/// already in the configured language.
pub fn run() -> std::result::Result<(), String> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli).map_err(|e| error_line(&e, &Translator::default()))?;
    dispatch(&mut ctx, cli.command).map_err(|e| error_line(&e, ctx.api.translator()))
}

fn error_line(err: &HenteklarError, t: &Translator) -> String {
    format!("{}: {}", t.t("error"), describe_error(err, t))
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Login { email, password }) => handle_login(ctx, &email, &password),
        Some(Commands::Logout) => handle_logout(ctx),
        Some(Commands::Whoami) => handle_whoami(ctx),
        Some(Commands::List { status, search }) => handle_list(ctx, status, search),
        Some(Commands::Summary) => handle_summary(ctx),
        Some(Commands::Show { id }) => handle_show(ctx, &id),
        Some(Commands::Toggle { id }) => handle_toggle(ctx, &id),
        Some(Commands::Primary { child, contact }) => handle_primary(ctx, &child, &contact),
        Some(Commands::Contacts { id }) => handle_contacts(ctx, &id),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        Some(Commands::Shell) => shell::run(ctx),
        None => handle_list(ctx, StatusFilter::All, None),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "henteklar=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    ProjectDirs::from("no", "henteklar", "henteklar")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HenteklarError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    debug!(path = %data_dir.display(), "using data directory");

    let config = match HenteklarConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "could not load config, using defaults");
            HenteklarConfig::default()
        }
    };

    let slot = FileKvStore::new(&data_dir);
    let authenticator = DemoAuthenticator::new(config.login_delay());
    let mut api = HenteklarApi::new(
        InMemoryStore::seeded(),
        slot,
        authenticator,
        HenteklarPaths::new(data_dir),
    )
    .with_locale(config.language);
    api.rehydrate();

    Ok(AppContext { api })
}

pub(super) fn handle_login(ctx: &mut AppContext, email: &str, password: &str) -> Result<()> {
    let t = *ctx.api.translator();
    println!("{}", t.t("loginPage.loggingIn").dimmed());
    let result = ctx.api.login(email, password)?;
    print!("{}", render_user(result.user.as_ref(), &t));
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.logout();
    println!("{}", ctx.api.translator().t("loginPage.loggedOut"));
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.whoami();
    print!("{}", render_user(result.user.as_ref(), ctx.api.translator()));
    Ok(())
}

pub(super) fn handle_list(
    ctx: &AppContext,
    status: StatusFilter,
    search: Option<String>,
) -> Result<()> {
    let filter = RosterFilter {
        status,
        query: search,
    };
    let result = ctx.api.list_children(&filter)?;
    let counts = result.counts.unwrap_or_default();
    print!(
        "{}",
        render_check_in_out(&result.listed_children, &counts, &filter, ctx.api.translator())
    );
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_children(&RosterFilter::default())?;
    let counts = result.counts.unwrap_or_default();
    print!(
        "{}",
        render_dashboard(&counts, &result.listed_children, ctx.api.translator())
    );
    Ok(())
}

pub(super) fn handle_summary(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.summary()?;
    if let Some(counts) = &result.counts {
        print!("{}", render_counts(counts, ctx.api.translator()));
    }
    Ok(())
}

pub(super) fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.child_profile(id)?;
    for child in &result.listed_children {
        print!("{}", render_profile(child, ctx.api.translator()));
    }
    Ok(())
}

pub(super) fn handle_toggle(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.toggle_attendance(id)?;
    if let Some(event) = &result.event {
        println!("{}", render_event(event, ctx.api.translator()));
    }
    Ok(())
}

pub(super) fn handle_primary(ctx: &mut AppContext, child: &str, contact: &str) -> Result<()> {
    let result = ctx.api.set_primary_contact(child, contact)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_contacts(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.contact_actions(id)?;
    print!(
        "{}",
        render_contact_actions(&result.contact_actions, ctx.api.translator())
    );
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
