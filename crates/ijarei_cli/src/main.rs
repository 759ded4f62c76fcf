//! `ijarei` command-line entry point.
//!
//! # Responsibility
//! - Expose route resolution, archive browsing and the admin session gate
//!   from `ijarei_core` on a terminal.
//! - Keep all decisions in the core crate; this binary only parses input
//!   and prints results.

use clap::{Args, Parser, Subcommand};
use ijarei_core::forms::account::AdminLoginForm;
use ijarei_core::{
    available_years, default_log_level, init_logging, now_epoch_ms, search_articles, AppContext,
    ArchiveBrowser, ArchiveState, MemoryStorage, Part, RouteDecision, SessionState, SiteConfig,
    SqliteStorage, Volume, YearFilter,
};
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type CliResult = Result<(), Box<dyn Error>>;

const DEFAULT_STORE_FILE: &str = "ijarei-storage.db";

#[derive(Parser, Debug)]
#[command(author, version, about = "IJAREI journal site tools", long_about = None)]
struct Cli {
    /// Write rotating log files into this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level used with --log-dir.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// SQLite file holding the admin session.
    #[arg(long, global = true, default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a site path against the stored admin session.
    Routes {
        path: String,
    },
    /// Load the mock archive and print the filtered volume tree.
    Archive(ArchiveArgs),
    /// Manage the admin session.
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

impl Command {
    /// Name for logs; arguments may carry credentials.
    fn name(&self) -> &'static str {
        match self {
            Self::Routes { .. } => "routes",
            Self::Archive(_) => "archive",
            Self::Admin { .. } => "admin",
        }
    }
}

#[derive(Args, Debug)]
struct ArchiveArgs {
    /// Case-insensitive title/author search.
    #[arg(long)]
    search: Option<String>,

    /// Volume year, or `all`.
    #[arg(long, default_value = "all")]
    year: YearFilter,

    /// Print issues, parts and articles under every volume.
    #[arg(long)]
    expand_all: bool,
}

#[derive(Subcommand, Debug)]
enum AdminAction {
    /// Start a 24 hour admin session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the admin session.
    Logout,
    /// Show whether the stored session is still valid.
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(&cli) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(cli: &Cli) -> CliResult {
    let Some(log_dir) = &cli.log_dir else {
        return Ok(());
    };
    let absolute = if log_dir.is_absolute() {
        log_dir.clone()
    } else {
        std::env::current_dir()?.join(log_dir)
    };
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, &absolute.to_string_lossy())?;
    Ok(())
}

async fn run(cli: Cli) -> CliResult {
    let config = SiteConfig::from_env()?;
    info!("event=cli_start module=cli command={}", cli.command.name());

    match cli.command {
        Command::Routes { path } => run_routes(config, &cli.store, &path),
        Command::Archive(args) => run_archive(config, args).await,
        Command::Admin { action } => run_admin(config, &cli.store, action),
    }
}

fn open_context(
    config: SiteConfig,
    store: &Path,
) -> Result<AppContext<SqliteStorage>, Box<dyn Error>> {
    let storage = SqliteStorage::open(store)?;
    Ok(AppContext::new(config, storage))
}

fn run_routes(config: SiteConfig, store: &Path, path: &str) -> CliResult {
    let mut context = open_context(config, store)?;
    match context.navigate(path, now_epoch_ms())? {
        RouteDecision::Public { page, with_shell } => {
            let shell = if with_shell { "with shell" } else { "standalone" };
            let form = if page.has_form() { ", form" } else { "" };
            println!("{path} -> {} ({shell}{form})", page.title());
        }
        RouteDecision::Admin(page) => println!("{path} -> admin: {}", page.title()),
        RouteDecision::Redirect { to } => println!("{path} -> redirect {to}"),
        RouteDecision::NotFound => println!("{path} -> 404 Page Not Found"),
    }
    Ok(())
}

async fn run_archive(config: SiteConfig, args: ArchiveArgs) -> CliResult {
    let context = AppContext::new(config, MemoryStorage::new());
    let mut browser = context.archive_browser();
    browser.load().await?;

    if let Some(term) = &args.search {
        browser.set_search_term(term.as_str());
    }
    browser.set_selected_year(args.year);

    let state = browser.state();
    let years = available_years(&state.volumes)
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>();
    println!("Years: all, {}", years.join(", "));

    if state.filtered_volumes.is_empty() {
        if state.has_active_filters() {
            println!("No articles match the current filters.");
        } else {
            println!("No volumes published yet.");
        }
        return Ok(());
    }

    print_tree(&browser, args.expand_all);
    Ok(())
}

fn print_tree(browser: &ArchiveBrowser, expand_all: bool) {
    let state = browser.state();
    for volume in &state.filtered_volumes {
        println!("Volume {} ({})", volume.volume_number, volume.year);
        if !expand_all {
            continue;
        }
        for issue in &volume.issues {
            println!(
                "  Issue {} - published {}",
                issue.issue_number, issue.published_date
            );
            for part in &issue.parts {
                println!("    {}: {}", part.name, part.description);
                for line in article_lines(state, volume, issue.issue_number, part) {
                    println!("      {line}");
                }
            }
        }
    }
}

fn article_lines(
    state: &ArchiveState,
    volume: &Volume,
    issue_number: u32,
    part: &Part,
) -> Vec<String> {
    let visible = if state.search_term.trim().is_empty() {
        state.all_articles.iter().collect::<Vec<_>>()
    } else {
        search_articles(&state.all_articles, &state.search_term)
    };

    visible
        .into_iter()
        .filter(|article| {
            article.volume_number == volume.volume_number
                && article.issue_number == issue_number
                && article.part_name == part.name
        })
        .map(|article| {
            format!(
                "{} - {} [{}]",
                article.article.title,
                article.article.authors.join(", "),
                article.article.id
            )
        })
        .collect()
}

fn run_admin(config: SiteConfig, store: &Path, action: AdminAction) -> CliResult {
    let mut context = open_context(config, store)?;
    let now = now_epoch_ms();

    match action {
        AdminAction::Login { email, password } => {
            let session = context
                .session()
                .login(&AdminLoginForm::new(email, password), now)?;
            println!(
                "Logged in; session valid for {} minutes.",
                session.remaining_ms(now) / 60_000
            );
        }
        AdminAction::Logout => {
            context.session().logout()?;
            println!("Logged out.");
        }
        AdminAction::Status => match context.session().load(now)? {
            SessionState::Authenticated(session) => println!(
                "Authenticated; {} minutes remaining.",
                session.remaining_ms(now) / 60_000
            ),
            SessionState::Expired => println!("Session expired; please log in again."),
            SessionState::Unauthenticated => println!("Not logged in."),
        },
    }
    Ok(())
}
