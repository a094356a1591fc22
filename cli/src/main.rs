use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use org2todo_core::{parse_reference, time, Config, FileOutlineRepository, TaskService};

#[derive(Parser)]
#[command(name = "org2todo")]
#[command(about = "Turn org outlines into a ranked todo.txt list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ~/.org2todo/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the ranked task list, one todo.txt line per task (default)
    List {
        /// Outline files; replaces the configured agenda files
        files: Vec<PathBuf>,
    },
    /// Print the ranked tasks with every resolved date as JSON
    Export {
        /// Outline files; replaces the configured agenda files
        files: Vec<PathBuf>,
    },
    /// Write a default config file
    Init,
}

#[derive(clap::Args, Default)]
struct SourceArgs {
    /// Directory relative outline paths resolve against
    #[arg(long, global = true)]
    base: Option<PathBuf>,

    /// Reference instant (now, today, tomorrow, +3d, 2025-01-01, "2025-01-01 09:00")
    #[arg(long, global = true)]
    now: Option<String>,

    /// Outline files; replaces the configured agenda files
    files: Vec<PathBuf>,
}

impl SourceArgs {
    /// Files named after a subcommand take the place of any given before it.
    fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        if !files.is_empty() {
            self.files = files;
        }
        self
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => init(cli.config),
        Some(Commands::Export { files }) => {
            let (service, now) = prepare(cli.config, cli.source.with_files(files))?;
            let tasks = service.export(now)?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
            Ok(())
        }
        Some(Commands::List { files }) => list(cli.config, cli.source.with_files(files)),
        None => list(cli.config, cli.source),
    }
}

fn list(config_path: Option<PathBuf>, args: SourceArgs) -> Result<()> {
    let (service, now) = prepare(config_path, args)?;
    for line in service.render_lines(now)? {
        println!("{}", line);
    }
    Ok(())
}

fn prepare(
    config_path: Option<PathBuf>,
    args: SourceArgs,
) -> Result<(TaskService<FileOutlineRepository>, chrono::NaiveDateTime)> {
    let mut config = Config::load_or_default(config_path.as_deref())?;
    if let Some(base) = args.base {
        config.base = base;
    }
    if !args.files.is_empty() {
        config.agenda_files = args.files;
    }
    if config.agenda_files.is_empty() {
        tracing::warn!("no outline files configured");
    }

    let now = match args.now.as_deref() {
        Some(when) => parse_reference(when)?,
        None => time::now(),
    };

    let repo = FileOutlineRepository::from_config(&config);
    Ok((TaskService::new(repo, config), now))
}

fn init(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => Config::default_path()?,
    };
    if path.exists() {
        return Err(anyhow!("Config file {} already exists", path.display()));
    }
    Config::default().save(&path)?;
    println!("Config written to {}", path.display());
    Ok(())
}
