//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use curriculum_core::export::{ExportProgress, ExportResult, export_site, verify_export};
use curriculum_core::{
    ContentMatrix, build_content, catalog, jsonld, pick_related_levels, related_courses,
    render, resolve_route, routes,
};
use curriculum_shared::{
    AppConfig, CurriculumError, QualificationKey, SubjectKey, init_config, load_config,
    load_config_from,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Curriculum — content matrix tooling for the tutoring site.
#[derive(Parser)]
#[command(
    name = "curriculum",
    version,
    about = "Inspect and export curriculum landing pages (qualification level × subject).",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Config file (defaults to ~/.curriculum/curriculum.toml).
    #[arg(long, global = true, env = "CURRICULUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Output format for `show`.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum ShowFormat {
    Json,
    Markdown,
    Jsonld,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// List qualification levels and the subjects they offer.
    Levels,

    /// List subjects and their course pages.
    Subjects,

    /// Print the content for one level/subject page.
    Show {
        /// Level key, e.g. gcse or a-level.
        level: String,

        /// Subject key, e.g. chemistry.
        subject: String,

        /// Output format.
        #[arg(short, long, default_value = "json")]
        format: ShowFormat,
    },

    /// Print the related levels picked for a page.
    Related {
        /// Level key.
        level: String,

        /// Subject key.
        subject: String,
    },

    /// Resolve a page path such as /curriculum/gcse/biology.
    Route {
        /// Site-relative page path.
        path: String,
    },

    /// Write the whole content matrix to disk.
    Export {
        /// Output directory (defaults to [export].output_dir).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check an export against its manifest hashes.
    Verify {
        /// Export directory (defaults to [export].output_dir).
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "curriculum=info",
        1 => "curriculum=debug",
        _ => "curriculum=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    match cli.command {
        Command::Levels => cmd_levels(),
        Command::Subjects => cmd_subjects(&config),
        Command::Show {
            level,
            subject,
            format,
        } => cmd_show(&config, &level, &subject, &format),
        Command::Related { level, subject } => cmd_related(&config, &level, &subject),
        Command::Route { path } => cmd_route(&config, &path),
        Command::Export { out } => cmd_export(&config, out),
        Command::Verify { dir } => cmd_verify(&config, dir),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

/// Resolve a page, turning routing failures into a "not found" report.
fn resolve(level: &str, subject: &str) -> Result<(QualificationKey, SubjectKey)> {
    resolve_route(level, subject).map_err(not_found)
}

fn not_found(e: CurriculumError) -> color_eyre::eyre::Report {
    if e.is_not_found() {
        eyre!("page not found: {e}")
    } else {
        e.into()
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_levels() -> Result<()> {
    for q in &catalog::QUALIFICATIONS {
        let subjects: Vec<&str> = catalog::subjects_for(q.key)
            .iter()
            .map(|s| catalog::subject(*s).label)
            .collect();
        println!("{:<8} {:<8} {}", q.key, q.label, q.badge);
        println!("         {}", subjects.join(", "));
    }
    Ok(())
}

fn cmd_subjects(config: &AppConfig) -> Result<()> {
    for s in &catalog::SUBJECTS {
        let levels: Vec<&str> = catalog::levels_offering(s.key)
            .into_iter()
            .map(|l| catalog::qualification(l).label)
            .collect();
        println!(
            "{:<18} {:<50} {}",
            s.key,
            config.site.absolute(s.course_url)?,
            levels.join(", ")
        );
    }
    Ok(())
}

fn cmd_show(config: &AppConfig, level: &str, subject: &str, format: &ShowFormat) -> Result<()> {
    let (level, subject) = resolve(level, subject)?;
    let entry = build_content(level, subject);
    info!(%level, %subject, "showing page");

    match format {
        ShowFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
        ShowFormat::Jsonld => {
            for value in jsonld::page_json_ld(&entry, &config.site)? {
                println!("{}", jsonld::to_script_tag(&value)?);
            }
        }
        ShowFormat::Markdown => {
            let prefix = &config.site.route_prefix;
            let related = related_courses(prefix, level, subject);
            let path = routes::page_path(prefix, level, subject);
            print!("{}", render::render_markdown(&entry, &related, &path));
        }
    }

    Ok(())
}

fn cmd_related(config: &AppConfig, level: &str, subject: &str) -> Result<()> {
    let (level, subject) = resolve(level, subject)?;
    let picked = pick_related_levels(level, subject);

    if picked.is_empty() {
        println!("no other level offers {subject}");
        return Ok(());
    }

    for related in picked {
        println!(
            "{:<8} {}",
            related,
            routes::page_path(&config.site.route_prefix, related, subject)
        );
    }
    Ok(())
}

fn cmd_route(config: &AppConfig, path: &str) -> Result<()> {
    let (level, subject) =
        routes::resolve_path(&config.site.route_prefix, path).map_err(not_found)?;
    let q = catalog::qualification(level);
    let s = catalog::subject(subject);
    println!("{level}/{subject}  {} {}", q.label, s.label);
    Ok(())
}

fn cmd_export(config: &AppConfig, out: Option<PathBuf>) -> Result<()> {
    let output_dir = out.unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
    let matrix = ContentMatrix::build();

    info!(output_dir = %output_dir.display(), entries = matrix.len(), "exporting site data");

    let reporter = CliProgress::new()?;
    let result = export_site(
        &matrix,
        &config.site,
        &config.export,
        &output_dir,
        env!("CARGO_PKG_VERSION"),
        &reporter,
    )?;

    println!();
    println!("  Site data exported!");
    println!("  Pages:  {}", result.entry_count);
    println!("  Files:  {}", result.files_written);
    println!("  Path:   {}", result.output_dir.display());
    println!("  Time:   {:.2}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_verify(config: &AppConfig, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
    let mismatched = verify_export(&dir)?;

    if mismatched.is_empty() {
        println!("Export at {} matches its manifest.", dir.display());
        return Ok(());
    }

    for path in &mismatched {
        println!("  changed or missing: {path}");
    }
    Err(eyre!(
        "{} file(s) in {} do not match the manifest",
        mismatched.len(),
        dir.display()
    ))
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif bar.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Result<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar })
    }
}

impl ExportProgress for CliProgress {
    fn start(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn entry_written(&self, path: &str, current: usize, _total: usize) {
        self.bar.set_position(current as u64);
        self.bar.set_message(path.to_string());
    }

    fn done(&self, _result: &ExportResult) {
        self.bar.finish_and_clear();
    }
}
