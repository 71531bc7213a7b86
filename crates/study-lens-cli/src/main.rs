use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use study_lens_config::{Config, RenderConfig};
use study_lens_engine::{Analysis, StudyListResponse, Summary, io, render};
use std::path::{Path, PathBuf};

mod browse;

#[derive(Parser)]
#[command(name = "study-lens")]
#[command(about = "Read generated study analyses as structured documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the parsed outline of an analysis
    Dump {
        /// Summary record (JSON), or analysis text with --raw
        input: PathBuf,
        /// Treat the input as analysis text rather than a summary record
        #[arg(long)]
        raw: bool,
        /// Print the parsed tree as JSON
        #[arg(long)]
        json: bool,
        /// Study record (JSON) to show above the analysis
        #[arg(long)]
        study: Option<PathBuf>,
    },
    /// Render an analysis as collapsible HTML
    Html {
        input: PathBuf,
        #[arg(long)]
        raw: bool,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a claim-validation record
    Verdict { input: PathBuf },
    /// List summary records in a directory (defaults to the configured one)
    List {
        dir: Option<PathBuf>,
        /// Study catalogue (JSON) used to title each summary
        #[arg(long)]
        studies: Option<PathBuf>,
    },
    /// Browse an analysis in the terminal with collapsible sections
    Browse {
        input: PathBuf,
        #[arg(long)]
        raw: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a new configuration file
    Init {
        /// Directory holding summary records
        summaries_path: PathBuf,
        /// Study catalogue (JSON)
        #[arg(long)]
        studies: Option<PathBuf>,
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Print where the configuration file lives
    Path,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config();
    let render_config = config
        .as_ref()
        .map(|c| c.render.clone())
        .unwrap_or_default();

    match cli.command {
        Command::Dump {
            input,
            raw,
            json,
            study,
        } => {
            let analysis = load_analysis(&input, raw)?;
            let study = study.map(|path| io::read_study(&path)).transpose()?;
            if json {
                let out = match &study {
                    Some(study) => serde_json::json!({ "study": study, "analysis": analysis }),
                    None => serde_json::to_value(&analysis)?,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                if let Some(study) = &study {
                    for line in render::study_lines(study) {
                        println!("{line}");
                    }
                    println!();
                }
                println!("{}", render::to_outline(&analysis));
            }
        }
        Command::Html { input, raw, output } => {
            let analysis = load_analysis(&input, raw)?;
            let html = render::to_html(&analysis, &html_options(&render_config));
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("Created {}", path.display());
                }
                None => print!("{html}"),
            }
        }
        Command::Verdict { input } => {
            let claim = io::read_claim(&input)?;
            for line in render::verdict_lines(&claim) {
                println!("{line}");
            }
        }
        Command::List { dir, studies } => {
            let dir = match (dir, &config) {
                (Some(dir), _) => dir,
                (None, Some(config)) => config.summaries_path.clone(),
                (None, None) => anyhow::bail!(
                    "No directory given and no config file found at {}",
                    Config::config_path().display()
                ),
            };
            let studies =
                studies.or_else(|| config.as_ref().and_then(|c| c.studies_path.clone()));
            let catalogue = studies.and_then(|path| load_catalogue(&path));
            list_summaries(&dir, catalogue.as_ref())?;
        }
        Command::Browse { input, raw } => {
            let analysis = load_analysis(&input, raw)?;
            browse::run(analysis, render_config.open_first_section)?;
        }
        Command::Config { action } => match action {
            ConfigAction::Init {
                summaries_path,
                studies,
                force,
            } => {
                let path = Config::config_path();
                init_config(&path, summaries_path, studies, force)?;
                log::info!("Created {}", path.display());
            }
            ConfigAction::Path => println!("{}", Config::config_path().display()),
        },
    }

    Ok(())
}

/// A broken config file is reported and then ignored; commands fall back to defaults.
fn load_config() -> Option<Config> {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config: {e}");
            None
        }
    }
}

fn load_analysis(input: &Path, raw: bool) -> Result<Analysis> {
    if raw {
        let text = io::read_text(input)?;
        return Ok(Analysis::from_text(&text, None));
    }
    let summary = io::read_summary(input)?;
    Ok(Analysis::from_summary(&summary))
}

fn html_options(config: &RenderConfig) -> render::HtmlOptions {
    render::HtmlOptions {
        open_first_section: config.open_first_section,
        show_model: config.show_model,
    }
}

/// Writes a default-rendering config, refusing to replace an existing file unless forced.
fn init_config(
    path: &Path,
    summaries_path: PathBuf,
    studies_path: Option<PathBuf>,
    force: bool,
) -> Result<Config> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}, pass --force to overwrite",
            path.display()
        );
    }

    let config = Config {
        summaries_path,
        studies_path,
        render: RenderConfig::default(),
    };
    config
        .save_to_path(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(config)
}

/// A missing or broken catalogue only costs the titles, so it is reported and skipped.
fn load_catalogue(path: &Path) -> Option<StudyListResponse> {
    match io::read_study_list(path) {
        Ok(catalogue) => Some(catalogue),
        Err(e) => {
            log::warn!("Ignoring study catalogue: {e}");
            None
        }
    }
}

fn list_summaries(dir: &Path, catalogue: Option<&StudyListResponse>) -> Result<()> {
    for path in io::scan_summaries(dir)? {
        match io::read_summary(&path) {
            Ok(summary) => println!("{}", summary_line(&summary, catalogue)),
            Err(e) => log::warn!("Skipping {}: {e}", path.display()),
        }
    }
    Ok(())
}

fn summary_line(summary: &Summary, catalogue: Option<&StudyListResponse>) -> String {
    let analysis = Analysis::from_summary(summary);
    let sections: Vec<&str> = analysis
        .document
        .sections
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    let title = catalogue
        .and_then(|c| c.find(summary.study_id))
        .map_or("untitled study", |study| study.title.as_str());

    format!(
        "study {:>6}  {}  {}  [{}]",
        summary.study_id,
        title,
        summary.model_used.as_deref().unwrap_or("unknown model"),
        sections.join(", ")
    )
}
