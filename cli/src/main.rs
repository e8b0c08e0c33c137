//! nbreport CLI - merge notebooks into one HTML report

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use nbreport::{BaseTemplate, ReportBuilder};

#[derive(Parser)]
#[command(name = "nbreport")]
#[command(version)]
#[command(
    about = "Merge notebooks into a single HTML report (no code shown)",
    long_about = None
)]
struct Cli {
    /// Input .ipynb files in the desired order
    #[arg(value_name = "NOTEBOOK", required = true)]
    notebooks: Vec<PathBuf>,

    /// Output HTML path
    #[arg(short, long, value_name = "FILE", default_value = nbreport::report::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Report title
    #[arg(long, default_value = nbreport::report::DEFAULT_TITLE)]
    title: String,

    /// Author name
    #[arg(long, default_value = "")]
    author: String,

    /// Date string (default: today)
    #[arg(long, default_value = "")]
    date: String,

    /// Do not insert per-notebook section headers
    #[arg(long)]
    no_section_headers: bool,

    /// Extra CSS file to embed if present
    #[arg(long, value_name = "FILE", default_value = nbreport::report::DEFAULT_STYLES)]
    styles: PathBuf,

    /// Built-in base layout
    #[arg(long, value_enum, default_value = "classic")]
    base_template: TemplateChoice,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TemplateChoice {
    /// Classic Notebook layout
    Classic,
    /// JupyterLab layout
    Lab,
}

impl From<TemplateChoice> for BaseTemplate {
    fn from(choice: TemplateChoice) -> Self {
        match choice {
            TemplateChoice::Classic => BaseTemplate::Classic,
            TemplateChoice::Lab => BaseTemplate::Lab,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(path) => println!("{} {}", "Wrote".green(), path.display()),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = build_report(cli, &pb);
    pb.finish_and_clear();
    result
}

fn build_report(cli: &Cli, pb: &ProgressBar) -> Result<PathBuf, Box<dyn std::error::Error>> {
    pb.set_message(format!("Merging {} notebooks...", cli.notebooks.len()));
    let report = ReportBuilder::new()
        .title(cli.title.as_str())
        .author(cli.author.as_str())
        .date(cli.date.as_str())
        .section_headers(!cli.no_section_headers)
        .styles(cli.styles.as_path())
        .base_template(cli.base_template.into())
        .build(&cli.notebooks)?;
    log::info!("Merged {} cells", report.notebook().cell_count());

    pb.set_message("Rendering HTML...");
    let written = report.write(&cli.output)?;
    Ok(written)
}
