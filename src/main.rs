use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evostats::config::{AnalysisConfig, ConfigManager};
use evostats::data::DatasetLoader;
use evostats::pipeline::Analysis;
use evostats::report::SummaryExporter;
use evostats::stats::ColumnAggregator;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evostats", version, about = "Summarise and compare evolutionary experiment runs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load every configured group, compare, and write the reports
    Run {
        /// TOML or JSON analysis configuration; defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Per-generation median and quartiles of one group
    Summarize {
        directory: PathBuf,
        /// Write CSV here instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rank-sum comparison of two groups at one generation
    Compare {
        baseline: PathBuf,
        treatment: PathBuf,
        #[arg(short, long, default_value_t = 100)]
        generation: usize,
    },
    /// Write the default configuration as TOML
    InitConfig { path: PathBuf },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run { config } => run(config),
        Command::Summarize { directory, output } => summarize(directory, output),
        Command::Compare {
            baseline,
            treatment,
            generation,
        } => compare(baseline, treatment, generation),
        Command::InitConfig { path } => ConfigManager::new()
            .save_to_file(&path)
            .with_context(|| format!("writing {}", path.display())),
    }
}

fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            let manager = ConfigManager::new();
            manager
                .load_from_file(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            manager.get()?
        }
        None => AnalysisConfig::default(),
    };

    let outcome = Analysis::new(config)?.run().context("analysis failed")?;

    for group in &outcome.groups {
        let (runs, generations) = group.matrix.shape();
        println!("{}: {} runs x {} generations", group.group.label, runs, generations);
    }
    println!("{}", outcome.comparison.summary());
    for path in &outcome.written {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn summarize(directory: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let matrix = DatasetLoader::default()
        .load(&directory)
        .with_context(|| format!("loading {}", directory.display()))?;
    let stats = ColumnAggregator::column_statistics(&matrix)?;

    match output {
        Some(path) => SummaryExporter::write_csv(&stats, &path)?,
        None => {
            let mut df = SummaryExporter::to_frame(&stats)?;
            SummaryExporter::write_to(&mut df, std::io::stdout().lock())?;
        }
    }
    Ok(())
}

fn compare(baseline: PathBuf, treatment: PathBuf, generation: usize) -> Result<()> {
    let loader = DatasetLoader::default();
    let a = loader
        .load(&baseline)
        .with_context(|| format!("loading {}", baseline.display()))?;
    let b = loader
        .load(&treatment)
        .with_context(|| format!("loading {}", treatment.display()))?;

    let result = ColumnAggregator::compare_groups_at_column(&a, &b, generation)?;
    println!(
        "generation {}: U = {}, one-tailed p = {:.4e}, two-tailed p = {:.4e} [{}]",
        generation, result.statistic, result.one_tailed_p, result.p_value, result.bucket
    );
    Ok(())
}
