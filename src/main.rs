use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use furniture_ner::annotation::{build_datasets, read_training_data, Annotator, TermTally};
use furniture_ner::config::constants::{
    DEFAULT_ASSETS_DIR, EXTRA_CURRENCY_CODE, FURNITURE_LABEL, REQUEST_TIMEOUT_SECS,
};
use furniture_ner::config::AssetPaths;
use furniture_ner::engine::default_concurrency;
use furniture_ner::ops::{init_tracing, init_tracing_pretty, TrainingJob};
use furniture_ner::persistence::{load_currency_codes, load_seed_urls, load_word_list};
use furniture_ner::{ExtractionPipeline, PipelineConfig, TextCleaner};

/// Furniture NER data pipeline
#[derive(Parser, Debug)]
#[command(name = "furniture-ner")]
#[command(version)]
#[command(about = "Crawl furniture stores and build entity-recognition training data", long_about = None)]
struct Cli {
    /// Directory holding word lists, seed URLs and generated data
    #[arg(long, global = true, env = "FURNITURE_NER_ASSETS", default_value = DEFAULT_ASSETS_DIR)]
    assets: PathBuf,

    /// Maximum concurrent requests per phase (defaults to available parallelism)
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Human-readable logs instead of JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract cleaned page text for a set of seed URLs
    Extract(ExtractArgs),

    /// Create annotated training and evaluation data
    BuildData,

    /// Convert previously built data and train the entity-recognition model
    Train(TrainArgs),

    /// Print the furniture term table for previously built data
    Report,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Seed URL; repeatable. Falls back to the seed CSV when omitted
    #[arg(long = "url")]
    urls: Vec<String>,

    /// Seed CSV rows to skip
    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Seed CSV rows to take
    #[arg(long)]
    take: Option<usize>,

    /// Report file, one `url: text` line per page
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TrainArgs {
    /// Python interpreter with spaCy installed
    #[arg(long, default_value = "python3")]
    python: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.pretty {
        init_tracing_pretty();
    } else {
        init_tracing();
    }

    let paths = AssetPaths::new(&cli.assets);
    let config = PipelineConfig {
        concurrency: cli.concurrency.unwrap_or_else(default_concurrency),
        request_timeout: Duration::from_secs(cli.timeout_secs),
    };

    match cli.command {
        Commands::Extract(args) => extract(&paths, config, args).await,
        Commands::BuildData => build_data(&paths, config).await,
        Commands::Train(args) => {
            TrainingJob::from_assets(&paths).with_python(args.python).run().await?;
            Ok(())
        }
        Commands::Report => report(&paths),
    }
}

async fn extract(paths: &AssetPaths, config: PipelineConfig, args: ExtractArgs) -> Result<()> {
    let pipeline = ExtractionPipeline::new(load_cleaner(paths)?, config)?;

    let seeds = if args.urls.is_empty() {
        let urls = load_seed_urls(&paths.seed_urls())?;
        let take = args.take.unwrap_or(usize::MAX);
        urls.into_iter().skip(args.skip).take(take).collect()
    } else {
        args.urls
    };

    let data = pipeline.extract_website_data(&seeds, args.output.as_deref()).await?;

    if data.is_empty() {
        warn!("Data could not be retrieved");
    }
    println!("Extracted text from {} page(s)", data.len());
    Ok(())
}

async fn build_data(paths: &AssetPaths, config: PipelineConfig) -> Result<()> {
    let pipeline = ExtractionPipeline::new(load_cleaner(paths)?, config)?;
    let furniture_names = load_word_list(&paths.furniture_names())?;
    let annotator = Annotator::new(&furniture_names, FURNITURE_LABEL)?;
    let urls = load_seed_urls(&paths.seed_urls())?;

    info!(terms = annotator.term_count(), seeds = urls.len(), "Building datasets");
    let summary = build_datasets(&pipeline, &annotator, &urls, paths).await?;

    print_tally(&summary.tally());
    Ok(())
}

fn report(paths: &AssetPaths) -> Result<()> {
    let mut examples = Vec::new();
    for path in [paths.training_data(), paths.evaluation_data()] {
        let loaded = read_training_data(&path)
            .with_context(|| format!("reading training data from {}", path.display()))?;
        examples.extend(loaded);
    }

    print_tally(&TermTally::from_examples(&examples));
    Ok(())
}

fn print_tally(tally: &TermTally) {
    match tally.top() {
        Some((term, count)) => {
            println!(
                "\n{}\n",
                format!("{} has the maximum number of occurrences which is {}", term, count).to_uppercase()
            );
            println!("{}", tally.render_grid());
        }
        None => println!("No furniture terms found in the extracted pages"),
    }
}

fn load_cleaner(paths: &AssetPaths) -> Result<TextCleaner> {
    let stop_words = load_word_list(&paths.stop_words())?;
    let mut currency_codes: HashSet<String> = load_currency_codes(&paths.currency_codes())?;
    currency_codes.insert(EXTRA_CURRENCY_CODE.to_string());
    Ok(TextCleaner::new(stop_words, currency_codes))
}
