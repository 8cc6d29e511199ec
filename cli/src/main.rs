use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cinerank_core::catalog::load_catalog;
use cinerank_core::recommender::{clamp_count, DEFAULT_COUNT};
use cinerank_core::{Recommender, VectorizerOptions};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cinerank")]
#[command(about = "Content-based movie recommendations from synopsis and genres", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CatalogArgs {
    /// Movie catalog (.csv, .json or .jsonl)
    #[arg(long, default_value = "./tmdb_5000_movies.csv")]
    catalog: String,
    /// Stem terms before weighting
    #[arg(long, default_value_t = false)]
    stem: bool,
    /// Use tf = 1 + ln(count)
    #[arg(long, default_value_t = false)]
    sublinear_tf: bool,
    /// Use idf = ln(N/df) + 1 instead of the smoothed form
    #[arg(long, default_value_t = false)]
    no_smooth_idf: bool,
}

impl CatalogArgs {
    fn options(&self) -> VectorizerOptions {
        VectorizerOptions { stem: self.stem, sublinear_tf: self.sublinear_tf, smooth_idf: !self.no_smooth_idf }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        #[command(flatten)]
        args: CatalogArgs,
        /// Title to look up (case-insensitive)
        #[arg(long)]
        title: String,
        /// Number of recommendations, clamped to 1..=10
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        n: usize,
    },
    /// Print catalog and vocabulary sizes
    Stats {
        #[command(flatten)]
        args: CatalogArgs,
    },
}

fn main() -> Result<ExitCode> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend { args, title, n } => {
            let outcome = if title.trim().is_empty() {
                Outcome::BlankTitle
            } else {
                let recommender = load(&args)?;
                recommend(&recommender, &title, n)
            };
            match &outcome {
                Outcome::Listing(out) => print!("{out}"),
                other => eprintln!("{}", other.message()),
            }
            Ok(ExitCode::from(outcome.code()))
        }
        Commands::Stats { args } => {
            let recommender = load(&args)?;
            println!("items: {}", recommender.num_items());
            println!("terms: {}", recommender.num_terms());
            println!("duplicate titles: {}", recommender.corpus().titles.duplicates());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(args: &CatalogArgs) -> Result<Recommender> {
    let records = load_catalog(&args.catalog).with_context(|| format!("loading catalog {}", args.catalog))?;
    Recommender::build(records, args.options()).context("building recommender")
}

#[derive(Debug, PartialEq)]
enum Outcome {
    Listing(String),
    BlankTitle,
    NotFound,
}

impl Outcome {
    fn message(&self) -> &str {
        match self {
            Outcome::Listing(out) => out,
            Outcome::BlankTitle => "Please enter a movie title.",
            Outcome::NotFound => "Movie not found in database. Try another title.",
        }
    }

    fn code(&self) -> u8 {
        match self {
            Outcome::Listing(_) => 0,
            Outcome::NotFound => 1,
            Outcome::BlankTitle => 2,
        }
    }
}

fn recommend(recommender: &Recommender, title: &str, n: usize) -> Outcome {
    let recs = recommender.recommend(title, clamp_count(n));
    render(title, &recs).map_or(Outcome::NotFound, Outcome::Listing)
}

/// Numbered listing, or `None` when there is nothing to show.
fn render(title: &str, recs: &[String]) -> Option<String> {
    if recs.is_empty() {
        return None;
    }
    let mut out = format!("Recommendations for {title}:\n");
    for (i, r) in recs.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, r));
    }
    Some(out)
}
