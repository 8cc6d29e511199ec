use anyhow::Result;
use axum::Router;
use clap::Parser;
use cinerank_core::VectorizerOptions;
use server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Movie catalog (.csv, .json or .jsonl)
    #[arg(long, default_value = "./tmdb_5000_movies.csv")]
    catalog: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
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

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let options = VectorizerOptions { stem: args.stem, sublinear_tf: args.sublinear_tf, smooth_idf: !args.no_smooth_idf };
    let app: Router = build_app(&args.catalog, options)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
