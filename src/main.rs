//! One-shot ingest run: read settings, connect to MongoDB, fetch the price
//! snapshot, decode it, insert the raw ETH/USD record. The first failing
//! step aborts the run with its context and the underlying cause on stderr.

use tracing::debug;

use crate::config::Settings;
use crate::utils::logging::init_logging;

mod config;
mod fetch;
mod quote;
mod store;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Opportunistic .env load; a missing file is fine.
    let _ = dotenvy::dotenv();
    init_logging();

    let settings = Settings::from_env();

    // The database is dialed before the fetch, matching the deployed
    // behavior: a failing run probes MongoDB first, then the API.
    let mongo = store::connect(&settings.mongo_url).await?;
    debug!("connected to MongoDB");

    let body = fetch::fetch_snapshot(&settings.api_url).await?;
    debug!(bytes = body.len(), "fetched price snapshot");

    let snapshot = quote::parse_snapshot(&body)?;

    store::insert_quote(&mongo, &settings.mongo_db, &snapshot.raw.eth.usd).await?;
    debug!(
        collection = store::QUOTE_COLLECTION,
        "inserted raw ETH/USD quote"
    );

    Ok(())
}
