//! MongoDB persistence for the raw ETH/USD quote.

use anyhow::{Context, Result};
use mongodb::bson::doc;
use mongodb::Client;

use crate::quote::RawQuote;

/// Collection receiving raw ETH/USD snapshots.
pub const QUOTE_COLLECTION: &str = "eth_raw";

/// Connect to the configured deployment and verify it answers.
///
/// The driver connects lazily, so a `ping` forces the dial here: an
/// unreachable endpoint fails at the connect step rather than at the first
/// insert.
pub async fn connect(uri: &str) -> Result<Client> {
    let client = Client::with_uri_str(uri)
        .await
        .context("Failed to parse the MongoDB connection string")?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .context("Failed to connect to MongoDB")?;

    Ok(client)
}

/// Insert one copy of the record; `_id` is assigned by the database.
pub async fn insert_quote(client: &Client, db_name: &str, quote: &RawQuote) -> Result<()> {
    let quotes = client
        .database(db_name)
        .collection::<RawQuote>(QUOTE_COLLECTION);

    quotes
        .insert_one(quote, None)
        .await
        .context("Failed to insert the raw ETH/USD quote")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::quote::RawQuote;
    use mongodb::bson;

    #[test]
    fn raw_quote_encodes_with_external_keys() {
        let quote = RawQuote {
            from_symbol: "ETH".into(),
            to_symbol: "USD".into(),
            price: 1800.5,
            last_update: 1712345678,
            ..Default::default()
        };

        let doc = bson::to_document(&quote).unwrap();
        assert_eq!(doc.get_str("FROMSYMBOL").unwrap(), "ETH");
        assert_eq!(doc.get_str("TOSYMBOL").unwrap(), "USD");
        assert_eq!(doc.get_f64("PRICE").unwrap(), 1800.5);
        assert_eq!(doc.get_i64("LASTUPDATE").unwrap(), 1712345678);

        // Zero-valued fields are still materialized in the document.
        assert_eq!(doc.get_f64("MKTCAP").unwrap(), 0.0);
        assert_eq!(doc.get_str("LASTMARKET").unwrap(), "");
    }
}
