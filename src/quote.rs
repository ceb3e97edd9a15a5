//! Fixed schema for the CryptoCompare `pricemultifull` response.
//!
//! The API answers with two parallel sections: `RAW` carries numeric values,
//! `DISPLAY` carries the same fields pre-formatted as strings. Both sections
//! nest coin symbol (ETH, BTC) over fiat code (USD, EUR, GBP, CNY, JPY).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Numeric snapshot of one coin's trading state in one quote currency.
///
/// Decoding is lenient by design: unknown keys are ignored and missing keys
/// fall back to the zero value, so a payload without the expected subtree
/// still yields a (zero-valued) record. A string where a number is expected
/// is a hard error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawQuote {
    #[serde(rename = "TYPE")]
    pub kind: String,
    #[serde(rename = "MARKET")]
    pub market: String,
    #[serde(rename = "FROMSYMBOL")]
    pub from_symbol: String,
    #[serde(rename = "TOSYMBOL")]
    pub to_symbol: String,
    #[serde(rename = "FLAGS")]
    pub flags: String,
    #[serde(rename = "PRICE")]
    pub price: f32,
    // Unix seconds, the only integer field in the payload
    #[serde(rename = "LASTUPDATE")]
    pub last_update: i64,
    #[serde(rename = "LASTVOLUME")]
    pub last_volume: f32,
    #[serde(rename = "LASTVOLUMETO")]
    pub last_volume_to: f32,
    #[serde(rename = "LASTTRADEID")]
    pub last_trade_id: f32,
    #[serde(rename = "VOLUME24HOUR")]
    pub volume_24_hour: f32,
    #[serde(rename = "VOLUME24HOURTO")]
    pub volume_24_hour_to: f32,
    #[serde(rename = "OPEN24HOUR")]
    pub open_24_hour: f32,
    #[serde(rename = "HIGH24HOUR")]
    pub high_24_hour: f32,
    #[serde(rename = "LOW24HOUR")]
    pub low_24_hour: f32,
    #[serde(rename = "LASTMARKET")]
    pub last_market: String,
    #[serde(rename = "CHANGE24HOUR")]
    pub change_24_hour: f32,
    #[serde(rename = "CHANGEPCT24HOUR")]
    pub change_pct_24_hour: f32,
    #[serde(rename = "SUPPLY")]
    pub supply: f32,
    #[serde(rename = "MKTCAP")]
    pub market_cap: f32,
}

/// The same snapshot with values pre-formatted by the API for display.
///
/// Everything is a string except the trade id, which the API leaves numeric
/// even in this section. Decoded alongside the raw section but never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayQuote {
    #[serde(rename = "FROMSYMBOL")]
    pub from_symbol: String,
    #[serde(rename = "TOSYMBOL")]
    pub to_symbol: String,
    #[serde(rename = "MARKET")]
    pub market: String,
    #[serde(rename = "PRICE")]
    pub price: String,
    #[serde(rename = "LASTUPDATE")]
    pub last_update: String,
    #[serde(rename = "LASTVOLUME")]
    pub last_volume: String,
    #[serde(rename = "LASTVOLUMETO")]
    pub last_volume_to: String,
    #[serde(rename = "LASTTRADEID")]
    pub last_trade_id: f32,
    #[serde(rename = "VOLUME24HOUR")]
    pub volume_24_hour: String,
    #[serde(rename = "VOLUME24HOURTO")]
    pub volume_24_hour_to: String,
    #[serde(rename = "OPEN24HOUR")]
    pub open_24_hour: String,
    #[serde(rename = "HIGH24HOUR")]
    pub high_24_hour: String,
    #[serde(rename = "LOW24HOUR")]
    pub low_24_hour: String,
    #[serde(rename = "LASTMARKET")]
    pub last_market: String,
    #[serde(rename = "CHANGE24HOUR")]
    pub change_24_hour: String,
    #[serde(rename = "CHANGEPCT24HOUR")]
    pub change_pct_24_hour: String,
    #[serde(rename = "SUPPLY")]
    pub supply: String,
    #[serde(rename = "MKTCAP")]
    pub market_cap: String,
}

/// One quote per fiat code for a single coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct CurrencyGroup<T> {
    #[serde(rename = "USD")]
    pub usd: T,
    #[serde(rename = "EUR")]
    pub eur: T,
    #[serde(rename = "GBP")]
    pub gbp: T,
    #[serde(rename = "CNY")]
    pub cny: T,
    #[serde(rename = "JPY")]
    pub jpy: T,
}

/// One currency group per tracked coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct CoinGroup<T> {
    #[serde(rename = "ETH")]
    pub eth: CurrencyGroup<T>,
    #[serde(rename = "BTC")]
    pub btc: CurrencyGroup<T>,
}

/// Full API payload: raw and display sections side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceResponse {
    #[serde(rename = "RAW")]
    pub raw: CoinGroup<RawQuote>,
    #[serde(rename = "DISPLAY")]
    pub display: CoinGroup<DisplayQuote>,
}

/// Decode a fetched response body into the fixed schema.
pub fn parse_snapshot(bytes: &[u8]) -> Result<PriceResponse> {
    serde_json::from_slice(bytes).context("Failed to parse the price snapshot JSON")
}
