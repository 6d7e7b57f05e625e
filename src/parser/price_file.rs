// Whitespace-delimited price file parsing
use crate::model::{LoadError, PriceSeries};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Result of tokenising a price file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPrices {
    pub values: Vec<f64>,
    /// First token that was not a number; parsing stopped there.
    pub rejected_token: Option<String>,
}

pub trait Parser {
    fn parse(&self, text: &str) -> ParsedPrices;
}

#[derive(Default)]
pub struct PriceFileParser;

impl PriceFileParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for PriceFileParser {
    fn parse(&self, text: &str) -> ParsedPrices {
        let mut values = Vec::new();
        for token in text.split_whitespace() {
            match token.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    return ParsedPrices {
                        values,
                        rejected_token: Some(token.to_string()),
                    };
                }
            }
        }
        ParsedPrices {
            values,
            rejected_token: None,
        }
    }
}

/// A freshly loaded series plus what was left out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub series: PriceSeries,
    pub truncated: usize,
    pub rejected_token: Option<String>,
}

/// Reads up to `capacity` prices from `path`.
pub fn load_prices(path: impl AsRef<Path>, capacity: usize) -> Result<LoadOutcome, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let parsed = PriceFileParser::new().parse(&text);
    if let Some(token) = &parsed.rejected_token {
        warn!("Stopped reading {} at non-numeric token {:?}", path.display(), token);
    }

    let (series, truncated) = PriceSeries::from_values(parsed.values, capacity);
    if truncated > 0 {
        warn!("{} prices beyond capacity {} were ignored", truncated, capacity);
    }
    info!("Loaded {} prices from {}", series.len(), path.display());

    Ok(LoadOutcome {
        series,
        truncated,
        rejected_token: parsed.rejected_token,
    })
}
