// Price file loading: tokenising and reading the series from disk.

pub mod price_file;

pub use price_file::load_prices;
