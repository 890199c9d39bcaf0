//! Delimited text reading.

mod reader;

pub use reader::{parse_delimited, read_delimited};
