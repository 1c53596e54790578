//! Parse Well-Known Text (WKT) geometries.

pub use reader::{read_wkt, read_wkt_with_options, WktReaderOptions};

pub mod reader;
