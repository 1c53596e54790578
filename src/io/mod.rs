//! Readers for textual geometry formats.

pub mod wkt;
