//! Tabular input and output.

mod tabular;

pub use tabular::{read_series_csv, read_series_from_reader, write_annotated_csv, CsvOptions};
