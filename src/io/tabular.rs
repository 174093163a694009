//! CSV input and output for vegetation-index series.

use crate::core::NdviSeries;
use crate::detection::GrowthPeriodResult;
use crate::error::{PhenologyError, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;

/// Column and format settings for reading a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Header of the date column.
    pub date_column: String,
    /// Header of the index value column.
    pub value_column: String,
    /// `chrono` format string for the date column.
    pub date_format: String,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            date_column: "date".to_string(),
            value_column: "ndvi".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            delimiter: b',',
        }
    }
}

impl CsvOptions {
    pub fn date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    pub fn value_column(mut self, name: impl Into<String>) -> Self {
        self.value_column = name.into();
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

#[derive(Debug, Serialize)]
struct AnnotatedRow {
    date: String,
    ndvi: f64,
    smoothed: Option<f64>,
    delta: Option<f64>,
    label: &'static str,
    germination: Option<f64>,
    harvest: Option<f64>,
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| PhenologyError::InvalidInput(format!("missing column '{name}'")))
}

/// Read a series from any reader producing CSV with a header row.
pub fn read_series_from_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<NdviSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let date_idx = column_index(&headers, &options.date_column)?;
    let value_idx = column_index(&headers, &options.value_column)?;

    let mut dates = Vec::new();
    let mut values = Vec::new();

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let line = line + 2;

        let raw_date = record.get(date_idx).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date, &options.date_format).map_err(|e| {
            PhenologyError::InvalidInput(format!("line {line}: bad date '{raw_date}': {e}"))
        })?;

        let raw_value = record.get(value_idx).unwrap_or_default();
        let value: f64 = raw_value.parse().map_err(|_| {
            PhenologyError::InvalidInput(format!("line {line}: non-numeric value '{raw_value}'"))
        })?;

        dates.push(date);
        values.push(value);
    }

    tracing::debug!(rows = dates.len(), "read vegetation-index rows");
    NdviSeries::new(dates, values)
}

/// Read a series from a CSV file.
pub fn read_series_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<NdviSeries> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| PhenologyError::Io(format!("{}: {e}", path.display())))?;
    read_series_from_reader(file, options)
}

/// Write the annotated series as CSV.
///
/// Columns: `date, ndvi, smoothed, delta, label, germination, harvest`.
/// Undefined smoothed/delta cells and unlabeled marker cells are empty.
pub fn write_annotated_csv<W: Write>(writer: W, result: &GrowthPeriodResult) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    let germination = result.germination_markers();
    let harvest = result.harvest_markers();

    for i in 0..result.len() {
        writer.serialize(AnnotatedRow {
            date: result.dates[i].format("%Y-%m-%d").to_string(),
            ndvi: result.values[i],
            smoothed: result.signals.smoothed[i],
            delta: result.signals.delta[i],
            label: result.signals.labels[i].as_str(),
            germination: germination[i],
            harvest: harvest[i],
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{detect_growth_periods, GrowthPeriodConfig, PeriodLabel};

    const SAMPLE: &str = "\
date,ndvi
2024-06-01,0.5
2024-06-02,0.4
2024-06-03,0.3
2024-06-04,0.2
2024-06-05,0.14
2024-06-06,0.13
2024-06-07,0.12
2024-06-08,0.14
2024-06-09,0.16
";

    #[test]
    fn reads_default_columns() {
        let series = read_series_from_reader(SAMPLE.as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(series.len(), 9);
        assert_eq!(
            series.first_date(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(series.values()[4], 0.14);
    }

    #[test]
    fn reads_custom_columns_and_format() {
        let data = "day;region;value\n01/06/2024;north;0.3\n02/06/2024;north;0.2\n";
        let options = CsvOptions::default()
            .date_column("day")
            .value_column("value")
            .date_format("%d/%m/%Y")
            .delimiter(b';');
        let series = read_series_from_reader(data.as_bytes(), &options).unwrap();
        assert_eq!(series.values(), &[0.3, 0.2]);
        assert_eq!(
            series.last_date(),
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
        );
    }

    #[test]
    fn rejects_missing_column() {
        let data = "date,evi\n2024-01-01,0.1\n";
        let err = read_series_from_reader(data.as_bytes(), &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, PhenologyError::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_numeric_value() {
        let data = "date,ndvi\n2024-01-01,0.1\n2024-01-02,cloudy\n";
        let err = read_series_from_reader(data.as_bytes(), &CsvOptions::default()).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn rejects_unordered_dates() {
        let data = "date,ndvi\n2024-01-02,0.1\n2024-01-01,0.2\n";
        let err = read_series_from_reader(data.as_bytes(), &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, PhenologyError::TimestampError(_)));
    }

    #[test]
    fn rejects_header_only_input() {
        let err = read_series_from_reader("date,ndvi\n".as_bytes(), &CsvOptions::default())
            .unwrap_err();
        assert_eq!(err, PhenologyError::EmptyData);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_series_csv("/nonexistent/ndvi.csv", &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, PhenologyError::Io(_)));
    }

    #[test]
    fn writes_annotated_rows() {
        let series = read_series_from_reader(SAMPLE.as_bytes(), &CsvOptions::default()).unwrap();
        let result = detect_growth_periods(&series, &GrowthPeriodConfig::default()).unwrap();
        assert_eq!(result.labels()[6], PeriodLabel::Harvest);

        let mut out = Vec::new();
        write_annotated_csv(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(
            lines[0],
            "date,ndvi,smoothed,delta,label,germination,harvest"
        );
        assert_eq!(lines[1], "2024-06-01,0.5,,,none,,");
        assert!(lines[7].starts_with("2024-06-07,0.12,"));
        assert!(lines[7].ends_with(",harvest,,0.15"));
        assert!(lines[9].ends_with(",germination,0.15,"));
    }
}
