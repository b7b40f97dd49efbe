//! CSV text → typed records

use csv::{ReaderBuilder, StringRecord, Trim};

use qd_core::RecordId;
use crate::config::NullConfig;
use crate::record::Record;
use crate::{DataError, Dataset};

/// Source column carrying the upstream event code; replaced by [`RecordId`]
const SOURCE_ID_COLUMN: &str = "id";

/// Parse delimited text with a header row into a [`Dataset`].
///
/// Empty lines are skipped and identifiers run 1..N in file order. The four
/// plotting fields become NaN when malformed; a bad value never aborts the
/// batch.
pub fn parse_dataset(source_name: &str, text: &str, null_config: &NullConfig) -> Result<Dataset, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(canonical_column).collect();
    tracing::debug!("Parsing '{}' with columns {:?}", source_name, headers);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if is_blank(&row) {
            continue;
        }
        let id = RecordId(records.len() as u32 + 1);
        records.push(build_record(id, &headers, &row, null_config));
    }

    // Columns come from the data shape, so a batch without rows has none
    let columns = if records.is_empty() {
        Vec::new()
    } else {
        display_columns(&headers)
    };

    tracing::info!(
        "Parsed {} records with {} display columns from '{}'",
        records.len(),
        columns.len(),
        source_name
    );

    Ok(Dataset::new(source_name, columns, records))
}

/// Map a header to the column name records use, resolving short aliases
pub fn canonical_column(header: &str) -> String {
    let header = header.trim_start_matches('\u{feff}').trim();
    match header.to_ascii_lowercase().as_str() {
        "lat" => "latitude".to_string(),
        "lon" | "lng" => "longitude".to_string(),
        "magnitude" => "mag".to_string(),
        _ => header.to_string(),
    }
}

/// Coerce a plotting field; anything that is not a finite number is NaN
fn parse_float(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

fn is_blank(row: &StringRecord) -> bool {
    row.len() <= 1 && row.get(0).map_or(true, |field| field.trim().is_empty())
}

fn display_columns(headers: &[String]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        if header == SOURCE_ID_COLUMN || header.is_empty() || columns.contains(header) {
            continue;
        }
        columns.push(header.clone());
    }
    columns
}

fn build_record(id: RecordId, headers: &[String], row: &StringRecord, null_config: &NullConfig) -> Record {
    let mut record = Record::empty(id);

    for (idx, column) in headers.iter().enumerate() {
        let raw = row.get(idx).unwrap_or("");
        match column.as_str() {
            SOURCE_ID_COLUMN => {}
            "time" => record.time = raw.to_string(),
            "updated" => record.updated = raw.to_string(),
            "latitude" => record.latitude = parse_float(raw),
            "longitude" => record.longitude = parse_float(raw),
            "depth" => record.depth = parse_float(raw),
            "mag" => record.mag = parse_float(raw),
            "magType" => record.mag_type = raw.to_string(),
            "nst" => record.nst = null_config.parse_optional(raw),
            "gap" => record.gap = null_config.parse_optional(raw),
            "dmin" => record.dmin = null_config.parse_optional(raw),
            "rms" => record.rms = null_config.parse_optional(raw),
            "net" => record.net = raw.to_string(),
            "place" => record.place = raw.to_string(),
            "type" => record.event_type = raw.to_string(),
            "horizontalError" => record.horizontal_error = null_config.parse_optional(raw),
            "depthError" => record.depth_error = null_config.parse_optional(raw),
            "magError" => record.mag_error = null_config.parse_optional(raw),
            "magNst" => record.mag_nst = null_config.parse_optional(raw),
            "status" => record.status = raw.to_string(),
            "locationSource" => record.location_source = raw.to_string(),
            "magSource" => record.mag_source = raw.to_string(),
            "" => {}
            other => record.extra.push((other.to_string(), raw.to_string())),
        }
    }

    record
}
