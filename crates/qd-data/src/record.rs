//! The seismic event record

use qd_core::{AxisKey, RecordId};

/// One observed seismic event.
///
/// `time` and `updated` are kept as the verbatim source text and are never
/// turned into date values. The four plotting fields hold NaN when the
/// source value was missing or malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth: f64,
    pub mag: f64,
    pub mag_type: String,
    pub nst: Option<f64>,
    pub gap: Option<f64>,
    pub dmin: Option<f64>,
    pub rms: Option<f64>,
    pub net: String,
    pub updated: String,
    pub place: String,
    pub event_type: String,
    pub horizontal_error: Option<f64>,
    pub depth_error: Option<f64>,
    pub mag_error: Option<f64>,
    pub mag_nst: Option<f64>,
    pub status: String,
    pub location_source: String,
    pub mag_source: String,
    /// Columns the dashboard does not model, as (column, raw text)
    pub extra: Vec<(String, String)>,
}

/// A single field of a record, as seen by the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
    /// Optional metric that was null-like or non-numeric in the source
    Missing,
}

impl Record {
    /// An empty record with the given identifier
    pub fn empty(id: RecordId) -> Self {
        Self {
            id,
            time: String::new(),
            latitude: f64::NAN,
            longitude: f64::NAN,
            depth: f64::NAN,
            mag: f64::NAN,
            mag_type: String::new(),
            nst: None,
            gap: None,
            dmin: None,
            rms: None,
            net: String::new(),
            updated: String::new(),
            place: String::new(),
            event_type: String::new(),
            horizontal_error: None,
            depth_error: None,
            mag_error: None,
            mag_nst: None,
            status: String::new(),
            location_source: String::new(),
            mag_source: String::new(),
            extra: Vec::new(),
        }
    }

    /// Value of a plottable field (NaN when it did not parse)
    pub fn axis_value(&self, key: AxisKey) -> f64 {
        match key {
            AxisKey::Latitude => self.latitude,
            AxisKey::Longitude => self.longitude,
            AxisKey::Depth => self.depth,
            AxisKey::Mag => self.mag,
        }
    }

    /// Look up a field by its column name.
    ///
    /// Returns `None` for columns the record does not have.
    pub fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        let optional = |value: Option<f64>| value.map_or(FieldValue::Missing, FieldValue::Number);

        let value = match column {
            "time" => FieldValue::Text(&self.time),
            "latitude" => FieldValue::Number(self.latitude),
            "longitude" => FieldValue::Number(self.longitude),
            "depth" => FieldValue::Number(self.depth),
            "mag" => FieldValue::Number(self.mag),
            "magType" => FieldValue::Text(&self.mag_type),
            "nst" => optional(self.nst),
            "gap" => optional(self.gap),
            "dmin" => optional(self.dmin),
            "rms" => optional(self.rms),
            "net" => FieldValue::Text(&self.net),
            "updated" => FieldValue::Text(&self.updated),
            "place" => FieldValue::Text(&self.place),
            "type" => FieldValue::Text(&self.event_type),
            "horizontalError" => optional(self.horizontal_error),
            "depthError" => optional(self.depth_error),
            "magError" => optional(self.mag_error),
            "magNst" => optional(self.mag_nst),
            "status" => FieldValue::Text(&self.status),
            "locationSource" => FieldValue::Text(&self.location_source),
            "magSource" => FieldValue::Text(&self.mag_source),
            other => {
                let (_, raw) = self.extra.iter().find(|(name, _)| name == other)?;
                FieldValue::Text(raw)
            }
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let mut record = Record::empty(RecordId(1));
        record.mag = 4.5;
        record.place = "10 km N of Somewhere".to_string();
        record.extra.push(("region".to_string(), "pacific".to_string()));

        assert_eq!(record.field("mag"), Some(FieldValue::Number(4.5)));
        assert_eq!(record.field("place"), Some(FieldValue::Text("10 km N of Somewhere")));
        assert_eq!(record.field("nst"), Some(FieldValue::Missing));
        assert_eq!(record.field("region"), Some(FieldValue::Text("pacific")));
        assert_eq!(record.field("nonexistent"), None);
    }

    #[test]
    fn test_axis_value() {
        let mut record = Record::empty(RecordId(1));
        record.depth = 12.0;

        assert_eq!(record.axis_value(AxisKey::Depth), 12.0);
        assert!(record.axis_value(AxisKey::Latitude).is_nan());
    }
}
