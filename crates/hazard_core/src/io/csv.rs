//! CSV encoding of generated records.
//!
//! The column list, order, and per-column formats are a fixed contract with
//! downstream consumers, so rows are formatted explicitly instead of going
//! through generic serialization. The caller owns file creation; this module
//! only writes to the handle it is given.

use std::io::Write;

use crate::record::Record;

/// Column headers, in output order.
pub const COLUMNS: [&str; 17] = [
    "temp",
    "humidity",
    "pressure",
    "wind_speed",
    "rain_1h",
    "disaster_type",
    "latitude",
    "longitude",
    "elevation",
    "timestamp",
    "month",
    "hour",
    "vegetation",
    "soil_type",
    "soil_moisture",
    "urban_rural",
    "ocean_current",
];

/// Encode one record as its 17 column strings.
///
/// Integer columns truncate toward zero; fractional columns carry a fixed
/// digit count so paired runs compare byte for byte.
pub fn encode_fields(record: &Record) -> [String; 17] {
    [
        format!("{:.1}", record.temperature_c),
        format!("{}", record.humidity_pct as i64),
        format!("{}", record.pressure_hpa as i64),
        format!("{:.1}", record.wind_speed),
        format!("{:.1}", record.rain_1h_mm),
        record.disaster.as_str().to_string(),
        format!("{:.4}", record.latitude),
        format!("{:.4}", record.longitude),
        format!("{}", record.elevation_m as i64),
        record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        record.month.to_string(),
        record.hour.to_string(),
        record.vegetation.as_str().to_string(),
        record.soil_type.as_str().to_string(),
        format!("{:.1}", record.soil_moisture_pct),
        if record.is_urban { "urban" } else { "rural" }.to_string(),
        if record.cool_current {
            "cool_current"
        } else {
            "normal"
        }
        .to_string(),
    ]
}

/// Write the header and all records, in generation order, to `out`.
pub fn write_csv<W: Write>(records: &[Record], mut out: W) -> std::io::Result<()> {
    writeln!(out, "{}", COLUMNS.join(","))?;
    for record in records {
        writeln!(out, "{}", encode_fields(record).join(","))?;
    }
    Ok(())
}
