//! Flat output records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::disaster::DisasterLabel;
use crate::region::{RegionContext, SoilType, Vegetation};
use crate::temporal::TemporalContext;
use crate::weather::WeatherObservation;

/// One fully assembled dataset row. Owned by the orchestrator; a record has
/// no identity beyond its position in the output sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Record {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed: f64,
    pub rain_1h_mm: f64,
    pub disaster: DisasterLabel,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_m: f64,
    pub timestamp: NaiveDateTime,
    pub month: u32,
    pub hour: u32,
    pub vegetation: Vegetation,
    pub soil_type: SoilType,
    pub soil_moisture_pct: f64,
    pub is_urban: bool,
    pub cool_current: bool,
}

impl Record {
    /// Flatten the per-sample contexts into one row.
    pub fn assemble(
        region: &RegionContext,
        temporal: &TemporalContext,
        weather: &WeatherObservation,
        disaster: DisasterLabel,
    ) -> Self {
        Self {
            temperature_c: weather.temperature_c,
            humidity_pct: weather.humidity_pct,
            pressure_hpa: weather.pressure_hpa,
            wind_speed: weather.wind_speed,
            rain_1h_mm: weather.rain_1h_mm,
            disaster,
            latitude: region.latitude,
            longitude: region.longitude,
            elevation_m: region.elevation_m,
            timestamp: temporal.timestamp,
            month: temporal.month,
            hour: temporal.hour,
            vegetation: region.vegetation,
            soil_type: region.soil_type,
            soil_moisture_pct: weather.soil_moisture_pct,
            is_urban: region.is_urban,
            cool_current: region.cool_current,
        }
    }
}
