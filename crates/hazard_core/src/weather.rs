//! Weather state sampling.
//!
//! Every variable is drawn from a distribution whose parameters are a pure
//! function of the region and temporal contexts, so the deterministic parts
//! of the model (means, scales) are split out as plain helpers and the random
//! draw happens last. Soil moisture additionally depends on the rainfall
//! drawn just before it.

use serde::{Deserialize, Serialize};

use crate::region::{RegionContext, Vegetation};
use crate::rng::SampleStreams;
use crate::temporal::TemporalContext;
use crate::GenerateError;

/// Adiabatic lapse rate, degrees C lost per metre of elevation.
const LAPSE_RATE_C_PER_M: f64 = 0.0065;

/// One sampled weather state, pre-disaster-classification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed: f64,
    pub rain_1h_mm: f64,
    pub soil_moisture_pct: f64,
}

/// Expected temperature for a site before the noise term.
pub fn temperature_mean(region: &RegionContext, temporal: &TemporalContext) -> f64 {
    let base = if region.is_coastal {
        28.0
    } else if region.is_arid {
        32.0
    } else {
        22.0
    };
    let current_adj = if region.cool_current {
        -5.0
    } else if region.is_urban && !region.is_coastal {
        3.0
    } else {
        0.0
    };
    let diurnal_adj = if temporal.is_daytime { 3.0 } else { -4.0 };
    let season_adj = if temporal.is_summer { 2.0 } else { -2.0 };
    base + current_adj - LAPSE_RATE_C_PER_M * region.elevation_m + diurnal_adj + season_adj
}

/// Expected humidity before clamping and noise.
pub fn humidity_mean(region: &RegionContext, temporal: &TemporalContext) -> f64 {
    let base = if region.is_coastal {
        75.0
    } else if region.is_arid {
        18.0
    } else {
        60.0
    };
    let site_adj = if region.is_urban {
        -10.0
    } else if region.vegetation == Vegetation::Wetland {
        15.0
    } else {
        0.0
    };
    let day_adj = if temporal.is_daytime { -5.0 } else { 8.0 };
    base + site_adj + day_adj
}

/// Weibull scale parameter for wind speed.
pub fn wind_scale(region: &RegionContext, temporal: &TemporalContext) -> f64 {
    let base = if region.is_coastal || (region.is_arid && region.elevation_m > 1000.0) {
        18.0
    } else {
        12.0
    };
    let urban_factor = if region.is_urban { 1.3 } else { 1.0 };
    let time_factor = if temporal.is_daytime { 1.2 } else { 0.8 };
    base * urban_factor * time_factor
}

/// Beta `b` parameter for soil moisture; drier regimes skew the draw low.
pub fn soil_moisture_beta_b(region: &RegionContext) -> f64 {
    if region.is_arid {
        5.0
    } else if region.is_coastal {
        2.0
    } else {
        3.0
    }
}

impl WeatherObservation {
    /// Sample a weather state for the given site and instant.
    pub fn sample(
        region: &RegionContext,
        temporal: &TemporalContext,
        streams: &mut SampleStreams,
    ) -> Result<Self, GenerateError> {
        let temperature_c = streams.normal(temperature_mean(region, temporal), 5.0)?;

        let humidity_pct = streams
            .normal(humidity_mean(region, temporal), 10.0)?
            .clamp(10.0, 100.0);

        let pressure_hpa = 1015.0 - region.elevation_m / 100.0 + streams.normal(0.0, 5.0)?;

        let wind_speed = streams.weibull(2.0, wind_scale(region, temporal))?;

        let mut rain_1h_mm = 0.0;
        if temporal.is_monsoon || (region.is_coastal && streams.chance(0.4)) {
            rain_1h_mm = streams.gamma(0.6, 3.0)?;
            if region.elevation_m > 1500.0 {
                // Orographic lift.
                rain_1h_mm *= 1.5;
            }
            if region.vegetation == Vegetation::Forest {
                rain_1h_mm *= 1.2;
            }
        }

        let moisture_factor = if rain_1h_mm > 5.0 {
            1.3
        } else if region.vegetation == Vegetation::Urban {
            0.7
        } else {
            1.0
        };
        let soil_moisture_pct =
            streams.beta(2.0, soil_moisture_beta_b(region), 100.0)? * moisture_factor;

        Ok(Self {
            temperature_c,
            humidity_pct,
            pressure_hpa,
            wind_speed,
            rain_1h_mm,
            soil_moisture_pct,
        })
    }
}
