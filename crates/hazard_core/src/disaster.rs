//! Disaster classification cascade.
//!
//! An ordered, first-match-wins rule set over the sampled weather and the
//! site context. Flood is checked before wildfire before storm; the urban
//! group runs independently afterwards but only takes effect when no label
//! fired. Classification may deepen a pressure drop, gust the wind, or top
//! up rainfall, so it returns an adjusted observation rather than editing
//! the caller's copy in place.

use serde::{Deserialize, Serialize};

use crate::region::{RegionContext, Vegetation};
use crate::rng::SampleStreams;
use crate::weather::WeatherObservation;
use crate::GenerateError;

/// The single label attached to every record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterLabel {
    None,
    Flood,
    Wildfire,
    Storm,
    UrbanFlood,
    Heatwave,
    WindDamage,
}

impl DisasterLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flood => "flood",
            Self::Wildfire => "wildfire",
            Self::Storm => "storm",
            Self::UrbanFlood => "urban_flood",
            Self::Heatwave => "heatwave",
            Self::WindDamage => "wind_damage",
        }
    }
}

fn flood_conditions(weather: &WeatherObservation, region: &RegionContext) -> bool {
    (weather.soil_moisture_pct > 60.0 && weather.rain_1h_mm > 10.0)
        || (weather.rain_1h_mm > 20.0 && region.elevation_m < 300.0)
}

fn wildfire_conditions(weather: &WeatherObservation, region: &RegionContext) -> bool {
    matches!(
        region.vegetation,
        Vegetation::Forest | Vegetation::Shrubland | Vegetation::Grassland
    ) && weather.temperature_c > 35.0
        && weather.humidity_pct < 25.0
        && weather.wind_speed > 10.0
        && weather.soil_moisture_pct < 30.0
        && weather.rain_1h_mm < 0.1
}

fn storm_conditions(weather: &WeatherObservation, region: &RegionContext) -> bool {
    weather.wind_speed > 25.0 && (weather.rain_1h_mm > 5.0 || region.is_coastal)
}

/// Classify one observation, returning the label and the adjusted weather.
pub fn classify(
    weather: WeatherObservation,
    region: &RegionContext,
    streams: &mut SampleStreams,
) -> Result<(DisasterLabel, WeatherObservation), GenerateError> {
    let mut weather = weather;

    let mut label = if flood_conditions(&weather, region) {
        weather.pressure_hpa -= streams.uniform(5.0, 15.0);
        DisasterLabel::Flood
    } else if wildfire_conditions(&weather, region) {
        weather.wind_speed *= streams.uniform(1.2, 1.8);
        DisasterLabel::Wildfire
    } else if storm_conditions(&weather, region) {
        weather.pressure_hpa -= streams.uniform(15.0, 25.0);
        weather.rain_1h_mm = weather.rain_1h_mm.max(streams.gamma(1.0, 8.0)?);
        DisasterLabel::Storm
    } else {
        DisasterLabel::None
    };

    // Urban hazards never override a natural label already set above.
    if label == DisasterLabel::None && region.is_urban {
        if weather.temperature_c > 38.0 && weather.humidity_pct > 70.0 {
            label = if weather.rain_1h_mm > 5.0 {
                DisasterLabel::UrbanFlood
            } else {
                DisasterLabel::Heatwave
            };
        } else if weather.wind_speed > 30.0 {
            label = DisasterLabel::WindDamage;
        }
    }

    Ok((label, weather))
}
