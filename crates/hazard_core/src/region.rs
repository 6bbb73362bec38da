//! Geospatial and ecological context sampling.
//!
//! Each sample gets a synthetic observation site: coordinates, regional
//! classification flags, elevation, vegetation, and soil. Later stages read
//! this context but never modify it. Sampling order matters because the
//! regime flags gate the elevation and vegetation draws.

use serde::{Deserialize, Serialize};

use crate::rng::SampleStreams;
use crate::GenerateError;

/// Vegetation cover classes recognised by the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vegetation {
    Forest,
    Grassland,
    Shrubland,
    Urban,
    Cropland,
    Wetland,
}

impl Vegetation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forest => "forest",
            Self::Grassland => "grassland",
            Self::Shrubland => "shrubland",
            Self::Urban => "urban",
            Self::Cropland => "cropland",
            Self::Wetland => "wetland",
        }
    }
}

/// Soil texture classes, correlated with vegetation cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Silt,
    Sand,
    Loam,
}

impl SoilType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clay => "clay",
            Self::Silt => "silt",
            Self::Sand => "sand",
            Self::Loam => "loam",
        }
    }
}

const ALL_SOILS: [SoilType; 4] = [SoilType::Clay, SoilType::Silt, SoilType::Sand, SoilType::Loam];

/// Fixed site attributes for one synthetic observation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegionContext {
    pub latitude: f64,
    pub longitude: f64,
    pub is_coastal: bool,
    pub is_arid: bool,
    pub is_urban: bool,
    pub elevation_m: f64,
    pub cool_current: bool,
    pub vegetation: Vegetation,
    pub soil_type: SoilType,
}

impl RegionContext {
    /// Sample a fresh site context from the random streams.
    pub fn sample(streams: &mut SampleStreams) -> Result<Self, GenerateError> {
        let latitude = streams.uniform(-90.0, 90.0);
        let longitude = streams.uniform(-180.0, 180.0);

        let is_coastal = latitude.abs() < 45.0 && streams.chance(0.7);
        let is_arid = latitude.abs() > 30.0 && streams.chance(0.4);
        let is_urban = streams.chance(0.2);

        let elevation_m = if is_coastal {
            streams.gamma(1.5, 200.0)?
        } else if is_arid {
            streams.uniform(500.0, 3000.0)
        } else {
            streams.gamma(2.0, 400.0)?
        };

        let cool_current = cool_current_band(longitude);

        let vegetation = if is_urban {
            Vegetation::Urban
        } else if is_coastal {
            streams.pick(&[Vegetation::Wetland, Vegetation::Forest, Vegetation::Grassland])
        } else if is_arid {
            streams.pick(&[Vegetation::Shrubland, Vegetation::Grassland])
        } else {
            streams.pick(&[
                Vegetation::Forest,
                Vegetation::Grassland,
                Vegetation::Shrubland,
                Vegetation::Cropland,
                Vegetation::Wetland,
            ])
        };

        let soil_type = match vegetation {
            Vegetation::Wetland => SoilType::Clay,
            Vegetation::Forest => streams.pick(&[SoilType::Loam, SoilType::Silt]),
            _ => streams.pick(&ALL_SOILS),
        };

        Ok(Self {
            latitude,
            longitude,
            is_coastal,
            is_arid,
            is_urban,
            elevation_m,
            cool_current,
            vegetation,
            soil_type,
        })
    }
}

/// Longitude bands where a cool ocean current suppresses temperature.
///
/// Two disjoint bands: the American west coasts and the Benguela/Canary
/// stretch off Africa and Europe.
fn cool_current_band(longitude: f64) -> bool {
    (longitude > -150.0 && longitude < -70.0) || (longitude > 5.0 && longitude < 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SampleStreams;

    #[test]
    fn cool_current_matches_bands() {
        assert!(cool_current_band(-100.0));
        assert!(cool_current_band(10.0));
        assert!(!cool_current_band(-150.0));
        assert!(!cool_current_band(-60.0));
        assert!(!cool_current_band(0.0));
        assert!(!cool_current_band(40.0));
    }

    #[test]
    fn urban_flag_and_vegetation_agree() {
        let mut streams = SampleStreams::from_seed(11);
        for _ in 0..256 {
            let region = RegionContext::sample(&mut streams).unwrap();
            assert_eq!(region.is_urban, region.vegetation == Vegetation::Urban);
        }
    }

    #[test]
    fn soil_correlates_with_vegetation() {
        let mut streams = SampleStreams::from_seed(12);
        for _ in 0..256 {
            let region = RegionContext::sample(&mut streams).unwrap();
            match region.vegetation {
                Vegetation::Wetland => assert_eq!(region.soil_type, SoilType::Clay),
                Vegetation::Forest => assert!(matches!(
                    region.soil_type,
                    SoilType::Loam | SoilType::Silt
                )),
                _ => {}
            }
        }
    }

    #[test]
    fn sampled_fields_stay_in_range() {
        let mut streams = SampleStreams::from_seed(13);
        for _ in 0..256 {
            let region = RegionContext::sample(&mut streams).unwrap();
            assert!((-90.0..90.0).contains(&region.latitude));
            assert!((-180.0..180.0).contains(&region.longitude));
            assert!(region.elevation_m >= 0.0);
        }
    }
}
