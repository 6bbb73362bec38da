//! Calendar context derived from a sample's position in the timeline.
//!
//! The generated dataset is a gap-free hourly sequence starting at the fixed
//! epoch 2020-01-01 00:00:00. Season and monsoon flags depend on the site's
//! hemisphere, so the region context must be sampled before this stage.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Temporal attributes for one sample.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemporalContext {
    pub timestamp: NaiveDateTime,
    pub month: u32,
    pub hour: u32,
    pub is_daytime: bool,
    pub is_summer: bool,
    pub is_monsoon: bool,
}

impl TemporalContext {
    /// Derive the context for sample `index` at a site with the given latitude.
    pub fn derive(index: u64, latitude: f64) -> Self {
        let timestamp = epoch() + Duration::hours(index as i64);
        let month = timestamp.month();
        let hour = timestamp.hour();
        let is_daytime = (6..18).contains(&hour);

        let northern = latitude > 0.0;
        let is_summer = if northern {
            matches!(month, 6..=8)
        } else {
            matches!(month, 12 | 1 | 2)
        };
        let is_monsoon = if northern {
            matches!(month, 6..=9)
        } else {
            matches!(month, 12 | 1..=3)
        };

        Self {
            timestamp,
            month,
            hour,
            is_daytime,
            is_summer,
            is_monsoon,
        }
    }
}

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("fixed epoch is a valid calendar instant")
}
