//! Icon selection for display collaborators
//!
//! Picks at most one weather, one temperature and one wind icon per hour.
//! Only unfavourable conditions earn an icon: a parameter rated High adds
//! nothing, and an hour rated High overall gets no icons at all. Cloud
//! cover fills the weather slot only when precipitation earned no icon.

use super::classifier::ParamTiers;
use crate::app::models::{HourDesirability, HourRecord, ParamDesirability, Parameter};
use crate::config::{ThresholdBands, ThresholdTable};
use serde::Serialize;

/// Precipitation or sky condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Rain,
    LightShower,
    Overcast,
    PartlyCloudy,
}

/// Temperature outside the comfortable band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureIcon {
    Cold,
    Cool,
    Warm,
    Hot,
}

/// Wind above calm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindIcon {
    Breezy,
    Windy,
}

/// Icons chosen for one hour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IconSelection {
    pub weather: Option<WeatherIcon>,
    pub temperature: Option<TemperatureIcon>,
    pub wind: Option<WindIcon>,
}

impl IconSelection {
    /// Whether no icon was chosen
    pub fn is_empty(&self) -> bool {
        self.weather.is_none() && self.temperature.is_none() && self.wind.is_none()
    }
}

/// Choose icons for a record
///
/// Returns `None` for an incomplete record. An hour rated High overall gets
/// an empty selection even when cloud cover alone is Medium or Low, so a
/// dry, mild, calm but overcast hour shows no icon at all.
pub fn select_icons(record: &HourRecord, thresholds: &ThresholdTable) -> Option<IconSelection> {
    let tiers = ParamTiers::for_record(record, thresholds)?;
    if tiers.overall() == HourDesirability::High {
        return Some(IconSelection::default());
    }

    let weather = match tiers.precip {
        ParamDesirability::Low => Some(WeatherIcon::Rain),
        ParamDesirability::Medium => Some(WeatherIcon::LightShower),
        ParamDesirability::High => match tiers.clouds {
            Some(ParamDesirability::Low) => Some(WeatherIcon::Overcast),
            Some(ParamDesirability::Medium) => Some(WeatherIcon::PartlyCloudy),
            _ => None,
        },
    };

    let temperature = record
        .temp
        .and_then(|temp| temperature_icon(tiers.temp, temp, thresholds));

    let wind = match tiers.wind {
        ParamDesirability::Low => Some(WindIcon::Windy),
        ParamDesirability::Medium => Some(WindIcon::Breezy),
        ParamDesirability::High => None,
    };

    Some(IconSelection {
        weather,
        temperature,
        wind,
    })
}

fn temperature_icon(
    tier: ParamDesirability,
    temp: i32,
    thresholds: &ThresholdTable,
) -> Option<TemperatureIcon> {
    let below_best = match thresholds.bands(Parameter::Temp) {
        ThresholdBands::MiddleIsBetter([_, high_from, _, _]) => temp < high_from,
        ThresholdBands::LowerIsBetter(_) => false,
    };

    match (tier, below_best) {
        (ParamDesirability::High, _) => None,
        (ParamDesirability::Low, true) => Some(TemperatureIcon::Cold),
        (ParamDesirability::Medium, true) => Some(TemperatureIcon::Cool),
        (ParamDesirability::Medium, false) => Some(TemperatureIcon::Warm),
        (ParamDesirability::Low, false) => Some(TemperatureIcon::Hot),
    }
}
