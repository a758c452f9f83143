use atelier_core::weather::WeatherSample;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hourly fields requested from the provider.
pub const HOURLY_FIELDS: &str = "temperature_2m,precipitation,cloud_cover";
/// Daily fields requested from the provider.
pub const DAILY_FIELDS: &str = "sunrise,sunset";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("hourly series `{field}` has {actual} values, expected {expected}")]
    HourlyLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("daily series `{field}` has {actual} values, expected {expected}")]
    DailyLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Forecast payload as returned by the provider (Open-Meteo layout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    pub hourly: HourlySeries,
    #[serde(default)]
    pub daily: Option<DailySeries>,
}

/// Column-oriented hourly data; every vector lines up with `time`. The
/// provider sends `null` for values it does not have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f32>>,
    pub precipitation: Vec<Option<f32>>,
    pub cloud_cover: Vec<Option<f32>>,
}

/// Sunrise and sunset are `null` on days the sun does not cross the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub sunrise: Vec<Option<String>>,
    pub sunset: Vec<Option<String>>,
}

impl Forecast {
    pub fn validate(&self) -> Result<(), ForecastError> {
        self.hourly.validate()?;
        if let Some(daily) = &self.daily {
            daily.validate()?;
        }
        Ok(())
    }
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn validate(&self) -> Result<(), ForecastError> {
        let expected = self.time.len();
        for (field, actual) in [
            ("temperature_2m", self.temperature_2m.len()),
            ("precipitation", self.precipitation.len()),
            ("cloud_cover", self.cloud_cover.len()),
        ] {
            if actual != expected {
                return Err(ForecastError::HourlyLength {
                    field,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Row view of the columns, skipping hours with a missing value. Stops at
    /// the shortest column, so call [`HourlySeries::validate`] first to catch
    /// truncated payloads.
    pub fn samples(&self) -> impl Iterator<Item = (&str, WeatherSample)> + '_ {
        self.time
            .iter()
            .zip(&self.temperature_2m)
            .zip(&self.precipitation)
            .zip(&self.cloud_cover)
            .filter_map(|(((time, &temperature), &precipitation), &cloud_cover)| {
                let sample = WeatherSample {
                    cloud_cover: cloud_cover?,
                    precipitation: precipitation?,
                    temperature: temperature?,
                };
                Some((time.as_str(), sample))
            })
    }
}

impl DailySeries {
    pub fn validate(&self) -> Result<(), ForecastError> {
        let expected = self.time.len();
        for (field, actual) in [("sunrise", self.sunrise.len()), ("sunset", self.sunset.len())] {
            if actual != expected {
                return Err(ForecastError::DailyLength {
                    field,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}
