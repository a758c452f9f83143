use atelier_core::weather::WeatherSymbol;
use serde::{Deserialize, Serialize};

use crate::{Forecast, ForecastError};

/// Weather as served to the clouds sketch.
///
/// An unavailable report carries no hours or days; the sketch then skips
/// everything weather-dependent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub available: bool,
    pub hours: Vec<HourlyReport>,
    pub days: Vec<DailyReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyReport {
    pub time: String,
    pub cloud_cover: f32,
    pub temperature: f32,
    pub symbol: WeatherSymbol,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: String,
    pub sunrise: String,
    pub sunset: String,
}

impl WeatherReport {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn from_forecast(forecast: &Forecast) -> Result<Self, ForecastError> {
        forecast.validate()?;

        let hours = forecast
            .hourly
            .samples()
            .map(|(time, sample)| HourlyReport {
                time: time.to_owned(),
                cloud_cover: sample.cloud_cover,
                temperature: sample.temperature,
                symbol: WeatherSymbol::classify(sample),
            })
            .collect();

        let days = forecast
            .daily
            .iter()
            .flat_map(|daily| {
                daily
                    .time
                    .iter()
                    .zip(&daily.sunrise)
                    .zip(&daily.sunset)
                    .filter_map(|((date, sunrise), sunset)| {
                        Some(DailyReport {
                            date: date.clone(),
                            sunrise: sunrise.clone()?,
                            sunset: sunset.clone()?,
                        })
                    })
            })
            .collect();

        Ok(Self {
            available: true,
            hours,
            days,
        })
    }

    /// Mean cloud cover over the report, `None` when there is no hourly data.
    pub fn mean_cloud_cover(&self) -> Option<f32> {
        if self.hours.is_empty() {
            return None;
        }
        let total: f32 = self.hours.iter().map(|hour| hour.cloud_cover).sum();
        Some(total / self.hours.len() as f32)
    }
}
