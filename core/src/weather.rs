//! Weather conditions as the clouds sketch sees them.

use serde::{Deserialize, Serialize};

/// Precipitation in mm per hour from which an hour counts as wet.
pub const WET_THRESHOLD_MM: f32 = 0.1;
/// Cloud cover percentages separating the dry symbols.
pub const OVERCAST_COVER: f32 = 70.0;
pub const PARTLY_CLOUDY_COVER: f32 = 30.0;

/// One hour of forecast data.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Percent, `0..=100`.
    pub cloud_cover: f32,
    /// Millimetres.
    pub precipitation: f32,
    /// Degrees Celsius.
    pub temperature: f32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSymbol {
    Clear,
    PartlyCloudy,
    Overcast,
    Rain,
    Snow,
}

impl WeatherSymbol {
    pub fn classify(sample: WeatherSample) -> Self {
        use WeatherSymbol::*;
        if sample.precipitation >= WET_THRESHOLD_MM {
            if sample.temperature <= 0.0 { Snow } else { Rain }
        } else if sample.cloud_cover >= OVERCAST_COVER {
            Overcast
        } else if sample.cloud_cover >= PARTLY_CLOUDY_COVER {
            PartlyCloudy
        } else {
            Clear
        }
    }

    pub const fn glyph(self) -> char {
        use WeatherSymbol::*;
        match self {
            Clear => '☀',
            PartlyCloudy => '⛅',
            Overcast => '☁',
            Rain => '☂',
            Snow => '❄',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(cloud_cover: f32, precipitation: f32, temperature: f32) -> WeatherSample {
        WeatherSample {
            cloud_cover,
            precipitation,
            temperature,
        }
    }

    #[test]
    fn precipitation_wins_over_cover() {
        assert_eq!(WeatherSymbol::classify(sample(10.0, 0.4, 12.0)), WeatherSymbol::Rain);
        assert_eq!(WeatherSymbol::classify(sample(90.0, 1.2, -2.0)), WeatherSymbol::Snow);
        assert_eq!(WeatherSymbol::classify(sample(90.0, 0.5, 0.0)), WeatherSymbol::Snow);
    }

    #[test]
    fn dry_hours_follow_cover() {
        assert_eq!(WeatherSymbol::classify(sample(0.0, 0.0, 20.0)), WeatherSymbol::Clear);
        assert_eq!(WeatherSymbol::classify(sample(29.9, 0.05, 20.0)), WeatherSymbol::Clear);
        assert_eq!(
            WeatherSymbol::classify(sample(30.0, 0.0, 20.0)),
            WeatherSymbol::PartlyCloudy
        );
        assert_eq!(WeatherSymbol::classify(sample(70.0, 0.0, 5.0)), WeatherSymbol::Overcast);
    }

    #[test]
    fn symbols_serialize_in_snake_case() {
        let json = serde_json::to_string(&WeatherSymbol::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly_cloudy\"");
    }
}
