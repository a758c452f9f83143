//! Client for the third-party forecast provider feeding the clouds sketch.

use actix_web::{HttpResponse, web};
use atelier_protocol::{DAILY_FIELDS, Forecast, ForecastError, HOURLY_FIELDS, WeatherReport};
use std::time::Duration;
use thiserror::Error;

use crate::AppState;
use crate::config::WeatherArgs;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed forecast: {0}")]
    Malformed(#[from] ForecastError),
}

#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    url: String,
    latitude: f64,
    longitude: f64,
}

impl WeatherClient {
    pub fn new(args: &WeatherArgs) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(concat!("atelier/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            url: args.url.clone(),
            latitude: args.latitude,
            longitude: args.longitude,
        })
    }

    pub async fn fetch_forecast(&self) -> Result<Forecast, WeatherError> {
        let forecast = self
            .http
            .get(&self.url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_owned()),
                ("daily", DAILY_FIELDS.to_owned()),
                ("timezone", "auto".to_owned()),
                ("forecast_days", "1".to_owned()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<Forecast>()
            .await?;
        Ok(forecast)
    }

    /// Current report, or an unavailable one when the provider cannot be
    /// reached or answers with something unusable.
    pub async fn report(&self) -> WeatherReport {
        let report = match self.fetch_forecast().await {
            Ok(forecast) => WeatherReport::from_forecast(&forecast).map_err(WeatherError::from),
            Err(err) => Err(err),
        };
        match report {
            Ok(report) => {
                log::debug!("weather report with {} hours", report.hours.len());
                report
            }
            Err(err) => {
                log::warn!("weather unavailable: {err}");
                WeatherReport::unavailable()
            }
        }
    }
}

pub async fn get_weather(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.weather.report().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpServer, test};
    use std::path::PathBuf;

    const FORECAST: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.41,
        "hourly": {
            "time": ["2026-10-16T10:00", "2026-10-16T11:00"],
            "temperature_2m": [11.0, 12.5],
            "precipitation": [0.0, 0.0],
            "cloud_cover": [80, 20]
        },
        "daily": {"time": ["2026-10-16"], "sunrise": ["07:31"], "sunset": ["18:12"]}
    }"#;

    const TRUNCATED: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.41,
        "hourly": {
            "time": ["2026-10-16T10:00", "2026-10-16T11:00"],
            "temperature_2m": [11.0],
            "precipitation": [0.0, 0.0],
            "cloud_cover": [80, 20]
        }
    }"#;

    /// Spawns a stand-in provider and returns its forecast URL.
    fn provider(body: &'static str) -> (String, actix_web::dev::ServerHandle) {
        let server = HttpServer::new(move || {
            App::new().route(
                "/v1/forecast",
                web::get().to(move || async move {
                    HttpResponse::Ok()
                        .content_type("application/json")
                        .body(body)
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        (format!("http://{addr}/v1/forecast"), handle)
    }

    fn client(url: String) -> WeatherClient {
        WeatherClient::new(&WeatherArgs {
            url,
            timeout_secs: 5,
            ..WeatherArgs::default()
        })
        .unwrap()
    }

    #[actix_web::test]
    async fn builds_report_from_provider() {
        let (url, handle) = provider(FORECAST);

        let report = client(url).report().await;
        handle.stop(false).await;

        assert!(report.available);
        assert_eq!(report.hours.len(), 2);
        assert_eq!(report.days[0].sunrise, "07:31");
        assert_eq!(report.mean_cloud_cover(), Some(50.0));
    }

    #[actix_web::test]
    async fn truncated_payload_degrades() {
        let (url, handle) = provider(TRUNCATED);

        let client = client(url);
        let err = client.fetch_forecast().await.map(|f| f.validate());
        let report = client.report().await;
        handle.stop(false).await;

        assert!(matches!(err, Ok(Err(ForecastError::HourlyLength { .. }))));
        assert_eq!(report, WeatherReport::unavailable());
    }

    #[actix_web::test]
    async fn unreachable_provider_degrades() {
        // nothing listens on the discard port
        let client = client("http://127.0.0.1:9/v1/forecast".to_owned());
        assert!(client.fetch_forecast().await.is_err());

        let state = web::Data::new(AppState::new(PathBuf::from("."), client));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(crate::routes::config),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/weather").to_request();
        let report: WeatherReport = test::call_and_read_body_json(&app, req).await;

        assert!(!report.available);
        assert!(report.hours.is_empty());
    }
}
