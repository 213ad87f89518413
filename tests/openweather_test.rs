use std::time::Duration;

use anyhow::Result;
use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use agroweather_advisor::{aggregate, OpenWeatherClient, WeatherSource, WeatherSourceError};

// 2025-06-01T00:00:00Z
const JUNE_FIRST: i64 = 1_748_736_000;

async fn current(Query(params): Query<Vec<(String, String)>>) -> (StatusCode, Json<Value>) {
    // ---
    let has = |k: &str, v: &str| params.iter().any(|(pk, pv)| pk == k && pv == v);
    if !has("appid", "test-key") || !has("units", "metric") {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "cod": 401 })));
    }

    (
        StatusCode::OK,
        Json(json!({
            "weather": [{ "main": "Rain", "description": "moderate rain", "icon": "10d" }],
            "main": { "temp": 36.5, "feels_like": 40.2, "humidity": 82, "pressure": 1004 },
            "visibility": 6000,
            "wind": { "speed": 11.0 },
            "clouds": { "all": 90 },
            "rain": { "1h": 12.5 },
            "name": "Vijayawada"
        })),
    )
}

async fn forecast(Query(params): Query<Vec<(String, String)>>) -> Json<Value> {
    // ---
    assert!(params.iter().any(|(k, v)| k == "cnt" && v == "16"));

    // Eight 3-hour slots starting 2025-06-01 00:00 UTC, city at UTC+05:30.
    // Local dates: slots 0..=6 are June 1st, slot 7 (02:30 local) is June 2nd.
    let list: Vec<Value> = (0..8)
        .map(|i: i64| {
            let description = if i % 3 == 0 { "clear sky" } else { "few clouds" };
            let rain = if i == 7 { 1.5 } else { 0.0 };
            json!({
                "dt": JUNE_FIRST + i * 3 * 3600,
                "main": { "temp": 25.0 + i as f64, "humidity": 60 },
                "weather": [{ "description": description }],
                "rain": { "3h": rain }
            })
        })
        .collect();

    Json(json!({ "list": list, "city": { "name": "Vijayawada", "timezone": 19800 } }))
}

async fn broken_forecast() -> Json<Value> {
    Json(json!({ "cod": "200", "message": 0 }))
}

async fn spawn_upstream(app: Router) -> Result<String> {
    // ---
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok(format!("http://{}/data/2.5", addr))
}

fn client(base_url: String) -> OpenWeatherClient {
    OpenWeatherClient::new("test-key".to_string(), base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn maps_current_conditions() -> Result<()> {
    // ---
    let upstream = Router::new().route("/data/2.5/weather", get(current));
    let client = client(spawn_upstream(upstream).await?);

    let weather = client.fetch_current(16.5, 80.6).await?;
    assert_eq!(weather.temperature, 36.5);
    assert_eq!(weather.feels_like, 40.2);
    assert_eq!(weather.humidity, 82.0);
    assert_eq!(weather.wind_speed, 11.0);
    assert_eq!(weather.rain_1h, 12.5);
    assert_eq!(weather.visibility, 6.0);
    assert_eq!(weather.description, "moderate rain");
    assert_eq!(weather.location, "Vijayawada");

    Ok(())
}

#[tokio::test]
async fn forecast_days_follow_city_timezone() -> Result<()> {
    // ---
    let upstream = Router::new().route("/data/2.5/forecast", get(forecast));
    let client = client(spawn_upstream(upstream).await?);

    let intervals = client.fetch_forecast(16.5, 80.6, 2).await?;
    assert_eq!(intervals.len(), 8);

    let days = aggregate(&intervals, 2);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date.to_string(), "2025-06-01");
    assert_eq!(days[0].temp_min, 25.0);
    assert_eq!(days[0].temp_max, 31.0);
    assert_eq!(days[0].description, "few clouds");
    assert_eq!(days[0].rain_total, 0.0);
    assert_eq!(days[1].date.to_string(), "2025-06-02");
    assert_eq!(days[1].rain_total, 1.5);

    Ok(())
}

#[tokio::test]
async fn upstream_errors_are_reported() -> Result<()> {
    // ---
    let upstream = Router::new()
        .route("/data/2.5/weather", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/data/2.5/forecast", get(broken_forecast));
    let client = client(spawn_upstream(upstream).await?);

    assert!(matches!(
        client.fetch_current(0.0, 0.0).await,
        Err(WeatherSourceError::Http(_))
    ));
    assert!(matches!(
        client.fetch_forecast(0.0, 0.0, 5).await,
        Err(WeatherSourceError::Malformed(_))
    ));

    Ok(())
}
