//! WeatherAPI.com client

use serde::Deserialize;

use crate::state::WeatherReport;

const CURRENT_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Lookup error type
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("lookup returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Current-conditions response from WeatherAPI.com
#[derive(Debug, Deserialize)]
struct ApiResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

fn report_from_response(response: ApiResponse) -> WeatherReport {
    WeatherReport {
        temperature_c: response.current.temp_c,
        condition: response.current.condition.text,
        location_name: response.location.name,
    }
}

/// Fetch current conditions for a free-text location query
pub async fn fetch_current(api_key: &str, query: &str) -> Result<WeatherReport, LookupError> {
    let url = format!(
        "{CURRENT_URL}?key={}&q={}",
        api_key,
        urlencoding::encode(query)
    );

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status));
    }

    let data: ApiResponse = response.json().await?;
    Ok(report_from_response(data))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_report_mapping() {
        let body = r#"{
            "location": { "name": "London", "country": "United Kingdom" },
            "current": {
                "temp_c": 11.0,
                "condition": { "text": "Partly cloudy", "code": 1003 }
            }
        }"#;

        let parsed: ApiResponse = serde_json::from_str(body).unwrap();
        let report = report_from_response(parsed);

        assert_eq!(report.location_name, "London");
        assert_eq!(report.temperature_c, 11.0);
        assert_eq!(report.condition, "Partly cloudy");
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let body = r#"{ "error": { "code": 1006, "message": "No matching location found." } }"#;
        assert!(serde_json::from_str::<ApiResponse>(body).is_err());
    }
}
