//! Reverse geocoding for job locations.
//!
//! Talks to the Google Maps geocode endpoint directly; this is not a
//! HireHub call and does not go through the dispatcher.

use serde::Deserialize;
use tracing::warn;

use crate::config::ClientConfig;

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}

/// Resolve coordinates to a formatted address.
///
/// Best-effort: returns `None` when the key is missing or the lookup
/// fails, so geocoding never blocks posting a job.
pub async fn reverse_geocode(config: &ClientConfig, lat: f64, lng: f64) -> Option<String> {
    let key = config.maps_api_key.as_deref()?;
    let url = format!("{GEOCODE_URL}?latlng={lat},{lng}&key={key}");

    let response = match reqwest::get(&url).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "reverse geocoding request failed");
            return None;
        }
    };

    let body: GeocodeResponse = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "malformed geocoding response");
            return None;
        }
    };

    if body.status != "OK" {
        warn!(status = %body.status, "reverse geocoding failed");
        return None;
    }

    body.results
        .into_iter()
        .next()
        .map(|result| result.formatted_address)
}
