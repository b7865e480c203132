use serde::{Serialize, de::DeserializeOwned};

use crate::http_utils::jobs_api_config::{get_jobs_api_base_url, get_jobs_api_cache_ttl, get_jobs_api_client};
use crate::http_utils::response_cache::{request_cache_key, shared_response_cache};

/// GET `{JOBS_API_URL}{path}` with query params, through the response cache.
pub async fn jobs_api_get<T: DeserializeOwned>(path: &str, params: &[(String, String)]) -> anyhow::Result<T> {
    jobs_api_get_from(&get_jobs_api_base_url(), path, params).await
}

pub async fn jobs_api_get_from<T: DeserializeOwned>(base_url: &str, path: &str, params: &[(String, String)]) -> anyhow::Result<T> {
    let url = format!("{}{}", base_url, path);
    let cache_key = request_cache_key(&url, params);
    let ttl = get_jobs_api_cache_ttl();

    let cached = match shared_response_cache().lock() {
        Ok(cache) => cache.get(&cache_key, ttl, std::time::Instant::now()),
        Err(_) => None,
    };
    if let Some(body) = cached {
        if let Ok(response) = serde_json::from_str::<T>(&body) {
            tracing::debug!("JOBS API CACHE HIT: {}", cache_key);
            return Ok(response);
        }
    }
    tracing::debug!("JOBS API CACHE MISS: {}", cache_key);

    let t0 = std::time::Instant::now();
    let client = get_jobs_api_client()?;
    let response = client.get(&url).query(params).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis();
    tracing::info!("GET {} -> {} ({} bytes, {}ms)", url, status, response_txt.len(), dt_ms);

    let parsed: T = serde_json::from_str(&response_txt)?;
    if let Ok(mut cache) = shared_response_cache().lock() {
        let now = std::time::Instant::now();
        cache.evict_expired(ttl, now);
        cache.insert(cache_key, response_txt, now);
    }
    Ok(parsed)
}

/// Sends `body` as JSON with `method`. Any write drops the cached listings.
pub async fn jobs_api_send_json<B: Serialize, T: DeserializeOwned>(method: reqwest::Method, path: &str, body: &B) -> anyhow::Result<T> {
    let url = format!("{}{}", get_jobs_api_base_url(), path);
    let client = get_jobs_api_client()?;
    let response = client.request(method.clone(), &url).body(serde_json::to_string(body)?).header("Content-Type", "application/json").send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    tracing::info!("{} {} -> {}", method, url, status);
    invalidate_cached_responses();
    let parsed: T = serde_json::from_str(&response_txt)?;
    Ok(parsed)
}

pub async fn jobs_api_delete(path: &str) -> anyhow::Result<()> {
    let url = format!("{}{}", get_jobs_api_base_url(), path);
    let client = get_jobs_api_client()?;
    let response = client.delete(&url).send().await?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let response_txt = response.text().await.unwrap_or_default();
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    tracing::info!("DELETE {} -> {}", url, status);
    invalidate_cached_responses();
    Ok(())
}

fn invalidate_cached_responses() {
    if let Ok(mut cache) = shared_response_cache().lock() {
        cache.clear();
    }
}
