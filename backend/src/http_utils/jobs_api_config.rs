use std::time::Duration;

pub fn get_jobs_api_base_url() -> String {
    std::env::var("JOBS_API_URL")
        .unwrap_or("http://127.0.0.1:8000/api".to_string())
        .trim_end_matches('/')
        .to_string()
}

pub fn get_jobs_api_timeout() -> Duration {
    let secs = std::env::var("JOBS_API_TIMEOUT_SECS").ok().and_then(|s| s.parse::<u64>().ok()).unwrap_or(30);
    Duration::from_secs(secs)
}

pub fn get_jobs_api_cache_ttl() -> Duration {
    let secs = std::env::var("JOBS_API_CACHE_TTL_SECS").ok().and_then(|s| s.parse::<u64>().ok()).unwrap_or(60);
    Duration::from_secs(secs)
}

pub fn get_jobs_api_client() -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder().timeout(get_jobs_api_timeout()).build()?;
    Ok(client)
}
