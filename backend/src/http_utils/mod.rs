pub mod jobs_api_config;
pub mod response_cache;
pub mod jobs_api_client;
