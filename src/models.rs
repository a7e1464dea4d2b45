use serde::{Deserialize, Serialize};

// /api/check-rate-limit response format
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateLimitStatus {
    pub rate_limited: bool,
    pub ip: String,
    pub limit_info: String, // "50 istek/1 saat"
    pub timestamp: String,  // RFC 3339
}

// /health response format
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}
