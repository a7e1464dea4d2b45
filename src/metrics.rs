use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("promo_requests_total", "Total number of page requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter =
        register_counter!("promo_rate_limited_total", "Page requests rejected by the rate limiter").unwrap();
    pub static ref CRAWLER_REQUESTS_TOTAL: Counter =
        register_counter!("promo_crawler_requests_total", "Page requests from search engine crawlers").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "promo_request_latency_seconds",
        "Page request latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_IDENTITIES: Gauge =
        register_gauge!("promo_tracked_identities", "Identities currently held by the rate limiter").unwrap();
}
