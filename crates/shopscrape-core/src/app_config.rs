/// Settings shared by every command, read from `SHOPSCRAPE_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// `None` keeps the client's built-in browser signature.
    pub user_agent: Option<String>,
    pub page_size: u32,
    pub page_delay_ms: u64,
    /// `None` leaves paginated fetches unbounded.
    pub max_pages: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            request_timeout_secs: 30,
            user_agent: None,
            page_size: 250,
            page_delay_ms: 100,
            max_pages: None,
        }
    }
}
