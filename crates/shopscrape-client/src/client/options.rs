//! Construction-time configuration for [`super::CatalogClient`].
//!
//! Options are independent modifiers applied in order on top of
//! [`ClientConfig::default`]; a later option touching the same field wins.

use std::fmt;
use std::time::Duration;

/// Largest page size the platform honours for listing endpoints.
pub const MAX_PAGE_SIZE: u32 = 250;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause between consecutive page requests of one paginated fetch.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(100);

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// URL scheme used to reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Https,
    /// Plain HTTP, for local mock servers.
    Http,
}

impl Scheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved client settings. Read-only once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub(super) timeout: Duration,
    pub(super) user_agent: String,
    pub(super) page_size: u32,
    pub(super) page_delay: Duration,
    pub(super) scheme: Scheme,
    pub(super) max_pages: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            page_size: MAX_PAGE_SIZE,
            page_delay: DEFAULT_PAGE_DELAY,
            scheme: Scheme::Https,
            max_pages: None,
        }
    }
}

impl ClientConfig {
    /// Applies `options` in order on top of the defaults.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let mut config = Self::default();
        for option in options {
            option(&mut config);
        }
        config
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn page_delay(&self) -> Duration {
        self.page_delay
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Page ceiling for paginated fetches; `None` means unbounded.
    #[must_use]
    pub fn max_pages(&self) -> Option<usize> {
        self.max_pages
    }
}

/// A single configuration modifier.
pub type ClientOption = Box<dyn FnOnce(&mut ClientConfig) + Send>;

/// Sets the per-request timeout.
#[must_use]
pub fn with_timeout(timeout: Duration) -> ClientOption {
    Box::new(move |c| c.timeout = timeout)
}

/// Sets the `User-Agent` header value.
#[must_use]
pub fn with_user_agent(user_agent: impl Into<String>) -> ClientOption {
    let user_agent = user_agent.into();
    Box::new(move |c| c.user_agent = user_agent)
}

/// Sets the listing page size, clamped to [`MAX_PAGE_SIZE`].
#[must_use]
pub fn with_page_size(page_size: u32) -> ClientOption {
    Box::new(move |c| c.page_size = page_size.min(MAX_PAGE_SIZE))
}

/// Sets the pause between page requests. `Duration::ZERO` disables it.
#[must_use]
pub fn with_page_delay(delay: Duration) -> ClientOption {
    Box::new(move |c| c.page_delay = delay)
}

#[must_use]
pub fn with_scheme(scheme: Scheme) -> ClientOption {
    Box::new(move |c| c.scheme = scheme)
}

/// Fails a paginated fetch that would request more than `max_pages` pages.
#[must_use]
pub fn with_max_pages(max_pages: usize) -> ClientOption {
    Box::new(move |c| c.max_pages = Some(max_pages))
}
