//! Utility modules supporting the scraper.
//!
//! - [`HttpClient`]: shared HTTP client that identifies as a desktop browser
//! - [`resolve_url`]: resolve an image source against the page URL
//! - [`filename_from_url`]: last path segment of a URL
//!
//! # Resolving image sources
//!
//! ```rust
//! use url::Url;
//! use weimaraner_scraper::utils::{filename_from_url, resolve_url};
//!
//! let base = Url::parse("https://example.com/page/").unwrap();
//! let url = resolve_url(&base, "/img/x.jpg");
//! assert_eq!(url, "https://example.com/img/x.jpg");
//! assert_eq!(filename_from_url(&url), "x.jpg");
//! ```

mod http;
mod urls;

pub use http::{HttpClient, BROWSER_USER_AGENT, DEFAULT_TIMEOUT};
pub use urls::{filename_from_url, resolve_url};
