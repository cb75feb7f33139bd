//! Honeybadger API client library.
//!
//! Provides a typed client for the Honeybadger REST API (`/v2`): accounts,
//! check-ins, fault comments, dashboards, deploys, environments, status pages,
//! teams, and uptime sites.
//!
//! ```no_run
//! # async fn run() -> Result<(), badger_lib::Error> {
//! let client = badger_lib::Client::builder()
//!     .with_auth_token("my-personal-auth-token")
//!     .build()?;
//! let page = client.check_ins().list(12345).await?;
//! for check_in in &page.results {
//!     println!("{} ({})", check_in.name, check_in.slug);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod helpers;
pub mod query;
pub mod services;
pub mod types;

pub use client::{ApiRequest, Client, ClientBuilder, DEFAULT_BASE_URL};
pub use credentials::{resolve_auth_token, TokenSource};
pub use error::{ApiError, Error, ErrorsField};
pub use helpers::{format_timestamp_display, parse_timestamp};
pub use query::{
    DeploymentListOptions, ListOptions, OutageListOptions, TimeWindowOptions,
    UptimeCheckListOptions,
};
pub use reqwest::Method;
pub use types::{FlexibleId, ListResponse, Number, PaginationLinks};

/// Library version for User-Agent and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
