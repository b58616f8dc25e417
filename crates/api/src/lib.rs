//! # INWX API
//!
//! Session handling and invocation for the INWX DomRobot JSON-RPC API.
//!
//! - [`Connector`] / [`Session`]: the boundary the CLI talks to; tests swap
//!   in stubs, production uses [`DomrobotConnector`].
//! - [`with_session`]: open, run, always close.
//! - [`invoke`]: one generic call for every registered method, classifying
//!   the response by its `code` field.
//!
//! ```no_run
//! use inwx_api::{DomrobotConnector, SessionConfig, invoke, with_session};
//! use inwx_types::Params;
//!
//! # async fn demo() -> Result<(), inwx_api::ApiError> {
//! let config = SessionConfig {
//!     endpoint: inwx_api::OTE_API_URL.to_string(),
//!     username: "alice".into(),
//!     password: "secret".into(),
//!     shared_secret: None,
//! };
//! let scoped = with_session(&DomrobotConnector::default(), &config, |session| {
//!     Box::pin(async move { invoke(session, "nameserver.list", &Params::new()).await })
//! })
//! .await?;
//! println!("{}", scoped.outcome?);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod invoke;
mod session;
pub mod totp;

pub use client::{API_URL_ENV, DEFAULT_API_URL, DomrobotConnector, DomrobotSession, OTE_API_URL, resolve_endpoint, validate_endpoint};
pub use error::ApiError;
pub use invoke::{invoke, invoke_request};
pub use session::{Connector, Scoped, Session, SessionConfig, with_session};
