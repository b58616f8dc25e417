//! The seam between the CLI and the DomRobot backend.
//!
//! A [`Connector`] opens an authenticated [`Session`]; the session performs
//! raw calls and is closed exactly once. [`with_session`] ties the two
//! together so the close step runs whatever the task returned.

use std::fmt;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use inwx_types::Params;
use serde_json::Value;
use tracing::debug;

use crate::ApiError;

/// Connection settings for one account.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub shared_secret: Option<String>,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("shared_secret", &self.shared_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Opens authenticated sessions.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Logs in (and unlocks two-factor accounts).
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] with the login response when the server rejects
    /// the credentials, [`ApiError::Transport`] when it cannot be reached.
    async fn open(&self, config: &SessionConfig) -> Result<Box<dyn Session>, ApiError>;
}

/// An authenticated DomRobot session.
#[async_trait]
pub trait Session: Send {
    /// Performs one raw call and returns the decoded response body without
    /// interpreting its status code.
    async fn call(&mut self, method: &str, params: &Params) -> Result<Value, ApiError>;

    /// Logs out, consuming the session.
    async fn close(self: Box<Self>) -> Result<(), ApiError>;
}

/// Result of a task run inside a scoped session.
#[derive(Debug)]
pub struct Scoped<T> {
    pub outcome: Result<T, ApiError>,
    /// Set when the session could not be closed cleanly.
    pub close_warning: Option<ApiError>,
}

/// Opens a session, runs `task` against it and always closes it afterwards.
///
/// Opening failures are returned directly and nothing is closed. Once open,
/// the task's outcome is kept as-is and a failing close is reported
/// separately in [`Scoped::close_warning`].
pub async fn with_session<T, F>(connector: &dyn Connector, config: &SessionConfig, task: F) -> Result<Scoped<T>, ApiError>
where
    F: for<'s> FnOnce(&'s mut dyn Session) -> BoxFuture<'s, Result<T, ApiError>>,
{
    let mut session = connector.open(config).await?;
    debug!(endpoint = %config.endpoint, "session opened");

    let outcome = task(session.as_mut()).await;

    let close_warning = match session.close().await {
        Ok(()) => None,
        Err(error) => {
            debug!(%error, "failed to close DomRobot session");
            Some(error)
        }
    };

    Ok(Scoped { outcome, close_warning })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct Journal(Mutex<Vec<String>>);

    impl Journal {
        fn push(&self, entry: impl Into<String>) {
            self.0.lock().unwrap().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct StubConnector {
        journal: Arc<Journal>,
        reject_login: bool,
        fail_close: bool,
    }

    struct StubSession {
        journal: Arc<Journal>,
        fail_close: bool,
    }

    #[async_trait]
    impl Connector for StubConnector {
        async fn open(&self, config: &SessionConfig) -> Result<Box<dyn Session>, ApiError> {
            self.journal.push(format!("open {}", config.username));
            if self.reject_login {
                return Err(ApiError::Auth(json!({"code": 2200, "msg": "Authentication error"})));
            }
            Ok(Box::new(StubSession {
                journal: self.journal.clone(),
                fail_close: self.fail_close,
            }))
        }
    }

    #[async_trait]
    impl Session for StubSession {
        async fn call(&mut self, method: &str, _params: &Params) -> Result<Value, ApiError> {
            self.journal.push(format!("call {method}"));
            Ok(json!({"code": 1000}))
        }

        async fn close(self: Box<Self>) -> Result<(), ApiError> {
            self.journal.push("close");
            if self.fail_close {
                Err(ApiError::Close(json!({"code": 2400})))
            } else {
                Ok(())
            }
        }
    }

    fn config() -> SessionConfig {
        SessionConfig {
            endpoint: "https://api.domrobot.com/jsonrpc/".into(),
            username: "alice".into(),
            password: "hunter2".into(),
            shared_secret: Some("JBSWY3DPEHPK3PXP".into()),
        }
    }

    fn connector(reject_login: bool, fail_close: bool) -> (StubConnector, Arc<Journal>) {
        let journal = Arc::new(Journal::default());
        let connector = StubConnector {
            journal: journal.clone(),
            reject_login,
            fail_close,
        };
        (connector, journal)
    }

    #[tokio::test]
    async fn closes_after_successful_task() {
        let (connector, journal) = connector(false, false);
        let scoped = with_session(&connector, &config(), |session| {
            Box::pin(async move { session.call("domain.check", &Params::new()).await })
        })
        .await
        .expect("open");

        assert!(scoped.outcome.is_ok());
        assert!(scoped.close_warning.is_none());
        assert_eq!(journal.entries(), vec!["open alice", "call domain.check", "close"]);
    }

    #[tokio::test]
    async fn closes_after_failed_task() {
        let (connector, journal) = connector(false, false);
        let scoped: Scoped<()> = with_session(&connector, &config(), |_session| {
            Box::pin(async { Err(ApiError::transport("boom")) })
        })
        .await
        .expect("open");

        assert!(matches!(scoped.outcome, Err(ApiError::Transport { .. })));
        assert_eq!(journal.entries().last().map(String::as_str), Some("close"));
    }

    #[tokio::test]
    async fn close_failure_is_reported_without_replacing_outcome() {
        let (connector, _journal) = connector(false, true);
        let scoped = with_session(&connector, &config(), |_session| Box::pin(async { Ok(42) }))
            .await
            .expect("open");

        assert_eq!(scoped.outcome.ok(), Some(42));
        assert!(matches!(scoped.close_warning, Some(ApiError::Close(_))));
    }

    #[tokio::test]
    async fn failed_open_runs_nothing() {
        let (connector, journal) = connector(true, false);
        let result = with_session(&connector, &config(), |_session| Box::pin(async { Ok(()) })).await;

        assert!(matches!(result, Err(ApiError::Auth(_))));
        assert_eq!(journal.entries(), vec!["open alice"]);
    }

    #[test]
    fn debug_redacts_secrets() {
        let rendered = format!("{:?}", config());
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("JBSWY3DPEHPK3PXP"));
    }
}
