//! In-memory collaborators for driving `inwx::run` end to end.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use inwx::{CliContext, Prompter, run};
use inwx_api::{ApiError, Connector, Session, SessionConfig};
use inwx_registry::MethodRegistry;
use inwx_types::{Params, status};
use inwx_util::{SecretError, SecretKind, SecretStore};
use serde_json::{Value, json};
use tempfile::TempDir;

pub const STANDARD_CONFIG: &str = "default_account = \"main\"\n\n[main]\nusername = \"alice\"\n\n[work]\nusername = \"carol\"\n";

/// What the stub session answers to a regular call.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(Value),
    Transport(String),
}

#[derive(Debug, Default)]
pub struct CallLog {
    pub opened: Vec<SessionConfig>,
    pub calls: Vec<(String, Params)>,
    pub closed: usize,
}

pub struct StubConnector {
    pub login: Value,
    pub reply: Reply,
    pub logout: Value,
    pub log: Arc<Mutex<CallLog>>,
}

impl Default for StubConnector {
    fn default() -> Self {
        Self {
            login: json!({"code": 1000, "msg": "Command completed successfully"}),
            reply: Reply::Body(json!({"code": 1000, "msg": "Command completed successfully"})),
            logout: json!({"code": 1500, "msg": "Command completed successfully; ending session"}),
            log: Arc::default(),
        }
    }
}

struct StubSession {
    reply: Reply,
    logout: Value,
    log: Arc<Mutex<CallLog>>,
}

#[async_trait]
impl Connector for StubConnector {
    async fn open(&self, config: &SessionConfig) -> Result<Box<dyn Session>, ApiError> {
        self.log.lock().unwrap().opened.push(config.clone());
        if status::response_code(&self.login) != Some(status::SUCCESS) {
            return Err(ApiError::Auth(self.login.clone()));
        }
        Ok(Box::new(StubSession {
            reply: self.reply.clone(),
            logout: self.logout.clone(),
            log: self.log.clone(),
        }))
    }
}

#[async_trait]
impl Session for StubSession {
    async fn call(&mut self, method: &str, params: &Params) -> Result<Value, ApiError> {
        self.log.lock().unwrap().calls.push((method.to_string(), params.clone()));
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Transport(message) => Err(ApiError::transport(message.clone())),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), ApiError> {
        self.log.lock().unwrap().closed += 1;
        if status::response_code(&self.logout) == Some(status::LOGOUT_SUCCESS) {
            Ok(())
        } else {
            Err(ApiError::Close(self.logout.clone()))
        }
    }
}

#[derive(Default)]
pub struct MemorySecrets(RefCell<HashMap<(String, String), String>>);

fn slot(account: &str, kind: SecretKind) -> (String, String) {
    (account.to_string(), format!("{kind:?}"))
}

impl MemorySecrets {
    pub fn lookup(&self, account: &str, kind: SecretKind) -> Option<String> {
        self.0.borrow().get(&slot(account, kind)).cloned()
    }
}

impl SecretStore for MemorySecrets {
    fn get(&self, account: &str, kind: SecretKind) -> Result<Option<String>, SecretError> {
        Ok(self.lookup(account, kind))
    }

    fn set(&self, account: &str, kind: SecretKind, value: &str) -> Result<(), SecretError> {
        self.0.borrow_mut().insert(slot(account, kind), value.to_string());
        Ok(())
    }

    fn remove(&self, account: &str, kind: SecretKind) -> Result<(), SecretError> {
        self.0.borrow_mut().remove(&slot(account, kind));
        Ok(())
    }
}

/// Answers prompts from a script and fails once it runs dry.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    confirmations: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn answer(&self, answers: &[&str]) {
        self.answers.borrow_mut().extend(answers.iter().map(|a| a.to_string()));
    }

    pub fn confirm_with(&self, answer: bool) {
        self.confirmations.borrow_mut().push_back(answer);
    }

    fn next_answer(&self, prompt: &str) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer for '{prompt}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }

    fn secret(&self, prompt: &str, _allow_empty: bool) -> Result<String> {
        self.next_answer(prompt)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted confirmation for '{prompt}'"))
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub code: u8,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).expect("stdout is JSON")
    }
}

/// A temporary config directory plus stub collaborators.
pub struct Harness {
    pub dir: TempDir,
    pub registry: MethodRegistry,
    pub secrets: MemorySecrets,
    pub connector: StubConnector,
    pub prompter: ScriptedPrompter,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
            registry: MethodRegistry::builtin().expect("registry"),
            secrets: MemorySecrets::default(),
            connector: StubConnector::default(),
            prompter: ScriptedPrompter::default(),
        }
    }

    /// Harness with `main` (default) and `work` accounts, only `main` having
    /// a password.
    pub fn configured() -> Self {
        let harness = Self::new().with_config(STANDARD_CONFIG);
        harness.secrets.set("main", SecretKind::Password, "hunter2").unwrap();
        harness
    }

    pub fn with_config(self, content: &str) -> Self {
        let path = self.config_path();
        fs::create_dir_all(path.parent().expect("parent")).expect("config dir");
        fs::write(&path, content).expect("write config");
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("inwx").join("config.toml")
    }

    pub fn config_text(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }

    pub fn log(&self) -> std::sync::MutexGuard<'_, CallLog> {
        self.connector.log.lock().unwrap()
    }

    pub async fn run(&self, args: &[&str]) -> Outcome {
        let mut stderr = Vec::new();
        let (code, stdout) = self.run_with_stderr(args, &mut stderr).await;
        Outcome {
            code,
            stdout,
            stderr: String::from_utf8(stderr).expect("utf8 stderr"),
        }
    }

    /// Runs with a caller-supplied stderr, returning the code and stdout.
    pub async fn run_with_stderr(&self, args: &[&str], stderr: &mut dyn Write) -> (u8, String) {
        let ctx = CliContext {
            registry: &self.registry,
            config_path: self.config_path(),
            secrets: &self.secrets,
            connector: &self.connector,
            prompter: &self.prompter,
        };
        let mut stdout = Vec::new();
        let argv = std::iter::once("inwx").chain(args.iter().copied());
        let code = run(argv, &ctx, &mut stdout, stderr).await;
        (code, String::from_utf8(stdout).expect("utf8 stdout"))
    }

    /// Runs on a dedicated runtime, for use inside `temp_env` closures.
    pub fn run_blocking(&self, args: &[&str]) -> Outcome {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(self.run(args))
    }
}

/// A stderr that refuses every write.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn params(value: Value) -> Params {
    value.as_object().cloned().expect("object")
}
