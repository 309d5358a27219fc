//! Secret access helpers.
//!
//! Secrets are injected into the environment by the platform before the
//! process starts. Values are read on every call and never logged or stored.

use tracing::debug;

use crate::error::{Error, Result};
use crate::io::env::{Environment, ProcessEnv};

/// Secret accessor bound to an environment.
#[derive(Debug, Clone, Default)]
pub struct Secrets<E = ProcessEnv> {
    env: E,
}

impl Secrets<ProcessEnv> {
    pub fn from_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: Environment> Secrets<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Secret value, or `None` when not set. An empty value is still `Some`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.env.var(name)
    }

    /// Secret value, or [`Error::SecretUnavailable`] naming the secret.
    pub fn require(&self, name: &str) -> Result<String> {
        self.get(name).ok_or_else(|| {
            debug!(secret = name, "required secret missing");
            Error::SecretUnavailable {
                name: name.to_string(),
            }
        })
    }
}

/// Get a secret from the process environment. Returns `None` if not set.
pub fn get_secret(name: &str) -> Option<String> {
    Secrets::from_env().get(name)
}

/// Get a secret from the process environment, failing if it is not set.
pub fn require_secret(name: &str) -> Result<String> {
    Secrets::from_env().require(name)
}
