//! Environment abstraction.
//!
//! The [`Environment`] trait decouples lookups from the real process
//! environment. Tests pass a map instead of mutating global process state.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Read-only name-to-value lookup.
pub trait Environment {
    /// Value of `name`, or `None` when unset. Lookup is exact and case-sensitive.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Present but non-UTF-8 is still present.
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl<E: Environment + ?Sized> Environment for Arc<E> {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
