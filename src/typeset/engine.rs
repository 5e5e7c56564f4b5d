//! Engine initialization and readiness tracking.

use super::{Backend, Typesetter};
use crate::error::{RenderError, Result};
use std::fmt;

/// Initialization state of a typesetting engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Loading,
    Ready,
    Failed(String),
}

type Listener = Box<dyn Fn(&Readiness)>;

/// Owns a typesetter and its readiness.
///
/// Render requests are refused until the engine is [`Readiness::Ready`].
/// Loading is attempted at most once; a failed load stays failed.
pub struct Engine {
    readiness: Readiness,
    typesetter: Option<Box<dyn Typesetter>>,
    attempted: bool,
    listeners: Vec<Listener>,
}

impl Engine {
    /// An engine that has not been loaded yet.
    pub fn new() -> Self {
        Self {
            readiness: Readiness::Loading,
            typesetter: None,
            attempted: false,
            listeners: Vec::new(),
        }
    }

    /// An engine around a typesetter that needs no loading.
    pub fn ready(typesetter: Box<dyn Typesetter>) -> Self {
        Self {
            readiness: Readiness::Ready,
            typesetter: Some(typesetter),
            attempted: true,
            listeners: Vec::new(),
        }
    }

    pub fn readiness(&self) -> &Readiness {
        &self.readiness
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == Readiness::Ready
    }

    /// Register a callback invoked on every readiness transition.
    pub fn subscribe(&mut self, listener: impl Fn(&Readiness) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Load a backend. Calls after the first are no-ops.
    pub fn load(&mut self, backend: Backend) -> &Readiness {
        self.load_with(|| backend.load())
    }

    /// Run `loader` unless a load was already attempted.
    pub fn load_with<F>(&mut self, loader: F) -> &Readiness
    where
        F: FnOnce() -> Result<Box<dyn Typesetter>>,
    {
        if self.attempted {
            return &self.readiness;
        }
        self.attempted = true;

        match loader() {
            Ok(typesetter) => {
                tracing::info!(backend = typesetter.name(), "typesetting engine ready");
                self.typesetter = Some(typesetter);
                self.transition(Readiness::Ready);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load typesetting engine");
                self.transition(Readiness::Failed(err.to_string()));
            }
        }

        &self.readiness
    }

    /// The loaded typesetter.
    pub fn typesetter(&self) -> std::result::Result<&dyn Typesetter, RenderError> {
        match (&self.readiness, self.typesetter.as_deref()) {
            (Readiness::Ready, Some(typesetter)) => Ok(typesetter),
            _ => Err(RenderError::NotReady),
        }
    }

    fn transition(&mut self, next: Readiness) {
        self.readiness = next;
        for listener in &self.listeners {
            listener(&self.readiness);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("readiness", &self.readiness)
            .field("backend", &self.typesetter.as_ref().map(|t| t.name()))
            .finish()
    }
}
