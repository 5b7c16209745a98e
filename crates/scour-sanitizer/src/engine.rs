//! Pluggable sanitization engines.
//!
//! Some hosts ship a whitelist-capable sanitizer of their own; when one is
//! available and the resolved policy stays inside the feature set that
//! engine supports, the work can be handed to it. The contract that matters
//! is the fallback: any engine failure routes the call back through the
//! core pipeline unconditionally - an engine can lose work, never safety.

use scour_common::warning::warn_once;
use scour_html::Tokenizer;
use thiserror::Error;

use crate::filter::WhitelistFilter;
use crate::policy::Policy;

/// Failure reported by a native engine. Opaque to the caller; its only
/// effect is triggering the core fallback.
#[derive(Debug, Error)]
#[error("native engine failed: {reason}")]
pub struct EngineError {
    /// Engine-specific description of what went wrong.
    pub reason: String,
}

impl EngineError {
    /// Create an engine error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A host-provided sanitization engine.
pub trait SanitizerEngine {
    /// Can this engine faithfully enforce `policy`?
    ///
    /// The default answer is [`Policy::within_baseline`]: no schemes beyond
    /// the fixed http/https/mailto set, no class rules, no accept
    /// predicate, no text transform. Engines supporting more may widen it.
    fn supports(&self, policy: &Policy) -> bool {
        policy.within_baseline()
    }

    /// Sanitize `html` under `policy`.
    ///
    /// # Errors
    /// Any [`EngineError`] makes the caller fall back to the core pipeline.
    fn sanitize(&self, html: &str, policy: &Policy) -> Result<String, EngineError>;
}

/// A sanitizer bound to one policy, optionally fronted by a native engine.
pub struct Sanitizer {
    policy: Policy,
    engine: Option<Box<dyn SanitizerEngine>>,
}

impl Sanitizer {
    /// Create a sanitizer over `policy` with no native engine.
    #[must_use]
    pub const fn new(policy: Policy) -> Self {
        Self {
            policy,
            engine: None,
        }
    }

    /// Attach a native engine, consulted before the core pipeline.
    #[must_use]
    pub fn with_engine(mut self, engine: Box<dyn SanitizerEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// The policy this sanitizer enforces.
    #[must_use]
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Sanitize `html`, delegating to the native engine when it supports
    /// the policy and falling back to the core pipeline on any failure.
    #[must_use]
    pub fn sanitize(&self, html: &str) -> String {
        if let Some(engine) = &self.engine
            && engine.supports(&self.policy)
        {
            match engine.sanitize(html, &self.policy) {
                Ok(output) => return output,
                Err(error) => {
                    warn_once("Engine", &format!("{error}; falling back to core"));
                }
            }
        }
        WhitelistFilter::run(&self.policy, Tokenizer::new(html))
    }
}
