//! Config resolver
//!
//! Validates that the requested guard and password broker exist in the host
//! auth configuration and resolves the guard's user model. Read-only; runs
//! before any file is written so a bad guard name never scaffolds anything.

use serde::Serialize;

use crate::auth_config::AuthConfig;
use crate::error::{GuardsmithError, GuardsmithResult};

/// The guard/broker pair requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardIdentity {
    pub guard: String,
    pub broker: String,
}

impl GuardIdentity {
    pub fn new(guard: impl Into<String>, broker: impl Into<String>) -> Self {
        Self {
            guard: guard.into(),
            broker: broker.into(),
        }
    }
}

/// The guard's provider and the model it points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedModel {
    /// Provider name from `auth.guards.{guard}.provider`
    pub provider: String,

    /// Fully-qualified model identifier, e.g. `App\Models\User`
    pub model_fqcn: String,

    /// Short class name, the final `\`-separated segment of `model_fqcn`
    pub model_class: String,
}

/// Resolve the guard's user model, failing fast on configuration gaps.
///
/// Errors:
/// - [`GuardsmithError::MissingGuardOrBroker`] when either name is absent
/// - [`GuardsmithError::UnsupportedProvider`] when the provider has no model
pub fn resolve(config: &AuthConfig, identity: &GuardIdentity) -> GuardsmithResult<ResolvedModel> {
    let guard = config
        .guard(&identity.guard)
        .filter(|_| config.broker(&identity.broker).is_some())
        .ok_or_else(|| GuardsmithError::MissingGuardOrBroker {
            guard: identity.guard.clone(),
            broker: identity.broker.clone(),
        })?;

    let provider = guard.provider.clone();
    let model_fqcn = config
        .provider_model(&provider)
        .ok_or_else(|| GuardsmithError::UnsupportedProvider {
            guard: identity.guard.clone(),
            provider: provider.clone(),
        })?
        .to_string();

    let model_class = model_fqcn
        .rsplit('\\')
        .next()
        .unwrap_or(model_fqcn.as_str())
        .to_string();

    Ok(ResolvedModel {
        provider,
        model_fqcn,
        model_class,
    })
}
