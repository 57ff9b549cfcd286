//! Stub template library
//!
//! The stub files under `stubs/` ship inside the binary via `include_str!`.
//! A project can override them with `--stubs <dir>`, mirroring Laravel's
//! published-stub workflow; in that mode missing files surface as I/O errors.

use std::path::PathBuf;

use crate::error::{GuardsmithError, GuardsmithResult};

/// Source of stub template text, keyed by library-relative name
/// (e.g. `controllers/LoginRequest.stub`)
pub trait TemplateSource {
    fn read(&self, name: &str) -> GuardsmithResult<String>;
}

/// Embedded stub registry: (name, content)
const EMBEDDED: &[(&str, &str)] = &[
    (
        "controllers/AuthenticatedSessionController.stub",
        include_str!("../stubs/controllers/AuthenticatedSessionController.stub"),
    ),
    (
        "controllers/ConfirmablePasswordController.stub",
        include_str!("../stubs/controllers/ConfirmablePasswordController.stub"),
    ),
    (
        "controllers/EmailVerificationNotificationController.stub",
        include_str!("../stubs/controllers/EmailVerificationNotificationController.stub"),
    ),
    (
        "controllers/EmailVerificationPromptController.stub",
        include_str!("../stubs/controllers/EmailVerificationPromptController.stub"),
    ),
    (
        "controllers/NewPasswordController.stub",
        include_str!("../stubs/controllers/NewPasswordController.stub"),
    ),
    (
        "controllers/PasswordResetLinkController.stub",
        include_str!("../stubs/controllers/PasswordResetLinkController.stub"),
    ),
    (
        "controllers/RegisteredUserController.stub",
        include_str!("../stubs/controllers/RegisteredUserController.stub"),
    ),
    (
        "controllers/VerifyEmailController.stub",
        include_str!("../stubs/controllers/VerifyEmailController.stub"),
    ),
    (
        "requests/LoginRequest.stub",
        include_str!("../stubs/requests/LoginRequest.stub"),
    ),
    (
        "requests/EmailVerificationRequest.stub",
        include_str!("../stubs/requests/EmailVerificationRequest.stub"),
    ),
    (
        "middleware/EnsureEmailIsVerified.stub",
        include_str!("../stubs/middleware/EnsureEmailIsVerified.stub"),
    ),
    ("routes/auth.stub", include_str!("../stubs/routes/auth.stub")),
    (
        "routes/auth-legacy.stub",
        include_str!("../stubs/routes/auth-legacy.stub"),
    ),
    ("routes/web.stub", include_str!("../stubs/routes/web.stub")),
];

/// Compile-time stub library
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStubs;

impl EmbeddedStubs {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedStubs {
    fn read(&self, name: &str) -> GuardsmithResult<String> {
        EMBEDDED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, content)| (*content).to_string())
            .ok_or_else(|| GuardsmithError::TemplateNotFound {
                name: name.to_string(),
            })
    }
}

/// Filesystem-backed stub directory (published stubs)
#[derive(Debug, Clone)]
pub struct DirStubs {
    root: PathBuf,
}

impl DirStubs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirStubs {
    fn read(&self, name: &str) -> GuardsmithResult<String> {
        std::fs::read_to_string(self.root.join(name)).map_err(Into::into)
    }
}
