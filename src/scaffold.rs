//! Scaffold writer
//!
//! Walks the artifact tables in a fixed order (controllers, requests,
//! middleware, route files), ensuring each destination directory exists and
//! writing substituted stub output. Writes are unconditional: last write wins,
//! no backups, no prompts, so re-running for the same guard is idempotent in
//! output. Any I/O failure aborts the remaining writes immediately; files
//! written before the failure stay on disk.

use std::path::PathBuf;

use crate::error::GuardsmithResult;
use crate::fs::FileSystem;
use crate::naming::NamingPlan;
use crate::paths::ProjectPaths;
use crate::stubs::TemplateSource;
use crate::template::{substitute, token_map};

/// One scaffolded file: stub name plus its destination file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    pub name: &'static str,
    pub stub: &'static str,
}

const fn artifact(name: &'static str, stub: &'static str) -> Artifact {
    Artifact { name, stub }
}

const CONTROLLERS: &[Artifact] = &[
    artifact(
        "AuthenticatedSessionController.php",
        "controllers/AuthenticatedSessionController.stub",
    ),
    artifact(
        "ConfirmablePasswordController.php",
        "controllers/ConfirmablePasswordController.stub",
    ),
    artifact(
        "EmailVerificationNotificationController.php",
        "controllers/EmailVerificationNotificationController.stub",
    ),
    artifact(
        "EmailVerificationPromptController.php",
        "controllers/EmailVerificationPromptController.stub",
    ),
    artifact(
        "NewPasswordController.php",
        "controllers/NewPasswordController.stub",
    ),
    artifact(
        "PasswordResetLinkController.php",
        "controllers/PasswordResetLinkController.stub",
    ),
    artifact(
        "RegisteredUserController.php",
        "controllers/RegisteredUserController.stub",
    ),
    artifact(
        "VerifyEmailController.php",
        "controllers/VerifyEmailController.stub",
    ),
];

const REQUESTS: &[Artifact] = &[
    artifact("LoginRequest.php", "requests/LoginRequest.stub"),
    artifact(
        "EmailVerificationRequest.php",
        "requests/EmailVerificationRequest.stub",
    ),
];

const MIDDLEWARE: &[Artifact] = &[artifact(
    "EnsureEmailIsVerified.php",
    "middleware/EnsureEmailIsVerified.stub",
)];

/// Names of the artifacts that exist only with email verification enabled
const VERIFICATION_ONLY: &[&str] = &[
    "EmailVerificationNotificationController.php",
    "EmailVerificationPromptController.php",
    "VerifyEmailController.php",
    "EmailVerificationRequest.php",
    "EnsureEmailIsVerified.php",
];

/// Selects which artifact lists apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSet {
    pub email_verification: bool,
}

impl FeatureSet {
    /// Full artifact library, email verification included
    pub fn full() -> Self {
        Self {
            email_verification: true,
        }
    }

    /// Reduced library without the email-verification artifacts
    pub fn without_email_verification() -> Self {
        Self {
            email_verification: false,
        }
    }

    fn keep(&self, artifact: &Artifact) -> bool {
        self.email_verification || !VERIFICATION_ONLY.contains(&artifact.name)
    }

    fn auth_routes_stub(&self) -> &'static str {
        if self.email_verification {
            "routes/auth.stub"
        } else {
            "routes/auth-legacy.stub"
        }
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::full()
    }
}

/// Files written by one install run, project-relative
#[derive(Debug, Clone, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
}

/// Writes the scaffold for one guard into a project tree
pub struct Scaffolder<'a, F: FileSystem, T: TemplateSource> {
    fs: &'a F,
    templates: &'a T,
    paths: &'a ProjectPaths,
    features: FeatureSet,
}

impl<'a, F: FileSystem, T: TemplateSource> Scaffolder<'a, F, T> {
    pub fn new(fs: &'a F, templates: &'a T, paths: &'a ProjectPaths, features: FeatureSet) -> Self {
        Self {
            fs,
            templates,
            paths,
            features,
        }
    }

    /// Materialize every artifact set for the plan, in order.
    ///
    /// Stops at the first I/O failure; the report only reaches the caller on
    /// full success, but files written before a failure remain on disk.
    pub fn install(&self, plan: &NamingPlan) -> GuardsmithResult<WriteReport> {
        let tokens = token_map(plan);
        let mut report = WriteReport::default();

        self.write_set(&plan.controller_dir, CONTROLLERS, &tokens, &mut report)?;
        self.write_set(&plan.request_dir, REQUESTS, &tokens, &mut report)?;
        self.write_middleware(&tokens, &mut report)?;
        self.write_routes(plan, &tokens, &mut report)?;

        Ok(report)
    }

    fn write_set(
        &self,
        dir: &std::path::Path,
        artifacts: &[Artifact],
        tokens: &[(&str, String)],
        report: &mut WriteReport,
    ) -> GuardsmithResult<()> {
        self.fs.create_dir_all(&self.paths.join(dir))?;

        for artifact in artifacts.iter().filter(|a| self.features.keep(a)) {
            let relative = dir.join(artifact.name);
            self.write_one(artifact.stub, &relative, tokens, report)?;
        }

        Ok(())
    }

    fn write_middleware(
        &self,
        tokens: &[(&str, String)],
        report: &mut WriteReport,
    ) -> GuardsmithResult<()> {
        let artifacts: Vec<_> = MIDDLEWARE
            .iter()
            .filter(|a| self.features.keep(a))
            .collect();
        if artifacts.is_empty() {
            return Ok(());
        }

        self.fs.create_dir_all(&self.paths.middleware_dir())?;

        for artifact in artifacts {
            let relative = PathBuf::from("app/Http/Middleware").join(artifact.name);
            self.write_one(artifact.stub, &relative, tokens, report)?;
        }

        Ok(())
    }

    fn write_routes(
        &self,
        plan: &NamingPlan,
        tokens: &[(&str, String)],
        report: &mut WriteReport,
    ) -> GuardsmithResult<()> {
        self.fs.create_dir_all(&self.paths.routes_dir())?;

        let guard_routes = PathBuf::from("routes").join(&plan.routes_file_name);
        self.write_one(self.features.auth_routes_stub(), &guard_routes, tokens, report)?;

        // The shared entry file is rewritten for every guard, not just "web".
        // Installing a second guard replaces the previous guard's copy.
        let entry = PathBuf::from("routes/web.php");
        self.write_one("routes/web.stub", &entry, tokens, report)?;

        Ok(())
    }

    fn write_one(
        &self,
        stub: &str,
        relative: &std::path::Path,
        tokens: &[(&str, String)],
        report: &mut WriteReport,
    ) -> GuardsmithResult<()> {
        let template = self.templates.read(stub)?;
        let output = substitute(&template, tokens);
        self.fs.write(&self.paths.join(relative), &output)?;
        report.written.push(relative.to_path_buf());
        Ok(())
    }
}
