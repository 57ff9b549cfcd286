//! Guardsmith CLI - multi-guard auth scaffolding generator
//!
//! Usage: guardsmith <COMMAND>
//!
//! Commands:
//!   install  Scaffold auth controllers, requests, middleware and routes
//!   plan     Show the derived naming plan without writing anything

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use guardsmith::scaffold::{FeatureSet, Scaffolder};
use guardsmith::stubs::{DirStubs, EmbeddedStubs, TemplateSource};
use guardsmith::{resolve, AuthConfig, GuardIdentity, GuardsmithError, LocalFs, ProjectPaths};

/// Guardsmith - multi-guard auth scaffolding generator
#[derive(Parser, Debug)]
#[command(name = "guardsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit machine-readable JSON events
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GuardArgs {
    /// Name of the auth guard to scaffold
    #[arg(default_value = "web")]
    guard: String,

    /// Name of the password broker
    #[arg(default_value = "users")]
    passwords: String,

    /// Target project root
    #[arg(short, long, default_value = ".")]
    project: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffold auth controllers, requests, middleware and routes for a guard
    Install {
        #[command(flatten)]
        guard: GuardArgs,

        /// Read stubs from a directory instead of the embedded library
        #[arg(long)]
        stubs: Option<PathBuf>,

        /// Omit the email-verification controllers, request and middleware
        #[arg(long)]
        without_email_verification: bool,
    },

    /// Show the derived naming plan without writing anything
    Plan {
        #[command(flatten)]
        guard: GuardArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install {
            ref guard,
            ref stubs,
            without_email_verification,
        } => cmd_install(guard, stubs.as_deref(), without_email_verification, cli.json),
        Commands::Plan { ref guard } => cmd_plan(guard, cli.json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("✗ Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve the guard against the project's auth config, reporting validation
/// failures as warnings with a remediation hint and a non-zero exit.
fn validate(
    paths: &ProjectPaths,
    identity: &GuardIdentity,
    json: bool,
) -> Result<Result<guardsmith::ResolvedModel, ExitCode>> {
    let config = AuthConfig::load(&paths.auth_config_file())?;

    match resolve(&config, identity) {
        Ok(resolved) => Ok(Ok(resolved)),
        Err(
            err @ (GuardsmithError::MissingGuardOrBroker { .. }
            | GuardsmithError::UnsupportedProvider { .. }),
        ) => {
            if json {
                let event = serde_json::json!({
                    "event": "validation",
                    "status": "failed",
                    "reason": err.to_string(),
                });
                println!("{}", serde_json::to_string(&event)?);
            } else {
                eprintln!("⚠ {err}");
                eprintln!("Please update your config/auth.toml file before continuing.");
            }
            Ok(Err(ExitCode::FAILURE))
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_install(
    args: &GuardArgs,
    stubs_dir: Option<&std::path::Path>,
    without_email_verification: bool,
    json: bool,
) -> Result<ExitCode> {
    let paths = ProjectPaths::new(&args.project);
    let identity = GuardIdentity::new(&args.guard, &args.passwords);

    if !json {
        println!("🛡 Guardsmith Install");
        println!("Guard: {}", args.guard);
        println!("Broker: {}", args.passwords);
        println!("Project: {}", args.project.display());
    }

    let resolved = match validate(&paths, &identity, json)? {
        Ok(resolved) => resolved,
        Err(code) => return Ok(code),
    };

    let plan = guardsmith::derive_plan(&identity.guard, &identity.broker, &resolved);

    let features = if without_email_verification {
        FeatureSet::without_email_verification()
    } else {
        FeatureSet::full()
    };

    let fs = LocalFs::new();
    let report = match stubs_dir {
        Some(dir) => {
            let templates = DirStubs::new(dir);
            install_with(&fs, &templates, &paths, features, &plan)?
        }
        None => {
            let templates = EmbeddedStubs::new();
            install_with(&fs, &templates, &paths, features, &plan)?
        }
    };

    if json {
        let event = serde_json::json!({
            "event": "install",
            "status": "success",
            "guard": identity.guard,
            "written": report.written.len(),
            "files": report
                .written
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!();
        println!("✓ Written: {} files", report.written.len());
        for path in &report.written {
            println!("  - {}", path.display());
        }
        println!();
        println!("Auth scaffolding installed successfully.");
    }

    Ok(ExitCode::SUCCESS)
}

fn install_with<T: TemplateSource>(
    fs: &LocalFs,
    templates: &T,
    paths: &ProjectPaths,
    features: FeatureSet,
    plan: &guardsmith::NamingPlan,
) -> Result<guardsmith::WriteReport> {
    let scaffolder = Scaffolder::new(fs, templates, paths, features);
    Ok(scaffolder.install(plan)?)
}

fn cmd_plan(args: &GuardArgs, json: bool) -> Result<ExitCode> {
    let paths = ProjectPaths::new(&args.project);
    let identity = GuardIdentity::new(&args.guard, &args.passwords);

    let resolved = match validate(&paths, &identity, json)? {
        Ok(resolved) => resolved,
        Err(code) => return Ok(code),
    };

    let plan = guardsmith::derive_plan(&identity.guard, &identity.broker, &resolved);

    if json {
        let event = serde_json::json!({
            "event": "plan",
            "model": resolved,
            "plan": plan,
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!("🛡 Guardsmith Plan");
        println!();
        println!("Guard: {}", plan.guard);
        println!("Broker: {}", plan.broker);
        println!("Model: {} ({})", resolved.model_fqcn, resolved.model_class);
        println!("Model table: {}", plan.model_table);
        println!();
        println!("Controller namespace: {}", plan.controller_namespace);
        println!("Controller directory: {}", plan.controller_dir.display());
        println!("Request namespace: {}", plan.request_namespace);
        println!("Request directory: {}", plan.request_dir.display());
        println!("View directory: {}", plan.view_dir.display());
        println!("View prefix: {}", plan.view_prefix);
        println!("Routes file: routes/{}", plan.routes_file_name);
        println!("Route prefix: {}", plan.route_prefix);
        println!("Route name prefix: {:?}", plan.route_name_prefix);
        println!("Guest middleware: guest{}", plan.route_guest_guard);
    }

    Ok(ExitCode::SUCCESS)
}
