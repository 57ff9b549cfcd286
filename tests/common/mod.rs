//! Shared helpers for integration tests

use std::fs;
use std::path::Path;

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_guardsmith")
}

/// Lay down a target project with a `config/auth.toml`
pub fn write_auth_config(project: &Path, toml: &str) {
    fs::create_dir_all(project.join("config")).unwrap();
    fs::write(project.join("config/auth.toml"), toml).unwrap();
}

pub const TWO_GUARD_CONFIG: &str = r#"
[guards.web]
driver = "session"
provider = "users"

[guards.admin]
driver = "session"
provider = "admins"

[providers.users]
driver = "eloquent"
model = 'App\Models\User'

[providers.admins]
driver = "eloquent"
model = 'App\Models\Admin'

[passwords.users]
provider = "users"

[passwords.admins]
provider = "admins"
"#;
