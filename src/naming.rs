//! Convention deriver
//!
//! Maps a guard name into the full bundle of naming and path conventions used
//! by the scaffolder (the [`NamingPlan`]). Pure and deterministic: no I/O, no
//! validation. A single discriminant drives every field — the guard `"web"`
//! gets the bare default conventions, every other guard gets the
//! guard-qualified ones. There are no per-field exceptions to that rule.

use std::path::PathBuf;

use serde::Serialize;

use crate::resolver::ResolvedModel;

/// Sentinel guard that receives the unqualified default conventions
pub const DEFAULT_GUARD: &str = "web";

/// Derived naming/path conventions for one guard
///
/// Directory fields are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingPlan {
    pub guard: String,
    pub broker: String,

    pub controller_namespace: String,
    pub controller_dir: PathBuf,

    pub request_namespace: String,
    pub request_dir: PathBuf,

    pub model_namespace: String,
    pub model_class: String,
    /// Snake-cased plural of the model class, e.g. `User` -> `users`
    pub model_table: String,

    pub view_dir: PathBuf,
    /// Blade view prefix including trailing dot, e.g. `auth.admin.`
    pub view_prefix: String,

    pub routes_file_name: String,
    pub route_prefix: String,
    pub route_name_prefix: String,
    /// Suffix appended to the `guest` middleware, e.g. `:admin` (empty for web)
    pub route_guest_guard: String,
}

/// Derive the naming plan for a guard/broker pair and its resolved model.
///
/// Guard names other than `"web"` take the qualified branch verbatim, empty
/// string included; existence checks belong to the resolver, not here.
pub fn derive_plan(guard: &str, broker: &str, model: &ResolvedModel) -> NamingPlan {
    let is_default = guard == DEFAULT_GUARD;
    let title = title_case(guard);
    let lower = guard.to_lowercase();
    let plural = pluralize(&lower);

    let (controller_namespace, controller_dir) = if is_default {
        (
            "App\\Http\\Controllers\\Auth".to_string(),
            PathBuf::from("app/Http/Controllers/Auth"),
        )
    } else {
        (
            format!("App\\Http\\Controllers\\Auth\\{title}"),
            PathBuf::from("app/Http/Controllers/Auth").join(&title),
        )
    };

    let (request_namespace, request_dir) = if is_default {
        (
            "App\\Http\\Requests\\Auth".to_string(),
            PathBuf::from("app/Http/Requests/Auth"),
        )
    } else {
        (
            format!("App\\Http\\Requests\\Auth\\{title}"),
            PathBuf::from("app/Http/Requests/Auth").join(&title),
        )
    };

    let view_dir = if is_default {
        PathBuf::from("resources/views")
    } else {
        PathBuf::from("resources/views").join(&lower)
    };

    let view_prefix = if is_default {
        "auth.".to_string()
    } else {
        format!("auth.{lower}.")
    };

    let routes_file_name = if is_default {
        "auth.php".to_string()
    } else {
        format!("{lower}-auth.php")
    };

    let route_prefix = if is_default {
        "/".to_string()
    } else {
        format!("/{plural}")
    };

    let route_name_prefix = if is_default {
        String::new()
    } else {
        format!("{plural}.")
    };

    let route_guest_guard = if is_default {
        String::new()
    } else {
        format!(":{guard}")
    };

    NamingPlan {
        guard: guard.to_string(),
        broker: broker.to_string(),
        controller_namespace,
        controller_dir,
        request_namespace,
        request_dir,
        model_namespace: model.model_fqcn.clone(),
        model_class: model.model_class.clone(),
        model_table: snake_case(&pluralize(&model.model_class)),
        view_dir,
        view_prefix,
        routes_file_name,
        route_prefix,
        route_name_prefix,
        route_guest_guard,
    }
}

/// Uppercase the first character, leave the rest unchanged
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Simple suffix-rule English pluralization
///
/// Consonant-`y` becomes `ies`; sibilant endings (`s`, `x`, `z`, `ch`, `sh`)
/// take `es`; everything else takes `s`. No irregular nouns.
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let lower = s.to_lowercase();
    if lower.ends_with('y') {
        let before_y = lower.chars().rev().nth(1);
        let is_consonant_y = !matches!(before_y, Some('a' | 'e' | 'i' | 'o' | 'u') | None);
        if is_consonant_y {
            return format!("{}ies", &s[..s.len() - 1]);
        }
    }

    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{s}es");
    }

    format!("{s}s")
}

/// Convert a StudlyCase identifier to snake_case
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
