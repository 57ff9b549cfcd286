//! Template substitution engine
//!
//! Literal whole-token replacement over stub text. The scan is single-pass:
//! replacement values are emitted to the output and never re-scanned, so the
//! result does not depend on the order of the (token, value) pairs. Tokens
//! present in a template but absent from the mapping pass through unchanged.

use crate::naming::NamingPlan;

/// Placeholder tokens recognized in stubs, in table order.
///
/// The set is prefix-free: no token is a substring of another, so simultaneous
/// replacement is unambiguous.
pub const TOKENS: &[&str] = &[
    "DummyGuardName",
    "DummyBrokerName",
    "DummyControllerNamespace",
    "DummyRequestNamespace",
    "DummyRoutesFilename",
    "DummyRoutePrefix",
    "DummyRouteNamePrefix",
    "DummyRouteGuestGuard",
    "DummyViewPathPrefix",
    "DummyViewPrefix",
    "DummyModelNamespace",
    "DummyModelClass",
    "DummyModelTable",
];

/// Build the full (token, value) mapping for a naming plan
pub fn token_map(plan: &NamingPlan) -> Vec<(&'static str, String)> {
    vec![
        ("DummyGuardName", plan.guard.clone()),
        ("DummyBrokerName", plan.broker.clone()),
        ("DummyControllerNamespace", plan.controller_namespace.clone()),
        ("DummyRequestNamespace", plan.request_namespace.clone()),
        ("DummyRoutesFilename", plan.routes_file_name.clone()),
        ("DummyRoutePrefix", plan.route_prefix.clone()),
        ("DummyRouteNamePrefix", plan.route_name_prefix.clone()),
        ("DummyRouteGuestGuard", plan.route_guest_guard.clone()),
        (
            "DummyViewPathPrefix",
            plan.view_dir.to_string_lossy().into_owned(),
        ),
        ("DummyViewPrefix", plan.view_prefix.clone()),
        ("DummyModelNamespace", plan.model_namespace.clone()),
        ("DummyModelClass", plan.model_class.clone()),
        ("DummyModelTable", plan.model_table.clone()),
    ]
}

/// Replace every occurrence of each token with its value.
///
/// Values are inserted verbatim with no escaping. Unknown tokens in the text
/// are left alone; this is not an error.
pub fn substitute(text: &str, pairs: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'outer: while !rest.is_empty() {
        for (token, value) in pairs {
            if !token.is_empty() && rest.starts_with(token) {
                out.push_str(value);
                rest = &rest[token.len()..];
                continue 'outer;
            }
        }

        // Advance one char; no token starts here.
        let mut chars = rest.chars();
        out.push(chars.next().unwrap_or_default());
        rest = chars.as_str();
    }

    out
}
