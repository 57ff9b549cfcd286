//! Property tests for Guardsmith.
//!
//! Properties use randomized input generation to protect the substitution and
//! naming-plan invariants.
//!
//! Run with: `cargo test --test properties`

use proptest::prelude::*;

use guardsmith::resolver::ResolvedModel;
use guardsmith::{derive_plan, substitute, token_map, TOKENS};

fn guard_name() -> impl Strategy<Value = String> {
    // Lowercase identifiers, excluding the "web" sentinel.
    proptest::string::string_regex("[a-z][a-z0-9]{0,12}")
        .unwrap()
        .prop_filter("not the default guard", |s| s != "web")
}

fn model(class: &str) -> ResolvedModel {
    ResolvedModel {
        provider: "users".to_string(),
        model_fqcn: format!("App\\Models\\{class}"),
        model_class: class.to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every qualified-branch field differs from the web branch by
    /// exactly the guard-derived segment.
    #[test]
    fn property_qualified_plan_embeds_guard_segment(guard in guard_name()) {
        let m = model("User");
        let plan = derive_plan(&guard, "users", &m);
        let web = derive_plan("web", "users", &m);

        let title = {
            let mut cs = guard.chars();
            let first = cs.next().unwrap();
            format!("{}{}", first.to_uppercase(), cs.as_str())
        };

        prop_assert_eq!(
            plan.controller_namespace,
            format!("{}\\{}", web.controller_namespace, title)
        );
        prop_assert_eq!(plan.request_namespace, format!("{}\\{}", web.request_namespace, title));
        prop_assert_eq!(plan.controller_dir, web.controller_dir.join(&title));
        prop_assert_eq!(plan.view_dir, web.view_dir.join(&guard));
        prop_assert_eq!(plan.view_prefix, format!("auth.{}.", guard));
        prop_assert_eq!(plan.routes_file_name, format!("{}-auth.php", guard));
        prop_assert!(plan.route_prefix.starts_with('/'));
        prop_assert!(plan.route_prefix.len() > 1);
        prop_assert_eq!(plan.route_name_prefix, format!("{}.", &plan.route_prefix[1..]));
        prop_assert_eq!(plan.route_guest_guard, format!(":{}", guard));
    }

    /// PROPERTY: the deriver never panics, whatever the guard string.
    #[test]
    fn property_derive_plan_never_panics(guard in "(?s).{0,32}") {
        let _ = derive_plan(&guard, "users", &model("User"));
    }

    /// PROPERTY: after substituting the full token map, no token remains
    /// (token-totality; replacement values never contain tokens here).
    #[test]
    fn property_token_totality(guard in guard_name(), filler in "[ -~&&[^D]]{0,64}") {
        let plan = derive_plan(&guard, "users", &model("User"));
        let map = token_map(&plan);

        let text = format!("{}{}{}", TOKENS.join(filler.as_str()), filler, TOKENS.join("\n"));
        let out = substitute(&text, &map);

        for token in TOKENS {
            prop_assert!(!out.contains(token));
        }
    }

    /// PROPERTY: text without any token is returned unchanged.
    #[test]
    fn property_substitute_no_token_is_identity(text in "[ -~&&[^D]]{0,256}") {
        let plan = derive_plan("admin", "admins", &model("Admin"));
        let map = token_map(&plan);
        prop_assert_eq!(substitute(&text, &map), text);
    }

    /// PROPERTY: substitution output is independent of pair order.
    #[test]
    fn property_substitute_order_independent(
        guard in guard_name(),
        text in "[ -~]{0,128}",
    ) {
        let plan = derive_plan(&guard, "users", &model("User"));
        let mut map = token_map(&plan);
        let forward = substitute(&text, &map);
        map.reverse();
        let reversed = substitute(&text, &map);

        prop_assert_eq!(forward, reversed);
    }
}

#[test]
fn token_set_is_prefix_free() {
    for a in TOKENS {
        for b in TOKENS {
            if a != b {
                assert!(!a.contains(b), "token '{b}' is a substring of '{a}'");
            }
        }
    }
}
