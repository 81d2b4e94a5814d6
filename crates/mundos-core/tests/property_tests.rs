//! Property-based tests for the formatters and the forced dark controller
//!
//! Uses proptest to check the invariants that matter to the UI.

use proptest::prelude::*;
use mundos_core::dark_mode::{DarkModeHost, DocumentRoot, ForcedDarkController};
use mundos_core::duration::{format_duration, format_time};
use mundos_core::world::{is_world_page, theme_toggle_visible};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Route paths, biased towards the ones the app actually serves
fn path_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec![
            "/",
            "/login",
            "/dashboard",
            "/perfil",
            "/ejercicios",
            "/ejercicios/mundos/1",
            "/ejercicios/mundos/2",
            "/ejercicios/otros",
        ])
        .prop_map(|p| p.to_string()),
        1 => prop::string::string_regex("/[a-z/]{0,24}").expect("valid regex"),
    ]
}

/// Things that can happen in a browsing session
#[derive(Debug, Clone)]
enum SessionOp {
    Navigate(String),
    /// Press the theme toggle (ignored where the toggle is hidden)
    Toggle,
}

fn session_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<SessionOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => path_strategy().prop_map(SessionOp::Navigate),
            1 => Just(SessionOp::Toggle),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Verbose format always names the exact seconds remainder or omits it
    #[test]
    fn format_time_matches_split(secs in 0u64..1_000_000) {
        let minutes = secs / 60;
        let rest = secs % 60;
        let formatted = format_time(secs);

        if minutes == 0 {
            prop_assert_eq!(formatted, format!("{} seg", rest));
        } else if rest == 0 {
            prop_assert_eq!(formatted, format!("{} min", minutes));
        } else {
            prop_assert_eq!(formatted, format!("{} min {} seg", minutes, rest));
        }
    }

    /// Compact format parses back to the rounded input
    #[test]
    fn format_duration_parses_back(secs in 0.5f64..1_000_000.0) {
        let formatted = format_duration(secs);
        let (m, s) = formatted.split_once(':').expect("MM:SS");
        prop_assert!(m.len() >= 2);
        prop_assert_eq!(s.len(), 2);

        let m: u64 = m.parse().unwrap();
        let s: u64 = s.parse().unwrap();
        prop_assert!(s < 60);
        prop_assert_eq!(m * 60 + s, secs.round() as u64);
    }

    /// Non-positive input renders nothing
    #[test]
    fn format_duration_non_positive_is_empty(secs in -1_000_000.0f64..=0.0) {
        prop_assert_eq!(format_duration(secs), "");
    }

    /// Toggle visibility is the negation of the world page predicate
    #[test]
    fn toggle_visibility_negates_predicate(path in path_strategy()) {
        let expected = path == "/ejercicios" || path.starts_with("/ejercicios/mundos");
        prop_assert_eq!(is_world_page(&path), expected);
        prop_assert_eq!(theme_toggle_visible(&path), !expected);
    }

    /// World pages are always dark; elsewhere the user's own choice shows
    #[test]
    fn forced_dark_preserves_user_choice(
        user_dark in any::<bool>(),
        ops in session_ops_strategy(40),
    ) {
        let mut root = DocumentRoot::with_dark(user_dark);
        let mut controller = ForcedDarkController::new();
        let mut user_dark = user_dark;
        let mut path = String::from("/");

        for op in ops {
            match op {
                SessionOp::Navigate(next) => {
                    path = next;
                    controller.on_navigate(&path, &mut root);
                }
                SessionOp::Toggle => {
                    if theme_toggle_visible(&path) {
                        user_dark = root.toggle_dark();
                    }
                }
            }

            if is_world_page(&path) {
                prop_assert!(root.is_dark());
                prop_assert_eq!(controller.owns_dark(), !user_dark);
            } else {
                prop_assert_eq!(root.is_dark(), user_dark);
                prop_assert!(!controller.owns_dark());
            }
        }
    }
}
