//! World page detection.
//!
//! World pages live under the exercise browsing section and always render
//! in dark mode. The theme toggle is hidden on them.

/// Exact path of the world index page
pub const WORLD_INDEX_PATH: &str = "/ejercicios";

/// Prefix shared by every individual world page
pub const WORLD_PAGE_PREFIX: &str = "/ejercicios/mundos";

/// Returns true if `path` is a world page.
///
/// Matches `/ejercicios` exactly, or anything starting with
/// `/ejercicios/mundos`. Note the prefix check is plain string matching,
/// so `/ejercicios/mundosx` also counts.
pub fn is_world_page(path: &str) -> bool {
    path == WORLD_INDEX_PATH || path.starts_with(WORLD_PAGE_PREFIX)
}

/// Whether the theme toggle should be shown for `path`.
pub fn theme_toggle_visible(path: &str) -> bool {
    !is_world_page(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_world_page() {
        assert!(is_world_page("/ejercicios"));
    }

    #[test]
    fn world_prefix_matches() {
        assert!(is_world_page("/ejercicios/mundos"));
        assert!(is_world_page("/ejercicios/mundos/1"));
        assert!(is_world_page("/ejercicios/mundos/3/intro"));
    }

    #[test]
    fn other_paths_are_not_world_pages() {
        assert!(!is_world_page("/"));
        assert!(!is_world_page("/dashboard"));
        assert!(!is_world_page("/ejercicios/"));
        assert!(!is_world_page("/ejercicios/otros"));
        assert!(!is_world_page("/perfil/ejercicios"));
        assert!(!is_world_page(""));
    }

    #[test]
    fn toggle_hidden_exactly_on_world_pages() {
        assert!(!theme_toggle_visible("/ejercicios"));
        assert!(!theme_toggle_visible("/ejercicios/mundos/2"));
        assert!(theme_toggle_visible("/dashboard"));
        assert!(theme_toggle_visible("/"));
    }
}
