//! Helpers for validating identifiers used in filesystem paths.

/// Whether a short name or image name can be used as one output path component.
///
/// Rejects `.`/`..`, separators, control and Windows-reserved characters, and a
/// trailing dot or space.
pub fn is_safe_path_component(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }

    if name.ends_with('.') || name.ends_with(' ') {
        return false;
    }

    !name.chars().any(|c| {
        c == '/'
            || c == '\\'
            || c.is_control()
            || matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|')
    })
}
