//! Setup completion redirect.

/// Shown once no setup step remains.
pub const SETUP_COMPLETE_MESSAGE: &str = "Setup complete!";

/// Where to go after setup: the `next` parameter when it is a same-site path,
/// otherwise the home page.
#[must_use]
pub fn redirect_target(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_must_be_a_local_path() {
        assert_eq!(redirect_target(Some("/panel/")), "/panel/");
        assert_eq!(redirect_target(None), "/");
        assert_eq!(redirect_target(Some("")), "/");
        assert_eq!(redirect_target(Some("//evil.example")), "/");
        assert_eq!(redirect_target(Some("https://evil.example")), "/");
    }
}
