//! Dismissible message banner state.
//!
//! # Design
//! - Visibility is derived from content plus a dismissed flag; nothing else is stored.
//! - Replacing the content with a different value clears the dismissed flag.
//! - Blank content never renders, whatever the flag says.

/// Content a banner can carry.
pub trait BannerContent: PartialEq + Clone {
    /// Whether the content has nothing worth showing.
    fn is_blank(&self) -> bool;
}

impl BannerContent for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl BannerContent for Vec<String> {
    fn is_blank(&self) -> bool {
        self.iter().all(BannerContent::is_blank)
    }
}

impl<T: BannerContent> BannerContent for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(BannerContent::is_blank)
    }
}

/// Error or info banner with per-content dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerState<T> {
    content: T,
    dismissed: bool,
}

impl<T: BannerContent + Default> Default for BannerState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: BannerContent> BannerState<T> {
    /// Start visible for the given content.
    #[must_use]
    pub const fn new(content: T) -> Self {
        Self {
            content,
            dismissed: false,
        }
    }

    /// Replace the content; a change makes the banner visible again.
    pub fn replace(&mut self, content: T) {
        if self.content != content {
            self.content = content;
            self.dismissed = false;
        }
    }

    /// Hide the banner until the content changes.
    pub const fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Content to render, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&T> {
        (!self.dismissed && !self.content.is_blank()).then_some(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_never_renders() {
        let banner = BannerState::new(String::new());
        assert_eq!(banner.visible(), None);
        let list = BannerState::new(vec![" ".to_string()]);
        assert_eq!(list.visible(), None);
        let missing: BannerState<Option<String>> = BannerState::default();
        assert_eq!(missing.visible(), None);
    }

    #[test]
    fn dismiss_hides_current_content_only() {
        let mut banner = BannerState::new("first".to_string());
        banner.dismiss();
        assert_eq!(banner.visible(), None);

        banner.replace("first".to_string());
        assert_eq!(banner.visible(), None);

        banner.replace("second".to_string());
        assert_eq!(banner.visible().map(String::as_str), Some("second"));
    }

    #[test]
    fn returning_to_earlier_content_shows_it_again() {
        let mut banner = BannerState::new("a".to_string());
        banner.dismiss();
        banner.replace("b".to_string());
        banner.replace("a".to_string());
        assert_eq!(banner.visible().map(String::as_str), Some("a"));
    }
}
