//! View binding: pure projections from state slices to presentation props,
//! and the intents a presentation layer raises back into the dispatchers.
//!
//! No business logic lives here — a projection only selects and formats.
//! The composition root subscribes a renderer to the store and maps each
//! [`Intent`] onto the matching dispatcher.

use crate::api::types::{Bookmark, Profile};
use crate::core::state::AppState;

/// Props for the feed list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedProps {
    pub items: Vec<Bookmark>,
    pub loading: bool,
    pub error: Option<String>,
}

pub fn feed_props(state: &AppState) -> FeedProps {
    FeedProps {
        items: state.bookmarks.items.clone(),
        loading: state.bookmarks.loading,
        error: state.bookmarks.error.as_ref().map(|e| e.to_string()),
    }
}

/// Props for the add-bookmark form.
#[derive(Debug, Clone, PartialEq)]
pub struct AddFormProps {
    pub url: String,
    pub title: String,
    pub show_title: bool,
    pub submitting: bool,
}

pub fn add_form_props(state: &AppState) -> AddFormProps {
    AddFormProps {
        url: state.url.clone(),
        title: state.title.clone(),
        show_title: state.show_title,
        submitting: state.bookmarks.loading,
    }
}

/// Props for the profile pane.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileProps {
    pub name: String,
    pub bio: String,
    pub loading: bool,
    pub error: Option<String>,
}

pub fn profile_props(state: &AppState) -> ProfileProps {
    let me = state.profile.me.as_ref();
    ProfileProps {
        name: me.and_then(|p| p.name.clone()).unwrap_or_default(),
        bio: me.and_then(|p| p.bio.clone()).unwrap_or_default(),
        loading: state.profile.loading,
        error: state.profile.error.as_ref().map(|e| e.to_string()),
    }
}

/// User intents a presentation layer can raise. The composition root maps
/// each one onto a dispatcher invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Refresh,
    EditUrl(String),
    EditTitle(String),
    SubmitMark { url: String, title: String },
    LoadProfile,
    SaveProfile(Profile),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiError;
    use crate::test_support::{bookmark, state_with_url};

    #[test]
    fn test_feed_props_formats_the_error() {
        let mut state = AppState::new();
        state.bookmarks.error = Some(ApiError::Status(502));
        let props = feed_props(&state);
        assert_eq!(props.error.as_deref(), Some("HTTP 502"));
        assert!(props.items.is_empty());
    }

    #[test]
    fn test_feed_props_carries_items_in_order() {
        let mut state = AppState::new();
        state.bookmarks.items = vec![bookmark("a", "A"), bookmark("b", "B")];
        let props = feed_props(&state);
        assert_eq!(props.items[0].title, "A");
        assert_eq!(props.items[1].title, "B");
    }

    #[test]
    fn test_add_form_props_mirrors_input_slices() {
        let mut state = state_with_url("http://a/");
        state.title = "A".to_string();
        state.bookmarks.loading = true;
        let props = add_form_props(&state);
        assert_eq!(props.url, "http://a/");
        assert_eq!(props.title, "A");
        assert!(props.show_title);
        assert!(props.submitting);
    }

    #[test]
    fn test_profile_props_defaults_when_not_fetched() {
        let props = profile_props(&AppState::new());
        assert_eq!(props.name, "");
        assert_eq!(props.bio, "");
        assert!(!props.loading);
    }
}
