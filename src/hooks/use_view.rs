use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::config::Config;

/// The two dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Submissions,
    HiringTrends,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submissions => "Submissions",
            Self::HiringTrends => "Hiring Trends",
        }
    }

    pub fn all() -> &'static [View] {
        &[Self::Submissions, Self::HiringTrends]
    }
}

/// Handle returned by `use_view` hook
#[derive(Clone, PartialEq)]
pub struct ViewHandle {
    pub view: View,
    pub set_view: Callback<View>,
}

/// Active view with localStorage persistence
#[hook]
pub fn use_view() -> ViewHandle {
    let view = use_state(|| load_view_preference().unwrap_or_default());

    // Effect: Persist view to localStorage on change
    {
        let view_value = *view;
        use_effect_with(view_value, move |view| {
            save_view_preference(*view);
            || ()
        });
    }

    let set_view = {
        let view = view.clone();
        Callback::from(move |new_view| view.set(new_view))
    };

    ViewHandle {
        view: *view,
        set_view,
    }
}

fn load_view_preference() -> Option<View> {
    gloo_storage::LocalStorage::get(Config::VIEW_STORAGE_KEY).ok()
}

fn save_view_preference(view: View) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::VIEW_STORAGE_KEY, view) {
        gloo::console::warn!(&format!("Failed to save view: {e:?}"));
    }
}
