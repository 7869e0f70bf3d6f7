use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;

/// Lifecycle of a dependency-driven fetch.
///
/// Data from an earlier successful fetch stays visible while a new fetch is
/// loading and after it fails.
#[derive(PartialEq, Debug)]
pub enum FetchState<T> {
    Idle,
    Loading(Option<Rc<T>>),
    Loaded(Rc<T>),
    Error {
        stale: Option<Rc<T>>,
        message: String,
    },
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading(stale) => Self::Loading(stale.clone()),
            Self::Loaded(data) => Self::Loaded(data.clone()),
            Self::Error { stale, message } => Self::Error {
                stale: stale.clone(),
                message: message.clone(),
            },
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    /// Returns the data to display, fresh or stale
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Idle => None,
            Self::Loading(stale) => stale.as_ref(),
            Self::Loaded(data) => Some(data),
            Self::Error { stale, .. } => stale.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Transition taken when a fetch starts
    pub fn begin(&self) -> Self {
        Self::Loading(self.data().cloned())
    }

    /// Transition taken when the fetch started by `begin` completes
    pub fn settle(self, result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(Rc::new(data)),
            Err(e) => Self::Error {
                stale: self.data().cloned(),
                message: e.to_string(),
            },
        }
    }
}

/// Numbers the fetches issued by one component so only the latest may settle.
///
/// Every new fetch takes a fresh id. Issuing another fetch, or `invalidate` on
/// unmount, makes all earlier ids stale.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: Cell<u64>,
}

impl RequestGeneration {
    /// Starts a new fetch and returns its id
    pub fn issue(&self) -> u64 {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        id
    }

    /// Whether the fetch `id` is still the one whose result should be shown
    pub fn is_current(&self, id: u64) -> bool {
        self.latest.get() == id
    }

    /// Makes every outstanding fetch stale
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

/// Runs `fetch` whenever `deps` changes and tracks the result as a [`FetchState`].
///
/// Failures are logged and leave the previous data in place. A response that
/// arrives after `deps` has changed again, or after unmount, is dropped.
#[hook]
pub fn use_fetch<D, T, F, Fut>(deps: D, fetch: F) -> UseStateHandle<FetchState<T>>
where
    D: PartialEq + Clone + 'static,
    T: 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_state(FetchState::<T>::default);
    let generation = use_memo((), |_| RequestGeneration::default());

    {
        let state = state.clone();

        use_effect_with(deps, move |deps| {
            let loading = state.begin();
            state.set(loading.clone());

            let id = generation.issue();
            let request = fetch(deps.clone());
            let pending = generation.clone();

            spawn_local(async move {
                let result = request.await;
                if !pending.is_current(id) {
                    return; // superseded or unmounted
                }
                match &result {
                    Err(e) if e.is_transient() => {
                        gloo::console::warn!(&format!("Fetch failed, showing previous data: {e}"));
                    }
                    Err(e) => gloo::console::error!(&format!("Fetch failed: {e}")),
                    Ok(_) => {}
                }
                state.set(loading.settle(result));
            });

            move || generation.invalidate()
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fetch_lifecycle() {
        let idle: FetchState<Vec<u32>> = FetchState::default();
        assert!(idle.data().is_none());

        let loading = idle.begin();
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let loaded = loading.settle(Ok(vec![1, 2]));
        assert_eq!(loaded.data().map(|d| d.len()), Some(2));
    }

    #[test]
    fn test_failure_keeps_stale_data() {
        let loaded = FetchState::Idle.begin().settle(Ok(vec![7u32]));
        let reloading = loaded.begin();
        assert_eq!(reloading.data().map(|d| d[0]), Some(7));

        let failed = reloading.settle(Err(AppError::ApiError("boom".to_string())));
        assert_eq!(failed.data().map(|d| d[0]), Some(7));
        assert!(matches!(
            &failed,
            FetchState::Error { message, .. } if message == "API error: boom"
        ));
    }

    #[test]
    fn test_first_failure_has_no_data() {
        let failed: FetchState<Vec<u32>> = FetchState::Idle
            .begin()
            .settle(Err(AppError::NotFound("/keywords".to_string())));
        assert!(failed.data().is_none());
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_success_replaces_data() {
        let first = FetchState::Idle.begin().settle(Ok("old"));
        let second = first.begin().settle(Ok("new"));
        assert_eq!(second.data().map(|d| **d), Some("new"));
    }

    #[test]
    fn test_late_response_from_superseded_fetch_is_dropped() {
        let generation = RequestGeneration::default();
        let mut state: FetchState<&str> = FetchState::default();

        // ["rust"] is requested, then ["rust", "golang"] before the first answers
        let first = generation.issue();
        let first_pending = state.begin();
        let second = generation.issue();
        let second_pending = state.begin();

        // The newer request answers first
        assert!(generation.is_current(second));
        state = second_pending.settle(Ok("rust,golang"));

        // The older one arrives last and must not overwrite it
        assert!(!generation.is_current(first));
        if generation.is_current(first) {
            state = first_pending.settle(Ok("rust"));
        }
        assert_eq!(state.data().map(|d| **d), Some("rust,golang"));
    }

    #[test]
    fn test_cleanup_invalidates_pending_fetch() {
        let generation = RequestGeneration::default();
        let id = generation.issue();
        assert!(generation.is_current(id));

        generation.invalidate();
        assert!(!generation.is_current(id));

        // The next fetch after cleanup is current again
        let next = generation.issue();
        assert!(generation.is_current(next));
        assert_ne!(id, next);
    }
}
