use yew::prelude::*;

use crate::hooks::use_fetch::{FetchState, use_fetch};
use crate::models::history::{HistorySeries, HistorySource};
use crate::services::api::fetch_history;

/// Fetches the aggregate history for `source`, refetching whenever it changes
#[hook]
pub fn use_history(source: HistorySource) -> UseStateHandle<FetchState<HistorySeries>> {
    use_fetch(source, fetch_history)
}
