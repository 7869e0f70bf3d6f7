use yew::prelude::*;

use crate::hooks::use_fetch::{FetchState, use_fetch};
use crate::models::keyword::KeywordDomain;
use crate::models::occurrences::OccurrenceSeries;
use crate::services::api::fetch_occurrences;

/// Fetches the occurrence series for exactly `keywords`, replacing prior data on every change
#[hook]
pub fn use_occurrences(
    domain: KeywordDomain,
    keywords: Vec<String>,
) -> UseStateHandle<FetchState<OccurrenceSeries>> {
    use_fetch((domain, keywords), |(domain, keywords)| {
        fetch_occurrences(domain, keywords)
    })
}
