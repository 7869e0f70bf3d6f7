use yew::prelude::*;

use crate::hooks::use_fetch::{FetchState, use_fetch};
use crate::models::keyword::{KeywordDomain, KeywordOption};
use crate::services::api::fetch_keywords;

/// Fetches the keyword options for `domain` once per mount
#[hook]
pub fn use_keyword_options(domain: KeywordDomain) -> UseStateHandle<FetchState<Vec<KeywordOption>>> {
    use_fetch(domain, fetch_keywords)
}
