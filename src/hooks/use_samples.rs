use yew::prelude::*;

use crate::hooks::use_fetch::{FetchState, use_fetch};
use crate::models::sample::SampleRow;
use crate::models::selection::DrillDownTarget;
use crate::services::api::fetch_samples;

#[hook]
pub fn use_samples(target: DrillDownTarget) -> UseStateHandle<FetchState<Vec<SampleRow>>> {
    use_fetch(target, fetch_samples)
}
