use yew::prelude::*;

use crate::components::ViewTabs;
use crate::hooks::use_view::{View, use_view};
use crate::pages::{HiringPage, SubmissionsPage};

#[function_component(App)]
pub fn app() -> Html {
    let view_handle = use_view();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Hacker News Trends"}</h1>
                <ViewTabs active={view_handle.view} on_select={view_handle.set_view.clone()} />
            </header>

            <main class="app-main">
                {
                    match view_handle.view {
                        View::Submissions => html! { <SubmissionsPage /> },
                        View::HiringTrends => html! { <HiringPage /> },
                    }
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
