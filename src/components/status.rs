use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
}

/// Spinner shown while a chart waits for its first data
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if !props.loading {
        return html! {};
    }

    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"Loading data..."}</p>
        </div>
    }
}
