use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TopLevelToggleProps {
    pub checked: bool,
    pub on_change: Callback<bool>,
}

/// Checkbox switching the hiring history between top-level and all comments
#[function_component(TopLevelToggle)]
pub fn toplevel_toggle(props: &TopLevelToggleProps) -> Html {
    let onchange = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.checked());
        })
    };

    html! {
        <label class="toplevel-toggle">
            <input type="checkbox" checked={props.checked} {onchange} />
            {"Include only top-level comments."}
        </label>
    }
}
