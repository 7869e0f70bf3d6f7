use yew::prelude::*;

use crate::hooks::use_view::View;

#[derive(Properties, PartialEq)]
pub struct ViewTabsProps {
    pub active: View,
    pub on_select: Callback<View>,
}

/// Header navigation between the dashboard views
#[function_component(ViewTabs)]
pub fn view_tabs(props: &ViewTabsProps) -> Html {
    html! {
        <nav class="view-tabs">
            {
                View::all().iter().map(|view| {
                    let view = *view;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(view))
                    };
                    let class = if view == props.active { "view-tab active" } else { "view-tab" };
                    html! {
                        <button {class} {onclick} aria-pressed={(view == props.active).to_string()}>
                            {view.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
