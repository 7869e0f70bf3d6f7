use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_keywords::use_keyword_options;
use crate::models::keyword::{KeywordDomain, KeywordOption, display_name};
use crate::models::selection::Selection;
use crate::services::assets::IconCache;

#[derive(Properties, PartialEq)]
pub struct KeywordSelectorProps {
    pub domain: KeywordDomain,
    pub selection: Selection,
    pub on_change: Callback<Selection>,
}

/// Multi-select of keywords: chips for the current selection plus a dropdown of the rest
#[function_component(KeywordSelector)]
pub fn keyword_selector(props: &KeywordSelectorProps) -> Html {
    let state = use_keyword_options(props.domain);
    let icons = use_mut_ref(IconCache::new);

    let options: Rc<Vec<KeywordOption>> = state.data().cloned().unwrap_or_default();

    let on_add = {
        let callback = props.on_change.clone();
        let selection = props.selection.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let value = target.value();
            // Reset so the placeholder shows again
            target.set_value("");
            if !value.is_empty() {
                callback.emit(selection.with_added(&value));
            }
        })
    };

    let chips = props
        .selection
        .keywords()
        .iter()
        .map(|value| {
            let on_remove = {
                let callback = props.on_change.clone();
                let selection = props.selection.clone();
                let value = value.clone();
                Callback::from(move |_: MouseEvent| callback.emit(selection.with_removed(&value)))
            };
            let label = display_name(&options, value);
            let icon = options
                .iter()
                .find(|o| &o.value == value)
                .and_then(|o| icon_for(&icons, o));

            html! {
                <span class="keyword-chip" key={value.clone()}>
                    if let Some((src, onerror)) = icon {
                        <img class="keyword-icon" {src} alt="" {onerror} />
                    }
                    <span class="keyword-chip-label">{label}</span>
                    <button
                        class="keyword-chip-remove"
                        onclick={on_remove}
                        aria-label={format!("Remove {label}")}
                        title={format!("Remove {label}")}
                    >
                        {"×"}
                    </button>
                </span>
            }
        })
        .collect::<Html>();

    let choices = options
        .iter()
        .filter(|o| !props.selection.contains(&o.value))
        .map(|o| {
            html! {
                <option value={o.value.clone()}>{&o.display_name}</option>
            }
        })
        .collect::<Html>();

    html! {
        <div class="keyword-selector">
            <div class="keyword-chips">{chips}</div>
            <select
                class="keyword-dropdown"
                onchange={on_add}
                aria-label="Add keyword"
                title="Add keyword"
            >
                <option value="" selected={true}>{"Select keywords..."}</option>
                {choices}
            </select>
        </div>
    }
}

/// Logo URL for `option` plus an error handler that hides the image and remembers the miss
fn icon_for(
    icons: &Rc<RefCell<IconCache>>,
    option: &KeywordOption,
) -> Option<(AttrValue, Callback<Event>)> {
    let src = icons.borrow_mut().resolve(&option.image_path)?;
    let onerror = {
        let icons = icons.clone();
        let image_path = option.image_path.clone();
        Callback::from(move |e: Event| {
            let img: HtmlElement = e.target_unchecked_into();
            img.set_hidden(true);
            icons.borrow_mut().mark_missing(&image_path);
        })
    };
    Some((AttrValue::from(src), onerror))
}
