use yew::prelude::*;

use crate::components::{HistoryGraph, KeywordSelector, TopLevelToggle, TrendSeries};
use crate::models::history::HistorySource;
use crate::models::keyword::KeywordDomain;
use crate::models::selection::Selection;

/// Comment counts and keyword trends for the monthly "Who is hiring" thread
#[function_component(HiringPage)]
pub fn hiring_page() -> Html {
    let toplevel_only = use_state(|| true);
    let selection = use_state(Selection::default);

    let on_toggle = {
        let toplevel_only = toplevel_only.setter();
        use_callback((), move |checked: bool, _| toplevel_only.set(checked))
    };

    let on_selection_change = {
        let selection = selection.setter();
        use_callback((), move |new_selection: Selection, _| selection.set(new_selection))
    };

    let source = HistorySource::hiring(*toplevel_only);

    html! {
        <div class="page hiring-page">
            <section class="history-section">
                <h2>{"Number of comments"}</h2>
                <p>
                    {"The number of comments on the monthly "}
                    <i>{"Ask HN: Who is hiring?"}</i>
                    {" thread. Use the checkbox to toggle between displaying the count of only \
                      the top-level comments or the total number."}
                </p>
                <TopLevelToggle checked={*toplevel_only} on_change={on_toggle} />
                <HistoryGraph {source} chart_id="hiring-history-chart" />
            </section>

            <section class="trends-section">
                <h2>{"Trends"}</h2>
                <p>{"Use the dropdown to display the number of comments that include the selected keywords."}</p>
                <KeywordSelector
                    domain={KeywordDomain::Hiring}
                    selection={(*selection).clone()}
                    on_change={on_selection_change}
                />
                <TrendSeries
                    domain={KeywordDomain::Hiring}
                    keywords={selection.keywords().to_vec()}
                    chart_id="hiring-trends-chart"
                />
            </section>
        </div>
    }
}
