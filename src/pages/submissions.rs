use yew::prelude::*;

use crate::components::{DrillDownTable, HistoryGraph, KeywordSelector, TrendSeries};
use crate::models::history::HistorySource;
use crate::models::keyword::KeywordDomain;
use crate::models::selection::{DrillDownTarget, Selection, visible_target};

/// Submission volume, keyword trends in titles, and sample submissions for a clicked point
#[function_component(SubmissionsPage)]
pub fn submissions_page() -> Html {
    let selection = use_state(Selection::default);
    let target = use_state(|| None::<DrillDownTarget>);

    let on_selection_change = {
        let selection = selection.setter();
        use_callback((), move |new_selection: Selection, _| selection.set(new_selection))
    };

    let on_point_click = {
        let target = target.setter();
        use_callback((), move |clicked: DrillDownTarget, _| target.set(Some(clicked)))
    };

    let shown_target = visible_target(&selection, (*target).as_ref()).cloned();

    html! {
        <div class="page submissions-page">
            <section class="history-section">
                <h2>{"Number of submissions"}</h2>
                <HistoryGraph source={HistorySource::Submissions} chart_id="submissions-history-chart" />
            </section>

            <section class="trends-section">
                <h2>{"Trends"}</h2>
                <p>
                    {"Use the dropdown below to display the trend in frequency of certain keywords \
                      in the titles of submissions on Hacker News. Clicking on a trace will display \
                      a sample of submissions that contain the selected keyword from the \
                      corresponding time period."}
                </p>
                <KeywordSelector
                    domain={KeywordDomain::Submissions}
                    selection={(*selection).clone()}
                    on_change={on_selection_change}
                />
                <TrendSeries
                    domain={KeywordDomain::Submissions}
                    keywords={selection.keywords().to_vec()}
                    chart_id="submissions-trends-chart"
                    on_point_click={Some(on_point_click)}
                />
                if let Some(target) = shown_target {
                    <DrillDownTable {target} />
                }
            </section>
        </div>
    }
}
