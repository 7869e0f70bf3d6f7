use charming::{
    Chart as CharmingChart,
    element::{LineStyle, Symbol},
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::chart::{ChartSurface, line_chart_base};
use crate::components::status::Status;
use crate::config::Config;
use crate::hooks::use_history::use_history;
use crate::models::history::{HistorySeries, HistorySource, period_label};
use crate::utils::debounce::debounced_resize_listener;

#[derive(Properties, PartialEq)]
pub struct HistoryGraphProps {
    pub source: HistorySource,
    pub chart_id: AttrValue,
}

/// Single-line chart of an aggregate history series
#[function_component(HistoryGraph)]
pub fn history_graph(props: &HistoryGraphProps) -> Html {
    let state = use_history(props.source);
    let container_ref = use_node_ref();
    let series = state.data().cloned();

    {
        let container_ref = container_ref.clone();
        let chart_id = props.chart_id.clone();
        let source = props.source;

        use_effect_with(
            (series.clone(), container_ref, source),
            move |(series, container_ref, source)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let series = series.clone()?;
                    let surface = ChartSurface::new(chart_id.as_str());
                    let chart = build_chart(&series, *source);
                    surface.draw(&container, &chart, None);

                    debounced_resize_listener(
                        move || surface.draw(&container, &chart, None),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="history-graph">
            if series.is_none() && state.is_loading() {
                <Status loading={true} />
            }
            if series.as_ref().is_some_and(|s| !s.is_empty()) {
                <div class="chart-container" ref={container_ref}>
                    <div id={props.chart_id.clone()} class="chart" />
                </div>
            }
        </div>
    }
}

fn build_chart(series: &Rc<HistorySeries>, source: HistorySource) -> CharmingChart {
    let (periods, values) = series.series_data();
    let labels = periods.iter().map(|p| period_label(p)).collect();

    line_chart_base(source.title(), labels, source.value_label()).series(
        Line::new()
            .name(source.value_label())
            .data(values)
            .symbol(Symbol::None)
            .line_style(LineStyle::new().color(Config::HISTORY_COLOR).width(2)),
    )
}
