use charming::{
    Chart as CharmingChart,
    component::Legend,
    element::{ItemStyle, LineStyle, Orient},
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::chart::{ChartClick, ChartSurface, line_chart_base};
use crate::config::Config;
use crate::hooks::use_debounced::use_debounced;
use crate::hooks::use_occurrences::use_occurrences;
use crate::models::keyword::KeywordDomain;
use crate::models::occurrences::TrendChartData;
use crate::models::selection::DrillDownTarget;
use crate::utils::debounce::debounced_resize_listener;

#[derive(Properties, PartialEq)]
pub struct TrendSeriesProps {
    pub domain: KeywordDomain,
    pub keywords: Vec<String>,
    pub chart_id: AttrValue,
    /// Receives the (keyword, month) of a clicked point. Ignored for domains without samples.
    #[prop_or_default]
    pub on_point_click: Option<Callback<DrillDownTarget>>,
}

/// One line per selected keyword, showing monthly occurrence counts
#[function_component(TrendSeries)]
pub fn trend_series(props: &TrendSeriesProps) -> Html {
    let requested = use_debounced(props.keywords.clone(), Config::SELECTION_DEBOUNCE_MS);
    let state = use_occurrences(props.domain, requested);
    let container_ref = use_node_ref();

    // Lines follow the live selection so a deselected keyword disappears immediately
    let chart_data = use_memo(
        (state.data().cloned(), props.keywords.clone()),
        |(series, keywords)| {
            series
                .as_ref()
                .map(|s| s.chart_data(keywords))
                .unwrap_or_default()
        },
    );

    {
        let container_ref = container_ref.clone();
        let chart_id = props.chart_id.clone();
        let on_point_click = props
            .on_point_click
            .clone()
            .filter(|_| props.domain.supports_drill_down());

        use_effect_with(
            (chart_data.clone(), container_ref, on_point_click),
            move |(chart_data, container_ref, on_point_click)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    if chart_data.is_empty() {
                        return None;
                    }
                    let surface = ChartSurface::new(chart_id.as_str());
                    let chart = build_chart(chart_data);
                    let on_click = on_point_click
                        .clone()
                        .map(|cb| click_to_target(chart_data.clone(), cb));
                    surface.draw(&container, &chart, on_click.as_ref());

                    debounced_resize_listener(
                        move || surface.draw(&container, &chart, on_click.as_ref()),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    if chart_data.is_empty() {
        return html! {};
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.chart_id.clone()} class="chart" />
        </div>
    }
}

/// Translates raw chart clicks into drill-down targets for the lines currently drawn
fn click_to_target(
    chart_data: Rc<TrendChartData>,
    on_point_click: Callback<DrillDownTarget>,
) -> Callback<ChartClick> {
    Callback::from(move |click: ChartClick| {
        if let Some(target) = chart_data.target_for(click.series_index, &click.category) {
            on_point_click.emit(target);
        }
    })
}

fn build_chart(data: &TrendChartData) -> CharmingChart {
    data.lines.iter().fold(
        line_chart_base("Occurrences per month", data.periods.clone(), "No. occurrences").legend(
            Legend::new()
                .orient(Orient::Vertical)
                .right("2%")
                .top("middle"),
        ),
        |chart, line| {
            chart.series(
                Line::new()
                    .name(line.keyword.as_str())
                    .data(line.values.clone())
                    .symbol_size(6)
                    .line_style(LineStyle::new().color(line.color).width(1.5))
                    .item_style(ItemStyle::new().color(line.color)),
            )
        },
    )
}
