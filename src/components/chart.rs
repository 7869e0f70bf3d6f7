use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::Callback;

const TITLE_COLOR: &str = "#1f2937";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#efefef";

#[wasm_bindgen]
extern "C" {
    type EchartsInstance;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn instance_for(element: &web_sys::Element) -> Option<EchartsInstance>;

    #[wasm_bindgen(method)]
    fn on(this: &EchartsInstance, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(method)]
    fn dispose(this: &EchartsInstance);
}

/// A click on a data point: which series, and the x-axis category under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartClick {
    pub series_index: usize,
    pub category: String,
}

impl ChartClick {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_event(params: &JsValue) -> Option<Self> {
        let series_index = js_sys::Reflect::get(params, &"seriesIndex".into())
            .ok()?
            .as_f64()?;
        let category = js_sys::Reflect::get(params, &"name".into())
            .ok()?
            .as_string()?;
        Some(Self {
            series_index: series_index as usize,
            category,
        })
    }
}

/// Owns the ECharts instance mounted on the element with id `chart_id`.
///
/// Every draw disposes the previous instance first, so series that are no longer
/// part of the chart do not linger. The instance is disposed on drop.
pub struct ChartSurface {
    chart_id: String,
    click_handler: RefCell<Option<Closure<dyn FnMut(JsValue)>>>,
}

impl ChartSurface {
    pub fn new(chart_id: impl Into<String>) -> Self {
        Self {
            chart_id: chart_id.into(),
            click_handler: RefCell::new(None),
        }
    }

    /// Renders `chart` at the container's current size and wires point clicks to `on_click`
    pub fn draw(
        &self,
        container: &HtmlElement,
        chart: &CharmingChart,
        on_click: Option<&Callback<ChartClick>>,
    ) {
        let width = container.client_width().cast_unsigned();
        let height = container.client_height().cast_unsigned();

        if width == 0 || height == 0 {
            return;
        }

        self.dispose();
        if let Err(e) = WasmRenderer::new(width, height).render(&self.chart_id, chart) {
            web_sys::console::error_1(&format!("Render error: {e:?}").into());
            return;
        }

        let (Some(callback), Some(instance)) = (on_click, self.instance()) else {
            return;
        };
        let callback = callback.clone();
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |params: JsValue| {
            if let Some(click) = ChartClick::from_event(&params) {
                callback.emit(click);
            }
        });
        instance.on("click", &handler);
        *self.click_handler.borrow_mut() = Some(handler);
    }

    fn instance(&self) -> Option<EchartsInstance> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(&self.chart_id)?;
        instance_for(&element)
    }

    fn dispose(&self) {
        if let Some(instance) = self.instance() {
            instance.dispose();
        }
        self.click_handler.borrow_mut().take();
    }
}

impl Drop for ChartSurface {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Shared layout for the dashboard's line charts: title, axis tooltip, category x-axis, value y-axis
pub fn line_chart_base(title: &str, x_data: Vec<String>, y_name: &str) -> CharmingChart {
    CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("8%")
                .right("12%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data)
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(y_name)
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
}
