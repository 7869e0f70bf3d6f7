pub mod chart;
pub mod drill_down_table;
pub mod history_graph;
pub mod keyword_selector;
pub mod status;
pub mod toplevel_toggle;
pub mod trend_series;
pub mod view_tabs;

pub use drill_down_table::DrillDownTable;
pub use history_graph::HistoryGraph;
pub use keyword_selector::KeywordSelector;
pub use toplevel_toggle::TopLevelToggle;
pub use trend_series::TrendSeries;
pub use view_tabs::ViewTabs;
