/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the trends API, injected at build time via `HN_TRENDS_API_URL`
    pub const API_URL: &'static str = match option_env!("HN_TRENDS_API_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Prefix for links to individual Hacker News items
    pub const ITEM_URL_BASE: &'static str = "https://news.ycombinator.com/item?id=";

    /// Directory the keyword logos are served from
    pub const ASSET_DIR: &'static str = "assets";

    /// Quiet period after a keyword selection change before the trend series is refetched
    pub const SELECTION_DEBOUNCE_MS: u32 = 250;

    /// Quiet period after a window resize before charts are redrawn
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// localStorage key for the active view
    pub const VIEW_STORAGE_KEY: &'static str = "view";

    /// Line colors for keyword trend series. The 11th keyword reuses the first color.
    pub const PALETTE: [&'static str; 10] = [
        "#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#83a6ed", "#8dd1e1", "#a4de6c", "#d0ed57",
        "#ffc0cb", "#00ced1",
    ];

    /// Line color for the aggregate history charts
    pub const HISTORY_COLOR: &'static str = "#ff6600";

    /// Returns the palette color for the line at `index`
    pub const fn palette_color(index: usize) -> &'static str {
        Self::PALETTE[index % Self::PALETTE.len()]
    }
}
