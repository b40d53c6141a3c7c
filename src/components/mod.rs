pub mod report_view;
pub mod search_bar;
pub mod widget;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use report_view::{ReportView, ReportViewProps, ERROR_ICON};
pub use search_bar::{SearchBar, SearchBarProps};
pub use widget::{WeatherWidget, WeatherWidgetProps};
