//! Rendering collaborators: one component per visualization, plus the
//! upload, filter and export panels. Aggregation results come in as plain
//! props; nothing in here computes over the event table.

mod channel_pie;
pub use channel_pie::ChannelPie;

mod hourly_line;
pub use hourly_line::HourlyVisitsLine;

mod top_products;
pub use top_products::TopProductsBar;

mod conversion;
pub use conversion::ConversionTile;

mod heatmap;
pub use heatmap::VisitHeatmap;

mod upload;
pub use upload::UploadCard;

mod filters;
pub use filters::FilterSidebar;

mod export;
pub use export::ExportPanel;

pub(crate) mod charts;
