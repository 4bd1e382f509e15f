pub mod controls;
pub mod kpi_strip;
pub mod page;
pub mod projection_table;

pub use page::FunnelForecastPage;
