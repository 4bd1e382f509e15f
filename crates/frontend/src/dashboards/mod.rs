pub mod d410_funnel_forecast;

pub use d410_funnel_forecast::ui::FunnelForecastPage;
