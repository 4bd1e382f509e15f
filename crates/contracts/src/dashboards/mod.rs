pub mod d410_funnel_forecast;
