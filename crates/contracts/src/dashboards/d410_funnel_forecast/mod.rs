//! D410 Funnel Forecast: ad spend → clicks → leads → bookings → shows → deals → cash,
//! plus a month-by-month projection under growing spend.

pub mod calculator;
pub mod dto;
pub mod fields;
pub mod kpi;
pub mod projector;

pub use calculator::compute;
pub use dto::*;
pub use fields::{InputField, Section, Widget};
pub use projector::{project, summarize};
