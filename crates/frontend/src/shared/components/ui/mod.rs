pub mod button;
pub mod number_field;
pub mod slider;

pub use button::{Button, ButtonVariant};
pub use number_field::NumberField;
pub use slider::Slider;
