pub mod color;
pub mod style;

pub use color::Color;
pub use style::Style;
