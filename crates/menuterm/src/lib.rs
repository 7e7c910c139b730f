//! # menuterm
//!
//! Draws a [`menucss`] tree in the terminal using its computed styles.
//!
//! ```rust
//! use menucss::{Color, Document, StyleComputer, StyleSheet};
//! use menuterm::{RenderConfig, Renderer};
//!
//! let mut doc = Document::new();
//! let root = doc.div(Some("app"), None);
//! let ok = doc.button("OK", None, None);
//! doc.add(root, &[ok])?;
//!
//! let mut sheet = StyleSheet::new();
//! sheet.rule("button", |s| s.bg = Some(Color::Green))?;
//! let styles = StyleComputer::compute(&doc, root, &sheet)?;
//!
//! let canvas = Renderer::new(RenderConfig::default())?.render(&doc, root, &styles, 10)?;
//! assert_eq!(canvas.to_text_trimmed(), "OK");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod log_init;
pub mod renderer;
pub mod style_mapper;
pub mod theme;

pub use canvas::{Canvas, Cell, Region};
pub use color::to_terminal_color;
pub use config::{DebugConfig, RenderConfig, TerminalConfig};
pub use error::{RenderError, Result};
pub use log_init::init_logger;
pub use renderer::Renderer;
pub use style_mapper::{BoxMetrics, CellColors, StyleMapper};
pub use theme::Theme;
