/// Options for a [`Renderer`](crate::Renderer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub debug: DebugConfig,
    /// Theme name, resolved with [`Theme::named`](crate::Theme::named).
    pub theme: String,
    pub terminal: TerminalConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            debug: DebugConfig::default(),
            theme: "default".to_string(),
            terminal: TerminalConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugConfig {
    /// Paint padding cells with a dot so element boxes are visible.
    pub show_layout_bounds: bool,
    /// Log every computed style at debug level before rendering.
    pub log_computed_styles: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Ignore palette colors and draw with the terminal defaults.
    pub force_monochrome: bool,
}
