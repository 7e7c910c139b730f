//! Builds the console menu, prints the computed styles and, with `--tui`,
//! shows the menu full screen until `q` is pressed.
//!
//! Run with: cargo run --example console -- --tui

use terminal_menu::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger("console.log")?;

    let mut doc = Document::new();
    let root = doc.div(Some("app"), Some("layout"));
    let title = doc.text("Console UI");
    let menu = doc.div(None, Some("menu"));
    let start = doc.button("Start", None, None);
    let settings = doc.button("Settings", None, Some("selected"));
    let quit = doc.button("Quit", None, None);
    doc.add(menu, &[start, settings, quit])?;
    doc.add(root, &[title, menu])?;

    let mut css = StyleSheet::new();
    css.rule("div.layout", |s| s.padding = 1)?
        .rule("button", |s| {
            s.fg = Some(Color::Black);
            s.bg = Some(Color::Gray);
        })?
        .rule("button.selected", |s| s.bg = Some(Color::Green))?;

    let computed = StyleComputer::compute(&doc, root, &css)?;

    for (id, style) in &computed {
        let element = doc.element(id)?;
        println!(
            "{} id={} classes=[{}] bg={}",
            element.type_name(),
            element.id().unwrap_or(""),
            element.sorted_classes().join(","),
            style.bg.map(|c| c.to_string()).unwrap_or_default()
        );
    }

    if std::env::args().any(|arg| arg == "--tui") {
        let mut config = RenderConfig::default();
        config.debug.log_computed_styles = true;
        Renderer::new(config)?.run(&doc, root, &computed)?;
    }

    Ok(())
}
