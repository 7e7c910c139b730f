//! Vertical block layout and terminal output.
//!
//! Every element is a full-width block. Its content area is the block minus
//! `padding` on each side, and `margin_top` empty rows sit above it. Inside
//! the content area children stack top to bottom: a text child takes one row
//! and is drawn with the owning element's colors, an element child takes its
//! own outer height. An element without children still takes one row.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};
use menucss::{ComputedStyles, Document, NodeId, NodeKind, Style};

use crate::canvas::{Canvas, Region};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::style_mapper::StyleMapper;
use crate::theme::Theme;

const UNSTYLED: Style = Style {
    padding: 0,
    margin_top: 0,
    fg: None,
    bg: None,
};

const PADDING_MARKER: char = '·';

pub struct Renderer {
    config: RenderConfig,
    theme: Theme,
    mapper: StyleMapper,
}

impl Renderer {
    /// Fails with [`RenderError::UnknownTheme`](crate::RenderError::UnknownTheme)
    /// if the configured theme does not exist. A monochrome terminal always
    /// uses the default theme.
    pub fn new(config: RenderConfig) -> Result<Self> {
        let mut theme = Theme::named(&config.theme)?;
        if config.terminal.force_monochrome {
            theme = Theme::default();
        }
        let mapper = StyleMapper::new(config.terminal.force_monochrome);
        Ok(Self {
            config,
            theme,
            mapper,
        })
    }

    /// Lays out the tree under `root` into a canvas `width` cells wide and
    /// exactly as tall as the content.
    ///
    /// Elements missing from `styles` are drawn unstyled. The root falls back
    /// to the theme background; other elements without a background let
    /// their parent's show through. The canvas is at most `u16::MAX` rows
    /// tall; anything below that is clipped and a warning is logged.
    pub fn render(
        &self,
        doc: &Document,
        root: NodeId,
        styles: &ComputedStyles,
        width: u16,
    ) -> Result<Canvas> {
        let element = doc.element(root)?;

        if self.config.debug.log_computed_styles {
            for (id, style) in styles {
                let type_name = doc.element(id).map(|e| e.type_name()).unwrap_or("?");
                log::debug!("STYLE: {} <{}> {:?}", id, type_name, style);
            }
        }

        let needed = self.outer_height(doc, root, styles);
        let height = u16::try_from(needed).unwrap_or_else(|_| {
            log::warn!(
                "RENDER: <{}> needs {} rows, clipping to {}",
                element.type_name(),
                needed,
                u16::MAX
            );
            u16::MAX
        });
        let mut canvas = Canvas::new(width, height);
        let painted = self.paint_element(&mut canvas, doc, root, styles, 0, 0, i32::from(width), true);

        log::trace!(
            "RENDER: <{}> {}x{} ({} rows painted)",
            element.type_name(),
            width,
            height,
            painted
        );
        Ok(canvas)
    }

    /// Shows the tree full screen until `q` or `Esc` is pressed. The terminal
    /// is restored even if drawing fails.
    pub fn run(&self, doc: &Document, root: NodeId, styles: &ComputedStyles) -> Result<()> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.event_loop(&mut stdout, doc, root, styles);

        execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop<W: Write>(
        &self,
        out: &mut W,
        doc: &Document,
        root: NodeId,
        styles: &ComputedStyles,
    ) -> Result<()> {
        let (cols, _) = terminal::size()?;
        self.draw(out, doc, root, styles, cols)?;

        loop {
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
                Event::Resize(cols, _) => self.draw(out, doc, root, styles, cols)?,
                _ => {}
            }
        }
    }

    fn draw<W: Write>(
        &self,
        out: &mut W,
        doc: &Document,
        root: NodeId,
        styles: &ComputedStyles,
        cols: u16,
    ) -> Result<()> {
        let canvas = self.render(doc, root, styles, cols)?;
        execute!(out, terminal::Clear(ClearType::All))?;
        canvas.flush(out)?;
        Ok(())
    }

    fn style_of<'a>(&self, styles: &'a ComputedStyles, id: NodeId) -> &'a Style {
        styles.get(id).unwrap_or(&UNSTYLED)
    }

    /// Height of the element box, padding included, margin excluded.
    fn block_height(&self, doc: &Document, id: NodeId, styles: &ComputedStyles) -> i32 {
        let metrics = self.mapper.metrics(self.style_of(styles, id));
        let children = doc.children(id);
        let content = if children.is_empty() {
            1
        } else {
            children
                .iter()
                .map(|&child| {
                    if doc.is_element(child) {
                        self.outer_height(doc, child, styles)
                    } else {
                        1
                    }
                })
                .sum()
        };
        content + 2 * metrics.padding
    }

    fn outer_height(&self, doc: &Document, id: NodeId, styles: &ComputedStyles) -> i32 {
        let metrics = self.mapper.metrics(self.style_of(styles, id));
        metrics.margin_top + self.block_height(doc, id, styles)
    }

    /// Paints `id` with its margin starting at row `y` and returns the number
    /// of rows used.
    #[allow(clippy::too_many_arguments)]
    fn paint_element(
        &self,
        canvas: &mut Canvas,
        doc: &Document,
        id: NodeId,
        styles: &ComputedStyles,
        x: i32,
        y: i32,
        width: i32,
        is_root: bool,
    ) -> i32 {
        let style = self.style_of(styles, id);
        let metrics = self.mapper.metrics(style);
        let colors = self.mapper.colors(style, &self.theme);

        let block = Region::new(
            x,
            y + metrics.margin_top,
            width,
            self.block_height(doc, id, styles),
        );

        let bg = if is_root {
            colors.bg.or(Some(self.theme.background))
        } else {
            colors.bg
        };
        if let Some(bg) = bg {
            canvas.fill_bg(block, bg);
        }

        let content = block.inset(metrics.padding);
        if self.config.debug.show_layout_bounds && metrics.padding > 0 {
            mark_padding(canvas, block, content);
        }

        let mut row = content.y;
        for &child in doc.children(id) {
            match doc.get(child).map(|node| node.kind()) {
                Some(NodeKind::Element(_)) => {
                    row += self.paint_element(
                        canvas,
                        doc,
                        child,
                        styles,
                        content.x,
                        row,
                        content.width,
                        false,
                    );
                }
                Some(NodeKind::Text(text)) => {
                    canvas.put_str(
                        content.x,
                        row,
                        content.width,
                        text.text(),
                        Some(colors.fg),
                        None,
                    );
                    row += 1;
                }
                None => {}
            }
        }

        metrics.margin_top + block.height
    }
}

fn mark_padding(canvas: &mut Canvas, block: Region, content: Region) {
    for y in block.y..block.y + block.height {
        for x in block.x..block.x + block.width {
            if !content.contains_point(x, y) {
                canvas.put_symbol(x, y, PADDING_MARKER);
            }
        }
    }
}
