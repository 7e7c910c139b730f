use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::Write;
use unicode_display_width::width as display_width;
use unicode_segmentation::UnicodeSegmentation;

/// A signed rectangular region for layout and clipping.
///
/// Width and height are clamped to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Shrinks the region by `amount` cells on every side.
    pub fn inset(&self, amount: i32) -> Region {
        Region::new(
            self.x + amount,
            self.y + amount,
            self.width - 2 * amount,
            self.height - 2 * amount,
        )
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// One terminal cell. A wide grapheme is stored in its first cell and the
/// cells it covers to the right hold an empty symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            fg: None,
            bg: None,
        }
    }
}

pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Returns the canvas dimensions as (width, height).
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Sets the background of every cell in `region`.
    pub fn fill_bg(&mut self, region: Region, bg: Color) {
        for y in region.y..region.y + region.height {
            for x in region.x..region.x + region.width {
                if let Some(i) = self.index(x, y) {
                    self.cells[i].bg = Some(bg);
                }
            }
        }
    }

    /// Replaces the symbol of a single cell, keeping its colors.
    pub fn put_symbol(&mut self, x: i32, y: i32, symbol: char) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].symbol = symbol.to_string();
        }
    }

    /// Writes `text` starting at (x, y), never past `x + max_width`.
    ///
    /// Graphemes that would straddle the limit are dropped and control
    /// characters become spaces. When `bg` is `None` the existing background
    /// shows through. Returns the number of cells written.
    pub fn put_str(
        &mut self,
        x: i32,
        y: i32,
        max_width: i32,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
    ) -> i32 {
        if y < 0 || y >= self.height as i32 || max_width <= 0 {
            return 0;
        }
        let limit = x.saturating_add(max_width).min(self.width as i32);

        let mut current_x = x;
        for grapheme in text.graphemes(true) {
            // Control characters would move the terminal cursor on flush
            let grapheme = if grapheme.chars().any(char::is_control) {
                " "
            } else {
                grapheme
            };
            let cells = display_width(grapheme) as i32;
            if cells == 0 {
                continue;
            }
            if current_x + cells > limit {
                break;
            }
            for offset in 0..cells {
                if let Some(i) = self.index(current_x + offset, y) {
                    let cell = &mut self.cells[i];
                    cell.symbol = if offset == 0 {
                        grapheme.to_string()
                    } else {
                        String::new()
                    };
                    cell.fg = fg;
                    cell.bg = bg.or(cell.bg);
                }
            }
            current_x += cells;
        }
        current_x - x
    }

    /// Get all symbols in a row as a string for testing.
    pub fn row_str(&self, y: i32) -> String {
        if y < 0 || y >= self.height as i32 {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end]
            .iter()
            .map(|c| c.symbol.as_str())
            .collect()
    }

    /// Every row, joined with newlines.
    pub fn to_text(&self) -> String {
        (0..self.height as i32)
            .map(|y| self.row_str(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Like [`Canvas::to_text`] with trailing whitespace trimmed from each row.
    pub fn to_text_trimmed(&self) -> String {
        (0..self.height as i32)
            .map(|y| self.row_str(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the whole canvas to `out`, starting at the top-left corner.
    pub fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0), ResetColor)?;

        let mut last_fg: Option<Color> = None;
        let mut last_bg: Option<Color> = None;

        for (row_idx, row) in self.cells.chunks(self.width.max(1) as usize).enumerate() {
            queue!(out, cursor::MoveTo(0, row_idx as u16))?;
            for cell in row {
                if cell.symbol.is_empty() {
                    continue;
                }
                // Only send escape codes when the color actually changed
                if cell.fg != last_fg {
                    queue!(out, SetForegroundColor(cell.fg.unwrap_or(Color::Reset)))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(out, SetBackgroundColor(cell.bg.unwrap_or(Color::Reset)))?;
                    last_bg = cell.bg;
                }
                queue!(out, Print(&cell.symbol))?;
            }
        }

        queue!(out, ResetColor)?;
        out.flush()
    }
}
