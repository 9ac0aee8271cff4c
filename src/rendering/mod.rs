use crate::domain::{BoundingBox, LiveSet};

/// Characters used for live and dead cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { alive: '\u{25A3}', dead: '\u{25A2}' }
    }
}

/// Text renderer for a single generation
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    glyphs: Glyphs,
}

impl Renderer {
    pub const fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// Draw the bounding box of `cells`, top row first.
    /// Columns are separated by one space and every row ends with a newline.
    pub fn render(&self, cells: &LiveSet) -> String {
        let bounds = BoundingBox::of(cells);
        let mut out = String::new();

        for y in (bounds.bottom_left.y..=bounds.top_right.y).rev() {
            let row: Vec<String> = (bounds.bottom_left.x..=bounds.top_right.x)
                .map(|x| self.glyph(cells.contains((x, y).into())).to_string())
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }

    /// Render every generation, each block followed by a blank line
    pub fn render_generations(&self, generations: &[LiveSet]) -> String {
        generations
            .iter()
            .map(|cells| self.render(cells) + "\n")
            .collect()
    }

    const fn glyph(&self, alive: bool) -> char {
        if alive { self.glyphs.alive } else { self.glyphs.dead }
    }
}

/// Render with the default glyphs
pub fn render(cells: &LiveSet) -> String {
    Renderer::default().render(cells)
}
