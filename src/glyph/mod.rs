//! Built-in ASCII font
//!
//! Glyphs are pure data: a list of lit `(x, y)` offsets and an advance width.
//! The lookup table is built at compile time and indexed by ASCII code, so a
//! lookup is a single array access.

mod table;

use crate::bounds::TILE_SIZE;

/// Number of rows every glyph is drawn in.
pub const GLYPH_HEIGHT: u8 = 8;

/// Size of the ASCII lookup table.
const ASCII_LEN: usize = 128;

/// One character of the font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    points: &'static [(u8, u8)],
    advance: u8,
}

impl Glyph {
    /// Glyph used for characters without a table entry
    pub const EMPTY: Self = Self::new(&[], 0);

    /// Create a glyph from its offsets and advance width
    pub const fn new(points: &'static [(u8, u8)], advance: u8) -> Self {
        let mut i = 0;
        while i < points.len() {
            assert!((points[i].0 as u16) < TILE_SIZE, "glyph column out of range");
            assert!(points[i].1 < GLYPH_HEIGHT, "glyph row out of range");
            i += 1;
        }
        Self { points, advance }
    }

    /// Lit offsets relative to the glyph origin
    pub const fn points(&self) -> &'static [(u8, u8)] {
        self.points
    }

    /// How far the cursor moves after this glyph
    pub const fn advance(&self) -> u8 {
        self.advance
    }

    pub const fn is_empty(&self) -> bool {
        self.points.is_empty() && self.advance == 0
    }
}

const fn build_table(entries: &[(char, Glyph)]) -> [Glyph; ASCII_LEN] {
    let mut glyphs = [Glyph::EMPTY; ASCII_LEN];
    let mut i = 0;
    while i < entries.len() {
        let (character, glyph) = entries[i];
        let code = character as usize;
        assert!(code < ASCII_LEN, "font must be ASCII only");
        assert!(glyphs[code].is_empty(), "duplicate character in font");
        glyphs[code] = glyph;
        i += 1;
    }
    glyphs
}

static GLYPHS: [Glyph; ASCII_LEN] = build_table(&table::ENTRIES);

/// Look up the glyph for a character
///
/// Non-ASCII characters and ASCII characters missing from the font resolve to
/// [`Glyph::EMPTY`].
pub fn glyph_for(character: char) -> Glyph {
    if !character.is_ascii() {
        return Glyph::EMPTY;
    }
    GLYPHS[character as usize]
}

/// Total advance width of a string, in columns
pub fn text_width(text: &str) -> usize {
    text.chars()
        .map(|character| usize::from(glyph_for(character).advance()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_reachable() {
        for (character, glyph) in table::ENTRIES {
            assert_eq!(glyph_for(character), glyph);
        }
    }

    #[test]
    fn control_characters_are_empty() {
        assert!(glyph_for('\n').is_empty());
        assert!(glyph_for('\0').is_empty());
    }
}
