//! Pixel data for the built-in 8-row font.
//!
//! Offsets are `(x, y)` relative to the glyph origin, `y` counted from the
//! top row. The last field of every entry is the advance width.

use super::Glyph;

const UPPER_A: Glyph = Glyph::new(
    &[
        (0, 6), (1, 4), (1, 5), (1, 6), (2, 1), (2, 2), (2, 3), (3, 0),
        (3, 3), (4, 0), (4, 3), (5, 1), (5, 2), (5, 3), (5, 4), (5, 5),
        (5, 6), (6, 6),
    ],
    8,
);

const UPPER_B: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0),
        (1, 3), (1, 6), (2, 0), (2, 3), (2, 6), (3, 0), (3, 3), (3, 6),
        (4, 1), (4, 2), (4, 4), (4, 5),
    ],
    6,
);

const UPPER_C: Glyph = Glyph::new(
    &[
        (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0), (1, 1), (1, 5),
        (1, 6), (2, 0), (2, 6), (3, 0), (3, 6), (4, 1), (4, 5),
    ],
    6,
);

const UPPER_D: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0),
        (1, 6), (2, 0), (2, 6), (3, 1), (3, 5), (4, 2), (4, 3), (4, 4),
    ],
    6,
);

const UPPER_E: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0),
        (1, 3), (1, 6), (2, 0), (2, 3), (2, 6), (3, 0), (3, 6),
    ],
    5,
);

const UPPER_F: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0),
        (1, 3), (2, 0), (2, 3), (3, 0),
    ],
    5,
);

const UPPER_G: Glyph = Glyph::new(
    &[
        (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0), (1, 6), (2, 0),
        (2, 4), (2, 6), (3, 0), (3, 4), (3, 5), (4, 1), (4, 2), (4, 4),
        (4, 5), (4, 6),
    ],
    6,
);

const UPPER_H: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 3),
        (2, 3), (3, 3), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5),
        (4, 6),
    ],
    6,
);

const UPPER_I: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    ],
    2,
);

const UPPER_J: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 5), (1, 0), (1, 6), (2, 0), (2, 6), (3, 0),
        (3, 1), (3, 2), (3, 3), (3, 4), (3, 5),
    ],
    5,
);

const UPPER_K: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 3),
        (2, 2), (2, 4), (3, 0), (3, 1), (3, 5), (3, 6),
    ],
    5,
);

const UPPER_L: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 6),
        (2, 6), (3, 6),
    ],
    6,
);

const UPPER_M: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 1),
        (1, 2), (2, 3), (3, 1), (3, 2), (4, 0), (4, 1), (4, 2), (4, 3),
        (4, 4), (4, 5), (4, 6),
    ],
    6,
);

const UPPER_N: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 1),
        (1, 2), (2, 3), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3), (3, 4),
        (3, 5), (3, 6),
    ],
    5,
);

const UPPER_O: Glyph = Glyph::new(
    &[
        (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0), (1, 1), (1, 5),
        (1, 6), (2, 0), (2, 6), (3, 0), (3, 1), (3, 5), (3, 6), (4, 1),
        (4, 2), (4, 3), (4, 4), (4, 5),
    ],
    6,
);

const UPPER_P: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0),
        (1, 3), (2, 0), (2, 3), (3, 0), (3, 3), (4, 1), (4, 2),
    ],
    6,
);

const UPPER_Q: Glyph = Glyph::new(
    &[
        (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0), (1, 1), (1, 5),
        (1, 6), (2, 0), (2, 4), (2, 6), (3, 0), (3, 1), (3, 5), (4, 1),
        (4, 2), (4, 3), (4, 4), (4, 6),
    ],
    6,
);

const UPPER_R: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0),
        (1, 3), (2, 0), (2, 3), (2, 4), (3, 1), (3, 2), (3, 5), (3, 6),
    ],
    5,
);

const UPPER_S: Glyph = Glyph::new(
    &[
        (0, 1), (0, 2), (0, 5), (1, 0), (1, 2), (1, 6), (2, 0), (2, 3),
        (2, 6), (3, 0), (3, 4), (3, 6), (4, 1), (4, 4), (4, 5),
    ],
    6,
);

const UPPER_T: Glyph = Glyph::new(
    &[
        (0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5),
        (2, 6), (3, 0), (4, 0),
    ],
    6,
);

const UPPER_U: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 5), (1, 6),
        (2, 5), (3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5), (3, 6),
    ],
    5,
);

const UPPER_V: Glyph = Glyph::new(
    &[
        (0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (2, 6),
        (3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5), (4, 0),
    ],
    6,
);

const UPPER_W: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (1, 5), (1, 6),
        (2, 0), (2, 1), (2, 3), (2, 4), (3, 4), (3, 5), (3, 6), (4, 0),
        (4, 1), (4, 2), (4, 3), (4, 4),
    ],
    6,
);

const UPPER_X: Glyph = Glyph::new(
    &[
        (0, 0), (0, 6), (1, 1), (1, 2), (1, 4), (1, 5), (1, 0), (2, 3),
        (3, 1), (3, 2), (3, 4), (3, 5), (4, 0), (4, 5), (4, 6),
    ],
    5,
);

const UPPER_Y: Glyph = Glyph::new(
    &[
        (0, 0), (1, 1), (2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (3, 0),
        (3, 1),
    ],
    5,
);

const UPPER_Z: Glyph = Glyph::new(
    &[
        (0, 0), (0, 5), (0, 6), (1, 0), (1, 3), (1, 4), (2, 0), (2, 2),
        (2, 3), (2, 6), (3, 0), (3, 1), (3, 3), (3, 6), (4, 0), (4, 1),
        (4, 6),
    ],
    6,
);

const LOWER_A: Glyph = Glyph::new(
    &[
        (0, 4), (0, 5), (1, 3), (1, 6), (2, 3), (2, 6), (3, 4), (3, 5),
        (4, 3), (4, 4), (4, 5), (4, 6),
    ],
    6,
);

const LOWER_B: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 3),
        (1, 6), (2, 3), (2, 6), (3, 4), (3, 5),
    ],
    5,
);

const LOWER_C: Glyph = Glyph::new(
    &[
        (0, 4), (0, 5), (1, 3), (1, 6), (2, 3), (2, 6),
    ],
    4,
);

const LOWER_D: Glyph = Glyph::new(
    &[
        (0, 4), (0, 5), (1, 3), (1, 6), (3, 0), (3, 1), (3, 2), (3, 3),
        (3, 4), (3, 5), (3, 6),
    ],
    5,
);

const LOWER_E: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 5), (1, 2), (1, 4), (1, 6), (2, 2), (2, 4),
        (2, 6), (3, 3), (3, 4), (3, 6),
    ],
    5,
);

const LOWER_F: Glyph = Glyph::new(
    &[
        (0, 3), (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
        (2, 0), (2, 3), (3, 0),
    ],
    5,
);

const LOWER_G: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 5), (0, 7), (1, 3), (1, 5), (1, 7), (2, 3),
        (2, 4), (2, 5), (2, 6), (2, 7),
    ],
    4,
);

const LOWER_H: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 3),
        (2, 3), (3, 3), (3, 4), (3, 5), (3, 6),
    ],
    5,
);

const LOWER_I: Glyph = Glyph::new(
    &[
        (0, 1), (0, 3), (0, 4), (0, 5), (0, 6),
    ],
    2,
);

const LOWER_J: Glyph = Glyph::new(
    &[
        (0, 7), (1, 1), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7),
    ],
    3,
);

const LOWER_K: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 5),
        (2, 3), (2, 4), (2, 6),
    ],
    4,
);

const LOWER_L: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 6), (2, 6),
    ],
    4,
);

const LOWER_M: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 5), (0, 6), (1, 4), (2, 4), (2, 5), (2, 6),
        (3, 4), (4, 4), (4, 5), (4, 6),
    ],
    6,
);

const LOWER_N: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 5), (0, 6), (1, 4), (2, 4), (2, 5), (2, 6),
    ],
    4,
);

const LOWER_O: Glyph = Glyph::new(
    &[
        (0, 4), (0, 5), (0, 6), (1, 3), (1, 6), (2, 3), (2, 6), (3, 4),
        (4, 5),
    ],
    5,
);

const LOWER_P: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 5), (0, 6), (1, 3), (1, 5), (2, 3), (2, 5),
        (3, 4),
    ],
    5,
);

const LOWER_Q: Glyph = Glyph::new(
    &[
        (0, 4), (1, 3), (1, 5), (2, 3), (2, 5), (3, 3), (3, 4), (3, 5),
        (3, 6), (3, 7),
    ],
    6,
);

const LOWER_R: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 5), (0, 6), (1, 4), (2, 3),
    ],
    4,
);

const LOWER_S: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 6), (1, 3), (1, 4), (1, 5), (2, 3), (2, 5),
        (2, 6),
    ],
    4,
);

const LOWER_T: Glyph = Glyph::new(
    &[
        (0, 2), (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
        (2, 2),
    ],
    4,
);

const LOWER_U: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 5), (1, 6), (2, 5), (3, 3), (3, 4), (3, 5),
        (3, 6),
    ],
    5,
);

const LOWER_V: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (1, 5), (1, 6), (2, 3), (2, 4),
    ],
    4,
);

const LOWER_W: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (1, 5), (1, 6), (2, 4), (3, 5), (3, 6), (4, 3),
        (4, 4),
    ],
    6,
);

const LOWER_X: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 6), (1, 5), (2, 3), (2, 4), (2, 6),
    ],
    4,
);

const LOWER_Y: Glyph = Glyph::new(
    &[
        (0, 3), (0, 4), (0, 5), (0, 7), (1, 5), (1, 7), (2, 3), (2, 4),
        (2, 5), (2, 6), (2, 7),
    ],
    4,
);

const LOWER_Z: Glyph = Glyph::new(
    &[
        (0, 3), (0, 6), (1, 3), (1, 5), (1, 6), (2, 3), (2, 4), (2, 6),
        (3, 3), (3, 6),
    ],
    5,
);

const DIGIT_0: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0),
        (1, 6), (2, 0), (2, 6), (3, 0), (3, 1), (3, 2), (3, 3), (3, 4),
        (3, 5), (3, 6),
    ],
    5,
);

const DIGIT_1: Glyph = Glyph::new(
    &[
        (0, 2), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2), (3, 3),
        (3, 4), (3, 5), (3, 6),
    ],
    5,
);

const DIGIT_2: Glyph = Glyph::new(
    &[
        (0, 1), (0, 6), (1, 0), (1, 4), (1, 5), (1, 6), (2, 0), (2, 3),
        (2, 6), (3, 1), (3, 2), (3, 4), (3, 6),
    ],
    5,
);

const DIGIT_3: Glyph = Glyph::new(
    &[
        (0, 0), (0, 3), (0, 6), (1, 0), (1, 3), (1, 6), (2, 0), (2, 2),
        (2, 3), (2, 6), (3, 1), (3, 2), (3, 4), (3, 5),
    ],
    5,
);

const DIGIT_4: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 3), (3, 4),
        (3, 5), (3, 6),
    ],
    5,
);

const DIGIT_5: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 5), (1, 0), (1, 3), (1, 6), (2, 0),
        (2, 3), (2, 6), (3, 0), (3, 4), (3, 5),
    ],
    5,
);

const DIGIT_6: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0),
        (1, 3), (1, 6), (2, 0), (2, 3), (2, 6), (3, 0), (3, 4), (3, 5),
    ],
    5,
);

const DIGIT_7: Glyph = Glyph::new(
    &[
        (0, 0), (0, 3), (0, 5), (0, 6), (1, 0), (1, 3), (1, 4), (2, 0),
        (2, 1), (2, 2), (2, 3), (3, 0), (3, 1), (3, 3),
    ],
    5,
);

const DIGIT_8: Glyph = Glyph::new(
    &[
        (0, 1), (0, 2), (0, 4), (0, 5), (1, 0), (1, 3), (1, 6), (2, 0),
        (2, 3), (2, 6), (3, 1), (3, 2), (3, 4), (3, 5),
    ],
    5,
);

const DIGIT_9: Glyph = Glyph::new(
    &[
        (0, 1), (0, 2), (0, 3), (0, 5), (0, 6), (1, 0), (1, 3), (1, 6),
        (2, 0), (2, 3), (2, 6), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5),
    ],
    5,
);

const SPACE: Glyph = Glyph::new(&[], 1);

const SLASH: Glyph = Glyph::new(
    &[
        (0, 5), (0, 6), (1, 2), (1, 3), (1, 4), (1, 5), (2, 0), (2, 1),
        (2, 2),
    ],
    4,
);

const QUESTION: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 3), (0, 4), (1, 0), (1, 2), (1, 4), (1, 6),
        (2, 0), (2, 1), (2, 4),
    ],
    4,
);

const PERIOD: Glyph = Glyph::new(
    &[
        (0, 6),
    ],
    2,
);

const EXCLAMATION: Glyph = Glyph::new(
    &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 6),
    ],
    2,
);

const COLON: Glyph = Glyph::new(
    &[
        (0, 3), (0, 5),
    ],
    2,
);

const SEMICOLON: Glyph = Glyph::new(
    &[
        (0, 3), (0, 5), (0, 6), (0, 7),
    ],
    2,
);

const COMMA: Glyph = Glyph::new(
    &[
        (0, 6), (0, 7), (1, 5),
    ],
    2,
);

/// Every glyph in the font, keyed by its character.
pub(super) const ENTRIES: [(char, Glyph); 70] = [
    ('A', UPPER_A),
    ('B', UPPER_B),
    ('C', UPPER_C),
    ('D', UPPER_D),
    ('E', UPPER_E),
    ('F', UPPER_F),
    ('G', UPPER_G),
    ('H', UPPER_H),
    ('I', UPPER_I),
    ('J', UPPER_J),
    ('K', UPPER_K),
    ('L', UPPER_L),
    ('M', UPPER_M),
    ('N', UPPER_N),
    ('O', UPPER_O),
    ('P', UPPER_P),
    ('Q', UPPER_Q),
    ('R', UPPER_R),
    ('S', UPPER_S),
    ('T', UPPER_T),
    ('U', UPPER_U),
    ('V', UPPER_V),
    ('W', UPPER_W),
    ('X', UPPER_X),
    ('Y', UPPER_Y),
    ('Z', UPPER_Z),
    ('a', LOWER_A),
    ('b', LOWER_B),
    ('c', LOWER_C),
    ('d', LOWER_D),
    ('e', LOWER_E),
    ('f', LOWER_F),
    ('g', LOWER_G),
    ('h', LOWER_H),
    ('i', LOWER_I),
    ('j', LOWER_J),
    ('k', LOWER_K),
    ('l', LOWER_L),
    ('m', LOWER_M),
    ('n', LOWER_N),
    ('o', LOWER_O),
    ('p', LOWER_P),
    ('q', LOWER_Q),
    ('r', LOWER_R),
    ('s', LOWER_S),
    ('t', LOWER_T),
    ('u', LOWER_U),
    ('v', LOWER_V),
    ('w', LOWER_W),
    ('x', LOWER_X),
    ('y', LOWER_Y),
    ('z', LOWER_Z),
    ('0', DIGIT_0),
    ('1', DIGIT_1),
    ('2', DIGIT_2),
    ('3', DIGIT_3),
    ('4', DIGIT_4),
    ('5', DIGIT_5),
    ('6', DIGIT_6),
    ('7', DIGIT_7),
    ('8', DIGIT_8),
    ('9', DIGIT_9),
    (' ', SPACE),
    ('/', SLASH),
    ('?', QUESTION),
    ('.', PERIOD),
    ('!', EXCLAMATION),
    (':', COLON),
    (';', SEMICOLON),
    (',', COMMA),
];
