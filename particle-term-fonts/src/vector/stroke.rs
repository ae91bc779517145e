//! Stroke alphabets drawn as polylines inside a style-specific frame.
//!
//! One glyph set serves every stroke font; a [`StrokeStyle`] moves the frame
//! edges and toggles a handful of distinguishing features.

use crate::glyph_source::VectorSegment;
use crate::legacy::FULL_BLOCK;

/// Frame and feature flags for a stroke font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub id: u32,
    pub name: &'static str,
    /// Nominal width in virtual-raster columns.
    pub width: u32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    /// Draw lowercase as shortened capitals instead of real lowercase forms.
    pub small_caps: bool,
    pub slashed_zero: bool,
    /// Capital I with top and bottom bars.
    pub serif_i: bool,
    /// Crossbar through 7 and Z.
    pub crossed_seven: bool,
    /// Draw a small box for characters without a glyph.
    pub missing_box: bool,
}

impl StrokeStyle {
    /// Angular HUD lettering with small-caps lowercase.
    pub const TECH: StrokeStyle = StrokeStyle {
        id: 3,
        name: "Tech Vector 12x18",
        width: 12,
        left: 0.2,
        right: 0.8,
        top: 0.1,
        bottom: 0.9,
        small_caps: true,
        slashed_zero: true,
        serif_i: true,
        crossed_seven: false,
        missing_box: true,
    };

    pub const MODERN: StrokeStyle = StrokeStyle {
        id: 4,
        name: "Modern Term",
        width: 10,
        left: 0.2,
        right: 0.8,
        top: 0.15,
        bottom: 0.85,
        small_caps: false,
        slashed_zero: false,
        serif_i: false,
        crossed_seven: false,
        missing_box: false,
    };

    pub const CODE_PRO: StrokeStyle = StrokeStyle {
        id: 5,
        name: "Code Pro",
        width: 12,
        left: 0.2,
        right: 0.8,
        top: 0.15,
        bottom: 0.85,
        small_caps: false,
        slashed_zero: true,
        serif_i: true,
        crossed_seven: true,
        missing_box: false,
    };

    pub const CRT_RETRO: StrokeStyle = StrokeStyle {
        id: 6,
        name: "CRT Retro",
        width: 12,
        left: 0.15,
        right: 0.85,
        top: 0.1,
        bottom: 0.9,
        small_caps: false,
        slashed_zero: false,
        serif_i: true,
        crossed_seven: false,
        missing_box: false,
    };

    /// Segments for the glyph in legacy slot `index`.
    pub fn segments(&self, index: u32) -> Vec<VectorSegment> {
        let mut pen = Pen::new(self);

        if index == FULL_BLOCK {
            pen.block();
            return pen.out;
        }

        let (ch, accent) = match accented(index) {
            Some(pair) => pair,
            None => match char::from_u32(index) {
                Some(ch) if ch.is_ascii() => (ch, None),
                _ => ('\0', None),
            },
        };

        let drawn = if ch.is_ascii_lowercase() && self.small_caps {
            pen.with_top(pen.mid - 0.1, |p| p.upper(ch.to_ascii_uppercase()))
        } else if ch.is_ascii_lowercase() {
            pen.lower(ch)
        } else if ch.is_ascii_uppercase() {
            pen.upper(ch)
        } else {
            pen.other(ch)
        };

        if let Some(accent) = accent {
            let above = if ch.is_ascii_lowercase() {
                pen.x_height()
            } else {
                pen.top
            };
            pen.accent(accent, above);
        }

        if !drawn && self.missing_box && ch != ' ' {
            pen.missing();
        }
        pen.out
    }
}

#[derive(Debug, Clone, Copy)]
enum Accent {
    Acute,
    Grave,
    Circumflex,
    Diaeresis,
    Ring,
    Cedilla,
}

/// Base letter and accent for the accented legacy slots 128..=154.
fn accented(index: u32) -> Option<(char, Option<Accent>)> {
    use Accent::*;
    let pair = match index {
        128 => ('C', Some(Cedilla)),
        129 => ('u', Some(Diaeresis)),
        130 => ('e', Some(Acute)),
        131 => ('a', Some(Circumflex)),
        132 => ('a', Some(Diaeresis)),
        133 => ('a', Some(Grave)),
        134 => ('a', Some(Ring)),
        135 => ('c', Some(Cedilla)),
        136 => ('e', Some(Circumflex)),
        137 => ('e', Some(Diaeresis)),
        138 => ('e', Some(Grave)),
        139 => ('i', Some(Diaeresis)),
        140 => ('i', Some(Circumflex)),
        141 => ('i', Some(Grave)),
        142 => ('A', Some(Diaeresis)),
        143 => ('A', Some(Ring)),
        144 => ('E', Some(Acute)),
        145 => ('a', None),
        146 => ('A', None),
        147 => ('o', Some(Circumflex)),
        148 => ('o', Some(Diaeresis)),
        149 => ('o', Some(Grave)),
        150 => ('u', Some(Circumflex)),
        151 => ('u', Some(Grave)),
        152 => ('y', Some(Diaeresis)),
        153 => ('O', Some(Diaeresis)),
        154 => ('U', Some(Diaeresis)),
        _ => return None,
    };
    Some(pair)
}

/// Accumulates segments for one glyph inside the style's frame.
struct Pen<'a> {
    style: &'a StrokeStyle,
    l: f32,
    r: f32,
    top: f32,
    b: f32,
    mid: f32,
    cx: f32,
    out: Vec<VectorSegment>,
}

impl<'a> Pen<'a> {
    fn new(style: &'a StrokeStyle) -> Self {
        Self {
            style,
            l: style.left,
            r: style.right,
            top: style.top,
            b: style.bottom,
            mid: 0.5,
            cx: 0.5,
            out: Vec::new(),
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.out.push(VectorSegment::new(x1, y1, x2, y2));
    }

    fn path(&mut self, points: &[(f32, f32)]) {
        for pair in points.windows(2) {
            self.line(pair[0].0, pair[0].1, pair[1].0, pair[1].1);
        }
    }

    fn dot(&mut self, x: f32, y: f32) {
        self.line(x, y, x, y + 0.04);
    }

    fn x_height(&self) -> f32 {
        self.mid - 0.1
    }

    fn descender(&self) -> f32 {
        (self.b + 0.08).min(0.98)
    }

    fn with_top(&mut self, top: f32, draw: impl FnOnce(&mut Self) -> bool) -> bool {
        let saved = self.top;
        self.top = top;
        let drawn = draw(self);
        self.top = saved;
        drawn
    }

    fn block(&mut self) {
        let (l, r, t, b) = (self.l, self.r, self.top, self.b);
        self.path(&[(l, t), (r, t), (r, b), (l, b), (l, t)]);
        self.line(l, t, r, b);
        self.line(r, t, l, b);
    }

    fn missing(&mut self) {
        let (cx, m, s) = (self.cx, self.mid, 0.2);
        self.path(&[
            (cx - s, m - s),
            (cx + s, m - s),
            (cx + s, m + s),
            (cx - s, m + s),
            (cx - s, m - s),
        ]);
    }

    fn upper(&mut self, ch: char) -> bool {
        let (l, r, t, b, m, cx) = (self.l, self.r, self.top, self.b, self.mid, self.cx);
        // Middle of the current frame; differs from `m` in small caps.
        let fm = (t + b) * 0.5;
        match ch {
            'A' => {
                self.path(&[(l, b), (cx, t), (r, b)]);
                self.line(l + 0.1, fm + 0.05, r - 0.1, fm + 0.05);
            }
            'B' => {
                self.path(&[
                    (l, t),
                    (r - 0.1, t),
                    (r, t + 0.1),
                    (r, fm - 0.1),
                    (r - 0.1, fm),
                    (r, fm + 0.1),
                    (r, b - 0.1),
                    (r - 0.1, b),
                    (l, b),
                    (l, t),
                ]);
                self.line(l, fm, r - 0.1, fm);
            }
            'C' => self.path(&[(r, t + 0.1), (r, t), (l, t), (l, b), (r, b), (r, b - 0.1)]),
            'D' => self.path(&[
                (l, b),
                (l, t),
                (r - 0.2, t),
                (r, t + 0.2),
                (r, b - 0.2),
                (r - 0.2, b),
                (l, b),
            ]),
            'E' => {
                self.path(&[(r, t), (l, t), (l, b), (r, b)]);
                self.line(l, fm, r - 0.15, fm);
            }
            'F' => {
                self.path(&[(r, t), (l, t), (l, b)]);
                self.line(l, fm, r - 0.15, fm);
            }
            'G' => self.path(&[
                (r, t + 0.1),
                (r, t),
                (l, t),
                (l, b),
                (r, b),
                (r, fm),
                (cx, fm),
            ]),
            'H' => {
                self.line(l, t, l, b);
                self.line(r, t, r, b);
                self.line(l, fm, r, fm);
            }
            'I' => {
                self.line(cx, t, cx, b);
                if self.style.serif_i {
                    self.line(l + 0.1, t, r - 0.1, t);
                    self.line(l + 0.1, b, r - 0.1, b);
                }
            }
            'J' => self.path(&[(r, t), (r, b), (l + 0.15, b), (l, b - 0.15), (l, fm + 0.1)]),
            'K' => {
                self.line(l, t, l, b);
                self.path(&[(r, t), (l, fm), (r, b)]);
            }
            'L' => self.path(&[(l, t), (l, b), (r, b)]),
            'M' => self.path(&[(l, b), (l, t), (cx, fm), (r, t), (r, b)]),
            'N' => self.path(&[(l, b), (l, t), (r, b), (r, t)]),
            'O' => self.path(&[(l, t), (r, t), (r, b), (l, b), (l, t)]),
            'P' => self.path(&[(l, b), (l, t), (r, t), (r, fm), (l, fm)]),
            'Q' => {
                self.path(&[(l, t), (r, t), (r, b), (l, b), (l, t)]);
                self.line(cx, fm + 0.1, r + 0.05, b + 0.05);
            }
            'R' => self.path(&[(l, b), (l, t), (r, t), (r, fm), (l, fm), (r, b)]),
            'S' => self.path(&[(r, t), (l, t), (l, fm), (r, fm), (r, b), (l, b)]),
            'T' => {
                self.line(l, t, r, t);
                self.line(cx, t, cx, b);
            }
            'U' => self.path(&[(l, t), (l, b), (r, b), (r, t)]),
            'V' => self.path(&[(l, t), (cx, b), (r, t)]),
            'W' => self.path(&[(l, t), (l, b), (cx, fm), (r, b), (r, t)]),
            'X' => {
                self.line(l, t, r, b);
                self.line(r, t, l, b);
            }
            'Y' => {
                self.path(&[(l, t), (cx, fm), (r, t)]);
                self.line(cx, fm, cx, b);
            }
            'Z' => {
                self.path(&[(l, t), (r, t), (l, b), (r, b)]);
                if self.style.crossed_seven {
                    self.line(cx - 0.1, m, cx + 0.1, m);
                }
            }
            _ => return false,
        }
        true
    }

    fn lower(&mut self, ch: char) -> bool {
        let (l, r, t, b, cx) = (self.l, self.r, self.top, self.b, self.cx);
        let xt = self.x_height();
        let xm = (xt + b) * 0.5;
        let d = self.descender();
        match ch {
            'a' => {
                self.path(&[(l, xt), (r, xt), (r, b)]);
                self.path(&[(r, xm), (l, xm), (l, b), (r, b)]);
            }
            'b' => self.path(&[(l, t), (l, b), (r, b), (r, xt), (l, xt)]),
            'c' => self.path(&[(r, xt), (l, xt), (l, b), (r, b)]),
            'd' => self.path(&[(r, t), (r, b), (l, b), (l, xt), (r, xt)]),
            'e' => self.path(&[(l, xm), (r, xm), (r, xt), (l, xt), (l, b), (r, b)]),
            'f' => {
                self.path(&[(r, t), (cx, t), (cx, b)]);
                self.line(l, xt, r, xt);
            }
            'g' => self.path(&[(r, b), (l, b), (l, xt), (r, xt), (r, d), (l, d)]),
            'h' => {
                self.line(l, t, l, b);
                self.path(&[(l, xt), (r, xt), (r, b)]);
            }
            'i' => {
                self.line(cx, xt, cx, b);
                self.dot(cx, xt - 0.12);
            }
            'j' => {
                self.path(&[(cx, xt), (cx, d), (l, d)]);
                self.dot(cx, xt - 0.12);
            }
            'k' => {
                self.line(l, t, l, b);
                self.path(&[(r, xt), (l, xm), (r, b)]);
            }
            'l' => self.path(&[(l + 0.1, t), (cx, t), (cx, b), (r, b)]),
            'm' => {
                self.path(&[(l, b), (l, xt), (r, xt), (r, b)]);
                self.line(cx, xt, cx, b);
            }
            'n' => self.path(&[(l, b), (l, xt), (r, xt), (r, b)]),
            'o' => self.path(&[(l, xt), (r, xt), (r, b), (l, b), (l, xt)]),
            'p' => self.path(&[(l, d), (l, xt), (r, xt), (r, b), (l, b)]),
            'q' => self.path(&[(r, d), (r, xt), (l, xt), (l, b), (r, b)]),
            'r' => {
                self.line(l, b, l, xt);
                self.path(&[(l, xm), (cx, xt), (r, xt)]);
            }
            's' => self.path(&[(r, xt), (l, xt), (l, xm), (r, xm), (r, b), (l, b)]),
            't' => {
                self.path(&[(cx, t + 0.1), (cx, b), (r, b)]);
                self.line(l, xt, r, xt);
            }
            'u' => self.path(&[(l, xt), (l, b), (r, b), (r, xt)]),
            'v' => self.path(&[(l, xt), (cx, b), (r, xt)]),
            'w' => self.path(&[(l, xt), (l, b), (cx, xm), (r, b), (r, xt)]),
            'x' => {
                self.line(l, xt, r, b);
                self.line(r, xt, l, b);
            }
            'y' => {
                self.line(l, xt, cx, b);
                self.line(r, xt, l + 0.05, d);
            }
            'z' => self.path(&[(l, xt), (r, xt), (l, b), (r, b)]),
            _ => return false,
        }
        true
    }

    fn other(&mut self, ch: char) -> bool {
        let (l, r, t, b, m, cx) = (self.l, self.r, self.top, self.b, self.mid, self.cx);
        match ch {
            ' ' | '\0' => return false,
            '0' => {
                self.path(&[(l, t), (r, t), (r, b), (l, b), (l, t)]);
                if self.style.slashed_zero {
                    self.line(r, t, l, b);
                }
            }
            '1' => {
                self.line(cx, t, cx, b);
                self.line(l + 0.1, t + 0.15, cx, t);
            }
            '2' => self.path(&[(l, t), (r, t), (r, m), (l, m), (l, b), (r, b)]),
            '3' => {
                self.path(&[(l, t), (r, t), (r, b), (l, b)]);
                self.line(l + 0.1, m, r, m);
            }
            '4' => {
                self.path(&[(l, t), (l, m), (r, m)]);
                self.line(r, t, r, b);
            }
            '5' => self.path(&[(r, t), (l, t), (l, m), (r, m), (r, b), (l, b)]),
            '6' => self.path(&[(r, t), (l, t), (l, b), (r, b), (r, m), (l, m)]),
            '7' => {
                self.path(&[(l, t), (r, t), (l + 0.15, b)]);
                if self.style.crossed_seven {
                    self.line(cx - 0.1, m, cx + 0.1, m);
                }
            }
            '8' => {
                self.path(&[(l, t), (r, t), (r, b), (l, b), (l, t)]);
                self.line(l, m, r, m);
            }
            '9' => self.path(&[(l, b), (r, b), (r, t), (l, t), (l, m), (r, m)]),

            '-' => self.line(l, m, r, m),
            '_' => self.line(l, b, r, b),
            '=' => {
                self.line(l, m - 0.1, r, m - 0.1);
                self.line(l, m + 0.1, r, m + 0.1);
            }
            '+' => {
                self.line(l, m, r, m);
                self.line(cx, m - 0.2, cx, m + 0.2);
            }
            '<' => self.path(&[(r, t + 0.1), (l, m), (r, b - 0.1)]),
            '>' => self.path(&[(l, t + 0.1), (r, m), (l, b - 0.1)]),
            '/' => self.line(r, t, l, b),
            '\\' => self.line(l, t, r, b),
            '|' => self.line(cx, t, cx, b),
            '[' => self.path(&[(r - 0.15, t), (l + 0.1, t), (l + 0.1, b), (r - 0.15, b)]),
            ']' => self.path(&[(l + 0.15, t), (r - 0.1, t), (r - 0.1, b), (l + 0.15, b)]),
            '(' => self.path(&[(cx + 0.1, t), (cx - 0.1, m), (cx + 0.1, b)]),
            ')' => self.path(&[(cx - 0.1, t), (cx + 0.1, m), (cx - 0.1, b)]),
            '{' => {
                self.path(&[(r, t), (cx, t), (cx, b), (r, b)]);
                self.line(cx, m, l, m);
            }
            '}' => {
                self.path(&[(l, t), (cx, t), (cx, b), (l, b)]);
                self.line(cx, m, r, m);
            }
            '.' => self.dot(cx, b - 0.04),
            ',' => self.line(cx, b - 0.1, cx - 0.1, b + 0.05),
            ':' => {
                self.dot(cx, m - 0.2);
                self.dot(cx, m + 0.2);
            }
            ';' => {
                self.dot(cx, m - 0.2);
                self.line(cx, m + 0.2, cx - 0.1, m + 0.35);
            }
            '!' => {
                self.line(cx, t, cx, b - 0.2);
                self.dot(cx, b - 0.04);
            }
            '?' => {
                self.path(&[(l, t + 0.1), (l + 0.1, t), (r, t), (r, m), (cx, m), (cx, b - 0.2)]);
                self.dot(cx, b - 0.04);
            }
            '"' => {
                self.line(cx - 0.1, t, cx - 0.1, t + 0.2);
                self.line(cx + 0.1, t, cx + 0.1, t + 0.2);
            }
            '\'' => self.line(cx, t, cx, t + 0.2),
            '`' => self.line(cx - 0.1, t, cx + 0.1, t + 0.15),
            '^' => self.path(&[(l, m), (cx, t), (r, m)]),
            '~' => self.path(&[(l, m), (l + 0.2, m - 0.1), (r - 0.2, m + 0.1), (r, m)]),
            '*' => {
                self.line(l, m - 0.2, r, m + 0.2);
                self.line(r, m - 0.2, l, m + 0.2);
                self.line(cx, m - 0.3, cx, m + 0.3);
            }
            '#' => {
                self.line(l + 0.15, t, l + 0.15, b);
                self.line(r - 0.15, t, r - 0.15, b);
                self.line(l, t + 0.25, r, t + 0.25);
                self.line(l, b - 0.25, r, b - 0.25);
            }
            '$' => {
                self.path(&[(r, t + 0.1), (l, t + 0.1), (l, m), (r, m), (r, b - 0.1), (l, b - 0.1)]);
                self.line(cx, t - 0.05, cx, b + 0.05);
            }
            '%' => {
                self.path(&[(l, t), (l + 0.2, t), (l + 0.2, t + 0.2), (l, t + 0.2), (l, t)]);
                self.path(&[(r - 0.2, b - 0.2), (r, b - 0.2), (r, b), (r - 0.2, b), (r - 0.2, b - 0.2)]);
                self.line(r, t, l, b);
            }
            '&' => {
                self.path(&[(r, m), (l, m), (l, b), (r, b)]);
                self.path(&[(r, b), (l, t), (r - 0.1, t), (r, m)]);
            }
            '@' => self.path(&[
                (r, b),
                (l, b),
                (l, t),
                (r, t),
                (r, m + 0.1),
                (cx, m + 0.1),
                (cx, m - 0.1),
                (r, m - 0.1),
            ]),
            _ => return false,
        }
        true
    }

    fn accent(&mut self, accent: Accent, above: f32) {
        let (l, r, b, cx) = (self.l, self.r, self.b, self.cx);
        let y0 = (above - 0.1).max(0.0);
        let y1 = (above - 0.03).max(0.0);
        match accent {
            Accent::Acute => self.line(cx - 0.05, y1, cx + 0.1, y0),
            Accent::Grave => self.line(cx - 0.1, y0, cx + 0.05, y1),
            Accent::Circumflex => self.path(&[(l + 0.1, y1), (cx, y0), (r - 0.1, y1)]),
            Accent::Diaeresis => {
                self.dot(l + 0.1, y0);
                self.dot(r - 0.1, y0);
            }
            Accent::Ring => self.path(&[(cx - 0.05, y0), (cx + 0.05, y0), (cx + 0.05, y1), (cx - 0.05, y1), (cx - 0.05, y0)]),
            Accent::Cedilla => self.path(&[(cx, b), (cx, b + 0.04), (cx - 0.08, b + 0.08)]),
        }
    }
}
