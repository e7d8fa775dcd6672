//! Color values and their normalization to canonical RGBA.
//!
//! A [`ColorValue`] is whatever a renderer reports for a color property: a
//! textual specification, a tuple of components, or a matrix with one color
//! per drawn element. Normalization maps all of them onto `[f64; 4]` RGBA
//! tuples so that equivalent representations compare equal. Components are
//! kept at full precision; hex and named colors become `byte / 255.0`.

use crate::error::{CompareError, CompareResult};

/// The default category-10 color cycle, addressed as `C0`..`C9` or `tab:<name>`.
const CATEGORY10: [(&str, [u8; 3]); 10] = [
    ("blue", [0x1f, 0x77, 0xb4]),
    ("orange", [0xff, 0x7f, 0x0e]),
    ("green", [0x2c, 0xa0, 0x2c]),
    ("red", [0xd6, 0x27, 0x28]),
    ("purple", [0x94, 0x67, 0xbd]),
    ("brown", [0x8c, 0x56, 0x4b]),
    ("pink", [0xe3, 0x77, 0xc2]),
    ("gray", [0x7f, 0x7f, 0x7f]),
    ("olive", [0xbc, 0xbd, 0x22]),
    ("cyan", [0x17, 0xbe, 0xcf]),
];

/// Single-letter base colors.
const BASE_COLORS: [(&str, [f64; 3]); 8] = [
    ("b", [0.0, 0.0, 1.0]),
    ("g", [0.0, 0.5, 0.0]),
    ("r", [1.0, 0.0, 0.0]),
    ("c", [0.0, 0.75, 0.75]),
    ("m", [0.75, 0.0, 0.75]),
    ("y", [0.75, 0.75, 0.0]),
    ("k", [0.0, 0.0, 0.0]),
    ("w", [1.0, 1.0, 1.0]),
];

/// Opaque RGBA of the `index`-th cycle color; the cycle wraps around.
pub(crate) fn cycle_color(index: usize) -> [f64; 4] {
    let (_, [r, g, b]) = CATEGORY10[index % CATEGORY10.len()];
    rgba8_to_rgba([r, g, b, 255])
}

fn rgba8_to_rgba([r, g, b, a]: [u8; 4]) -> [f64; 4] {
    [r, g, b, a].map(|c| c as f64 / 255.0)
}

/// A color as reported by a rendered object.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// A textual color specification: CSS name or hex, a gray level such as
    /// `"0.5"`, a cycle reference such as `"C1"`, `"tab:orange"`, or `"none"`.
    Spec(String),
    /// Three (RGB) or four (RGBA) components in `0.0..=1.0`.
    Components(Vec<f64>),
    /// One color per drawn element.
    Rows(Vec<Vec<f64>>),
}

impl ColorValue {
    /// Collapse a matrix of colors to its single unique row.
    ///
    /// Non-matrix values are returned unchanged. A matrix whose rows are not
    /// all identical (or that has no rows) cannot be reduced.
    pub fn reduce(&self) -> CompareResult<ColorValue> {
        match self {
            ColorValue::Rows(rows) => {
                let mut unique: Vec<&Vec<f64>> = Vec::new();
                for row in rows {
                    if !unique.contains(&row) {
                        unique.push(row);
                    }
                }
                match unique.as_slice() {
                    [row] => Ok(ColorValue::Components((*row).clone())),
                    _ => Err(CompareError::ColorRank {
                        unique_rows: unique.len(),
                    }),
                }
            }
            other => Ok(other.clone()),
        }
    }

    /// Normalize to an RGBA tuple.
    pub fn to_rgba(&self) -> CompareResult<[f64; 4]> {
        match self {
            ColorValue::Spec(spec) => parse_color_spec(spec),
            ColorValue::Components(components) => components_to_rgba(components),
            ColorValue::Rows(_) => self.reduce()?.to_rgba(),
        }
    }

    /// Normalize to an RGB tuple, discarding alpha.
    pub fn to_rgb(&self) -> CompareResult<[f64; 3]> {
        let [r, g, b, _] = self.to_rgba()?;
        Ok([r, g, b])
    }
}

/// Parse a textual color specification.
fn parse_color_spec(spec: &str) -> CompareResult<[f64; 4]> {
    let s = spec.trim();

    if s.eq_ignore_ascii_case("none") {
        return Ok([0.0; 4]);
    }

    if let Some(digits) = s.strip_prefix('C') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let index = digits
                .parse::<usize>()
                .map_err(|_| CompareError::InvalidColor(spec.to_string()))?;
            return Ok(cycle_color(index));
        }
    }

    if let Some(name) = s.strip_prefix("tab:") {
        // "tab:grey" is accepted as an alias
        let name = if name == "grey" { "gray" } else { name };
        return CATEGORY10
            .iter()
            .position(|(n, _)| *n == name)
            .map(cycle_color)
            .ok_or_else(|| CompareError::InvalidColor(spec.to_string()));
    }

    if let Ok(level) = s.parse::<f64>() {
        if !(0.0..=1.0).contains(&level) {
            return Err(CompareError::InvalidColor(format!(
                "{}: gray level must be within 0-1",
                spec
            )));
        }
        return Ok([level, level, level, 1.0]);
    }

    if let Some((_, [r, g, b])) = BASE_COLORS.iter().find(|(n, _)| *n == s) {
        return Ok([*r, *g, *b, 1.0]);
    }

    parse_css(s)
}

/// Parse a CSS color string.
fn parse_css(s: &str) -> CompareResult<[f64; 4]> {
    let parsed = csscolorparser::parse(s)
        .map_err(|e| CompareError::InvalidColor(format!("{}: {}", s, e)))?;
    Ok(rgba8_to_rgba(parsed.to_rgba8()))
}

fn components_to_rgba(components: &[f64]) -> CompareResult<[f64; 4]> {
    let rgba = match *components {
        [r, g, b] => [r, g, b, 1.0],
        [r, g, b, a] => [r, g, b, a],
        _ => {
            return Err(CompareError::InvalidColor(format!(
                "expected 3 or 4 components, got {}",
                components.len()
            )))
        }
    };
    if !rgba.iter().all(|c| (0.0..=1.0).contains(c)) {
        return Err(CompareError::InvalidColor(format!(
            "{:?}: RGBA values should be within 0-1 range",
            components
        )));
    }
    Ok(rgba)
}

impl From<&str> for ColorValue {
    fn from(spec: &str) -> Self {
        ColorValue::Spec(spec.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(spec: String) -> Self {
        ColorValue::Spec(spec)
    }
}

impl From<[f64; 3]> for ColorValue {
    fn from(rgb: [f64; 3]) -> Self {
        ColorValue::Components(rgb.to_vec())
    }
}

impl From<[f64; 4]> for ColorValue {
    fn from(rgba: [f64; 4]) -> Self {
        ColorValue::Components(rgba.to_vec())
    }
}

impl From<(f64, f64, f64)> for ColorValue {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        ColorValue::Components(vec![r, g, b])
    }
}

impl From<(f64, f64, f64, f64)> for ColorValue {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        ColorValue::Components(vec![r, g, b, a])
    }
}

impl From<Vec<[f64; 4]>> for ColorValue {
    fn from(rows: Vec<[f64; 4]>) -> Self {
        ColorValue::Rows(rows.iter().map(|row| row.to_vec()).collect())
    }
}

impl From<tiny_skia::Color> for ColorValue {
    fn from(c: tiny_skia::Color) -> Self {
        ColorValue::Components(vec![
            c.red() as f64,
            c.green() as f64,
            c.blue() as f64,
            c.alpha() as f64,
        ])
    }
}
