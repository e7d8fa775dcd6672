//! Inspectable artist properties and their typed values.

use crate::color::ColorValue;
use crate::path::ArtistPath;
use std::fmt;

/// A property an artist may expose for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Alpha,
    EdgeColor,
    FaceColor,
    Fill,
    Hatch,
    Height,
    LineStyle,
    LineWidth,
    Paths,
    Xy,
    XyData,
    Sizes,
    ZOrder,
    /// Single color of a line or text; normalized before comparison.
    Color,
}

/// Properties compared by default between paired artists.
pub const ARTIST_PROPERTIES: [Property; 13] = [
    Property::Alpha,
    Property::EdgeColor,
    Property::FaceColor,
    Property::Fill,
    Property::Hatch,
    Property::Height,
    Property::LineStyle,
    Property::LineWidth,
    Property::Paths,
    Property::Xy,
    Property::XyData,
    Property::Sizes,
    Property::ZOrder,
];

impl Property {
    /// Name of the property as the renderer reports it.
    pub fn name(self) -> &'static str {
        match self {
            Property::Alpha => "alpha",
            Property::EdgeColor => "edgecolor",
            Property::FaceColor => "facecolor",
            Property::Fill => "fill",
            Property::Hatch => "hatch",
            Property::Height => "height",
            Property::LineStyle => "linestyle",
            Property::LineWidth => "linewidth",
            Property::Paths => "paths",
            Property::Xy => "xy",
            Property::XyData => "xydata",
            Property::Sizes => "sizes",
            Property::ZOrder => "zorder",
            Property::Color => "color",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dense row-major array of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl NumericArray {
    /// Create an array with an explicit shape.
    ///
    /// Returns `None` if the shape does not match the number of elements.
    pub fn from_shape(shape: Vec<usize>, data: Vec<f64>) -> Option<Self> {
        if shape.iter().product::<usize>() != data.len() {
            return None;
        }
        Some(Self { shape, data })
    }

    /// Create a one-dimensional array.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Create an `N x 2` array of points.
    pub fn from_points(points: &[[f64; 2]]) -> Self {
        Self {
            shape: vec![points.len(), 2],
            data: points.iter().flatten().copied().collect(),
        }
    }

    /// Create an `N x 4` array of RGBA rows.
    pub fn from_rgba_rows(rows: &[[f64; 4]]) -> Self {
        Self {
            shape: vec![rows.len(), 4],
            data: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Exact elementwise equality; shapes must match and NaNs in the same
    /// position are equal.
    pub fn array_equal(&self, other: &NumericArray) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| elements_equal(*a, *b))
    }

    /// Interpret the array as a color value.
    pub fn to_color(&self) -> ColorValue {
        match self.shape.as_slice() {
            [_, 0] => ColorValue::Rows(Vec::new()),
            [_, cols] => ColorValue::Rows(self.data.chunks(*cols).map(<[f64]>::to_vec).collect()),
            _ => ColorValue::Components(self.data.clone()),
        }
    }
}

/// NaN compares equal to NaN.
pub(crate) fn elements_equal(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Value of an artist property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// The property is exposed but unset.
    None,
    Bool(bool),
    Number(f64),
    Text(String),
    Array(NumericArray),
    Paths(Vec<ArtistPath>),
    Color(ColorValue),
}

impl PropertyValue {
    /// Interpret the value as a color, if it can describe one.
    pub fn as_color(&self) -> Option<ColorValue> {
        match self {
            PropertyValue::Color(color) => Some(color.clone()),
            PropertyValue::Text(spec) => Some(ColorValue::Spec(spec.clone())),
            PropertyValue::Array(array) => Some(array.to_color()),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<NumericArray> for PropertyValue {
    fn from(value: NumericArray) -> Self {
        PropertyValue::Array(value)
    }
}

impl From<Vec<f64>> for PropertyValue {
    fn from(value: Vec<f64>) -> Self {
        PropertyValue::Array(NumericArray::from_vec(value))
    }
}

impl From<Vec<[f64; 2]>> for PropertyValue {
    fn from(value: Vec<[f64; 2]>) -> Self {
        PropertyValue::Array(NumericArray::from_points(&value))
    }
}

impl From<Vec<[f64; 4]>> for PropertyValue {
    fn from(value: Vec<[f64; 4]>) -> Self {
        PropertyValue::Array(NumericArray::from_rgba_rows(&value))
    }
}

impl From<Vec<ArtistPath>> for PropertyValue {
    fn from(value: Vec<ArtistPath>) -> Self {
        PropertyValue::Paths(value)
    }
}

impl From<ColorValue> for PropertyValue {
    fn from(value: ColorValue) -> Self {
        PropertyValue::Color(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::None, Into::into)
    }
}
