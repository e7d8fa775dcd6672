//! Artists: rendered graphical objects with inspectable properties.

use crate::color::{cycle_color, ColorValue};
use crate::path::ArtistPath;
use crate::property::{NumericArray, Property, PropertyValue};
use std::collections::BTreeMap;
use std::fmt;

/// Concrete type of an artist. Paired artists must be of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtistKind {
    Rectangle,
    Wedge,
    Polygon,
    PathPatch,
    Line2D,
    PathCollection,
    PolyCollection,
    LineCollection,
    QuadMesh,
    AxesImage,
    Text,
    /// A renderer-specific type not listed above.
    Other(String),
}

impl fmt::Display for ArtistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtistKind::Rectangle => "Rectangle",
            ArtistKind::Wedge => "Wedge",
            ArtistKind::Polygon => "Polygon",
            ArtistKind::PathPatch => "PathPatch",
            ArtistKind::Line2D => "Line2D",
            ArtistKind::PathCollection => "PathCollection",
            ArtistKind::PolyCollection => "PolyCollection",
            ArtistKind::LineCollection => "LineCollection",
            ArtistKind::QuadMesh => "QuadMesh",
            ArtistKind::AxesImage => "AxesImage",
            ArtistKind::Text => "Text",
            ArtistKind::Other(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

/// A rendered graphical object.
///
/// Implementors expose a snapshot of each property they support; `None` from
/// [`Artist::property`] means the artist has no such property.
pub trait Artist {
    /// Concrete type of this artist.
    fn kind(&self) -> ArtistKind;

    /// Current value of `property`, or `None` if not exposed.
    fn property(&self, property: Property) -> Option<PropertyValue>;
}

impl<T: Artist + ?Sized> Artist for &T {
    fn kind(&self) -> ArtistKind {
        (**self).kind()
    }

    fn property(&self, property: Property) -> Option<PropertyValue> {
        (**self).property(property)
    }
}

impl<T: Artist + ?Sized> Artist for Box<T> {
    fn kind(&self) -> ArtistKind {
        (**self).kind()
    }

    fn property(&self, property: Property) -> Option<PropertyValue> {
        (**self).property(property)
    }
}

/// An owned property bag for one artist.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistSnapshot {
    kind: ArtistKind,
    properties: BTreeMap<Property, PropertyValue>,
}

impl ArtistSnapshot {
    /// Create an artist of `kind` exposing no properties.
    pub fn new(kind: ArtistKind) -> Self {
        Self {
            kind,
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style variant of [`ArtistSnapshot::set`].
    pub fn with(mut self, property: Property, value: impl Into<PropertyValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Expose `property` with `value`, replacing any previous value.
    pub fn set(&mut self, property: Property, value: impl Into<PropertyValue>) {
        self.properties.insert(property, value.into());
    }

    /// Stop exposing `property`.
    pub fn remove(&mut self, property: Property) -> Option<PropertyValue> {
        self.properties.remove(&property)
    }

    /// Exposed properties in a stable order.
    pub fn properties(&self) -> impl Iterator<Item = (Property, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (*k, v))
    }

    /// A bar-style rectangle patch with default styling.
    pub fn rectangle(x: f64, y: f64, height: f64) -> Self {
        Self::new(ArtistKind::Rectangle)
            .with(Property::Xy, vec![x, y])
            .with(Property::Height, height)
            .with(Property::Alpha, PropertyValue::None)
            .with(Property::FaceColor, ColorValue::from("C0"))
            .with(Property::EdgeColor, ColorValue::from("none"))
            .with(Property::Fill, true)
            .with(Property::Hatch, PropertyValue::None)
            .with(Property::LineStyle, "solid")
            .with(Property::LineWidth, 1.0)
            .with(Property::ZOrder, 1.0)
    }

    /// A solid line through `points` with default styling.
    pub fn line(points: Vec<[f64; 2]>) -> Self {
        Self::new(ArtistKind::Line2D)
            .with(Property::XyData, points)
            .with(Property::Alpha, PropertyValue::None)
            .with(Property::Color, ColorValue::from("C0"))
            .with(Property::LineStyle, "-")
            .with(Property::LineWidth, 1.5)
            .with(Property::ZOrder, 2.0)
    }

    /// A scatter collection of `count` circular markers with uniform styling.
    pub fn scatter(count: usize, size: f64) -> Self {
        let marker = tiny_skia::PathBuilder::from_circle(0.0, 0.0, 1.0)
            .map(|path| ArtistPath::from_skia_path(&path))
            .unwrap_or_default();
        let c0 = cycle_color(0);
        Self::new(ArtistKind::PathCollection)
            .with(Property::Paths, vec![marker])
            .with(Property::Sizes, vec![size; count])
            .with(Property::Alpha, PropertyValue::None)
            .with(Property::FaceColor, NumericArray::from_rgba_rows(&[c0]))
            .with(Property::EdgeColor, NumericArray::from_rgba_rows(&[c0]))
            .with(Property::LineWidth, vec![1.0_f64])
            .with(Property::ZOrder, 1.0)
    }
}

impl Artist for ArtistSnapshot {
    fn kind(&self) -> ArtistKind {
        self.kind.clone()
    }

    fn property(&self, property: Property) -> Option<PropertyValue> {
        self.properties.get(&property).cloned()
    }
}
