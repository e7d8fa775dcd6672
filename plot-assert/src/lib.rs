//! Structural equality assertions for rendered plots.
//!
//! This crate compares two renderings of a chart (axes, legends and the
//! artists they contain) property by property, so that a test can check that
//! two ways of building a plot produce the same result. It does not render
//! anything itself: renderers expose their state through the [`Artist`],
//! [`PlotAxes`] and [`PlotLegend`] traits, or callers describe it with the
//! owned snapshot types ([`ArtistSnapshot`], [`AxesSnapshot`],
//! [`LegendSnapshot`]).
//!
//! Comparison rules:
//! - artist lists must match in length and pairwise in [`ArtistKind`]
//! - paths compare vertices and codes exactly
//! - colors compare after normalization to RGBA (or RGB)
//! - numeric arrays compare elementwise exactly
//! - axis limits, ticks and spine widths compare within a [`Tolerance`]
//!
//! # Example
//!
//! ```rust
//! use plot_assert::{assert_plots_all_equal, ArtistSnapshot, AxesSnapshot, PlotCompareOptions};
//!
//! let ax = AxesSnapshot {
//!     lines: vec![ArtistSnapshot::line(vec![[0.0, 0.0], [1.0, 2.0]])],
//!     xlim: (0.0, 10.00001),
//!     ..Default::default()
//! };
//! let expected = AxesSnapshot {
//!     lines: vec![ArtistSnapshot::line(vec![[0.0, 0.0], [1.0, 2.0]])],
//!     xlim: (0.0, 10.0),
//!     ..Default::default()
//! };
//! assert_plots_all_equal(&ax, &expected, &PlotCompareOptions::default());
//! ```

mod artist;
mod assert;
mod axes;
mod color;
mod compare;
mod error;
mod path;
mod property;
mod tolerance;

// Re-export public API
pub use artist::{Artist, ArtistKind, ArtistSnapshot};
pub use assert::{
    assert_artists_equal, assert_colors_equal, assert_legends_equal, assert_plots_all_equal,
    assert_plots_equal,
};
pub use axes::{Aspect, AxesSnapshot, LegendSnapshot, PlotAxes, PlotLegend, Scale, Spine};
pub use color::ColorValue;
pub use compare::{
    compare_artists, compare_artists_with, compare_colors, compare_legends, compare_plots,
    compare_plots_all, PlotCompareOptions,
};
pub use error::{CompareError, CompareResult, FailureKind};
pub use path::{ArtistPath, PathCode};
pub use property::{NumericArray, Property, PropertyValue, ARTIST_PROPERTIES};
pub use tolerance::Tolerance;
