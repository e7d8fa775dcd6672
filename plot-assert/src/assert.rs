//! Panicking wrappers for use directly in `#[test]` functions.
//!
//! Each `assert_*` function runs the matching `compare_*` operation and panics
//! with the failure message, reported at the caller's location.

use crate::artist::Artist;
use crate::axes::{PlotAxes, PlotLegend};
use crate::color::ColorValue;
use crate::compare::{
    compare_artists, compare_colors, compare_legends, compare_plots, compare_plots_all,
    PlotCompareOptions,
};
use crate::error::CompareResult;

#[track_caller]
fn check(result: CompareResult<()>) {
    if let Err(err) = result {
        panic!("{}", err);
    }
}

/// Panic unless the two artist lists are equivalent.
#[track_caller]
pub fn assert_artists_equal<A: Artist, B: Artist>(list1: &[A], list2: &[B]) {
    check(compare_artists(list1, list2));
}

/// Panic unless the two legends are equivalent.
#[track_caller]
pub fn assert_legends_equal<L1, L2>(leg1: &L1, leg2: &L2)
where
    L1: PlotLegend + ?Sized,
    L2: PlotLegend + ?Sized,
{
    check(compare_legends(leg1, leg2));
}

/// Panic unless the two axes have equivalent artists (and labels, if `labels`).
#[track_caller]
pub fn assert_plots_equal<A1, A2>(ax1: &A1, ax2: &A2, labels: bool)
where
    A1: PlotAxes + ?Sized,
    A2: PlotAxes + ?Sized,
{
    check(compare_plots(ax1, ax2, labels));
}

/// Panic unless the two axes are equivalent in full.
#[track_caller]
pub fn assert_plots_all_equal<A1, A2>(ax1: &A1, ax2: &A2, options: &PlotCompareOptions)
where
    A1: PlotAxes + ?Sized,
    A2: PlotAxes + ?Sized,
{
    check(compare_plots_all(ax1, ax2, options));
}

/// Panic unless the two colors normalize to the same value.
#[track_caller]
pub fn assert_colors_equal(a: impl Into<ColorValue>, b: impl Into<ColorValue>, check_alpha: bool) {
    check(compare_colors(a, b, check_alpha));
}
