//! Comparison operations over artists, legends, axes and colors.
//!
//! Every operation stops at the first difference and reports it as a
//! [`CompareError`]; on success it returns `Ok(())`.

use crate::artist::Artist;
use crate::axes::{PlotAxes, PlotLegend};
use crate::color::ColorValue;
use crate::error::{CompareError, CompareResult, ScopeExt};
use crate::path::ArtistPath;
use crate::property::{elements_equal, Property, PropertyValue, ARTIST_PROPERTIES};
use crate::tolerance::Tolerance;

/// Options for [`compare_plots_all`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotCompareOptions {
    /// Also compare labels, scales, limits, ticks, spines, legend and gridlines
    /// (default: true).
    pub labels: bool,
    /// Tolerance for limits, tick positions and spine widths.
    pub tolerance: Tolerance,
}

impl Default for PlotCompareOptions {
    fn default() -> Self {
        Self {
            labels: true,
            tolerance: Tolerance::default(),
        }
    }
}

impl PlotCompareOptions {
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Compare two artist lists over the default property allow-list.
///
/// The lists must have the same length and paired artists the same kind.
/// A property the first artist does not expose is skipped.
pub fn compare_artists<A: Artist, B: Artist>(list1: &[A], list2: &[B]) -> CompareResult<()> {
    compare_artists_with(list1, list2, &ARTIST_PROPERTIES)
}

/// Compare two artist lists over an explicit property allow-list.
pub fn compare_artists_with<A: Artist, B: Artist>(
    list1: &[A],
    list2: &[B],
    properties: &[Property],
) -> CompareResult<()> {
    log::debug!(target: "compare", "artists {} vs {}", list1.len(), list2.len());
    if list1.len() != list2.len() {
        return Err(CompareError::LengthMismatch {
            left: list1.len(),
            right: list2.len(),
        });
    }

    for (index, (a1, a2)) in list1.iter().zip(list2).enumerate() {
        let (kind1, kind2) = (a1.kind(), a2.kind());
        if kind1 != kind2 {
            return Err(CompareError::KindMismatch {
                index,
                left: kind1,
                right: kind2,
            });
        }

        for &property in properties {
            let Some(v1) = a1.property(property) else {
                continue;
            };
            let Some(v2) = a2.property(property) else {
                return Err(CompareError::MissingProperty { index, property });
            };
            compare_property(index, property, &v1, &v2)?;
        }
    }
    Ok(())
}

fn compare_property(
    index: usize,
    property: Property,
    v1: &PropertyValue,
    v2: &PropertyValue,
) -> CompareResult<()> {
    let mismatch = |left: &dyn std::fmt::Debug, right: &dyn std::fmt::Debug| {
        CompareError::PropertyMismatch {
            index,
            property,
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    };

    match property {
        Property::Paths => {
            let (PropertyValue::Paths(paths1), PropertyValue::Paths(paths2)) = (v1, v2) else {
                return Err(mismatch(v1, v2));
            };
            if paths1.len() != paths2.len() {
                log::warn!(
                    target: "compare",
                    "artist {} has {} vs {} paths; comparing the first {}",
                    index,
                    paths1.len(),
                    paths2.len(),
                    paths1.len().min(paths2.len())
                );
            }
            for (p1, p2) in paths1.iter().zip(paths2) {
                if !paths_equal(p1, p2) {
                    return Err(mismatch(p1, p2));
                }
            }
            Ok(())
        }
        Property::Color => {
            let (Some(c1), Some(c2)) = (v1.as_color(), v2.as_color()) else {
                return Err(mismatch(v1, v2));
            };
            let (rgba1, rgba2) = (c1.to_rgba()?, c2.to_rgba()?);
            if rgba1 != rgba2 {
                return Err(mismatch(&rgba1, &rgba2));
            }
            Ok(())
        }
        _ => {
            let equal = match (v1, v2) {
                (PropertyValue::Array(a1), PropertyValue::Array(a2)) => a1.array_equal(a2),
                _ => v1 == v2,
            };
            if equal {
                Ok(())
            } else {
                Err(mismatch(v1, v2))
            }
        }
    }
}

fn paths_equal(p1: &ArtistPath, p2: &ArtistPath) -> bool {
    p1.vertices.len() == p2.vertices.len()
        && p1
            .vertices
            .iter()
            .zip(&p2.vertices)
            .all(|(a, b)| elements_equal(a[0], b[0]) && elements_equal(a[1], b[1]))
        && p1.codes == p2.codes
}

/// Compare two legends: title, label texts, then patch and line handles.
///
/// Labels are compared pairwise up to the shorter of the two lists.
pub fn compare_legends<L1, L2>(leg1: &L1, leg2: &L2) -> CompareResult<()>
where
    L1: PlotLegend + ?Sized,
    L2: PlotLegend + ?Sized,
{
    log::debug!(target: "compare", "legend");
    let (title1, title2) = (leg1.title(), leg2.title());
    if title1 != title2 {
        return Err(CompareError::value_mismatch("legend title", title1, title2));
    }

    let (texts1, texts2) = (leg1.texts(), leg2.texts());
    if texts1.len() != texts2.len() {
        log::warn!(
            target: "compare",
            "legend has {} vs {} labels; comparing the first {}",
            texts1.len(),
            texts2.len(),
            texts1.len().min(texts2.len())
        );
    }
    for (t1, t2) in texts1.iter().zip(&texts2) {
        if t1 != t2 {
            return Err(CompareError::value_mismatch("legend label", t1, t2));
        }
    }

    compare_artists(&leg1.patches(), &leg2.patches()).scope("legend.patches")?;
    compare_artists(&leg1.lines(), &leg2.lines()).scope("legend.lines")
}

/// Compare patches, lines and collections of two axes, and optionally their
/// axis labels.
pub fn compare_plots<A1, A2>(ax1: &A1, ax2: &A2, labels: bool) -> CompareResult<()>
where
    A1: PlotAxes + ?Sized,
    A2: PlotAxes + ?Sized,
{
    log::debug!(target: "compare", "plots labels={}", labels);
    compare_artists(&ax1.patches(), &ax2.patches()).scope("patches")?;
    compare_artists(&ax1.lines(), &ax2.lines()).scope("lines")?;
    compare_artists(&ax1.collections(), &ax2.collections()).scope("collections")?;

    if labels {
        compare_axis_labels(ax1, ax2)?;
    }
    Ok(())
}

/// Compare two axes in full.
///
/// Artists (patches, lines, collections, images, texts) are always compared.
/// With `options.labels`, decorations are compared too: labels, scales and
/// aspect exactly; limits, tick positions and spine widths within
/// `options.tolerance`; spine colors with alpha; legends when both axes have
/// one; and gridline counts only.
pub fn compare_plots_all<A1, A2>(
    ax1: &A1,
    ax2: &A2,
    options: &PlotCompareOptions,
) -> CompareResult<()>
where
    A1: PlotAxes + ?Sized,
    A2: PlotAxes + ?Sized,
{
    log::debug!(target: "compare", "plots (all) {:?}", options);
    compare_artists(&ax1.patches(), &ax2.patches()).scope("patches")?;
    compare_artists(&ax1.lines(), &ax2.lines()).scope("lines")?;
    compare_artists(&ax1.collections(), &ax2.collections()).scope("collections")?;
    compare_artists(&ax1.images(), &ax2.images()).scope("images")?;
    compare_artists(&ax1.texts(), &ax2.texts()).scope("texts")?;

    if !options.labels {
        return Ok(());
    }
    let tol = options.tolerance;

    compare_axis_labels(ax1, ax2)?;

    compare_exact("xscale", ax1.xscale(), ax2.xscale())?;
    compare_exact("yscale", ax1.yscale(), ax2.yscale())?;

    let (x1, x2) = (ax1.xlim(), ax2.xlim());
    compare_close("xlim", &[x1.0, x1.1], &[x2.0, x2.1], tol)?;
    let (y1, y2) = (ax1.ylim(), ax2.ylim());
    compare_close("ylim", &[y1.0, y1.1], &[y2.0, y2.1], tol)?;

    compare_exact("aspect", ax1.aspect(), ax2.aspect())?;

    compare_close("xticks", &ax1.xticks(), &ax2.xticks(), tol)?;
    compare_close("yticks", &ax1.yticks(), &ax2.yticks(), tol)?;
    compare_exact("xticklabels", ax1.xticklabels(), ax2.xticklabels())?;
    compare_exact("yticklabels", ax1.yticklabels(), ax2.yticklabels())?;

    for s1 in ax1.spines() {
        let scope = format!("spines[{}]", s1.name);
        let s2 = ax2
            .spine(&s1.name)
            .ok_or_else(|| CompareError::MissingSpine(s1.name.clone()))?;
        compare_colors(s1.edge_color, s2.edge_color, true).scope(scope.as_str())?;
        compare_close("line width", &[s1.line_width], &[s2.line_width], tol).scope(scope)?;
    }

    match (ax1.legend(), ax2.legend()) {
        (Some(leg1), Some(leg2)) => compare_legends(leg1, leg2)?,
        (leg1, leg2) => log::debug!(
            target: "compare",
            "skipping legend (present: {} vs {})",
            leg1.is_some(),
            leg2.is_some()
        ),
    }

    compare_count("xgridlines", ax1.xgridlines().len(), ax2.xgridlines().len())?;
    compare_count("ygridlines", ax1.ygridlines().len(), ax2.ygridlines().len())
}

/// Compare two colors after normalization.
///
/// Color matrices are first reduced to their single unique row; a matrix with
/// several distinct rows is an invalid input. With `check_alpha` false only the
/// RGB channels are compared.
pub fn compare_colors(
    a: impl Into<ColorValue>,
    b: impl Into<ColorValue>,
    check_alpha: bool,
) -> CompareResult<()> {
    let a = a.into().reduce()?;
    let b = b.into().reduce()?;

    if check_alpha {
        let (rgba_a, rgba_b) = (a.to_rgba()?, b.to_rgba()?);
        if rgba_a != rgba_b {
            return Err(CompareError::value_mismatch("color", rgba_a, rgba_b));
        }
    } else {
        let (rgb_a, rgb_b) = (a.to_rgb()?, b.to_rgb()?);
        if rgb_a != rgb_b {
            return Err(CompareError::value_mismatch("color", rgb_a, rgb_b));
        }
    }
    Ok(())
}

fn compare_axis_labels<A1, A2>(ax1: &A1, ax2: &A2) -> CompareResult<()>
where
    A1: PlotAxes + ?Sized,
    A2: PlotAxes + ?Sized,
{
    compare_exact("xlabel", ax1.xlabel(), ax2.xlabel())?;
    compare_exact("ylabel", ax1.ylabel(), ax2.ylabel())
}

fn compare_exact<T: PartialEq + std::fmt::Debug>(
    what: &'static str,
    left: T,
    right: T,
) -> CompareResult<()> {
    if left != right {
        return Err(CompareError::value_mismatch(what, left, right));
    }
    Ok(())
}

fn compare_close(what: &'static str, left: &[f64], right: &[f64], tol: Tolerance) -> CompareResult<()> {
    compare_count(what, left.len(), right.len())?;
    if !tol.all_close(left, right) {
        return Err(CompareError::NotClose {
            what,
            left: left.to_vec(),
            right: right.to_vec(),
            absolute: tol.absolute,
            relative: tol.relative,
        });
    }
    Ok(())
}

fn compare_count(what: &'static str, left: usize, right: usize) -> CompareResult<()> {
    if left != right {
        return Err(CompareError::LengthMismatch { left, right }).scope(what);
    }
    Ok(())
}
