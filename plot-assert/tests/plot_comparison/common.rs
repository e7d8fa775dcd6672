//! Shared fixtures for plot comparison tests.

use std::sync::Once;

// Re-export commonly used types so test modules can `use super::common::*`
pub use plot_assert::{
    compare_artists, compare_colors, compare_legends, compare_plots, compare_plots_all, Artist,
    ArtistKind, ArtistPath, ArtistSnapshot, Aspect, AxesSnapshot, ColorValue, CompareError,
    FailureKind, LegendSnapshot, PlotCompareOptions, Property, PropertyValue, Scale, Spine,
    Tolerance,
};

static INIT: Once = Once::new();

/// Route `log` output through the test harness.
pub fn initialize() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Bars of a bar chart at x = 0, 1, 2... with the given heights.
pub fn bars(heights: &[f64]) -> Vec<ArtistSnapshot> {
    heights
        .iter()
        .enumerate()
        .map(|(i, h)| ArtistSnapshot::rectangle(i as f64 - 0.4, 0.0, *h))
        .collect()
}

/// A legend with one patch handle per label.
pub fn legend(title: &str, labels: &[&str]) -> LegendSnapshot {
    LegendSnapshot {
        title: title.to_string(),
        texts: labels.iter().map(|l| l.to_string()).collect(),
        patches: labels
            .iter()
            .map(|_| ArtistSnapshot::rectangle(0.0, 0.0, 1.0))
            .collect(),
        lines: Vec::new(),
    }
}

/// Gridlines at each tick position, in the given color.
pub fn gridlines(ticks: &[f64], color: &str) -> Vec<ArtistSnapshot> {
    ticks
        .iter()
        .map(|t| ArtistSnapshot::line(vec![[*t, 0.0], [*t, 1.0]]).with(Property::Color, color))
        .collect()
}

/// A fully decorated bar chart, as most tests start from.
pub fn bar_chart() -> AxesSnapshot {
    let xticks = vec![0.0, 1.0, 2.0];
    AxesSnapshot {
        patches: bars(&[3.0, 5.0, 2.0]),
        lines: vec![ArtistSnapshot::line(vec![[-0.5, 3.3], [2.5, 3.3]])],
        collections: vec![ArtistSnapshot::scatter(3, 36.0)],
        xlabel: "day".into(),
        ylabel: "total_bill".into(),
        xlim: (-0.5, 2.5),
        ylim: (0.0, 5.25),
        xticks: xticks.clone(),
        yticks: vec![0.0, 2.5, 5.0],
        xticklabels: vec!["Thur".into(), "Fri".into(), "Sat".into()],
        yticklabels: vec!["0.0".into(), "2.5".into(), "5.0".into()],
        legend: Some(legend("sex", &["Male", "Female"])),
        xgridlines: gridlines(&xticks, "#b0b0b0"),
        ..Default::default()
    }
}

/// Assert a comparison failed with the given failure kind.
#[track_caller]
pub fn assert_fails(result: Result<(), CompareError>, kind: FailureKind) {
    match result {
        Ok(()) => panic!("comparison unexpectedly succeeded"),
        Err(err) => assert_eq!(err.kind(), kind, "unexpected failure: {}", err),
    }
}
