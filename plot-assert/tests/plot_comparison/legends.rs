//! Legend tests: titles, labels, handles, and optional legends on axes.

use super::common::*;

#[test]
fn test_legend_equal_to_itself() {
    initialize();
    let leg = legend("sex", &["Male", "Female"]);
    compare_legends(&leg, &leg.clone()).unwrap();
}

#[test]
fn test_title_mismatch() {
    initialize();
    let err = compare_legends(
        &legend("sex", &["Male", "Female"]),
        &legend("smoker", &["Male", "Female"]),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "legend title mismatch: \"sex\" != \"smoker\"");
}

#[test]
fn test_label_mismatch() {
    initialize();
    let result = compare_legends(
        &legend("sex", &["Male", "Female"]),
        &legend("sex", &["Female", "Male"]),
    );
    assert_fails(result, FailureKind::Mismatch);
}

#[test]
fn test_labels_compared_up_to_shorter_list() {
    initialize();
    let mut short = legend("sex", &["Male", "Female"]);
    let mut long = legend("sex", &["Male", "Female", "Other"]);
    // Keep the handle lists the same length so only labels differ
    short.patches.clear();
    long.patches.clear();
    compare_legends(&short, &long).unwrap();
}

#[test]
fn test_handle_mismatch_is_scoped() {
    initialize();
    let leg1 = legend("sex", &["Male", "Female"]);
    let mut leg2 = leg1.clone();
    leg2.patches[0].set(Property::FaceColor, ColorValue::from("C3"));

    let err = compare_legends(&leg1, &leg2).unwrap_err();
    assert!(err.to_string().starts_with("legend.patches: "), "{}", err);
    assert!(matches!(err.root(), CompareError::PropertyMismatch { .. }));
}

#[test]
fn test_legend_lines_compared() {
    initialize();
    let mut leg1 = legend("", &["a"]);
    leg1.lines = vec![ArtistSnapshot::line(vec![[0.0, 0.0], [1.0, 0.0]])];
    let leg2 = legend("", &["a"]);
    assert_fails(compare_legends(&leg1, &leg2), FailureKind::Shape);
}

#[test]
fn test_both_legends_absent() {
    initialize();
    let ax1 = AxesSnapshot {
        legend: None,
        ..bar_chart()
    };
    let ax2 = ax1.clone();
    compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap();
}

#[test]
fn test_one_legend_absent_is_tolerated() {
    initialize();
    let with_legend = bar_chart();
    let without_legend = AxesSnapshot {
        legend: None,
        ..bar_chart()
    };
    compare_plots_all(&with_legend, &without_legend, &PlotCompareOptions::default()).unwrap();
    compare_plots_all(&without_legend, &with_legend, &PlotCompareOptions::default()).unwrap();
}

#[test]
fn test_different_legend_titles_fail_plot_comparison() {
    initialize();
    let ax1 = bar_chart();
    let ax2 = AxesSnapshot {
        legend: Some(legend("day", &["Male", "Female"])),
        ..bar_chart()
    };
    let err = compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Mismatch);
    assert!(err.to_string().contains("legend title"), "{}", err);
}
