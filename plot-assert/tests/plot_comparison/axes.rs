//! Axes tests: basic and extended plot comparison.

use super::common::*;

#[test]
fn test_plot_equal_to_itself() {
    initialize();
    let ax = bar_chart();
    compare_plots(&ax, &ax, true).unwrap();
    compare_plots_all(&ax, &ax, &PlotCompareOptions::default()).unwrap();
}

#[test]
fn test_basic_comparison_checks_labels_only_when_asked() {
    initialize();
    let ax1 = bar_chart();
    let ax2 = AxesSnapshot {
        xlabel: "weekday".into(),
        ..bar_chart()
    };
    compare_plots(&ax1, &ax2, false).unwrap();
    let err = compare_plots(&ax1, &ax2, true).unwrap_err();
    assert_eq!(err.to_string(), "xlabel mismatch: \"day\" != \"weekday\"");
}

#[test]
fn test_basic_comparison_ignores_decorations() {
    initialize();
    let ax1 = bar_chart();
    let ax2 = AxesSnapshot {
        xlim: (-1.0, 3.0),
        xscale: Scale::Log,
        images: vec![ArtistSnapshot::new(ArtistKind::AxesImage)],
        ..bar_chart()
    };
    compare_plots(&ax1, &ax2, true).unwrap();
}

#[test]
fn test_basic_comparison_reports_collection() {
    initialize();
    let ax1 = bar_chart();
    let mut ax2 = bar_chart();
    ax2.collections[0].set(Property::Sizes, vec![36.0_f64, 36.0, 49.0]);
    let err = compare_plots(&ax1, &ax2, false).unwrap_err();
    assert!(err.to_string().starts_with("collections: "), "{}", err);
}

#[test]
fn test_xlim_within_default_tolerance() {
    initialize();
    let ax1 = AxesSnapshot {
        xlim: (0.0, 10.00001),
        ..bar_chart()
    };
    let ax2 = AxesSnapshot {
        xlim: (0.0, 10.0),
        ..bar_chart()
    };
    compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap();
}

#[test]
fn test_xlim_beyond_default_tolerance() {
    initialize();
    let ax1 = AxesSnapshot {
        xlim: (0.0, 10.1),
        ..bar_chart()
    };
    let ax2 = AxesSnapshot {
        xlim: (0.0, 10.0),
        ..bar_chart()
    };
    let err = compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap_err();
    match err {
        CompareError::NotClose { what, .. } => assert_eq!(what, "xlim"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_custom_tolerance() {
    initialize();
    let ax1 = AxesSnapshot {
        yticks: vec![0.0, 2.5, 5.05],
        ..bar_chart()
    };
    let ax2 = bar_chart();
    assert_fails(
        compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()),
        FailureKind::Mismatch,
    );
    let loose = PlotCompareOptions::default().with_tolerance(Tolerance::new(0.1, 0.0));
    compare_plots_all(&ax1, &ax2, &loose).unwrap();
}

#[test]
fn test_decorations_skipped_without_labels() {
    initialize();
    let ax1 = bar_chart();
    let ax2 = AxesSnapshot {
        ylabel: "tip".into(),
        yscale: Scale::Log,
        aspect: Aspect::equal(),
        legend: Some(legend("time", &["Lunch"])),
        ..bar_chart()
    };
    let options = PlotCompareOptions::default().with_labels(false);
    compare_plots_all(&ax1, &ax2, &options).unwrap();
}

#[test]
fn test_images_and_texts_always_compared() {
    initialize();
    let ax1 = bar_chart();
    let ax2 = AxesSnapshot {
        texts: vec![ArtistSnapshot::new(ArtistKind::Text)],
        ..bar_chart()
    };
    let options = PlotCompareOptions::default().with_labels(false);
    let err = compare_plots_all(&ax1, &ax2, &options).unwrap_err();
    assert_eq!(err.to_string(), "texts: Length mismatch: 0 != 1");
}

#[test]
fn test_scale_and_aspect_compared_exactly() {
    initialize();
    let ax = bar_chart();
    let log = AxesSnapshot {
        yscale: Scale::Log,
        ..bar_chart()
    };
    let equal = AxesSnapshot {
        aspect: Aspect::equal(),
        ..bar_chart()
    };
    let options = PlotCompareOptions::default();
    assert_fails(compare_plots_all(&ax, &log, &options), FailureKind::Mismatch);
    assert_fails(compare_plots_all(&ax, &equal, &options), FailureKind::Mismatch);
}

#[test]
fn test_tick_labels_compared_exactly() {
    initialize();
    let ax1 = bar_chart();
    let ax2 = AxesSnapshot {
        xticklabels: vec!["Thu".into(), "Fri".into(), "Sat".into()],
        ..bar_chart()
    };
    let err = compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("xticklabels mismatch"), "{}", err);
}

#[test]
fn test_tick_count_mismatch() {
    initialize();
    let ax1 = bar_chart();
    let ax2 = AxesSnapshot {
        xticks: vec![0.0, 1.0],
        ..bar_chart()
    };
    assert_fails(
        compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()),
        FailureKind::Shape,
    );
}

#[test]
fn test_spine_colors_normalized_with_alpha() {
    initialize();
    let ax1 = bar_chart();
    let mut ax2 = bar_chart();
    ax2.spines[0] = Spine::new("left", (0.0_f64, 0.0, 0.0, 1.0), 0.8);
    compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap();

    ax2.spines[0] = Spine::new("left", (0.0_f64, 0.0, 0.0, 0.5), 0.8);
    let err = compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("spines[left]: color mismatch"), "{}", err);
}

#[test]
fn test_spine_width_within_tolerance() {
    initialize();
    let ax1 = bar_chart();
    let mut ax2 = bar_chart();
    ax2.spines[2].line_width = 0.800_000_1;
    compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap();

    ax2.spines[2].line_width = 1.25;
    let err = compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("spines[bottom]: line width not close"), "{}", err);
}

#[test]
fn test_missing_spine() {
    initialize();
    let ax1 = bar_chart();
    let mut ax2 = bar_chart();
    ax2.spines.retain(|s| s.name != "top");
    let err = compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap_err();
    assert_eq!(err, CompareError::MissingSpine("top".into()));

    // Extra spines on the second axes are not looked at
    compare_plots_all(&ax2, &ax1, &PlotCompareOptions::default()).unwrap();
}

#[test]
fn test_gridlines_compared_by_count_only() {
    initialize();
    let ax1 = bar_chart();
    let ax2 = AxesSnapshot {
        xgridlines: gridlines(&[0.0, 1.0, 2.0], "red"),
        ..bar_chart()
    };
    compare_plots_all(&ax1, &ax2, &PlotCompareOptions::default()).unwrap();

    let ax3 = AxesSnapshot {
        ygridlines: gridlines(&[0.0, 2.5, 5.0], "#b0b0b0"),
        ..bar_chart()
    };
    let err = compare_plots_all(&ax1, &ax3, &PlotCompareOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "ygridlines: Length mismatch: 0 != 3");
}
