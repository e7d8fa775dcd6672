//! Axes and legends: composite objects holding artists and decorations.

use crate::artist::{Artist, ArtistSnapshot};
use crate::color::ColorValue;

/// Axis scale type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scale {
    #[default]
    Linear,
    Log,
    SymLog,
    Logit,
    /// A custom or renderer-specific scale.
    Other(String),
}

/// Aspect ratio setting of an axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Aspect {
    /// Fill the available box.
    #[default]
    Auto,
    /// Fixed ratio of y-unit to x-unit length.
    Ratio(f64),
}

impl Aspect {
    /// Equal scaling of both axes.
    pub fn equal() -> Self {
        Aspect::Ratio(1.0)
    }
}

/// A border line of the plot frame, identified by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Spine {
    pub name: String,
    pub edge_color: ColorValue,
    pub line_width: f64,
}

impl Spine {
    pub fn new(name: impl Into<String>, edge_color: impl Into<ColorValue>, line_width: f64) -> Self {
        Self {
            name: name.into(),
            edge_color: edge_color.into(),
            line_width,
        }
    }
}

/// Default frame: four black spines of width 0.8.
fn default_spines() -> Vec<Spine> {
    ["left", "right", "bottom", "top"]
        .into_iter()
        .map(|name| Spine::new(name, "black", 0.8))
        .collect()
}

/// A rendered legend.
pub trait PlotLegend {
    /// Title text.
    fn title(&self) -> String;

    /// Entry label texts, in display order.
    fn texts(&self) -> Vec<String>;

    /// Patch handles drawn next to the labels.
    fn patches(&self) -> Vec<&dyn Artist>;

    /// Line handles drawn next to the labels.
    fn lines(&self) -> Vec<&dyn Artist>;
}

/// A rendered axes.
pub trait PlotAxes {
    fn patches(&self) -> Vec<&dyn Artist>;
    fn lines(&self) -> Vec<&dyn Artist>;
    fn collections(&self) -> Vec<&dyn Artist>;
    fn images(&self) -> Vec<&dyn Artist>;
    fn texts(&self) -> Vec<&dyn Artist>;

    fn xlabel(&self) -> String;
    fn ylabel(&self) -> String;

    fn xscale(&self) -> Scale;
    fn yscale(&self) -> Scale;

    fn xlim(&self) -> (f64, f64);
    fn ylim(&self) -> (f64, f64);

    fn aspect(&self) -> Aspect;

    /// Tick positions in data coordinates.
    fn xticks(&self) -> Vec<f64>;
    fn yticks(&self) -> Vec<f64>;

    fn xticklabels(&self) -> Vec<String>;
    fn yticklabels(&self) -> Vec<String>;

    /// All spines of the frame.
    fn spines(&self) -> Vec<Spine>;

    /// The spine called `name`, if any.
    fn spine(&self, name: &str) -> Option<Spine> {
        self.spines().into_iter().find(|spine| spine.name == name)
    }

    /// The legend, if one has been drawn.
    fn legend(&self) -> Option<&dyn PlotLegend>;

    fn xgridlines(&self) -> Vec<&dyn Artist>;
    fn ygridlines(&self) -> Vec<&dyn Artist>;
}

fn as_artists(artists: &[ArtistSnapshot]) -> Vec<&dyn Artist> {
    artists.iter().map(|a| a as &dyn Artist).collect()
}

/// An owned legend description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendSnapshot {
    pub title: String,
    pub texts: Vec<String>,
    pub patches: Vec<ArtistSnapshot>,
    pub lines: Vec<ArtistSnapshot>,
}

impl PlotLegend for LegendSnapshot {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn texts(&self) -> Vec<String> {
        self.texts.clone()
    }

    fn patches(&self) -> Vec<&dyn Artist> {
        as_artists(&self.patches)
    }

    fn lines(&self) -> Vec<&dyn Artist> {
        as_artists(&self.lines)
    }
}

/// An owned axes description.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesSnapshot {
    pub patches: Vec<ArtistSnapshot>,
    pub lines: Vec<ArtistSnapshot>,
    pub collections: Vec<ArtistSnapshot>,
    pub images: Vec<ArtistSnapshot>,
    pub texts: Vec<ArtistSnapshot>,
    pub xlabel: String,
    pub ylabel: String,
    pub xscale: Scale,
    pub yscale: Scale,
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub aspect: Aspect,
    pub xticks: Vec<f64>,
    pub yticks: Vec<f64>,
    pub xticklabels: Vec<String>,
    pub yticklabels: Vec<String>,
    pub spines: Vec<Spine>,
    pub legend: Option<LegendSnapshot>,
    pub xgridlines: Vec<ArtistSnapshot>,
    pub ygridlines: Vec<ArtistSnapshot>,
}

impl Default for AxesSnapshot {
    fn default() -> Self {
        Self {
            patches: Vec::new(),
            lines: Vec::new(),
            collections: Vec::new(),
            images: Vec::new(),
            texts: Vec::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            xscale: Scale::Linear,
            yscale: Scale::Linear,
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            aspect: Aspect::Auto,
            xticks: Vec::new(),
            yticks: Vec::new(),
            xticklabels: Vec::new(),
            yticklabels: Vec::new(),
            spines: default_spines(),
            legend: None,
            xgridlines: Vec::new(),
            ygridlines: Vec::new(),
        }
    }
}

impl PlotAxes for AxesSnapshot {
    fn patches(&self) -> Vec<&dyn Artist> {
        as_artists(&self.patches)
    }

    fn lines(&self) -> Vec<&dyn Artist> {
        as_artists(&self.lines)
    }

    fn collections(&self) -> Vec<&dyn Artist> {
        as_artists(&self.collections)
    }

    fn images(&self) -> Vec<&dyn Artist> {
        as_artists(&self.images)
    }

    fn texts(&self) -> Vec<&dyn Artist> {
        as_artists(&self.texts)
    }

    fn xlabel(&self) -> String {
        self.xlabel.clone()
    }

    fn ylabel(&self) -> String {
        self.ylabel.clone()
    }

    fn xscale(&self) -> Scale {
        self.xscale.clone()
    }

    fn yscale(&self) -> Scale {
        self.yscale.clone()
    }

    fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    fn aspect(&self) -> Aspect {
        self.aspect
    }

    fn xticks(&self) -> Vec<f64> {
        self.xticks.clone()
    }

    fn yticks(&self) -> Vec<f64> {
        self.yticks.clone()
    }

    fn xticklabels(&self) -> Vec<String> {
        self.xticklabels.clone()
    }

    fn yticklabels(&self) -> Vec<String> {
        self.yticklabels.clone()
    }

    fn spines(&self) -> Vec<Spine> {
        self.spines.clone()
    }

    fn legend(&self) -> Option<&dyn PlotLegend> {
        self.legend.as_ref().map(|l| l as &dyn PlotLegend)
    }

    fn xgridlines(&self) -> Vec<&dyn Artist> {
        as_artists(&self.xgridlines)
    }

    fn ygridlines(&self) -> Vec<&dyn Artist> {
        as_artists(&self.ygridlines)
    }
}
