//! Geometric paths as reported by rendered artists.
//!
//! A path is a list of vertices with an optional code per vertex telling how
//! the vertex is reached. Curves contribute one vertex per control point, each
//! tagged with the curve's code, so two paths with the same drawing commands
//! have identical vertex and code arrays.

use crate::error::{CompareError, CompareResult};

/// How a path vertex is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PathCode {
    /// End of the path.
    Stop = 0,
    /// Start a new subpath at this vertex.
    MoveTo = 1,
    /// Straight line to this vertex.
    LineTo = 2,
    /// Quadratic Bezier: control point then end point.
    Curve3 = 3,
    /// Cubic Bezier: two control points then end point.
    Curve4 = 4,
    /// Close the current subpath.
    ClosePoly = 79,
}

/// Vertices and optional path codes of a single path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtistPath {
    /// Vertex coordinates.
    pub vertices: Vec<[f64; 2]>,
    /// One code per vertex; `None` means an implicit polyline.
    pub codes: Option<Vec<PathCode>>,
}

impl ArtistPath {
    /// Create a path from explicit vertices and codes.
    pub fn new(vertices: Vec<[f64; 2]>, codes: Option<Vec<PathCode>>) -> Self {
        Self { vertices, codes }
    }

    /// Create a path with no codes: a polyline through `vertices`.
    pub fn polyline(vertices: Vec<[f64; 2]>) -> Self {
        Self {
            vertices,
            codes: None,
        }
    }

    /// Convert a rendered tiny-skia path.
    pub fn from_skia_path(path: &tiny_skia::Path) -> Self {
        let mut recorder = PathRecorder::default();
        for segment in path.segments() {
            match segment {
                tiny_skia::PathSegment::MoveTo(p) => recorder.move_to(pt(p)),
                tiny_skia::PathSegment::LineTo(p) => recorder.line_to(pt(p)),
                tiny_skia::PathSegment::QuadTo(p1, p) => recorder.quad_to(pt(p1), pt(p)),
                tiny_skia::PathSegment::CubicTo(p1, p2, p) => {
                    recorder.cubic_to(pt(p1), pt(p2), pt(p))
                }
                tiny_skia::PathSegment::Close => recorder.close(),
            }
        }
        recorder.finish()
    }

    /// Create a path from SVG path data.
    ///
    /// Relative, shorthand and arc commands are normalized to absolute
    /// move/line/quadratic/cubic segments first.
    ///
    /// # Example
    /// ```
    /// use plot_assert::{ArtistPath, PathCode};
    ///
    /// let path = ArtistPath::from_svg_path_data("M0,0 L10,0 L10,10 Z").unwrap();
    /// assert_eq!(path.vertices.len(), 4);
    /// assert_eq!(path.codes.unwrap()[3], PathCode::ClosePoly);
    /// ```
    pub fn from_svg_path_data(path_data: &str) -> CompareResult<Self> {
        let mut recorder = PathRecorder::default();

        for segment in svgtypes::SimplifyingPathParser::from(path_data) {
            let segment = segment.map_err(|e| {
                CompareError::InvalidPath(format!("Invalid SVG path data: {:?}", e))
            })?;

            match segment {
                svgtypes::SimplePathSegment::MoveTo { x, y } => recorder.move_to([x, y]),
                svgtypes::SimplePathSegment::LineTo { x, y } => recorder.line_to([x, y]),
                svgtypes::SimplePathSegment::Quadratic { x1, y1, x, y } => {
                    recorder.quad_to([x1, y1], [x, y])
                }
                svgtypes::SimplePathSegment::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => recorder.cubic_to([x1, y1], [x2, y2], [x, y]),
                svgtypes::SimplePathSegment::ClosePath => recorder.close(),
            }
        }

        Ok(recorder.finish())
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl From<&tiny_skia::Path> for ArtistPath {
    fn from(path: &tiny_skia::Path) -> Self {
        ArtistPath::from_skia_path(path)
    }
}

fn pt(p: tiny_skia::Point) -> [f64; 2] {
    [p.x as f64, p.y as f64]
}

/// Accumulates vertices and codes, tracking the subpath start for closes.
#[derive(Default)]
struct PathRecorder {
    vertices: Vec<[f64; 2]>,
    codes: Vec<PathCode>,
    subpath_start: [f64; 2],
}

impl PathRecorder {
    fn push(&mut self, vertex: [f64; 2], code: PathCode) {
        self.vertices.push(vertex);
        self.codes.push(code);
    }

    fn move_to(&mut self, p: [f64; 2]) {
        self.subpath_start = p;
        self.push(p, PathCode::MoveTo);
    }

    fn line_to(&mut self, p: [f64; 2]) {
        self.push(p, PathCode::LineTo);
    }

    fn quad_to(&mut self, p1: [f64; 2], p: [f64; 2]) {
        self.push(p1, PathCode::Curve3);
        self.push(p, PathCode::Curve3);
    }

    fn cubic_to(&mut self, p1: [f64; 2], p2: [f64; 2], p: [f64; 2]) {
        self.push(p1, PathCode::Curve4);
        self.push(p2, PathCode::Curve4);
        self.push(p, PathCode::Curve4);
    }

    fn close(&mut self) {
        let start = self.subpath_start;
        self.push(start, PathCode::ClosePoly);
    }

    fn finish(self) -> ArtistPath {
        ArtistPath::new(self.vertices, Some(self.codes))
    }
}
