//! Freehand stroke capture and gesture classification.
//!
//! A `Stroke` is the ordered point trace of one continuous pointer drag. The
//! classifier samples exactly three points (first, middle, last) and runs a
//! fixed decision tree over them; the first matching branch wins. Thresholds
//! are calibration constants and are deliberately not configurable.

use tracing::debug;

/// Minimum vertical or horizontal travel (px) for the curved and pointing
/// shapes, and the band inside which endpoints read as "no travel".
const SPAN_THRESHOLD: f32 = 20.0;

/// Maximum horizontal distance (px) between endpoints for a closed shape.
const CLOSURE_THRESHOLD: f32 = 15.0;

/// Maximum vertical offset (px) from the midpoint for a level stroke.
const LEVEL_THRESHOLD: f32 = 10.0;

/// One pointer sample in surface-relative pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Ordered point trace of one continuous pointer drag.
///
/// Accumulated while the pointer button is held down and discarded after
/// every classification attempt, successful or not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Create a new empty stroke.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a stroke from captured points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append a pointer sample.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of captured samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no samples have been captured.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Discard all samples.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The captured samples in drag order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// A recognized freehand gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Circle,
    Smile,
    Frown,
    PointLeft,
    PointRight,
    NeutralFace,
}

impl Gesture {
    /// The fixed glyph committed for this gesture.
    pub fn emoji(self) -> char {
        match self {
            Gesture::Circle => '😮',
            Gesture::Smile => '🙂',
            Gesture::Frown => '🙁',
            Gesture::PointLeft => '👈',
            Gesture::PointRight => '👉',
            Gesture::NeutralFace => '😐',
        }
    }
}

/// Classify a stroke into a gesture, or `None` when no branch matches.
///
/// Pure function of the three sampled points: `start = first`, `end = last`,
/// `mid = points[len / 2]`. Strokes with fewer than 3 points are evaluated
/// as-is with the samples coinciding; an empty stroke never classifies.
pub fn classify(stroke: &Stroke) -> Option<Gesture> {
    let points = stroke.points();
    let (start, end, mid) = match points {
        [] => return None,
        _ => (
            points[0],
            points[points.len() - 1],
            points[points.len() / 2],
        ),
    };

    let gesture = if mid.y - start.y > SPAN_THRESHOLD && mid.y - end.y > SPAN_THRESHOLD {
        // Concave-up: the stroke dips below both endpoints.
        if (start.x - end.x).abs() < CLOSURE_THRESHOLD
            && (start.x - mid.x).abs() > SPAN_THRESHOLD
        {
            Some(Gesture::Circle)
        } else {
            Some(Gesture::Smile)
        }
    } else if start.y - mid.y > SPAN_THRESHOLD && end.y - mid.y > SPAN_THRESHOLD {
        // Concave-down.
        Some(Gesture::Frown)
    } else if (start.y - mid.y).abs() < LEVEL_THRESHOLD
        && (end.y - mid.y).abs() < LEVEL_THRESHOLD
    {
        // All three samples roughly level.
        if start.x - end.x > SPAN_THRESHOLD {
            Some(Gesture::PointLeft)
        } else if end.x - start.x > SPAN_THRESHOLD {
            Some(Gesture::PointRight)
        } else if (start.x - end.x).abs() < SPAN_THRESHOLD {
            Some(Gesture::NeutralFace)
        } else {
            None
        }
    } else {
        None
    };

    match gesture {
        Some(g) => debug!(gesture = ?g, samples = points.len(), "stroke classified"),
        None => debug!(samples = points.len(), "stroke matched no gesture"),
    }
    gesture
}
