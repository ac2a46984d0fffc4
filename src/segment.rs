use serde::{Deserialize, Serialize};
use std::fmt;

fn default_weight() -> f64 {
    1.0
}

/// One labeled, weighted candidate outcome on the wheel.
///
/// The weight is *relative*: a segment with weight 4 is four times as likely
/// to be selected as one with weight 1. Weight affects selection probability
/// only; every segment occupies an equal angular slice of the wheel.
///
/// A weight omitted from serialized input defaults to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    label: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

impl Segment {
    /// Create a segment with the default weight of 1.
    pub fn new<S: Into<String>>(label: S) -> Segment {
        Segment {
            label: label.into(),
            weight: default_weight(),
        }
    }

    /// Create a segment with an explicit relative weight.
    ///
    /// The weight is validated when the segment is placed into a
    /// [SegmentSet], not here.
    pub fn weighted<S: Into<String>>(label: S, weight: f64) -> Segment {
        Segment {
            label: label.into(),
            weight,
        }
    }

    /// The display label for this segment.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The relative selection weight for this segment.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Errors that may occur when constructing a [SegmentSet].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentError {
    /// The segment list is empty; a wheel needs at least one outcome.
    Empty,
    /// The segment at the given index has a negative or non-finite weight.
    InvalidWeight(usize),
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::Empty => write!(f, "segment list is empty"),
            SegmentError::InvalidWeight(i) => {
                write!(f, "segment {i} has a negative or non-finite weight")
            }
        }
    }
}

impl std::error::Error for SegmentError {}

/// A validated, ordered, non-empty set of segments.
///
/// Construction is the single place the caller preconditions are enforced:
/// a [crate::wheel::Wheel] can only be built from a `SegmentSet`, so a spin
/// can never observe an empty or malformed segment list.
///
/// Zero weights are permitted (the selector defines a fallback for the
/// all-zero case); negative and non-finite weights are rejected.
///
/// `SegmentSet` deliberately has no serde derive: deserialize a
/// `Vec<Segment>` and pass it through [SegmentSet::new] so validation is not
/// bypassed.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet {
    segments: Vec<Segment>,
    weights: Vec<f64>,
}

impl SegmentSet {
    /// Validate a list of segments into a set.
    ///
    /// # Examples
    ///
    /// ```
    /// use fortuna::segment::{Segment, SegmentSet, SegmentError};
    ///
    /// let set = SegmentSet::new(vec![
    ///     Segment::new("coffee"),
    ///     Segment::weighted("long break", 0.5),
    /// ]).unwrap();
    /// assert_eq!(180.0, set.slice_angle());
    ///
    /// let err = SegmentSet::new(Vec::new());
    /// assert_eq!(Err(SegmentError::Empty), err);
    /// ```
    pub fn new(segments: Vec<Segment>) -> Result<SegmentSet, SegmentError> {
        if segments.is_empty() {
            return Err(SegmentError::Empty);
        }
        for (i, s) in segments.iter().enumerate() {
            if !s.weight.is_finite() || s.weight < 0.0 {
                return Err(SegmentError::InvalidWeight(i));
            }
        }
        let weights = segments.iter().map(|s| s.weight).collect();
        Ok(SegmentSet { segments, weights })
    }

    /// The number of segments in the set. Always at least 1.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the set has no segments. An empty set cannot be
    /// constructed, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment at the given slot index, if in range.
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Iterate over the segments in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// The weights of all segments, in slot order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The angular width of each slice, in degrees: `360 / N`.
    ///
    /// Equal for all segments regardless of weight.
    pub fn slice_angle(&self) -> f64 {
        360.0 / self.segments.len() as f64
    }
}
