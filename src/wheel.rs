use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::angle::{normalize_deg, slice_index, spin_target, SpinTarget};
use crate::segment::{Segment, SegmentSet};
use crate::select::pick_weighted;

/// Tuning for how a wheel spins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinTuning {
    /// How long one spin animation runs.
    pub duration: Duration,
    /// Minimum number of whole forward turns per spin. At least 1.
    pub full_turns: u32,
    /// While true, spin requests are rejected.
    pub disabled: bool,
}

impl Default for SpinTuning {
    fn default() -> Self {
        SpinTuning {
            duration: Duration::from_secs(4),
            full_turns: 6,
            disabled: false,
        }
    }
}

/// Errors returned when a spin request is rejected.
///
/// Both variants leave the wheel untouched; `Busy` in particular is the
/// "silently ignore the second press" case and callers are free to discard
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinError {
    /// A spin is already in flight. Exactly one spin runs at a time.
    Busy,
    /// The wheel is disabled by [SpinTuning::disabled].
    Disabled,
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::Busy => write!(f, "a spin is already in flight"),
            SpinError::Disabled => write!(f, "the wheel is disabled"),
        }
    }
}

impl std::error::Error for SpinError {}

/// What the caller hands to its animation driver after a successful spin
/// request: animate rotation from `from` to `to` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinPlan {
    /// Rotation at the start of the animation (the wheel's base rotation).
    pub from: f64,
    /// Absolute rotation at the end of the animation.
    pub to: f64,
    /// How long the animation should run.
    pub duration: Duration,
}

/// A slice-boundary crossing observed during rotation, for driving discrete
/// feedback (a haptic pulse, a pointer wiggle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// The slot the pointer has just entered.
    pub index: usize,
}

/// The result of a completed spin.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinOutcome {
    /// Slot index the wheel came to rest on.
    pub index: usize,
    /// The segment at that slot.
    pub segment: Segment,
}

struct InFlight {
    target: SpinTarget,
    chosen: usize,
}

/// A prize wheel: weighted outcome selection plus the rotation bookkeeping
/// that makes the animated wheel land on the selected outcome.
///
/// One `Wheel` is one unit of encapsulated state. It performs no I/O and
/// calls no collaborator; the caller's animation driver feeds rotation
/// values in through [Wheel::observe_rotation] and signals completion
/// through [Wheel::complete]. Rotation updates within one spin must arrive
/// in non-decreasing order.
///
/// # Examples
///
/// ```
/// use fortuna::segment::{Segment, SegmentSet};
/// use fortuna::wheel::{SpinTuning, Wheel};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let set = SegmentSet::new(vec![
///     Segment::new("tea"),
///     Segment::new("coffee"),
///     Segment::weighted("cake", 2.0),
/// ]).unwrap();
/// let mut wheel = Wheel::new(set, SpinTuning::default());
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let plan = wheel.spin(&mut rng).unwrap();
/// // ...animate from plan.from to plan.to, feeding values back in...
/// wheel.observe_rotation(plan.from);
/// wheel.observe_rotation(plan.to);
/// let outcome = wheel.complete(true).unwrap();
/// assert_eq!(Some(outcome.index), wheel.selected());
/// ```
pub struct Wheel {
    segments: SegmentSet,
    tuning: SpinTuning,
    rotation: f64,
    in_flight: Option<InFlight>,
    last_observed: Option<usize>,
    selected: Option<usize>,
}

impl Wheel {
    /// Create a wheel at rest, rotation 0, nothing yet selected.
    pub fn new(segments: SegmentSet, tuning: SpinTuning) -> Wheel {
        Wheel {
            segments,
            tuning,
            rotation: 0.0,
            in_flight: None,
            last_observed: None,
            selected: None,
        }
    }

    /// The segments on this wheel.
    pub fn segments(&self) -> &SegmentSet {
        &self.segments
    }

    /// The wheel's current base rotation in degrees. Normalized into
    /// `[0, 360)` whenever the wheel is at rest.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// True while a spin is in flight.
    pub fn is_spinning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The slot index of the most recently completed spin, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Enable or disable spin requests.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.tuning.disabled = disabled;
    }

    /// Request a spin.
    ///
    /// Runs outcome selection and target computation synchronously and
    /// atomically, enters the spinning state, and returns the plan for the
    /// caller's animation driver. Rejected without side effects while
    /// disabled or while a spin is already in flight.
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> Result<SpinPlan, SpinError> {
        if self.tuning.disabled {
            return Err(SpinError::Disabled);
        }
        if self.in_flight.is_some() {
            return Err(SpinError::Busy);
        }

        let chosen = pick_weighted(self.segments.weights(), rng);
        let target = spin_target(
            chosen,
            self.segments.len(),
            self.rotation,
            self.tuning.full_turns.max(1),
            rng,
        );
        debug!(
            "spin: chose slot {chosen} ({:?}), rotating {:.1} -> {:.1}",
            self.segments.get(chosen).map(Segment::label),
            self.rotation,
            target.rotation,
        );

        self.last_observed = None;
        self.in_flight = Some(InFlight { target, chosen });
        Ok(SpinPlan {
            from: self.rotation,
            to: target.rotation,
            duration: self.tuning.duration,
        })
    }

    /// Feed one rotation value from the animation driver.
    ///
    /// Returns a [Tick] when the pointer has crossed into a different slice
    /// since the previous observation. The first observation of a spin only
    /// seeds the boundary detector; it never ticks. Ignored while no spin is
    /// in flight.
    pub fn observe_rotation(&mut self, rotation: f64) -> Option<Tick> {
        self.in_flight.as_ref()?;

        let index = slice_index(rotation, self.segments.len());
        match self.last_observed {
            Some(prev) if prev != index => {
                trace!("tick: pointer entered slot {index}");
                self.last_observed = Some(index);
                Some(Tick { index })
            }
            Some(_) => None,
            None => {
                self.last_observed = Some(index);
                None
            }
        }
    }

    /// Deliver the animation driver's completion signal.
    ///
    /// Settles the wheel at the target computed at spin entry: the base
    /// rotation becomes the normalized target and the selected slot is
    /// derived by mapping the exact target angle, which by construction is
    /// the slot chosen at spin entry. The outcome was decided when the spin
    /// started, so an unfinished animation (`finished == false`) settles the
    /// same way. Returns `None` when no spin is in flight.
    pub fn complete(&mut self, finished: bool) -> Option<SpinOutcome> {
        let InFlight { target, chosen } = self.in_flight.take()?;

        self.rotation = normalize_deg(target.rotation);
        let index = slice_index(target.rotation, self.segments.len());
        debug_assert_eq!(chosen, index);
        self.selected = Some(index);
        self.last_observed = None;

        // slice_index clamps into [0, len), so the slot always exists.
        let segment = self
            .segments
            .get(index)
            .cloned()
            .expect("clamped slice index is in range");
        debug!(
            "spin complete (finished: {finished}): slot {index} ({}), resting at {:.1}",
            segment.label(),
            self.rotation,
        );
        Some(SpinOutcome { index, segment })
    }
}
