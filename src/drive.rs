//! A synchronous, deterministic animation driver.
//!
//! The wheel itself never animates anything: a host UI normally interpolates
//! the [crate::wheel::SpinPlan] and feeds frames back in. This module is the
//! collaborator for hosts without a frame loop (and for tests): it steps
//! virtual time in fixed frame intervals, eases the rotation, and drives the
//! wheel from spin request to completion in one call.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::wheel::{SpinError, SpinOutcome, Tick, Wheel};

/// Interpolation curves for the spin animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant angular velocity.
    Linear,
    /// Quadratic deceleration, `p * (2 - p)`: fast off the line, settling
    /// gently. The usual prize-wheel feel.
    #[default]
    EaseOut,
}

impl Easing {
    /// Map animation progress `p` in `[0, 1]` onto eased progress.
    ///
    /// Both curves are monotonically non-decreasing on `[0, 1]`, which is
    /// what lets the driver honor the wheel's in-order delivery contract.
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Easing::Linear => p,
            Easing::EaseOut => p * (2.0 - p),
        }
    }
}

/// Drives a [Wheel] through a whole spin in fixed virtual-time steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameDriver {
    /// Virtual time between frames.
    pub frame_interval: Duration,
    /// Easing curve applied to the rotation.
    pub easing: Easing,
}

impl Default for FrameDriver {
    /// 16ms frames (roughly 60fps) with ease-out.
    fn default() -> Self {
        FrameDriver {
            frame_interval: Duration::from_millis(16),
            easing: Easing::EaseOut,
        }
    }
}

impl FrameDriver {
    /// Spin the wheel and run it to completion.
    ///
    /// Requests the spin, streams one eased rotation value per frame into
    /// the wheel (invoking `on_tick` for every slice boundary crossed),
    /// delivers the completion signal, and returns the outcome. A spin
    /// rejection is passed through untouched.
    ///
    /// The final frame lands exactly on the target rotation.
    pub fn run<R: Rng, F: FnMut(Tick)>(
        &self,
        wheel: &mut Wheel,
        rng: &mut R,
        mut on_tick: F,
    ) -> Result<SpinOutcome, SpinError> {
        let plan = wheel.spin(rng)?;

        let interval = self.frame_interval.as_nanos();
        let frames = if interval == 0 {
            1
        } else {
            plan.duration.as_nanos().div_ceil(interval).max(1)
        };
        for frame in 1..=frames {
            let p = frame as f64 / frames as f64;
            let rotation = plan.from + (plan.to - plan.from) * self.easing.apply(p);
            if let Some(tick) = wheel.observe_rotation(rotation) {
                on_tick(tick);
            }
        }

        let outcome = wheel
            .complete(true)
            .expect("spin was in flight and must settle");
        Ok(outcome)
    }
}
