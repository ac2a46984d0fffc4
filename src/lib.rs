#![deny(missing_docs)]

//! Fortuna provides a deterministic core for weighted prize-wheel spinners.
//! This includes:
//!
//! * Weighted random outcome selection
//! * Rotation-target and angle/index arithmetic for an animated wheel
//! * A single-spin state machine with slice-boundary tick events
//!
//! The crate performs no rendering and no I/O. A host UI requests a spin,
//! animates the returned rotation plan however it likes, and feeds rotation
//! values and the completion signal back in; all randomness flows through an
//! injectable [rand::Rng] so outcomes are reproducible under a seeded
//! generator.

/// Provides the segment data model: labeled, weighted outcomes and the
/// validated sets a wheel is built from.
pub mod segment;

/// Provides weighted random selection: the cumulative-inversion sampler and
/// a generic weighted roll table.
pub mod select;

/// Provides degree arithmetic: normalization, angle-to-index mapping, and
/// spin-target computation.
pub mod angle;

/// Provides the wheel state machine: spin requests, tick detection, and
/// spin completion.
pub mod wheel;

/// Provides a synchronous frame-stepping animation driver.
pub mod drive;
