//! Shared utilities: easing curves, frame pacing, and name-marker matching.

/// Easing curves for camera transitions.
pub mod easing;
/// Frame pacing and FPS smoothing.
pub mod frame_timing;
/// Longest-marker name matching.
pub mod markers;
