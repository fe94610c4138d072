//! Procedural object animation.
//!
//! Each scene object may be bound, once at load time, to a
//! [`MotionProfile`] resolved from its name and the [`MotionTable`]. Every
//! frame the [`ProceduralAnimator`] evaluates that profile against the
//! scene clock and writes the resulting pose into the object's
//! [`AnimationState`].
//!
//! ```
//! use diorama::animation::{AnimationState, ProceduralAnimator};
//!
//! let animator = ProceduralAnimator::new();
//! let mut state = AnimationState::new();
//! animator.advance(&mut state, None, 1.0 / 60.0, 1.0 / 60.0);
//! assert_eq!(state.scale, glam::Vec3::ONE);
//! ```

pub mod animator;
pub mod profile;
pub mod state;
pub mod table;

pub use animator::ProceduralAnimator;
pub use profile::{BobParams, DrapeParams, MotionKind, MotionProfile};
pub use state::{AnimationState, Pose};
pub use table::{MotionEntry, MotionMarkers, MotionTable};
