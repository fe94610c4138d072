//! Procedural motion profiles.
//!
//! A profile is a pure function of the scene clock and its bound parameters.
//! Parameters are validated once when the profile is bound to an object, so
//! evaluation never fails and never has to fall back to defaults.

use std::f64::consts::FRAC_PI_2;

use glam::Vec3;
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::state::Pose;
use crate::error::DioramaError;

/// Lowest vertical offset the drape profile may produce.
pub const DRAPE_FLOOR: f32 = -0.03;

/// Largest accepted `|flutter|`; keeps drape scale within `[0.7, 1.3]`.
pub const MAX_FLUTTER: f32 = 1.0;

/// Identifier of a motion profile, as written in motion tables and options.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    /// Gentle vertical bobbing with a slight sway (roses, ornaments).
    Bob,
    /// Coupled waves and breathing scale for fabric (cloaks, capes).
    Drape,
}

impl MotionKind {
    /// Parse a profile identifier (case-insensitive).
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "bob" => Some(Self::Bob),
            "drape" => Some(Self::Drape),
            _ => None,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bob => "bob",
            Self::Drape => "drape",
        }
    }
}

/// Parameters of the [`MotionKind::Bob`] profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobParams {
    /// Peak vertical displacement.
    pub amplitude: f32,
    /// Angular frequency in radians per second.
    pub frequency: f32,
    /// Phase shift in radians.
    pub phase: f32,
}

/// Parameters of the [`MotionKind::Drape`] profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrapeParams {
    /// Amplitude of the vertical wave.
    pub primary_amplitude: f32,
    /// Frequency of the vertical wave.
    pub primary_frequency: f32,
    /// Amplitude of the lateral wave (the depth flutter uses half of it).
    pub secondary_amplitude: f32,
    /// Frequency of the lateral wave (the depth flutter uses 60% of it).
    pub secondary_frequency: f32,
    /// Strength of the breathing scale.
    pub flutter: f32,
    /// Per-object clock shift in seconds; 0 when the table omits it.
    pub random_offset: f32,
}

/// A motion profile bound to one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionProfile {
    /// See [`BobParams`].
    Bob(BobParams),
    /// See [`DrapeParams`].
    Drape(DrapeParams),
}

impl MotionProfile {
    /// Build a profile of `kind` from a raw parameter map.
    ///
    /// `object` is the lowercase object name, used in error reports.
    pub fn bind(
        kind: MotionKind,
        object: &str,
        params: &FxHashMap<String, f32>,
    ) -> Result<Self, DioramaError> {
        let get = |key: &str| -> Result<f32, DioramaError> {
            let value = params.get(key).copied().ok_or_else(|| {
                DioramaError::bind(
                    object,
                    format!("{} profile needs '{key}'", kind.name()),
                )
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(DioramaError::bind(object, format!("'{key}' is not finite")))
            }
        };

        match kind {
            MotionKind::Bob => Ok(Self::Bob(BobParams {
                amplitude: get("bob_amplitude")?,
                frequency: get("bob_frequency")?,
                phase: get("bob_phase")?,
            })),
            MotionKind::Drape => {
                let flutter = get("flutter")?;
                if flutter.abs() > MAX_FLUTTER {
                    return Err(DioramaError::bind(
                        object,
                        format!(
                            "flutter {flutter} exceeds the ±{MAX_FLUTTER} scale band"
                        ),
                    ));
                }
                let random_offset = match params.get("random_offset") {
                    Some(v) if v.is_finite() => *v,
                    Some(_) => {
                        return Err(DioramaError::bind(
                            object,
                            "'random_offset' is not finite",
                        ))
                    }
                    None => 0.0,
                };
                Ok(Self::Drape(DrapeParams {
                    primary_amplitude: get("primary_amplitude")?,
                    primary_frequency: get("primary_frequency")?,
                    secondary_amplitude: get("secondary_amplitude")?,
                    secondary_frequency: get("secondary_frequency")?,
                    flutter,
                    random_offset,
                }))
            }
        }
    }

    /// Which profile this is.
    #[must_use]
    pub fn kind(&self) -> MotionKind {
        match self {
            Self::Bob(_) => MotionKind::Bob,
            Self::Drape(_) => MotionKind::Drape,
        }
    }

    /// Evaluate the pose at scene time `time` (seconds).
    ///
    /// Phases are computed in `f64` so long sessions keep their rate.
    #[must_use]
    pub fn evaluate(&self, time: f64) -> Pose {
        match self {
            Self::Bob(p) => bob(p, time),
            Self::Drape(p) => drape(p, time),
        }
    }
}

/// `amplitude · sin(time · frequency + phase)`, phased in `f64`.
fn wave(amplitude: f32, time: f64, frequency: f32, phase: f64) -> f32 {
    amplitude * (time * f64::from(frequency) + phase).sin() as f32
}

fn bob(p: &BobParams, time: f64) -> Pose {
    Pose {
        offset: Vec3::new(
            0.0,
            wave(p.amplitude, time, p.frequency, f64::from(p.phase)),
            0.0,
        ),
        rotation: Vec3::new(0.0, wave(0.02, time, 0.5, 0.0), 0.0),
        scale: Vec3::ONE,
    }
}

fn drape(p: &DrapeParams, time: f64) -> Pose {
    let t = time + f64::from(p.random_offset);

    let wave_y = wave(p.primary_amplitude, t, p.primary_frequency, 0.0);
    let wave_x =
        wave(p.secondary_amplitude, t, p.secondary_frequency, FRAC_PI_2);
    // Trailing depth flutter: 60% frequency, half amplitude.
    let wave_z = wave(
        p.secondary_amplitude * 0.5,
        t,
        p.secondary_frequency * 0.6,
        0.0,
    );

    let flutter = wave(p.flutter, t, 1.5, 0.0);

    Pose {
        offset: Vec3::new(
            wave_x * 0.2,
            (wave_y * 0.3).max(DRAPE_FLOOR),
            wave_z * 0.1,
        ),
        rotation: Vec3::new(wave_y * 0.1, wave_z * 0.08, wave_x * 0.1),
        scale: Vec3::new(
            1.0 + flutter * 0.2,
            1.0 + flutter * 0.3,
            1.0 - flutter * 0.1,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, f32)]) -> FxHashMap<String, f32> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
    }

    fn drape_params(flutter: f32) -> FxHashMap<String, f32> {
        params(&[
            ("primary_amplitude", 0.2),
            ("primary_frequency", 1.2),
            ("secondary_amplitude", 0.15),
            ("secondary_frequency", 0.8),
            ("flutter", flutter),
            ("random_offset", 0.0),
        ])
    }

    #[test]
    fn bob_follows_sine() {
        let profile = MotionProfile::bind(
            MotionKind::Bob,
            "rose_1",
            &params(&[
                ("bob_amplitude", 0.05),
                ("bob_frequency", 2.0),
                ("bob_phase", 0.0),
            ]),
        )
        .unwrap();
        let pose = profile.evaluate(std::f64::consts::FRAC_PI_4);
        // sin(π/2) = 1
        assert!((pose.offset.y - 0.05).abs() < 1e-6);
        assert_eq!(pose.offset.x, 0.0);
        assert_eq!(pose.scale, Vec3::ONE);
        assert!(pose.rotation.y.abs() <= 0.02);
    }

    #[test]
    fn drape_at_time_zero_is_rest_height_and_unit_scale() {
        let profile =
            MotionProfile::bind(MotionKind::Drape, "cloak", &drape_params(0.4))
                .unwrap();
        let pose = profile.evaluate(0.0);
        assert_eq!(pose.offset.y, 0.0);
        assert_eq!(pose.scale, Vec3::ONE);
        // Lateral wave starts at its peak because of the 90° shift.
        assert!((pose.offset.x - 0.15 * 0.2).abs() < 1e-6);
    }

    #[test]
    fn drape_never_sinks_below_floor() {
        let mut p = drape_params(0.4);
        let _ = p.insert("primary_amplitude".into(), 5.0);
        let profile =
            MotionProfile::bind(MotionKind::Drape, "cloak", &p).unwrap();
        for i in 0..500 {
            let pose = profile.evaluate(f64::from(i) * 0.037);
            assert!(pose.offset.y >= DRAPE_FLOOR);
        }
    }

    #[test]
    fn drape_scale_coefficients_are_asymmetric() {
        let profile =
            MotionProfile::bind(MotionKind::Drape, "cloak", &drape_params(0.5))
                .unwrap();
        // sin(1.5 t) = 1 at t = π/3
        let pose = profile.evaluate(std::f64::consts::PI / 3.0);
        assert!((pose.scale.x - 1.1).abs() < 1e-5);
        assert!((pose.scale.y - 1.15).abs() < 1e-5);
        assert!((pose.scale.z - 0.95).abs() < 1e-5);
    }

    #[test]
    fn missing_parameter_is_a_bind_error() {
        let err = MotionProfile::bind(
            MotionKind::Bob,
            "rose_2",
            &params(&[("bob_amplitude", 0.05)]),
        )
        .unwrap_err();
        assert!(matches!(err, DioramaError::Bind { ref object, .. } if object == "rose_2"));
    }

    #[test]
    fn out_of_band_flutter_is_rejected() {
        let err =
            MotionProfile::bind(MotionKind::Drape, "cloak", &drape_params(2.0))
                .unwrap_err();
        assert!(matches!(err, DioramaError::Bind { .. }));
    }

    #[test]
    fn absent_random_offset_defaults_to_zero() {
        let mut p = drape_params(0.3);
        let _ = p.remove("random_offset");
        let profile =
            MotionProfile::bind(MotionKind::Drape, "cloak_left", &p).unwrap();
        let MotionProfile::Drape(d) = profile else {
            unreachable!("bound a drape profile");
        };
        assert_eq!(d.random_offset, 0.0);
        assert_eq!(profile.evaluate(0.0).scale, Vec3::ONE);
    }

    #[test]
    fn phase_holds_after_hours_of_scene_time() {
        let profile = MotionProfile::bind(
            MotionKind::Bob,
            "rose_1",
            &params(&[
                ("bob_amplitude", 1.0),
                ("bob_frequency", 1.0),
                ("bob_phase", 0.0),
            ]),
        )
        .unwrap();
        // 8 h in, a quarter period past a whole number of periods
        let periods = (8.0 * 3600.0 / std::f64::consts::TAU).floor();
        let time = periods * std::f64::consts::TAU + FRAC_PI_2;
        assert!((profile.evaluate(time).offset.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn kind_parsing() {
        assert_eq!(MotionKind::parse("Drape"), Some(MotionKind::Drape));
        assert_eq!(MotionKind::parse("bob"), Some(MotionKind::Bob));
        assert_eq!(MotionKind::parse("spin"), None);
    }
}
