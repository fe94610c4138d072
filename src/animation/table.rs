//! Motion-profile table loaded from JSON.
//!
//! The table maps lowercase object names to a parameter set:
//!
//! ```json
//! {
//!   "rose_left":  { "bob_amplitude": 0.03, "bob_frequency": 1.4, "bob_phase": 0.0 },
//!   "cloak":      { "profile": "drape", "primary_amplitude": 0.2, "flutter": 0.3 }
//! }
//! ```
//!
//! Entries are kept as parsed as far as possible: a field that is not a
//! number is remembered so the object it belongs to fails at bind time,
//! while the rest of the table stays usable.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::profile::{MotionKind, MotionProfile};
use crate::error::DioramaError;
use crate::util::markers::best_marker_match;

/// Parameter set for one object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionEntry {
    /// Explicit profile identifier, overriding name-marker resolution.
    pub profile: Option<String>,
    /// Numeric parameters.
    pub params: FxHashMap<String, f32>,
    /// Fields present in the source that were not numbers.
    pub malformed: Vec<String>,
}

/// Lowercase object name → [`MotionEntry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionTable {
    entries: FxHashMap<String, MotionEntry>,
}

/// Marker substring → profile, as configured in
/// [`AnimationOptions`](crate::options::AnimationOptions).
pub type MotionMarkers = [(String, MotionKind)];

impl MotionTable {
    /// Empty table: no object gets custom motion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, DioramaError> {
        let root: Value = serde_json::from_str(text)?;
        let Value::Object(map) = root else {
            return Err(DioramaError::Config(
                "motion table must be a JSON object".into(),
            ));
        };

        let mut entries = FxHashMap::default();
        for (name, value) in map {
            let Value::Object(fields) = value else {
                log::warn!("motion table entry '{name}' is not an object");
                let entry = MotionEntry {
                    malformed: vec![String::from("<entry>")],
                    ..MotionEntry::default()
                };
                let _ = entries.insert(name.to_lowercase(), entry);
                continue;
            };
            let mut entry = MotionEntry::default();
            for (key, field) in fields {
                match (key.as_str(), field) {
                    ("profile", Value::String(id)) => entry.profile = Some(id),
                    (_, Value::Number(n)) => match n.as_f64() {
                        Some(v) => {
                            let _ = entry.params.insert(key, v as f32);
                        }
                        None => entry.malformed.push(key),
                    },
                    _ => entry.malformed.push(key),
                }
            }
            let _ = entries.insert(name.to_lowercase(), entry);
        }
        Ok(Self { entries })
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> Result<Self, DioramaError> {
        let text = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&text)?;
        log::info!(
            "loaded {} motion entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load a table, falling back to an empty one (logged once) on failure.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!(
                "motion table {} unavailable, no custom motion: {e}",
                path.display()
            );
            Self::new()
        })
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: &str, entry: MotionEntry) {
        let _ = self.entries.insert(name.to_lowercase(), entry);
    }

    /// Look up an entry by object name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MotionEntry> {
        self.entries.get(&name.to_lowercase())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve and bind the motion profile for `name`.
    ///
    /// Returns `Ok(None)` when the object has no profile marker or no table
    /// entry, and a [`DioramaError::Bind`] when its entry cannot drive the
    /// resolved profile.
    pub fn bind(
        &self,
        name: &str,
        markers: &MotionMarkers,
    ) -> Result<Option<MotionProfile>, DioramaError> {
        let key = name.to_lowercase();
        let entry = self.entries.get(&key);

        let explicit = match entry.and_then(|e| e.profile.as_deref()) {
            Some(id) => Some(MotionKind::parse(id).ok_or_else(|| {
                DioramaError::bind(&key, format!("unknown profile '{id}'"))
            })?),
            None => None,
        };
        let kind = explicit.or_else(|| {
            best_marker_match(
                &key,
                markers.iter().map(|(m, k)| (m.as_str(), *k)),
            )
        });

        let (Some(kind), Some(entry)) = (kind, entry) else {
            if let Some(kind) = kind {
                log::debug!(
                    "'{key}' matches {} but has no motion entry",
                    kind.name()
                );
            }
            return Ok(None);
        };

        if let Some(field) = entry.malformed.first() {
            return Err(DioramaError::bind(
                &key,
                format!("field '{field}' is not a number"),
            ));
        }
        MotionProfile::bind(kind, &key, &entry.params).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<(String, MotionKind)> {
        vec![
            ("rose".into(), MotionKind::Bob),
            ("cloak".into(), MotionKind::Drape),
        ]
    }

    const TABLE: &str = r#"{
        "Rose_Left": { "bob_amplitude": 0.03, "bob_frequency": 1.4, "bob_phase": 0.5 },
        "cloak": {
            "primary_amplitude": 0.2, "primary_frequency": 1.1,
            "secondary_amplitude": 0.1, "secondary_frequency": 0.7,
            "flutter": 0.25, "random_offset": 1.0
        },
        "helmet": { "profile": "bob", "bob_amplitude": 0.01, "bob_frequency": 1.0, "bob_phase": 0.0 },
        "rose_right": { "bob_amplitude": "big", "bob_frequency": 1.4, "bob_phase": 0.0 }
    }"#;

    #[test]
    fn keys_are_lowercased() {
        let table = MotionTable::from_json_str(TABLE).unwrap();
        assert_eq!(table.len(), 4);
        assert!(table.get("ROSE_LEFT").is_some());
    }

    #[test]
    fn marker_resolves_profile() {
        let table = MotionTable::from_json_str(TABLE).unwrap();
        let bound = table.bind("rose_left", &markers()).unwrap();
        assert_eq!(bound.map(|p| p.kind()), Some(MotionKind::Bob));
        let bound = table.bind("Cloak", &markers()).unwrap();
        assert_eq!(bound.map(|p| p.kind()), Some(MotionKind::Drape));
    }

    #[test]
    fn explicit_profile_overrides_markers() {
        let table = MotionTable::from_json_str(TABLE).unwrap();
        let bound = table.bind("helmet", &markers()).unwrap();
        assert_eq!(bound.map(|p| p.kind()), Some(MotionKind::Bob));
    }

    #[test]
    fn missing_entry_means_no_motion() {
        let table = MotionTable::from_json_str(TABLE).unwrap();
        assert_eq!(table.bind("rose_center", &markers()).unwrap(), None);
        assert_eq!(table.bind("gauntlet", &markers()).unwrap(), None);
    }

    #[test]
    fn malformed_field_fails_only_that_object() {
        let table = MotionTable::from_json_str(TABLE).unwrap();
        assert!(matches!(
            table.bind("rose_right", &markers()),
            Err(DioramaError::Bind { .. })
        ));
        assert!(table.bind("rose_left", &markers()).unwrap().is_some());
    }

    #[test]
    fn non_object_root_is_config_error() {
        assert!(matches!(
            MotionTable::from_json_str("[1, 2]"),
            Err(DioramaError::Config(_))
        ));
        assert!(matches!(
            MotionTable::from_json_str("{ not json"),
            Err(DioramaError::Config(_))
        ));
    }

    #[test]
    fn unknown_profile_is_bind_error() {
        let table =
            MotionTable::from_json_str(r#"{ "gem": { "profile": "spin" } }"#)
                .unwrap();
        assert!(matches!(
            table.bind("gem", &markers()),
            Err(DioramaError::Bind { .. })
        ));
    }

    #[test]
    fn missing_file_falls_back_to_empty() {
        let table =
            MotionTable::load_or_empty(Path::new("does/not/exist.json"));
        assert!(table.is_empty());
    }
}
