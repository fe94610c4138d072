//! Name-marker matching used to tag objects at load time.
//!
//! Objects are tagged by testing whether their lowercase name *contains* a
//! marker. When several markers match, the longest marker wins; equal
//! lengths resolve to the marker listed first.

/// Return the value paired with the best marker contained in `name`.
///
/// Both `name` and markers are compared case-insensitively.
#[must_use]
pub fn best_marker_match<'a, T, I>(name: &str, markers: I) -> Option<T>
where
    I: IntoIterator<Item = (&'a str, T)>,
{
    let name = name.to_lowercase();
    let mut best: Option<(usize, T)> = None;
    for (marker, value) in markers {
        if marker.is_empty() || !name.contains(&marker.to_lowercase()) {
            continue;
        }
        if best.as_ref().is_none_or(|(len, _)| marker.len() > *len) {
            best = Some((marker.len(), value));
        }
    }
    best.map(|(_, value)| value)
}
