//! Exam session equivalence.
//!
//! Some exam boards sit the same series in May or June depending on the year, so a
//! filter for one should find papers filed under the other.

/// Sessions considered interchangeable, keyed by canonical lowercase session name.
const SESSION_EQUIVALENTS: &[(&str, &[&str])] = &[
    ("january", &["january"]),
    ("may", &["may", "june"]),
    ("june", &["june", "may"]),
    ("october", &["october"]),
];

/// Returns the sessions interchangeable with `session`, including itself.
///
/// Lookup is case-insensitive; results are lowercase. Unknown sessions yield a
/// single-element list containing the (lowercased) input.
///
/// ```
/// use pastpapers_query::get_equivalent_sessions;
///
/// assert_eq!(get_equivalent_sessions("May"), vec!["may", "june"]);
/// assert_eq!(get_equivalent_sessions("november"), vec!["november"]);
/// ```
pub fn get_equivalent_sessions(session: &str) -> Vec<String> {
    let key = session.trim().to_lowercase();
    SESSION_EQUIVALENTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, equivalents)| equivalents.iter().map(|s| (*s).to_string()).collect())
        .unwrap_or_else(|| vec![key])
}

/// Returns true if `candidate` is `session` or one of its equivalents.
pub fn sessions_equivalent(session: &str, candidate: &str) -> bool {
    let candidate = candidate.trim().to_lowercase();
    get_equivalent_sessions(session).contains(&candidate)
}
