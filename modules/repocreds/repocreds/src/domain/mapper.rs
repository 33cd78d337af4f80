//! Decision table from (policy decision, store outcome) to [`LookupOutcome`].

use super::outcome::LookupOutcome;
use super::resolver::ResolveOutcome;

/// Classify a lookup.
///
/// | allowed | outcome          | result             |
/// |---------|------------------|--------------------|
/// | false   | any              | `PermissionDenied` |
/// | true    | `Found(r)`       | `Found(r)`         |
/// | true    | `Absent`         | `NotFound { url }` |
/// | true    | `Failed(_)`      | `PermissionDenied` |
/// | true    | `None`           | `PermissionDenied` |
///
/// A failed store reads as a denial so that a caller cannot tell a broken
/// backend apart from missing rights. An allowed lookup with no outcome is
/// treated the same way.
#[must_use]
pub fn classify(allowed: bool, outcome: Option<ResolveOutcome>, url: &str) -> LookupOutcome {
    if !allowed {
        return LookupOutcome::PermissionDenied;
    }

    match outcome {
        Some(ResolveOutcome::Found(record)) => LookupOutcome::Found(record),
        Some(ResolveOutcome::Absent) => LookupOutcome::NotFound {
            url: url.to_owned(),
        },
        Some(ResolveOutcome::Failed(_)) | None => LookupOutcome::PermissionDenied,
    }
}
