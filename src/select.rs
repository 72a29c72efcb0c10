//! Candidate selection
//!
//! Queries every enabled source in order, concatenates the results, and
//! reduces them to the final candidate set. The set handed to rendering is
//! never empty: zero candidates is a `NoMatch` failure, not an output.

use crate::domain::{GemDependency, GemSpec};
use crate::error::AppError;
use crate::source::SpecSource;

/// Resolves `dep` against `sources`, in the order given.
///
/// With `all` set, returns every match in source order (each source defines
/// its own internal order; no re-sort happens across sources). Otherwise
/// the single highest-versioned record wins; on a version tie the earliest
/// occurrence is kept, so a local record beats an equal remote one.
pub async fn select(
    dep: &GemDependency,
    sources: &[Box<dyn SpecSource>],
    all: bool,
) -> Result<Vec<GemSpec>, AppError> {
    let mut candidates = Vec::new();
    for source in sources {
        candidates.extend(source.fetch(dep).await?);
    }

    if candidates.is_empty() {
        return Err(AppError::NoMatch {
            dependency: dep.clone(),
        });
    }

    if !all {
        let winner = candidates.into_iter().reduce(|best, candidate| {
            if candidate.version > best.version {
                candidate
            } else {
                best
            }
        });
        return Ok(winner.into_iter().collect());
    }

    Ok(candidates)
}
