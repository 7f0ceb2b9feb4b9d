//! Set-overlap scoring.

use concord_types::Token;
use rustc_hash::FxHashSet;

/// Jaccard index of two token sets: `|a ∩ b| / |a ∪ b|`.
///
/// Symmetric and bounded to `[0.0, 1.0]`. Two empty sets have no
/// evidence of similarity, so the empty-union case is defined as 0.0
/// rather than a division by zero.
#[inline]
pub(crate) fn jaccard(a: &FxHashSet<Token>, b: &FxHashSet<Token>) -> f32 {
    // Iterate the smaller set against the larger one.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let intersection = small.iter().filter(|token| large.contains(*token)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f32 / union as f32
    }
}
