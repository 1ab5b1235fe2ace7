//! Snapshot reducer trait for editable domain models.

/// Pure state transition from one snapshot to the next.
///
/// - **Input**: the current snapshot (borrowed, never mutated) and one edit.
/// - **Output**: the next snapshot, with every derived field already caught up.
///
/// Implementations must not perform IO or side effects and must be
/// deterministic: the same snapshot and edit always yield the same result.
/// Edits that a model refuses (e.g. a guarded removal) return an unchanged
/// copy rather than an error.
pub trait Reducer: Clone {
    type Edit: Clone + core::fmt::Debug;

    /// Apply a single edit.
    fn reduce(&self, edit: &Self::Edit) -> Self;

    /// Apply edits strictly in the order given.
    fn reduce_all<'a, I>(&self, edits: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Edit>,
        Self::Edit: 'a,
    {
        edits
            .into_iter()
            .fold(self.clone(), |state, edit| state.reduce(edit))
    }
}
