//! Temporal filtering of per-frame results.
//!
//! Classification itself is stateless. The filters here are meant to be owned by whatever drives
//! the per-frame loop, one instance per video stream.

mod debounce;

pub use debounce::Debounce;

/// A filter for values of type `V`.
pub trait Filter<V> {
    /// Adds a new value to the filter, returning the filtered value.
    fn push(&mut self, value: V) -> V;

    /// Resets the accumulated history and state of the filter to be identical to the state just
    /// after construction.
    fn reset(&mut self);
}
