//! Result record for min/max-with-position queries.

/// A component value together with its position in the tuple.
///
/// Produced fresh by each `min_component`/`max_component` query.
///
/// # Example
///
/// ```rust
/// use fixtuple_core::IndexValuePair;
///
/// let p = IndexValuePair::new(2.5, 1);
/// assert_eq!(p.value, 2.5);
/// assert_eq!(p.index, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexValuePair {
    /// Component value
    pub value: f32,
    /// Component index
    pub index: usize,
}

impl IndexValuePair {
    /// Creates a new pair.
    #[inline]
    pub const fn new(value: f32, index: usize) -> Self {
        Self { value, index }
    }
}

impl From<IndexValuePair> for (usize, f32) {
    #[inline]
    fn from(p: IndexValuePair) -> (usize, f32) {
        (p.index, p.value)
    }
}
