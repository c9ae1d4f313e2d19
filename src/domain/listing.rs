/// Fields extracted from one listing page. The three sequences are each in
/// document order but independently sized: index i of `names` is not
/// guaranteed to describe the same product as index i of `prices` or
/// `ratings`. Callers wanting per-product rows pad at their own layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub names: Vec<String>,
    pub prices: Vec<String>,
    pub ratings: Vec<String>,
}

impl ExtractionResult {
    /// True when no field matched anything. A valid outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.prices.is_empty() && self.ratings.is_empty()
    }
}
