/// How the edges of a complete vertex mapping are checked against the target graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeMatching {
    /// Every source edge must have *some* target edge with the same endpoints after mapping.
    /// Target edges may be reused, so parallel edges and loops are only counted through the
    /// edge-count precondition.
    #[default]
    Existential,
    /// Every source edge consumes a distinct target edge. Acceptance is then a true multigraph
    /// isomorphism, and degrees are used to prune the search.
    Multiset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub matching: EdgeMatching,
}

impl SearchOptions {
    pub fn with_matching(mut self, matching: EdgeMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn multiset() -> Self {
        Self::default().with_matching(EdgeMatching::Multiset)
    }
}
