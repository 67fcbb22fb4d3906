/// One commodity's contribution to a flow step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepValue<A> {
    /// The commodity's display attribute (its color, in the viewer)
    pub label: A,
    /// The commodity's flow rate over the step
    pub value: f64,
}

/// A maximal time interval over which every commodity's flow rate on an
/// edge is constant.
///
/// As produced by [`calc_outflow_steps`](crate::calc_outflow_steps), `start`
/// and `end` are absolute times and consecutive steps tile the merged
/// breakpoint range with no gaps or overlaps. After splitting, in-transit
/// steps carry offsets relative to the query time within `[0, transit_time]`
/// and queue steps carry negative queue positions.
///
/// The per-commodity values appear in the iteration order of the source
/// outflow map, so they are deterministic across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowStep<A> {
    /// The start of the interval
    pub start: f64,
    /// The end of the interval
    pub end: f64,
    /// One entry per commodity, in source map order
    pub values: Vec<StepValue<A>>,
}

impl<A> FlowStep<A> {
    /// The combined rate of all commodities over this step.
    pub fn total_rate(&self) -> f64 {
        self.values.iter().map(|entry| entry.value).sum()
    }
}

/// The two disjoint interval sets a snapshot of an edge decomposes into.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSteps<A> {
    /// Flow currently travelling across the edge, as offsets relative to
    /// the query time, clipped to `[0, transit_time]`
    pub in_edge_steps: Vec<FlowStep<A>>,
    /// Flow currently waiting in the edge's queue, as negative positions
    /// ordered outward from the edge entry at 0
    pub queue_steps: Vec<FlowStep<A>>,
}

impl<A> Default for SplitSteps<A> {
    fn default() -> Self {
        Self {
            in_edge_steps: Vec::new(),
            queue_steps: Vec::new(),
        }
    }
}
