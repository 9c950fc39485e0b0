/// The cost is sampled once every this many iterations, starting at iteration 0.
pub const COST_SAMPLING_INTERVAL: usize = 100;

/// The costs sampled during a training run, in order. Append only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostHistory {
    costs: Vec<f32>,
}

impl CostHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, cost: f32) {
        self.costs.push(cost);
    }

    pub fn costs(&self) -> &[f32] {
        &self.costs
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn first(&self) -> Option<f32> {
        self.costs.first().copied()
    }

    pub fn last(&self) -> Option<f32> {
        self.costs.last().copied()
    }

    /// Pairs each sampled cost with the iteration it was computed at.
    pub fn points(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| (i * COST_SAMPLING_INTERVAL, cost))
    }
}
