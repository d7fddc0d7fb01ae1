use std::time::Duration;

/// Metrics tracked for each operation in the session.
#[derive(Clone, Debug, Default)]
pub(crate) struct OperationMetrics {
    pub(crate) total_wall_time: Duration,
    pub(crate) total_iterations: u64,
}

impl OperationMetrics {
    /// Records one span's worth of measurement: the elapsed wall-clock time
    /// of the whole span and the number of iterations it covered.
    pub(crate) fn record_span(&mut self, elapsed: Duration, iterations: u64) {
        self.total_wall_time = self.total_wall_time.checked_add(elapsed).expect(
            "wall-clock time accumulation overflows Duration - this indicates an unrealistic scenario",
        );

        self.total_iterations = self.total_iterations.checked_add(iterations).expect(
            "total iterations count overflows u64 - this indicates an unrealistic scenario",
        );
    }
}
