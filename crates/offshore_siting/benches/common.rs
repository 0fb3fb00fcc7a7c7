use std::time::Duration;

use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

/// Fine-step sweeps emit tens of thousands of samples per run.
pub const SWEEP_SAMPLE_SIZE: usize = 15;
pub const SWEEP_MEASUREMENT_TIME: Duration = Duration::from_secs(5);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Fewer, longer samples for the field generators.
pub fn sweep_criterion() -> Criterion {
    default_criterion()
        .sample_size(SWEEP_SAMPLE_SIZE)
        .measurement_time(SWEEP_MEASUREMENT_TIME)
}

/// Throughput in sites or grid samples processed per iteration.
pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}
