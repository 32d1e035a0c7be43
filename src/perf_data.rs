use std::sync::LazyLock;

use crate::perf::{Dataset, Sample, Workload};

// 979630 lines, 88 files, 49.70 MB. Each time is the median of three compiler runs.
const COMPILER_WORKLOAD: Workload = Workload {
    lines: Some(979_630),
    bytes: Some(52_114_227),
};

pub static PERF_DATA_OPTIMIZED: LazyLock<Vec<Sample>> = LazyLock::new(|| {  vec![
Sample::new(1, 5459.0),
Sample::new(2, 3057.0),
Sample::new(4, 1802.0),
Sample::new(6, 1442.0),
Sample::new(8, 1260.0),
Sample::new(10, 1152.0),
Sample::new(12, 1146.0),
Sample::new(14, 1101.0),
Sample::new(16, 1140.0),
] });

pub static PERF_DATA_SLOW: LazyLock<Vec<Sample>> = LazyLock::new(|| {  vec![
Sample::new(1, 5644.0),
Sample::new(16, 64878.0),
] });

pub const DATASET_NAMES: [&str; 2] = ["optimized", "slow"];

pub fn embedded(name: &str) -> Option<Dataset> {
    let samples = match name {
        "optimized" => &PERF_DATA_OPTIMIZED,
        "slow" => &PERF_DATA_SLOW,
        _ => return None,
    };

    Some(Dataset {
        name: name.to_string(),
        samples: samples.to_vec(),
        workload: COMPILER_WORKLOAD,
    })
}
