use crate::error::{Error, Result};
use crate::perf::Sample;

/// Speedup of each sample relative to the first one: `T1 / Tn`.
pub fn compute_speedup(samples: &[Sample]) -> Vec<f64> {
    let Some(baseline) = samples.first() else {
        return Vec::new();
    };

    samples
        .iter()
        .map(|sample| baseline.elapsed_ms / sample.elapsed_ms)
        .collect()
}

/// Speedup per thread: `S / N`.
pub fn compute_efficiency(speedup: &[f64], samples: &[Sample]) -> Vec<f64> {
    speedup
        .iter()
        .zip(samples)
        .map(|(s, sample)| s / sample.thread_count as f64)
        .collect()
}

pub fn validate(samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        return Err(Error::NoSamples);
    }

    for (index, sample) in samples.iter().enumerate() {
        let time_ok = sample.elapsed_ms.is_finite() && sample.elapsed_ms > 0.0;
        if sample.thread_count == 0 || !time_ok {
            return Err(Error::MalformedSample {
                index,
                thread_count: sample.thread_count,
                elapsed_ms: sample.elapsed_ms,
            });
        }
    }

    for (index, pair) in samples.windows(2).enumerate() {
        if pair[1].thread_count <= pair[0].thread_count {
            return Err(Error::Unsorted {
                index: index + 1,
                previous: pair[0].thread_count,
                current: pair[1].thread_count,
            });
        }
    }

    Ok(())
}

/// Validated samples with their derived series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingCurve {
    samples: Vec<Sample>,
    speedup: Vec<f64>,
    efficiency: Vec<f64>,
}

impl ScalingCurve {
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        validate(&samples)?;

        let speedup = compute_speedup(&samples);
        let efficiency = compute_efficiency(&speedup, &samples);

        Ok(Self {
            samples,
            speedup,
            efficiency,
        })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn speedup(&self) -> &[f64] {
        &self.speedup
    }

    pub fn efficiency(&self) -> &[f64] {
        &self.efficiency
    }

    pub fn times(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.samples.iter().map(|s| (s.thread_count, s.elapsed_ms))
    }

    pub fn speedup_points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.thread_counts().zip(self.speedup.iter().copied())
    }

    pub fn efficiency_points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.thread_counts().zip(self.efficiency.iter().copied())
    }

    fn thread_counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.samples.iter().map(|s| s.thread_count)
    }
}
