use serde::Deserialize;

/// One median compile time measured at a given thread count.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    #[serde(rename = "threads")]
    pub thread_count: u32,
    #[serde(rename = "time_ms")]
    pub elapsed_ms: f64,
}

impl Sample {
    pub const fn new(thread_count: u32, elapsed_ms: f64) -> Self {
        Self {
            thread_count,
            elapsed_ms,
        }
    }
}

/// Size of the input compiled by a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Workload {
    pub lines: Option<u64>,
    pub bytes: Option<u64>,
}

impl Workload {
    pub fn is_empty(&self) -> bool {
        self.lines.is_none() && self.bytes.is_none()
    }

    /// Values given on the command line win over the dataset's own.
    pub fn or(self, fallback: Workload) -> Workload {
        Workload {
            lines: self.lines.or(fallback.lines),
            bytes: self.bytes.or(fallback.bytes),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub samples: Vec<Sample>,
    pub workload: Workload,
}
