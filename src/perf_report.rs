use std::io::{self, Write};

use thousands::Separable;

use crate::perf::{Dataset, Workload};
use crate::perf_curve::ScalingCurve;

const MIB: f64 = 1024.0 * 1024.0;

/// Prints one row per sample: time, speedup, efficiency and throughput when the workload is known.
pub fn write_report<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    curve: &ScalingCurve,
) -> io::Result<()> {
    let workload = dataset.workload;

    writeln!(out, "Scaling of '{}' ({} samples)", dataset.name, curve.samples().len())?;
    if let Some(lines) = workload.lines {
        writeln!(out, "Workload: {} lines", lines.separate_with_commas())?;
    }
    writeln!(out)?;

    write!(out, "{:>7} {:>12} {:>9} {:>11}", "Threads", "Time (ms)", "Speedup", "Efficiency")?;
    if workload.lines.is_some() {
        write!(out, " {:>12}", "Lines/s")?;
    }
    if workload.bytes.is_some() {
        write!(out, " {:>13}", "Throughput")?;
    }
    writeln!(out)?;
    writeln!(out, "{:-<1$}", "", rule_width(workload))?;

    let rows = curve
        .samples()
        .iter()
        .zip(curve.speedup())
        .zip(curve.efficiency());

    for ((sample, speedup), efficiency) in rows {
        let seconds = sample.elapsed_ms / 1000.0;

        write!(
            out,
            "{:>7} {:>12} {:>8.2}x {:>10.1}%",
            sample.thread_count,
            format_count(sample.elapsed_ms),
            speedup,
            efficiency * 100.0,
        )?;
        if let Some(lines) = workload.lines {
            write!(out, " {:>12}", format_count(lines as f64 / seconds))?;
        }
        if let Some(bytes) = workload.bytes {
            write!(out, " {:>13}", format_throughput(bytes as f64 / seconds))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn rule_width(workload: Workload) -> usize {
    let mut width = 42;
    if workload.lines.is_some() {
        width += 13;
    }
    if workload.bytes.is_some() {
        width += 14;
    }
    width
}

/// Whole numbers with separators; small values keep their significant digits.
pub fn format_count(value: f64) -> String {
    if value >= 1.0 || value == 0.0 {
        value.round().separate_with_commas()
    } else if value >= 0.001 {
        format!("{:.3}", value)
    } else {
        format!("{:.2e}", value)
    }
}

pub fn format_throughput(bytes_per_second: f64) -> String {
    if bytes_per_second >= MIB {
        format!("{:.2} MB/s", bytes_per_second / MIB)
    } else {
        format!("{:.2} KB/s", bytes_per_second / 1024.0)
    }
}
