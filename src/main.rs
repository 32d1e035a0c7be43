use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;
use tracing::{debug, info, warn, Level};

mod error;
mod perf;
mod perf_curve;
mod perf_data;
mod perf_input;
mod perf_plot;
mod perf_report;

use crate::error::{Error, Result};
use crate::perf::{Dataset, Workload};
use crate::perf_curve::ScalingCurve;
use crate::perf_plot::PlotConfig;

/// Plot compile time, speedup and efficiency against thread count
#[derive(Debug, StructOpt)]
#[structopt(name = "thread-scaling-plot")]
struct Opt {
    /// CSV file with `threads,time_ms` columns (overrides --dataset)
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Embedded dataset to plot: optimized or slow
    #[structopt(short, long, default_value = "optimized")]
    dataset: String,

    /// SVG file to write
    #[structopt(short, long, default_value = "scaling.svg", parse(from_os_str))]
    output: PathBuf,

    /// Caption of the time chart
    #[structopt(long, default_value = "Compile time")]
    title: String,

    #[structopt(long, default_value = "1000")]
    width: u32,

    #[structopt(long, default_value = "900")]
    height: u32,

    /// Source lines compiled per run, for lines/s
    #[structopt(long)]
    lines: Option<u64>,

    /// Source bytes compiled per run, for MB/s
    #[structopt(long)]
    bytes: Option<u64>,

    /// Print the report without writing a chart
    #[structopt(long)]
    no_plot: bool,

    /// trace, debug, info, warn or error
    #[structopt(long, default_value = "warn")]
    log_level: Level,
}

impl Opt {
    fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            title: self.title.clone(),
            path: self.output.clone(),
            width: self.width,
            height: self.height,
        }
    }

    fn dataset(&self) -> Result<Dataset> {
        let overrides = Workload {
            lines: self.lines,
            bytes: self.bytes,
        };

        let mut dataset = match &self.input {
            Some(path) => perf_input::load_csv(path)?,
            None => perf_data::embedded(&self.dataset)
                .ok_or_else(|| Error::UnknownDataset(self.dataset.clone()))?,
        };
        dataset.workload = overrides.or(dataset.workload);
        Ok(dataset)
    }
}

fn main() {
    let opt = Opt::from_args();

    tracing_subscriber::fmt()
        .with_max_level(opt.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&opt) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<()> {
    debug!(?opt, "parsed arguments");

    let config = opt.plot_config();
    if !opt.no_plot {
        perf_plot::check_output_path(&config.path)?;
    }

    let dataset = opt.dataset()?;
    info!(dataset = %dataset.name, samples = dataset.samples.len(), "building curve");

    if dataset.samples.first().is_some_and(|s| s.thread_count != 1) {
        warn!("first sample is not single-threaded; speedup is relative to it");
    }

    if dataset.workload.is_empty() {
        debug!("workload size unknown, throughput columns omitted");
    }

    let curve = ScalingCurve::new(dataset.samples.clone())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    perf_report::write_report(&mut out, &dataset, &curve)?;
    out.flush()?;

    if !opt.no_plot {
        perf_plot::render(&curve, &config)?;
        println!("\nChart written to {}", config.path.display());
    }

    Ok(())
}
