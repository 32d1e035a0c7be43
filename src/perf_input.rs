use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::perf::{Dataset, Sample, Workload};

/// Reads `threads,time_ms` rows. Other columns are ignored.
pub fn read_samples<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let samples = reader.deserialize().collect::<std::result::Result<Vec<Sample>, _>>()?;
    Ok(samples)
}

pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    let samples = read_samples(file)?;

    debug!(path = %path.display(), samples = samples.len(), "loaded samples");

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "samples".to_string());

    Ok(Dataset {
        name,
        samples,
        workload: Workload::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn reads_trimmed_rows_and_ignores_extra_columns() {
        let input = "threads, time_ms, note\n1, 5459, serial\n 2 ,3057.5,\n";
        let samples = read_samples(input.as_bytes()).unwrap();
        assert_eq!(samples, vec![Sample::new(1, 5459.0), Sample::new(2, 3057.5)]);
    }

    #[test]
    fn header_only_gives_no_samples() {
        assert!(read_samples("threads,time_ms\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn bad_number_is_a_csv_error() {
        let err = read_samples("threads,time_ms\nfour,10\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn dataset_is_named_after_the_file() {
        let mut file = tempfile::Builder::new()
            .prefix("run-a")
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(file, "threads,time_ms\n1,100\n2,55").unwrap();

        let dataset = load_csv(file.path()).unwrap();
        assert!(dataset.name.starts_with("run-a"));
        assert_eq!(dataset.samples.len(), 2);
        assert!(dataset.workload.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
