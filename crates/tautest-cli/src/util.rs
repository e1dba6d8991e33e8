use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use tautest_frame::dataset::Dataset;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

fn read_json_stdin<T>(file_kind: &str) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let mut buf = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut buf)
        .with_context(|| format!("Failed to read {file_kind} from stdin"))?;
    serde_json::from_str(&buf)
        .with_context(|| format!("Failed to parse {file_kind} JSON from stdin"))
}

/// Read a dataset from a JSON file, or from stdin when no path (or `-`) is given
///
/// # Errors
///
/// Returns error if the input cannot be read or is not a list, series, table, or rows
pub fn read_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    match path {
        Some(path) if path != Path::new("-") => read_json_file("dataset", path),
        _ => read_json_stdin("dataset"),
    }
}
