use std::{fmt, fs, num::ParseFloatError, ops::Range, path::PathBuf, str::FromStr};

use csv::StringRecord;
use miette::Diagnostic;
use thiserror::Error;

/// One day of weather measurements, as read from the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    // Raw `YYYY-MM-DD` label, only ever used for prefix matching
    pub date: String,
    pub temperature: f32,
    pub humidity: f32,
    pub precipitation: f32,
}

/// All observations of a file, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    pub observations: Vec<Observation>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("could not read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected 4 fields, found {found}")]
    FieldCount { line: u64, found: usize },
    #[error("line {line}: bad {column}: `{value}`")]
    BadNumber {
        line: u64,
        column: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

impl Journal {
    /// Reads a whole CSV file into a journal.
    /// The first line is assumed to be the header and is not looked at.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| LoadError::Read { path, source })?;
        Ok(content.parse()?)
    }

    /// Mean temperature over the days whose date starts with `month`
    /// (e.g. `"2025-02"`). `NaN` when no day matches.
    pub fn average_temperature_for_month(&self, month: &str) -> f32 {
        let temperatures: Vec<f32> = self
            .observations
            .iter()
            .filter(|observation| observation.date.starts_with(month))
            .map(|observation| observation.temperature)
            .collect();

        if temperatures.is_empty() {
            f32::NAN
        } else {
            temperatures.iter().sum::<f32>() / temperatures.len() as f32
        }
    }

    /// Number of days with any precipitation at all.
    pub fn rainy_days(&self) -> usize {
        self.observations
            .iter()
            .filter(|observation| observation.precipitation > 0.0)
            .count()
    }

    /// Days strictly above `threshold`, in file order.
    pub fn days_above(&self, threshold: f32) -> Vec<&Observation> {
        self.observations
            .iter()
            .filter(|observation| observation.temperature > threshold)
            .collect()
    }

    pub fn temperature_range(&self) -> Range<f32> {
        self.observations
            .iter()
            .map(|observation| observation.temperature)
            .min_by(|left, right| left.total_cmp(right))
            .unwrap()
            ..self
                .observations
                .iter()
                .map(|observation| observation.temperature)
                .max_by(|left, right| left.total_cmp(right))
                .unwrap()
    }
}

impl FromStr for Journal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // flexible so that ragged rows reach our own field count check
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());

        let mut observations = Vec::new();
        for record in reader.records() {
            observations.push(Observation::parse(&record?)?);
        }

        Ok(Self { observations })
    }
}

impl Observation {
    fn parse(record: &StringRecord) -> Result<Self, ParseError> {
        let line = record.position().map_or(0, |position| position.line());

        if record.len() != 4 {
            return Err(ParseError::FieldCount {
                line,
                found: record.len(),
            });
        }

        Ok(Self {
            date: record[0].to_string(),
            temperature: parse_number(line, "temperature", &record[1])?,
            humidity: parse_number(line, "humidity", &record[2])?,
            precipitation: parse_number(line, "precipitation", &record[3])?,
        })
    }
}

fn parse_number(line: u64, column: &'static str, value: &str) -> Result<f32, ParseError> {
    value.parse().map_err(|source| ParseError::BadNumber {
        line,
        column,
        value: value.to_string(),
        source,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureCategory {
    Hot,
    Warm,
    Cold,
}

impl TemperatureCategory {
    /// Buckets a temperature by its decade, truncating toward zero like the
    /// integer division does. 30 to 49 is hot, 20 to 29 warm, the rest
    /// (negatives and 50+ included) cold.
    pub fn of(temperature: f32) -> Self {
        match temperature as i32 / 10 {
            3 | 4 => Self::Hot,
            2 => Self::Warm,
            _ => Self::Cold,
        }
    }
}

impl fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hot => write!(f, "Hot"),
            Self::Warm => write!(f, "Warm"),
            Self::Cold => write!(f, "Cold"),
        }
    }
}
