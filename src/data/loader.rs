//! CSV Data Loader Module
//! Handles CSV loading with Polars and conversion to typed player records.

use crate::data::record::{PlayerRecord, PlayerTable, SkillSet, SKILL_NAMES};
use log::{debug, info, warn};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Schema inference is disabled: every column is read as text and the
/// needed ones are converted in `to_table`, so a cell whose type differs
/// from the rows above it cannot fail the load.
const INFER_SCHEMA_ROWS: usize = 0;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Data file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("No data loaded")]
    NoData,
}

/// Reproducible row sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    pub size: usize,
    pub seed: u64,
}

/// How the CSV is trimmed after reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Columns excluded after reading; names not in the file are ignored.
    pub drop_columns: Vec<String>,
    pub sample: Option<SampleOptions>,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a CSV file, then drop and sample according to `options`.
    pub fn load_csv(
        &mut self,
        file_path: &Path,
        options: &LoadOptions,
    ) -> Result<&DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }

        let mut df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .finish()?
            .collect()?;
        debug!(
            "Read {} rows x {} columns from {}",
            df.height(),
            df.width(),
            file_path.display()
        );

        if !options.drop_columns.is_empty() {
            df = df.drop_many(options.drop_columns.iter().map(|c| c.as_str()));
        }

        if let Some(sample) = options.sample {
            let n = sample.size.min(df.height());
            df = df.sample_n_literal(n, false, false, Some(sample.seed))?;
            debug!("Sampled {} rows with seed {}", n, sample.seed);
        }

        self.file_path = Some(file_path.to_path_buf());
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Convert the loaded DataFrame into player records, in row order.
    ///
    /// Rows without a `short_name` are kept; a null or unparsable `overall`
    /// reads as 0.
    pub fn to_table(&self) -> Result<PlayerTable, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;

        let names = string_column(df, "short_name")?;
        let overall = int_column(df, "overall")?;
        let age = int_column(df, "age")?;
        let nationality = string_column(df, "nationality_name")?;
        let club = string_column(df, "club_name")?;
        let face = string_column(df, "player_face_url")?;
        let skills = SKILL_NAMES
            .iter()
            .map(|name| float_column(df, name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rows = Vec::with_capacity(df.height());

        for i in 0..df.height() {
            let mut values = [None; 6];
            for (slot, column) in values.iter_mut().zip(skills.iter()) {
                *slot = column[i];
            }

            rows.push(PlayerRecord {
                short_name: names[i].clone(),
                overall: overall[i].and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
                age: age[i].and_then(|v| u32::try_from(v).ok()),
                nationality_name: nationality[i].clone(),
                club_name: club[i].clone(),
                player_face_url: face[i].clone(),
                skills: SkillSet::new(values),
            });
        }

        let unnamed = rows.iter().filter(|p| p.short_name.is_none()).count();
        if unnamed > 0 {
            warn!("{} rows have no short_name and will not appear in search", unnamed);
        }
        info!("Built player table with {} rows", rows.len());

        Ok(PlayerTable::from_records(rows))
    }
}

fn required_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, LoaderError> {
    df.column(name)
        .map_err(|_| LoaderError::MissingColumn(name.to_string()))
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoaderError> {
    let casted = required_column(df, name)?.cast(&DataType::String)?;
    let ca = casted.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
}

/// Whole numbers, read through `f64` so "91.0" parses; fractions truncate.
fn int_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, LoaderError> {
    Ok(float_column(df, name)?
        .into_iter()
        .map(|v| v.filter(|f| f.is_finite()).map(|f| f as i64))
        .collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, LoaderError> {
    let casted = required_column(df, name)?.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    Ok(ca.into_iter().collect())
}
