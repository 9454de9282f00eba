use std::path::PathBuf;
use std::str::FromStr;

/// A `YEAR=PATH` pair naming the report file uploaded for a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub year: i32,
    pub path: PathBuf,
}

impl FromStr for Upload {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, path) = value
            .split_once('=')
            .ok_or_else(|| format!("expected YEAR=PATH, got '{value}'"))?;
        let year = year
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid year '{}': {e}", year.trim()))?;
        let path = path.trim();
        if path.is_empty() {
            return Err(format!("missing file path for {year}"));
        }
        Ok(Self { year, path: PathBuf::from(path) })
    }
}
