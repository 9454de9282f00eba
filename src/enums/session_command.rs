use std::path::PathBuf;
use crate::errors::{SdgError, SdgResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Upload { year: i32, path: PathBuf },
    View { year: Option<i32> },
    Years,
    Help,
    Quit,
}

impl SessionCommand {
    pub const USAGE: &'static str = "upload <year> <path> | view [year] | years | help | quit";

    pub fn parse(input: &str) -> SdgResult<Self> {
        let mut parts = input.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_lowercase();

        match verb.as_str() {
            "upload" | "u" => {
                let year = Self::parse_year(parts.next())?;
                let path: Vec<&str> = parts.collect();
                if path.is_empty() {
                    return Err(SdgError::input_error(input, "upload <year> <path>", "Name the report file to upload"));
                }
                Ok(Self::Upload { year, path: PathBuf::from(path.join(" ")) })
            }
            "view" | "v" => match parts.next() {
                Some(year) => Ok(Self::View { year: Some(Self::parse_year(Some(year))?) }),
                None => Ok(Self::View { year: None }),
            },
            "years" | "y" => Ok(Self::Years),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(SdgError::input_error(input, "a session command", Self::USAGE)),
        }
    }

    fn parse_year(value: Option<&str>) -> SdgResult<i32> {
        let value = value.unwrap_or_default();
        value
            .parse::<i32>()
            .map_err(|_| SdgError::input_error(value, "a four digit year", "For example: upload 2024 report.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upload_with_spaces_in_path() {
        assert_eq!(
            SessionCommand::parse("upload 2023 my reports/2023.txt").unwrap(),
            SessionCommand::Upload { year: 2023, path: PathBuf::from("my reports/2023.txt") }
        );
    }

    #[test]
    fn view_year_is_optional() {
        assert_eq!(SessionCommand::parse("view").unwrap(), SessionCommand::View { year: None });
        assert_eq!(SessionCommand::parse("v 2022").unwrap(), SessionCommand::View { year: Some(2022) });
    }

    #[test]
    fn rejects_unknown_and_incomplete_commands() {
        assert!(SessionCommand::parse("delete 2022").is_err());
        assert!(SessionCommand::parse("upload 2022").is_err());
        assert!(SessionCommand::parse("upload soon report.txt").is_err());
    }
}
