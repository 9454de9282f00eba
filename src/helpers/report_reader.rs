use std::path::Path;
use crate::errors::{SdgError, SdgResult};

pub struct ReportReader;

impl ReportReader {
    pub async fn read_lines(path: &Path) -> SdgResult<Vec<String>> {
        let name = path.display().to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| SdgError::file_error(&name, "read report", &e.to_string()))?;
        Self::decode_lines(bytes, &name)
    }

    /// Decodes an uploaded report as UTF-8 and splits it into lines.
    pub fn decode_lines(bytes: Vec<u8>, source_name: &str) -> SdgResult<Vec<String>> {
        let content = String::from_utf8(bytes)
            .map_err(|e| SdgError::decode_error(source_name, &e.to_string()))?;
        Ok(Self::split_lines(&content))
    }

    /// Splits on `\n`, `\r\n` and a bare `\r`. A trailing terminator adds no empty line.
    fn split_lines(content: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut rest = content;
        while !rest.is_empty() {
            let Some(end) = rest.find(['\r', '\n']) else {
                lines.push(rest.to_string());
                break;
            };
            lines.push(rest[..end].to_string());
            let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[end + terminator..];
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_unix_and_windows_line_endings() {
        let lines = ReportReader::decode_lines(b"first\r\nsecond\n\nthird".to_vec(), "report.txt").unwrap();
        assert_eq!(lines, vec!["first", "second", "", "third"]);

        let lines = ReportReader::decode_lines(b"first\rsecond\rthird\r".to_vec(), "report.txt").unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);

        let lines = ReportReader::decode_lines(b"a\r\rb\n\r\nc\n".to_vec(), "report.txt").unwrap();
        assert_eq!(lines, vec!["a", "", "b", "", "c"]);
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let error = ReportReader::decode_lines(vec![0x66, 0xff, 0xfe], "report.txt").unwrap_err();
        assert!(matches!(error, SdgError::DecodeError { .. }));
    }
}
