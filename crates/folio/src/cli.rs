//! Command-line configuration and the non-interactive JSON report.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;

use crate::domain::entry::{Entry, Snapshot};
use crate::domain::location::Location;

/// Browse your Downloads, Desktop, and Documents folders.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Location shown at startup.
    #[arg(long, value_enum, default_value_t = Location::Downloads)]
    pub location: Location,

    /// Print one snapshot of the location as JSON and exit.
    #[arg(long)]
    pub json: bool,

    /// Append logs to this file. Logging is off when omitted.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,
}

#[derive(Serialize)]
struct SnapshotReport<'a> {
    label: &'static str,
    location: Location,
    #[serde(flatten)]
    outcome: ReportOutcome<'a>,
    path: Option<&'a Path>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ReportOutcome<'a> {
    Entries { entries: &'a [Entry] },
    Error { error: &'static str, message: String },
}

/// Writes `snapshot` for `location` as one JSON document followed by a
/// newline.
///
/// # Errors
/// Returns an error when serialization or writing to `writer` fails.
pub fn write_json_report<W: Write>(
    writer: &mut W,
    location: Location,
    path: Option<&Path>,
    snapshot: &Snapshot,
) -> io::Result<()> {
    let outcome = match snapshot {
        Ok(entries) => ReportOutcome::Entries { entries },
        Err(error) => ReportOutcome::Error {
            error: error.kind(),
            message: error.to_string(),
        },
    };
    let report = SnapshotReport {
        label: location.label(),
        location,
        outcome,
        path,
    };

    serde_json::to_writer_pretty(&mut *writer, &report).map_err(io::Error::other)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access_error::AccessError;

    fn report_value(location: Location, path: Option<&Path>, snapshot: &Snapshot) -> serde_json::Value {
        let mut output = Vec::new();
        write_json_report(&mut output, location, path, snapshot).expect("failed to write report");

        serde_json::from_slice(&output).expect("report should be valid JSON")
    }

    #[test]
    fn test_args_defaults() {
        // Arrange & Act
        let args = Args::try_parse_from(["folio"]).expect("failed to parse args");

        // Assert
        assert_eq!(args.location, Location::Downloads);
        assert!(!args.json);
        assert_eq!(args.log_file, None);
        assert_eq!(args.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_args_parse_all_flags() {
        // Arrange & Act
        let args = Args::try_parse_from([
            "folio",
            "--location",
            "documents",
            "--json",
            "--log-file",
            "/tmp/folio.log",
            "--log-level",
            "debug",
        ])
        .expect("failed to parse args");

        // Assert
        assert_eq!(args.location, Location::Documents);
        assert!(args.json);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/folio.log")));
        assert_eq!(args.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_args_reject_unknown_location() {
        // Arrange & Act
        let result = Args::try_parse_from(["folio", "--location", "music"]);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_write_json_report_success() {
        // Arrange
        let snapshot: Snapshot = Ok(vec![Entry::directory("Old", None), Entry::file("a.txt", 4, None)]);

        // Act
        let value = report_value(Location::Desktop, Some(Path::new("/home/me/Desktop")), &snapshot);

        // Assert
        assert_eq!(value["location"], "desktop");
        assert_eq!(value["label"], "Desktop");
        assert_eq!(value["path"], "/home/me/Desktop");
        assert_eq!(value["entries"][0]["name"], "Old");
        assert_eq!(value["entries"][1]["size_bytes"], 4);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_write_json_report_error() {
        // Arrange
        let snapshot: Snapshot = Err(AccessError::InvalidLocation);

        // Act
        let value = report_value(Location::Documents, None, &snapshot);

        // Assert
        assert_eq!(value["error"], "invalid_location");
        assert_eq!(value["message"], "This location is unavailable.");
        assert_eq!(value["path"], serde_json::Value::Null);
        assert!(value.get("entries").is_none());
    }
}
