//! Helpers for rendering command output.

use std::io::Write;

use eyre::{Context, Result};

use crate::check::{CheckStatus, FileCheck};

pub(crate) fn write_check(writer: &mut dyn Write, check: &FileCheck) -> Result<()> {
    let path = check.path.display();
    let written = match (check.status, &check.feature) {
        (CheckStatus::Invalid, _) | (_, None) => writeln!(
            writer,
            "{path}: invalid: {}",
            check.message.as_deref().unwrap_or("unknown error")
        ),
        (status, Some(feature)) => {
            let count = feature.scenarios().len();
            write!(writer, "{path}: {}, {count} scenario(s)", status.label())?;
            if !feature.tags().is_empty() {
                let tags: Vec<_> = feature.tags().iter().map(|t| format!("@{t}")).collect();
                write!(writer, " [{}]", tags.join(" "))?;
            }
            match (status, &check.message) {
                (CheckStatus::Incomplete, Some(message)) => writeln!(writer, ": {message}"),
                _ => writeln!(writer),
            }
        }
    };
    written.wrap_err("failed to write check result")
}

pub(crate) fn write_check_summary(writer: &mut dyn Write, checks: &[FileCheck]) -> Result<()> {
    let count = |status: CheckStatus| checks.iter().filter(|c| c.status == status).count();
    writeln!(
        writer,
        "{} file(s) checked: {} ok, {} incomplete, {} invalid",
        checks.len(),
        count(CheckStatus::Ok),
        count(CheckStatus::Incomplete),
        count(CheckStatus::Invalid),
    )
    .wrap_err("failed to write check summary")
}

pub(crate) fn write_checks_json(writer: &mut dyn Write, checks: &[FileCheck]) -> Result<()> {
    serde_json::to_writer(&mut *writer, checks)
        .wrap_err("failed to serialize check results to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}
