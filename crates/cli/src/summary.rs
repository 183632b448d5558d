//! Run summary output.

use anyhow::{Context, Result};
use router::RunReport;
use serde::Serialize;

/// Run summary for JSON output
#[derive(Debug, Serialize)]
struct RunSummary {
    inputs: Vec<String>,
    lines_read: u64,
    directives: u64,
    lines_routed: u64,
    lines_discarded: u64,
    bytes_written: u64,
    destinations: Vec<String>,
}

impl From<&RunReport> for RunSummary {
    fn from(report: &RunReport) -> Self {
        Self {
            inputs: report
                .inputs
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            lines_read: report.lines_read,
            directives: report.router.directives,
            lines_routed: report.router.lines_routed,
            lines_discarded: report.router.lines_discarded,
            bytes_written: report.router.bytes_written,
            destinations: report
                .destinations
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

/// Print the summary of a successful run
pub fn print_summary(report: &RunReport, json: bool) -> Result<()> {
    let summary = RunSummary::from(report);
    if json {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize run summary")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&summary));
    }
    Ok(())
}

fn render_text(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Inputs ({}):\n", summary.inputs.len()));
    for input in &summary.inputs {
        out.push_str(&format!("  - {}\n", input));
    }
    out.push_str(&format!("Outputs ({}):\n", summary.destinations.len()));
    for dest in &summary.destinations {
        out.push_str(&format!("  - {}\n", dest));
    }
    out.push_str(&format!("Lines read: {}\n", summary.lines_read));
    out.push_str(&format!("Directives: {}\n", summary.directives));
    out.push_str(&format!("Lines routed: {}\n", summary.lines_routed));
    out.push_str(&format!("Lines discarded: {}\n", summary.lines_discarded));
    out.push_str(&format!("Bytes written: {}\n", summary.bytes_written));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use router::RouterMetrics;
    use std::path::PathBuf;

    fn report() -> RunReport {
        RunReport {
            inputs: vec![PathBuf::from("notes.txt")],
            lines_read: 7,
            destinations: vec!["/tmp/out1".into(), "/tmp/out2".into()],
            router: RouterMetrics {
                lines_routed: 3,
                lines_discarded: 1,
                directives: 3,
                destinations_opened: 2,
                bytes_written: 82,
            },
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&RunSummary::from(&report()));
        assert!(text.contains("Inputs (1):\n  - notes.txt\n"));
        assert!(text.contains("Outputs (2):\n  - /tmp/out1\n  - /tmp/out2\n"));
        assert!(text.contains("Lines discarded: 1\n"));
    }

    #[test]
    fn test_summary_json_fields() {
        let value = serde_json::to_value(RunSummary::from(&report())).unwrap();
        assert_eq!(value["lines_read"], 7);
        assert_eq!(value["destinations"][1], "/tmp/out2");
        assert_eq!(value["bytes_written"], 82);
    }
}
