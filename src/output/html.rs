//! HTML report host.
//!
//! Collects data sources and sections during a parse pass, then writes a
//! single self-contained HTML page with each section's SVG inlined.

use super::json::prepare_output_path;
use crate::host::{LogFile, ReportHost, ReportSection};
use crate::plot::linegraph::escape;
use crate::utils::error::{OutputError, ReportError};
use log::{debug, info};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Provenance record for one contributing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub section: String,
    pub sample_file: PathBuf,
}

/// Report host that renders to HTML
#[derive(Debug, Clone)]
pub struct HtmlReport {
    pub title: String,
    sources: Vec<DataSource>,
    sections: Vec<ReportSection>,
}

impl Default for HtmlReport {
    fn default() -> Self {
        Self {
            title: "Fragment size report".to_string(),
            sources: Vec::new(),
            sections: Vec::new(),
        }
    }
}

impl HtmlReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Render the whole report to a string
    pub fn render(&self) -> Result<String, OutputError> {
        let mut html = String::with_capacity(64 * 1024);
        let title = escape(&self.title);

        // Writing into a String cannot fail
        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html lang=\"en\">");
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "<meta charset=\"utf-8\"/>");
        let _ = writeln!(html, "<title>{}</title>", title);
        let _ = writeln!(html, "<style>");
        let _ = writeln!(html, "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;}}");
        let _ = writeln!(html, ".desc{{color:#444;font-size:13px;margin:4px 0 10px 0;}}");
        let _ = writeln!(html, ".sources{{border-collapse:collapse;font-size:12px;}}");
        let _ = writeln!(html, ".sources th,.sources td{{border:1px solid #ddd;padding:4px 6px;text-align:left;}}");
        let _ = writeln!(html, "</style>");
        let _ = writeln!(html, "</head>");
        let _ = writeln!(html, "<body>");
        let _ = writeln!(html, "<h1>{}</h1>", title);
        let _ = writeln!(
            html,
            "<div class=\"desc\">Generated {}</div>",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );

        if self.sections.is_empty() {
            let _ = writeln!(html, "<p>No sections were generated.</p>");
        }

        for section in &self.sections {
            let svg = section.plot.render_svg()?;
            let _ = writeln!(html, "<h2 id=\"{}\">{}</h2>", escape(&section.anchor), escape(&section.name));
            let _ = writeln!(html, "<div class=\"desc\">{}</div>", escape(&section.description));
            let _ = writeln!(html, "<div class=\"plot\">{}</div>", svg);
        }

        if !self.sources.is_empty() {
            let _ = writeln!(html, "<h2 id=\"data_sources\">Data sources</h2>");
            let _ = writeln!(html, "<table class=\"sources\">");
            let _ = writeln!(html, "<tr><th>Section</th><th>File</th></tr>");
            for source in &self.sources {
                let _ = writeln!(
                    html,
                    "<tr><td>{}</td><td>{}</td></tr>",
                    escape(&source.section),
                    escape(&source.sample_file.display().to_string())
                );
            }
            let _ = writeln!(html, "</table>");
        }

        let _ = writeln!(html, "</body>");
        let _ = writeln!(html, "</html>");
        Ok(html)
    }

    /// Render and write the report to disk
    ///
    /// # Errors
    /// * `OutputError::InvalidPath` - Path is invalid
    /// * `OutputError::RenderFailed` - A section's plot could not be rendered
    /// * `OutputError::WriteFailed` - I/O error during write
    pub fn write(&self, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
        let output_path = output_path.as_ref();

        info!("Writing HTML report to: {}", output_path.display());

        prepare_output_path(output_path)?;
        let html = self.render()?;

        let file = File::create(output_path)
            .map_err(OutputError::WriteFailed)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(html.as_bytes())
            .map_err(OutputError::WriteFailed)?;
        writer.flush()
            .map_err(OutputError::WriteFailed)?;

        info!("Report written successfully ({:.2} KB)", html.len() as f64 / 1024.0);
        Ok(())
    }
}

impl ReportHost for HtmlReport {
    fn add_data_source(&mut self, file: &LogFile, section: &str) {
        debug!("Data source for {}: {}", section, file.path().display());
        self.sources.push(DataSource {
            section: section.to_string(),
            sample_file: file.path(),
        });
    }

    fn add_section(&mut self, section: ReportSection) -> Result<(), ReportError> {
        if self.sections.iter().any(|s| s.anchor == section.anchor) {
            return Err(ReportError::DuplicateAnchor(section.anchor));
        }
        // Fail at registration rather than at write time
        section.plot.render_svg()?;
        self.sections.push(section);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{Histogram, SampleHistograms};
    use crate::plot::{plot, LineGraphConfig};

    fn section(anchor: &str) -> ReportSection {
        let mut data = SampleHistograms::new();
        data.insert("s1".to_string(), [(100, 5)].into_iter().collect::<Histogram>());
        ReportSection {
            name: "Fragments".to_string(),
            anchor: anchor.to_string(),
            description: "desc".to_string(),
            plot: plot(&data, LineGraphConfig::new("p")),
        }
    }

    #[test]
    fn test_duplicate_anchor_rejected() {
        let mut report = HtmlReport::new();
        report.add_section(section("a")).unwrap();
        let result = report.add_section(section("a"));
        assert!(matches!(result, Err(ReportError::DuplicateAnchor(_))));
    }

    #[test]
    fn test_empty_plot_rejected() {
        let mut report = HtmlReport::new();
        let mut empty = section("a");
        empty.plot.series.clear();
        assert!(matches!(report.add_section(empty), Err(ReportError::PlotFailed(_))));
    }

    #[test]
    fn test_render_contains_sections_and_sources() {
        let mut report = HtmlReport::new().with_title("Run <1>");
        report.add_data_source(&LogFile::new("f.txt", "run1", ""), "frags");
        report.add_section(section("frag_anchor")).unwrap();

        let html = report.render().unwrap();
        assert!(html.contains("<title>Run &lt;1&gt;</title>"));
        assert!(html.contains("id=\"frag_anchor\""));
        assert!(html.contains("<svg"));
        assert!(html.contains("run1/f.txt"));
    }

    #[test]
    fn test_write_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out/report.html");
        let mut report = HtmlReport::new();
        report.add_section(section("a")).unwrap();

        report.write(&path).unwrap();
        assert!(path.exists());
    }
}
