//! Plain-text report exporter.
//!
//! Produces the printable document behind "Save as PDF": a title, the
//! generation date, one section per result group and a footer.

use async_trait::async_trait;

use crate::domain::architecture::ArchitectureRecommendation;
use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::Choice;
use crate::domain::report::{ReportBody, ToolkitReport, REPORT_FOOTER};
use crate::domain::roadmap::RoadmapPlan;
use crate::domain::roi::RoiResult;
use crate::ports::{ExportError, ExportFormat, ExportedReport, ReportExporter};

#[derive(Debug, Clone, Default)]
pub struct TextReportExporter;

impl TextReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the full document.
    pub fn render(&self, report: &ToolkitReport) -> String {
        let mut doc = format!(
            "{}\nGenerated on: {}\n\n",
            report.title,
            report.generated_at.date_label()
        );

        let body = match &report.body {
            ReportBody::Assessment(result) => self.assessment_section(result),
            ReportBody::Architecture(rec) => self.architecture_section(rec),
            ReportBody::Roadmap(plan) => self.roadmap_section(plan),
            ReportBody::Roi(result) => self.roi_section(result),
        };
        doc.push_str(&body);
        doc.push_str(&format!("\n{}\n", REPORT_FOOTER));
        doc
    }

    fn assessment_section(&self, result: &AssessmentResult) -> String {
        let mut section = String::new();

        if let Some(overall) = result.overall {
            section.push_str(&format!("Overall Readiness Score: {}\n", overall));
        }
        if let Some(maturity) = result.maturity {
            section.push_str(&format!("Maturity Level: {}\n", maturity));
        }

        section.push_str("\nCategory Scores:\n");
        for category in &result.categories {
            let score = category
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "not answered".to_string());
            section.push_str(&format!("  {}: {}\n", category.category.label(), score));
        }

        if let Some(focus) = &result.focus {
            section.push_str("\nKey Recommendations:\n");
            section.push_str(&format!("  Priority Focus Area: {}\n", focus.category.label()));
            for (i, rec) in focus.recommendations.iter().enumerate() {
                section.push_str(&format!("    {}. {}\n", i + 1, rec));
            }
        }
        section
    }

    fn architecture_section(&self, rec: &ArchitectureRecommendation) -> String {
        let mut section = format!("Recommended Architecture: {}\n", rec.pattern);
        section.push_str(&format!("> {}\n", rec.summary));

        section.push_str("\nPattern Fit:\n");
        for fit in &rec.fits {
            section.push_str(&format!(
                "  {}: {} pts ({}%)\n",
                fit.pattern, fit.points, fit.relative_fit
            ));
        }

        if !rec.considerations.is_empty() {
            section.push_str("\nConsiderations:\n");
            for note in &rec.considerations {
                section.push_str(&format!("  - {}\n", note));
            }
        }
        section
    }

    fn roadmap_section(&self, plan: &RoadmapPlan) -> String {
        let mut section = format!(
            "Starting Maturity: {}\nTarget Maturity: {}\nDuration: {} months\n",
            plan.starting_maturity, plan.target_maturity, plan.total_months
        );

        for phase in &plan.phases {
            section.push_str(&format!(
                "\n{} (Months {}-{})\n",
                phase.phase, phase.start_month, phase.end_month
            ));
            for initiative in &phase.initiatives {
                section.push_str(&format!("  - {}\n", initiative));
            }
        }
        section
    }

    fn roi_section(&self, result: &RoiResult) -> String {
        let mut section = String::new();
        section.push_str(&format!(
            "Implementation Cost: {}\n",
            format_currency(result.implementation_cost)
        ));
        section.push_str(&format!(
            "Annual Gross Benefit: {}\n",
            format_currency(result.annual_gross_benefit)
        ));
        section.push_str(&format!(
            "Year-One Benefit: {}\n",
            format_currency(result.year_one_benefit)
        ));
        section.push_str(&format!(
            "Annual Maintenance: {}\n",
            format_currency(result.annual_maintenance)
        ));
        match result.payback_months {
            Some(months) => section.push_str(&format!("Payback Period: {:.1} months\n", months)),
            None => section.push_str("Payback Period: not reached\n"),
        }
        section.push_str(&format!(
            "\n{} ROI: {:.0}%\nNet Benefit: {}\n",
            result.horizon.label(),
            result.roi_percent,
            format_currency(result.net_benefit)
        ));
        section
    }
}

/// Whole dollars with thousands separators, e.g. `$1,234,567`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[async_trait]
impl ReportExporter for TextReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    async fn export(&self, report: &ToolkitReport) -> Result<ExportedReport, ExportError> {
        let text = self.render(report);
        Ok(ExportedReport::new(
            text.into_bytes(),
            ExportFormat::Text,
            report.file_stem(),
        ))
    }
}
