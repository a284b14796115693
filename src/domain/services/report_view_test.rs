use anyhow::Result;
use strum::IntoEnumIterator;
use test_utils::report_fixture;

use super::ReportView;
use crate::domain::models::JobCard;
use crate::domain::models::ReportPayload;
use crate::domain::models::ReportRegions;
use crate::domain::models::Section;
use crate::domain::services::ReportRenderer;

fn rendered_regions(sections: &[Section]) -> Result<ReportRegions> {
    let payload = ReportPayload::new(serde_json::from_str(report_fixture())?)?;
    let mut regions = ReportRegions::with_sections(sections);
    ReportRenderer::render(&payload, &mut regions);

    return Ok(regions);
}

#[test]
fn it_renders_the_full_report() -> Result<()> {
    let regions = rendered_regions(&Section::iter().collect::<Vec<Section>>())?;
    let text = ReportView::new(&regions, "http://127.0.0.1:8000").as_plain_text();

    let expected = [
        "Hello, Ada Lovelace!",
        "",
        "Readiness Score: 81%",
        "",
        "Strengths",
        "  - Strong grasp of recursion",
        "  - Shipped a production REST API",
        "",
        "Gaps",
        "  - Limited exposure to graph algorithms",
        "  - No system design practice",
        "",
        "Action Plan",
        "  1. Practice Graphs on LeetCode",
        "  2. Read a system design primer",
        "  3. Mock interview every week",
        "",
        "Job Recommendations",
        "  (1) Backend Engineer at Acme Corp",
        "      Remote | Match: 85%",
        "  (2) SDE Intern at Globex",
        "      Bengaluru | Match: Strong API experience",
        "      Email draft:",
        "        Dear Globex HR, I am writing about the SDE Intern role.",
        "",
        "Email Draft",
        "  Dear Recruiter, I would love to chat about open roles.",
        "",
        "Full report: http://127.0.0.1:8000/api/report/pdf?filename=Placement_Report_1700000000.pdf",
    ]
    .join("\n");

    assert_eq!(text, expected);

    return Ok(());
}

#[test]
fn it_only_renders_layout_sections() -> Result<()> {
    let regions = rendered_regions(&[Section::Score, Section::ActionPlan])?;
    let text = ReportView::new(&regions, "http://127.0.0.1:8000").as_plain_text();

    assert!(text.contains("Readiness Score: 81%"));
    assert!(text.contains("Action Plan"));
    assert!(!text.contains("Strengths"));
    assert!(!text.contains("Job Recommendations"));
    assert!(!text.contains("Email Draft"));

    return Ok(());
}

#[test]
fn it_renders_placeholders_before_a_report() {
    let regions = ReportRegions::with_sections(&[Section::Score]);
    let text = ReportView::new(&regions, "").as_plain_text();

    insta::assert_snapshot!(text, @"Readiness Score: --");
}

#[test]
fn it_measures_wrapped_height() {
    let regions = ReportRegions::with_sections(&[Section::Score]);
    let view = ReportView::new(&regions, "");

    assert_eq!(view.wrapped_height(100), 1);
    assert_eq!(view.wrapped_height(10), 2);
}

#[test]
fn it_omits_missing_job_details() {
    let mut regions = ReportRegions::with_sections(&[Section::Jobs]);
    regions.jobs = Some(vec![JobCard {
        role: "SDE".to_string(),
        company: "Acme".to_string(),
        location: "".to_string(),
        match_reason: "85".to_string(),
        email_draft: None,
    }]);

    let text = ReportView::new(&regions, "").as_plain_text();

    assert_eq!(
        text,
        ["Job Recommendations", "  (1) SDE at Acme", "      Match: 85"].join("\n")
    );
}
