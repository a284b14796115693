use anyhow::Result;
use strum::IntoEnumIterator;
use test_utils::minimal_report_fixture;
use test_utils::report_fixture;

use super::ReportRenderer;
use crate::domain::models::JobCard;
use crate::domain::models::ReportPayload;
use crate::domain::models::ReportRegions;
use crate::domain::models::Section;

fn payload(body: &str) -> Result<ReportPayload> {
    return ReportPayload::new(serde_json::from_str(body)?);
}

fn all_regions() -> ReportRegions {
    return ReportRegions::with_sections(&Section::iter().collect::<Vec<Section>>());
}

fn previous_card() -> JobCard {
    return JobCard {
        role: "Old Role".to_string(),
        company: "Old Co".to_string(),
        location: "Nowhere".to_string(),
        match_reason: "10%".to_string(),
        email_draft: None,
    };
}

#[test]
fn it_renders_a_minimal_report() -> Result<()> {
    let mut regions = all_regions();
    regions.jobs = Some(vec![previous_card()]);

    let written = ReportRenderer::render(&payload(minimal_report_fixture())?, &mut regions);

    assert_eq!(written, 5);
    assert_eq!(regions.score, Some("72%".to_string()));
    assert_eq!(regions.strengths, Some(vec!["A".to_string()]));
    assert_eq!(regions.gaps, Some(vec!["B".to_string()]));
    assert_eq!(regions.action_plan, Some(vec!["C".to_string()]));
    assert_eq!(regions.email_draft, Some("Hi".to_string()));
    assert_eq!(regions.jobs, Some(vec![previous_card()]));

    return Ok(());
}

#[test]
fn it_replaces_lists_in_input_order() -> Result<()> {
    let mut regions = all_regions();
    regions.strengths = Some(vec!["stale".to_string()]);
    regions.jobs = Some(vec![previous_card()]);

    ReportRenderer::render(&payload(report_fixture())?, &mut regions);

    assert_eq!(
        regions.strengths,
        Some(vec![
            "Strong grasp of recursion".to_string(),
            "Shipped a production REST API".to_string(),
        ])
    );
    assert_eq!(
        regions.action_plan,
        Some(vec![
            "Practice Graphs on LeetCode".to_string(),
            "Read a system design primer".to_string(),
            "Mock interview every week".to_string(),
        ])
    );

    let jobs = regions.jobs.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].company, "Acme Corp");
    assert_eq!(jobs[1].company, "Globex");
    assert_eq!(regions.greeting, Some("Ada Lovelace".to_string()));
    assert_eq!(
        regions.download_link,
        Some("/api/report/pdf?filename=Placement_Report_1700000000.pdf".to_string())
    );

    return Ok(());
}

#[test]
fn it_renders_empty_lists() -> Result<()> {
    let mut regions = all_regions();
    regions.gaps = Some(vec!["stale".to_string()]);
    regions.jobs = Some(vec![previous_card()]);

    let report = payload(
        r#"{"readiness_score":0,"strengths":[],"gaps":[],"action_plan":[],"job_recommendations":[],"email_draft":""}"#,
    )?;
    let written = ReportRenderer::render(&report, &mut regions);

    assert_eq!(written, 6);
    assert_eq!(regions.score, Some("0%".to_string()));
    assert_eq!(regions.gaps, Some(vec![]));
    assert_eq!(regions.jobs, Some(vec![]));

    return Ok(());
}

#[test]
fn it_skips_regions_missing_from_the_layout() -> Result<()> {
    let mut regions = ReportRegions::with_sections(&[Section::Score, Section::Gaps]);
    let written = ReportRenderer::render(&payload(report_fixture())?, &mut regions);

    assert_eq!(written, 2);
    assert_eq!(regions.score, Some("81%".to_string()));
    assert_eq!(regions.strengths, None);
    assert_eq!(regions.action_plan, None);
    assert_eq!(regions.jobs, None);
    assert_eq!(regions.email_draft, None);

    return Ok(());
}

#[test]
fn it_isolates_malformed_regions() -> Result<()> {
    let mut regions = all_regions();
    regions.jobs = Some(vec![previous_card()]);

    let report = payload(
        r#"{"readiness_score":64,"strengths":"oops","gaps":["B"],"action_plan":["C"],"job_recommendations":"oops","email_draft":"Hi"}"#,
    )?;
    let written = ReportRenderer::render(&report, &mut regions);

    assert_eq!(written, 4);
    assert_eq!(regions.score, Some("64%".to_string()));
    assert_eq!(regions.strengths, Some(vec![]));
    assert_eq!(regions.gaps, Some(vec!["B".to_string()]));
    assert_eq!(regions.jobs, Some(vec![previous_card()]));
    assert_eq!(regions.email_draft, Some("Hi".to_string()));

    return Ok(());
}

#[test]
fn it_renders_one_card_per_readable_job_record() -> Result<()> {
    let mut regions = all_regions();
    regions.jobs = Some(vec![previous_card()]);

    let report = payload(
        r#"{"readiness_score":70,"strengths":["A"],"gaps":["B"],"action_plan":["C"],"job_recommendations":[{"role":"SDE","company":"Acme","match":"Strong Python"},"not a job",{"role":"BE","company":"Globex","location":"Remote","match":85}],"email_draft":"Hi"}"#,
    )?;
    let written = ReportRenderer::render(&report, &mut regions);

    assert_eq!(written, 6);
    assert_eq!(
        regions.jobs,
        Some(vec![
            JobCard {
                role: "SDE".to_string(),
                company: "Acme".to_string(),
                location: "".to_string(),
                match_reason: "Strong Python".to_string(),
                email_draft: None,
            },
            JobCard {
                role: "BE".to_string(),
                company: "Globex".to_string(),
                location: "Remote".to_string(),
                match_reason: "85".to_string(),
                email_draft: None,
            },
        ])
    );

    return Ok(());
}
