/// Minimal report as returned by the assessment API when no job matching was
/// performed.
pub fn minimal_report_fixture() -> &'static str {
    return r#"{"readiness_score":72,"strengths":["A"],"gaps":["B"],"action_plan":["C"],"email_draft":"Hi"}"#;
}

pub fn report_fixture() -> &'static str {
    return r#"
{
    "mode": "detailed",
    "candidate_name": "Ada Lovelace",
    "readiness_score": 81,
    "strengths": [
        "Strong grasp of recursion",
        "Shipped a production REST API"
    ],
    "gaps": [
        "Limited exposure to graph algorithms",
        "No system design practice"
    ],
    "action_plan": [
        "Practice Graphs on LeetCode",
        "Read a system design primer",
        "Mock interview every week"
    ],
    "job_recommendations": [
        {
            "role": "Backend Engineer",
            "company": "Acme Corp",
            "location": "Remote",
            "match": "85%"
        },
        {
            "role": "SDE Intern",
            "company": "Globex",
            "location": "Bengaluru",
            "match": "Strong API experience",
            "email_draft": "Dear Globex HR, I am writing about the SDE Intern role."
        }
    ],
    "email_draft": "Dear Recruiter, I would love to chat about open roles.",
    "pdf_url": "/api/report/pdf?filename=Placement_Report_1700000000.pdf"
}
"#
    .trim();
}
