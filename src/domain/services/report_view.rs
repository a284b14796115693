#[cfg(test)]
#[path = "report_view_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::JobCard;
use crate::domain::models::ReportRegions;

fn heading(text: &str) -> Line<'static> {
    return Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
}

fn score_color(score: &str) -> Color {
    let value = score
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or_default();

    if value >= 75.0 {
        return Color::Green;
    }
    if value >= 50.0 {
        return Color::Yellow;
    }
    return Color::Red;
}

fn indented(text: &str, indent: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    return text
        .lines()
        .map(|line| return Line::from(format!("{pad}{line}")))
        .collect();
}

fn job_card_lines(idx: usize, card: &JobCard) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("  ({}) ", idx + 1)),
            Span::styled(
                card.role.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" at {}", card.company)),
        ]),
    ];

    let mut details = vec![];
    if !card.location.is_empty() {
        details.push(card.location.to_string());
    }
    if !card.match_reason.is_empty() {
        details.push(format!("Match: {}", card.match_reason));
    }
    if !details.is_empty() {
        lines.push(Line::from(format!("      {}", details.join(" | "))));
    }

    if let Some(draft) = &card.email_draft {
        lines.push(Line::from(Span::styled(
            "      Email draft:".to_string(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.extend(indented(draft, 8));
    }

    return lines;
}

/// Builds the report section out of the page regions. Each region is drawn
/// only when it exists in the layout.
pub struct ReportView<'a> {
    regions: &'a ReportRegions,
    api_url: &'a str,
}

impl<'a> ReportView<'a> {
    pub fn new(regions: &'a ReportRegions, api_url: &'a str) -> ReportView<'a> {
        return ReportView { regions, api_url };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![];

        if let Some(name) = &self.regions.greeting {
            lines.push(Line::from(format!("Hello, {name}!")));
            lines.push(Line::from(""));
        }

        if let Some(score) = &self.regions.score {
            let mut text = score.to_string();
            if text.is_empty() {
                text = "--".to_string();
            }
            lines.push(Line::from(vec![
                Span::styled(
                    "Readiness Score: ".to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(text, Style::default().fg(score_color(score))),
            ]));
            lines.push(Line::from(""));
        }

        if let Some(strengths) = &self.regions.strengths {
            lines.push(heading("Strengths"));
            for strength in strengths {
                lines.push(Line::from(format!("  - {strength}")));
            }
            lines.push(Line::from(""));
        }

        if let Some(gaps) = &self.regions.gaps {
            lines.push(heading("Gaps"));
            for gap in gaps {
                lines.push(Line::from(format!("  - {gap}")));
            }
            lines.push(Line::from(""));
        }

        if let Some(steps) = &self.regions.action_plan {
            lines.push(heading("Action Plan"));
            for (idx, step) in steps.iter().enumerate() {
                lines.push(Line::from(format!("  {}. {step}", idx + 1)));
            }
            lines.push(Line::from(""));
        }

        if let Some(jobs) = &self.regions.jobs {
            lines.push(heading("Job Recommendations"));
            for (idx, card) in jobs.iter().enumerate() {
                lines.extend(job_card_lines(idx, card));
            }
            lines.push(Line::from(""));
        }

        if let Some(draft) = &self.regions.email_draft {
            lines.push(heading("Email Draft"));
            lines.extend(indented(draft, 2));
            lines.push(Line::from(""));
        }

        if let Some(url) = self.regions.download_url(self.api_url) {
            lines.push(Line::from(format!("Full report: {url}")));
        }

        while lines.last().map(|e| return e.width() == 0).unwrap_or(false) {
            lines.pop();
        }

        return lines;
    }

    pub fn as_plain_text(&self) -> String {
        return self
            .as_lines()
            .iter()
            .map(|line| {
                return line
                    .spans
                    .iter()
                    .map(|span| return span.content.to_string())
                    .collect::<String>();
            })
            .collect::<Vec<String>>()
            .join("\n");
    }

    /// Number of rows the report needs once wrapped to `width` columns.
    pub fn wrapped_height(&self, width: u16) -> u16 {
        let width = usize::from(width.max(1));
        let rows: usize = self
            .as_lines()
            .iter()
            .map(|line| return (line.width().max(1) + width - 1) / width)
            .sum();

        return u16::try_from(rows).unwrap_or(u16::MAX);
    }
}
