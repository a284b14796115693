use anyhow::anyhow;
use anyhow::Result;
use strum::IntoEnumIterator;
use test_utils::minimal_report_fixture;

use super::AppState;
use super::FocusTarget;
use crate::domain::models::Anchor;
use crate::domain::models::BackendBox;
use crate::domain::models::DsaSkill;
use crate::domain::models::Event;
use crate::domain::models::Mode;
use crate::domain::models::ReportPayload;
use crate::domain::models::Section;
use crate::domain::models::SUBMIT_BUSY_LABEL;
use crate::domain::models::SUBMIT_LABEL;
use crate::domain::models::VALIDATION_ALERT;
use crate::domain::services::SUBMISSION_ALERT;
use crate::infrastructure::backends::HttpBackend;

impl Default for AppState {
    fn default() -> AppState {
        let mut app_state = AppState::new(
            "http://127.0.0.1:8000",
            Mode::default(),
            &Section::iter().collect::<Vec<Section>>(),
        );
        app_state.last_known_width = 100;
        app_state.last_known_height = 300;

        return app_state;
    }
}

fn report() -> Result<ReportPayload> {
    return ReportPayload::new(serde_json::from_str(minimal_report_fixture())?);
}

mod select_mode {
    use super::*;

    #[test]
    fn it_threads_the_selection_into_submissions() {
        let mut app_state = AppState::default();
        app_state.select_mode("fast");

        assert_eq!(app_state.selection, Mode::Fast);
        assert_eq!(app_state.page.mode_title, "Fast Assessment");
        assert_eq!(app_state.mode_cursor, 0);
        assert_eq!(app_state.focus, FocusTarget::Skill);

        app_state.skill_cursor = 1;
        app_state.choose_skill_at_cursor();
        let req = app_state.submit("Built a REST API").unwrap();

        assert_eq!(req.mode, Mode::Fast);
        assert_eq!(req.dsa_skill, DsaSkill::Intermediate);
        assert_eq!(req.project_description, "Built a REST API");
    }

    #[test]
    fn it_selects_at_the_cursor() {
        let mut app_state = AppState::default();
        assert_eq!(app_state.mode_cursor, 1);

        app_state.move_mode_cursor(5);
        app_state.select_mode_at_cursor();

        assert_eq!(app_state.selection, Mode::Detailed);
        assert_eq!(app_state.page.mode_title, "Detailed Assessment");
    }

    #[test]
    fn it_ignores_unknown_modes() {
        let mut app_state = AppState::default();
        app_state.select_mode("marathon");

        assert_eq!(app_state.selection, Mode::Balanced);
        assert_eq!(app_state.page.mode_title, "Assessment");
        assert_eq!(app_state.page.focus, Anchor::Resume);
    }
}

mod submit {
    use super::*;

    #[test]
    fn it_alerts_on_incomplete_forms() {
        let mut app_state = AppState::default();

        assert!(app_state.submit("Built a REST API").is_none());
        assert_eq!(app_state.page.current_alert(), Some(&VALIDATION_ALERT.to_string()));
        assert!(!app_state.is_waiting());

        app_state.dismiss_alert();
        app_state.choose_skill_at_cursor();
        assert!(app_state.submit("").is_none());
        assert_eq!(app_state.page.alerts_len(), 1);
    }

    #[test]
    fn it_renders_completed_reports() -> Result<()> {
        let mut app_state = AppState::default();
        app_state.choose_skill_at_cursor();

        assert!(app_state.submit("Built a REST API").is_some());
        assert!(app_state.is_waiting());
        assert_eq!(app_state.page.submit.label, SUBMIT_BUSY_LABEL);
        assert!(app_state.submit("Built a REST API").is_none());

        app_state.handle_event(Event::AssessmentCompleted(report()?));

        assert!(!app_state.is_waiting());
        assert!(app_state.has_report);
        assert_eq!(app_state.focus, FocusTarget::Report);
        assert_eq!(app_state.page.report.score, Some("72%".to_string()));
        assert_eq!(app_state.page.submit.label, SUBMIT_LABEL);
        assert_eq!(app_state.email_draft(), Some("Hi".to_string()));

        return Ok(());
    }

    #[test]
    fn it_recovers_from_failures() {
        let mut app_state = AppState::default();
        app_state.choose_skill_at_cursor();
        app_state.submit("Built a REST API");

        app_state.handle_event(Event::AssessmentFailed(anyhow!("connection refused")));

        assert!(!app_state.is_waiting());
        assert!(!app_state.has_report);
        assert!(app_state.page.submit.enabled);
        assert_eq!(
            app_state.page.current_alert(),
            Some(&SUBMISSION_ALERT.to_string())
        );
        assert_eq!(app_state.email_draft(), None);

        app_state.dismiss_alert();
        assert!(app_state.submit("Built a REST API").is_some());
    }
}

mod focus {
    use super::*;

    #[test]
    fn it_walks_the_focus_ring() {
        let mut app_state = AppState::default();
        let mut visited = vec![];
        for _ in 0..5 {
            app_state.focus_next();
            visited.push((app_state.focus, app_state.page.focus));
        }

        assert_eq!(
            visited,
            vec![
                (FocusTarget::Skill, Anchor::Resume),
                (FocusTarget::Description, Anchor::Resume),
                (FocusTarget::Submit, Anchor::Resume),
                (FocusTarget::Report, Anchor::Report),
                (FocusTarget::Modes, Anchor::Modes),
            ]
        );
    }

    #[test]
    fn it_clamps_skill_cursor() {
        let mut app_state = AppState::default();
        app_state.move_skill_cursor(-1);
        assert_eq!(app_state.skill_cursor, 0);

        app_state.move_skill_cursor(10);
        assert_eq!(app_state.skill_cursor, 2);

        app_state.choose_skill_at_cursor();
        assert_eq!(app_state.form.dsa_skill, Some(DsaSkill::Advanced));
    }
}

mod notices {
    use super::*;

    #[test]
    fn it_stores_notices() {
        let mut app_state = AppState::default();
        app_state.handle_event(Event::Notice("Copied".to_string()));

        assert_eq!(app_state.notice, Some("Copied".to_string()));
        assert_eq!(app_state.focus, FocusTarget::Modes);
    }

    #[tokio::test]
    async fn it_alerts_when_the_backend_is_down() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/").with_status(500).create();

        let backend: BackendBox = Box::new(HttpBackend::new(&server.url()));
        let mut app_state = AppState::default();
        app_state.check_backend(&backend).await;

        mock.assert();
        assert_eq!(app_state.page.alerts_len(), 1);
    }
}
