//! Event loop driver shared by the interactive and scripted front ends
//!
//! `App` owns the single `WizardState`, applies events one at a time through
//! `wizard::update`, and performs the effects a transition asks for.
//! Scaffolding runs as a background task; its result comes back through a
//! channel as an ordinary wizard event.

use crate::materialize::Materializer;
use crate::matrix::{Complexity, Language, ProjectType, Selection};
use crate::wizard::{update, Effect, Event, Outcome, ScaffoldReport, ScaffoldRequest, Step, WizardState};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct App<M: Materializer> {
    state: WizardState,
    materializer: Arc<M>,
    completion_tx: mpsc::UnboundedSender<Event>,
    completion_rx: mpsc::UnboundedReceiver<Event>,
}

impl<M: Materializer> App<M> {
    pub fn new(state: WizardState, materializer: Arc<M>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            state,
            materializer,
            completion_tx,
            completion_rx,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn into_state(self) -> WizardState {
        self.state
    }

    /// Apply one event. Returns the outcome when the wizard wants to exit.
    pub fn dispatch(&mut self, event: Event) -> Option<Outcome> {
        let state = std::mem::take(&mut self.state);
        let (state, effect) = update(state, event);
        self.state = state;

        match effect {
            Effect::None => None,
            Effect::Exit(outcome) => Some(outcome),
            Effect::Scaffold(request) => {
                self.spawn_scaffold(request);
                None
            }
        }
    }

    fn spawn_scaffold(&self, request: ScaffoldRequest) {
        let materializer = Arc::clone(&self.materializer);
        let tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let matrix = request.selection.resolve();
            let output = PathBuf::from(&request.output_path);
            let event = match materializer.materialize(&matrix, &output).await {
                Ok(written) => Event::ScaffoldSucceeded(ScaffoldReport { written }),
                Err(e) => Event::ScaffoldFailed(e.to_string()),
            };
            // Receiver is gone only if the wizard already exited
            let _ = tx.send(event);
        });
    }

    /// A finished scaffolding result, if one is waiting
    pub fn try_completion(&mut self) -> Option<Event> {
        self.completion_rx.try_recv().ok()
    }

    /// Wait for the in-flight scaffolding result
    pub async fn completion(&mut self) -> Option<Event> {
        self.completion_rx.recv().await
    }

    /// Feed a fixed event sequence, then wait for scaffolding to finish.
    pub async fn run_script(&mut self, events: impl IntoIterator<Item = Event>) -> Outcome {
        for event in events {
            if let Some(outcome) = self.dispatch(event) {
                return outcome;
            }
        }

        while self.state.step == Step::Scaffolding {
            let Some(event) = self.completion().await else {
                break;
            };
            if let Some(outcome) = self.dispatch(event) {
                return outcome;
            }
        }

        match self.state.step {
            Step::Done => Outcome::Completed,
            step => Outcome::Failed(format!(
                "wizard stopped at '{}' before scaffolding finished",
                step.title()
            )),
        }
    }
}

/// Events that walk a fresh wizard through the given choices
pub fn scripted_events(app_name: &str, selection: &Selection, output_path: &str) -> Vec<Event> {
    let language = selection.language;
    let cursor = |index: Option<usize>| {
        let mut events = vec![Event::MoveDown; index.unwrap_or(0)];
        events.push(Event::Confirm);
        events
    };

    let mut events = vec![Event::TextEdit(app_name.to_string()), Event::Confirm];
    events.extend(cursor(Language::ALL.iter().position(|l| *l == language)));
    events.extend(cursor(
        language
            .frameworks()
            .iter()
            .position(|f| *f == selection.framework),
    ));
    events.extend(cursor(
        ProjectType::ALL
            .iter()
            .position(|p| *p == selection.project_type),
    ));
    events.extend(cursor(
        Complexity::ALL
            .iter()
            .position(|c| *c == selection.complexity),
    ));
    events.push(Event::TextEdit(output_path.to_string()));
    events.push(Event::Confirm);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterializeError;
    use crate::matrix::{Framework, ProjectMatrix};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records what it was asked to write without touching disk
    #[derive(Default)]
    struct RecordingMaterializer {
        calls: AtomicUsize,
        seen: Mutex<Vec<(Vec<String>, PathBuf)>>,
        fail_with: Option<String>,
    }

    impl Materializer for RecordingMaterializer {
        async fn materialize(
            &self,
            matrix: &ProjectMatrix,
            output: &Path,
        ) -> Result<Vec<String>, MaterializeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let paths: Vec<String> = matrix.paths().iter().map(|p| p.to_string()).collect();
            self.seen
                .lock()
                .unwrap()
                .push((paths.clone(), output.to_path_buf()));
            match &self.fail_with {
                Some(msg) => Err(MaterializeError::io(
                    output,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, msg.clone()),
                )),
                None => Ok(paths),
            }
        }
    }

    fn selection(
        language: Language,
        framework: Framework,
        project_type: ProjectType,
        complexity: Complexity,
    ) -> Selection {
        Selection {
            language,
            framework,
            project_type,
            complexity,
        }
    }

    #[tokio::test]
    async fn test_go_gin_cli_minimal_end_to_end() {
        let materializer = Arc::new(RecordingMaterializer::default());
        let mut app = App::new(WizardState::new(), Arc::clone(&materializer));
        let sel = selection(Language::Go, Framework::Gin, ProjectType::Cli, Complexity::Minimal);

        let outcome = app.run_script(scripted_events("demo", &sel, ".")).await;

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(materializer.calls.load(Ordering::SeqCst), 1);
        let seen = materializer.seen.lock().unwrap();
        assert_eq!(seen[0].0, vec!["main.go", "go.mod"]);
        assert_eq!(seen[0].1, PathBuf::from("."));

        let state = app.state();
        assert_eq!(state.step, Step::Done);
        assert_eq!(state.app_name, "demo");
        assert_eq!(
            state.report.as_ref().map(|r| r.written.len()),
            Some(2)
        );
    }

    #[tokio::test]
    async fn test_go_echo_backend_standard_writes_four_files() {
        let materializer = Arc::new(RecordingMaterializer::default());
        let mut app = App::new(WizardState::new(), Arc::clone(&materializer));
        let sel = selection(
            Language::Go,
            Framework::Echo,
            ProjectType::Backend,
            Complexity::Standard,
        );

        let outcome = app.run_script(scripted_events("svc", &sel, "svc")).await;

        assert_eq!(outcome, Outcome::Completed);
        let seen = materializer.seen.lock().unwrap();
        assert_eq!(
            seen[0].0,
            vec![
                "main.go",
                "go.mod",
                "internal/repository/repo.go",
                "internal/service/service.go"
            ]
        );
    }

    #[tokio::test]
    async fn test_javascript_fastify_enterprise_writes_two_files() {
        let materializer = Arc::new(RecordingMaterializer::default());
        let mut app = App::new(WizardState::new(), Arc::clone(&materializer));
        let sel = selection(
            Language::JavaScript,
            Framework::Fastify,
            ProjectType::WebApp,
            Complexity::Enterprise,
        );

        app.run_script(scripted_events("web", &sel, "web")).await;

        let seen = materializer.seen.lock().unwrap();
        assert_eq!(seen[0].0, vec!["index.js", "package.json"]);
        assert_eq!(app.state().selection(), Some(sel));
    }

    #[tokio::test]
    async fn test_materializer_failure_is_reported() {
        let materializer = Arc::new(RecordingMaterializer {
            fail_with: Some("read-only".into()),
            ..Default::default()
        });
        let mut app = App::new(WizardState::new(), Arc::clone(&materializer));
        let sel = selection(Language::Python, Framework::Flask, ProjectType::WebApp, Complexity::Minimal);

        let outcome = app.run_script(scripted_events("py", &sel, "/ro")).await;

        assert_eq!(outcome.exit_code(), 1);
        match &outcome {
            Outcome::Failed(msg) => assert!(msg.contains("read-only")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(app.state().last_error.is_some());
    }

    #[tokio::test]
    async fn test_cancel_at_every_step_never_materializes() {
        let sel = selection(
            Language::Python,
            Framework::Django,
            ProjectType::Backend,
            Complexity::Enterprise,
        );
        let full = scripted_events("demo", &sel, "out");

        for cut in 0..full.len() {
            let materializer = Arc::new(RecordingMaterializer::default());
            let mut app = App::new(WizardState::new(), Arc::clone(&materializer));
            let mut events = full[..cut].to_vec();
            events.push(Event::Cancel);

            let outcome = app.run_script(events).await;

            assert_eq!(outcome, Outcome::Cancelled);
            assert_eq!(outcome.exit_code(), 0);
            assert_eq!(materializer.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_try_completion_drains_finished_scaffold() {
        let materializer = Arc::new(RecordingMaterializer::default());
        let mut app = App::new(WizardState::new(), Arc::clone(&materializer));
        let sel = selection(Language::Go, Framework::Fiber, ProjectType::Cli, Complexity::Minimal);

        for event in scripted_events("demo", &sel, "out") {
            assert!(app.dispatch(event).is_none());
        }
        assert_eq!(app.state().step, Step::Scaffolding);
        assert!(app.try_completion().is_none());

        let mut completion = None;
        for _ in 0..100 {
            tokio::task::yield_now().await;
            completion = app.try_completion();
            if completion.is_some() {
                break;
            }
        }

        match completion {
            Some(Event::ScaffoldSucceeded(report)) => {
                assert_eq!(report.written, vec!["main.go", "go.mod"]);
                assert!(app.dispatch(Event::ScaffoldSucceeded(report)).is_none());
            }
            other => panic!("expected a finished scaffold, got {:?}", other),
        }
        assert_eq!(app.state().step, Step::Done);
        assert!(app.try_completion().is_none());
    }

    #[tokio::test]
    async fn test_incomplete_script_is_a_failure() {
        let materializer = Arc::new(RecordingMaterializer::default());
        let mut app = App::new(WizardState::new(), Arc::clone(&materializer));

        let outcome = app.run_script(vec![Event::Confirm]).await;

        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_eq!(materializer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_scripted_events_position_the_cursor() {
        let sel = selection(
            Language::Python,
            Framework::Django,
            ProjectType::Backend,
            Complexity::Standard,
        );
        let mut state = WizardState::new();
        for event in scripted_events("x", &sel, "out") {
            state = update(state, event).0;
        }
        assert_eq!(state.selection(), Some(sel));
        assert_eq!(state.output_path, "out");
    }
}
