//! Wizard steps, input events and the pure transition function

use crate::matrix::{Complexity, Framework, Language, ProjectType, Selection};

/// Default pre-filled output path
pub const DEFAULT_OUTPUT_PATH: &str = ".";

/// Current screen in the wizard flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AppName,
    LanguageSelection,
    FrameworkSelection,
    ProjectTypeSelection,
    ComplexitySelection,
    OutputPath,
    Scaffolding,
    Done,
}

impl Step {
    /// 1-based number of the interactive steps
    pub fn number(&self) -> Option<usize> {
        match self {
            Step::AppName => Some(1),
            Step::LanguageSelection => Some(2),
            Step::FrameworkSelection => Some(3),
            Step::ProjectTypeSelection => Some(4),
            Step::ComplexitySelection => Some(5),
            Step::OutputPath => Some(6),
            Step::Scaffolding | Step::Done => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::AppName => "Application Name",
            Step::LanguageSelection => "Select Language",
            Step::FrameworkSelection => "Select Framework",
            Step::ProjectTypeSelection => "Select Project Type",
            Step::ComplexitySelection => "Select Complexity",
            Step::OutputPath => "Output Path",
            Step::Scaffolding => "Scaffolding",
            Step::Done => "Done",
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Step::AppName | Step::OutputPath)
    }

    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Step::LanguageSelection
                | Step::FrameworkSelection
                | Step::ProjectTypeSelection
                | Step::ComplexitySelection
        )
    }
}

/// Labels shown for a selection step, in cursor order.
///
/// The framework list comes from the language registry, so cursor bounds and
/// the resolver cannot disagree.
pub fn option_labels(step: Step, language: Option<Language>) -> Vec<&'static str> {
    match step {
        Step::LanguageSelection => Language::ALL.iter().map(|l| l.display_name()).collect(),
        Step::FrameworkSelection => language
            .map(|l| l.frameworks().iter().map(|f| f.display_name()).collect())
            .unwrap_or_default(),
        Step::ProjectTypeSelection => ProjectType::ALL.iter().map(|p| p.display_name()).collect(),
        Step::ComplexitySelection => Complexity::ALL.iter().map(|c| c.display_name()).collect(),
        _ => Vec::new(),
    }
}

/// Number of cursor positions at a step (zero for non-selection steps)
pub fn option_count(step: Step, language: Option<Language>) -> usize {
    match step {
        Step::LanguageSelection => Language::ALL.len(),
        Step::FrameworkSelection => language.map(|l| l.frameworks().len()).unwrap_or(0),
        Step::ProjectTypeSelection => ProjectType::ALL.len(),
        Step::ComplexitySelection => Complexity::ALL.len(),
        _ => 0,
    }
}

/// Files written by a successful scaffolding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub written: Vec<String>,
}

/// Input delivered to the wizard, one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Full new content of the active text field
    TextEdit(String),
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    Resize { width: u16, height: u16 },
    ScaffoldSucceeded(ScaffoldReport),
    ScaffoldFailed(String),
}

/// Work requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub selection: Selection,
    pub output_path: String,
}

/// How the wizard ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
    Failed(String),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed | Outcome::Cancelled => 0,
            Outcome::Failed(_) => 1,
        }
    }
}

/// Side effect the driver must perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Resolve and materialize in the background, then report back
    Scaffold(ScaffoldRequest),
    Exit(Outcome),
}

/// Wizard state: current step, pending input and accumulated selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    pub cursor_index: usize,
    pub text_buffer: String,
    pub app_name: String,
    pub selected_language: Option<Language>,
    pub selected_framework: Option<Framework>,
    pub selected_project_type: Option<ProjectType>,
    pub selected_complexity: Option<Complexity>,
    pub output_path: String,
    pub last_error: Option<String>,
    pub report: Option<ScaffoldReport>,
    default_output: String,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::with_default_output(DEFAULT_OUTPUT_PATH)
    }

    /// Start a wizard whose output step is pre-filled with `default_output`
    pub fn with_default_output(default_output: impl Into<String>) -> Self {
        Self {
            step: Step::AppName,
            cursor_index: 0,
            text_buffer: String::new(),
            app_name: String::new(),
            selected_language: None,
            selected_framework: None,
            selected_project_type: None,
            selected_complexity: None,
            output_path: String::new(),
            last_error: None,
            report: None,
            default_output: default_output.into(),
        }
    }

    pub fn option_count(&self) -> usize {
        option_count(self.step, self.selected_language)
    }

    pub fn option_labels(&self) -> Vec<&'static str> {
        option_labels(self.step, self.selected_language)
    }

    /// The finalized selection, once every choice has been made
    pub fn selection(&self) -> Option<Selection> {
        let language = self.selected_language?;
        let framework = self.selected_framework?;
        if !language.supports(framework) {
            return None;
        }
        Some(Selection {
            language,
            framework,
            project_type: self.selected_project_type?,
            complexity: self.selected_complexity?,
        })
    }

    fn advance(&mut self, step: Step) {
        self.step = step;
        self.cursor_index = 0;
    }

    fn confirm_choice(&mut self) -> Effect {
        let idx = self.cursor_index;
        match self.step {
            Step::LanguageSelection => {
                self.selected_language = Language::ALL.get(idx).copied();
                self.selected_framework = None;
                self.advance(Step::FrameworkSelection);
            }
            Step::FrameworkSelection => {
                self.selected_framework = self
                    .selected_language
                    .and_then(|l| l.frameworks().get(idx).copied());
                self.advance(Step::ProjectTypeSelection);
            }
            Step::ProjectTypeSelection => {
                self.selected_project_type = ProjectType::ALL.get(idx).copied();
                self.advance(Step::ComplexitySelection);
            }
            Step::ComplexitySelection => {
                self.selected_complexity = Complexity::ALL.get(idx).copied();
                self.advance(Step::OutputPath);
                self.text_buffer = self.default_output.clone();
            }
            _ => {}
        }
        Effect::None
    }

    fn confirm_text(&mut self) -> Effect {
        let text = std::mem::take(&mut self.text_buffer);
        match self.step {
            Step::AppName => {
                self.app_name = text;
                self.advance(Step::LanguageSelection);
                Effect::None
            }
            Step::OutputPath => {
                self.output_path = text;
                self.step = Step::Scaffolding;
                match self.selection() {
                    Some(selection) => Effect::Scaffold(ScaffoldRequest {
                        selection,
                        output_path: self.output_path.clone(),
                    }),
                    None => {
                        let msg = "selection is incomplete; cannot scaffold".to_string();
                        self.last_error = Some(msg.clone());
                        Effect::Exit(Outcome::Failed(msg))
                    }
                }
            }
            _ => Effect::None,
        }
    }
}

/// Apply one event to the wizard.
///
/// Pure: the returned effect is the only way a transition asks for work.
/// Cursor movement saturates at both ends of the current option list.
pub fn update(mut state: WizardState, event: Event) -> (WizardState, Effect) {
    if event == Event::Cancel {
        return (state, Effect::Exit(Outcome::Cancelled));
    }

    let effect = match (state.step, event) {
        (_, Event::Resize { .. }) => Effect::None,

        (Step::Scaffolding, Event::ScaffoldSucceeded(report)) => {
            state.report = Some(report);
            state.step = Step::Done;
            Effect::None
        }
        (Step::Scaffolding, Event::ScaffoldFailed(msg)) => {
            state.last_error = Some(msg.clone());
            Effect::Exit(Outcome::Failed(msg))
        }
        (Step::Scaffolding, _) => Effect::None,

        // Any key on the summary screen leaves
        (Step::Done, Event::ScaffoldSucceeded(_) | Event::ScaffoldFailed(_)) => Effect::None,
        (Step::Done, _) => Effect::Exit(Outcome::Completed),

        (step, Event::TextEdit(text)) if step.is_text_input() => {
            state.text_buffer = text;
            Effect::None
        }
        (step, Event::Confirm) if step.is_text_input() => state.confirm_text(),

        (step, Event::MoveUp) if step.is_selection() => {
            state.cursor_index = state.cursor_index.saturating_sub(1);
            Effect::None
        }
        (step, Event::MoveDown) if step.is_selection() => {
            if state.cursor_index + 1 < state.option_count() {
                state.cursor_index += 1;
            }
            Effect::None
        }
        (step, Event::Confirm) if step.is_selection() => state.confirm_choice(),

        _ => Effect::None,
    };

    (state, effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: WizardState, events: &[Event]) -> (WizardState, Vec<Effect>) {
        let mut effects = Vec::new();
        let mut state = state;
        for event in events {
            let (next, effect) = update(state, event.clone());
            state = next;
            effects.push(effect);
        }
        (state, effects)
    }

    fn pick(index: usize) -> Vec<Event> {
        let mut events = vec![Event::MoveDown; index];
        events.push(Event::Confirm);
        events
    }

    fn script(name: &str, lang: usize, fw: usize, pt: usize, c: usize, out: &str) -> Vec<Event> {
        let mut events = vec![Event::TextEdit(name.to_string()), Event::Confirm];
        events.extend(pick(lang));
        events.extend(pick(fw));
        events.extend(pick(pt));
        events.extend(pick(c));
        events.push(Event::TextEdit(out.to_string()));
        events.push(Event::Confirm);
        events
    }

    #[test]
    fn test_app_name_confirm_moves_to_language() {
        let (state, effects) = apply(
            WizardState::new(),
            &[Event::TextEdit("demo".into()), Event::Confirm],
        );
        assert_eq!(state.step, Step::LanguageSelection);
        assert_eq!(state.app_name, "demo");
        assert_eq!(state.cursor_index, 0);
        assert!(state.text_buffer.is_empty());
        assert!(effects.iter().all(|e| *e == Effect::None));
    }

    #[test]
    fn test_empty_app_name_is_accepted() {
        let (state, _) = apply(WizardState::new(), &[Event::Confirm]);
        assert_eq!(state.step, Step::LanguageSelection);
        assert_eq!(state.app_name, "");
    }

    #[test]
    fn test_cursor_saturates_at_both_ends() {
        let (mut state, _) = apply(WizardState::new(), &[Event::Confirm]);
        state = update(state, Event::MoveUp).0;
        assert_eq!(state.cursor_index, 0);

        for _ in 0..10 {
            state = update(state, Event::MoveDown).0;
        }
        assert_eq!(state.cursor_index, 2);
    }

    #[test]
    fn test_framework_cursor_bound_follows_language() {
        for (lang_idx, expected_max) in [(0, 2), (1, 1), (2, 2)] {
            let mut events = vec![Event::Confirm];
            events.extend(pick(lang_idx));
            events.extend(vec![Event::MoveDown; 5]);
            let (state, _) = apply(WizardState::new(), &events);
            assert_eq!(state.step, Step::FrameworkSelection);
            assert_eq!(state.cursor_index, expected_max);
            assert_eq!(state.option_count(), expected_max + 1);
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds_for_every_step() {
        let mut state = WizardState::new();
        state = update(state, Event::Confirm).0;
        while state.step.is_selection() {
            for event in [Event::MoveDown, Event::MoveDown, Event::MoveDown, Event::MoveUp] {
                state = update(state, event).0;
                assert!(state.cursor_index < state.option_count());
            }
            state = update(state, Event::Confirm).0;
        }
        assert_eq!(state.step, Step::OutputPath);
    }

    #[test]
    fn test_complexity_confirm_prefills_default_output() {
        let mut events = vec![Event::Confirm];
        events.extend(pick(0));
        events.extend(pick(0));
        events.extend(pick(0));
        events.extend(pick(0));
        let (state, _) = apply(WizardState::new(), &events);
        assert_eq!(state.step, Step::OutputPath);
        assert_eq!(state.text_buffer, ".");

        let (state, _) = apply(WizardState::with_default_output("/tmp/out"), &events);
        assert_eq!(state.text_buffer, "/tmp/out");
    }

    #[test]
    fn test_output_confirm_requests_scaffold() {
        let (state, effects) = apply(WizardState::new(), &script("demo", 0, 0, 1, 0, "."));
        assert_eq!(state.step, Step::Scaffolding);
        assert_eq!(state.output_path, ".");
        assert_eq!(
            effects.last(),
            Some(&Effect::Scaffold(ScaffoldRequest {
                selection: Selection {
                    language: Language::Go,
                    framework: Framework::Gin,
                    project_type: ProjectType::Cli,
                    complexity: Complexity::Minimal,
                },
                output_path: ".".to_string(),
            }))
        );
    }

    #[test]
    fn test_javascript_fastify_selection() {
        let (state, _) = apply(WizardState::new(), &script("web", 1, 1, 0, 2, "out"));
        let selection = state.selection();
        assert_eq!(
            selection.map(|s| (s.language, s.framework, s.project_type, s.complexity)),
            Some((
                Language::JavaScript,
                Framework::Fastify,
                ProjectType::WebApp,
                Complexity::Enterprise
            ))
        );
    }

    #[test]
    fn test_navigation_ignored_while_scaffolding() {
        let (state, _) = apply(WizardState::new(), &script("demo", 0, 0, 0, 0, "."));
        let before = state.clone();
        let (state, effects) = apply(
            state,
            &[
                Event::MoveDown,
                Event::Confirm,
                Event::TextEdit("x".into()),
            ],
        );
        assert_eq!(state, before);
        assert!(effects.iter().all(|e| *e == Effect::None));
    }

    #[test]
    fn test_scaffold_success_moves_to_done() {
        let (state, _) = apply(WizardState::new(), &script("demo", 0, 0, 0, 0, "."));
        let report = ScaffoldReport {
            written: vec!["main.go".into(), "go.mod".into()],
        };
        let (state, effect) = update(state, Event::ScaffoldSucceeded(report.clone()));
        assert_eq!(state.step, Step::Done);
        assert_eq!(state.report, Some(report));
        assert_eq!(effect, Effect::None);

        let (_, effect) = update(state, Event::Confirm);
        assert_eq!(effect, Effect::Exit(Outcome::Completed));
    }

    #[test]
    fn test_scaffold_failure_exits_with_error() {
        let (state, _) = apply(WizardState::new(), &script("demo", 0, 0, 0, 0, "."));
        let (state, effect) = update(state, Event::ScaffoldFailed("disk full".into()));
        assert_eq!(state.last_error.as_deref(), Some("disk full"));
        assert_eq!(effect, Effect::Exit(Outcome::Failed("disk full".into())));
        assert_eq!(Outcome::Failed("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_cancel_at_any_step_never_requests_scaffold() {
        let full = script("demo", 2, 1, 2, 1, "out");
        for cut in 0..full.len() {
            let mut events = full[..cut].to_vec();
            events.push(Event::Cancel);
            let (_, effects) = apply(WizardState::new(), &events);
            assert!(
                !effects.iter().any(|e| matches!(e, Effect::Scaffold(_))),
                "scaffold requested before cancel at {}",
                cut
            );
            assert_eq!(effects.last(), Some(&Effect::Exit(Outcome::Cancelled)));
        }
    }

    #[test]
    fn test_resize_does_not_change_state() {
        let state = WizardState::new();
        let (next, effect) = update(
            state.clone(),
            Event::Resize {
                width: 80,
                height: 24,
            },
        );
        assert_eq!(next, state);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_text_edits_ignored_on_selection_steps() {
        let (state, _) = apply(WizardState::new(), &[Event::Confirm]);
        let (next, _) = update(state.clone(), Event::TextEdit("go".into()));
        assert_eq!(next, state);
    }
}
