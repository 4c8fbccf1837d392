//! Text projection of the wizard state

use super::state::{Step, WizardState};
use crate::matrix::{Framework, Language, Selection};
use colored::Colorize;

const BANNER: &str = r#"
   __ _  ___ _ __         ___ ___   __| | ___
  / _` |/ _ \ '_ \ _____ / __/ _ \ / _` |/ _ \
 | (_| |  __/ | | |_____| (_| (_) | (_| |  __/
  \__, |\___|_| |_|      \___\___/ \__,_|\___|
  |___/
"#;

/// Render the current state as display text. Pure.
pub fn render(state: &WizardState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.last_error {
        out.push_str(&format!(
            "{} {}\n",
            "Error during scaffolding:".red().bold(),
            error
        ));
        return out;
    }

    match state.step {
        Step::Scaffolding => {
            out.push_str(&format!("{}\n", "Generating your project...".yellow()));
            return out;
        }
        Step::Done => {
            out.push_str(&format!("{}\n", BANNER.cyan().bold()));
            render_summary(state, &mut out);
            return out;
        }
        _ => {}
    }

    out.push_str(&format!("{}\n", BANNER.cyan().bold()));
    if let Some(n) = state.step.number() {
        out.push_str(&format!(
            "{}\n\n",
            format!("Step {}/6: {}", n, state.step.title())
                .magenta()
                .bold()
        ));
    }

    if state.step.is_text_input() {
        let placeholder = match state.step {
            Step::AppName => "Enter app name...",
            _ => "Enter output path...",
        };
        if state.text_buffer.is_empty() {
            out.push_str(&format!("> {}\n\n", placeholder.dimmed()));
        } else {
            out.push_str(&format!("> {}\n\n", state.text_buffer));
        }
        let hint = match state.step {
            Step::AppName => "(press enter to continue)",
            _ => "(press enter to generate)",
        };
        out.push_str(&format!("{}\n", hint.dimmed()));
        return out;
    }

    for (i, label) in state.option_labels().iter().enumerate() {
        if i == state.cursor_index {
            out.push_str(&format!("{} {}\n", ">".cyan().bold(), label.cyan()));
        } else {
            out.push_str(&format!("  {}\n", label));
        }
    }
    out.push_str(&format!(
        "\n{}\n",
        "↑↓ navigate • enter confirm • q quit".dimmed()
    ));

    out
}

fn render_summary(state: &WizardState, out: &mut String) {
    out.push_str(&format!(
        "{}\n\n",
        "Success! Your project has been scaffolded.".green().bold()
    ));

    let field = |label: &str, value: &str| format!("{} {}\n", label.bright_black(), value);
    out.push_str(&field("Project:", &state.app_name));
    if let Some(selection) = state.selection() {
        out.push_str(&field("Language:", selection.language.display_name()));
        out.push_str(&field("Framework:", selection.framework.display_name()));
        out.push_str(&field("Type:", selection.project_type.display_name()));
        out.push_str(&field("Complexity:", selection.complexity.display_name()));
    }
    out.push_str(&field("Directory:", &state.output_path));
    if let Some(report) = &state.report {
        out.push_str(&field(
            "Files:",
            &format!("{} files written", report.written.len()),
        ));
    }

    if let Some(selection) = state.selection() {
        out.push_str(&format!("\n{}\n", "Next steps".bold()));
        for (i, step) in next_steps(&selection, &state.output_path)
            .iter()
            .enumerate()
        {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
    }

    out.push_str(&format!("\n{}\n", "Press any key to exit.".dimmed()));
}

/// Commands to get the generated project running
pub fn next_steps(selection: &Selection, output_path: &str) -> Vec<String> {
    let mut steps = Vec::new();

    if !output_path.is_empty() && output_path != "." {
        steps.push(format!("cd {}", output_path));
    }

    match selection.language {
        Language::Go => {
            steps.push("go mod tidy".to_string());
            steps.push("go run .".to_string());
        }
        Language::JavaScript => {
            steps.push(format!(
                "npm install {}",
                selection.framework.display_name().to_lowercase()
            ));
            steps.push("npm start".to_string());
        }
        Language::Python => {
            steps.push("python3 -m venv .venv && .venv/bin/pip install -r requirements.txt".to_string());
            let run = match selection.framework {
                Framework::FastApi => "uvicorn app:app --reload",
                Framework::Django => "python3 app.py runserver",
                _ => "flask --app app run",
            };
            steps.push(run.to_string());
        }
    }

    steps
}
