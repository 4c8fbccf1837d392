//! Entry points for the create command: interactive wizard or `--yes` mode

use super::terminal;
use crate::config::ScaffoldConfig;
use crate::driver::{scripted_events, App};
use crate::materialize::FsMaterializer;
use crate::matrix::{Complexity, Framework, Language, ProjectType, Selection};
use crate::wizard::{next_steps, render, Outcome, WizardState};
use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

/// App name used in `--yes` mode when none is given
pub const DEFAULT_APP_NAME: &str = "app";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Application name
    pub name: Option<String>,

    pub language: Option<Language>,

    pub framework: Option<Framework>,

    pub project_type: Option<ProjectType>,

    pub complexity: Option<Complexity>,

    /// Output directory for the generated files
    pub output: Option<String>,

    /// Overwrite files that already exist
    pub force: bool,

    /// Non-interactive mode: take choices from flags, first option otherwise
    pub yes: bool,
}

/// Run the create command
pub async fn run(args: CreateArgs) -> Result<Outcome> {
    let config = ScaffoldConfig::from_env().with_overwrite(args.force);
    let materializer = Arc::new(FsMaterializer::from_config(&config));
    let app = App::new(
        WizardState::with_default_output(config.default_output.clone()),
        materializer,
    );

    if args.yes {
        run_scripted(app, &args, &config).await
    } else {
        run_wizard(app).await
    }
}

async fn run_wizard(app: App<FsMaterializer>) -> Result<Outcome> {
    let (outcome, state) = terminal::run_interactive(app).await?;

    match &outcome {
        Outcome::Completed => print!("{}", render(&state)),
        Outcome::Failed(_) => eprint!("{}", render(&state)),
        Outcome::Cancelled => println!("{}", "Bye!".dimmed()),
    }

    Ok(outcome)
}

async fn run_scripted(
    mut app: App<FsMaterializer>,
    args: &CreateArgs,
    config: &ScaffoldConfig,
) -> Result<Outcome> {
    cliclack::intro("gen-code")?;

    let selection = selection_from_args(args)?;
    let name = args.name.as_deref().unwrap_or(DEFAULT_APP_NAME);
    let output = args
        .output
        .as_deref()
        .unwrap_or(config.default_output.as_str());

    cliclack::log::info(format!(
        "{}: {} / {} / {} / {}",
        name,
        selection.language,
        selection.framework,
        selection.project_type,
        selection.complexity
    ))?;
    if config.overwrite {
        cliclack::log::warning("Existing files will be overwritten")?;
    }

    let spinner = cliclack::spinner();
    spinner.start("Generating project...");

    let outcome = app
        .run_script(scripted_events(name, &selection, output))
        .await;

    match &outcome {
        Outcome::Completed => {
            let written = app
                .state()
                .report
                .as_ref()
                .map(|r| r.written.len())
                .unwrap_or(0);
            spinner.stop(format!("Created {} files in {}", written, output));
            print_next_steps(&selection, output)?;
        }
        Outcome::Failed(msg) => {
            spinner.error("Scaffolding failed");
            cliclack::log::error(msg)?;
        }
        Outcome::Cancelled => {
            spinner.stop("Cancelled");
        }
    }

    Ok(outcome)
}

/// Fill unset choices with the first option of each step.
///
/// A framework alone implies its language; a framework that does not belong
/// to the given language is rejected.
pub fn selection_from_args(args: &CreateArgs) -> Result<Selection> {
    let language = args
        .language
        .or_else(|| args.framework.and_then(|fw| fw.language()))
        .unwrap_or(Language::ALL[0]);

    let framework = match args.framework {
        Some(fw) if language.supports(fw) => fw,
        Some(fw) => {
            let available: Vec<&str> = language
                .frameworks()
                .iter()
                .map(|f| f.display_name())
                .collect();
            anyhow::bail!(
                "Framework '{}' is not available for {}. Available: {}",
                fw,
                language,
                available.join(", ")
            );
        }
        None => match language.frameworks().first() {
            Some(fw) => *fw,
            None => anyhow::bail!("No frameworks registered for {}", language),
        },
    };

    Ok(Selection {
        language,
        framework,
        project_type: args.project_type.unwrap_or(ProjectType::ALL[0]),
        complexity: args.complexity.unwrap_or(Complexity::ALL[0]),
    })
}

fn print_next_steps(selection: &Selection, output: &str) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in next_steps(selection, output).iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
