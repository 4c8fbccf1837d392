//! gen-code - interactive project configurator

use anyhow::Result;
use clap::{Parser, Subcommand};
use scaffolder_core::tui::{self, CreateArgs};
use scaffolder_core::{plan, Complexity, Framework, Language, Outcome, ProjectType};

#[derive(Parser, Debug)]
#[command(name = "gen-code")]
#[command(about = "Scaffold Go, JavaScript and Python projects from a few choices")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project (interactive unless --yes is given)
    Create(CliCreateArgs),
    /// Show the files a set of choices would generate, without writing them
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Application name
    #[arg(short, long, requires = "yes")]
    pub name: Option<String>,

    /// Language (go, javascript, python)
    #[arg(short, long, requires = "yes")]
    pub language: Option<Language>,

    /// Framework (gin, echo, fiber, express, fastify, flask, fastapi, django)
    #[arg(short, long, requires = "yes")]
    pub framework: Option<Framework>,

    /// Project type (webapp, cli, backend)
    #[arg(short, long = "project-type", requires = "yes")]
    pub project_type: Option<ProjectType>,

    /// Complexity (minimal, standard, enterprise)
    #[arg(short, long, requires = "yes")]
    pub complexity: Option<Complexity>,

    /// Output directory
    #[arg(short, long, requires = "yes")]
    pub output: Option<String>,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,

    /// Non-interactive mode: use flags, defaulting to the first option of each step
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            language: args.language,
            framework: args.framework,
            project_type: args.project_type,
            complexity: args.complexity,
            output: args.output,
            force: args.force,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    #[arg(short, long)]
    pub language: Option<Language>,

    #[arg(short, long)]
    pub framework: Option<Framework>,

    #[arg(short, long = "project-type")]
    pub project_type: Option<ProjectType>,

    #[arg(short, long)]
    pub complexity: Option<Complexity>,

    /// Print the plan as YAML including file contents
    #[arg(long)]
    pub yaml: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tui::restore_terminal();
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside raw mode counts as an explicit cancel
    ctrlc::set_handler(move || {
        tui::restore_terminal();
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(0);
    })
    .ok();

    let args = Args::parse();

    let create_args = match args.command {
        Some(Command::Plan(plan_args)) => return run_plan(plan_args),
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand provided, default to interactive create
        None => CreateArgs::default(),
    };

    let result = scaffolder_core::run(create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result? {
        Outcome::Failed(_) => std::process::exit(1),
        Outcome::Completed | Outcome::Cancelled => Ok(()),
    }
}

fn run_plan(args: PlanArgs) -> Result<()> {
    let selection = tui::selection_from_args(&CreateArgs {
        language: args.language,
        framework: args.framework,
        project_type: args.project_type,
        complexity: args.complexity,
        ..CreateArgs::default()
    })?;

    if args.yaml {
        print!("{}", plan::to_yaml(&selection)?);
    } else {
        plan::print_plan(&selection);
    }

    Ok(())
}
