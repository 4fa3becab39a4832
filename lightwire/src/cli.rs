//! Command line entry point shared by lightwire applications

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use lightwire_di::DiBuilder;

use crate::{
    errors::BootError,
    logging,
    project::Project,
    routing::{Request, StaticRouter},
};

/// Content type that switches error output to JSON
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Command line interface of a lightwire application
#[derive(Parser, Debug)]
#[command(about = "Wires an application from its configuration and runs it")]
#[command(version)]
pub struct Cli {
    /// Directory holding parameters.json, settings.json and dependencies.json
    #[arg(short, long, env = "LIGHTWIRE_CONFIG_DIR", default_value = "config")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Dispatch a request to the application starting point
    Serve {
        #[arg(long)]
        controller: String,
        #[arg(long)]
        action: String,
    },
    /// Construct and execute a single command component
    Command { name: String },
}

/// Parses the command line and runs the application wired by `builder`
pub fn run(builder: DiBuilder) -> ExitCode {
    let cli = Cli::parse();

    let project = match Project::load(&cli.config, builder) {
        Ok(project) => project,
        Err(err) => {
            eprintln!("{}", render_error(&err, None));
            return ExitCode::FAILURE;
        }
    };

    let configuration = project.configuration();
    if let Err(err) = logging::init_logging(configuration.environment()) {
        eprintln!("{err}");
    }

    match dispatch(&project, &cli.mode) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(kind = err.kind(), "Run aborted: {err}");
            eprintln!(
                "{}",
                render_error(&err, Some(configuration.default_content_type()))
            );
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected mode
///
/// A command reporting failure exits with a failure code.
pub fn dispatch(project: &Project, mode: &Mode) -> Result<ExitCode, BootError> {
    match mode {
        Mode::Serve { controller, action } => {
            project.run(&StaticRouter(Request::new(controller, action)))?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::Command { name } => {
            let result = project.execute_command(name)?;
            println!("{result}");

            Ok(if result.status() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Renders an error the way the application answers with `content_type`
pub fn render_error(err: &BootError, content_type: Option<&str>) -> String {
    match content_type {
        Some(JSON_CONTENT_TYPE) => serde_json::json!({
            "error": err.to_string(),
            "kind": err.kind(),
        })
        .to_string(),
        _ => format!("{} error: {err}", err.kind()),
    }
}
