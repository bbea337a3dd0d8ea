use std::path::PathBuf;

use clap::ArgMatches;
use tracing::warn;

use pyfresh_core::{
    GenerateOutcome, GenerateRequest, MaterializeResult, NodeKind, Overrides, PreviewEntry,
    events, project, registry,
};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let overrides = Overrides {
        project_name: matches
            .get_one::<String>("project_name")
            .cloned()
            .unwrap_or_default(),
        author: matches.get_one::<String>("author").cloned(),
        email: matches.get_one::<String>("email").cloned(),
        description: matches.get_one::<String>("description").cloned(),
        template: matches.get_one::<String>("template").cloned(),
        tool: matches.get_one::<String>("tool").cloned(),
        output_dir: matches
            .get_one::<PathBuf>("output-dir")
            .cloned()
            .or_else(|| std::env::current_dir().ok()),
        force: matches.get_flag("force"),
        dry_run: matches.get_flag("dry-run"),
    };

    let request = GenerateRequest {
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        overrides,
    };

    let outcome = pyfresh_core::generate(&request).inspect_err(|e| events::log_app_error(e))?;

    match &outcome.result {
        MaterializeResult::Preview { root, entries } => print_preview(&outcome, root, entries),
        MaterializeResult::Written { root, .. } => {
            // Generation already succeeded; a missing git is a warning, not an error.
            if let Err(e) = project::git::init_repository(root) {
                warn!(event = "cli.git_init_skipped", error = %e);
                println!("Warning: git not available - skipping repository initialization");
            } else {
                println!("Initialized git repository");
            }
            print_success(&outcome, root);
        }
    }

    Ok(())
}

fn print_preview(outcome: &GenerateOutcome, root: &std::path::Path, entries: &[PreviewEntry]) {
    let config = &outcome.config;
    let descriptor = registry::get(config.template);

    println!(
        "Dry run - would create project '{}' in '{}'",
        config.project_name,
        root.display()
    );
    println!("Template: {} ({})", config.template, descriptor.description);
    println!("Tool: {}", config.tool);
    println!(
        "Author: {} <{}>",
        config.author_name.as_deref().unwrap_or(""),
        config.author_email.as_deref().unwrap_or("")
    );
    println!();
    println!("Files that would be created:");
    for entry in entries {
        match entry.kind {
            NodeKind::Directory => {
                println!("  {}/{}/", config.project_name, entry.path.display())
            }
            NodeKind::File => println!("  {}/{}", config.project_name, entry.path.display()),
        }
    }
}

fn print_success(outcome: &GenerateOutcome, root: &std::path::Path) {
    let config = &outcome.config;

    println!(
        "Project '{}' created successfully!",
        config.project_name
    );
    println!("Location: {}", root.display());
    println!();
    println!("Next steps:");
    println!("  cd {}", config.project_name);
    println!("  {}", config.tool.install_command());
    println!("  make test");
    println!("  git add . && git commit -m 'Initial commit'");
}
