use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("pyfresh")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate Python project structures with configurable templates")
        .long_about(
            "pyfresh creates a new Python project directory from a named template, \
            merging built-in defaults with an optional config file and command-line \
            overrides. Use --dry-run to preview what would be created.",
        )
        .arg(
            Arg::new("project_name")
                .help("Name of the project to create")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("author")
                .long("author")
                .help("Project author name (overrides config)"),
        )
        .arg(
            Arg::new("email")
                .long("email")
                .help("Project author email (overrides config)"),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .help("Project description"),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .help("Project template to use")
                .value_parser(["standard", "minimal", "cli", "web"])
                .default_value("standard"),
        )
        .arg(
            Arg::new("tool")
                .long("tool")
                .help("Dependency management tool")
                .value_parser(["poetry", "uv"])
                .default_value("poetry"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Output directory for the project (default: current directory)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .help("Overwrite existing project directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be created without actually creating files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_minimal_invocation() {
        let matches = build_cli()
            .try_get_matches_from(["pyfresh", "demo"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("project_name").unwrap(),
            "demo"
        );
        assert_eq!(matches.get_one::<String>("template").unwrap(), "standard");
        assert_eq!(matches.get_one::<String>("tool").unwrap(), "poetry");
        assert!(!matches.get_flag("force"));
        assert!(!matches.get_flag("dry-run"));
    }

    #[test]
    fn test_cli_rejects_unknown_template() {
        let result = build_cli().try_get_matches_from([
            "pyfresh",
            "demo",
            "--template",
            "nonexistent",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_full_invocation() {
        let matches = build_cli()
            .try_get_matches_from([
                "pyfresh",
                "demo",
                "--author",
                "Jane Doe",
                "--email",
                "jane@example.com",
                "--template",
                "cli",
                "--tool",
                "uv",
                "--output-dir",
                "/tmp/projects",
                "--force",
                "--dry-run",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<String>("author").unwrap(), "Jane Doe");
        assert_eq!(matches.get_one::<String>("tool").unwrap(), "uv");
        assert_eq!(
            matches.get_one::<PathBuf>("output-dir").unwrap(),
            &PathBuf::from("/tmp/projects")
        );
        assert!(matches.get_flag("force"));
        assert!(matches.get_flag("dry-run"));
    }
}
