//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_fetch() {
    match parse(&["mprep", "fetch"]) {
        CliCommand::Fetch { project_root } => assert!(project_root.is_none()),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_project_root() {
    match parse(&["mprep", "fetch", "--project-root", "/work/app"]) {
        CliCommand::Fetch { project_root } => {
            assert_eq!(project_root.as_deref(), Some(Path::new("/work/app")));
        }
        _ => panic!("expected Fetch with --project-root"),
    }
}

#[test]
fn cli_parse_extract() {
    match parse(&["mprep", "extract"]) {
        CliCommand::Extract { project_root } => assert!(project_root.is_none()),
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_verify_project_root() {
    match parse(&["mprep", "verify", "--project-root", "."]) {
        CliCommand::Verify { project_root } => {
            assert_eq!(project_root.as_deref(), Some(Path::new(".")));
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["mprep", "checksum", "assets/models/model.onnx"]) {
        CliCommand::Checksum { path } => {
            assert_eq!(path, Path::new("assets/models/model.onnx"));
        }
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["mprep"]).is_err());
}
