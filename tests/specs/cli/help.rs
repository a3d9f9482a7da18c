//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("validate")
        .stdout_has("check")
        .stdout_has("types")
        .stdout_has("--user-space");
}

#[test]
fn missing_command_is_a_usage_error() {
    let run = cli().fails();
    assert_eq!(run.code(), Some(2));
    run.stderr_has("Usage");
}
