// ABOUTME: Tests for the script-backed version, notes and build collaborators.
// ABOUTME: Runs small shell scripts that record their arguments and environment.

mod support;

use cutter::adapters::{
    BuildTrigger, CommandBuildTrigger, CommandNotesGenerator, CommandVersionResolver,
    NotesGenerator, TriggerError, TriggerOptions, VersionError, VersionResolver,
};
use cutter::release::ReleaseChannel;
use cutter::types::VersionId;
use nonempty::NonEmpty;
use std::fs;
use std::path::Path;

fn sh(script: &str) -> NonEmpty<String> {
    NonEmpty::from(("sh".to_string(), vec![script.to_string()]))
}

fn write_script(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn recorded(dir: &Path) -> String {
    fs::read_to_string(dir.join("calls.log")).unwrap()
}

#[tokio::test]
async fn version_command_gets_channel_and_preview_flag() {
    support::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write_script(
        dir.path(),
        "bump.sh",
        "echo \"$@\" >> calls.log\necho 'Bumped to: 5.0.0-beta.2'\n",
    );
    let resolver = CommandVersionResolver::new(sh("bump.sh"), dir.path());

    let preview = resolver.resolve(ReleaseChannel::Beta, true).await.unwrap();
    let actual = resolver.resolve(ReleaseChannel::Beta, false).await.unwrap();

    assert_eq!(preview.as_str(), "v5.0.0-beta.2");
    assert_eq!(actual, preview);
    assert_eq!(
        recorded(dir.path()),
        "--bump beta --dry-run\n--bump beta\n"
    );
}

#[tokio::test]
async fn version_command_failure_keeps_stderr() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "bump.sh", "echo 'dirty tree' >&2\nexit 1\n");
    let resolver = CommandVersionResolver::new(sh("bump.sh"), dir.path());

    let err = resolver
        .resolve(ReleaseChannel::Stable, true)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        VersionError::CommandFailed { exit_code: Some(1), ref stderr } if stderr == "dirty tree"
    ));
}

#[tokio::test]
async fn empty_version_output_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "bump.sh", "echo 'version:'\n");
    let resolver = CommandVersionResolver::new(sh("bump.sh"), dir.path());

    let err = resolver
        .resolve(ReleaseChannel::Stable, true)
        .await
        .unwrap_err();

    assert!(matches!(err, VersionError::InvalidVersion(_)));
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let argv = NonEmpty::new("cutter-no-such-program".to_string());
    let resolver = CommandVersionResolver::new(argv, dir.path());

    let err = resolver
        .resolve(ReleaseChannel::Stable, true)
        .await
        .unwrap_err();

    assert!(matches!(err, VersionError::Spawn(_)));
}

#[tokio::test]
async fn notes_command_gets_branch_and_version() {
    let dir = tempfile::tempdir().unwrap();
    write_script(
        dir.path(),
        "notes.sh",
        "echo \"$@\" >> calls.log\nprintf '* Fixed a leak.\\n* Added an API.\\n'\n",
    );
    let generator = CommandNotesGenerator::new(sh("notes.sh"), dir.path());

    let notes = generator
        .generate("2-0-x", &VersionId::new("v2.0.1").unwrap())
        .await
        .unwrap();

    assert_eq!(notes.text, "* Fixed a leak.\n* Added an API.");
    assert_eq!(notes.warning, None);
    assert_eq!(recorded(dir.path()), "--branch 2-0-x --version v2.0.1\n");
}

#[tokio::test]
async fn build_command_receives_request_in_environment() {
    let dir = tempfile::tempdir().unwrap();
    write_script(
        dir.path(),
        "build.sh",
        "echo \"$CUTTER_BRANCH $CUTTER_PUBLISH_TO_HOST $CUTTER_AUTOMATIC_RELEASE\" >> calls.log\n",
    );
    let trigger = CommandBuildTrigger::new(sh("build.sh"), dir.path());
    let options = TriggerOptions {
        publish_to_host: true,
        automatic: false,
    };

    trigger.trigger("3-0-x", options).await.unwrap();

    assert_eq!(recorded(dir.path()), "3-0-x true false\n");
}

#[tokio::test]
async fn build_command_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "build.sh", "echo 'CI is down' >&2\nexit 2\n");
    let trigger = CommandBuildTrigger::new(sh("build.sh"), dir.path());
    let options = TriggerOptions {
        publish_to_host: true,
        automatic: true,
    };

    let err = trigger.trigger("main", options).await.unwrap_err();

    assert!(matches!(err, TriggerError::CommandFailed { exit_code: Some(2), .. }));
    assert!(err.to_string().contains("CI is down"));
}
