// ABOUTME: Compile-fail test verifying push cannot be called before a draft exists.
// ABOUTME: This test should fail to compile, validating state machine safety.

use cutter::adapters::SourceControl;
use cutter::release::{Release, Tagged};

async fn try_push_without_draft<G: SourceControl>(release: Release<Tagged>, scm: &G) {
    // ERROR: push() method doesn't exist on Release<Tagged>
    release.push(scm).await;
}

fn main() {}
