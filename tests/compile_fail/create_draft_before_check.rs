// ABOUTME: Compile-fail test verifying a draft cannot skip the duplicate check.
// ABOUTME: This test should fail to compile, validating state machine safety.

use cutter::adapters::ReleaseHost;
use cutter::release::{Release, Tagged};

async fn try_draft_without_check<H: ReleaseHost>(release: Release<Tagged>, host: &H) {
    // ERROR: create_draft() method doesn't exist on Release<Tagged>
    release.create_draft(host).await;
}

fn main() {}
