// ABOUTME: Compile-fail test verifying host ids cannot stand in for versions.
// ABOUTME: This test should fail to compile, validating newtype separation.

use cutter::types::{ReleaseId, VersionId};

fn tag_name(version: &VersionId) -> &str {
    version.as_str()
}

fn main() {
    let id = ReleaseId::new(42);

    // ERROR: expected `&VersionId`, found `&ReleaseId`
    tag_name(&id);
}
