// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds git provenance, reported by the hook at debug log level.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a git checkout vergen emits placeholder values instead of failing.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
