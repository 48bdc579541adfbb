//! Bundling of generated artifacts into named files.
//!
//! The bundle is what a client hand-off looks like on disk: every
//! generated artifact under a stable filename, plus the production
//! checklist once the client has been approved.

use crate::client::ClientRecord;
use crate::prompts;

// ---------------------------------------------------------------------------
// ExportFile
// ---------------------------------------------------------------------------

/// A single file in an export bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

impl ExportFile {
    fn new(filename: &str, contents: impl Into<String>) -> Self {
        Self {
            filename: filename.to_string(),
            contents: contents.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// Collects every stored artifact for `client` into named files suitable
/// for download or archival. Artifacts that were never generated are
/// skipped; the production checklist is included only once the client
/// has been approved.
pub fn bundle(client: &ClientRecord) -> Vec<ExportFile> {
    let mut files = Vec::new();

    if let Some(config) = &client.artifacts.demo_config {
        files.push(ExportFile::new("demo_config.json", config));
    }
    if let Some(prompt) = &client.artifacts.demo_system_prompt {
        files.push(ExportFile::new("demo_system_prompt.txt", prompt));
    }
    if let Some(instructions) = &client.artifacts.client_test_instructions {
        files.push(ExportFile::new("client_test_instructions.txt", instructions));
    }
    if let Some(prompt) = &client.artifacts.production_system_prompt {
        files.push(ExportFile::new("production_system_prompt.txt", prompt));
    }
    if client.status.is_approved() {
        files.push(ExportFile::new(
            "production_checklist.md",
            prompts::production_checklist(client),
        ));
    }

    files
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
