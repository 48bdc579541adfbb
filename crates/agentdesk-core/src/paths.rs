use std::path::{Path, PathBuf};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const DESK_DIR: &str = ".agentdesk";
pub const CLIENTS_DIR: &str = ".agentdesk/clients";
pub const LINKS_DIR: &str = ".agentdesk/links";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn clients_dir(root: &Path) -> PathBuf {
    root.join(CLIENTS_DIR)
}

pub fn client_path(root: &Path, id: Uuid) -> PathBuf {
    clients_dir(root).join(format!("{id}.json"))
}

pub fn links_dir(root: &Path) -> PathBuf {
    root.join(LINKS_DIR)
}

pub fn link_path(root: &Path, id: Uuid) -> PathBuf {
    links_dir(root).join(format!("{id}.json"))
}

pub fn is_initialized(root: &Path) -> bool {
    root.join(DESK_DIR).is_dir()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
