use agentdesk_core::{io, paths};
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing agentdesk in: {}", root.display());

    let dirs = [paths::DESK_DIR, paths::CLIENTS_DIR, paths::LINKS_DIR];
    for dir in dirs {
        let p = root.join(dir);
        let existed = p.is_dir();
        io::ensure_dir(&p).with_context(|| format!("failed to create {}", p.display()))?;
        if existed {
            println!("  exists:  {dir}/");
        } else {
            println!("  created: {dir}/");
        }
    }

    println!("\nNext: agentdesk client quick \"Business Name\" \"Industry\" \"Service Area\"");
    Ok(())
}
