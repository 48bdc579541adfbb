use agentdesk_core::{client::ClientRecord, export};
use anyhow::Context;
use std::path::Path;
use uuid::Uuid;

pub fn run(root: &Path, id: Uuid, out: &Path, json: bool) -> anyhow::Result<()> {
    let client =
        ClientRecord::load(root, id).with_context(|| format!("client '{id}' not found"))?;

    let files = export::bundle(&client);
    if files.is_empty() {
        anyhow::bail!(
            "nothing to export for '{}': generate demo artifacts first",
            client.business_name
        );
    }

    std::fs::create_dir_all(out)
        .with_context(|| format!("failed to create {}", out.display()))?;

    for file in &files {
        let path = out.join(&file.filename);
        std::fs::write(&path, &file.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if json {
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        crate::output::print_json(&serde_json::json!({
            "client": client.id,
            "out": out,
            "files": names,
        }))?;
    } else {
        println!(
            "Exported {} file(s) for {} to {}",
            files.len(),
            client.business_name,
            out.display()
        );
        for file in &files {
            println!("  {}", file.filename);
        }
    }
    Ok(())
}
