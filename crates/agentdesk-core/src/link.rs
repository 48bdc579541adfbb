//! Shareable, time-boxed, usage-tracked demo links.
//!
//! A link references a client by id only. Deleting a link never touches the
//! client, and deleting a client leaves its links behind unless the caller
//! purges them explicitly.

use crate::client::ClientRecord;
use crate::error::{DeskError, Result};
use crate::paths;
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use uuid::Uuid;

const SLUG_MAX_LEN: usize = 30;
const SLUG_SUFFIX_LEN: usize = 4;
const SLUG_ATTEMPTS: usize = 5;

pub const DEFAULT_MAX_DURATION_SECONDS: u32 = 120;

// ---------------------------------------------------------------------------
// DemoLink
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoLink {
    pub id: Uuid,
    pub client_id: Uuid,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    /// `None` means the link never expires.
    pub expires_at: Option<DateTime<Utc>>,
    pub max_duration_seconds: u32,
    pub is_active: bool,
    pub usage_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_phone_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LinkOptions {
    /// `None` mints a link that never expires.
    pub expires_in_days: Option<i64>,
    pub max_duration_seconds: u32,
    pub demo_phone_number: Option<String>,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            expires_in_days: Some(7),
            max_duration_seconds: DEFAULT_MAX_DURATION_SECONDS,
            demo_phone_number: None,
        }
    }
}

/// Why a link is, or is not, usable right now. `Expired` and `Inactive` are
/// distinct so the boundary layer can show the right message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkValidity {
    Valid,
    Expired,
    Inactive,
}

impl DemoLink {
    /// Mint and persist a link for the client, with a slug unique among the
    /// stored links. The random suffix makes collisions astronomically
    /// unlikely; a bounded retry covers the rest.
    pub fn create(root: &Path, client: &ClientRecord, options: LinkOptions) -> Result<Self> {
        if !paths::is_initialized(root) {
            return Err(DeskError::NotInitialized);
        }

        let taken: HashSet<String> = Self::list(root)?.into_iter().map(|l| l.slug).collect();
        let base = slugify(&client.business_name);

        let mut slug = None;
        for _ in 0..SLUG_ATTEMPTS {
            let candidate = format!("{base}-{}", slug_suffix());
            if !taken.contains(&candidate) {
                slug = Some(candidate);
                break;
            }
        }
        let slug = slug.ok_or_else(|| DeskError::SlugGeneration(client.business_name.clone()))?;

        let now = Utc::now();
        let link = Self {
            id: Uuid::new_v4(),
            client_id: client.id,
            slug,
            created_at: now,
            expires_at: options.expires_in_days.map(|d| now + Duration::days(d)),
            max_duration_seconds: options.max_duration_seconds,
            is_active: true,
            usage_count: 0,
            demo_phone_number: options.demo_phone_number,
        };
        link.save(root)?;
        Ok(link)
    }

    // ---------------------------------------------------------------------------
    // Validity
    // ---------------------------------------------------------------------------

    /// Pure check against an explicit clock reading; never mutates the link.
    pub fn validity_at(&self, at: DateTime<Utc>) -> LinkValidity {
        if !self.is_active {
            return LinkValidity::Inactive;
        }
        match self.expires_at {
            Some(expires) if expires <= at => LinkValidity::Expired,
            _ => LinkValidity::Valid,
        }
    }

    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.validity_at(at) == LinkValidity::Valid
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn find(root: &Path, id: Uuid) -> Result<Option<Self>> {
        let path = paths::link_path(root, id);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Lookup by slug, the only externally shareable token.
    pub fn find_by_slug(root: &Path, slug: &str) -> Result<Option<Self>> {
        Ok(Self::list(root)?.into_iter().find(|l| l.slug == slug))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::link_path(root, self.id);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::links_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut links = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                let data = std::fs::read_to_string(&path)?;
                links.push(serde_json::from_str(&data)?);
            }
        }
        links.sort_by(|a: &Self, b: &Self| a.created_at.cmp(&b.created_at));
        Ok(links)
    }

    pub fn for_client(root: &Path, client_id: Uuid) -> Result<Vec<Self>> {
        Ok(Self::list(root)?
            .into_iter()
            .filter(|l| l.client_id == client_id)
            .collect())
    }

    pub fn delete(root: &Path, id: Uuid) -> Result<()> {
        let path = paths::link_path(root, id);
        if !path.exists() {
            return Err(DeskError::LinkNotFound(id.to_string()));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }

    /// Delete every link pointing at a client. Only runs on explicit
    /// request; client deletion does not cascade here by itself.
    pub fn purge_for_client(root: &Path, client_id: Uuid) -> Result<usize> {
        let links = Self::for_client(root, client_id)?;
        let count = links.len();
        for link in links {
            Self::delete(root, link.id)?;
        }
        Ok(count)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a slug to its client for a prospect-facing demo page. The
/// validity check runs before any client data is exposed.
pub fn resolve(root: &Path, slug: &str, at: DateTime<Utc>) -> Result<(DemoLink, ClientRecord)> {
    let link = DemoLink::find_by_slug(root, slug)?
        .ok_or_else(|| DeskError::LinkNotFound(slug.to_string()))?;

    match link.validity_at(at) {
        LinkValidity::Expired => return Err(DeskError::LinkExpired(slug.to_string())),
        LinkValidity::Inactive => return Err(DeskError::LinkInactive(slug.to_string())),
        LinkValidity::Valid => {}
    }

    let client = ClientRecord::find(root, link.client_id)?
        .ok_or_else(|| DeskError::ClientNotFound(link.client_id.to_string()))?;
    Ok((link, client))
}

/// Add exactly one page view to the slug's usage count. Expected once per
/// view; concurrent viewers are an approximation, not an exact count.
pub fn increment_usage(root: &Path, slug: &str) -> Result<u64> {
    let mut link = DemoLink::find_by_slug(root, slug)?
        .ok_or_else(|| DeskError::LinkNotFound(slug.to_string()))?;
    link.usage_count += 1;
    link.save(root)?;
    Ok(link.usage_count)
}

// ---------------------------------------------------------------------------
// Slug generation
// ---------------------------------------------------------------------------

static SLUG_STRIP_RE: OnceLock<Regex> = OnceLock::new();
static SLUG_COLLAPSE_RE: OnceLock<Regex> = OnceLock::new();

fn slug_strip_re() -> &'static Regex {
    SLUG_STRIP_RE.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").unwrap())
}

fn slug_collapse_re() -> &'static Regex {
    SLUG_COLLAPSE_RE.get_or_init(|| Regex::new(r"[\s-]+").unwrap())
}

/// Derive the slug base from a business name: lowercase, strip anything
/// outside `[a-z0-9\s-]`, collapse whitespace and hyphen runs to a single
/// hyphen, truncate to 30 characters.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = slug_strip_re().replace_all(&lower, "");
    let collapsed = slug_collapse_re().replace_all(&stripped, "-");
    let trimmed = collapsed.trim_matches('-');

    let truncated: String = trimmed.chars().take(SLUG_MAX_LEN).collect();
    let truncated = truncated.trim_end_matches('-');
    if truncated.is_empty() {
        "demo".to_string()
    } else {
        truncated.to_string()
    }
}

fn slug_suffix() -> String {
    use rand::{distributions::Alphanumeric, Rng};
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SLUG_SUFFIX_LEN)
        .map(char::from)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
