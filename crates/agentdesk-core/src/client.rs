use crate::error::{DeskError, Result};
use crate::paths;
use crate::types::{AfterHoursGoal, ClientStatus, Tone, TransferRule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hours {
    pub weekday: String,
    pub weekend: String,
    pub timezone: String,
}

impl Default for Hours {
    fn default() -> Self {
        Self {
            weekday: "9:00 AM - 5:00 PM".to_string(),
            weekend: "Closed".to_string(),
            timezone: "America/New_York".to_string(),
        }
    }
}

/// Context scraped from the client's website. Every field is independently
/// optional; generators omit whatever is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_us: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scraped_services: Vec<String>,
}

impl WebsiteContext {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.tagline.is_none()
            && self.about_us.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.raw_content.is_none()
            && self.scraped_services.is_empty()
    }
}

/// Generated text artifacts. All start empty and fill in as the record moves
/// through the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_config: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_test_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_system_prompt: Option<String>,
}

impl Artifacts {
    pub fn has_demo(&self) -> bool {
        self.demo_system_prompt.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crm_integration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_integration: Option<String>,
}

// ---------------------------------------------------------------------------
// ClientProfile
// ---------------------------------------------------------------------------

/// The editable business profile, as received from the (out-of-scope) form
/// layer. The form validates required fields before a profile reaches here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub business_name: String,
    pub industry: String,
    pub services: Vec<String>,
    pub service_area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default)]
    pub hours: Hours,
    pub after_hours_goal: AfterHoursGoal,
    pub tone: Tone,
    #[serde(default)]
    pub transfer_rules: Vec<TransferRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<WebsiteContext>,
}

impl ClientProfile {
    pub fn new(
        business_name: impl Into<String>,
        industry: impl Into<String>,
        service_area: impl Into<String>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            industry: industry.into(),
            services: Vec::new(),
            service_area: service_area.into(),
            website_url: None,
            hours: Hours::default(),
            after_hours_goal: AfterHoursGoal::LeadCapture,
            tone: Tone::Professional,
            transfer_rules: Vec::new(),
            website: None,
        }
    }
}

// ---------------------------------------------------------------------------
// ClientRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ClientStatus,

    pub business_name: String,
    pub industry: String,
    pub services: Vec<String>,
    pub service_area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub hours: Hours,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<WebsiteContext>,

    pub after_hours_goal: AfterHoursGoal,
    pub tone: Tone,
    #[serde(default)]
    pub transfer_rules: Vec<TransferRule>,

    #[serde(default)]
    pub artifacts: Artifacts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_details: Option<ProductionDetails>,
}

impl ClientRecord {
    pub fn new(profile: ClientProfile) -> Self {
        let now = Utc::now();
        let website = profile.website.filter(|w| !w.is_empty());

        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            status: ClientStatus::Draft,
            business_name: profile.business_name,
            industry: profile.industry,
            services: dedupe_services(profile.services),
            service_area: profile.service_area,
            website_url: profile.website_url,
            hours: profile.hours,
            website,
            after_hours_goal: profile.after_hours_goal,
            tone: profile.tone,
            transfer_rules: profile.transfer_rules,
            artifacts: Artifacts::default(),
            production_details: None,
        }
    }

    /// Apply a profile edit in place. The lifecycle status and generated
    /// artifacts are deliberately untouched; callers regenerate afterwards.
    pub fn apply_profile(&mut self, profile: ClientProfile) {
        self.business_name = profile.business_name;
        self.industry = profile.industry;
        self.services = dedupe_services(profile.services);
        self.service_area = profile.service_area;
        self.website_url = profile.website_url;
        self.hours = profile.hours;
        self.website = profile.website.filter(|w| !w.is_empty());
        self.after_hours_goal = profile.after_hours_goal;
        self.tone = profile.tone;
        self.transfer_rules = profile.transfer_rules;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn production_details_mut(&mut self) -> &mut ProductionDetails {
        self.production_details.get_or_insert_with(Default::default)
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn create(root: &Path, profile: ClientProfile) -> Result<Self> {
        if !paths::is_initialized(root) {
            return Err(DeskError::NotInitialized);
        }
        let client = Self::new(profile);
        client.save(root)?;
        Ok(client)
    }

    pub fn load(root: &Path, id: Uuid) -> Result<Self> {
        Self::find(root, id)?.ok_or_else(|| DeskError::ClientNotFound(id.to_string()))
    }

    /// Lookup by id; an unknown id is an absent result, not an error.
    pub fn find(root: &Path, id: Uuid) -> Result<Option<Self>> {
        let path = paths::client_path(root, id);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::client_path(root, self.id);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::clients_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut clients = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                let data = std::fs::read_to_string(&path)?;
                clients.push(serde_json::from_str(&data)?);
            }
        }
        clients.sort_by(|a: &Self, b: &Self| a.created_at.cmp(&b.created_at));
        Ok(clients)
    }

    /// Permanently remove the record. Terminal and unconditional; demo links
    /// pointing at it are left alone unless the caller purges them.
    pub fn delete(root: &Path, id: Uuid) -> Result<()> {
        let path = paths::client_path(root, id);
        if !path.exists() {
            return Err(DeskError::ClientNotFound(id.to_string()));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }
}

/// Services are unique within the list, order-preserving.
fn dedupe_services(services: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    services
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
