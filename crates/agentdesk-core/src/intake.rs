//! The field bag handed over by the website-scraping subsystem.
//!
//! The scraper is an external collaborator; everything it returns is
//! loosely structured and every field may be absent. This module normalizes
//! that bag into a [`WebsiteContext`] and prefills a [`ClientProfile`].

use crate::client::{ClientProfile, WebsiteContext};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrapedFields {
    pub business_name: Option<String>,
    pub description: Option<String>,
    pub services: Vec<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub hours: Option<String>,
    pub about_us: Option<String>,
    pub tagline: Option<String>,
    pub service_area: Option<String>,
    pub raw_content: Option<String>,
}

impl ScrapedFields {
    pub fn is_empty(&self) -> bool {
        self.business_name.is_none()
            && self.description.is_none()
            && self.services.is_empty()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.hours.is_none()
            && self.about_us.is_none()
            && self.tagline.is_none()
            && self.service_area.is_none()
            && self.raw_content.is_none()
    }

    /// Lift the scraped prose and contact fields into a website context.
    /// `None` when the scrape produced nothing usable.
    pub fn to_website_context(&self) -> Option<WebsiteContext> {
        let ctx = WebsiteContext {
            description: self.description.clone(),
            tagline: self.tagline.clone(),
            about_us: self.about_us.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            raw_content: self.raw_content.clone(),
            scraped_services: self.services.clone(),
        };
        (!ctx.is_empty()).then_some(ctx)
    }

    /// Prefill blank profile fields from the scrape. Values the caller typed
    /// in always win; the scrape only ever fills gaps.
    pub fn apply_to(&self, profile: &mut ClientProfile) {
        if profile.business_name.is_empty() {
            if let Some(name) = &self.business_name {
                profile.business_name = name.clone();
            }
        }
        if profile.service_area.is_empty() {
            if let Some(area) = &self.service_area {
                profile.service_area = area.clone();
            }
        }
        if profile.services.is_empty() {
            profile.services = self.services.clone();
        }
        if profile.website.is_none() {
            profile.website = self.to_website_context();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
