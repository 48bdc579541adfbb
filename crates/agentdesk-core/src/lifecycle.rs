//! The client lifecycle state machine: draft → demo_ready → approved →
//! production. Transitions are forward-only; there is no revert path.
//!
//! Every operation mutates the record in memory only. Persisting the result
//! is the caller's job, so a failed guard leaves both the record and the
//! store untouched.

use crate::client::ClientRecord;
use crate::defaults;
use crate::error::{DeskError, Result};
use crate::prompts;
use crate::types::ClientStatus;
use chrono::Utc;

fn invalid(client: &ClientRecord, to: ClientStatus, reason: &str) -> DeskError {
    DeskError::InvalidTransition {
        from: client.status.to_string(),
        to: to.to_string(),
        reason: reason.to_string(),
    }
}

/// (Re)generate the demo config, demo system prompt, and test instructions.
///
/// Callable from any state, safe to repeat after an edit. A draft moves to
/// demo_ready; a record already at approved or production keeps its status,
/// so regeneration never downgrades a record back down the pipeline.
pub fn generate_demo_artifacts(client: &mut ClientRecord) -> Result<()> {
    let config = prompts::demo_config(client)?;
    client.artifacts.demo_config = Some(config);
    client.artifacts.demo_system_prompt = Some(prompts::demo_system_prompt(client));
    client.artifacts.client_test_instructions = Some(prompts::client_test_instructions(client));

    if client.status == ClientStatus::Draft {
        client.status = ClientStatus::DemoReady;
    }
    client.updated_at = Utc::now();
    Ok(())
}

/// Generate the production system prompt. Requires an approved (or already
/// live) record; on a guard failure the record is left completely unchanged.
pub fn generate_production_artifacts(client: &mut ClientRecord) -> Result<()> {
    if !client.status.is_approved() {
        return Err(invalid(
            client,
            ClientStatus::Production,
            "client must be approved before generating production artifacts",
        ));
    }

    client.artifacts.production_system_prompt = Some(prompts::production_system_prompt(client));
    client.updated_at = Utc::now();
    Ok(())
}

/// Client sign-off on the demo. Only a demo_ready record can be approved,
/// which guarantees a production record always had demo artifacts generated.
pub fn approve(client: &mut ClientRecord) -> Result<()> {
    if client.status != ClientStatus::DemoReady {
        return Err(invalid(
            client,
            ClientStatus::Approved,
            "only a demo_ready client can be approved",
        ));
    }

    let now = Utc::now();
    client.status = ClientStatus::Approved;
    client.production_details_mut().approved_at = Some(now);
    client.updated_at = now;
    Ok(())
}

/// Move an approved record to production, generating production artifacts
/// on the way.
pub fn promote_to_production(client: &mut ClientRecord) -> Result<()> {
    if client.status != ClientStatus::Approved {
        return Err(invalid(
            client,
            ClientStatus::Production,
            "client must be approved before promoting to production",
        ));
    }

    generate_production_artifacts(client)?;
    client.status = ClientStatus::Production;
    client.updated_at = Utc::now();
    Ok(())
}

/// Publish an approved record to production with the external voice id and
/// optional phone number. The identifiers are stored, never validated; the
/// voice/telephony provider is an opaque collaborator.
pub fn publish(client: &mut ClientRecord, voice_id: &str, phone: Option<&str>) -> Result<()> {
    if client.status != ClientStatus::Approved {
        return Err(invalid(
            client,
            ClientStatus::Production,
            "client must be approved before publishing to production",
        ));
    }

    // Store the identifiers first so the generated prompt carries them.
    let details = client.production_details_mut();
    details.voice_id = Some(voice_id.to_string());
    if let Some(p) = phone {
        details.phone_number = Some(p.to_string());
    }

    generate_production_artifacts(client)?;
    client.status = ClientStatus::Production;
    client.updated_at = Utc::now();
    Ok(())
}

/// Quick create: minimal fields, profile filled from the industry defaults
/// table, demo artifacts generated immediately.
pub fn quick_create(
    business_name: impl Into<String>,
    industry: impl Into<String>,
    service_area: impl Into<String>,
) -> Result<ClientRecord> {
    let industry = industry.into();
    let d = defaults::for_industry(&industry);

    let mut profile = crate::client::ClientProfile::new(business_name, industry, service_area);
    profile.services = d.services.iter().map(|s| s.to_string()).collect();
    profile.tone = d.tone;
    profile.after_hours_goal = d.after_hours_goal;
    profile.hours = d.hours();

    let mut client = ClientRecord::new(profile);
    generate_demo_artifacts(&mut client)?;
    Ok(client)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientProfile;
    use crate::types::{AfterHoursGoal, Tone};

    fn draft_client() -> ClientRecord {
        let mut profile = ClientProfile::new("Joe's Plumbing", "Plumbing", "Austin, TX");
        profile.services = vec!["Drain Cleaning".to_string()];
        ClientRecord::new(profile)
    }

    #[test]
    fn generate_demo_moves_draft_to_demo_ready() {
        let mut client = draft_client();
        generate_demo_artifacts(&mut client).unwrap();

        assert_eq!(client.status, ClientStatus::DemoReady);
        assert!(client.artifacts.demo_config.is_some());
        assert!(client.artifacts.demo_system_prompt.is_some());
        assert!(client.artifacts.client_test_instructions.is_some());
        assert!(client.artifacts.production_system_prompt.is_none());
    }

    #[test]
    fn regenerate_preserves_higher_status() {
        let mut client = draft_client();
        generate_demo_artifacts(&mut client).unwrap();
        approve(&mut client).unwrap();

        generate_demo_artifacts(&mut client).unwrap();
        assert_eq!(client.status, ClientStatus::Approved);

        publish(&mut client, "v1", None).unwrap();
        generate_demo_artifacts(&mut client).unwrap();
        assert_eq!(client.status, ClientStatus::Production);
    }

    #[test]
    fn production_artifacts_require_approval_and_leave_record_unchanged() {
        let mut client = draft_client();
        let before = serde_json::to_value(&client).unwrap();

        let err = generate_production_artifacts(&mut client).unwrap_err();
        assert!(matches!(err, DeskError::InvalidTransition { .. }));
        assert_eq!(serde_json::to_value(&client).unwrap(), before);
    }

    #[test]
    fn approve_requires_demo_ready() {
        let mut client = draft_client();
        assert!(approve(&mut client).is_err());
        assert_eq!(client.status, ClientStatus::Draft);
        assert!(client.production_details.is_none());
    }

    #[test]
    fn approve_stamps_approved_at() {
        let mut client = draft_client();
        generate_demo_artifacts(&mut client).unwrap();
        approve(&mut client).unwrap();

        assert_eq!(client.status, ClientStatus::Approved);
        let details = client.production_details.as_ref().unwrap();
        assert!(details.approved_at.is_some());
    }

    #[test]
    fn promote_requires_approved() {
        let mut client = draft_client();
        generate_demo_artifacts(&mut client).unwrap();
        assert!(promote_to_production(&mut client).is_err());

        approve(&mut client).unwrap();
        promote_to_production(&mut client).unwrap();
        assert_eq!(client.status, ClientStatus::Production);
        assert!(client.artifacts.production_system_prompt.is_some());

        // Already in production; no second promote.
        assert!(promote_to_production(&mut client).is_err());
    }

    #[test]
    fn regenerate_production_artifacts_in_production() {
        let mut client = draft_client();
        generate_demo_artifacts(&mut client).unwrap();
        approve(&mut client).unwrap();
        promote_to_production(&mut client).unwrap();

        // Still legal after going live; status stays production.
        generate_production_artifacts(&mut client).unwrap();
        assert_eq!(client.status, ClientStatus::Production);
    }

    #[test]
    fn quick_create_uses_industry_defaults() {
        let client = quick_create("Cool Air Co", "HVAC", "Phoenix, AZ").unwrap();
        assert_eq!(client.status, ClientStatus::DemoReady);
        assert_eq!(client.tone, Tone::Professional);
        assert_eq!(client.after_hours_goal, AfterHoursGoal::EmergencyTransfer);
        assert!(client.services.contains(&"AC Repair".to_string()));
        assert!(client.artifacts.demo_system_prompt.is_some());
    }

    #[test]
    fn end_to_end_joes_plumbing() {
        let mut client = draft_client();

        generate_demo_artifacts(&mut client).unwrap();
        assert_eq!(client.status, ClientStatus::DemoReady);
        let demo = client.artifacts.demo_system_prompt.as_ref().unwrap();
        assert!(demo.contains("Joe's Plumbing"));
        assert!(demo.contains("Drain Cleaning"));

        approve(&mut client).unwrap();
        assert_eq!(client.status, ClientStatus::Approved);
        assert!(client
            .production_details
            .as_ref()
            .unwrap()
            .approved_at
            .is_some());

        publish(&mut client, "v123", None).unwrap();
        assert_eq!(client.status, ClientStatus::Production);
        let production = client.artifacts.production_system_prompt.as_ref().unwrap();
        assert!(production.contains("v123"));
        assert_eq!(
            client
                .production_details
                .as_ref()
                .unwrap()
                .voice_id
                .as_deref(),
            Some("v123")
        );
    }
}
