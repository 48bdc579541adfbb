//! Artifact generation: system prompts, demo config, test instructions, and
//! the production install checklist.
//!
//! Every generator is deterministic for a given record except for the single
//! generation timestamp embedded in each artifact's header. Tests normalize
//! that line out before comparing output.

use crate::client::{ClientRecord, Hours};
use crate::error::Result;
use crate::knowledge;
use crate::types::{AfterHoursGoal, Tone, TransferAction, TransferRule};
use crate::website;
use chrono::Utc;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Fixed text blocks
// ---------------------------------------------------------------------------

pub const DEMO_TYPE_MARKER: &str = "# Type: DEMO AGENT";
pub const PRODUCTION_TYPE_MARKER: &str = "# Type: PRODUCTION AGENT";

/// The boundary sentence that exists only in demo prompts.
pub const DEMO_BOUNDARY: &str = "**Important:** This is a DEMO agent. Do NOT mention pricing, contracts, or specific scheduling times. Do NOT claim to book real appointments.";

pub const PRODUCTION_NOTE: &str = "**Note:** This is a PRODUCTION agent with live integrations.";

const UNCONFIGURED: &str = "[TO BE CONFIGURED]";

fn tone_instructions(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "Maintain a professional, courteous demeanor. Use clear, business-appropriate language."
        }
        Tone::Friendly => {
            "Be warm and approachable while maintaining professionalism. Use a conversational but respectful tone."
        }
        Tone::Casual => {
            "Be relaxed and personable. Use everyday language and a warm, neighborly approach."
        }
        Tone::Formal => {
            "Use formal, polished language. Maintain an elevated level of professionalism throughout."
        }
    }
}

fn goal_instructions(goal: AfterHoursGoal) -> &'static str {
    match goal {
        AfterHoursGoal::LeadCapture => {
            "Your primary goal is to capture lead information for follow-up.
Always collect:
1. Caller's full name
2. Callback phone number
3. Brief description of service needed
4. Best time to reach them

Confirm all details before ending the call."
        }
        AfterHoursGoal::Voicemail => {
            "Your goal is to take a detailed message for the business to review.
Collect:
1. Caller's name
2. Phone number
3. Detailed message
4. Urgency level (routine, soon, urgent)"
        }
        AfterHoursGoal::EmergencyTransfer => {
            "For urgent matters, offer to transfer to an emergency line.
For non-urgent matters, collect:
1. Caller's name
2. Phone number
3. Service needed
4. Preferred callback time"
        }
    }
}

/// Render the transfer rules section, or nothing at all when no rule exists.
/// The phone clause appears only on a transfer rule that carries a phone.
fn transfer_section(rules: &[TransferRule]) -> String {
    if rules.is_empty() {
        return String::new();
    }

    let rendered: Vec<String> = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let phone_clause = match &rule.action {
                TransferAction::Transfer { phone: Some(p) } => format!(" (Transfer to: {p})"),
                _ => String::new(),
            };
            format!(
                "{}. IF: {}\n   THEN: {}{}",
                i + 1,
                rule.condition,
                rule.action,
                phone_clause
            )
        })
        .collect();

    format!("\n## Transfer Rules\n{}", rendered.join("\n"))
}

// ---------------------------------------------------------------------------
// Demo system prompt
// ---------------------------------------------------------------------------

pub fn demo_system_prompt(client: &ClientRecord) -> String {
    let services: Vec<String> = client.services.iter().map(|s| format!("- {s}")).collect();
    let website_section = client
        .website
        .as_ref()
        .and_then(website::compose)
        .unwrap_or_default();

    format!(
        r#"# Voice Agent System Prompt
# Client: {name}
{type_marker}
# Generated: {generated}

---

## Identity & Role

You are a voice assistant for **{name}**, a {industry_lower} business serving {area}.

You handle incoming calls during after-hours periods. You are helpful, efficient, and represent the business professionally.

{boundary}

---

## Tone & Communication Style

{tone}

Key behaviors:
- Speak clearly and at a measured pace
- Confirm understanding before moving forward
- Be patient with callers who need time to explain
- Never interrupt the caller
- Use the business name naturally in conversation

---

## Business Information

**Business:** {name}
**Industry:** {industry}
**Service Area:** {area}

**Services Offered:**
{services}

**Hours of Operation:**
- Weekdays: {weekday}
- Weekends: {weekend}
- Timezone: {timezone}

---

## After-Hours Behavior

{goal}
{transfer}

---

## Call Flow Guidelines

### Opening
"Thank you for calling {name}. We're currently closed, but I can help you. How may I assist you today?"

### During the Call
1. Listen to the caller's request
2. Confirm you understand their need
3. Collect required information
4. Repeat back details for accuracy

### Closing
"Thank you for calling {name}. Someone from our team will reach out to you [timeframe]. Have a great [day/evening]!"

---

## Boundaries

DO NOT:
- Quote prices or estimates
- Promise specific appointment times
- Discuss contracts or agreements
- Make commitments on behalf of the business
- Provide technical advice beyond general information

ALWAYS:
- Collect caller contact information
- Confirm service area coverage
- Note urgency level
- Provide a clear next step

---

## Error Handling

If you don't understand:
"I want to make sure I get this right. Could you please repeat that?"

If asked something outside scope:
"That's a great question for our team. Let me make sure they call you back to discuss that directly."

If caller is frustrated:
"I understand, and I apologize for any inconvenience. Let me make sure someone gets back to you as soon as possible."
{website_section}
---

{knowledge}

---

# END OF DEMO SYSTEM PROMPT
"#,
        name = client.business_name,
        type_marker = DEMO_TYPE_MARKER,
        generated = Utc::now().to_rfc3339(),
        industry_lower = client.industry.to_lowercase(),
        area = client.service_area,
        boundary = DEMO_BOUNDARY,
        tone = tone_instructions(client.tone),
        industry = client.industry,
        services = services.join("\n"),
        weekday = client.hours.weekday,
        weekend = client.hours.weekend,
        timezone = client.hours.timezone,
        goal = goal_instructions(client.after_hours_goal),
        transfer = transfer_section(&client.transfer_rules),
        website_section = website_section,
        knowledge = knowledge::resolve(&client.industry),
    )
}

// ---------------------------------------------------------------------------
// Production system prompt
// ---------------------------------------------------------------------------

pub fn production_system_prompt(client: &ClientRecord) -> String {
    let details = client.production_details.clone().unwrap_or_default();
    let voice_id = details.voice_id.as_deref().unwrap_or(UNCONFIGURED);
    let phone_number = details.phone_number.as_deref().unwrap_or(UNCONFIGURED);
    let crm = details.crm_integration.as_deref().unwrap_or(UNCONFIGURED);
    let calendar = details.calendar_integration.as_deref().unwrap_or(UNCONFIGURED);

    let base = demo_system_prompt(client)
        .replacen(DEMO_TYPE_MARKER, PRODUCTION_TYPE_MARKER, 1)
        .replacen(DEMO_BOUNDARY, PRODUCTION_NOTE, 1)
        .replacen(
            "# END OF DEMO SYSTEM PROMPT",
            "# END OF PRODUCTION SYSTEM PROMPT",
            1,
        );

    let addendum = format!(
        r#"
---

## Production Configuration

### Voice
- Voice ID: {voice_id}

### Phone
- Number: {phone_number}

### Integrations
- CRM: {crm}
- Calendar: {calendar}

---

## Production Behaviors

### Real Booking Capability
When a caller requests an appointment:
1. Check calendar availability via integration
2. Offer available time slots
3. Confirm booking details
4. Send confirmation via SMS/email

### CRM Logging
All calls should be logged with:
- Caller information
- Call duration
- Outcome (booked, lead captured, transferred, etc.)
- Notes and follow-up required

### SMS Follow-up
After capturing a lead, send automated SMS:
"Hi [Name], thanks for calling {name}! We received your request for [service] and will contact you within [timeframe]. Reply STOP to opt out."

---

## Error Handling & Reliability

### Fallback Behavior
If integrations fail:
1. Inform caller of temporary issue
2. Collect information manually
3. Promise callback within 1 business hour
4. Log incident for review

### Call Quality
- Monitor for audio issues
- Gracefully handle poor connections
- Offer callback if quality is poor

---

## Compliance

- Do not record without consent where required
- Follow TCPA guidelines for SMS
- Respect do-not-call requests
- Handle PHI appropriately if medical-related
"#,
        name = client.business_name,
    );

    base + &addendum
}

// ---------------------------------------------------------------------------
// Demo config
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DemoConfig<'a> {
    schema_version: &'static str,
    agent_type: &'static str,
    generated_at: String,
    business: BusinessSection<'a>,
    hours: &'a Hours,
    agent_behavior: BehaviorSection<'a>,
    demo_settings: DemoSettings,
    lead_capture: LeadCapture,
}

#[derive(Serialize)]
struct BusinessSection<'a> {
    name: &'a str,
    industry: &'a str,
    services: &'a [String],
    service_area: &'a str,
}

#[derive(Serialize)]
struct BehaviorSection<'a> {
    after_hours_goal: AfterHoursGoal,
    tone: Tone,
    transfer_rules: &'a [TransferRule],
}

#[derive(Serialize)]
struct DemoSettings {
    voice_provider: &'static str,
    phone_type: &'static str,
    integrations: IntegrationModes,
}

#[derive(Serialize)]
struct IntegrationModes {
    calendar: &'static str,
    crm: &'static str,
    sms: &'static str,
}

#[derive(Serialize)]
struct LeadCapture {
    required_fields: &'static [&'static str],
    optional_fields: &'static [&'static str],
}

/// The machine-readable demo configuration, as pretty-printed JSON.
pub fn demo_config(client: &ClientRecord) -> Result<String> {
    let config = DemoConfig {
        schema_version: "1.0",
        agent_type: "demo",
        generated_at: Utc::now().to_rfc3339(),
        business: BusinessSection {
            name: &client.business_name,
            industry: &client.industry,
            services: &client.services,
            service_area: &client.service_area,
        },
        hours: &client.hours,
        agent_behavior: BehaviorSection {
            after_hours_goal: client.after_hours_goal,
            tone: client.tone,
            transfer_rules: &client.transfer_rules,
        },
        demo_settings: DemoSettings {
            voice_provider: "standard",
            phone_type: "temporary",
            integrations: IntegrationModes {
                calendar: "simulated",
                crm: "simulated",
                sms: "disabled",
            },
        },
        lead_capture: LeadCapture {
            required_fields: &["name", "phone", "service_needed"],
            optional_fields: &["email", "address", "notes"],
        },
    };

    Ok(serde_json::to_string_pretty(&config)?)
}

// ---------------------------------------------------------------------------
// Client test instructions
// ---------------------------------------------------------------------------

pub fn client_test_instructions(client: &ClientRecord) -> String {
    let top_services: Vec<&str> = client.services.iter().take(3).map(String::as_str).collect();
    let emergency_bullet = if client.after_hours_goal == AfterHoursGoal::EmergencyTransfer {
        "\n- Test if transfer offer is made appropriately"
    } else {
        ""
    };

    format!(
        r#"# Demo Test Instructions
# Client: {name}
# Generated: {generated}

---

## Overview

You have been set up with a demo voice agent for {name}. This document explains how to test the agent and what to evaluate.

---

## How to Test

1. **Call the demo number** provided separately
2. **The agent will answer** as if it were after-hours
3. **Try different scenarios** listed below
4. **Take notes** on what works and what needs adjustment

---

## Test Scenarios to Try

### Scenario 1: New Customer Inquiry
- Call as if you're a new customer
- Ask about one of these services: {top_services}
- See if the agent collects your information correctly

### Scenario 2: Service Area Check
- Ask if they service a location within: {area}
- Ask if they service a location OUTSIDE the area
- Note how the agent handles both

### Scenario 3: Urgent Request
- Call with an urgent issue
- See how the agent prioritizes and responds{emergency_bullet}

### Scenario 4: Edge Cases
- Ask about pricing (agent should NOT quote prices)
- Ask for a specific appointment time (agent should NOT commit)
- Be vague and see if agent asks clarifying questions
- Speak quickly or mumble slightly

---

## What to Evaluate

Rate each item 1-5 (1=Poor, 5=Excellent):

| Item | Rating | Notes |
|------|--------|-------|
| Opening greeting | ___ | |
| Tone of voice | ___ | |
| Understanding requests | ___ | |
| Information collection | ___ | |
| Handling boundaries | ___ | |
| Closing statement | ___ | |
| Overall experience | ___ | |

---

## Feedback Questions

1. Does the agent sound like it represents {name} well?

2. Is the tone ({tone}) appropriate for your customers?

3. Were there any phrases that felt unnatural or incorrect?

4. What would you change about the call flow?

5. Are there scenarios we missed that your callers commonly have?

---

## Next Steps

After testing, we will:
1. Review your feedback together
2. Make adjustments to the agent
3. Re-test if needed
4. Once approved, proceed to production setup

**Questions?** Contact your account manager.

---

# END OF TEST INSTRUCTIONS
"#,
        name = client.business_name,
        generated = Utc::now().to_rfc3339(),
        top_services = top_services.join(", "),
        area = client.service_area,
        emergency_bullet = emergency_bullet,
        tone = client.tone,
    )
}

// ---------------------------------------------------------------------------
// Production install checklist
// ---------------------------------------------------------------------------

/// Human-facing install checklist, keyed off the approval timestamp.
pub fn production_checklist(client: &ClientRecord) -> String {
    let approved = client
        .production_details
        .as_ref()
        .and_then(|d| d.approved_at)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "Pending".to_string());

    format!(
        r#"# Production Install Checklist
# Client: {name}
# Approved: {approved}

---

## Pre-Installation

- [ ] Demo approved by client
- [ ] Production contract signed
- [ ] Payment method on file
- [ ] Client contact designated for setup

---

## Voice Setup

- [ ] Create or select voice profile
- [ ] Voice ID: ________________________________
- [ ] Test voice quality
- [ ] Client approves voice
- [ ] Configure voice settings (speed, stability, etc.)

---

## Phone Setup

- [ ] Purchase or port phone number
- [ ] Phone Number: ________________________________
- [ ] Configure call routing
- [ ] Set up failover number
- [ ] Test inbound calls
- [ ] Test call quality

---

## CRM Integration

- [ ] Identify CRM system: ________________________________
- [ ] Obtain API credentials
- [ ] Map data fields
- [ ] Test lead creation
- [ ] Test contact lookup
- [ ] Verify data sync

---

## Calendar Integration

- [ ] Identify calendar system: ________________________________
- [ ] Obtain OAuth/API access
- [ ] Configure availability rules
- [ ] Test booking creation
- [ ] Test conflict detection
- [ ] Verify notifications

---

## SMS/Email Setup

- [ ] Configure SMS sender ID
- [ ] Create message templates
- [ ] Test delivery
- [ ] Verify opt-out handling
- [ ] Set up email notifications

---

## Final Testing

- [ ] End-to-end call test
- [ ] Booking flow test
- [ ] Lead capture test
- [ ] Transfer test
- [ ] Error handling test
- [ ] Client walkthrough

---

## Go-Live

- [ ] Schedule go-live date: ________________________________
- [ ] Update business phone routing
- [ ] Monitor first 24 hours
- [ ] Address any issues
- [ ] Client confirmation

---

## Post-Launch

- [ ] Set up analytics dashboard
- [ ] Schedule weekly review (first month)
- [ ] Document any customizations
- [ ] Training for client team (if needed)

---

# Completed By: ________________________________
# Date: ________________________________
"#,
        name = client.business_name,
        approved = approved,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientProfile, WebsiteContext};
    use crate::types::ClientStatus;

    fn sample_client() -> ClientRecord {
        let mut profile = ClientProfile::new("Joe's Plumbing", "Plumbing", "Austin, TX");
        profile.services = vec![
            "Drain Cleaning".to_string(),
            "Pipe Repair".to_string(),
            "Water Heater".to_string(),
            "Leak Detection".to_string(),
        ];
        ClientRecord::new(profile)
    }

    /// Drop the embedded generation timestamps so artifact content can be
    /// compared across two generation runs.
    fn normalize(text: &str) -> String {
        text.lines()
            .filter(|l| !l.contains("# Generated:") && !l.contains("\"generated_at\""))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn demo_prompt_has_marker_and_boundary() {
        let prompt = demo_system_prompt(&sample_client());
        assert!(prompt.contains("DEMO AGENT"));
        assert!(prompt.contains(DEMO_BOUNDARY));
        assert!(prompt.contains("**Business:** Joe's Plumbing"));
        assert!(prompt.contains("a plumbing business serving Austin, TX"));
        assert!(prompt.contains("- Drain Cleaning"));
        assert!(prompt.contains("Thank you for calling Joe's Plumbing."));
    }

    #[test]
    fn demo_prompt_appends_knowledge_last() {
        let prompt = demo_system_prompt(&sample_client());
        let knowledge_pos = prompt.find("## Plumbing Industry Expertise").unwrap();
        let boundaries_pos = prompt.find("## Boundaries").unwrap();
        assert!(knowledge_pos > boundaries_pos);
        assert!(prompt.trim_end().ends_with("# END OF DEMO SYSTEM PROMPT"));
    }

    #[test]
    fn demo_prompt_idempotent_modulo_timestamp() {
        let client = sample_client();
        let a = demo_system_prompt(&client);
        let b = demo_system_prompt(&client);
        assert_eq!(normalize(&a), normalize(&b));
    }

    #[test]
    fn no_transfer_rules_no_heading() {
        let prompt = demo_system_prompt(&sample_client());
        assert!(!prompt.contains("## Transfer Rules"));
    }

    #[test]
    fn transfer_rule_rendering() {
        let mut client = sample_client();
        client.transfer_rules = vec![TransferRule::transfer("gas smell", "555-0101")];
        let prompt = demo_system_prompt(&client);

        assert!(prompt.contains("## Transfer Rules"));
        assert!(prompt.contains("1. IF: gas smell"));
        let if_line = prompt.lines().position(|l| l.contains("IF: gas smell")).unwrap();
        let then_line = prompt.lines().nth(if_line + 1).unwrap();
        assert!(then_line.contains("THEN: transfer (Transfer to: 555-0101)"));
    }

    #[test]
    fn transfer_rule_without_phone_has_no_clause() {
        let mut client = sample_client();
        client.transfer_rules = vec![TransferRule {
            condition: "caller mentions flooding".to_string(),
            action: TransferAction::UrgentFlag,
        }];
        let prompt = demo_system_prompt(&client);
        assert!(prompt.contains("THEN: urgent_flag\n"));
        assert!(!prompt.contains("Transfer to:"));
    }

    #[test]
    fn website_section_omitted_when_absent() {
        let prompt = demo_system_prompt(&sample_client());
        assert!(!prompt.contains("Additional Business Context"));
    }

    #[test]
    fn website_section_present_when_populated() {
        let mut client = sample_client();
        client.website = Some(WebsiteContext {
            tagline: Some("Austin's fastest drains".to_string()),
            ..Default::default()
        });
        let prompt = demo_system_prompt(&client);
        assert!(prompt.contains("## Additional Business Context (from website)"));
        assert!(prompt.contains("Austin's fastest drains"));
    }

    #[test]
    fn production_prompt_swaps_markers() {
        let mut client = sample_client();
        client.status = ClientStatus::Approved;
        let prompt = production_system_prompt(&client);

        assert!(prompt.contains("PRODUCTION AGENT"));
        assert!(!prompt.contains(DEMO_BOUNDARY));
        assert!(prompt.contains(PRODUCTION_NOTE));
        assert!(prompt.contains("# END OF PRODUCTION SYSTEM PROMPT"));
        assert!(prompt.contains("## Compliance"));
    }

    #[test]
    fn production_prompt_placeholders_until_configured() {
        let client = sample_client();
        let prompt = production_system_prompt(&client);
        assert!(prompt.contains("- Voice ID: [TO BE CONFIGURED]"));
        assert!(prompt.contains("- Number: [TO BE CONFIGURED]"));
        assert!(prompt.contains("- CRM: [TO BE CONFIGURED]"));
        assert!(prompt.contains("- Calendar: [TO BE CONFIGURED]"));
    }

    #[test]
    fn production_prompt_uses_configured_values() {
        let mut client = sample_client();
        let details = client.production_details_mut();
        details.voice_id = Some("v123".to_string());
        details.phone_number = Some("512-555-0100".to_string());

        let prompt = production_system_prompt(&client);
        assert!(prompt.contains("- Voice ID: v123"));
        assert!(prompt.contains("- Number: 512-555-0100"));
        assert!(prompt.contains("- CRM: [TO BE CONFIGURED]"));
    }

    #[test]
    fn demo_config_is_valid_json_with_fixed_fields() {
        let text = demo_config(&sample_client()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["schema_version"], "1.0");
        assert_eq!(value["agent_type"], "demo");
        assert_eq!(value["business"]["name"], "Joe's Plumbing");
        assert_eq!(value["demo_settings"]["integrations"]["sms"], "disabled");
        assert_eq!(value["lead_capture"]["required_fields"][2], "service_needed");
    }

    #[test]
    fn demo_config_idempotent_modulo_timestamp() {
        let client = sample_client();
        let a = demo_config(&client).unwrap();
        let b = demo_config(&client).unwrap();
        assert_eq!(normalize(&a), normalize(&b));
    }

    #[test]
    fn test_instructions_take_first_three_services() {
        let text = client_test_instructions(&sample_client());
        assert!(text.contains("Drain Cleaning, Pipe Repair, Water Heater"));
        assert!(!text.contains("Leak Detection"));
        assert!(text.contains("a location within: Austin, TX"));
    }

    #[test]
    fn test_instructions_emergency_bullet() {
        let mut client = sample_client();
        assert!(!client_test_instructions(&client)
            .contains("Test if transfer offer is made appropriately"));

        client.after_hours_goal = AfterHoursGoal::EmergencyTransfer;
        assert!(client_test_instructions(&client)
            .contains("Test if transfer offer is made appropriately"));
    }

    #[test]
    fn checklist_pending_until_approved() {
        let mut client = sample_client();
        assert!(production_checklist(&client).contains("# Approved: Pending"));

        let now = Utc::now();
        client.production_details_mut().approved_at = Some(now);
        assert!(production_checklist(&client).contains(&now.to_rfc3339()));
    }
}
