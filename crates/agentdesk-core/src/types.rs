use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ClientStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Draft,
    DemoReady,
    Approved,
    Production,
}

impl ClientStatus {
    pub fn all() -> &'static [ClientStatus] {
        &[
            ClientStatus::Draft,
            ClientStatus::DemoReady,
            ClientStatus::Approved,
            ClientStatus::Production,
        ]
    }

    pub fn next(self) -> Option<ClientStatus> {
        let all = ClientStatus::all();
        all.get(self as usize + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Draft => "draft",
            ClientStatus::DemoReady => "demo_ready",
            ClientStatus::Approved => "approved",
            ClientStatus::Production => "production",
        }
    }

    /// True once the client has signed off on the demo.
    pub fn is_approved(self) -> bool {
        matches!(self, ClientStatus::Approved | ClientStatus::Production)
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClientStatus {
    type Err = crate::error::DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ClientStatus::Draft),
            "demo_ready" => Ok(ClientStatus::DemoReady),
            "approved" => Ok(ClientStatus::Approved),
            "production" => Ok(ClientStatus::Production),
            _ => Err(crate::error::DeskError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// AfterHoursGoal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterHoursGoal {
    LeadCapture,
    Voicemail,
    EmergencyTransfer,
}

impl AfterHoursGoal {
    pub fn as_str(self) -> &'static str {
        match self {
            AfterHoursGoal::LeadCapture => "lead_capture",
            AfterHoursGoal::Voicemail => "voicemail",
            AfterHoursGoal::EmergencyTransfer => "emergency_transfer",
        }
    }
}

impl fmt::Display for AfterHoursGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AfterHoursGoal {
    type Err = crate::error::DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead_capture" => Ok(AfterHoursGoal::LeadCapture),
            "voicemail" => Ok(AfterHoursGoal::Voicemail),
            "emergency_transfer" => Ok(AfterHoursGoal::EmergencyTransfer),
            _ => Err(crate::error::DeskError::InvalidGoal(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Friendly,
    Casual,
    Formal,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
            Tone::Formal => "formal",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = crate::error::DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            "casual" => Ok(Tone::Casual),
            "formal" => Ok(Tone::Formal),
            _ => Err(crate::error::DeskError::InvalidTone(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// TransferRule
// ---------------------------------------------------------------------------

/// Escalation action for a transfer rule. A phone number only exists on the
/// `Transfer` variant, so a custom-message rule carrying a phone is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TransferAction {
    Transfer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
    },
    UrgentFlag,
    CustomMessage,
}

impl TransferAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferAction::Transfer { .. } => "transfer",
            TransferAction::UrgentFlag => "urgent_flag",
            TransferAction::CustomMessage => "custom_message",
        }
    }
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition/action pair describing when and how a call escalates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRule {
    pub condition: String,
    #[serde(flatten)]
    pub action: TransferAction,
}

impl TransferRule {
    pub fn transfer(condition: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            action: TransferAction::Transfer {
                phone: Some(phone.into()),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ordering() {
        assert!(ClientStatus::Draft < ClientStatus::DemoReady);
        assert!(ClientStatus::DemoReady < ClientStatus::Approved);
        assert!(ClientStatus::Production > ClientStatus::Approved);
    }

    #[test]
    fn status_next() {
        assert_eq!(ClientStatus::Draft.next(), Some(ClientStatus::DemoReady));
        assert_eq!(ClientStatus::Approved.next(), Some(ClientStatus::Production));
        assert_eq!(ClientStatus::Production.next(), None);
    }

    #[test]
    fn status_roundtrip() {
        use std::str::FromStr;
        for status in ClientStatus::all() {
            let parsed = ClientStatus::from_str(status.as_str()).unwrap();
            assert_eq!(*status, parsed);
        }
        assert!(ClientStatus::from_str("rejected").is_err());
    }

    #[test]
    fn status_is_approved() {
        assert!(!ClientStatus::Draft.is_approved());
        assert!(!ClientStatus::DemoReady.is_approved());
        assert!(ClientStatus::Approved.is_approved());
        assert!(ClientStatus::Production.is_approved());
    }

    #[test]
    fn transfer_rule_serde_tags_action() {
        let rule = TransferRule::transfer("gas smell", "555-0101");
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"action\":\"transfer\""));
        assert!(json.contains("\"phone\":\"555-0101\""));

        let parsed: TransferRule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn transfer_rule_non_transfer_has_no_phone_field() {
        let rule = TransferRule {
            condition: "caller is upset".to_string(),
            action: TransferAction::UrgentFlag,
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"action\":\"urgent_flag\""));
        assert!(!json.contains("phone"));
    }

    #[test]
    fn goal_and_tone_roundtrip() {
        use std::str::FromStr;
        assert_eq!(
            AfterHoursGoal::from_str("emergency_transfer").unwrap(),
            AfterHoursGoal::EmergencyTransfer
        );
        assert_eq!(Tone::from_str("casual").unwrap(), Tone::Casual);
        assert!(AfterHoursGoal::from_str("fax").is_err());
        assert!(Tone::from_str("sarcastic").is_err());
    }
}
