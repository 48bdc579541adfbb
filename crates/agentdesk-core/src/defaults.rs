//! Per-industry defaults used by the quick-create flow to fill a full
//! profile from nothing but a business name, an industry, and a service
//! area.

use crate::client::Hours;
use crate::types::{AfterHoursGoal, Tone};

pub struct IndustryDefaults {
    pub services: &'static [&'static str],
    pub tone: Tone,
    pub after_hours_goal: AfterHoursGoal,
    pub weekday_hours: &'static str,
    pub weekend_hours: &'static str,
}

impl IndustryDefaults {
    pub fn hours(&self) -> Hours {
        Hours {
            weekday: self.weekday_hours.to_string(),
            weekend: self.weekend_hours.to_string(),
            timezone: "America/New_York".to_string(),
        }
    }
}

pub const INDUSTRY_DEFAULTS: &[(&str, IndustryDefaults)] = &[
    (
        "HVAC",
        IndustryDefaults {
            services: &[
                "AC Repair",
                "Heating Service",
                "HVAC Maintenance",
                "Emergency Service",
                "Installation",
            ],
            tone: Tone::Professional,
            after_hours_goal: AfterHoursGoal::EmergencyTransfer,
            weekday_hours: "8:00 AM - 6:00 PM",
            weekend_hours: "Emergency Only",
        },
    ),
    (
        "Plumbing",
        IndustryDefaults {
            services: &[
                "Drain Cleaning",
                "Pipe Repair",
                "Water Heater",
                "Emergency Plumbing",
                "Leak Detection",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::EmergencyTransfer,
            weekday_hours: "8:00 AM - 5:00 PM",
            weekend_hours: "Emergency Only",
        },
    ),
    (
        "Electrical",
        IndustryDefaults {
            services: &[
                "Electrical Repair",
                "Panel Upgrades",
                "Outlet Installation",
                "Lighting",
                "Emergency Service",
            ],
            tone: Tone::Professional,
            after_hours_goal: AfterHoursGoal::EmergencyTransfer,
            weekday_hours: "8:00 AM - 5:00 PM",
            weekend_hours: "Emergency Only",
        },
    ),
    (
        "Roofing",
        IndustryDefaults {
            services: &[
                "Roof Repair",
                "Roof Replacement",
                "Inspections",
                "Gutter Service",
                "Storm Damage",
            ],
            tone: Tone::Professional,
            after_hours_goal: AfterHoursGoal::LeadCapture,
            weekday_hours: "7:00 AM - 5:00 PM",
            weekend_hours: "Closed",
        },
    ),
    (
        "Landscaping",
        IndustryDefaults {
            services: &[
                "Lawn Care",
                "Tree Service",
                "Landscape Design",
                "Irrigation",
                "Seasonal Cleanup",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::LeadCapture,
            weekday_hours: "7:00 AM - 6:00 PM",
            weekend_hours: "8:00 AM - 2:00 PM",
        },
    ),
    (
        "Cleaning Services",
        IndustryDefaults {
            services: &[
                "House Cleaning",
                "Deep Cleaning",
                "Move-In/Out",
                "Office Cleaning",
                "Recurring Service",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::LeadCapture,
            weekday_hours: "8:00 AM - 6:00 PM",
            weekend_hours: "9:00 AM - 3:00 PM",
        },
    ),
    (
        "Auto Repair",
        IndustryDefaults {
            services: &[
                "Oil Change",
                "Brake Service",
                "Engine Repair",
                "Diagnostics",
                "Tire Service",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::Voicemail,
            weekday_hours: "8:00 AM - 6:00 PM",
            weekend_hours: "9:00 AM - 3:00 PM",
        },
    ),
    (
        "Medical/Dental",
        IndustryDefaults {
            services: &[
                "Appointments",
                "Check-ups",
                "Emergency Care",
                "Consultations",
                "Follow-ups",
            ],
            tone: Tone::Professional,
            after_hours_goal: AfterHoursGoal::EmergencyTransfer,
            weekday_hours: "8:00 AM - 5:00 PM",
            weekend_hours: "Closed",
        },
    ),
    (
        "Legal Services",
        IndustryDefaults {
            services: &[
                "Consultations",
                "Case Review",
                "Document Preparation",
                "Court Representation",
                "Legal Advice",
            ],
            tone: Tone::Formal,
            after_hours_goal: AfterHoursGoal::Voicemail,
            weekday_hours: "9:00 AM - 5:00 PM",
            weekend_hours: "Closed",
        },
    ),
    (
        "Real Estate",
        IndustryDefaults {
            services: &[
                "Property Listings",
                "Buyer Consultation",
                "Seller Consultation",
                "Market Analysis",
                "Open Houses",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::LeadCapture,
            weekday_hours: "9:00 AM - 7:00 PM",
            weekend_hours: "10:00 AM - 4:00 PM",
        },
    ),
    (
        "Restaurant",
        IndustryDefaults {
            services: &[
                "Reservations",
                "Takeout Orders",
                "Catering Inquiries",
                "Event Booking",
                "Menu Questions",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::Voicemail,
            weekday_hours: "11:00 AM - 10:00 PM",
            weekend_hours: "11:00 AM - 11:00 PM",
        },
    ),
    (
        "Salon/Spa",
        IndustryDefaults {
            services: &["Haircuts", "Coloring", "Spa Treatments", "Nails", "Appointments"],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::LeadCapture,
            weekday_hours: "9:00 AM - 7:00 PM",
            weekend_hours: "9:00 AM - 5:00 PM",
        },
    ),
    (
        "Fitness",
        IndustryDefaults {
            services: &[
                "Membership Inquiries",
                "Class Schedules",
                "Personal Training",
                "Tours",
                "Billing Questions",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::LeadCapture,
            weekday_hours: "5:00 AM - 10:00 PM",
            weekend_hours: "7:00 AM - 8:00 PM",
        },
    ),
    (
        "Pet Services",
        IndustryDefaults {
            services: &[
                "Grooming",
                "Boarding",
                "Daycare",
                "Veterinary Appointments",
                "Pet Sitting",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::EmergencyTransfer,
            weekday_hours: "7:00 AM - 7:00 PM",
            weekend_hours: "8:00 AM - 5:00 PM",
        },
    ),
    (
        "Home Services",
        IndustryDefaults {
            services: &[
                "General Repairs",
                "Handyman Services",
                "Installations",
                "Maintenance",
                "Estimates",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::LeadCapture,
            weekday_hours: "8:00 AM - 6:00 PM",
            weekend_hours: "9:00 AM - 3:00 PM",
        },
    ),
    (
        "Professional Services",
        IndustryDefaults {
            services: &[
                "Consultations",
                "Project Inquiries",
                "Quotes",
                "Support",
                "General Questions",
            ],
            tone: Tone::Professional,
            after_hours_goal: AfterHoursGoal::Voicemail,
            weekday_hours: "9:00 AM - 5:00 PM",
            weekend_hours: "Closed",
        },
    ),
    (
        "Retail",
        IndustryDefaults {
            services: &[
                "Product Inquiries",
                "Order Status",
                "Returns",
                "Store Hours",
                "Availability",
            ],
            tone: Tone::Friendly,
            after_hours_goal: AfterHoursGoal::Voicemail,
            weekday_hours: "10:00 AM - 8:00 PM",
            weekend_hours: "10:00 AM - 6:00 PM",
        },
    ),
    (
        "Other",
        IndustryDefaults {
            services: &[
                "General Inquiries",
                "Appointments",
                "Information",
                "Support",
                "Callback Request",
            ],
            tone: Tone::Professional,
            after_hours_goal: AfterHoursGoal::LeadCapture,
            weekday_hours: "9:00 AM - 5:00 PM",
            weekend_hours: "Closed",
        },
    ),
];

/// Defaults for an industry label; unknown labels fall back to "Other".
pub fn for_industry(industry: &str) -> &'static IndustryDefaults {
    for (label, d) in INDUSTRY_DEFAULTS {
        if *label == industry {
            return d;
        }
    }
    // The last table entry ("Other") is the catch-all.
    &INDUSTRY_DEFAULTS[INDUSTRY_DEFAULTS.len() - 1].1
}

/// Industry labels with a defaults entry, in table order.
pub fn industries() -> impl Iterator<Item = &'static str> {
    INDUSTRY_DEFAULTS.iter().map(|(label, _)| *label)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
