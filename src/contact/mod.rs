//! Contact form, support channels and FAQ.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const ACKNOWLEDGEMENT: &str =
    "Thank you for contacting us! We will get back to you within 24 hours.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Field {0} is required")]
    MissingField(&'static str),
    #[error("{0} is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Booking,
    Refund,
    Technical,
    Feedback,
    Complaint,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Booking,
        Category::Refund,
        Category::Technical,
        Category::Feedback,
        Category::Complaint,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Booking => "booking",
            Category::Refund => "refund",
            Category::Technical => "technical",
            Category::Feedback => "feedback",
            Category::Complaint => "complaint",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Category::General => "General Inquiry",
            Category::Booking => "Booking Issues",
            Category::Refund => "Refund Request",
            Category::Technical => "Technical Support",
            Category::Feedback => "Feedback",
            Category::Complaint => "Complaint",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    #[serde(default)]
    pub category: Category,
    pub message: String,
}

/// `local@domain.tld` with no whitespace. Good enough for a demo form.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), self::Error> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::MissingField(*field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(Error::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }
}

/// Accepts the form and drops it, nothing is stored or sent.
pub fn submit(form: ContactForm) -> Result<&'static str, self::Error> {
    form.validate()?;
    info!(
        "Contact request [{}] from {}: {}",
        form.category.key(),
        form.email.trim(),
        form.subject.trim()
    );
    Ok(ACKNOWLEDGEMENT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub title: &'static str,
    pub details: &'static str,
    pub subtitle: &'static str,
}

pub const CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        title: "Phone Support",
        details: "+91 98765 43210",
        subtitle: "Available 24/7",
    },
    ContactChannel {
        title: "Email Support",
        details: "support@sarthi.com",
        subtitle: "Response within 2 hours",
    },
    ContactChannel {
        title: "Office Address",
        details: "Sector 17, Chandigarh",
        subtitle: "Punjab, India 160017",
    },
    ContactChannel {
        title: "Operating Hours",
        details: "24/7 Service",
        subtitle: "Always here to help",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [Faq; 5] = [
    Faq {
        question: "How do I book a bus ticket?",
        answer: "Go to the Ticketing page, select your route, date, and number of passengers, then choose from available buses and complete the payment.",
    },
    Faq {
        question: "Can I track my bus in real-time?",
        answer: "Yes! Use our ETA page to track your bus location, get real-time updates, and see accurate arrival times.",
    },
    Faq {
        question: "What if my bus is delayed?",
        answer: "You will receive automatic notifications about delays. You can also report delays through the ETA tracking page.",
    },
    Faq {
        question: "How do I cancel my booking?",
        answer: "Contact our support team with your booking reference. Cancellation policies apply based on timing and route.",
    },
    Faq {
        question: "Are there student discounts available?",
        answer: "Yes, we offer student discounts at selected routes. Contact support with valid student ID for more information.",
    },
];

#[test]
fn email_shapes() {
    assert!(is_valid_email("support@sarthi.com"));
    assert!(!is_valid_email("support@sarthi"));
    assert!(!is_valid_email("@sarthi.com"));
    assert!(!is_valid_email("a b@sarthi.com"));
    assert!(!is_valid_email("a@b@sarthi.com"));
}
