use sarthi::contact::{self, CHANNELS, Category, ContactForm, Error, FAQ};

fn form() -> ContactForm {
    ContactForm {
        name: "Simran Kaur".into(),
        email: "simran@example.in".into(),
        phone: String::new(),
        subject: "Refund for cancelled trip".into(),
        category: Category::Refund,
        message: "My 6:30 bus was cancelled.".into(),
    }
}

#[test]
fn valid_form_is_acknowledged() {
    assert_eq!(contact::submit(form()), Ok(contact::ACKNOWLEDGEMENT));
}

#[test]
fn phone_is_optional() {
    let mut with_phone = form();
    with_phone.phone = "+91 98765 43210".into();
    assert!(with_phone.validate().is_ok());
    assert!(form().validate().is_ok());
}

#[test]
fn required_fields() {
    let mut missing = form();
    missing.name = "  ".into();
    assert_eq!(missing.validate(), Err(Error::MissingField("name")));

    let mut missing = form();
    missing.message = String::new();
    assert_eq!(missing.validate(), Err(Error::MissingField("message")));
}

#[test]
fn malformed_email() {
    let mut bad = form();
    bad.email = "simran@example".into();
    assert_eq!(
        bad.validate(),
        Err(Error::InvalidEmail("simran@example".into()))
    );
}

#[test]
fn category_defaults_to_general() {
    assert_eq!(Category::default(), Category::General);
    assert_eq!(Category::ALL.len(), 6);
    assert_eq!(Category::Technical.label(), "Technical Support");
}

#[test]
fn static_content() {
    assert_eq!(CHANNELS[1].details, "support@sarthi.com");
    assert_eq!(FAQ.len(), 5);
    assert!(FAQ[0].answer.starts_with("Go to the Ticketing page"));
}
