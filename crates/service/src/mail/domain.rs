use models::client_info::ClientSubmission;
use serde::{Deserialize, Serialize};

/// A fully addressed plain-text message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// What the relay answered when it accepted a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailReceipt {
    pub code: String,
    pub message: String,
}

impl std::fmt::Display for MailReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

/// Plain-text notification for one submission. Absent fields render empty.
pub fn notification_body(form: &ClientSubmission) -> String {
    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}\n",
        field(&form.name),
        field(&form.email),
        field(&form.phone),
        field(&form.message),
    )
}

impl OutgoingMail {
    pub fn for_submission(form: &ClientSubmission, from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: form.subject.clone().unwrap_or_default(),
            body: notification_body(form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_lists_contact_details_then_message() {
        let form = ClientSubmission {
            name: Some("Ana".into()),
            email: Some("ana@example.com".into()),
            phone: Some("555".into()),
            subject: Some("Hello".into()),
            message: Some("Line one\nLine two".into()),
        };
        assert_eq!(
            notification_body(&form),
            "Name: Ana\nEmail: ana@example.com\nPhone: 555\n\nMessage:\nLine one\nLine two\n"
        );
    }

    #[test]
    fn subject_is_not_part_of_body() {
        let form = ClientSubmission { subject: Some("Pricing".into()), ..Default::default() };
        let mail = OutgoingMail::for_submission(&form, "site@example.com", "office@example.com");
        assert_eq!(mail.subject, "Pricing");
        assert!(!mail.body.contains("Pricing"));
        assert_eq!(mail.from, "site@example.com");
        assert_eq!(mail.to, "office@example.com");
    }

    #[test]
    fn absent_fields_render_empty() {
        let mail = OutgoingMail::for_submission(&ClientSubmission::default(), "a@x.io", "b@x.io");
        assert_eq!(mail.subject, "");
        assert_eq!(mail.body, "Name: \nEmail: \nPhone: \n\nMessage:\n\n");
    }
}
