//! Contact form state.

use comet_core::ContactMessage;

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Next field in focus order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    /// Previous field in focus order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

/// Editable contact form with a single focused field.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    focus: Field,
}

impl ContactForm {
    /// Currently focused field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a character to the focused field.
    pub fn input(&mut self, c: char) {
        self.value_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.value_mut().pop();
    }

    /// Current text of the given field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Build the wire payload. Empty optional fields are omitted so the
    /// relay applies its defaults; an empty message is rejected locally.
    pub fn to_message(&self, to: Option<String>) -> Result<ContactMessage, String> {
        if self.message.trim().is_empty() {
            return Err("message is required".to_string());
        }
        Ok(ContactMessage {
            to,
            from: non_empty(&self.email),
            subject: non_empty(&self.subject),
            message: self.message.clone(),
            name: non_empty(&self.name),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_forward_and_back() {
        let mut form = ContactForm::default();
        assert_eq!(form.focus(), Field::Name);
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus(), Field::Name);
        form.focus_prev();
        assert_eq!(form.focus(), Field::Message);
    }

    #[test]
    fn test_input_edits_the_focused_field() {
        let mut form = ContactForm::default();
        form.input('A');
        form.input('d');
        form.input('a');
        form.backspace();
        assert_eq!(form.value(Field::Name), "Ad");

        form.focus_next();
        form.input('x');
        assert_eq!(form.value(Field::Email), "x");
        assert_eq!(form.value(Field::Name), "Ad");
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let mut form = ContactForm::default();
        assert!(form.to_message(None).is_err());

        form.focus = Field::Message;
        form.input(' ');
        assert!(form.to_message(None).is_err());
    }

    #[test]
    fn test_to_message_omits_empty_optionals() {
        let mut form = ContactForm::default();
        form.focus = Field::Message;
        for c in "hello".chars() {
            form.input(c);
        }
        let msg = form.to_message(None).unwrap();
        assert_eq!(msg.message, "hello");
        assert_eq!(msg.to, None);
        assert_eq!(msg.from, None);
        assert_eq!(msg.subject, None);
        assert_eq!(msg.name, None);
    }

    #[test]
    fn test_to_message_carries_filled_fields() {
        let mut form = ContactForm::default();
        for c in "Ada".chars() {
            form.input(c);
        }
        form.focus = Field::Message;
        form.input('h');
        let msg = form.to_message(Some("owner@example.com".to_string())).unwrap();
        assert_eq!(msg.name.as_deref(), Some("Ada"));
        assert_eq!(msg.to.as_deref(), Some("owner@example.com"));
    }
}
