//! Outbound email construction from a contact-form payload.

use comet_core::ContactMessage;

/// A fully resolved outbound email, independent of any transport, so tests
/// can inspect it without an SMTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    /// Plain-text body.
    pub text: String,
    /// HTML body. User-supplied text is escaped before interpolation.
    pub html: String,
}

impl Email {
    /// Resolve a contact-form payload against the configured account
    /// address, which fills in whichever of recipient and sender the
    /// payload leaves out.
    pub fn from_contact(msg: &ContactMessage, account: &str) -> Self {
        let name = msg.name.as_deref().unwrap_or("");
        Self {
            from: non_empty(msg.from.as_deref())
                .unwrap_or(account)
                .to_string(),
            to: non_empty(msg.to.as_deref()).unwrap_or(account).to_string(),
            subject: resolve_subject(msg),
            text: msg.message.clone(),
            html: format!(
                "<div><strong>{}</strong></div><div>{}</div>",
                escape_html(name),
                escape_html(&msg.message),
            ),
        }
    }
}

/// Subject line: the payload's subject when present and non-empty,
/// otherwise `Message from {name or "website"}`.
fn resolve_subject(msg: &ContactMessage) -> String {
    match non_empty(msg.subject.as_deref()) {
        Some(subject) => subject.to_string(),
        None => format!(
            "Message from {}",
            non_empty(msg.name.as_deref()).unwrap_or("website")
        ),
    }
}

/// Empty strings count as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Escape user-supplied text for HTML interpolation.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
