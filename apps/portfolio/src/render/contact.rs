//! Contact details block and the contact form markup.

use crate::models::portfolio::Contact;
use crate::render::html_escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    Linkedin,
    Github,
    Facebook,
}

/// Builds an absolute href for a contact value that may be stored without a scheme.
pub fn format_url(value: &str, kind: LinkKind) -> String {
    let has_scheme = value.starts_with("http");
    match kind {
        LinkKind::Email => format!("mailto:{value}"),
        _ if has_scheme => value.to_string(),
        LinkKind::Linkedin | LinkKind::Facebook => format!("https://www.{value}"),
        LinkKind::Github => format!("https://{value}"),
    }
}

pub fn render_contact_info(contact: &Contact) -> String {
    let mut html = String::new();
    let email = contact.email.trim();
    if !email.is_empty() {
        html.push_str(&link_item(
            &format_url(email, LinkKind::Email),
            false,
            "📧",
            "Email",
            email,
            "Click to send email",
        ));
    }

    let profiles = [
        (&contact.linkedin, LinkKind::Linkedin, "💼", "LinkedIn"),
        (&contact.github, LinkKind::Github, "🐙", "GitHub"),
    ];
    for (value, kind, icon, title) in profiles {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            html.push_str(&link_item(
                &format_url(value, kind),
                true,
                icon,
                title,
                value,
                "Visit profile →",
            ));
        }
    }

    html.push_str(&format!(
        r#"<div class="contact-item contact-static"><div class="contact-icon">📍</div><div class="contact-details"><h3>Location</h3><p>{}</p></div></div>
"#,
        html_escape(&contact.location)
    ));
    html
}

fn link_item(
    href: &str,
    external: bool,
    icon: &str,
    title: &str,
    text: &str,
    hint: &str,
) -> String {
    let target = if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a href="{href}"{target} class="contact-item contact-link"><div class="contact-icon">{icon}</div><div class="contact-details"><h3>{title}</h3><p>{text}</p><span class="contact-hint">{hint}</span></div></a>
"#,
        href = html_escape(href),
        text = html_escape(text),
    )
}

/// The form posts to the contact API; the page script shows the returned message inline.
pub fn render_contact_form() -> String {
    r#"<form id="contactForm" class="contact-form" action="/api/v1/contact" method="post" novalidate>
    <input type="text" name="name" placeholder="Your Name">
    <input type="email" name="email" placeholder="Your Email">
    <input type="text" name="subject" placeholder="Subject">
    <textarea name="message" rows="5" placeholder="Your Message"></textarea>
    <button type="submit" class="submit-btn">Send Message</button>
    <div class="form-message" id="formMessage" role="status"></div>
</form>
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_url_rules() {
        assert_eq!(format_url("me@x.io", LinkKind::Email), "mailto:me@x.io");
        assert_eq!(
            format_url("linkedin.com/in/me", LinkKind::Linkedin),
            "https://www.linkedin.com/in/me"
        );
        assert_eq!(
            format_url("facebook.com/me", LinkKind::Facebook),
            "https://www.facebook.com/me"
        );
        assert_eq!(
            format_url("github.com/me", LinkKind::Github),
            "https://github.com/me"
        );
        assert_eq!(
            format_url("https://github.com/me", LinkKind::Github),
            "https://github.com/me"
        );
    }

    #[test]
    fn test_missing_profiles_are_skipped() {
        let html = render_contact_info(&Contact {
            email: "me@x.io".to_string(),
            github: Some("github.com/me".to_string()),
            location: "Cebu".to_string(),
            ..Default::default()
        });
        assert!(html.contains(r#"href="mailto:me@x.io""#));
        assert!(html.contains(r#"href="https://github.com/me""#));
        assert!(!html.contains("LinkedIn"));
        assert!(html.contains("<p>Cebu</p>"));
    }

    #[test]
    fn test_blank_email_is_skipped() {
        let html = render_contact_info(&Contact {
            email: "  ".to_string(),
            linkedin: Some("linkedin.com/in/me".to_string()),
            ..Default::default()
        });
        assert!(!html.contains("mailto:"));
        assert!(!html.contains("<h3>Email</h3>"));
        assert!(html.contains(r#"href="https://www.linkedin.com/in/me""#));
    }
}
