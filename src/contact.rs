use dto::member::Member;
use regex::Regex;
use std::sync::LazyLock;

const WHATSAPP_URL: &str = "https://wa.me/";
static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9]").expect("Static regex should be valid"));

/// Plain-text contact card, meant to be pasted elsewhere.
pub fn share_text(member: &Member) -> String {
    let mut lines = vec![
        format!("Contacto: {}", member.name()),
        format!("Cargo: {}", member.position()),
        format!("Institución: {}", member.institution()),
        format!("País: {}", member.country()),
        format!("Correo: {}", member.email()),
    ];
    if let Some(phone) = not_blank(member.phone()) {
        lines.push(format!("Teléfono: {phone}"));
    }
    if let Some(whatsapp) = not_blank(member.whatsapp()) {
        lines.push(format!("WhatsApp: {whatsapp}"));
    }

    lines.join("\n")
}

/// Optional contact detail, missing when empty or only made of spaces.
pub fn not_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub fn whatsapp_link(number: &str) -> String {
    format!("{WHATSAPP_URL}{}", NON_DIGITS.replace_all(number, ""))
}
