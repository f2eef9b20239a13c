//! Custom cell content shared by the list screens.

use leptos::prelude::*;
use thaw::*;

use crate::shared::api_utils::files_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Pending,
    Negative,
    Neutral,
}

pub fn status_tone(status: &str) -> StatusTone {
    match status {
        "Disponivel" | "Aprovar" | "Publicado" => StatusTone::Positive,
        "Fila" | "Programado" => StatusTone::Pending,
        "Indisponivel" | "Rejeitar" | "Spam" | "Lixeira" => StatusTone::Negative,
        _ => StatusTone::Neutral,
    }
}

pub fn status_badge(status: String) -> AnyView {
    let color = match status_tone(&status) {
        StatusTone::Positive => BadgeColor::Success,
        StatusTone::Pending => BadgeColor::Warning,
        StatusTone::Negative => BadgeColor::Danger,
        StatusTone::Neutral => BadgeColor::Informative,
    };
    view! { <Badge color=color>{status}</Badge> }.into_any()
}

/// Round thumbnail of an uploaded file, or a grey placeholder.
pub fn thumbnail(file: Option<String>, alt: String) -> AnyView {
    match file.filter(|f| !f.is_empty()) {
        Some(file) => view! {
            <img class="table__thumbnail" src=files_url(&file) alt=alt width="32" height="32" />
        }
        .into_any(),
        None => view! { <div class="table__thumbnail table__thumbnail--empty"></div> }.into_any(),
    }
}

/// Text, or a muted hint when there is none.
pub fn text_or_hint(value: Option<String>, hint: &'static str) -> AnyView {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(text) => view! { <span>{text}</span> }.into_any(),
        None => view! { <span class="table__hint">{hint}</span> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_cover_every_status_family() {
        assert_eq!(status_tone("Disponivel"), StatusTone::Positive);
        assert_eq!(status_tone("Fila"), StatusTone::Pending);
        assert_eq!(status_tone("Spam"), StatusTone::Negative);
        assert_eq!(status_tone("whatever"), StatusTone::Neutral);
    }
}
