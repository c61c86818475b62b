use common::structs::NavIcon;
use yew::prelude::*;

/// Stroke icons, path data from the lucide set (24x24 viewbox).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Nav(NavIcon),
    Close,
    ChevronDown,
    Menu,
}

impl Glyph {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Nav(NavIcon::Sparkles) => &[
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            Glyph::Nav(NavIcon::Code) => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Glyph::Nav(NavIcon::Zap) => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Glyph::Nav(NavIcon::ExternalLink) => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::ChevronDown => &["m6 9 6 6 6-6"],
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        }
    }
}

#[function_component]
pub fn Icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.glyph.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

/// Image for a social platform. Unknown platforms have no icon.
pub fn social_icon(platform: &str) -> Option<&'static str> {
    match platform {
        "GitHub" => Some("/assets/github.svg"),
        "LinkedIn" => Some("/assets/linkedin.svg"),
        "Instagram" => Some("/assets/instagram.svg"),
        "WhatsApp" => Some("/assets/whatsapp.svg"),
        "Discord" => Some("/assets/discord.svg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms_resolve() {
        for platform in ["GitHub", "LinkedIn", "Instagram", "WhatsApp", "Discord"] {
            assert!(social_icon(platform).is_some(), "{platform}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive_and_total() {
        assert_eq!(social_icon("github"), None);
        assert_eq!(social_icon("Mastodon"), None);
        assert_eq!(social_icon(""), None);
    }

    #[test]
    fn every_glyph_has_paths() {
        let glyphs = [
            Glyph::Nav(NavIcon::Sparkles),
            Glyph::Nav(NavIcon::Code),
            Glyph::Nav(NavIcon::Zap),
            Glyph::Nav(NavIcon::ExternalLink),
            Glyph::Close,
            Glyph::ChevronDown,
            Glyph::Menu,
        ];
        for glyph in glyphs {
            assert!(!glyph.paths().is_empty(), "{glyph:?}");
        }
    }
}
