use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
    pub icon: NavIcon,
}

impl NavItem {
    /// Exact path equality, dropdowns are never active.
    pub fn is_active(&self, current_path: &str) -> bool {
        match self.target {
            NavTarget::Link(path) => path == current_path,
            NavTarget::Dropdown(_) => false,
        }
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self.target, NavTarget::Dropdown(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Link(&'static str),
    Dropdown(&'static [SubNavItem]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubNavItem {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Sparkles,
    Code,
    Zap,
    ExternalLink,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}
