use anyhow::{bail, Context};

pub mod motion;
pub mod nav;
pub mod presence;
pub mod structs;

use structs::SiteConfig;

impl SiteConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw).context("site config is not valid json")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            bail!("site name is empty");
        }
        for (i, link) in self.social_links.iter().enumerate() {
            if link.platform.trim().is_empty() {
                bail!("social link #{i} has no platform");
            }
            if !is_web_url(&link.url) {
                bail!(
                    "social link `{}` has a non-web url: `{}`",
                    link.platform,
                    link.url
                );
            }
            if self.social_links[..i]
                .iter()
                .any(|other| other.platform == link.platform)
            {
                bail!("social link `{}` is listed twice", link.platform);
            }
        }
        log::debug!(
            "site config ok: {} social links",
            self.social_links.len()
        );
        Ok(())
    }
}

pub fn is_web_url(url: &str) -> bool {
    ["https://", "http://"].iter().any(|scheme| {
        url.strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace))
    })
}
