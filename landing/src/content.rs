// Page content, deserialised from the embedded content/site.toml

use before_after_slider::SliderConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

const SITE_TOML: &str = include_str!("../content/site.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub log_level: String,
    pub business: Business,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub services: Services,
    pub gallery: Gallery,
    pub testimonials: Testimonials,
    pub contact: ContactSettings,
    pub footer: Footer,
    pub slider: SliderConfig,
}

impl SiteContent {
    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(SITE_TOML)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        if content.gallery.items.is_empty() {
            tracing::warn!("site content has no gallery items");
        }
        Ok(content)
    }

    /// Max level for the console logger; unknown values mean `INFO`.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Business {
    pub name: String,
    pub quote_cta: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    pub title_accent: String,
    pub description: String,
    pub cta_label: String,
    pub cta_href: String,
    pub before: String,
    pub after: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Brush,
    Shield,
    Wrench,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Services {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Service>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    pub title: String,
    pub before: String,
    pub after: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Gallery {
    pub heading: String,
    pub intro: String,
    pub items: Vec<GalleryItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub location: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Testimonials {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Testimonial>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub heading: String,
    pub intro: String,
    /// Form service URL; without one, submissions are simulated locally.
    pub endpoint: Option<String>,
    pub simulated_delay_ms: u64,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            heading: String::new(),
            intro: String::new(),
            endpoint: None,
            simulated_delay_ms: 1500,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub credits: Vec<NavLink>,
}
