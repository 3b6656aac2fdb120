//! HTML page rendering via `minijinja`.
//!
//! The renderer knows nothing about lookups: handlers fetch records through
//! the query service and hand the typed records to [`Renderer`] together
//! with a [`Template`] id. Templates are compiled into the binary; an
//! operator may point the server at a directory of replacements, which are
//! read once at startup.
//!
//! All templates end in `.html`, so `minijinja` auto-escapes every
//! interpolated value.

use std::path::Path;

use colitas_types::{Animal, Shelter};
use minijinja::{Environment, context};
use serde::Serialize;

/// Name of the shared base layout every page extends.
const LAYOUT: &str = "layout.html";

/// Built-in template sources, keyed by file name.
const BUILTIN_TEMPLATES: [(&str, &str); 5] = [
    (LAYOUT, include_str!("../templates/layout.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("shelter.html", include_str!("../templates/shelter.html")),
    ("animal.html", include_str!("../templates/animal.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

/// Errors that can occur while loading or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A template override file could not be read.
    #[error("failed to read template {path}: {source}")]
    Io {
        /// Path of the unreadable file.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A template failed to compile.
    #[error("failed to compile template {name}: {source}")]
    Compile {
        /// Template file name.
        name: &'static str,
        /// The underlying template error.
        source: minijinja::Error,
    },

    /// A template failed to render.
    #[error("failed to render template {name}: {source}")]
    Render {
        /// Template file name.
        name: &'static str,
        /// The underlying template error.
        source: minijinja::Error,
    },
}

/// The pages the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Directory landing page listing every shelter.
    Index,
    /// Shelter detail page.
    Shelter,
    /// Animal detail page.
    Animal,
    /// Page shown when a shelter or animal does not exist.
    NotFound,
}

impl Template {
    /// The template's file name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Shelter => "shelter.html",
            Self::Animal => "animal.html",
            Self::NotFound => "not_found.html",
        }
    }
}

/// Social networks recognised when labelling a shelter's links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    /// A Facebook page.
    Facebook,
    /// An Instagram profile.
    Instagram,
    /// A Twitter profile.
    Twitter,
    /// Any other link.
    Other,
}

impl SocialNetwork {
    /// Classify a profile URL by the network it points to.
    pub fn from_url(url: &str) -> Self {
        let url = url.to_ascii_lowercase();
        if url.contains("facebook") {
            Self::Facebook
        } else if url.contains("instagram") {
            Self::Instagram
        } else if url.contains("twitter") {
            Self::Twitter
        } else {
            Self::Other
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Other => "Red Social",
        }
    }

    /// Font Awesome icon class.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Facebook => "fab fa-facebook-f",
            Self::Instagram => "fab fa-instagram",
            Self::Twitter => "fab fa-twitter",
            Self::Other => "fas fa-link",
        }
    }
}

/// A social link prepared for display.
#[derive(Debug, Clone, Serialize)]
struct SocialLink<'a> {
    url: &'a str,
    label: &'static str,
    icon: &'static str,
}

/// Renders directory pages from typed records.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Create a renderer using the templates compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Compile`] if a built-in template is invalid.
    pub fn builtin() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for (name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)
                .map_err(|source| RenderError::Compile { name, source })?;
        }
        Ok(Self { env })
    }

    /// Create a renderer loading every template from `dir`.
    ///
    /// The directory must contain `layout.html`, `index.html`,
    /// `shelter.html`, `animal.html` and `not_found.html`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if a file is missing or unreadable, or
    /// [`RenderError::Compile`] if a template is invalid.
    pub fn from_dir(dir: &Path) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for (name, _) in BUILTIN_TEMPLATES {
            let path = dir.join(name);
            let source = std::fs::read_to_string(&path).map_err(|source| RenderError::Io {
                path: path.display().to_string(),
                source,
            })?;
            env.add_template_owned(name, source)
                .map_err(|source| RenderError::Compile { name, source })?;
        }
        Ok(Self { env })
    }

    /// Render `template` with an arbitrary serializable context.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if evaluation fails.
    pub fn render<S: Serialize>(&self, template: Template, ctx: S) -> Result<String, RenderError> {
        let name = template.name();
        self.env
            .get_template(name)
            .and_then(|tpl| tpl.render(ctx))
            .map_err(|source| RenderError::Render { name, source })
    }

    /// Render the directory landing page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if evaluation fails.
    pub fn render_index(&self, shelters: &[Shelter]) -> Result<String, RenderError> {
        self.render(Template::Index, context! { shelters => shelters })
    }

    /// Render a shelter's detail page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if evaluation fails.
    pub fn render_shelter(&self, shelter: &Shelter) -> Result<String, RenderError> {
        let social_links: Vec<SocialLink<'_>> = shelter
            .contact
            .social_links
            .iter()
            .map(|url| {
                let network = SocialNetwork::from_url(url);
                SocialLink {
                    url,
                    label: network.label(),
                    icon: network.icon(),
                }
            })
            .collect();

        self.render(
            Template::Shelter,
            context! { shelter => shelter, social_links => social_links },
        )
    }

    /// Render an animal's detail page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if evaluation fails.
    pub fn render_animal(&self, shelter: &Shelter, animal: &Animal) -> Result<String, RenderError> {
        self.render(
            Template::Animal,
            context! {
                shelter => shelter,
                animal => animal,
                details => animal_details(animal),
            },
        )
    }

    /// Render the not-found page with an explanatory message.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if evaluation fails.
    pub fn render_not_found(&self, message: &str) -> Result<String, RenderError> {
        self.render(Template::NotFound, context! { message => message })
    }
}

/// The labelled facts shown in an animal's "Datos" section, skipping
/// anything the shelter did not publish.
fn animal_details(animal: &Animal) -> Vec<(&'static str, &str)> {
    [
        ("Edad", animal.age.as_deref()),
        ("Tamaño", animal.size.as_deref()),
        ("Color", animal.color.as_deref()),
        ("Sexo", animal.sex.as_deref()),
        ("Microchip", animal.microchip.as_deref()),
        ("Estado de salud", animal.health_status.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}
