//! Page rendering for the browser bootstrap
//!
//! Uses the Tera templating engine with templates embedded at compile time:
//! - `index_static.html`: landing page that fetches the SDK loader from `/google-maps-api`
//! - `index_templated.html`: landing page with the API key embedded
//! - `maps_loader.js`: script that injects the Maps JavaScript SDK tag
//!
//! The static page and the loader do not change at runtime and are rendered
//! once when the renderer is built.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::{DirectionsAppConfig, PageRenderer};
//!
//! let renderer = PageRenderer::new(&DirectionsAppConfig::with_api_key("key"))?;
//! let js = renderer.maps_loader_js();
//! let html = renderer.render_templated_index()?;
//! ```

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, DirectionsAppConfig, IndexPage};

const LAYOUT: &str = include_str!("../../templates/layout.html");
const INDEX_STATIC: &str = include_str!("../../templates/index_static.html");
const INDEX_TEMPLATED: &str = include_str!("../../templates/index_templated.html");
const MAPS_LOADER: &str = include_str!("../../templates/maps_loader.js");

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Invalid template context
    #[error("Invalid context: {0}")]
    Context(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Renders the landing page variants and the SDK loader script
pub struct PageRenderer {
    tera: Tera,
    api_key: SecretString,
    maps_script_src: SecretString,
    static_index: String,
    maps_loader: String,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("templates", &self.tera.get_template_names().count())
            .finish_non_exhaustive()
    }
}

impl PageRenderer {
    /// Compile the embedded templates and pre-render the static assets
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, `maps_js_url` is not a
    /// valid URL, or a template fails to compile.
    pub fn new(config: &DirectionsAppConfig) -> Result<Self, TemplateError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| TemplateError::Context(ConfigError::MissingApiKey.to_string()))?;

        let script_src = Url::parse_with_params(
            &config.maps_js_url,
            &[
                ("key", api_key),
                ("callback", "initMap"),
                ("libraries", "places"),
            ],
        )
        .map_err(|e| TemplateError::Context(format!("invalid maps_js_url: {e}")))?;

        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", LAYOUT),
            ("index_static.html", INDEX_STATIC),
            ("index_templated.html", INDEX_TEMPLATED),
            ("maps_loader.js", MAPS_LOADER),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        let static_index = tera.render("index_static.html", &Context::new())?;

        let mut loader_ctx = Context::new();
        loader_ctx.insert("maps_script_src", script_src.as_str());
        let maps_loader = tera.render("maps_loader.js", &loader_ctx)?;

        debug!("Page templates compiled");

        Ok(Self {
            tera,
            api_key: SecretString::from(api_key.to_string()),
            maps_script_src: SecretString::from(String::from(script_src)),
            static_index,
            maps_loader,
        })
    }

    /// The static landing page, served verbatim
    pub fn static_index(&self) -> &str {
        &self.static_index
    }

    /// Render the landing page with the API key embedded
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_templated_index(&self) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("GOOGLE_MAPS_API_KEY", self.api_key.expose_secret());
        ctx.insert("maps_script_src", self.maps_script_src.expose_secret());
        Ok(self.tera.render("index_templated.html", &ctx)?)
    }

    /// Landing page for the configured variant
    ///
    /// # Errors
    ///
    /// Returns an error if the templated variant fails to render.
    pub fn render_index(&self, page: IndexPage) -> Result<String, TemplateError> {
        match page {
            IndexPage::Static => Ok(self.static_index.clone()),
            IndexPage::Templated => self.render_templated_index(),
        }
    }

    /// JavaScript that appends the Maps SDK `<script>` tag to `document.head`
    pub fn maps_loader_js(&self) -> &str {
        &self.maps_loader
    }
}
