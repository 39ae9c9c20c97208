//! Command-line options for the linkmap subcommands.

use std::path::PathBuf;

use clap::Args;

use linkmap_core::{CatalogOptions, CollisionPolicy};
use linkmap_dot::{DOCS_BASE_URL, RenderMode, RenderOptions};

/// Options for building the link table from the docs page tree.
#[derive(Args, Debug, Clone)]
pub struct LinksOptions {
    /// Page tree produced by the docs build
    #[arg(long, value_name = "FILE", default_value = "build/docs.json")]
    pub docs: PathBuf,

    /// Where to write the link table
    #[arg(long, value_name = "FILE", default_value = "build/links.json")]
    pub out: PathBuf,

    /// Fail if two pages claim the same route instead of warning
    #[arg(long)]
    pub strict: bool,
}

impl LinksOptions {
    pub fn new(docs: impl Into<PathBuf>, out: impl Into<PathBuf>) -> Self {
        Self {
            docs: docs.into(),
            out: out.into(),
            strict: false,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        let policy = if self.strict {
            CollisionPolicy::Fail
        } else {
            CollisionPolicy::Warn
        };
        CatalogOptions::new().with_collision_policy(policy)
    }
}

/// Options for rendering the link table to DOT.
#[derive(Args, Debug, Clone)]
pub struct DotOptions {
    /// Focus: nothing or `all` for every route, `overview` for the
    /// tutorial and guides, otherwise route prefixes to keep unfolded
    #[arg(value_name = "FOCUS")]
    pub focus: Vec<String>,

    /// Link table written by `linkmap links`
    #[arg(long, value_name = "FILE", default_value = "build/links.json")]
    pub links: PathBuf,

    /// Presentation level: plain, colored or shaped
    #[arg(long, default_value = "shaped")]
    pub mode: RenderMode,

    /// Base URL node links point to
    #[arg(long = "base-url", value_name = "URL", default_value = DOCS_BASE_URL)]
    pub base_url: String,

    /// Graphviz layout engine to request (e.g. sfdp)
    #[arg(long, value_name = "ENGINE")]
    pub layout: Option<String>,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl DotOptions {
    pub fn new(links: impl Into<PathBuf>) -> Self {
        Self {
            focus: Vec::new(),
            links: links.into(),
            mode: RenderMode::default(),
            base_url: DOCS_BASE_URL.to_string(),
            layout: None,
            output: None,
        }
    }

    pub fn with_focus<S: Into<String>>(mut self, focus: impl IntoIterator<Item = S>) -> Self {
        self.focus = focus.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_mode(self.mode)
            .with_base_url(self.base_url.clone())
            .with_layout(self.layout.clone())
    }
}
