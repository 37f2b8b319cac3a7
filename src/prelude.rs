//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to load, render and inspect a logic forest.
//!
//! # Example
//!
//! ```rust,no_run
//! use kodama::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let forest = JsonFileProvider::new("path/to/forest.json").logic_forest()?;
//! let options = RenderOptions::default().with_glyphs(GlyphSet::Ascii);
//! let rows = TreeRenderer::new(options).render(&forest);
//! print!("{}", TextFormatter::format_rows(&rows, &options));
//! # Ok(())
//! # }
//! ```

// Node model
pub use crate::node::{Forest, LogicNode, NodeId, NodeMetadata, NodeStatus, NodeType};

// Classification
pub use crate::classify::{
    BadgeTone, GlyphSet, IconKind, RateTone, SUCCESS_RATE_THRESHOLD, classify_status,
    classify_success_rate, classify_type,
};

// Rendering
pub use crate::render::{
    MetadataPart, MetadataSummary, NodeRow, RenderOptions, TextFormatter, TreeRenderer,
};

// Selection, counters and the screen container
pub use crate::selection::{DetailPanel, NodeAction, Selection};
pub use crate::stats::ForestStats;
pub use crate::view::LogicTreeView;

// Data sources and forms
pub use crate::data::{ForestProvider, JsonFileProvider, StaticForestProvider};
pub use crate::forms::{Priority, TreeDraft, TriggerKind};

// Error types
pub use crate::error::{FormError, ForestError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
