//! # Kodama - Logic Tree Model and Renderer
//!
//! **Kodama** models the logic trees a live-operations team uses to describe game events
//! (triggers, conditions, actions and branches), and renders them as an indented listing
//! with per-node status badges, metadata summaries and a detail panel for the node being
//! inspected.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Forest**: Get a validated [`Forest`](node::Forest) from a
//!     [`ForestProvider`](data::ForestProvider), either the built-in fixture or a JSON file.
//! 2.  **Build a View**: Wrap it in a [`LogicTreeView`](view::LogicTreeView), which owns the
//!     selection state and the root-level counters.
//! 3.  **Render**: Produce [`NodeRow`](render::NodeRow)s in pre-order, or the whole screen as text.
//! 4.  **Inspect**: `click` a row's node id to open its detail panel, `dismiss` to close it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kodama::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let forest = StaticForestProvider.logic_forest()?;
//!     let mut view = LogicTreeView::new(forest);
//!
//!     println!("Active trees: {}", view.stats().active);
//!     for row in view.rows() {
//!         println!("{}{}", " ".repeat(row.indent), row.node.title);
//!     }
//!
//!     view.click("node-2-1-1");
//!     if let Some(panel) = view.detail() {
//!         println!("{}", TextFormatter::format_detail(&panel));
//!     }
//!     view.dismiss();
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod data;
pub mod error;
pub mod forms;
pub mod node;
pub mod prelude;
pub mod render;
pub mod selection;
pub mod stats;
pub mod view;
