#![doc = svgbobdoc::transform!(
//! Keep one navigation sidebar in sync across the pages of a static site.
//!
//! # Overview
//!
//! A site's pages each embed the same sidebar, delimited by a container
//! marker pair, differing only in which link is marked as the current page.
//! This crate renders that sidebar from a [`Catalog`] and splices it into
//! every page of a directory:
//!
//! ```svgbob
//!  +---------+      +------------+      +----------+
//!  | Catalog +----->| SiteWalker +----->| Listing  |
//!  +---------+      +-----+------+      +----+-----+
//!                         |                  |
//!                         |       +----------+---------+
//!                         |       | Document ... Doc.. |
//!                         |       +----------+---------+
//!                         v                  |
//!                  +------+------+           |
//!                  |  sidebar::  |<----------+
//!                  |   render    |   identifier
//!                  +------+------+
//!                         |
//!                         v
//!              +----------+-----------+
//!              | Markers::find/splice |---> updated | unchanged | missing
//!              +----------------------+
//! ```
//!
//! In words, a pass over a site directory:
//!
//! 1. Lists the directory's files in file name order, keeping `*.html` files
//!    other than the landing page, `index.html`.
//! 2. Finds the first region of each page bounded by
//!    `<aside class="sidebar">` and `</aside>`.
//! 3. Renders the sidebar with the page's own link marked `class="active"`
//!    and replaces the region with it.
//! 4. Writes the page back only if it changed.
//!
//! Pages without a region are reported, not modified. Any I/O failure ends the
//! pass. Passes are idempotent: a second pass rewrites nothing.
//!
//! ```no_run
//! use sidenav::{Catalog, SiteWalker};
//! use sidenav::catalog::Category;
//!
//! let catalog = Catalog::new(vec![
//!     Category::new("Events", [("fire-ignition.html", "Fire Ignition")]),
//! ]);
//!
//! let report = SiteWalker::new(&catalog).process("site")?;
//! println!("{report}");
//! # Ok::<(), sidenav::error::Error>(())
//! ```
)]

#[macro_use]
pub mod error;
pub mod catalog;
pub mod format;
pub mod region;
pub mod sidebar;
pub mod listing;
pub mod walker;

pub use catalog::Catalog;
pub use walker::{Outcome, Report, SiteWalker};
