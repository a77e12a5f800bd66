use std::fmt;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::listing::{Document, Listing};
use crate::region::Markers;
use crate::sidebar;

/// The page that never receives the shared sidebar.
pub const LANDING_PAGE: &str = "index.html";

/// File name suffix of the pages that do.
pub const DOCUMENT_SUFFIX: &str = ".html";

/// What happened to a single document during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The sidebar differed and the document was rewritten.
    Updated,
    /// The sidebar was already current; nothing was written.
    Unchanged,
    /// The document has no sidebar region; nothing was written.
    MissingRegion,
}

/// The tally of a full pass over a site directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub updated: usize,
    pub unchanged: usize,
    /// File names of documents without a sidebar region.
    pub missing: Vec<String>,
    /// Every processed document's file name and outcome, in processing order.
    pub outcomes: Vec<(String, Outcome)>,
}

/// Rewrites the sidebar region of every page in a site directory.
#[derive(Debug, Clone, Copy)]
pub struct SiteWalker<'c> {
    catalog: &'c Catalog,
}

impl<'c> SiteWalker<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        SiteWalker { catalog }
    }

    /// Whether a document named `file_name` takes part in a pass.
    pub fn selects(&self, file_name: &str) -> bool {
        file_name.ends_with(DOCUMENT_SUFFIX) && file_name != LANDING_PAGE
    }

    /// Processes every selected document in `root`. See
    /// [`SiteWalker::process_with()`].
    pub fn process<P: AsRef<Path>>(&self, root: P) -> Result<Report> {
        self.process_with(root, |_, _| ())
    }

    /// Processes every selected document in `root` in file name order,
    /// calling `progress` as soon as each document's outcome is known.
    ///
    /// Entries that are not selected are never opened or resolved. The first
    /// read or write failure aborts the pass. Documents rewritten before the
    /// failure stay rewritten; running the pass again is safe.
    pub fn process_with<P, F>(&self, root: P, mut progress: F) -> Result<Report>
        where P: AsRef<Path>, F: FnMut(&Document, Outcome)
    {
        let mut report = Report::default();
        for document in Listing::read(root, |name| self.selects(name))?.iter() {
            let outcome = self.update(document)?;
            progress(document, outcome);
            report.record(document, outcome);
        }

        Ok(report)
    }

    /// Splices a freshly rendered sidebar into `document`, writing it back
    /// only if its contents changed.
    pub fn update(&self, document: &Document) -> Result<Outcome> {
        let content = document.read()?;
        let sidebar = sidebar::render(self.catalog, document.identifier());
        let Some(updated) = Markers::SIDEBAR.splice(&content, &sidebar) else {
            log::info!("no sidebar region in {}", document.path.display());
            return Ok(Outcome::MissingRegion);
        };

        if updated == content {
            return Ok(Outcome::Unchanged);
        }

        document.write(&updated)?;
        Ok(Outcome::Updated)
    }
}

impl Report {
    fn record(&mut self, document: &Document, outcome: Outcome) {
        match outcome {
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::MissingRegion => self.missing.push(document.file_name.clone()),
        }

        self.outcomes.push((document.file_name.clone(), outcome));
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Done. {} files updated, {} unchanged.", self.updated, self.unchanged)
    }
}
