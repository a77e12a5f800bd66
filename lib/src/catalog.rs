use derive_more::Deref;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::Result;
use crate::format::{Format, Toml};

/// The ordered navigation tree shared by every page of a site.
///
/// A catalog is built once per run and then only read. Order is significant:
/// categories and their links render top to bottom in the order given here.
///
/// The TOML form is a list of `[[category]]` tables, each with a `title` and
/// a list of `[identifier, label]` pairs:
///
/// ```toml
/// [[category]]
/// title = "Events &amp; Simulation"
/// links = [
///     ["fire-ignition.html", "Fire Ignition"],
///     ["crime-trigger.html", "Crime Trigger"],
/// ]
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(rename = "category", default)]
    categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Heading text. May already contain markup, such as `&amp;`.
    pub title: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Link {
    /// The navigation target; matches a document's file name.
    pub id: String,
    pub label: String,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Catalog { categories }
    }

    /// Parses a catalog from its TOML form.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(Toml::from_str(source)?)
    }

    /// Every link in render order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.categories.iter().flat_map(|c| c.links.iter())
    }

    /// Identifiers that appear more than once, in order of their second
    /// appearance. Rendering marks every duplicate active, so callers may
    /// want to warn about these.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.links()
            .map(|link| link.id.as_str())
            .filter(|id| !seen.insert(*id))
            .collect()
    }
}

impl Category {
    pub fn new<T, I, K, V>(title: T, links: I) -> Self
        where T: Into<String>,
              I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>,
    {
        Category {
            title: title.into(),
            links: links.into_iter().map(|(id, label)| Link::new(id, label)).collect(),
        }
    }
}

impl Link {
    pub fn new<I: Into<String>, L: Into<String>>(id: I, label: L) -> Self {
        Link { id: id.into(), label: label.into() }
    }
}

impl From<(String, String)> for Link {
    fn from((id, label): (String, String)) -> Self {
        Link { id, label }
    }
}

#[cfg(test)] static_assertions::assert_impl_all!(Catalog: Send, Sync);
#[cfg(test)] static_assertions::assert_impl_all!(Category: Send, Sync);
