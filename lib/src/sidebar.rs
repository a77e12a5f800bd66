use crate::catalog::{Catalog, Link};
use crate::region::Markers;

const INDENT: &str = "    ";
const CLOSE_INDENT: &str = "  ";

/// Renders the sidebar block for the page identified by `active`.
///
/// The block opens with [`Markers::SIDEBAR`]'s start marker and closes with
/// its end marker, one element per line. The first line is not indented: it
/// replaces a region that starts at the start marker, so the page keeps its
/// own indentation in front of it. Each category contributes a heading
/// followed by its links, and consecutive categories are separated by an
/// empty line. The link whose identifier equals `active` carries
/// `class="active"`; if there is no such link, or `active` is `None`, no link
/// is marked.
///
/// Titles, labels, and identifiers are written verbatim.
///
/// ```
/// use sidenav::catalog::{Catalog, Category};
/// use sidenav::sidebar::render;
///
/// let catalog = Catalog::new(vec![
///     Category::new("Events", [("a.html", "A"), ("b.html", "B")]),
/// ]);
///
/// assert_eq!(render(&catalog, "a.html"), "<aside class=\"sidebar\">
///     <h3>Events</h3>
///     <a href=\"a.html\" class=\"active\">A</a>
///     <a href=\"b.html\">B</a>
///   </aside>");
/// ```
pub fn render<'a, A: Into<Option<&'a str>>>(catalog: &Catalog, active: A) -> String {
    let active = active.into();
    let mut output = String::with_capacity(64 * (catalog.len() + catalog.links().count()));

    output.push_str(Markers::SIDEBAR.start);
    for (i, category) in catalog.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        output.push_str(&format!("\n{INDENT}<h3>{}</h3>", category.title));
        for link in &category.links {
            output.push('\n');
            render_link(&mut output, link, active == Some(link.id.as_str()));
        }
    }

    output.push('\n');
    output.push_str(CLOSE_INDENT);
    output.push_str(Markers::SIDEBAR.end);
    log::trace!("rendered sidebar for {:?}: {} bytes", active, output.len());
    output
}

fn render_link(output: &mut String, link: &Link, active: bool) {
    let class = if active { " class=\"active\"" } else { "" };
    output.push_str(&format!("{INDENT}<a href=\"{}\"{class}>{}</a>", link.id, link.label));
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::catalog::{Catalog, Category};

    const ACTIVE: &str = "class=\"active\"";

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Category::new("Events &amp; Simulation", [
                ("fire-ignition.html", "Fire Ignition"),
                ("crime-trigger.html", "Crime Trigger"),
            ]),
            Category::new("Governance", [
                ("zoning.html", "Zoning"),
                ("map-tile-purchase.html", "Map Tile Purchase"),
            ]),
            Category::new("Environment", [("pollution.html", "Pollution")]),
        ])
    }

    #[test]
    fn exact_layout() {
        let expected = [
            "<aside class=\"sidebar\">",
            "    <h3>Events &amp; Simulation</h3>",
            "    <a href=\"fire-ignition.html\">Fire Ignition</a>",
            "    <a href=\"crime-trigger.html\">Crime Trigger</a>",
            "",
            "    <h3>Governance</h3>",
            "    <a href=\"zoning.html\" class=\"active\">Zoning</a>",
            "    <a href=\"map-tile-purchase.html\">Map Tile Purchase</a>",
            "",
            "    <h3>Environment</h3>",
            "    <a href=\"pollution.html\">Pollution</a>",
            "  </aside>",
        ];

        assert_eq!(render(&catalog(), "zoning.html"), expected.join("\n"));
    }

    #[test]
    fn exactly_one_link_is_active() {
        let catalog = catalog();
        for link in catalog.links() {
            let sidebar = render(&catalog, link.id.as_str());
            assert_eq!(sidebar.matches(ACTIVE).count(), 1, "{}", link.id);

            let active_line = sidebar.lines().find(|l| l.contains(ACTIVE)).unwrap();
            assert!(active_line.contains(&format!("href=\"{}\"", link.id)));
        }
    }

    #[test]
    fn unknown_or_missing_identifier_marks_nothing() {
        let catalog = catalog();
        assert_eq!(render(&catalog, "index.html").matches(ACTIVE).count(), 0);
        assert_eq!(render(&catalog, "").matches(ACTIVE).count(), 0);
        assert_eq!(render(&catalog, None).matches(ACTIVE).count(), 0);
        assert_eq!(render(&catalog, "index.html"), render(&catalog, None));
    }

    #[test]
    fn rendering_is_deterministic() {
        let catalog = catalog();
        assert_eq!(render(&catalog, "pollution.html"), render(&catalog, "pollution.html"));
        assert_eq!(render(&catalog, "pollution.html"), render(&catalog.clone(), "pollution.html"));
    }

    #[test]
    fn empty_catalog_is_just_the_container() {
        let sidebar = render(&Catalog::default(), "a.html");
        assert_eq!(sidebar, "<aside class=\"sidebar\">\n  </aside>");
    }

    #[test]
    fn empty_category_renders_its_heading() {
        let catalog = Catalog::new(vec![
            Category::new("Empty", Vec::<(&str, &str)>::new()),
            Category::new("Last", Vec::<(&str, &str)>::new()),
        ]);

        let sidebar = render(&catalog, None);
        assert_eq!(sidebar, "<aside class=\"sidebar\">\n    <h3>Empty</h3>\n\n    <h3>Last</h3>\n  </aside>");
    }
}
