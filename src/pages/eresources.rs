//! E-resources directory page.

use crate::models::EResource;
use crate::services::{ALL, ResourceDirectory};
use crate::utils::{console, get_domain};

/// Host shown under a resource; `#` and unparseable links show nothing.
pub fn link_label(resource: &EResource) -> Option<String> {
    if resource.url == "#" {
        return None;
    }
    get_domain(&resource.url)
}

pub fn render(directory: &ResourceDirectory, category: &str) {
    console::header("E-Resources");
    console::line(&format!(
        "Categories: {}",
        directory.categories().join(", ")
    ));

    let visible = directory.by_category(category);
    if category.eq_ignore_ascii_case(ALL) {
        console::section(&format!("{} resources", visible.len()));
    } else {
        console::section(&format!("{} resources in {}", visible.len(), category));
    }
    if visible.is_empty() {
        console::line("No e-resources available.");
        return;
    }

    for resource in visible {
        console::sub_item(&format!("[{}] {}", resource.icon, resource.title));
        if !resource.description.is_empty() {
            console::line(&format!("      {}", resource.description));
        }
        match link_label(resource) {
            Some(host) => console::line(&format!("      {} ({})", resource.url, host)),
            None => console::line("      (no link)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceIcon;

    fn resource(url: &str) -> EResource {
        EResource {
            title: "NPTEL".into(),
            description: String::new(),
            category: "Courses".into(),
            icon: ResourceIcon::Globe,
            url: url.into(),
            thumbnail: None,
        }
    }

    #[test]
    fn test_link_label() {
        assert_eq!(
            link_label(&resource("https://nptel.ac.in/courses")).as_deref(),
            Some("nptel.ac.in")
        );
        assert_eq!(link_label(&resource("#")), None);
        assert_eq!(link_label(&resource("not a url")), None);
    }
}
