//! E-resources sheet parser.

use super::{ColumnMap, ResourceField, non_blank_lines, parse_line};
use crate::error::Result;
use crate::models::{EResource, ResourceIcon};

/// Parse the e-resources CSV export.
///
/// Headers sit on the first line. Rows without a title are dropped. An
/// empty document yields no resources; a header row with no title column
/// is an error.
pub fn parse_eresources(csv_text: &str) -> Result<Vec<EResource>> {
    let lines = non_blank_lines(csv_text);
    let Some((header_line, data)) = lines.split_first() else {
        return Ok(Vec::new());
    };

    let columns = ColumnMap::resolve(&parse_line(header_line))?;

    Ok(data
        .iter()
        .filter_map(|line| resource_from_values(&columns, &parse_line(line)))
        .collect())
}

fn resource_from_values(columns: &ColumnMap, values: &[String]) -> Option<EResource> {
    let get = |field| columns.value(field, values).unwrap_or("");

    let title = get(ResourceField::Title);
    if title.is_empty() {
        return None;
    }

    let description = get(ResourceField::Description);
    let category = match get(ResourceField::Category) {
        "" => "General",
        category => category,
    };
    let icon = match get(ResourceField::Icon) {
        "" => ResourceIcon::guess(category, description, get(ResourceField::AccessType)),
        name => ResourceIcon::from_name(name),
    };
    let url = match get(ResourceField::Url) {
        "" => "#",
        url => url,
    };
    let thumbnail = Some(get(ResourceField::Thumbnail))
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Some(EResource {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        icon,
        url: url.to_string(),
        thumbnail,
    })
}
