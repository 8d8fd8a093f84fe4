use scraper::{Html, Selector};

/// Label block that precedes the description text in a result entry.
pub const MARKER: &str = "Description";

/// Marker scan over a parsed page snapshot.
///
/// Walks the text blocks of the results container in document order; once a
/// block containing [`MARKER`] has been seen, the next non-empty block is
/// the description. The scan keys on the label rather than a fixed CSS
/// path, so it survives the result cards being restructured as long as the
/// label still precedes the text.
pub fn description_from_page(doc: &Html, sel_results: &Selector) -> Option<String> {
    let container = doc.select(sel_results).next()?;

    let mut armed = false;
    for block in container.text().map(str::trim) {
        if block.is_empty() {
            continue;
        }
        if armed {
            return Some(block.to_owned());
        }
        if block.contains(MARKER) {
            armed = true;
        }
    }

    None
}
