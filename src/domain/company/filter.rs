//! Catalog filtering — free-text search combined with category selection.

use super::Company;

/// Category selector for the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// Matches every company.
    #[default]
    All,
    /// Case-sensitive exact match on the company's category.
    Only(String),
}

impl CategorySelection {
    fn matches(&self, company: &Company) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => company.category == *category,
        }
    }
}

/// Filter a catalog snapshot.
///
/// The predicate is category AND text: the text test is a case-insensitive
/// substring match against name, symbol, category, and description, true if
/// any field contains the query. An empty query matches everything.
///
/// Stable: input order is preserved, nothing is re-sorted.
pub fn filter_companies<'a>(
    companies: &'a [Company],
    query: &str,
    category: &CategorySelection,
) -> Vec<&'a Company> {
    let needle = query.to_lowercase();
    companies
        .iter()
        .filter(|c| category.matches(c) && text_matches(c, &needle))
        .collect()
}

fn text_matches(company: &Company, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    company.name.to_lowercase().contains(needle)
        || company.symbol.to_lowercase().contains(needle)
        || company.category.to_lowercase().contains(needle)
        || company.description.to_lowercase().contains(needle)
}
