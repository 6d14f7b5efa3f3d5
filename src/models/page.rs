use serde::{Deserialize, Serialize};
use url::Url;

/// A hypermedia link attached to Atlas resources and list envelopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
}

/// The envelope every Atlas list endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    /// The `next` link, present when more pages are available.
    pub fn next_link(&self) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == "next")
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Paging options accepted by every list endpoint.
///
/// # Examples
///
/// ```
/// use atlas_api::models::ListOptions;
///
/// let options = ListOptions::builder()
///     .page_num(2)
///     .items_per_page(50)
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, typed_builder::TypedBuilder)]
#[builder(doc)]
pub struct ListOptions {
    /// One-based page to return
    #[builder(default, setter(strip_option))]
    pub page_num: Option<u32>,
    /// Number of items per page (Atlas caps this at 500)
    #[builder(default, setter(strip_option))]
    pub items_per_page: Option<u32>,
    /// Whether Atlas should compute `totalCount`
    #[builder(default, setter(strip_option))]
    pub include_count: Option<bool>,
}

impl ListOptions {
    /// Appends the set options to the query string of `url`.
    pub(crate) fn apply(&self, url: &mut Url) {
        let pairs = [
            ("pageNum", self.page_num.map(|n| n.to_string())),
            ("itemsPerPage", self.items_per_page.map(|n| n.to_string())),
            ("includeCount", self.include_count.map(|b| b.to_string())),
        ];

        if pairs.iter().all(|(_, value)| value.is_none()) {
            return;
        }

        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            if let Some(value) = value {
                query.append_pair(key, &value);
            }
        }
    }
}
