use serde::{Deserialize, Serialize};

use courtside_catalog::Product;

use crate::remote::RemotePage;

/// Final, ordered and filtered page handed to presentation.
///
/// `has_prev`/`has_next` are the remote service's flags for the requested page;
/// they are not recomputed after local filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub items: Vec<Product>,
    pub current_page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl ResultPage {
    /// Zero results for `page`, used when the remote fetch failed.
    pub fn empty(page: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: page,
            has_prev: false,
            has_next: false,
        }
    }

    /// Keep the remote pagination flags, replace the items.
    pub fn from_remote(remote: &RemotePage, items: Vec<Product>) -> Self {
        Self {
            items,
            current_page: remote.current_page,
            has_prev: remote.has_prev,
            has_next: remote.has_next,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
