/// Top-level pages, kept in the URL hash so a reload lands on the same page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    History,
    Statistics,
    Settings,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::History, Page::Statistics, Page::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::History => "History",
            Page::Statistics => "Statistics",
            Page::Settings => "Settings",
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Page::Dashboard => "#dashboard",
            Page::History => "#history",
            Page::Statistics => "#statistics",
            Page::Settings => "#settings",
        }
    }

    /// Unknown or empty hashes open the dashboard
    pub fn from_hash(hash: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|p| p.hash() == hash)
            .unwrap_or_default()
    }

    /// Page named by the current location
    pub fn current() -> Page {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| Page::from_hash(&h))
            .unwrap_or_default()
    }

    pub fn remember(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(self.hash()) {
                log::warn!("Could not remember page {}: {:?}", self.title(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_hash(page.hash()), page);
        }
        assert_eq!(Page::from_hash(""), Page::Dashboard);
        assert_eq!(Page::from_hash("#nope"), Page::Dashboard);
    }
}
