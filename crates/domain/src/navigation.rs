use serde::Serialize;

pub const SITE_NAME: &str = "Speak Up India";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    About,
    Complaints,
    Feed,
    Stories,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub view: View,
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Header {
    pub brand: &'static str,
    pub brand_path: &'static str,
    pub links: Vec<NavLink>,
}

impl View {
    pub const ALL: [View; 5] = [
        Self::Home,
        Self::About,
        Self::Complaints,
        Self::Feed,
        Self::Stories,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Complaints => "/complaints",
            Self::Feed => "/feed",
            Self::Stories => "/stories",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Voice Your Concerns",
            Self::About => "About Speak Up",
            Self::Complaints => "My Complaints",
            Self::Feed => "Community Stories",
            Self::Stories => "Share Your Story",
        }
    }

    /// Header label; the stories page is reachable but not linked from the header.
    fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Home"),
            Self::About => Some("About"),
            Self::Complaints => Some("View Complaints"),
            Self::Feed => Some("Community Feed"),
            Self::Stories => None,
        }
    }

    /// Resolves a client path, ignoring a trailing slash and any query string.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|view| view.path() == normalized)
    }
}

pub fn header() -> Header {
    Header {
        brand: SITE_NAME,
        brand_path: View::Home.path(),
        links: View::ALL
            .into_iter()
            .filter_map(|view| {
                view.nav_label().map(|label| NavLink {
                    view,
                    label,
                    path: view.path(),
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lists_four_links_in_order() {
        let labels: Vec<_> = header().links.iter().map(|link| link.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "About", "View Complaints", "Community Feed"]
        );
    }

    #[test]
    fn resolves_paths() {
        assert_eq!(View::from_path("/"), Some(View::Home));
        assert_eq!(View::from_path(""), Some(View::Home));
        assert_eq!(View::from_path("/feed/"), Some(View::Feed));
        assert_eq!(
            View::from_path("/complaints?status=pending"),
            Some(View::Complaints)
        );
        assert_eq!(View::from_path("/admin"), None);
    }
}
