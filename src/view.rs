//! The closed set of page views and everything the page knows about each one.

/// Static facts about a view. One record per variant, so the token, the
/// container id and the document title can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRecord {
    /// Fragment token and `data-nav` value.
    pub token: &'static str,
    /// Id of the `<section>` holding the view.
    pub container_id: &'static str,
    /// Document title while the view is current.
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewName {
    #[default]
    Home,
    Support,
    Feedback,
    Privacy,
    Terms,
}

impl ViewName {
    pub const ALL: [ViewName; 5] = [
        ViewName::Home,
        ViewName::Support,
        ViewName::Feedback,
        ViewName::Privacy,
        ViewName::Terms,
    ];

    pub fn record(self) -> &'static ViewRecord {
        match self {
            ViewName::Home => &ViewRecord {
                token: "home",
                container_id: "page-home",
                title: "DIRTTIME - Dirt Bike Maintenance Tracker",
            },
            ViewName::Support => &ViewRecord {
                token: "support",
                container_id: "page-support",
                title: "Support - DIRTTIME",
            },
            ViewName::Feedback => &ViewRecord {
                token: "feedback",
                container_id: "page-feedback",
                title: "Feedback - DIRTTIME",
            },
            ViewName::Privacy => &ViewRecord {
                token: "privacy",
                container_id: "page-privacy",
                title: "Privacy Policy - DIRTTIME",
            },
            ViewName::Terms => &ViewRecord {
                token: "terms",
                container_id: "page-terms",
                title: "Terms of Service - DIRTTIME",
            },
        }
    }

    pub fn token(self) -> &'static str {
        self.record().token
    }

    pub fn container_id(self) -> &'static str {
        self.record().container_id
    }

    pub fn title(self) -> &'static str {
        self.record().title
    }

    /// Exact token match against the closed set. Anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.token() == token)
    }

    /// Fragment written to the address bar when this view is chosen by a click.
    /// Home keeps the address bare.
    pub fn fragment(self) -> &'static str {
        match self {
            ViewName::Home => "",
            other => other.token(),
        }
    }
}

