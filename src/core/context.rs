//! Read-only user context passed explicitly to the views that need it.

/// The signed-in developer as seen by the navigation shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    dev_id: Option<String>,
}

impl UserContext {
    pub fn new(dev_id: Option<String>) -> Self {
        let dev_id = dev_id.filter(|id| !id.is_empty());
        Self { dev_id }
    }

    /// A visitor who has not created a DevOrbit identity yet
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn dev_id(&self) -> Option<&str> {
        self.dev_id.as_deref()
    }

    pub fn has_identity(&self) -> bool {
        self.dev_id.is_some()
    }
}
