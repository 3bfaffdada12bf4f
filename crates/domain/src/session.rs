//! The multi-tab editing session.
//!
//! [`TabSession`] owns every open [`RequestTab`] and tracks which one is
//! active. The session is never empty: it is constructed with one default
//! tab, closing the last tab is rejected, and the active id always
//! resolves to a present tab.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::TabId;
use crate::request::RequestTab;
use crate::settings::TabDefaults;

/// An ordered collection of request tabs plus the active-tab marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSession {
    tabs: Vec<RequestTab>,
    active_tab_id: TabId,
    defaults: TabDefaults,
}

impl TabSession {
    /// Creates a session holding one default tab.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(TabDefaults::default())
    }

    /// Creates a session whose tabs are seeded from `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: TabDefaults) -> Self {
        let tab = RequestTab::from_defaults(&defaults);
        let active_tab_id = tab.id;
        Self {
            tabs: vec![tab],
            active_tab_id,
            defaults,
        }
    }

    /// All open tabs, in display order.
    #[must_use]
    pub fn tabs(&self) -> &[RequestTab] {
        &self.tabs
    }

    /// Number of open tabs; at least 1 while the session invariants hold.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false while the session invariants hold; present for
    /// completeness of the collection API.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// The defaults applied to every new tab.
    #[must_use]
    pub const fn defaults(&self) -> &TabDefaults {
        &self.defaults
    }

    /// Identity of the active tab.
    #[must_use]
    pub const fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    /// The active tab.
    #[must_use]
    pub fn active_tab(&self) -> &RequestTab {
        // The session is never empty and the active id always resolves.
        &self.tabs[self.active_index()]
    }

    /// Mutable access to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut RequestTab {
        let index = self.active_index();
        &mut self.tabs[index]
    }

    fn active_index(&self) -> usize {
        self.tabs
            .iter()
            .position(|tab| tab.id == self.active_tab_id)
            .unwrap_or(0)
    }

    /// Looks up a tab by id.
    #[must_use]
    pub fn tab(&self, id: TabId) -> Option<&RequestTab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Mutable lookup of a tab by id.
    pub fn tab_mut(&mut self, id: TabId) -> Option<&mut RequestTab> {
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    /// Appends a fresh default tab and makes it active.
    pub fn new_tab(&mut self) -> TabId {
        let tab = RequestTab::from_defaults(&self.defaults);
        let id = tab.id;
        self.tabs.push(tab);
        self.active_tab_id = id;
        id
    }

    /// Makes the given tab active.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownTab`] when `id` is not present; the active
    /// tab is unchanged then.
    pub fn switch_tab(&mut self, id: TabId) -> DomainResult<()> {
        if self.tab(id).is_none() {
            return Err(DomainError::UnknownTab(id));
        }
        self.active_tab_id = id;
        Ok(())
    }

    /// Closes the given tab.
    ///
    /// When the active tab is closed, the tab at `max(0, index - 1)` of
    /// the post-removal sequence becomes active.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownTab`] when `id` is not present;
    /// [`DomainError::LastTab`] when it is the only tab (the session must
    /// retain at least one tab — open a replacement first).
    pub fn close_tab(&mut self, id: TabId) -> DomainResult<()> {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or(DomainError::UnknownTab(id))?;
        if self.tabs.len() == 1 {
            return Err(DomainError::LastTab);
        }
        self.tabs.remove(index);
        if self.active_tab_id == id {
            self.active_tab_id = self.tabs[index.saturating_sub(1)].id;
        }
        Ok(())
    }
}

impl Default for TabSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_session_has_one_active_tab() {
        let session = TabSession::new();
        assert_eq!(session.len(), 1);
        assert_eq!(session.active_tab().id, session.active_tab_id());
    }

    #[test]
    fn test_new_tab_becomes_active() {
        let mut session = TabSession::new();
        let id = session.new_tab();
        assert_eq!(session.len(), 2);
        assert_eq!(session.active_tab_id(), id);
    }

    #[test]
    fn test_switch_to_unknown_tab_rejected() {
        let mut session = TabSession::new();
        let before = session.active_tab_id();
        let ghost = TabId::new();
        assert_eq!(session.switch_tab(ghost), Err(DomainError::UnknownTab(ghost)));
        assert_eq!(session.active_tab_id(), before);
    }

    #[test]
    fn test_close_last_tab_rejected() {
        let mut session = TabSession::new();
        let id = session.active_tab_id();
        assert_eq!(session.close_tab(id), Err(DomainError::LastTab));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_close_active_tab_activates_previous() {
        let mut session = TabSession::new();
        let first = session.active_tab_id();
        let second = session.new_tab();
        let third = session.new_tab();
        session.switch_tab(second).unwrap();

        session.close_tab(second).unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.active_tab_id(), first);
        assert!(session.tab(third).is_some());
    }

    #[test]
    fn test_close_first_active_tab_activates_new_first() {
        let mut session = TabSession::new();
        let first = session.active_tab_id();
        let second = session.new_tab();
        session.switch_tab(first).unwrap();

        session.close_tab(first).unwrap();
        assert_eq!(session.active_tab_id(), second);
    }

    #[test]
    fn test_close_inactive_tab_keeps_active() {
        let mut session = TabSession::new();
        let first = session.active_tab_id();
        let second = session.new_tab();
        session.close_tab(first).unwrap();
        assert_eq!(session.active_tab_id(), second);
        assert_eq!(session.len(), 1);
    }
}
