//! Mock rendered page.

use std::collections::HashSet;
use std::sync::Mutex;
use tokio::sync::broadcast;

use crate::session::SwitchAffordance;
use crate::traits::{NavigationEvent, Page};

const EVENT_CAPACITY: usize = 16;
const DEFAULT_AFFORDANCE_SELECTOR: &str = ".switch-region";

/// Page with a flat set of present selectors.
///
/// Rendering the affordance makes the affordance selector present, the way a
/// mounted control would be found by a later lookup.
pub struct MockPage {
    elements: Mutex<HashSet<String>>,
    rendered: Mutex<Vec<SwitchAffordance>>,
    events: Mutex<Option<broadcast::Sender<NavigationEvent>>>,
    affordance_selector: String,
}

impl MockPage {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            elements: Mutex::new(HashSet::new()),
            rendered: Mutex::new(Vec::new()),
            events: Mutex::new(Some(tx)),
            affordance_selector: DEFAULT_AFFORDANCE_SELECTOR.to_string(),
        }
    }

    pub fn add_element(&self, selector: &str) {
        self.elements.lock().unwrap().insert(selector.to_string());
    }

    pub fn remove_element(&self, selector: &str) {
        self.elements.lock().unwrap().remove(selector);
    }

    /// Every affordance rendered so far.
    pub fn rendered(&self) -> Vec<SwitchAffordance> {
        self.rendered.lock().unwrap().clone()
    }

    pub fn emit_navigation(&self, event: NavigationEvent) {
        if let Some(tx) = self.events.lock().unwrap().as_ref() {
            // No subscribers is fine
            let _ = tx.send(event);
        }
    }

    /// Drop the event source; subscribers see the channel close.
    pub fn close_navigation(&self) {
        self.events.lock().unwrap().take();
    }
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for MockPage {
    fn element_present(&self, selector: &str) -> bool {
        self.elements.lock().unwrap().contains(selector)
    }

    fn render_affordance(&self, mount_selector: &str, affordance: &SwitchAffordance) -> bool {
        if !self.element_present(mount_selector) {
            return false;
        }
        self.rendered.lock().unwrap().push(affordance.clone());
        self.add_element(&self.affordance_selector);
        true
    }

    fn navigation_events(&self) -> broadcast::Receiver<NavigationEvent> {
        match self.events.lock().unwrap().as_ref() {
            Some(tx) => tx.subscribe(),
            None => broadcast::channel(1).1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RegionCode, SupportedRegions};

    fn affordance() -> SwitchAffordance {
        SwitchAffordance::build(&SupportedRegions::default(), &RegionCode::parse("US").unwrap())
    }

    #[test]
    fn test_render_requires_mount() {
        let page = MockPage::new();
        assert!(!page.render_affordance("#mount", &affordance()));

        page.add_element("#mount");
        assert!(page.render_affordance("#mount", &affordance()));
        assert!(page.element_present(".switch-region"));
        assert_eq!(page.rendered().len(), 1);
    }

    #[tokio::test]
    async fn test_navigation_events() {
        let page = MockPage::new();
        let mut rx = page.navigation_events();

        page.emit_navigation(NavigationEvent::new("app.home"));
        assert_eq!(rx.recv().await.unwrap().route, "app.home");

        page.close_navigation();
        assert!(rx.recv().await.is_err());
        assert!(page.navigation_events().recv().await.is_err());
    }
}
