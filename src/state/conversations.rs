#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

/// One saved conversation in the sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub pinned: bool,
    /// Milliseconds since the epoch.
    pub created_at: f64,
}

/// Sidebar state: the conversation list and the active selection.
#[derive(Clone, Debug)]
pub struct ConversationsState {
    pub items: Vec<Conversation>,
    pub active_id: String,
}

impl Default for ConversationsState {
    fn default() -> Self {
        // Demo data; there is no persistence behind the sidebar.
        Self {
            items: vec![
                Conversation {
                    id: "1".to_owned(),
                    title: "Create sunset image".to_owned(),
                    pinned: true,
                    created_at: 1_731_888_000_000.0,
                },
                Conversation {
                    id: "2".to_owned(),
                    title: "Design logo concept".to_owned(),
                    pinned: false,
                    created_at: 1_731_801_600_000.0,
                },
                Conversation {
                    id: "3".to_owned(),
                    title: "Mountain landscape".to_owned(),
                    pinned: false,
                    created_at: 1_731_715_200_000.0,
                },
            ],
            active_id: "1".to_owned(),
        }
    }
}

impl ConversationsState {
    pub fn select(&mut self, id: &str) {
        if self.items.iter().any(|c| c.id == id) {
            self.active_id = id.to_owned();
        }
    }

    pub fn toggle_pin(&mut self, id: &str) {
        if let Some(conv) = self.items.iter_mut().find(|c| c.id == id) {
            conv.pinned = !conv.pinned;
        }
    }

    /// Rename a conversation. Blank titles are rejected; surrounding
    /// whitespace is trimmed.
    pub fn rename(&mut self, id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|c| c.id == id) {
            Some(conv) => {
                conv.title = title.to_owned();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
    }

    pub fn title_of(&self, id: &str) -> Option<&str> {
        self.items.iter().find(|c| c.id == id).map(|c| c.title.as_str())
    }

    /// Display order: pinned conversations first, then newest first.
    pub fn sorted(&self) -> Vec<Conversation> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then(b.created_at.total_cmp(&a.created_at))
        });
        items
    }
}
