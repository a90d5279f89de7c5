use crate::content::{Resource, RESOURCES};

/// Local state of the health tips screen.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TipsState {
    resource_cursor: usize,
    scroll: u16,
}

impl TipsState {
    pub fn new() -> Self {
        TipsState::default()
    }

    pub fn resource_cursor(&self) -> usize {
        self.resource_cursor
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn next_resource(&mut self) -> &mut Self {
        self.resource_cursor = (self.resource_cursor + 1) % RESOURCES.len();
        self
    }

    pub fn previous_resource(&mut self) -> &mut Self {
        self.resource_cursor = if self.resource_cursor == 0 {
            RESOURCES.len() - 1
        } else {
            self.resource_cursor - 1
        };
        self
    }

    /// Return the highlighted resource.
    ///
    pub fn selected_resource(&self) -> &'static Resource {
        &RESOURCES[self.resource_cursor]
    }

    pub fn scroll_down(&mut self) -> &mut Self {
        self.scroll = self.scroll.saturating_add(1);
        self
    }

    pub fn scroll_up(&mut self) -> &mut Self {
        self.scroll = self.scroll.saturating_sub(1);
        self
    }
}
