use super::DragLayer;

impl<L> DragLayer<L> {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[tick {}] {}", self.debug_tick, message));
    }

    /// Recorded debug lines, oldest first. Empty unless
    /// [`super::DragLayerOptions::debug_event_log`] is on.
    pub fn debug_log(&self) -> impl Iterator<Item = &str> {
        self.debug_log.iter().map(String::as_str)
    }

    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().cloned().collect::<Vec<_>>().join("\n")
    }

    pub fn clear_debug_log(&mut self) {
        self.debug_log.clear();
    }
}
