//! Drag-and-drop data transfer, modelled on the browser's `DataTransfer`.
//!
//! A drag source writes string payloads keyed by MIME type; the drop target
//! reads them back within the same gesture.

use std::collections::HashMap;

pub const TEXT_PLAIN: &str = "text/plain";
pub const TASK_ID: &str = "application/x-taskboard-id";

#[derive(Debug, Default, Clone)]
pub struct DataTransfer {
    slots: HashMap<String, String>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        self.slots.insert(format.to_string(), data.into());
    }

    /// Absent formats read as the empty string.
    pub fn get_data(&self, format: &str) -> String {
        self.slots.get(format).cloned().unwrap_or_default()
    }

    pub fn has_data(&self, format: &str) -> bool {
        self.slots.contains_key(format)
    }
}

/// A dragstart / dragover / drop dispatch.
#[derive(Debug, Default, Clone)]
pub struct DragEvent {
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Form submission. Kept separate from drag events since it carries no data.
#[derive(Debug, Default, Clone)]
pub struct FormEvent {
    default_prevented: bool,
}

impl FormEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_format_reads_empty() {
        let dt = DataTransfer::new();
        assert_eq!(dt.get_data(TEXT_PLAIN), "");
        assert!(!dt.has_data(TEXT_PLAIN));
    }

    #[test]
    fn test_set_data_overwrites_slot() {
        let mut dt = DataTransfer::new();
        dt.set_data(TEXT_PLAIN, "first");
        dt.set_data(TEXT_PLAIN, "second");
        assert_eq!(dt.get_data(TEXT_PLAIN), "second");
        assert_eq!(dt.get_data(TASK_ID), "");
    }

    #[test]
    fn test_prevent_default_is_sticky() {
        let mut event = DragEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
