use crate::config::{DropConfig, MatchBy};
use crate::drag::{DragEvent, FormEvent, TASK_ID, TEXT_PLAIN};
use crate::task::Task;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Default, Serialize)]
pub struct TaskBoard {
    draft: String,
    pending: Vec<Task>,
    done: Vec<Task>,
    #[serde(skip)]
    drop_config: DropConfig,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drop_config(drop_config: DropConfig) -> Self {
        Self {
            drop_config,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    pub fn done(&self) -> &[Task] {
        &self.done
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        debug!(draft = %self.draft, "draft updated");
    }

    /// Appends the draft, untrimmed, to the pending list. Whitespace-only
    /// drafts are rejected and left in place. Returns whether a task was added.
    pub fn submit_draft(&mut self, event: &mut FormEvent) -> bool {
        event.prevent_default();
        if self.draft.trim().is_empty() {
            debug!("rejected blank draft");
            return false;
        }

        let task = Task::new(std::mem::take(&mut self.draft));
        info!(id = %task.id, text = %task.text, "task added");
        self.pending.push(task);
        true
    }

    pub fn begin_drag(&self, event: &mut DragEvent, task: &Task) {
        event.data_transfer.set_data(TEXT_PLAIN, task.text.clone());
        event.data_transfer.set_data(TASK_ID, task.id.to_string());
        debug!(id = %task.id, "drag started");
    }

    pub fn allow_drop(&self, event: &mut DragEvent) {
        event.prevent_default();
    }

    pub fn complete_drop(&mut self, event: &mut DragEvent) {
        event.prevent_default();
        let has_text = event.data_transfer.has_data(TEXT_PLAIN);
        let text = event.data_transfer.get_data(TEXT_PLAIN);

        if !has_text || text.is_empty() {
            if self.drop_config.ignore_empty {
                warn!("ignored drop without text payload");
                return;
            }
            warn!("drop carried no text payload");
        }

        let dragged_id = Uuid::parse_str(&event.data_transfer.get_data(TASK_ID)).ok();
        let moved = match (self.drop_config.match_by, dragged_id) {
            (MatchBy::Id, Some(id)) => {
                let found = self.pending.iter().position(|t| t.id == id);
                found.map(|idx| self.pending.remove(idx))
            }
            _ => {
                let mut first = None;
                self.pending.retain(|t| {
                    if t.text != text {
                        return true;
                    }
                    if first.is_none() {
                        first = Some(t.clone());
                    }
                    false
                });
                first
            }
        };

        let task = match moved {
            Some(task) => task,
            None => match dragged_id {
                Some(id) => Task { id, text },
                None => Task::new(text),
            },
        };
        info!(id = %task.id, text = %task.text, "task done");
        self.done.push(task);
    }
}
