use crate::drag::{DragEvent, FormEvent};
use crate::task_board::TaskBoard;
use crate::ui::{self, BoardLayout, ViewState};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// One press-drag-release gesture started on a pending item.
#[derive(Debug)]
pub struct DragGesture {
    pub source: usize,
    pub event: DragEvent,
    /// Set when the latest dragover inside the Done target was accepted.
    pub droppable: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    pub board: TaskBoard,
    pub layout: BoardLayout,
    pub drag: Option<DragGesture>,
    input: Input,
    pending_offset: usize,
}

impl App {
    pub fn new(board: TaskBoard) -> Self {
        let input = Input::new(board.draft().to_string());
        Self {
            board,
            layout: BoardLayout::default(),
            drag: None,
            input,
            pending_offset: 0,
        }
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            dragging: self.drag.as_ref().map(|g| g.source),
            drop_hover: self.drag.as_ref().is_some_and(|g| g.droppable),
            pending_offset: self.pending_offset,
        }
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let view = self.view_state();
        let board = &self.board;
        let input = &self.input;
        let mut layout = BoardLayout::default();
        terminal.draw(|f| layout = ui::draw(f, board, input, view))?;
        self.pending_offset = layout.pending_offset;
        self.layout = layout;
        Ok(())
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.draw(terminal)?;
            if self.handle_event(event::read()?) == Control::Quit {
                return Ok(());
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                Control::Continue
            }
            Event::Paste(text) => {
                self.paste(&text);
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            KeyCode::Esc => {
                if self.drag.take().is_some() {
                    debug!("drag cancelled");
                    Control::Continue
                } else {
                    Control::Quit
                }
            }
            KeyCode::Enter => {
                self.submit();
                Control::Continue
            }
            _ => {
                let changed = self.input.handle_event(&Event::Key(key));
                if changed.is_some_and(|c| c.value) {
                    self.board.update_draft(self.input.value());
                }
                Control::Continue
            }
        }
    }

    /// Inserts pasted text at the cursor in one edit.
    fn paste(&mut self, text: &str) {
        let cursor = self.input.cursor();
        let value = self.input.value();
        let split = value
            .char_indices()
            .nth(cursor)
            .map_or(value.len(), |(i, _)| i);
        let next = format!("{}{}{}", &value[..split], text, &value[split..]);
        self.input = Input::new(next).with_cursor(cursor + text.chars().count());
        self.board.update_draft(self.input.value());
    }

    fn submit(&mut self) {
        if self.board.submit_draft(&mut FormEvent::new()) {
            self.input.reset();
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.on_add_button(col, row) {
                    self.submit();
                } else if let Some(source) = self.layout.pending_item_at(col, row) {
                    self.start_drag(source);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.drag_over(col, row),
            MouseEventKind::Up(MouseButton::Left) => self.release(col, row),
            MouseEventKind::ScrollUp if self.layout.in_pending_area(col, row) => {
                self.pending_offset = self.pending_offset.saturating_sub(1);
            }
            MouseEventKind::ScrollDown if self.layout.in_pending_area(col, row) => {
                self.pending_offset = self.pending_offset.saturating_add(1);
            }
            _ => {}
        }
    }

    fn start_drag(&mut self, source: usize) {
        let Some(task) = self.board.pending().get(source) else {
            return;
        };
        let mut event = DragEvent::new();
        self.board.begin_drag(&mut event, task);
        self.drag = Some(DragGesture {
            source,
            event,
            droppable: false,
        });
    }

    fn drag_over(&mut self, col: u16, row: u16) {
        let Some(gesture) = self.drag.as_mut() else {
            return;
        };
        if !self.layout.in_done_target(col, row) {
            gesture.droppable = false;
            return;
        }
        let mut over = DragEvent::with_data(gesture.event.data_transfer.clone());
        self.board.allow_drop(&mut over);
        gesture.droppable = over.default_prevented();
    }

    fn release(&mut self, col: u16, row: u16) {
        let Some(gesture) = self.drag.take() else {
            return;
        };
        if !(gesture.droppable && self.layout.in_done_target(col, row)) {
            debug!("drag released outside drop target");
            return;
        }
        let mut drop = DragEvent::with_data(gesture.event.data_transfer);
        self.board.complete_drop(&mut drop);
    }
}
