use crate::task_board::TaskBoard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tui_input::Input;

pub const TITLE: &str = "To-Do List";
pub const INPUT_PLACEHOLDER: &str = "Enter a task";
pub const ADD_BUTTON: &str = "Add Task";
pub const DONE_PLACEHOLDER: &str = "Drop tasks here";

/// Transient pointer state the board itself doesn't own.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewState {
    pub dragging: Option<usize>,
    pub drop_hover: bool,
    /// First pending task shown; clamped on draw.
    pub pending_offset: usize,
}

/// Screen regions from the last draw, used for mouse hit-testing.
#[derive(Debug, Default, Clone)]
pub struct BoardLayout {
    pub add_button: Rect,
    pub pending_area: Rect,
    /// One row per visible pending task, starting at `pending_offset`.
    pub pending_items: Vec<Rect>,
    pub pending_offset: usize,
    pub done_target: Rect,
}

impl BoardLayout {
    /// Index into the full pending list, not the visible rows.
    pub fn pending_item_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.pending_items
            .iter()
            .position(|r| r.contains(pos))
            .map(|row| self.pending_offset + row)
    }

    pub fn in_pending_area(&self, column: u16, row: u16) -> bool {
        self.pending_area.contains(Position::new(column, row))
    }

    pub fn in_done_target(&self, column: u16, row: u16) -> bool {
        self.done_target.contains(Position::new(column, row))
    }

    pub fn on_add_button(&self, column: u16, row: u16) -> bool {
        self.add_button.contains(Position::new(column, row))
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub fn draw(f: &mut Frame, board: &TaskBoard, input: &Input, view: ViewState) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Min(3),
        ])
        .split(f.area());

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    let input_area = chunks[1];
    let text_width = input_area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(text_width.max(1));
    let field = if board.draft().is_empty() {
        Paragraph::new(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(board.draft()).scroll((0, clamp_u16(scroll)))
    };
    f.render_widget(field.block(Block::default().borders(Borders::ALL)), input_area);
    let cursor = input.visual_cursor().saturating_sub(scroll);
    f.set_cursor_position(Position::new(
        input_area
            .x
            .saturating_add(1)
            .saturating_add(clamp_u16(cursor.min(text_width))),
        input_area.y.saturating_add(1),
    ));

    let button = Paragraph::new(ADD_BUTTON)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Blue))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[2]);

    let pending_area = chunks[3];
    let inner = pending_area.inner(Margin::new(1, 1));
    let visible = inner.height as usize;
    let offset = view
        .pending_offset
        .min(board.pending().len().saturating_sub(visible));
    let items: Vec<ListItem> = board
        .pending()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, t)| {
            let style = if view.dragging == Some(i) {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled("⠿ ", Style::default().fg(Color::DarkGray)),
                Span::styled(t.text.as_str(), style),
            ]))
        })
        .collect();
    let pending_items = (0..items.len())
        .map(|row| Rect::new(inner.x, inner.y + row as u16, inner.width, 1))
        .collect();
    let mut title = format!("Pending ({})", board.pending().len());
    if offset > 0 || offset + visible < board.pending().len() {
        title.push_str(" ↕");
    }
    let pending = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(pending, pending_area);

    let done_area = chunks[4];
    let done_block = Block::default()
        .title("Done")
        .borders(Borders::ALL)
        .border_style(if view.drop_hover {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Green)
        });
    if board.done().is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            DONE_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
        .block(done_block);
        f.render_widget(placeholder, done_area);
    } else {
        let items: Vec<ListItem> = board
            .done()
            .iter()
            .map(|t| ListItem::new(Span::styled(t.text.as_str(), Style::default().fg(Color::Green))))
            .collect();
        f.render_widget(List::new(items).block(done_block), done_area);
    }

    BoardLayout {
        add_button: chunks[2],
        pending_area,
        pending_items,
        pending_offset: offset,
        done_target: done_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::FormEvent;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn screen(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render_with(board: &TaskBoard, view: ViewState) -> (String, BoardLayout) {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let input = Input::new(board.draft().to_string());
        let mut layout = BoardLayout::default();
        terminal
            .draw(|f| layout = draw(f, board, &input, view))
            .unwrap();
        (screen(terminal.backend().buffer()), layout)
    }

    fn render(board: &TaskBoard) -> (String, BoardLayout) {
        render_with(board, ViewState::default())
    }

    fn board_with(tasks: &[String]) -> TaskBoard {
        let mut board = TaskBoard::new();
        for t in tasks {
            board.update_draft(t.as_str());
            board.submit_draft(&mut FormEvent::new());
        }
        board
    }

    #[test]
    fn test_empty_board_shows_placeholders() {
        let (text, layout) = render(&TaskBoard::new());
        assert!(text.contains(TITLE));
        assert!(text.contains(INPUT_PLACEHOLDER));
        assert!(text.contains(ADD_BUTTON));
        assert!(text.contains(DONE_PLACEHOLDER));
        assert!(layout.pending_items.is_empty());
    }

    #[test]
    fn test_pending_items_are_hit_testable() {
        let board = board_with(&["first".into(), "second".into()]);
        let (text, layout) = render(&board);
        assert!(text.contains("first"));
        assert!(text.contains("second"));
        assert_eq!(layout.pending_items.len(), 2);

        let second = layout.pending_items[1];
        assert_eq!(layout.pending_item_at(second.x, second.y), Some(1));
        assert!(!layout.in_done_target(second.x, second.y));
        let done = layout.done_target;
        assert!(layout.in_done_target(done.x + 1, done.y + 1));
    }

    #[test]
    fn test_long_draft_renders_without_overflow() {
        let mut board = TaskBoard::new();
        board.update_draft("x".repeat(70_000));
        let (text, _) = render(&board);
        assert!(text.contains("xxxx"));
        assert!(text.contains(DONE_PLACEHOLDER));
    }

    #[test]
    fn test_offset_maps_rows_to_later_tasks() {
        let tasks: Vec<String> = (0..30).map(|i| format!("task {i}")).collect();
        let board = board_with(&tasks);

        let (_, top) = render(&board);
        let visible = top.pending_items.len();
        assert!(visible < tasks.len());

        let view = ViewState {
            pending_offset: 5,
            ..ViewState::default()
        };
        let (text, layout) = render_with(&board, view);
        assert_eq!(layout.pending_offset, 5);
        assert!(text.contains("task 5"));
        let first = layout.pending_items[0];
        assert_eq!(layout.pending_item_at(first.x, first.y), Some(5));
    }

    #[test]
    fn test_offset_clamped_to_last_page() {
        let tasks: Vec<String> = (0..30).map(|i| format!("task {i}")).collect();
        let board = board_with(&tasks);
        let view = ViewState {
            pending_offset: 1_000,
            ..ViewState::default()
        };
        let (text, layout) = render_with(&board, view);
        assert_eq!(layout.pending_offset + layout.pending_items.len(), 30);
        assert!(text.contains("task 29"));
    }
}
