//! Taskboard - a to-do list where tasks are dragged from Pending to Done

pub mod app;
pub mod cli;
pub mod config;
pub mod drag;
pub mod error;
pub mod logging;
pub mod task;
pub mod task_board;
pub mod ui;

pub use app::App;
pub use task::Task;
pub use task_board::TaskBoard;
