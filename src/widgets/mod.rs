pub mod drag_control;

pub use drag_control::DragControlWidget;
