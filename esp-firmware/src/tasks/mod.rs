// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels (Taster → UI).

pub mod button;
pub mod ui;

// Re-export Tasks für einfachen Import
pub use button::button_task;
pub use ui::ui_task;
