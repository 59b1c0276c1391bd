pub mod books;
pub mod fetch;
pub mod model;
pub mod providers;
pub mod remote;
pub mod startup;
pub mod stepper;
pub mod store;
pub mod tui;

mod tui_shell;
