//! The Snipshelf desktop shell: an iced window over a [`Store`].

pub mod app;
pub mod dialogs;
pub mod dispatch;
pub mod menu;
pub mod notice;
pub mod settings;

// Re-export core library
pub use snipshelf_core::*;

use std::env;

/// Loads settings and the snippet store, then runs the window until it closes.
pub fn run() -> iced::Result {
    let settings = settings::load_settings();
    let store_path = settings.resolve_store_path(env::var(settings::STORE_ENV_VAR).ok());
    let store = Store::load(&store_path);
    app::run(store, settings)
}
