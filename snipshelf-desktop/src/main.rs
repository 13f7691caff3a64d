use env_logger::{Builder, Env};

fn init_logger() {
    // RUST_LOG wins; default is info.
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> iced::Result {
    init_logger();
    snipshelf_desktop_lib::run()
}
