use iced::widget::{button, row, text};
use iced::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    FileImport,
    FileExportAll,
    ViewToggleTheme,
    HelpAbout,
    FileExit,
}

pub fn menu_bar<'a>() -> Element<'a, MenuMessage> {
    row![
        button(text("Import Snippets…")).on_press(MenuMessage::FileImport),
        button(text("Export All Snippets…")).on_press(MenuMessage::FileExportAll),
        button(text("Toggle Theme")).on_press(MenuMessage::ViewToggleTheme),
        button(text("About")).on_press(MenuMessage::HelpAbout),
        button(text("Exit")).on_press(MenuMessage::FileExit),
    ]
    .spacing(10)
    .into()
}
