use crate::dialogs;
use crate::dispatch::{self, Action, Outcome};
use crate::menu::{menu_bar, MenuMessage};
use crate::notice::Notice;
use crate::settings::{self, AppSettings};
use iced::{
    highlighter,
    widget::{
        button, column, container, pick_list, row, scrollable, text, text_editor, text_input,
    },
    Element, Font, Length, Task, Theme,
};
use snipshelf_core::{
    default_export_name, syntax_token, HighlightTheme, Language, Store, ALL_SNIPPETS_FILE_NAME,
};
use std::path::PathBuf;

pub struct SnippetApp {
    store: Store,
    settings: AppSettings,
    query: String,
    visible: Vec<String>,
    selected: Option<String>,
    language: Language,
    editor: text_editor::Content,
    new_name: String,
    status: Option<Notice>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Menu(MenuMessage),
    SearchChanged(String),
    Select(String),
    NewNameChanged(String),
    Add,
    LanguageSelected(Language),
    HighlightThemeSelected(HighlightTheme),
    Edit(text_editor::Action),
    Save,
    Delete,
    ExportOne,
}

impl SnippetApp {
    pub fn new(store: Store, settings: AppSettings) -> (Self, Task<Message>) {
        let visible = dispatch::visible_names(&store, "");
        let language = settings.default_language.clone();
        (
            Self {
                store,
                settings,
                query: String::new(),
                visible,
                selected: None,
                language,
                editor: text_editor::Content::new(),
                new_name: String::new(),
                status: None,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        match &self.selected {
            Some(name) => format!("Snipshelf - {name}"),
            None => "Snipshelf".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(menu_msg) => return self.on_menu(menu_msg),
            Message::SearchChanged(query) => {
                self.query = query;
                self.refresh_list();
            }
            Message::Select(name) => self.select(name),
            Message::NewNameChanged(name) => self.new_name = name,
            Message::Add => {
                let name = self.new_name.clone();
                let action = Action::Add {
                    name,
                    language: self.language.clone(),
                };
                if let Some(Outcome::Added(name)) = self.run(action) {
                    self.new_name.clear();
                    self.query.clear();
                    self.refresh_list();
                    self.select(name);
                }
            }
            // Re-highlights immediately; the store only changes on Save.
            Message::LanguageSelected(language) => self.language = language,
            Message::HighlightThemeSelected(theme) => {
                self.settings.highlight_theme = theme;
                self.persist_settings();
            }
            Message::Edit(action) => self.editor.perform(action),
            Message::Save => {
                let Some(name) = self.require_selection() else {
                    return Task::none();
                };
                self.run(Action::Save {
                    name,
                    language: self.language.clone(),
                    code: dispatch::editor_code(&self.editor),
                });
                self.refresh_list();
            }
            Message::Delete => {
                let Some(name) = self.require_selection() else {
                    return Task::none();
                };
                if dialogs::confirm_delete(&name)
                    && self.run(Action::Delete { name }).is_some()
                {
                    self.selected = None;
                    self.editor = text_editor::Content::new();
                    self.refresh_list();
                }
            }
            Message::ExportOne => {
                let Some(name) = self.require_selection() else {
                    return Task::none();
                };
                let suggested = match self.store.get(&name) {
                    Ok(snippet) => default_export_name(&name, snippet),
                    Err(e) => {
                        self.notify(Notice::from(&e));
                        return Task::none();
                    }
                };
                if let Some(path) = dialogs::pick_export_file(
                    "Export Snippet",
                    &suggested,
                    self.last_directory().as_deref(),
                ) {
                    self.remember_directory(&path);
                    self.run(Action::ExportOne { name, path });
                }
            }
        }
        Task::none()
    }

    fn on_menu(&mut self, message: MenuMessage) -> Task<Message> {
        match message {
            MenuMessage::FileImport => {
                if let Some(path) = dialogs::pick_import_file(self.last_directory().as_deref()) {
                    self.remember_directory(&path);
                    if let Some(outcome) = self.run(Action::Import { path }) {
                        self.refresh_list();
                        if let Some(name) = self.selected.clone().filter(|n| outcome.affects(n)) {
                            self.select(name);
                        }
                    }
                }
            }
            MenuMessage::FileExportAll => {
                if let Some(path) = dialogs::pick_export_file(
                    "Export All Snippets",
                    ALL_SNIPPETS_FILE_NAME,
                    self.last_directory().as_deref(),
                ) {
                    self.remember_directory(&path);
                    self.run(Action::ExportAll { path });
                }
            }
            MenuMessage::ViewToggleTheme => {
                self.settings.dark_mode = !self.settings.dark_mode;
                self.persist_settings();
            }
            MenuMessage::HelpAbout => dialogs::show(&Notice::about()),
            MenuMessage::FileExit => return iced::exit(),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let menu = menu_bar().map(Message::Menu);

        let list = self
            .visible
            .iter()
            .fold(column![].spacing(2), |list, name| {
                let style: fn(&Theme, button::Status) -> button::Style =
                    if self.selected.as_deref() == Some(name.as_str()) {
                        button::primary
                    } else {
                        button::text
                    };
                list.push(
                    button(text(name.as_str()))
                        .width(Length::Fill)
                        .style(style)
                        .on_press(Message::Select(name.clone())),
                )
            });

        let left = column![
            text("Search:"),
            text_input("Search snippets...", &self.query).on_input(Message::SearchChanged),
            text("Snippets:"),
            scrollable(list).height(Length::Fill),
            row![
                text_input("New snippet name", &self.new_name)
                    .on_input(Message::NewNameChanged)
                    .on_submit(Message::Add),
                button(text("Add Snippet")).on_press(Message::Add),
            ]
            .spacing(5),
        ]
        .spacing(8)
        .width(Length::FillPortion(3));

        let editor = text_editor(&self.editor)
            .on_action(Message::Edit)
            .font(Font::MONOSPACE)
            .height(Length::Fill)
            .highlight(
                syntax_token(&self.language),
                highlighter_theme(self.settings.highlight_theme),
            );

        let right = column![
            row![
                text("Language:"),
                pick_list(
                    Language::ALL,
                    Some(self.language.clone()),
                    Message::LanguageSelected
                ),
                text("Colours:"),
                pick_list(
                    HighlightTheme::ALL,
                    Some(self.settings.highlight_theme),
                    Message::HighlightThemeSelected
                ),
            ]
            .spacing(8),
            text("Code:"),
            editor,
            row![
                button(text("Save Changes")).on_press(Message::Save),
                button(text("Delete Snippet"))
                    .style(button::danger)
                    .on_press(Message::Delete),
                button(text("Export Snippet")).on_press(Message::ExportOne),
            ]
            .spacing(10),
        ]
        .spacing(8)
        .width(Length::FillPortion(7));

        let status = text(match &self.status {
            Some(notice) => notice.message.clone(),
            None => format!("{} snippets in {}", self.store.len(), self.store.path().display()),
        })
        .size(12);

        container(
            column![menu, row![left, right].spacing(12).height(Length::Fill), status].spacing(10),
        )
        .padding(10)
        .into()
    }

    pub fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dispatches `action`, surfacing its notice or error. Returns the outcome on success.
    fn run(&mut self, action: Action) -> Option<Outcome> {
        match dispatch::apply(&mut self.store, action) {
            Ok(outcome) => {
                if let Some(notice) = outcome.notice() {
                    self.notify(notice);
                } else {
                    self.status = None;
                }
                Some(outcome)
            }
            Err(e) => {
                log::warn!("{e}");
                self.notify(Notice::from(&e));
                None
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        dialogs::show(&notice);
        self.status = Some(notice);
    }

    fn select(&mut self, name: String) {
        match self.store.get(&name) {
            Ok(snippet) => {
                self.editor = text_editor::Content::with_text(&snippet.code);
                self.language = snippet.language.clone();
                self.selected = Some(name);
            }
            Err(e) => self.notify(Notice::from(&e)),
        }
    }

    fn require_selection(&mut self) -> Option<String> {
        let selected = self.selected.clone();
        if selected.is_none() {
            self.notify(Notice::no_selection());
        }
        selected
    }

    fn refresh_list(&mut self) {
        self.visible = dispatch::visible_names(&self.store, &self.query);
    }

    fn last_directory(&self) -> Option<PathBuf> {
        self.settings.last_directory.as_ref().map(PathBuf::from)
    }

    fn remember_directory(&mut self, path: &std::path::Path) {
        self.settings.remember_directory(path);
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Err(e) = settings::save_settings(&self.settings) {
            log::warn!("{e}");
        }
    }
}

fn highlighter_theme(theme: HighlightTheme) -> highlighter::Theme {
    match theme {
        HighlightTheme::SolarizedDark => highlighter::Theme::SolarizedDark,
        HighlightTheme::Base16Mocha => highlighter::Theme::Base16Mocha,
        HighlightTheme::Base16Ocean => highlighter::Theme::Base16Ocean,
        HighlightTheme::Base16Eighties => highlighter::Theme::Base16Eighties,
        HighlightTheme::InspiredGitHub => highlighter::Theme::InspiredGitHub,
    }
}

pub fn run(store: Store, settings: AppSettings) -> iced::Result {
    iced::application(SnippetApp::title, SnippetApp::update, SnippetApp::view)
        .theme(SnippetApp::theme)
        .window_size((1000.0, 700.0))
        .run_with(move || SnippetApp::new(store, settings))
}
