// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page views and the
//! core state cells.
//!
//! The `App` struct wires together the localizer, the scroll tracker, and the
//! infrastructure ports, and translates messages into side effects like
//! preference persistence or speech synthesis. This file intentionally keeps
//! policy decisions (persistence on language change, scroll snapping,
//! speech dispatch) close to the main update loop so it is easy to audit
//! user-facing behavior.

use crate::application::port::layout::SectionLayout;
use crate::application::port::preferences::PreferenceStore;
use crate::application::port::speech::{SpeechError, SpeechSynthesizer};
use crate::application::query::SectionTracker;
use crate::domain::locale::Locale;
use crate::domain::section::Section;
use crate::i18n::Localizer;
use crate::infrastructure::{ConfigStore, SystemSpeech};
use crate::ui::layout::PageGeometry;
use crate::ui::{navbar, sections};
use iced::widget::scrollable::{self, AbsoluteOffset, Viewport};
use iced::{
    alignment::Horizontal,
    widget::{container, Column, Container, Id, Scrollable, Stack},
    Element, Length, Task, Theme,
};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state bridging the page views, localization, and
/// the host-environment ports.
pub struct App {
    localizer: Localizer,
    tracker: SectionTracker,
    geometry: PageGeometry,
    store: Box<dyn PreferenceStore>,
    speech: Arc<dyn SpeechSynthesizer>,
    language_menu_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.localizer.locale())
            .field("active_section", &self.tracker.active())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Vertical scroll offset of the page changed.
    Scrolled(f32),
    Navbar(navbar::Message),
    /// A click outside the navbar asked to jump to a section.
    GoToSection(Section),
    /// The voice-alert demo button was pressed.
    PlayVoiceDemo,
    SpeechFinished(Result<(), SpeechError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (canonical code or BCP-47 tag, e.g. `uz-cyrl`
    /// or `ru-RU`).
    pub lang: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

fn page_scroll_id() -> Id {
    Id::new("assistantdrive-page")
}

impl App {
    /// Initializes application state with the production adapters.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::with_ports(
            flags,
            Box::new(ConfigStore::new()),
            Arc::new(SystemSpeech::new()),
        )
    }

    /// Initializes application state with explicit port implementations.
    ///
    /// The startup locale is resolved from the CLI flag, the stored
    /// preference, and the system locale, in that order.
    pub fn with_ports(
        flags: Flags,
        store: Box<dyn PreferenceStore>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> (Self, Task<Message>) {
        let localizer = Localizer::new(flags.lang, store.language());
        let app = App {
            localizer,
            tracker: SectionTracker::new(),
            geometry: PageGeometry::new(),
            store,
            speech,
            language_menu_open: false,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.localizer.tr("app.title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The localizer owning the active language.
    #[must_use]
    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// The section currently highlighted in the navigation bar.
    #[must_use]
    pub fn active_section(&self) -> Section {
        self.tracker.active()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled(offset) => {
                self.tracker.observe(offset, &self.geometry);
                Task::none()
            }
            Message::Navbar(message) => {
                match navbar::update(message, &mut self.language_menu_open) {
                    navbar::Event::None => Task::none(),
                    navbar::Event::NavigateTo(section) => self.scroll_to_section(section),
                    navbar::Event::SelectLanguage(locale) => {
                        self.apply_language_change(locale);
                        Task::none()
                    }
                }
            }
            Message::GoToSection(section) => {
                self.language_menu_open = false;
                self.scroll_to_section(section)
            }
            Message::PlayVoiceDemo => {
                let (text, lang_tag) = self.voice_alert();
                let speech = Arc::clone(&self.speech);
                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || speech.speak(&text, lang_tag))
                            .await
                            .unwrap_or_else(|join_error| {
                                Err(SpeechError::SynthesisFailed(join_error.to_string()))
                            })
                    },
                    Message::SpeechFinished,
                )
            }
            Message::SpeechFinished(Err(error)) => {
                eprintln!("Voice demo failed: {error}");
                Task::none()
            }
            Message::SpeechFinished(Ok(())) => Task::none(),
        }
    }

    /// Marks `section` active and snaps the page scroll to its top.
    fn scroll_to_section(&mut self, section: Section) -> Task<Message> {
        self.tracker.select(section);
        match self.geometry.bounds(section) {
            Some(bounds) => scrollable::scroll_to(
                page_scroll_id(),
                AbsoluteOffset {
                    x: 0.0,
                    y: bounds.top,
                },
            ),
            None => Task::none(),
        }
    }

    /// Applies a language change and persists it. A failing write is
    /// reported but does not roll back the in-memory change.
    fn apply_language_change(&mut self, locale: Locale) {
        self.localizer.set_locale(locale);
        if let Err(error) = self.store.set_language(locale.code()) {
            eprintln!("Failed to persist language preference: {error}");
        }
    }

    /// The localized alert phrase and voice tag for the demo button.
    fn voice_alert(&self) -> (String, &'static str) {
        (
            self.localizer.tr("demo.voiceAlert"),
            self.localizer.locale().speech_tag(),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = Column::new()
            .push(sections::hero::view(&self.localizer))
            .push(sections::features::view(&self.localizer))
            .push(sections::how_it_works::view(&self.localizer))
            .push(sections::demo::view(&self.localizer))
            .push(sections::privacy::view(&self.localizer))
            .push(sections::download::view(&self.localizer))
            .push(sections::footer::view(&self.localizer))
            .width(Length::Fill);

        let content = Scrollable::new(page)
            .id(page_scroll_id())
            .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y))
            .width(Length::Fill)
            .height(Length::Fill);

        let bar = navbar::view(navbar::ViewContext {
            localizer: &self.localizer,
            active_section: self.tracker.active(),
            language_menu_open: self.language_menu_open,
        })
        .map(Message::Navbar);

        let layers = Stack::new().push(content).push(bar);

        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .style(|_theme: &Theme| container::Style {
                background: Some(crate::ui::design_tokens::palette::SLATE_950.into()),
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::preferences::StoreError;
    use std::sync::Mutex;

    /// Preference store fake whose backing cell survives handing the store to
    /// the app.
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<Option<String>>>);

    impl PreferenceStore for SharedStore {
        fn language(&self) -> Option<String> {
            self.0.lock().expect("store lock").clone()
        }

        fn set_language(&mut self, code: &str) -> Result<(), StoreError> {
            *self.0.lock().expect("store lock") = Some(code.to_string());
            Ok(())
        }
    }

    /// Speech fake that never touches the platform.
    struct SilentSpeech;

    impl SpeechSynthesizer for SilentSpeech {
        fn speak(&self, _text: &str, _lang_tag: &str) -> Result<(), SpeechError> {
            Ok(())
        }
    }

    fn test_app(flags: Flags, store: SharedStore) -> App {
        let (app, _task) = App::with_ports(flags, Box::new(store), Arc::new(SilentSpeech));
        app
    }

    #[test]
    fn startup_uses_the_stored_language() {
        let store = SharedStore::default();
        store
            .clone()
            .set_language("ru")
            .expect("seed stored language");
        let app = test_app(Flags::default(), store);
        assert_eq!(app.localizer().locale(), Locale::Russian);
    }

    #[test]
    fn cli_flag_overrides_the_stored_language() {
        let store = SharedStore::default();
        store
            .clone()
            .set_language("ru")
            .expect("seed stored language");
        let app = test_app(
            Flags {
                lang: Some("en".to_string()),
            },
            store,
        );
        assert_eq!(app.localizer().locale(), Locale::English);
    }

    #[test]
    fn language_selection_updates_localizer_and_store() {
        let store = SharedStore::default();
        let mut app = test_app(Flags::default(), store.clone());

        let _ = app.update(Message::Navbar(navbar::Message::LanguageSelected(
            Locale::UzbekCyrillic,
        )));

        assert_eq!(app.localizer().locale(), Locale::UzbekCyrillic);
        assert_eq!(store.language(), Some("uz-cyrl".to_string()));
    }

    #[test]
    fn translations_follow_a_language_change_immediately() {
        let mut app = test_app(Flags::default(), SharedStore::default());
        let before = app.localizer().tr("nav.home");

        let _ = app.update(Message::Navbar(navbar::Message::LanguageSelected(
            Locale::English,
        )));

        assert_ne!(app.localizer().tr("nav.home"), before);
        assert_eq!(app.localizer().tr("nav.home"), "Home");
    }

    #[test]
    fn scrolling_past_the_hero_activates_features() {
        let mut app = test_app(Flags::default(), SharedStore::default());
        assert_eq!(app.active_section(), Section::Home);

        let features_top = app
            .geometry
            .bounds(Section::Features)
            .expect("features bounds")
            .top;
        let _ = app.update(Message::Scrolled(features_top));
        assert_eq!(app.active_section(), Section::Features);
    }

    #[test]
    fn nav_click_highlights_the_target_section_immediately() {
        let mut app = test_app(Flags::default(), SharedStore::default());
        let _ = app.update(Message::Navbar(navbar::Message::NavClicked(
            Section::Download,
        )));
        assert_eq!(app.active_section(), Section::Download);
    }

    #[test]
    fn voice_alert_follows_the_active_language() {
        let mut app = test_app(Flags::default(), SharedStore::default());
        let (uzbek_text, uzbek_tag) = app.voice_alert();
        assert_eq!(uzbek_tag, "uz-UZ");

        let _ = app.update(Message::Navbar(navbar::Message::LanguageSelected(
            Locale::Russian,
        )));
        let (russian_text, russian_tag) = app.voice_alert();
        assert_eq!(russian_tag, "ru-RU");
        assert_ne!(uzbek_text, russian_text);
    }

    #[test]
    fn speech_failure_is_absorbed() {
        let mut app = test_app(Flags::default(), SharedStore::default());
        let _ = app.update(Message::SpeechFinished(Err(
            SpeechError::SynthesizerUnavailable,
        )));
        // Still interactive: state is untouched.
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn view_renders() {
        let app = test_app(Flags::default(), SharedStore::default());
        let _element = app.view();
    }

    #[test]
    fn title_is_localized_brand() {
        let app = test_app(Flags::default(), SharedStore::default());
        assert_eq!(app.title(), "AssistantDrive");
    }
}
