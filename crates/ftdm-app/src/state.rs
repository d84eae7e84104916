//! Application state (Model in TEA pattern)

use crate::actions::DownloadTask;
use crate::config::Settings;
use ftdm_core::registry::{self, SectionKey};
use ftdm_core::{
    render_section, Accordion, DownloadModal, FileTreeState, Page, RecordId, SectionOptions,
    SectionRow, StaticTheme, ThemeMode, ThemeProvider,
};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Docs page with sidebar
    #[default]
    Normal,

    /// Framework download dialog on top of the page
    DownloadDialog,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Page View State
// ─────────────────────────────────────────────────────────────────────────────

/// A header row the cursor can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTarget {
    /// Index into [`Page::sections`]
    pub section: usize,
    pub id: RecordId,
}

/// Per-page view state, rebuilt whenever the page changes
///
/// Each section on the page owns an independent [`Accordion`], so two
/// sections can each have one record open. The cursor walks the headers of
/// all sections in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewState {
    page: Page,
    accordions: Vec<Accordion>,
    cursor: usize,
}

impl PageViewState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            accordions: vec![Accordion::new(); page.sections().len()],
            cursor: 0,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn accordion(&self, section: usize) -> Option<&Accordion> {
        self.accordions.get(section)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Every header on the page, top to bottom
    pub fn headers(&self) -> Vec<HeaderTarget> {
        self.page
            .sections()
            .iter()
            .enumerate()
            .flat_map(|(section, key)| {
                registry::records(*key)
                    .iter()
                    .map(move |record| HeaderTarget {
                        section,
                        id: record.id,
                    })
            })
            .collect()
    }

    pub fn selected(&self) -> Option<HeaderTarget> {
        self.headers().get(self.cursor).copied()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.headers().len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.headers().len().saturating_sub(1);
    }

    /// Toggle the record under the cursor in its own section's accordion
    pub fn toggle_selected(&mut self) -> Option<HeaderTarget> {
        let target = self.selected()?;
        let accordion = self.accordions.get_mut(target.section)?;
        accordion.toggle(target.id);
        Some(target)
    }

    /// Expand a record by id in whichever section holds it
    pub fn expand(&mut self, id: &str) -> bool {
        let headers = self.headers();
        let Some(position) = headers.iter().position(|h| h.id.as_str() == id) else {
            return false;
        };
        let target = headers[position];
        if let Some(accordion) = self.accordions.get_mut(target.section) {
            accordion.expand(target.id);
            self.cursor = position;
            return true;
        }
        false
    }

    pub fn collapse_all(&mut self) {
        self.accordions.iter_mut().for_each(Accordion::collapse);
    }

    /// Rendered rows for each section on the page
    pub fn sections(&self, options: SectionOptions) -> Vec<(SectionKey, Vec<SectionRow>)> {
        self.page
            .sections()
            .iter()
            .zip(&self.accordions)
            .map(|(key, accordion)| (*key, render_section(*key, accordion, options)))
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App State
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Current page and its accordions
    pub view: PageViewState,

    /// Download dialog lifecycle
    pub download: DownloadModal,

    /// Framework structure preview inside the download dialog
    pub file_tree: FileTreeState,

    /// In-flight download, cancelled when the dialog closes
    pub download_task: Option<DownloadTask>,

    /// Whether the page sidebar is shown
    pub sidebar_visible: bool,

    /// Transient one-line notice for the status bar
    pub status_message: Option<String>,

    /// Spinner frame counter driven by [`crate::Message::Tick`]
    pub tick: u64,

    theme: Box<dyn ThemeProvider>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("ui_mode", &self.ui_mode)
            .field("phase", &self.phase)
            .field("page", &self.view.page())
            .field("download", &self.download)
            .field("has_download_task", &self.download_task.is_some())
            .field("theme", &self.theme.theme())
            .finish_non_exhaustive()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings with an in-memory dark theme
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Box::new(StaticTheme::new(ThemeMode::Dark)))
    }

    /// Create state with settings and an injected theme provider
    pub fn with_settings(settings: Settings, theme: Box<dyn ThemeProvider>) -> Self {
        Self {
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            view: PageViewState::new(Page::default()),
            download: DownloadModal::new(settings.download.policy()),
            file_tree: FileTreeState::default(),
            download_task: None,
            sidebar_visible: settings.ui.show_sidebar,
            status_message: None,
            tick: 0,
            settings,
            theme,
        }
    }

    pub fn page(&self) -> Page {
        self.view.page()
    }

    /// Switch page, dropping the old page's accordion state
    pub fn go_to_page(&mut self, page: Page) {
        if self.view.page() != page {
            self.view = PageViewState::new(page);
        }
    }

    /// Open `page` with the record `expand` already expanded
    ///
    /// Returns false when the page has no record with that id.
    pub fn start_at(&mut self, page: Page, expand: Option<&str>) -> bool {
        self.go_to_page(page);
        expand.map_or(true, |id| self.view.expand(id))
    }

    pub fn section_options(&self) -> SectionOptions {
        self.settings.ui.section_options()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.theme()
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
