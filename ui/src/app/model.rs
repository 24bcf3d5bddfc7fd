use crate::components::common::Msg;
use crate::components::outline::{render_code_blocks, render_outline};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult, ErrorReporter};
use crate::page::{PageDocument, PresentationTree};
use engine::clipboard::{COPY_FEEDBACK_DURATION, ClipboardService, CopyFeedback};
use engine::filter::{FilterIndex, VisibilityPlan};
use engine::nav::NavTree;
use engine::theme::{DEFAULT_THEME_MODE, ThemeController, ThemeMode, ThemeStore};
use engine::tracker::{SectionTracker, TriggerBand};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Tunables the model needs from configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSettings {
    pub band: TriggerBand,
    pub default_theme: ThemeMode,
    pub copy_feedback: Duration,
}

impl ModelSettings {
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            band: config.tracker().band()?,
            default_theme: config.theme().default_mode,
            copy_feedback: config.clipboard().feedback_duration(),
        })
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            band: TriggerBand::DEFAULT,
            default_theme: DEFAULT_THEME_MODE,
            copy_feedback: COPY_FEEDBACK_DURATION,
        }
    }
}

/// Something the user should see outside the page itself
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Warning(String),
    Error(AppError),
}

/// Application model
pub struct Model<S, C>
where
    S: ThemeStore,
    C: ClipboardService,
{
    pub page: PageDocument,
    pub nav: NavTree,
    pub filter: FilterIndex,
    pub tracker: SectionTracker,
    pub theme: ThemeController<S>,
    pub copy_feedback: CopyFeedback,
    pub clipboard: C,
    /// Rendering surface every component writes into
    pub tree: PresentationTree,
    /// Result of the most recent filter evaluation
    pub plan: VisibilityPlan,
    pub notices: Vec<Notice>,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,

    pub tx_to_main: Sender<Msg>,
    rx_to_main: Receiver<Msg>,
    pub error_reporter: ErrorReporter,
}

impl<S, C> Model<S, C>
where
    S: ThemeStore,
    C: ClipboardService,
{
    /// Build every component from the page and bring the presentation into
    /// its initial state: persisted theme applied, everything visible.
    pub fn new(page: PageDocument, settings: ModelSettings, store: S, clipboard: C) -> Self {
        let nav = page.nav_tree();
        let filter = FilterIndex::new(&nav);
        let tracker = SectionTracker::new(&nav, page.headings.clone(), settings.band);
        let mut tree = PresentationTree::new(&page.title, &nav, tracker.headings());

        let mut theme = ThemeController::new(store, settings.default_theme);
        let mode = theme.load(&mut tree);

        let plan = filter.clear_query();
        plan.apply_to(&mut tree);

        let (tx_to_main, rx_to_main) = mpsc::channel();
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        log::info!(
            "Model ready: {} sections, {} entries, {} headings, {mode} theme",
            nav.sections().len(),
            nav.entries().len(),
            tracker.headings().len()
        );

        Self {
            page,
            nav,
            filter,
            tracker,
            theme,
            copy_feedback: CopyFeedback::new(settings.copy_feedback),
            clipboard,
            tree,
            plan,
            notices: Vec::new(),
            quit: false,
            redraw: true,
            tx_to_main,
            rx_to_main,
            error_reporter,
        }
    }

    /// Run `msg` and every message it produces, then everything queued on
    /// the internal channel.
    pub fn process(&mut self, msg: Msg) {
        let mut msg = Some(msg);
        while msg.is_some() {
            msg = self.handle_update(msg);
        }
        self.drain_pending();
    }

    pub fn drain_pending(&mut self) {
        while let Ok(pending) = self.rx_to_main.try_recv() {
            let mut msg = Some(pending);
            while msg.is_some() {
                msg = self.handle_update(msg);
            }
        }
    }

    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;
        self.redraw = true;

        match msg {
            Msg::AppClose => {
                self.quit = true;
                None
            }
            Msg::SearchActivity(msg) => self.update_search(msg),
            Msg::NavActivity(msg) => self.update_nav(msg),
            Msg::ThemeActivity(msg) => self.update_theme(msg),
            Msg::CopyActivity(msg) => self.update_copy(msg),
            Msg::PopupActivity(msg) => self.update_popup(msg),
            Msg::Error(e) => {
                log::error!("Error received: {e}");
                self.error_reporter.report_simple(e, "Application", "update");
                None
            }
        }
    }

    /// Plain-text view of the sidebar followed by the page's code blocks
    pub fn view(&self) -> String {
        let mut view = render_outline(&self.tree);
        if !self.page.code_blocks.is_empty() {
            view.push('\n');
            view.push_str(&render_code_blocks(&self.page.code_blocks, &self.tree));
        }
        view
    }

    /// Notices accumulated since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
