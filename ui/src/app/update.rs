use crate::app::model::{Model, Notice};
use crate::components::common::{
    CopyActivityMsg, Msg, NavActivityMsg, PopupActivityMsg, SearchActivityMsg, ThemeActivityMsg,
};
use crate::error::AppError;
use engine::clipboard::ClipboardService;
use engine::port::PresentationPort;
use engine::theme::ThemeStore;
use std::time::Instant;

impl<S, C> Model<S, C>
where
    S: ThemeStore,
    C: ClipboardService,
{
    pub fn update_search(&mut self, msg: SearchActivityMsg) -> Option<Msg> {
        match msg {
            SearchActivityMsg::TextChanged(text) => {
                self.plan = self.filter.apply_query(&text);
                self.plan.apply_to(&mut self.tree);
                if self.plan.is_empty() {
                    log::debug!("No navigation entry matches '{}'", self.plan.query());
                }
                None
            }
            SearchActivityMsg::Cleared => {
                self.plan = self.filter.clear_query();
                self.plan.apply_to(&mut self.tree);
                self.tree.blur_search();
                None
            }
            SearchActivityMsg::Focused => {
                self.tree.focus_search();
                None
            }
        }
    }

    pub fn update_nav(&mut self, msg: NavActivityMsg) -> Option<Msg> {
        match msg {
            NavActivityMsg::IntersectionChanged(changes) => {
                self.tracker.on_intersection(&changes, &mut self.tree);
                None
            }
            NavActivityMsg::Scrolled {
                offset,
                viewport_height,
            } => {
                self.tracker
                    .observe_scroll(offset, viewport_height, &mut self.tree);
                None
            }
            NavActivityMsg::EntryClicked(entry) => {
                self.tracker.on_click(entry, &mut self.tree);
                None
            }
            NavActivityMsg::TargetRequested(target) => match self.nav.entry_for_target(&target) {
                Some(entry) => Some(Msg::NavActivity(NavActivityMsg::EntryClicked(entry))),
                None => {
                    log::debug!("No navigation entry links to '{target}'");
                    None
                }
            },
        }
    }

    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::Toggled => {
                self.theme.toggle(&mut self.tree);
                None
            }
        }
    }

    pub fn update_copy(&mut self, msg: CopyActivityMsg) -> Option<Msg> {
        match msg {
            CopyActivityMsg::CopyRequested(block_id) => {
                match self.page.code_block(&block_id) {
                    Some(block) => {
                        let text = block.text.clone();
                        self.copy_feedback.copy(
                            &mut self.clipboard,
                            &block_id,
                            &text,
                            Instant::now(),
                            &mut self.tree,
                        );
                    }
                    None => {
                        self.error_reporter.report_warning(
                            AppError::Component(format!("No code block '{block_id}' on this page")),
                            "Copy",
                            "copy_block",
                        );
                    }
                }
                None
            }
            CopyActivityMsg::Tick(now) => {
                self.copy_feedback.tick(now, &mut self.tree);
                None
            }
        }
    }

    pub fn update_popup(&mut self, msg: PopupActivityMsg) -> Option<Msg> {
        match msg {
            PopupActivityMsg::ShowWarning(message) => {
                self.notices.push(Notice::Warning(message));
            }
            PopupActivityMsg::ShowError(error) => {
                self.notices.push(Notice::Error(error));
            }
            PopupActivityMsg::Close => {
                self.notices.clear();
            }
        }
        None
    }
}
