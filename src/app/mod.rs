mod search;

pub use search::SearchField;

use crate::core::{
    Dispatch, FocusArbiter, FocusMode, HeightBudget, ListCursor, ListOutcome, NavError, NavKey,
    NavOutcome, Navigator, ReleaseToken, ViewId, logical_key,
};
use crate::infra::Settings;
use crossterm::event::KeyEvent;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const HOME: ViewId = "home";
pub const LOGS: ViewId = "logs";
pub const SETTINGS: ViewId = "settings";

/// Focus owner for the help overlay; not a view, so navigation handoff
/// leaves its claim alone. The overlay is closed only by its own keys.
const HELP_OWNER: &str = "help";

pub const REGISTERED_VIEWS: &[ViewId] = &[HOME, LOGS, SETTINGS];

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Nav(#[from] NavError),
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    LogLines(Vec<String>),
    LogError(String),
}

#[derive(Debug)]
pub enum AppCommand {
    None,
    Quit,
    SaveSettings,
    /// A programming error (unknown view id) that must halt the app loudly.
    Fatal(NavError),
}

#[derive(Clone, Copy, Debug)]
pub struct MenuEntry {
    pub label: &'static str,
    pub hint: &'static str,
    /// `None` means quit.
    pub target: Option<ViewId>,
}

pub const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        label: "Logs",
        hint: "Tail and search the log file",
        target: Some(LOGS),
    },
    MenuEntry {
        label: "Settings",
        hint: "Wrap-around, follow mode, theme",
        target: Some(SETTINGS),
    },
    MenuEntry {
        label: "Quit",
        hint: "Leave opsdeck",
        target: None,
    },
];

/// Rows of the settings view, in display order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingRow {
    WrapAround,
    FollowLogs,
    Theme,
}

pub const SETTING_ROWS: &[SettingRow] = &[
    SettingRow::WrapAround,
    SettingRow::FollowLogs,
    SettingRow::Theme,
];

// Rows around each list: menu bar, list borders, footer.
const CHROME_ROWS: u16 = 4;
// The search bar is a bordered one-line box.
const SEARCH_BAR_ROWS: u16 = 3;

#[derive(Debug)]
pub struct HomeView {
    pub cursor: ListCursor,
    pub budget: HeightBudget,
}

#[derive(Debug)]
pub struct SearchState {
    pub field: SearchField,
    token: ReleaseToken,
}

#[derive(Debug)]
pub struct LogsView {
    pub source: Option<PathBuf>,
    pub lines: Vec<String>,
    /// Indices into `lines` that pass the current filter.
    pub filtered_indices: Vec<usize>,
    pub cursor: ListCursor,
    pub budget: HeightBudget,
    pub search: Option<SearchState>,
    /// Query committed with Enter; keeps filtering after the bar closes.
    pub applied_query: Option<String>,
}

impl LogsView {
    pub fn search_open(&self) -> bool {
        self.search.is_some()
    }

    fn active_filter(&self) -> Option<SearchField> {
        if let Some(state) = &self.search {
            return Some(state.field.clone());
        }
        self.applied_query.as_ref().map(|query| {
            let mut field = SearchField::new();
            for ch in query.chars() {
                field.insert(ch);
            }
            field
        })
    }
}

#[derive(Debug)]
pub struct SettingsView {
    pub cursor: ListCursor,
    pub budget: HeightBudget,
}

#[derive(Debug)]
pub struct AppModel {
    pub navigator: Navigator,
    pub arbiter: FocusArbiter,
    pub home: HomeView,
    pub logs: LogsView,
    pub settings_view: SettingsView,
    pub settings: Settings,
    pub notice: Option<String>,
    pub terminal_rows: Option<u16>,
    help: Option<ReleaseToken>,
}

impl AppModel {
    pub fn new(
        log_path: Option<PathBuf>,
        settings: Settings,
        interactive: bool,
    ) -> Result<Self, NavError> {
        let navigator = Navigator::new(HOME, REGISTERED_VIEWS)?;
        let arbiter = FocusArbiter::new(interactive);

        let home = HomeView {
            cursor: ListCursor::new(MENU_ENTRIES.len(), MENU_ENTRIES.len())
                .with_wrap_around(settings.wrap_around),
            budget: HeightBudget::new(CHROME_ROWS, 1).with_max_height(MENU_ENTRIES.len()),
        };
        let logs_cursor = {
            let cursor = ListCursor::new(0, 1).with_wrap_around(settings.wrap_around);
            if settings.follow_logs { cursor.following() } else { cursor }
        };
        let logs = LogsView {
            source: log_path,
            lines: Vec::new(),
            filtered_indices: Vec::new(),
            cursor: logs_cursor,
            budget: HeightBudget::new(CHROME_ROWS, 3),
            search: None,
            applied_query: None,
        };
        let settings_view = SettingsView {
            cursor: ListCursor::new(SETTING_ROWS.len(), SETTING_ROWS.len())
                .with_wrap_around(settings.wrap_around),
            budget: HeightBudget::new(CHROME_ROWS, 1).with_max_height(SETTING_ROWS.len()),
        };

        let mut model = Self {
            navigator,
            arbiter,
            home,
            logs,
            settings_view,
            settings,
            notice: None,
            terminal_rows: None,
            help: None,
        };
        model.resolve_heights();
        Ok(model)
    }

    pub fn help_open(&self) -> bool {
        self.help.is_some()
    }

    fn open_help(&mut self) {
        if self.help.is_none() {
            self.help = Some(self.arbiter.push(HELP_OWNER, FocusMode::Normal));
        }
    }

    fn close_help(&mut self) {
        if let Some(token) = self.help.take() {
            if let Err(error) = self.arbiter.release(&token) {
                self.notice = Some(error.to_string());
            }
        }
    }

    pub fn with_terminal_size(mut self, _cols: u16, rows: u16) -> Self {
        self.terminal_rows = Some(rows);
        self.resolve_heights();
        self
    }

    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice.or(self.notice);
        self
    }

    /// Re-resolve every view's viewport height. Runs on resize and on any
    /// dynamic-row change so the next render never overflows its area.
    fn resolve_heights(&mut self) {
        let rows = self.terminal_rows;
        self.home
            .cursor
            .set_viewport_height(self.home.budget.resolve(rows, MENU_ENTRIES.len()));
        self.logs.cursor.set_viewport_height(
            self.logs
                .budget
                .resolve(rows, self.logs.filtered_indices.len()),
        );
        self.settings_view
            .cursor
            .set_viewport_height(self.settings_view.budget.resolve(rows, SETTING_ROWS.len()));
    }

    fn refilter_logs(&mut self) {
        // Keep the same underlying line selected across a filter change
        // when it survives the new filter.
        let previous_line = self
            .logs
            .cursor
            .selected()
            .and_then(|index| self.logs.filtered_indices.get(index).copied());

        let filter = self.logs.active_filter();
        self.logs.filtered_indices = match &filter {
            Some(field) => self
                .logs
                .lines
                .iter()
                .enumerate()
                .filter(|(_, line)| field.matches(line))
                .map(|(index, _)| index)
                .collect(),
            None => (0..self.logs.lines.len()).collect(),
        };
        self.logs.cursor.set_len(self.logs.filtered_indices.len());

        if !self.logs.cursor.is_following() {
            if let Some(line) = previous_line {
                if let Some(position) = self
                    .logs
                    .filtered_indices
                    .iter()
                    .position(|&index| index == line)
                {
                    self.logs.cursor.select(position);
                }
            }
        }
        self.resolve_heights();
    }

    fn open_search(&mut self) {
        if self.logs.search.is_some() {
            return;
        }
        let token = self.arbiter.push(LOGS, FocusMode::Exclusive);
        self.logs.search = Some(SearchState {
            field: SearchField::new(),
            token,
        });
        self.logs.applied_query = None;
        self.logs.budget.set_dynamic_reserved(SEARCH_BAR_ROWS);
        self.refilter_logs();
    }

    fn close_search(&mut self, commit: bool) {
        let Some(state) = self.logs.search.take() else {
            return;
        };
        if let Err(error) = self.arbiter.release(&state.token) {
            self.notice = Some(error.to_string());
        }
        self.logs.applied_query = if commit && !state.field.is_empty() {
            Some(state.field.text())
        } else {
            None
        };
        self.logs.budget.set_dynamic_reserved(0);
        self.refilter_logs();
    }

    /// Reset transient state when the logs view is unmounted. The navigator
    /// has already dropped the view's focus claims; the token inside
    /// `search` is then a harmless stale handle.
    fn unmount_current(&mut self) {
        if self.navigator.current() == LOGS {
            self.logs.search = None;
            self.logs.budget.set_dynamic_reserved(0);
        }
    }
}

pub fn update(model: AppModel, event: AppEvent) -> (AppModel, AppCommand) {
    match event {
        AppEvent::Key(key) => update_on_key(model, key),
        AppEvent::Resize(_cols, rows) => {
            let mut model = model;
            model.terminal_rows = Some(rows);
            model.resolve_heights();
            (model, AppCommand::None)
        }
        AppEvent::LogLines(lines) => append_log_lines(model, lines),
        AppEvent::LogError(error) => {
            let mut model = model;
            model.notice = Some(error);
            (model, AppCommand::None)
        }
    }
}

fn update_on_key(mut model: AppModel, key: KeyEvent) -> (AppModel, AppCommand) {
    model.notice = None;

    let exclusive = matches!(model.arbiter.active_mode(), Some(FocusMode::Exclusive));
    let Some(nav_key) = logical_key(&key, exclusive) else {
        return (model, AppCommand::None);
    };

    if nav_key == NavKey::Quit {
        return (model, AppCommand::Quit);
    }

    // Exactly one handler sees each key: the claim owner when a claim is
    // held, otherwise the mounted view.
    match model.arbiter.route() {
        Dispatch::Inert => (model, AppCommand::None),
        Dispatch::Owner(owner) => {
            if owner == LOGS {
                update_search(model, nav_key)
            } else if owner == HELP_OWNER {
                update_help(model, nav_key)
            } else {
                (model, AppCommand::None)
            }
        }
        Dispatch::Broadcast => {
            if matches!(nav_key, NavKey::Help | NavKey::Char('?')) {
                model.open_help();
                return (model, AppCommand::None);
            }
            match model.navigator.current() {
                HOME => update_home(model, nav_key),
                LOGS => update_logs(model, nav_key),
                SETTINGS => update_settings(model, nav_key),
                _ => (model, AppCommand::None),
            }
        }
    }
}

fn update_search(mut model: AppModel, nav_key: NavKey) -> (AppModel, AppCommand) {
    let Some(state) = model.logs.search.as_mut() else {
        return (model, AppCommand::None);
    };

    match nav_key {
        NavKey::Char(ch) => {
            state.field.insert(ch);
            model.refilter_logs();
        }
        NavKey::Erase => {
            state.field.erase();
            model.refilter_logs();
        }
        NavKey::Left => state.field.move_left(),
        NavKey::Right => state.field.move_right(),
        NavKey::Home => state.field.move_home(),
        NavKey::End => state.field.move_end(),
        // The list stays navigable under the bar so a match can be picked
        // without leaving capture.
        NavKey::Up => {
            model.logs.cursor.move_up();
        }
        NavKey::Down => {
            model.logs.cursor.move_down();
        }
        NavKey::PageUp => {
            model.logs.cursor.page_up();
        }
        NavKey::PageDown => {
            model.logs.cursor.page_down();
        }
        NavKey::Activate => model.close_search(true),
        NavKey::Back => model.close_search(false),
        NavKey::NextRegion | NavKey::Help | NavKey::Quit => {}
    }
    (model, AppCommand::None)
}

fn update_help(mut model: AppModel, nav_key: NavKey) -> (AppModel, AppCommand) {
    match nav_key {
        NavKey::Back | NavKey::Activate | NavKey::Help | NavKey::Char('?') => model.close_help(),
        _ => {}
    }
    (model, AppCommand::None)
}

fn update_home(mut model: AppModel, nav_key: NavKey) -> (AppModel, AppCommand) {
    match nav_key {
        NavKey::Up => {
            model.home.cursor.move_up();
        }
        NavKey::Down => {
            model.home.cursor.move_down();
        }
        NavKey::Home => {
            model.home.cursor.jump_to_start();
        }
        NavKey::End => {
            model.home.cursor.jump_to_end();
        }
        NavKey::Activate => {
            if let ListOutcome::Activated(index) = model.home.cursor.activate() {
                return activate_menu_entry(model, index);
            }
        }
        NavKey::Back => return go_back(model),
        _ => {}
    }
    (model, AppCommand::None)
}

fn activate_menu_entry(mut model: AppModel, index: usize) -> (AppModel, AppCommand) {
    let Some(entry) = MENU_ENTRIES.get(index) else {
        return (model, AppCommand::None);
    };
    match entry.target {
        Some(target) => {
            model.unmount_current();
            match model.navigator.navigate(target, &mut model.arbiter) {
                Ok(NavOutcome::Mounted(_)) => {
                    model.resolve_heights();
                    (model, AppCommand::None)
                }
                Ok(NavOutcome::Exit) => (model, AppCommand::Quit),
                Err(error) => (model, AppCommand::Fatal(error)),
            }
        }
        None => (model, AppCommand::Quit),
    }
}

fn update_logs(mut model: AppModel, nav_key: NavKey) -> (AppModel, AppCommand) {
    match nav_key {
        NavKey::Up => {
            model.logs.cursor.move_up();
        }
        NavKey::Down => {
            model.logs.cursor.move_down();
        }
        NavKey::PageUp => {
            model.logs.cursor.page_up();
        }
        NavKey::PageDown => {
            model.logs.cursor.page_down();
        }
        NavKey::Home => {
            model.logs.cursor.jump_to_start();
        }
        NavKey::End => {
            model.logs.cursor.jump_to_end();
        }
        NavKey::Char('/') => model.open_search(),
        NavKey::Activate => {
            // Surface the full line in the notice row; long lines get
            // truncated inside the list.
            if let ListOutcome::Activated(index) = model.logs.cursor.activate() {
                let line = model
                    .logs
                    .filtered_indices
                    .get(index)
                    .and_then(|line_index| model.logs.lines.get(*line_index));
                if let Some(line) = line {
                    model.notice = Some(line.clone());
                }
            }
        }
        NavKey::Back => {
            if model.logs.applied_query.is_some() {
                model.logs.applied_query = None;
                model.refilter_logs();
            } else {
                return go_back(model);
            }
        }
        _ => {}
    }
    (model, AppCommand::None)
}

fn update_settings(mut model: AppModel, nav_key: NavKey) -> (AppModel, AppCommand) {
    match nav_key {
        NavKey::Up => {
            model.settings_view.cursor.move_up();
        }
        NavKey::Down => {
            model.settings_view.cursor.move_down();
        }
        NavKey::Activate | NavKey::Left | NavKey::Right => {
            if let ListOutcome::Activated(index) = model.settings_view.cursor.activate() {
                return toggle_setting(model, index);
            }
        }
        NavKey::Back => return go_back(model),
        _ => {}
    }
    (model, AppCommand::None)
}

fn toggle_setting(mut model: AppModel, index: usize) -> (AppModel, AppCommand) {
    let Some(row) = SETTING_ROWS.get(index) else {
        return (model, AppCommand::None);
    };
    match row {
        SettingRow::WrapAround => {
            model.settings.wrap_around = !model.settings.wrap_around;
            let wrap = model.settings.wrap_around;
            model.home.cursor.set_wrap_around(wrap);
            model.logs.cursor.set_wrap_around(wrap);
            model.settings_view.cursor.set_wrap_around(wrap);
        }
        SettingRow::FollowLogs => {
            model.settings.follow_logs = !model.settings.follow_logs;
            model.logs.cursor.set_following(model.settings.follow_logs);
        }
        SettingRow::Theme => {
            model.settings.theme = model.settings.theme.toggled();
        }
    }
    (model, AppCommand::SaveSettings)
}

fn go_back(mut model: AppModel) -> (AppModel, AppCommand) {
    model.unmount_current();
    match model.navigator.back(&mut model.arbiter) {
        NavOutcome::Exit => (model, AppCommand::Quit),
        NavOutcome::Mounted(_) => {
            model.resolve_heights();
            (model, AppCommand::None)
        }
    }
}

fn append_log_lines(mut model: AppModel, lines: Vec<String>) -> (AppModel, AppCommand) {
    if lines.is_empty() {
        return (model, AppCommand::None);
    }
    model.logs.lines.extend(lines);
    model.refilter_logs();
    (model, AppCommand::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn model() -> AppModel {
        AppModel::new(None, Settings::default(), true)
            .expect("registry")
            .with_terminal_size(80, 24)
    }

    fn press(model: AppModel, code: KeyCode) -> (AppModel, AppCommand) {
        update(
            model,
            AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)),
        )
    }

    fn lines(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("line {index}")).collect()
    }

    #[test]
    fn menu_activation_navigates_to_logs() {
        let (model, _) = press(model(), KeyCode::Enter);
        assert_eq!(model.navigator.current(), LOGS);
    }

    #[test]
    fn escape_at_home_quits() {
        let (_, command) = press(model(), KeyCode::Esc);
        assert!(matches!(command, AppCommand::Quit));
    }

    #[test]
    fn q_is_an_escape_alias_outside_capture() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, command) = press(model, KeyCode::Char('q'));
        assert!(matches!(command, AppCommand::None));
        assert_eq!(model.navigator.current(), HOME);
    }

    #[test]
    fn search_claims_focus_and_captures_vi_aliases() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = update(model, AppEvent::LogLines(lines(20)));
        let (model, _) = press(model, KeyCode::Char('/'));
        assert!(model.logs.search_open());
        assert!(model.arbiter.is_active(LOGS));

        // 'j' is text input while the search bar owns input.
        let (model, _) = press(model, KeyCode::Char('j'));
        let state = model.logs.search.as_ref().expect("search open");
        assert_eq!(state.field.text(), "j");
    }

    #[test]
    fn typing_filters_and_enter_commits_the_query() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = update(model, AppEvent::LogLines(lines(12)));
        let (model, _) = press(model, KeyCode::Char('/'));
        let (model, _) = press(model, KeyCode::Char('1'));
        assert_eq!(model.logs.filtered_indices.len(), 3); // 1, 10, 11

        let (model, _) = press(model, KeyCode::Enter);
        assert!(!model.logs.search_open());
        assert_eq!(model.logs.applied_query.as_deref(), Some("1"));
        assert_eq!(model.logs.filtered_indices.len(), 3);
        assert_eq!(model.arbiter.route(), Dispatch::Broadcast);
    }

    #[test]
    fn escape_cancels_search_and_releases_the_claim() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = update(model, AppEvent::LogLines(lines(12)));
        let (model, _) = press(model, KeyCode::Char('/'));
        let (model, _) = press(model, KeyCode::Char('1'));
        let (model, _) = press(model, KeyCode::Esc);

        assert!(!model.logs.search_open());
        assert_eq!(model.logs.applied_query, None);
        assert_eq!(model.logs.filtered_indices.len(), 12);
        assert_eq!(model.arbiter.route(), Dispatch::Broadcast);
    }

    #[test]
    fn leaving_logs_with_search_open_leaks_no_claim() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = update(model, AppEvent::LogLines(lines(5)));
        let (model, _) = press(model, KeyCode::Char('/'));
        assert!(model.logs.search_open());

        // Esc closes the bar, a second Esc leaves the view.
        let (model, _) = press(model, KeyCode::Esc);
        let (model, _) = press(model, KeyCode::Esc);
        assert_eq!(model.navigator.current(), HOME);
        assert_eq!(model.arbiter.route(), Dispatch::Broadcast);
        assert!(!model.logs.search_open());
    }

    #[test]
    fn follow_mode_tracks_appended_lines() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = update(model, AppEvent::LogLines(lines(30)));
        assert_eq!(model.logs.cursor.selected(), Some(29));

        let (model, _) = update(model, AppEvent::LogLines(lines(5)));
        assert_eq!(model.logs.cursor.selected(), Some(34));
    }

    #[test]
    fn resize_shrinks_the_log_viewport() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = update(model, AppEvent::LogLines(lines(100)));
        assert_eq!(model.logs.cursor.viewport_height(), 20);

        let (model, _) = update(model, AppEvent::Resize(80, 10));
        assert_eq!(model.logs.cursor.viewport_height(), 6);
        let (model, _) = update(model, AppEvent::Resize(80, 6));
        // Below the budget the min height wins.
        assert_eq!(model.logs.cursor.viewport_height(), 3);
        assert!(model.logs.cursor.selected().is_some());
    }

    #[test]
    fn non_interactive_model_ignores_keys() {
        let model = AppModel::new(None, Settings::default(), false)
            .expect("registry")
            .with_terminal_size(80, 24);
        let (model, command) = press(model, KeyCode::Enter);
        assert!(matches!(command, AppCommand::None));
        assert_eq!(model.navigator.current(), HOME);
    }

    #[test]
    fn ctrl_c_quits_even_during_capture() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = press(model, KeyCode::Char('/'));
        let (_, command) = update(
            model,
            AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(matches!(command, AppCommand::Quit));
    }

    #[test]
    fn help_overlay_absorbs_keys_until_closed() {
        let (model, _) = press(model(), KeyCode::Char('?'));
        assert!(model.help_open());

        // Navigation keys no longer reach the home menu.
        let (model, _) = press(model, KeyCode::Down);
        assert_eq!(model.home.cursor.selected(), Some(0));

        // 'q' stays a back alias under a Normal-mode claim and closes help.
        let (model, _) = press(model, KeyCode::Char('q'));
        assert!(!model.help_open());
        assert_eq!(model.arbiter.route(), Dispatch::Broadcast);
        assert_eq!(model.navigator.current(), HOME);
    }

    #[test]
    fn question_mark_is_text_during_search_capture() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = press(model, KeyCode::Char('/'));
        let (model, _) = press(model, KeyCode::Char('?'));
        assert!(!model.help_open());
        let state = model.logs.search.as_ref().expect("search open");
        assert_eq!(state.field.text(), "?");
    }

    #[test]
    fn follow_toggle_off_disengages_the_logs_cursor() {
        let (model, _) = press(model(), KeyCode::Enter);
        let (model, _) = update(model, AppEvent::LogLines(lines(10)));
        assert!(model.logs.cursor.is_following());

        let (model, _) = press(model, KeyCode::Esc);
        let (model, _) = press(model, KeyCode::Down);
        let (model, _) = press(model, KeyCode::Enter);
        assert_eq!(model.navigator.current(), SETTINGS);

        let (model, _) = press(model, KeyCode::Down);
        let (model, command) = press(model, KeyCode::Enter);
        assert!(matches!(command, AppCommand::SaveSettings));
        assert!(!model.settings.follow_logs);
        assert!(!model.logs.cursor.is_following());

        // New lines no longer drag the selection to the tail.
        let (model, _) = update(model, AppEvent::LogLines(lines(5)));
        assert_eq!(model.logs.cursor.selected(), Some(9));
    }

    #[test]
    fn follow_toggle_on_empty_logs_takes_effect_when_lines_arrive() {
        let (model, _) = press(model(), KeyCode::Down);
        let (model, _) = press(model, KeyCode::Enter);
        assert_eq!(model.navigator.current(), SETTINGS);

        // Off, then back on, all while the logs list is still empty.
        let (model, _) = press(model, KeyCode::Down);
        let (model, _) = press(model, KeyCode::Enter);
        assert!(!model.logs.cursor.is_following());
        let (model, _) = press(model, KeyCode::Enter);
        assert!(model.settings.follow_logs);
        assert!(model.logs.cursor.is_following());

        let (model, _) = update(model, AppEvent::LogLines(lines(10)));
        assert_eq!(model.logs.cursor.selected(), Some(9));
    }

    #[test]
    fn toggling_wrap_updates_every_cursor() {
        let (model, _) = press(model(), KeyCode::Down);
        let (model, _) = press(model, KeyCode::Enter);
        assert_eq!(model.navigator.current(), SETTINGS);

        let (model, command) = press(model, KeyCode::Enter);
        assert!(matches!(command, AppCommand::SaveSettings));
        assert!(!model.settings.wrap_around);

        // Home cursor no longer wraps: up from the top is a no-op.
        let (model, _) = press(model, KeyCode::Esc);
        let (mut model, _) = press(model, KeyCode::Up);
        assert_eq!(model.home.cursor.selected(), Some(0));
        assert_eq!(model.home.cursor.move_up(), ListOutcome::Ignored);
    }
}
