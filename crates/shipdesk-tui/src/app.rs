//! Console application state machine.
//!
//! Key events mutate the state directly and return an [`Action`] when the
//! run loop has to talk to the shipment source. Nothing here does I/O.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shipdesk_common::types::{ListColumn, Shipment, ShipmentId};
use shipdesk_core::store::ShipmentStore;
use shipdesk_core::table::{TablePage, TableQuery};

/// Which view the console is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Searchable, sortable, paginated shipment list.
    List,
    /// Detail of the selected shipment.
    Detail,
}

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands.
    Normal,
    /// Keys edit the list search keyword.
    Search,
    /// Keys edit the draft name of the selected shipment.
    EditName,
}

/// Side effect requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Refetch all shipments from the source.
    Refresh,
    /// Push a committed name edit to the source.
    PersistName {
        /// Edited shipment.
        id: ShipmentId,
        /// New name.
        name: String,
    },
}

/// Root application state for the console.
#[derive(Debug)]
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    /// Current active view.
    pub current_view: View,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Fetched shipments and selection.
    pub store: ShipmentStore,
    /// Search, sort, and page of the list view.
    pub query: TableQuery,
    /// Row cursor within the visible page.
    pub selected_index: usize,
    /// Name being typed in edit mode.
    pub draft_name: String,
    /// Last status message shown in the footer.
    pub status: Option<String>,
    persist_edits: bool,
}

impl App {
    /// Creates an application state over an existing store.
    #[must_use]
    pub fn new(store: ShipmentStore, rows_per_page: usize, persist_edits: bool) -> Self {
        Self {
            running: true,
            current_view: View::List,
            input_mode: InputMode::Normal,
            store,
            query: TableQuery::new(rows_per_page),
            selected_index: 0,
            draft_name: String::new(),
            status: None,
            persist_edits,
        }
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Visible page of the list view.
    #[must_use]
    pub fn page(&self) -> TablePage<'_> {
        self.query.apply(self.store.list_items())
    }

    /// Id of the row under the cursor, if the page has rows.
    #[must_use]
    pub fn highlighted_id(&self) -> Option<ShipmentId> {
        self.page()
            .rows
            .get(self.selected_index)
            .map(|item| item.id.clone())
    }

    /// The shipment shown by the detail view.
    #[must_use]
    pub fn selected_shipment(&self) -> Option<&Shipment> {
        self.store.selected()
    }

    /// Loads freshly fetched shipments.
    pub fn load(&mut self, shipments: Vec<Shipment>) {
        self.store.replace(shipments);
        self.clamp_cursor();
        if self.current_view == View::Detail && self.store.selected().is_none() {
            self.go_home();
        }
    }

    /// Dispatches a key press to the handler of the current view and mode.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return None;
        }
        match (self.current_view, self.input_mode) {
            (_, InputMode::Search) => {
                self.handle_search_key(key);
                None
            }
            (_, InputMode::EditName) => self.handle_edit_key(key),
            (View::List, InputMode::Normal) => self.handle_list_key(key),
            (View::Detail, InputMode::Normal) => {
                self.handle_detail_key(key);
                None
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => {
                let filtered = self.page().filtered_count;
                self.query.next_page(filtered);
                self.selected_index = 0;
            }
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => {
                self.query.prev_page();
                self.selected_index = 0;
            }
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char(c @ '1'..='6') => {
                let index = usize::from(c as u8 - b'1');
                self.query.request_sort(ListColumn::ALL[index]);
                self.selected_index = 0;
            }
            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('r') => return Some(Action::Refresh),
            _ => {}
        }
        None
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                let mut keyword = self.query.keyword().to_string();
                if keyword.pop().is_some() {
                    self.query.set_keyword(keyword);
                    self.selected_index = 0;
                }
            }
            KeyCode::Char(c) => {
                let mut keyword = self.query.keyword().to_string();
                keyword.push(c);
                self.query.set_keyword(keyword);
                self.selected_index = 0;
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('e') => self.start_edit(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b' | 'h') => self.go_home(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => return self.commit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Backspace => {
                let _ = self.draft_name.pop();
            }
            KeyCode::Char(c) => self.draft_name.push(c),
            _ => {}
        }
        None
    }

    fn move_down(&mut self) {
        let visible = self.page().rows.len();
        if self.selected_index + 1 < visible {
            self.selected_index += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let visible = self.page().rows.len();
        self.selected_index = self.selected_index.min(visible.saturating_sub(1));
    }

    /// Selects the highlighted shipment and switches to the detail view.
    pub fn open_detail(&mut self) {
        let Some(id) = self.highlighted_id() else {
            return;
        };
        match self.store.select(&id) {
            Ok(_) => {
                tracing::debug!(id = %id, "opening shipment detail");
                self.current_view = View::Detail;
                self.input_mode = InputMode::Normal;
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Returns to the list view, keeping its search, sort, and page.
    pub fn go_home(&mut self) {
        self.current_view = View::List;
        self.input_mode = InputMode::Normal;
        self.draft_name.clear();
        self.clamp_cursor();
    }

    /// Enters edit mode with the draft set to the current name.
    pub fn start_edit(&mut self) {
        if let Some(shipment) = self.store.selected() {
            self.draft_name = shipment.name.clone();
            self.input_mode = InputMode::EditName;
        }
    }

    /// Leaves edit mode without touching the shipment.
    pub fn cancel_edit(&mut self) {
        self.draft_name.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Applies the draft name to the selected shipment.
    ///
    /// Returns a persistence action when edits are pushed to the source.
    pub fn commit_edit(&mut self) -> Option<Action> {
        self.input_mode = InputMode::Normal;
        let name = std::mem::take(&mut self.draft_name);
        match self.store.edit_name(name) {
            Ok(shipment) => {
                let id = shipment.id.clone();
                let name = shipment.name.clone();
                self.set_status(format!("renamed {id}"));
                self.persist_edits
                    .then_some(Action::PersistName { id, name })
            }
            Err(e) => {
                self.set_status(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use shipdesk_common::types::SortOrder;

    use super::*;

    fn shipment(id: &str, name: &str) -> Shipment {
        Shipment {
            id: ShipmentId::new(id),
            name: name.into(),
            status: "ACTIVE".into(),
            ..Shipment::default()
        }
    }

    fn app_with(count: usize, persist_edits: bool) -> App {
        let shipments = (0..count)
            .map(|n| shipment(&format!("S{}", 1000 + n), &format!("shipment {n}")))
            .collect();
        App::new(ShipmentStore::new(shipments), 20, persist_edits)
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let _ = press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn new_app_starts_on_list() {
        let app = app_with(3, false);
        assert!(app.running);
        assert_eq!(app.current_view, View::List);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = app_with(1, false);
        let _ = press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = app_with(1, false);
        let _ = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn cursor_stays_within_visible_rows() {
        let mut app = app_with(2, false);
        let _ = press(&mut app, KeyCode::Down);
        let _ = press(&mut app, KeyCode::Down);
        let _ = press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 1);
        let _ = press(&mut app, KeyCode::Up);
        let _ = press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn page_keys_move_between_pages() {
        let mut app = app_with(45, false);
        let _ = press(&mut app, KeyCode::Down);
        let _ = press(&mut app, KeyCode::Right);
        assert_eq!(app.query.page(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.highlighted_id(), Some(ShipmentId::new("S1020")));
        let _ = press(&mut app, KeyCode::Right);
        let _ = press(&mut app, KeyCode::Right);
        assert_eq!(app.query.page(), 2);
        let _ = press(&mut app, KeyCode::Left);
        assert_eq!(app.query.page(), 1);
    }

    #[test]
    fn search_mode_edits_keyword_and_resets_page() {
        let mut app = app_with(45, false);
        let _ = press(&mut app, KeyCode::Right);
        let _ = press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        type_text(&mut app, "s104q");
        let _ = press(&mut app, KeyCode::Backspace);
        assert_eq!(app.query.keyword(), "s104");
        assert_eq!(app.query.page(), 0);
        assert!(app.running);

        let _ = press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.page().filtered_count, 5);
    }

    #[test]
    fn number_keys_request_sort() {
        let mut app = app_with(3, false);
        let _ = press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.query.order_by(), ListColumn::Id);
        assert_eq!(app.query.order(), SortOrder::Desc);
        assert_eq!(app.highlighted_id(), Some(ShipmentId::new("S1002")));

        let _ = press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.query.order_by(), ListColumn::Status);
        assert_eq!(app.query.order(), SortOrder::Asc);
    }

    #[test]
    fn enter_opens_detail_of_highlighted_row() {
        let mut app = app_with(3, false);
        let _ = press(&mut app, KeyCode::Down);
        let _ = press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_view, View::Detail);
        assert_eq!(
            app.selected_shipment().map(|s| s.id.as_str()),
            Some("S1001")
        );
    }

    #[test]
    fn enter_on_empty_list_stays_on_list() {
        let mut app = app_with(0, false);
        let _ = press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_view, View::List);
    }

    #[test]
    fn edit_flow_renames_selected_shipment() {
        let mut app = app_with(3, false);
        let _ = press(&mut app, KeyCode::Enter);
        let _ = press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode, InputMode::EditName);
        assert_eq!(app.draft_name, "shipment 0");

        for _ in 0.."shipment 0".len() {
            let _ = press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Summer T-shirts");
        let action = press(&mut app, KeyCode::Enter);

        assert_eq!(action, None);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(
            app.selected_shipment().map(|s| s.name.as_str()),
            Some("Summer T-shirts")
        );
        assert_eq!(app.store.list_items()[0].name, "Summer T-shirts");
        assert_eq!(app.status.as_deref(), Some("renamed S1000"));
    }

    #[test]
    fn edit_commit_with_persistence_returns_action() {
        let mut app = app_with(1, true);
        let _ = press(&mut app, KeyCode::Enter);
        let _ = press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "!");
        let action = press(&mut app, KeyCode::Enter);
        assert_eq!(
            action,
            Some(Action::PersistName {
                id: ShipmentId::new("S1000"),
                name: "shipment 0!".into(),
            })
        );
    }

    #[test]
    fn escape_in_edit_mode_discards_draft() {
        let mut app = app_with(1, false);
        let _ = press(&mut app, KeyCode::Enter);
        let _ = press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "xyz");
        let _ = press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.current_view, View::Detail);
        assert_eq!(
            app.selected_shipment().map(|s| s.name.as_str()),
            Some("shipment 0")
        );
    }

    #[test]
    fn going_home_keeps_list_query() {
        let mut app = app_with(45, false);
        let _ = press(&mut app, KeyCode::Char('2'));
        let _ = press(&mut app, KeyCode::Right);
        let _ = press(&mut app, KeyCode::Enter);
        let _ = press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_view, View::List);
        assert!(app.running);
        assert_eq!(app.query.order_by(), ListColumn::Name);
        assert_eq!(app.query.page(), 1);
    }

    #[test]
    fn refresh_key_requests_refetch() {
        let mut app = app_with(1, false);
        assert_eq!(press(&mut app, KeyCode::Char('r')), Some(Action::Refresh));
    }

    #[test]
    fn load_returns_home_when_selection_vanishes() {
        let mut app = app_with(3, false);
        let _ = press(&mut app, KeyCode::Enter);
        app.load(vec![shipment("S2000", "other")]);
        assert_eq!(app.current_view, View::List);
        assert!(app.selected_shipment().is_none());
    }

    #[test]
    fn load_clamps_cursor_to_new_rows() {
        let mut app = app_with(5, false);
        for _ in 0..4 {
            let _ = press(&mut app, KeyCode::Down);
        }
        app.load(vec![shipment("S1", "a"), shipment("S2", "b")]);
        assert_eq!(app.selected_index, 1);
    }
}
