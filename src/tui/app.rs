use crate::api::{SuggestClient, Suggestion};
use crate::logging;
use crate::tui::menu::{hit, ProfileMenu};
use crate::tui::results::ResultsPanel;
use crate::tui::search::SearchBox;
use crate::tui::ui;
use crate::ClientConfig;
use arboard::Clipboard;
use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Notice rendered in the results panel when a fetch fails
pub const LOAD_ERROR_NOTICE: &str = "Couldn't load suggestions";

/// A suggestion request handed to the background worker
pub struct FetchRequest {
    pub seq: u64,
    pub query: String,
}

/// Messages from the background worker
pub enum BgMessage {
    FetchDone {
        seq: u64,
        query: String,
        result: crate::Result<Vec<Suggestion>>,
    },
}

/// Screen rectangles recorded at draw time, used to route mouse events.
/// Hidden widgets leave their rect zero-sized and never receive clicks.
#[derive(Default)]
pub struct HitAreas {
    pub trigger: Rect,
    pub menu: Rect,
    pub search: Rect,
    pub results: Rect,
}

/// Run the fetch worker on its own thread. The worker drains its queue to
/// the newest request before fetching, so keystrokes that were superseded
/// while a fetch was running never hit the network. It exits when the
/// request channel is dropped.
fn spawn_fetch_worker(
    client: SuggestClient,
    requests: Receiver<FetchRequest>,
    messages: Sender<BgMessage>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(mut request) = requests.recv() {
            while let Ok(newer) = requests.try_recv() {
                request = newer;
            }

            let started = Instant::now();
            let result = client.fetch_suggestions(&request.query);

            match &result {
                Ok(suggestions) => logging::log_fetch_response(
                    request.seq,
                    suggestions.len(),
                    started.elapsed().as_millis(),
                ),
                Err(e) => logging::log_fetch_error(request.seq, &e.to_string()),
            }

            let done = BgMessage::FetchDone {
                seq: request.seq,
                query: request.query,
                result,
            };
            if messages.send(done).is_err() {
                break;
            }
        }
    })
}

pub struct App {
    pub config: ClientConfig,

    // Widgets
    pub search: SearchBox,
    pub results: ResultsPanel,
    pub menu: ProfileMenu,
    pub hit: HitAreas,

    // Request lifecycle
    latest_seq: u64,
    pub in_flight: Option<u64>,

    // Channel to/from the fetch worker
    req_tx: Option<Sender<FetchRequest>>,
    bg_rx: Receiver<BgMessage>,
    worker: Option<JoinHandle<()>>,

    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: ClientConfig) -> crate::Result<Self> {
        let client = SuggestClient::new(&config.server, config.request_timeout)?;
        let (req_tx, req_rx) = unbounded();
        let (msg_tx, msg_rx) = unbounded();
        let worker = spawn_fetch_worker(client, req_rx, msg_tx);

        Ok(Self::from_parts(config, req_tx, msg_rx, Some(worker)))
    }

    fn from_parts(
        config: ClientConfig,
        req_tx: Sender<FetchRequest>,
        bg_rx: Receiver<BgMessage>,
        worker: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            config,
            search: SearchBox::new(),
            results: ResultsPanel::new(),
            menu: ProfileMenu::new(),
            hit: HitAreas::default(),
            latest_seq: 0,
            in_flight: None,
            req_tx: Some(req_tx),
            bg_rx,
            worker,
            status_message: "Ready".to_string(),
            should_quit: false,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> crate::Result<()>
    where
        crate::error::MarqueeError: From<B::Error>,
    {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) => self.handle_key(key),
                    Ok(Event::Mouse(mouse)) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                self.check_debounce(Instant::now());
                last_tick = Instant::now();
            }

            if self.should_quit {
                self.shutdown();
                return Ok(());
            }
        }
    }

    // --- Request lifecycle ---

    /// Called after every edit of the query text. Sub-threshold queries
    /// clear the panel immediately and never reach the network.
    fn on_query_edited(&mut self, now: Instant) {
        let len = self.search.query.trim().chars().count();
        if len < self.config.min_query_len {
            self.search.clear_pending();
            self.results.clear();
            self.abandon_in_flight();
        } else {
            self.search.mark_dirty(now);
        }
    }

    /// A reply for an abandoned query must not resurface the panel
    fn abandon_in_flight(&mut self) {
        if self.in_flight.is_some() {
            self.latest_seq += 1;
            self.in_flight = None;
        }
    }

    /// Dispatch a fetch once the quiet period has elapsed.
    fn check_debounce(&mut self, now: Instant) {
        if let Some(query) = self.search.take_due_query(self.config.debounce, now) {
            if query.chars().count() >= self.config.min_query_len {
                self.dispatch_fetch(query);
            }
        }
    }

    fn dispatch_fetch(&mut self, query: String) {
        self.latest_seq += 1;
        self.in_flight = Some(self.latest_seq);
        logging::log_fetch_dispatch(self.latest_seq, &query);
        self.status_message = format!("Searching for '{}'...", query);

        if let Some(tx) = &self.req_tx {
            let _ = tx.send(FetchRequest {
                seq: self.latest_seq,
                query,
            });
        }
    }

    fn process_messages(&mut self) {
        while let Ok(message) = self.bg_rx.try_recv() {
            match message {
                BgMessage::FetchDone { seq, query, result } => {
                    // Only the newest request may touch the panel
                    if seq != self.latest_seq {
                        logging::log_stale_drop(seq, self.latest_seq);
                        continue;
                    }
                    self.in_flight = None;

                    match result {
                        Ok(suggestions) if suggestions.is_empty() => {
                            self.results.clear();
                            self.status_message = format!("No matches for '{}'", query);
                        }
                        Ok(suggestions) => {
                            self.status_message = format!(
                                "{} matches for '{}' at {}",
                                suggestions.len(),
                                query,
                                Local::now().format("%H:%M:%S")
                            );
                            self.results.show(suggestions);
                        }
                        Err(_) => {
                            self.results.set_notice(LOAD_ERROR_NOTICE);
                            self.status_message = format!("Search failed for '{}'", query);
                        }
                    }
                }
            }
        }
    }

    fn shutdown(&mut self) {
        // Dropping the request channel ends the worker loop
        self.req_tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        logging::flush();
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.menu.open {
                    self.close_menu();
                } else if self.results.is_visible() {
                    self.results.hide();
                } else if !self.search.query.is_empty() {
                    self.search.clear();
                    self.results.clear();
                    self.abandon_in_flight();
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::F(10) => {
                self.toggle_menu();
                return;
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_menu();
                return;
            }
            _ => {}
        }

        if self.menu.open {
            self.handle_menu_key(key);
        } else {
            self.handle_search_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.copy_selected_link();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.insert_char(c);
                self.on_query_edited(Instant::now());
            }
            KeyCode::Backspace => {
                if self.search.backspace() {
                    self.on_query_edited(Instant::now());
                }
            }
            KeyCode::Delete => {
                if self.search.delete_forward() {
                    self.on_query_edited(Instant::now());
                }
            }
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(),
            KeyCode::Up => {
                if self.results.is_visible() {
                    self.results.select_prev();
                }
            }
            KeyCode::Down => {
                if self.results.is_visible() {
                    self.results.select_next();
                }
            }
            KeyCode::Enter => {
                if self.results.selected_suggestion().is_some() {
                    self.activate_selected();
                } else {
                    // Enter skips the quiet period
                    let query = self.search.take_query_now();
                    if query.chars().count() >= self.config.min_query_len {
                        self.dispatch_fetch(query);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.menu.move_up(),
            KeyCode::Down => self.menu.move_down(),
            KeyCode::Enter => self.activate_menu_item(),
            _ => {}
        }
    }

    // --- Mouse handling ---

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => {
                if !self.menu.open && self.results.is_visible() {
                    self.results.select_next();
                }
            }
            MouseEventKind::ScrollUp => {
                if !self.menu.open && self.results.is_visible() {
                    self.results.select_prev();
                }
            }
            _ => {}
        }
    }

    /// Route a click to exactly one handler. The click that opens the menu
    /// is consumed by the trigger arm and can never be re-read as an
    /// outside click in the same pass.
    fn handle_click(&mut self, column: u16, row: u16) {
        if hit(self.hit.trigger, column, row) {
            self.toggle_menu();
            return;
        }

        if self.menu.open {
            if hit(self.hit.menu, column, row) {
                let inner_top = self.hit.menu.y + 1;
                if row >= inner_top {
                    let index = (row - inner_top) as usize;
                    if index < self.menu.items.len() {
                        self.menu.selected = index;
                        self.activate_menu_item();
                    }
                }
            } else {
                self.close_menu();
            }
            return;
        }

        if hit(self.hit.search, column, row) {
            self.search.focused = true;
            if self.search.query.trim().chars().count() >= self.config.min_query_len {
                self.results.reshow();
            }
            return;
        }

        if self.results.is_visible() && hit(self.hit.results, column, row) {
            let inner_top = self.hit.results.y + 1;
            if self.results.notice().is_none() && row >= inner_top {
                let index = self.results.scroll_offset + (row - inner_top) as usize;
                if self.results.select_index(index) {
                    self.activate_selected();
                }
            }
            return;
        }

        // Outside every component: dismiss the suggestions
        self.results.hide();
    }

    // --- Menu state ---

    fn toggle_menu(&mut self) {
        if self.menu.open {
            self.close_menu();
        } else {
            self.menu.toggle();
            self.search.focused = false;
            self.results.hide();
        }
    }

    fn close_menu(&mut self) {
        self.menu.close();
        self.search.focused = true;
        // Refocusing re-shows retained suggestions for a still-valid query
        if self.search.query.trim().chars().count() >= self.config.min_query_len {
            self.results.reshow();
        }
    }

    // --- Actions ---

    fn activate_selected(&mut self) {
        let Some(suggestion) = self.results.selected_suggestion() else {
            return;
        };
        let title = suggestion.title.clone();
        let target = suggestion.url.clone();

        match self.config.server.join(&target) {
            Ok(url) => {
                if open::that(url.as_str()).is_ok() {
                    self.status_message = format!("Opening '{}'", title);
                    logging::info("NAV", &format!("Opened {}", url));
                } else {
                    self.status_message = format!("Couldn't open '{}'", title);
                    logging::warn("NAV", &format!("Failed to open {}", url));
                }
            }
            Err(e) => {
                self.status_message = "Couldn't resolve suggestion link".to_string();
                logging::warn("NAV", &format!("Bad suggestion url '{}': {}", target, e));
            }
        }
    }

    fn copy_selected_link(&mut self) {
        let Some(suggestion) = self.results.selected_suggestion() else {
            return;
        };
        let link = match self.config.server.join(&suggestion.url) {
            Ok(url) => url.to_string(),
            Err(_) => suggestion.url.clone(),
        };

        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(link)) {
            Ok(()) => self.status_message = "Link copied".to_string(),
            Err(e) => {
                self.status_message = "Clipboard unavailable".to_string();
                logging::warn("CLIP", &e.to_string());
            }
        }
    }

    fn activate_menu_item(&mut self) {
        let action = self.menu.selected_action();
        match self.config.server.join(action.path()) {
            Ok(url) => {
                if open::that(url.as_str()).is_ok() {
                    self.status_message = format!("Opening {}", action.label());
                    logging::info("NAV", &format!("Opened {}", url));
                } else {
                    self.status_message = format!("Couldn't open {}", action.label());
                }
            }
            Err(_) => {
                self.status_message = format!("Couldn't resolve {} page", action.label());
            }
        }
        self.close_menu();
    }
}
