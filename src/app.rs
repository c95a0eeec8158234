use crate::config::get_config;
use crate::session::ChatSession;
use crate::status_indicator::StatusIndicator;

/// Visual state of the chat surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Open,
}

impl PanelState {
    /// Always flips; there is no guard against repeated toggles.
    pub fn toggle(self) -> Self {
        match self {
            PanelState::Hidden => PanelState::Open,
            PanelState::Open => PanelState::Hidden,
        }
    }
}

/// User intents, produced by the key mapping and consumed by
/// `App::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePanel,
    Submit,
    Insert(char),
    Backspace,
    ScrollUp,
    ScrollDown,
    Quit,
}

pub struct App {
    pub session: ChatSession,
    pub input: String,
    pub panel: PanelState,
    pub scroll: u16,
    pub bot_name: String,
    pub status_indicator: StatusIndicator,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: ChatSession) -> App {
        let config = get_config();

        App {
            session,
            input: String::new(),
            panel: if config.panel_open_on_start {
                PanelState::Open
            } else {
                PanelState::Hidden
            },
            scroll: u16::MAX,
            bot_name: config.bot_name,
            status_indicator: StatusIndicator::new(),
            should_quit: false,
        }
    }

    /// Single mutation entry point for all user intents.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::TogglePanel => {
                self.panel = self.panel.toggle();
                log::debug!("panel toggled to {:?}", self.panel);
            }
            Action::Submit => {
                let raw = std::mem::take(&mut self.input);
                if self.session.submit(&raw) {
                    self.scroll_to_bottom();
                } else {
                    // Whitespace-only input stays in the field, untouched.
                    self.input = raw;
                }
            }
            Action::Insert(c) => self.input.push(c),
            Action::Backspace => {
                self.input.pop();
            }
            Action::ScrollUp => self.scroll_up(),
            Action::ScrollDown => self.scroll_down(),
            Action::Quit => {
                self.should_quit = true;
                log::debug!("quit requested");
            }
        }
    }

    /// Delivers a bot reply from the channel and follows the tail.
    pub fn on_reply(&mut self, text: String) {
        self.session.push_reply(text);
        self.scroll_to_bottom();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Sentinel offset; the draw pass clamps it to the real maximum so the
    /// newest message is always visible.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = u16::MAX;
    }
}
