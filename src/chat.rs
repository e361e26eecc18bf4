use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Settings handed to the hosted chat widget on initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub bot_id: String,
    pub bot_name: String,
    pub composer_placeholder: String,
    pub conversation_description: String,
    pub host_url: String,
    pub messaging_url: String,
    pub theme: String,
    pub theme_color: String,
    pub use_session_storage: bool,
    pub show_powered_by: bool,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            bot_id: String::new(),
            bot_name: "InsightsBW Assistant".to_string(),
            composer_placeholder: "Chat with us".to_string(),
            conversation_description: "Welcome to InsightsBW AI Assistant".to_string(),
            host_url: "https://cdn.botpress.cloud/webchat/v1".to_string(),
            messaging_url: "https://messaging.botpress.cloud".to_string(),
            theme: "prism".to_string(),
            theme_color: "#EF4444".to_string(),
            use_session_storage: true,
            show_powered_by: false,
        }
    }
}

/// Third-party chat widget with its own global lifecycle.
pub trait ChatWidget {
    fn initialize(&mut self, settings: &WidgetSettings);
    fn teardown(&mut self);
    fn set_open(&mut self, open: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Detached,
    Closed,
    Open,
}

/// Guards a [`ChatWidget`] so it is injected at most once and only driven
/// while attached.
pub struct WidgetSession<W: ChatWidget> {
    widget: W,
    settings: WidgetSettings,
    state: WidgetState,
}

impl<W: ChatWidget> WidgetSession<W> {
    pub fn new(widget: W, settings: WidgetSettings) -> Self {
        Self {
            widget,
            settings,
            state: WidgetState::Detached,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// No-op when already attached.
    pub fn initialize(&mut self) {
        if self.state != WidgetState::Detached {
            debug!("Chat widget already attached - skipping initialize");
            return;
        }
        self.widget.initialize(&self.settings);
        self.state = WidgetState::Closed;
        info!("Chat widget attached - bot={}", self.settings.bot_name);
    }

    /// Flip open/closed; returns `None` while detached.
    pub fn toggle(&mut self) -> Option<bool> {
        let open = match self.state {
            WidgetState::Detached => return None,
            WidgetState::Closed => true,
            WidgetState::Open => false,
        };
        self.widget.set_open(open);
        self.state = if open { WidgetState::Open } else { WidgetState::Closed };
        Some(open)
    }

    pub fn teardown(&mut self) {
        if self.state == WidgetState::Detached {
            return;
        }
        if self.state == WidgetState::Open {
            self.widget.set_open(false);
        }
        self.widget.teardown();
        self.state = WidgetState::Detached;
        info!("Chat widget detached");
    }
}
