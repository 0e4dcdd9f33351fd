use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::format::render_report;
use crate::health::collector::SystemCollector;
use crate::health::snapshot::HealthSnapshot;
use crate::ui::theme::{Theme, resolve_color_support};

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub refresh: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
        }
    }

    pub fn quit_label(&self) -> String {
        key_label(self.quit)
    }

    pub fn refresh_label(&self) -> String {
        key_label(self.refresh)
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        _ => "?".to_string(),
    }
}

pub struct App {
    pub running: bool,
    pub snapshot: HealthSnapshot,
    pub report: String,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
    collector: SystemCollector,
}

impl App {
    /// Builds the real collector and takes the initial snapshot, the one
    /// the dialog opens with.
    pub fn new(config: Config) -> Self {
        let support = resolve_color_support(&config.general.color_support);
        let theme = Theme::from_config(&config.colors, support);
        let keybinds = ResolvedKeybinds::from_config(&config.keybinds);

        let mut collector = SystemCollector::system();
        let snapshot = collector.collect();
        let report = render_report(&snapshot);

        Self {
            running: true,
            snapshot,
            report,
            theme,
            keybinds,
            collector,
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match key.code {
            KeyCode::Esc => Action::Quit,
            code if code == self.keybinds.quit => Action::Quit,
            code if code == self.keybinds.refresh => Action::Refresh,
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Refresh => self.refresh_data(),
            Action::None => {}
        }
    }

    pub fn refresh_data(&mut self) {
        self.snapshot = self.collector.collect();
        self.report = render_report(&self.snapshot);
    }

    /// Gauge ratio for the CPU progress indicator; 0 when unavailable.
    pub fn cpu_ratio(&self) -> f64 {
        self.snapshot
            .cpu_load_percent
            .map(|p| (p / 100.0).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }
}
