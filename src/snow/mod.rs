/// Snow Clicker: click for snowflakes, buy auto-snow and multipliers.

pub mod actions;
pub mod export;
pub mod logic;
pub mod particles;
pub mod render;
pub mod save;
pub mod state;

#[cfg(test)]
mod simulator;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::config::GameConfig;
use crate::host::HostBridge;
use crate::input::{ClickState, InputEvent};
use crate::storage::KeyValueStore;
use crate::time::Interval;

use export::ExportOutcome;
use particles::SnowField;
use state::SnowState;

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient message shown under the upgrades.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub ticks_left: u32,
}

/// Owns the game state and sequences every event as
/// mutate → persist → particles; the next frame renders the result.
pub struct SnowGame {
    pub state: SnowState,
    pub field: SnowField,
    pub notice: Option<Notice>,
    /// Ticks of "pressed" highlight left on the snow globe.
    pub click_flash: u32,
    /// Incremented every tick; drives idle animation.
    pub anim_frame: u32,
    config: GameConfig,
    store: Box<dyn KeyValueStore>,
    host: Option<Box<dyn HostBridge>>,
    income: Interval,
}

impl SnowGame {
    /// Build the game and overlay whatever is saved in `store`.
    pub fn new(
        config: GameConfig,
        store: Box<dyn KeyValueStore>,
        host: Option<Box<dyn HostBridge>>,
        seed: u32,
    ) -> Self {
        let mut state = SnowState::new();
        match save::load_game(&mut state, store.as_ref(), &config.storage_key) {
            Ok(true) => log::info!(
                "restored save: {} snowflakes, auto-snow {}, x{}",
                state.snowflakes,
                state.auto_snow,
                state.multiplier
            ),
            Ok(false) => log::info!("no save under {:?}, starting fresh", config.storage_key),
            Err(e) => log::error!("{e}; starting with a fresh game"),
        }

        Self {
            state,
            field: SnowField::new(config.ticks_per_sec, seed),
            notice: None,
            click_flash: 0,
            anim_frame: 0,
            income: Interval::new(config.income_interval_ticks()),
            config,
            store,
            host,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => match *c {
                'c' | ' ' => self.click(),
                '1' => {
                    self.buy_auto_snow();
                }
                '2' => {
                    self.buy_multiplier();
                }
                's' => self.export(),
                _ => return false,
            },
            InputEvent::Click(id) => match *id {
                actions::CLICK_SNOW => self.click(),
                actions::BUY_AUTO_SNOW => {
                    self.buy_auto_snow();
                }
                actions::BUY_MULTIPLIER => {
                    self.buy_multiplier();
                }
                actions::EXPORT_TO_HOST => self.export(),
                actions::DISMISS_NOTICE => self.notice = None,
                _ => return false,
            },
        }
        true
    }

    pub fn click(&mut self) {
        logic::click(&mut self.state);
        self.click_flash = 2;
        self.field.spawn();
        self.persist();
    }

    pub fn buy_auto_snow(&mut self) -> bool {
        if !logic::buy_auto_snow(&mut self.state) {
            return false;
        }
        log::debug!(
            "bought auto-snow level {}, next costs {}",
            self.state.auto_snow,
            self.state.auto_snow_cost
        );
        self.persist();
        true
    }

    pub fn buy_multiplier(&mut self) -> bool {
        if !logic::buy_multiplier(&mut self.state) {
            return false;
        }
        log::debug!(
            "bought multiplier x{}, next costs {}",
            self.state.multiplier,
            self.state.multiplier_cost
        );
        self.persist();
        true
    }

    /// Passive income. Does nothing at all while no auto-snow is owned.
    pub fn passive_tick(&mut self) {
        if logic::passive_income(&mut self.state).is_none() {
            return;
        }
        self.persist();
        self.field.spawn_burst(self.config.stagger_ticks());
    }

    pub fn export(&mut self) {
        let host = self.host.as_deref();
        let (text, kind) = match export::export_state(&self.state, host) {
            Ok(ExportOutcome::Sent) => {
                log::info!("exported {} snowflakes to host", self.state.snowflakes);
                ("💾 Progress saved and sent to Telegram!".to_string(), NoticeKind::Success)
            }
            Ok(ExportOutcome::Unavailable) => {
                log::info!("export requested outside a Telegram Mini App");
                (
                    "ℹ This only works inside a Telegram Mini App".to_string(),
                    NoticeKind::Info,
                )
            }
            Err(e) => {
                log::error!("export failed: {e}");
                (format!("Export failed: {e}"), NoticeKind::Error)
            }
        };
        self.notice = Some(Notice {
            text,
            kind,
            ticks_left: self.config.notice_ticks(),
        });
    }

    /// Advance particles, notices and the income interval by `delta_ticks`.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        self.anim_frame = self.anim_frame.wrapping_add(delta_ticks);
        self.click_flash = self.click_flash.saturating_sub(delta_ticks);
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(delta_ticks);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }

        self.field.tick(delta_ticks);
        for _ in 0..self.income.advance(delta_ticks) {
            self.passive_tick();
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }

    fn persist(&mut self) {
        if let Err(e) = save::save_game(&self.state, self.store.as_mut(), &self.config.storage_key) {
            log::warn!("failed to save progress: {e}");
        }
    }
}
