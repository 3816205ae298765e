mod config;
mod error;
mod host;
mod input;
mod logging;
mod snow;
mod storage;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use config::GameConfig;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use snow::SnowGame;
use time::GameClock;

/// Convert viewport pixel coordinates to a terminal cell using the grid
/// container's bounding rect.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let document = web_sys::window()?.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    log::trace!("click at ({mouse_x}, {mouse_y}) -> cell ({col}, {row})");
    Some((col, row))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> GameConfig {
    GameConfig::from_document()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> GameConfig {
    GameConfig::default()
}

#[cfg(target_arch = "wasm32")]
fn create_game(config: GameConfig) -> SnowGame {
    use host::{HostBridge, TelegramWebApp};
    use storage::{KeyValueStore, LocalStorage, MemoryStore};

    let store: Box<dyn KeyValueStore> = match LocalStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("localStorage is unavailable; progress will not survive a reload");
            Box::new(MemoryStore::new())
        }
    };
    let host = TelegramWebApp::detect().map(|h| Box::new(h) as Box<dyn HostBridge>);
    log::debug!("telegram host detected: {}", host.is_some());

    let seed = js_sys::Date::now() as u64 as u32;
    SnowGame::new(config, store, host, seed)
}

#[cfg(not(target_arch = "wasm32"))]
fn create_game(config: GameConfig) -> SnowGame {
    SnowGame::new(config, Box::new(storage::MemoryStore::new()), None, 1)
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let config = load_config();
    logging::setup_logging(config.level_filter());
    log::info!("snow clicker {} starting", env!("CARGO_PKG_VERSION"));

    let clock = Rc::new(RefCell::new(GameClock::new(config.ticks_per_sec)));
    let game = Rc::new(RefCell::new(create_game(config)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let action = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = action {
                game.borrow_mut()
                    .handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c.to_ascii_lowercase()),
                KeyCode::Esc => InputEvent::Click(snow::actions::DISMISS_NOTICE),
                _ => return,
            };
            game.borrow_mut().handle_input(&event);
        }
    });

    terminal.draw_web(move |f| {
        let ticks = clock.borrow_mut().update(now_ms());
        game.borrow_mut().tick(ticks);

        let size = f.area();
        {
            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = size.width;
            cs.terminal_rows = size.height;
            cs.clear_targets();
        }

        game.borrow().render(f, size, &click_state);
    });

    Ok(())
}
