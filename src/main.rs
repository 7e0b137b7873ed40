mod bridge;
mod catalog;
mod clock;
mod color;
mod config;
mod dom;
mod error;
mod hold;
mod hud;
mod icons;
mod input;
mod logging;
mod message;
mod nav;
mod panels;
mod theme;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::KeyCode;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use bridge::NuiBridge;
use clock::FrameClock;
use config::HudConfig;
use dom::{PageSync, Shared};
use hud::Hud;
use input::InputEvent;

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let config = HudConfig::load(dom::read_config_block().as_deref());
    logging::init(config.level_filter());

    let page_resource = dom::page_resource_name();
    let resource = config.resource(page_resource.as_deref()).to_string();
    tracing::info!(%resource, "interact hud starting");

    let hud: Shared<Hud> = Rc::new(RefCell::new(Hud::new(
        config,
        Box::new(NuiBridge::new(&resource)),
    )));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Host messages
    dom::listen_messages({
        let hud = hud.clone();
        move |message| {
            tracing::debug!(?message, "host message");
            hud.borrow_mut().apply(message);
        }
    });

    // Mouse wheel
    dom::listen_wheel({
        let hud = hud.clone();
        move |delta_y| {
            hud.borrow_mut().handle_wheel(delta_y);
        }
    });

    // Keyboard handler
    let keys = terminal.on_key_event({
        let hud = hud.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Up => InputEvent::KeyUp,
                KeyCode::Down => InputEvent::KeyDown,
                _ => return,
            };
            hud.borrow_mut().handle_input(event);
        }
    });
    if let Err(err) = keys {
        tracing::warn!(?err, "key handler not installed");
    }

    hud.borrow().announce_ready();

    let mut clock = FrameClock::default();
    let mut page = PageSync::default();
    terminal.draw_web(move |f| {
        let now_ms = clock.update(dom::now_ms());
        let mut hud = hud.borrow_mut();
        hud.tick(now_ms);
        page.apply(&hud.page_style());
        hud.render(f);
    });

    Ok(())
}
