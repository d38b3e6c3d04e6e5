//! Main loop: poll input, feed emitters, pump the engine, draw

use std::time::Instant;

use ratatui::DefaultTerminal;
use wordboard_app::{
    build_board_view, pump_events, BoardGeometry, ClickEmitter, Controller, EventName,
    HoverEmitter, InputKey, KeyboardEmitter, Settings, UiComponent,
};
use wordboard_core::prelude::*;
use wordboard_core::BoardModel;

use crate::event::{self, TermInput};
use crate::render;
use crate::terminal;

// room for the title line above the grid
const BOARD_ORIGIN_X: u16 = 1;
const BOARD_ORIGIN_Y: u16 = 2;

/// Run the game until the user quits with ctrl-q or ctrl-c.
pub fn run(settings: &Settings) -> Result<()> {
    settings.validate(BOARD_ORIGIN_X, BOARD_ORIGIN_Y)?;
    terminal::install_panic_hook();
    let mut term = terminal::init().context("entering the alternate screen")?;
    let result = run_loop(&mut term, settings);
    terminal::restore()?;
    result
}

fn run_loop(term: &mut DefaultTerminal, settings: &Settings) -> Result<()> {
    let board = BoardModel::new(settings.board.size);
    let geometry = BoardGeometry::new(
        BOARD_ORIGIN_X,
        BOARD_ORIGIN_Y,
        settings.tiles.width,
        settings.tiles.height,
        settings.board.size,
    );
    let mut view = build_board_view(&board, geometry)?;
    let mut controller = Controller::new(board);

    let mut clicks = ClickEmitter::new();
    let mut keys = KeyboardEmitter::new();
    let mut hover = HoverEmitter::new();
    {
        let registry = view.registry_mut();
        registry.bind_emitter(&mut clicks, EventName::Click);
        registry.bind_emitter(&mut keys, EventName::KeyDown);
        registry.bind_emitter(&mut hover, EventName::MouseEnter);
        registry.bind_emitter(&mut hover, EventName::MouseLeave);
    }

    info!(size = settings.board.size, "board ready");
    let mut last_tick = Instant::now();
    loop {
        match event::poll()? {
            Some(TermInput::Key(InputKey::CharCtrl('q')))
            | Some(TermInput::Key(InputKey::CharCtrl('c'))) => break,
            Some(TermInput::Key(key)) => keys.key_pressed(key),
            Some(TermInput::Click { x, y }) => clicks.pointer_clicked(x, y),
            Some(TermInput::PointerMove { x, y }) => {
                let enter_capable = view.registry().components_for_event(EventName::MouseEnter);
                let leave_capable = view.registry().components_for_event(EventName::MouseLeave);
                hover.pointer_moved(x, y, &enter_capable, &leave_capable, view.store());
            }
            Some(TermInput::PointerGone) => hover.pointer_left(),
            Some(TermInput::Tick) | None => {}
        }

        pump_events(&mut view, &mut controller);

        let delta = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        for component in view.store_mut().components_mut() {
            component.step(delta);
        }

        term.draw(|frame| render::draw(frame, &controller, &view))?;
    }

    info!("exiting");
    Ok(())
}
