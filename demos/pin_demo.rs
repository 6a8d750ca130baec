//! PIN Demo: a six-digit PIN pad in the terminal.
//!
//! Demonstrates:
//! - Routing crossterm events into the widget
//! - Draining blink ticks on the owner thread
//! - Listening for change/complete/confirm over a channel
//! - Painting through `TerminalSurface`
//!
//! Type digits, Backspace to delete, Enter to confirm, Esc to quit. Any
//! other key is passed through and named in the status line. Click the
//! cells to focus them. Logs go to `pin_demo.log`.

use crossbeam_channel::unbounded;
use crossterm::{
    cursor::{self, MoveTo},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use pinpad::{
    input::convert_event, Dp, InputEvent, KeyCode, PinEvent, PinInput, PinInputConfig, Rect, Rgb,
    SoftKeyboard, TerminalSurface, Widget,
};
use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Terminals have no soft keyboard; report the requests in the log.
struct LoggedKeyboard;

impl SoftKeyboard for LoggedKeyboard {
    fn show_numeric(&mut self) {
        tracing::info!("numeric keyboard requested");
    }

    fn hide(&mut self) {
        tracing::info!("keyboard dismissed");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log = File::create("pin_demo.log")?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(log))
        .init();

    let mut config = PinInputConfig::default()
        .with_cell_padding(Dp(1.0))
        .with_default_cell_size(Dp(5.0))
        .with_border_color(Rgb::new(120, 120, 140))
        .with_cursor_color(Rgb::new(0, 255, 255));
    config.border_width = Dp(0.0);
    config.cursor_width = Dp(1.0);

    let mut pin = PinInput::new(config)?;
    let (events_tx, events_rx) = unbounded();
    pin.set_listener(events_tx);
    pin.set_soft_keyboard(LoggedKeyboard);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = run(&mut pin, &events_rx, &mut stdout);

    pin.detach();
    execute!(stdout, DisableMouseCapture, LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    pin: &mut PinInput,
    events_rx: &crossbeam_channel::Receiver<PinEvent>,
    stdout: &mut io::Stdout,
) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = pin.measure(pinpad::MeasureSpec::Unspecified);
    pin.set_bounds(Rect::new(2, 2, width, height));
    pin.attach()?;
    pin.request_focus();

    let area = Rect::new(2, 2, width + 1, height + 1);
    let mut surface = TerminalSurface::new(area);
    let mut frame: Vec<u8> = Vec::with_capacity(1024);
    let mut status = String::from("Enter your PIN (Esc to quit)");
    let mut status_dirty = true;

    loop {
        if event::poll(Duration::from_millis(20))? {
            if let Some(input) = convert_event(event::read()?) {
                if input == InputEvent::key(KeyCode::Esc) {
                    break;
                }
                if !pin.handle_input(&input) {
                    if let InputEvent::Key { code, .. } = input {
                        status = format!("passed through: {code:?}");
                        status_dirty = true;
                    }
                }
            }
        }

        for event in events_rx.try_iter() {
            status = match event {
                PinEvent::Changed {
                    text,
                    is_deletion: true,
                } => format!("removed {text}"),
                PinEvent::Changed { .. } => String::from("digit entered"),
                PinEvent::Completed => String::from("complete, press Enter"),
                PinEvent::ConfirmPressed {
                    full_text,
                    is_complete: true,
                } => format!("confirmed {}", full_text.unwrap_or_default()),
                PinEvent::ConfirmPressed { .. } => String::from("PIN is incomplete"),
            };
            status_dirty = true;
        }

        pin.pump_blink();
        if pin.needs_redraw() || status_dirty {
            surface.clear();
            pin.render(&mut surface);
            frame.clear();
            surface.render_to(&mut frame)?;
            let status_row = u16::try_from(area.bottom() + 1)?;
            queue!(
                frame,
                MoveTo(2, status_row),
                Clear(ClearType::UntilNewLine),
                Print(&status)
            )?;
            stdout.write_all(&frame)?;
            stdout.flush()?;
            pin.clear_redraw();
            status_dirty = false;
        }
    }
    Ok(())
}
