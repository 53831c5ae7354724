use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::prelude::*;
use simplelog::{Config, WriteLogger};
use snek_board::app::App;
use snek_board::config::Settings;
use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

const FRAME_RATE: Duration = Duration::from_millis(50);

fn main() -> Result<(), io::Error> {
    let config_path = Settings::config_path();
    let loaded = Settings::load(&config_path);
    let (log_file, level) = match &loaded {
        Ok(settings) => (settings.log_file.clone(), settings.level_filter()),
        Err(_) => {
            let defaults = Settings::default();
            (defaults.log_file.clone(), defaults.level_filter())
        }
    };

    // Set up logging before anything else
    WriteLogger::init(level, Config::default(), File::create(&log_file)?)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    info!("Starting snek-board");
    let settings = Settings::or_default(&config_path, loaded);
    let mut app = App::new(settings).map_err(|e| {
        error!("Cannot start game: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Exiting snek-board");
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut last_frame = Instant::now();

    while !app.should_exit() {
        terminal.draw(|f| app.render(f))?;

        if event::poll(FRAME_RATE)? {
            app.handle_event(event::read()?);
        }

        let now = Instant::now();
        app.update(now - last_frame);
        last_frame = now;
    }
    Ok(())
}
