use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use skyward::config::{self, Tuning};
use skyward::game::logic::tick_game;
use skyward::game::types::SkywardGame;
use skyward::input::{InputResult, InputState};
use skyward::logging;
use skyward::ui::{self, Viewport};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("skyward {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - a flappy-flight arcade game for the terminal\n");
                println!("Usage: skyward [command]\n");
                println!("Commands:");
                println!("  --write-config  Write the default tuning file and exit");
                println!("  --version       Show version information");
                println!("  --help          Show this help message\n");
                println!("Controls:");
                println!("  Space/Up/Enter or left click   Flap / start / restart");
                println!("  Q / Esc / Ctrl-C               Quit");
                if let Ok(path) = config::config_path() {
                    println!("\nTuning file: {}", path.display());
                }
                std::process::exit(0);
            }
            "--write-config" => {
                let path = config::write_default_config()?;
                println!("Wrote default tuning to {}", path.display());
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let _guard = logging::init()?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting skyward");

    let tuning = config::load_tuning();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, tuning);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// The frame loop: drain input, advance the simulation by wall-clock time,
/// draw, and sleep out the rest of the frame.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, tuning: Tuning) -> io::Result<()> {
    let mut game = SkywardGame::new(tuning);
    let mut input = InputState::new();
    let mut rng = rand::thread_rng();

    let frame_dur = Duration::from_millis(16); // ~60 fps
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Drain pending events without blocking the frame.
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if input.apply(&event) == InputResult::Quit {
                info!(score = game.score, best = game.best, "session ended");
                return Ok(());
            }
        }

        // The viewport is recomputed every frame so clicks keep mapping
        // correctly across terminal resizes.
        let viewport = Viewport::new(ui::layout(terminal.size()?).play);
        let frame_input = input.take_frame(&viewport);

        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        tick_game(&mut game, dt_ms, frame_input, &mut rng);

        terminal.draw(|frame| ui::draw_ui(frame, &game))?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
