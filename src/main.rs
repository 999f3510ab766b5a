use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::game::logic::{advance, process_input, FlappyInput, PHYSICS_TICK_MS};
use flappy::game::types::{FlappyGame, RunState};
use flappy::ui;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "flappy {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy - Terminal Flappy Bird\n");
                println!("Usage: flappy [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls:");
                println!("  Space / click   Flap");
                println!("  R / click       Restart after a crash");
                println!("  Q / Esc         Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal in reverse order, even when the loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    let best_score = result?;
    println!("Thanks for playing! Best score: {}", best_score);

    Ok(())
}

/// Draw/input/tick loop. Returns the session best score on quit.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<u32> {
    let mut game = FlappyGame::new();
    let mut rng = rand::thread_rng();
    let mut best_score: u32 = 0;

    let tick_rate = Duration::from_millis(PHYSICS_TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &game, best_score))?;

        // Wait for input at most until the next tick is due
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char(' ') => process_input(&mut game, FlappyInput::Flap),
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        process_input(&mut game, FlappyInput::Restart)
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        handle_click(&mut game, terminal.size()?, mouse.column, mouse.row);
                    }
                }
                // Resize is picked up by the next draw
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_rate {
            advance(&mut game, elapsed.as_millis() as u64, &mut rng);
            if game.state == RunState::Over && game.score > best_score {
                best_score = game.score;
            }
            last_tick = Instant::now();
        }
    }

    Ok(best_score.max(game.score))
}

/// Route a left click: the restart button while the game-over panel is up,
/// otherwise anywhere on the field flaps. A restart click never also flaps.
fn handle_click(game: &mut FlappyGame, area: Rect, column: u16, row: u16) {
    let layout = ui::screen_layout(area);

    if game.state == RunState::Over
        && ui::contains(ui::restart_button(layout.play_area), column, row)
    {
        process_input(game, FlappyInput::Restart);
    } else if ui::contains(layout.play_area, column, row) {
        process_input(game, FlappyInput::Flap);
    }
}
