mod games;
mod ui;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use games::flappy::{self, FlappyGame};
use games::tetris::{self, TetrisGame, TetrisInput};
use games::ActiveGame;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::menu_scene::{self, MENU_ENTRIES};

enum Screen {
    Menu,
    Playing(ActiveGame),
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("arcade {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Arcade - Terminal Minigames\n");
                println!("Usage: arcade\n");
                println!("Games:");
                for (name, description) in MENU_ENTRIES {
                    println!("  {:<15} {}", name, description);
                }
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut selected: usize = 0;
    let mut screen = Screen::Menu;

    // Main loop
    loop {
        match screen {
            Screen::Menu => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    menu_scene::render_menu(frame, area, selected);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Up => {
                                selected = selected.saturating_sub(1);
                            }
                            KeyCode::Down => {
                                if selected + 1 < MENU_ENTRIES.len() {
                                    selected += 1;
                                }
                            }
                            KeyCode::Enter => {
                                screen = if selected == 0 {
                                    Screen::Playing(ActiveGame::Tetris(TetrisGame::new(&mut rng)))
                                } else {
                                    Screen::Playing(ActiveGame::Flappy(FlappyGame::new()))
                                };
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') => break,
                            _ => {}
                        }
                    }
                }
            }

            Screen::Playing(ActiveGame::Tetris(ref mut game)) => {
                // Gravity runs on its own timer; input is handled between ticks.
                let mut last_fall = Instant::now();
                loop {
                    terminal.draw(|frame| {
                        let area = frame.size();
                        ui::tetris_scene::render_tetris(frame, area, game);
                    })?;

                    if game.game_over {
                        // Any key dismisses the game-over overlay.
                        if event::poll(Duration::from_millis(50))? {
                            if let Event::Key(_) = event::read()? {
                                break;
                            }
                        }
                        continue;
                    }

                    if event::poll(Duration::from_millis(50))? {
                        if let Event::Key(key_event) = event::read()? {
                            match key_event.code {
                                KeyCode::Left => {
                                    tetris::process_input(game, TetrisInput::Left, &mut rng);
                                }
                                KeyCode::Right => {
                                    tetris::process_input(game, TetrisInput::Right, &mut rng);
                                }
                                KeyCode::Down => {
                                    tetris::process_input(game, TetrisInput::Down, &mut rng);
                                }
                                KeyCode::Up => {
                                    tetris::process_input(game, TetrisInput::Rotate, &mut rng);
                                }
                                KeyCode::Esc => break,
                                _ => {}
                            }
                        }
                    }

                    if last_fall.elapsed() >= Duration::from_millis(tetris::GRAVITY_INTERVAL_MS) {
                        tetris::process_tick(game, &mut rng);
                        last_fall = Instant::now();
                    }
                }
                screen = Screen::Menu;
            }

            Screen::Playing(ActiveGame::Flappy(ref mut game)) => {
                let mut last_tick = Instant::now();
                loop {
                    terminal.draw(|frame| {
                        let area = frame.size();
                        ui::flappy_scene::render_flappy(frame, area, game);
                    })?;

                    if event::poll(Duration::from_millis(10))? {
                        if let Event::Key(key_event) = event::read()? {
                            match key_event.code {
                                KeyCode::Char(' ') => flappy::flap(game),
                                KeyCode::Esc => break,
                                _ => {}
                            }
                        }
                    }

                    if last_tick.elapsed() >= Duration::from_millis(flappy::TICK_INTERVAL_MS) {
                        flappy::process_tick(game, &mut rng);
                        last_tick = Instant::now();
                    }
                }
                screen = Screen::Menu;
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
