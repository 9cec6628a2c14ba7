use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use chipin::config::{self, Config};
use chipin::theme::ChipFill;
use chipin::word_list::WordList;
use chipin::{ChipInput, ChipTheme, Mounts};

const MOUNT_POINT: &str = "#tags";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Chip input with fuzzy autocomplete in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Enable the autocomplete dropdown (overrides the config file)
    #[arg(short, long)]
    autocomplete: bool,

    /// Suggestion source: JSON array of {"label": ...} or one word per line
    #[arg(short, long, value_name = "FILE")]
    suggestions: Option<PathBuf>,

    /// Config file (defaults to <config dir>/chipin/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the selection as JSON instead of comma separated labels
    #[arg(long)]
    json: bool,

    /// Validate the config, print the resolved chip style and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    if args.check_config {
        return check_config(args.config.as_deref());
    }

    let loaded = config::load_config(args.config.as_deref());
    let mut config = loaded.config;
    if args.autocomplete {
        config.autocomplete.enabled = true;
    }
    let words = match &args.suggestions {
        Some(path) => WordList::load(path)?,
        None => WordList::builtin(),
    };

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, &config, &words, loaded.warning);

    // Restore terminal (automatic cleanup)
    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    let chip_input = result?;
    if args.json {
        println!("{}", serde_json::to_string(&chip_input.selections())?);
    } else {
        println!("{}", chip_input.selections_as_delimited_string());
    }
    Ok(())
}

#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("chipin.log");
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}

fn check_config(path: Option<&std::path::Path>) -> Result<()> {
    let config = match path {
        Some(path) => config::read_config(path)?,
        None => config::load_config(None).config,
    };
    let theme = ChipTheme::from_options(&config.style)?;
    println!("{}", describe(&config, &theme));
    Ok(())
}

fn describe(config: &Config, theme: &ChipTheme) -> String {
    let fill = match theme.fill {
        ChipFill::Filled { background } => format!("filled background={}", background),
        ChipFill::Outlined {
            outline,
            style,
            width,
        } => format!("outlined outline={} style={:?} width={}", outline, style, width),
    };
    format!(
        "autocomplete={} color={} {} radius={}",
        config.autocomplete.enabled, theme.color, fill, theme.radius
    )
}

fn mount_area(screen: Rect) -> Rect {
    Rect {
        x: 2,
        y: 2,
        width: screen.width.saturating_sub(4),
        height: screen.height.saturating_sub(5).min(8),
    }
}

fn run(
    mut terminal: DefaultTerminal,
    config: &Config,
    words: &WordList,
    warning: Option<String>,
) -> Result<ChipInput> {
    let screen: Rect = (Position::ORIGIN, terminal.size()?).into();
    let mut mounts = Mounts::new();
    mounts.insert(MOUNT_POINT, mount_area(screen));

    let mut chip_input = ChipInput::from_config(MOUNT_POINT, &mounts, config)
        .map_err(|e| eyre!("cannot mount chip input: {}", e))?;

    // The filter callback cannot borrow the component, so queries are queued
    // and answered on the next loop iteration
    let (query_tx, query_rx) = mpsc::channel::<String>();
    chip_input.on_input_changed(move |event| {
        let _ = query_tx.send(event.value.clone());
    });

    loop {
        if let Some(query) = query_rx.try_iter().last() {
            chip_input.set_suggestions(words.filter(&query));
        }

        terminal.draw(|frame| {
            let area = frame.area();
            let header = Line::from(vec![
                Span::styled(" chipin ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(if chip_input.is_autocomplete_enabled() {
                    "  autocomplete on"
                } else {
                    "  autocomplete off"
                }),
            ]);
            frame.render_widget(Paragraph::new(header), Rect { height: 1, ..area });

            let footer = match &warning {
                Some(w) => Span::styled(format!(" config ignored: {}", w), Style::default().fg(Color::Yellow)),
                None => Span::styled(
                    " Enter: add  Tab/↑↓: suggestions  click chip: remove  type or click field: focus  Ctrl+A: autocomplete  Esc: done",
                    Style::default().fg(Color::DarkGray),
                ),
            };
            frame.render_widget(
                Paragraph::new(Line::from(footer)),
                Rect {
                    y: area.bottom().saturating_sub(1),
                    height: 1,
                    ..area
                },
            );

            chip_input.render(frame);
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('c') => break,
                        KeyCode::Char('a') => {
                            let enabled = !chip_input.is_autocomplete_enabled();
                            chip_input.enable_autocomplete(enabled);
                            continue;
                        }
                        _ => {}
                    }
                }
                refocus_on_typing(&mut chip_input, key);
                if !chip_input.handle_key(key) && key.code == KeyCode::Esc {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                chip_input.handle_mouse(mouse);
            }
            Event::Resize(width, height) => {
                let area = mount_area(Rect::new(0, 0, width, height));
                if let Err(e) = chip_input.set_container_area(area) {
                    log::warn!("Keeping previous container: {}", e);
                }
            }
            _ => {}
        }
    }

    Ok(chip_input)
}

/// Typing into an unfocused component focuses it first
fn refocus_on_typing(chip_input: &mut ChipInput, key: KeyEvent) {
    let printable = matches!(key.code, KeyCode::Char(_))
        && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    if printable && !chip_input.is_focused() {
        chip_input.set_focused(true);
    }
}
