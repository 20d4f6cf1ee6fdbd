use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mathbuddy::app::{App, AppScreen, SessionView};
use mathbuddy::config::Config;
use mathbuddy::engine::problem::Operation;
use mathbuddy::event::{AppEvent, EventHandler};
use mathbuddy::session::observer::TerminalBell;
use mathbuddy::session::setup::{SessionSetup, parse_operation, parse_table};
use mathbuddy::ui::components::coach_bubble::CoachBubble;
use mathbuddy::ui::components::fun_message::FunMessage;
use mathbuddy::ui::components::progress_bar::LevelBar;
use mathbuddy::ui::components::question_area::{AnswerBox, QuestionArea};
use mathbuddy::ui::components::summary_panel::SummaryPanel;
use mathbuddy::ui::layout::PlayLayout;
use mathbuddy::ui::line_input::{InputResult, LineInput};
use mathbuddy::ui::mascot::{Bubble, CachedMascot, Cowsay, Mascot};
use mathbuddy::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "mathbuddy", version, about = "Terminal arithmetic trainer with adaptive problem selection")]
struct Cli {
    #[arg(value_parser = parse_operation, help = "Operation to practice (add, sub, mul, div)")]
    operation: Operation,

    #[arg(short, long, help = "Player name (defaults to player_name in config)")]
    name: Option<String>,

    #[arg(short, long, default_value_t = 1, help = "Max digits for add/sub (1-3)")]
    digits: u32,

    #[arg(short, long, default_value = "all", help = "Table for mul/div (1-10 or all)")]
    table: String,

    #[arg(long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Do not ring the bell on level-up")]
    no_sound: bool,

    #[arg(long, help = "Hide the stopwatch")]
    no_stopwatch: bool,

    #[arg(long, help = "Seed for reproducible problem order")]
    seed: Option<u64>,

    #[arg(long, help = "Write a JSON session report to this path")]
    report: Option<PathBuf>,
}

/// Render-side collaborators; none of them feed back into the session.
struct Ui {
    theme: Theme,
    mascot: Box<dyn Mascot>,
    input: LineInput,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = Config::load().unwrap_or_else(|err| {
        warn!(%err, "config unreadable, using defaults");
        Config::default()
    });
    if cli.no_sound {
        config.sound = false;
    }
    if cli.no_stopwatch {
        config.stopwatch = false;
    }
    if let Some(theme) = cli.theme.clone() {
        config.theme = theme;
    }

    let player = cli
        .name
        .clone()
        .or_else(|| config.player_name.clone())
        .unwrap_or_default();
    let param = if cli.operation.uses_tables() {
        parse_table(&cli.table)?
    } else {
        cli.digits
    };
    let setup = SessionSetup::new(&player, cli.operation, param)?;

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut app = App::new(setup, &config, rng, Instant::now())?;
    if config.sound {
        app.attach(Box::new(TerminalBell));
    }

    let mascot: Box<dyn Mascot> = if config.cowsay {
        Box::new(CachedMascot::new(Cowsay))
    } else {
        Box::new(Bubble)
    };
    let mut ui = Ui {
        theme: Theme::load(&config.theme).unwrap_or_default(),
        mascot,
        input: LineInput::new("Your answer", 32),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &mut ui, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!(?err, "session aborted");
        return Err(err);
    }

    let summary = app.summary(Instant::now());
    print!("{summary}");
    if let Some(path) = cli.report {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(&path, json).with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Log to a file under the data dir; the terminal belongs to the UI.
fn init_logging() {
    let Some(dir) = dirs::data_dir().map(|d| d.join("mathbuddy")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::options()
        .create(true)
        .append(true)
        .open(dir.join("mathbuddy.log"))
    else {
        return;
    };
    let filter = EnvFilter::try_from_env("MATHBUDDY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ui: &mut Ui,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|frame| render(frame, app, ui, now))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, ui, key)?,
            AppEvent::Tick | AppEvent::Resize => {}
        }
        app.tick(Instant::now())?;

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, ui: &mut Ui, key: KeyEvent) -> Result<()> {
    let now = Instant::now();
    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if ctrl_c || key.code == KeyCode::Esc {
        app.quit(now);
        return Ok(());
    }

    if app.screen == AppScreen::Playing && ui.input.handle(key) == InputResult::Submit {
        let value = ui.input.value().to_string();
        if !value.trim().is_empty() {
            ui.input.clear();
        }
        app.submit(&value, now)?;
    }
    Ok(())
}

fn render(frame: &mut ratatui::Frame, app: &App, ui: &Ui, now: Instant) {
    let area = frame.area();
    let colors = &ui.theme.colors;
    frame.render_widget(Block::default().style(Style::default().bg(colors.bg())), area);

    let view = app.view(now);
    match view.screen {
        AppScreen::Splash => {
            let message = format!(
                "Welcome, {}!\nLet's practice {} ({})",
                view.player,
                app.setup.operation,
                app.setup.param_label()
            );
            frame.render_widget(FunMessage::new(message, &ui.theme), area);
        }
        AppScreen::Playing => render_playing(frame, &view, ui),
        AppScreen::LevelUp => render_level_up(frame, &view, ui),
        AppScreen::Ended => {
            let summary = app.summary(now);
            frame.render_widget(SummaryPanel::new(&summary, &ui.theme), area);
        }
    }
}

fn render_playing(frame: &mut ratatui::Frame, view: &SessionView, ui: &Ui) {
    let colors = &ui.theme.colors;
    let layout = PlayLayout::new(frame.area());

    let mut header = vec![
        Span::styled(
            " mathbuddy ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} | {} right | {} wrong", view.player, view.total_right, view.total_wrong),
            Style::default().fg(colors.fg()),
        ),
    ];
    if let Some(elapsed) = view.elapsed {
        let secs = elapsed.as_secs();
        header.push(Span::styled(
            format!(" | {:02}:{:02}", secs / 60, secs % 60),
            Style::default().fg(colors.accent()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), layout.header);

    frame.render_widget(QuestionArea::new(view.question, &ui.theme), layout.question);
    frame.render_widget(AnswerBox::new(&ui.input, &ui.theme), layout.input);
    frame.render_widget(LevelBar::new(view.level, view.progress, &ui.theme), layout.progress);
    frame.render_widget(
        CoachBubble::new(view.feedback, view.coach, ui.mascot.as_ref(), &ui.theme),
        layout.feedback,
    );

    let footer = Paragraph::new(Line::from(Span::styled(
        " press esc key to stop playing, or type done ",
        Style::default().fg(colors.dim()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn render_level_up(frame: &mut ratatui::Frame, view: &SessionView, ui: &Ui) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    let message = format!(
        "Level {}!\n{} is your new coach",
        view.level, view.coach
    );
    frame.render_widget(FunMessage::new(message, &ui.theme), rows[0]);
    frame.render_widget(LevelBar::new(view.level - 1, view.progress, &ui.theme), rows[1]);
    frame.render_widget(
        CoachBubble::new(view.feedback, view.coach, ui.mascot.as_ref(), &ui.theme),
        rows[2],
    );
}
