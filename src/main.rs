mod app;
mod card;
mod catalog;
mod config;
mod logging;
mod nav;
mod page;
mod render;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::App;
use crate::catalog::Catalog;
use crate::nav::SystemOpener;
use crate::page::Page;

#[derive(Debug, Parser)]
#[command(
    name = "portada",
    version,
    about = "Portada: a terminal launchpad for reporting dashboards"
)]
struct Args {
    /// Browser command used to open dashboards (default: platform opener)
    #[arg(long)]
    browser: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the dashboard catalog and exit
    List,
    /// Open one dashboard by id without entering the UI
    Open { id: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load();
    let browser = args.browser.or(config.browser);
    let catalog = Catalog::builtin();
    let opener = SystemOpener::new(browser);

    match args.command {
        Some(Command::List) => {
            logging::init(false)?;
            return list_dashboards(&catalog);
        }
        Some(Command::Open { id }) => {
            logging::init(false)?;
            return open_dashboard(&catalog, &opener, &id);
        }
        None => {}
    }

    // The UI owns the terminal from here on; diagnostics go to the log file.
    logging::init(true)?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, Page::standard(), Box::new(opener));
    app.init();

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn list_dashboards(catalog: &Catalog) -> Result<()> {
    for dashboard in catalog.iter() {
        let kind = if dashboard.is_fragment_route() {
            "route"
        } else {
            "url"
        };
        println!(
            "{:<26} {:<28} [{}] {}",
            dashboard.id, dashboard.title, kind, dashboard.url
        );
    }
    Ok(())
}

fn open_dashboard(catalog: &Catalog, opener: &SystemOpener, id: &str) -> Result<()> {
    let Some(dashboard) = catalog.find(id) else {
        anyhow::bail!("unknown dashboard id `{id}` (see `portada list`)");
    };
    opener.launch(dashboard)?;
    println!("Opening {} {}", dashboard.title, dashboard.url);
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    app.handle_key(key);
}

/// Mouse handling stays stateless: the grid geometry is recomputed from
/// the current terminal size, the same way the draw path computes it.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let Some(size) = terminal_rect() else {
        return;
    };
    let areas = ui::layout::areas(size);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let slots = ui::layout::card_slots(areas.grid, app.card_count(), app.scroll_row);
            if let Some(&(index, _)) = slots
                .iter()
                .find(|(_, slot)| rect_contains(*slot, mouse.column, mouse.row))
            {
                app.click_card(index);
            }
        }
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        _ => {}
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
