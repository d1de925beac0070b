use anyhow::Result;
use congress_seats::layout::{OFFICER_RADIUS, SEAT_RADIUS};
use congress_seats::{
    layout_roster, member_detail, officer_detail, Chamber, ChartError, ChartLayout, LayoutStrategy,
    LoadOutcome, LoadState, PartyCode, Roster, RosterLoader, SeatBorder, SeatDetail,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Points},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const ROW_JUMP: usize = 10;

static IDLE: LoadState = LoadState::Idle;

pub struct App {
    pub chamber: Chamber,
    pub strategy: LayoutStrategy,
    pub states: HashMap<Chamber, LoadState>,
    pub layout: Option<ChartLayout>,
    /// Index into layout seats; `seats.len()` selects the officer
    pub selected: usize,
    pub show_detail: bool,
    loader: std::result::Result<Arc<RosterLoader>, ChartError>,
    tx: mpsc::UnboundedSender<LoadOutcome>,
    rx: mpsc::UnboundedReceiver<LoadOutcome>,
}

impl App {
    pub fn new(loader: std::result::Result<Arc<RosterLoader>, ChartError>, chamber: Chamber) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let states = Chamber::ALL.iter().map(|c| (*c, LoadState::Idle)).collect();

        Self {
            chamber,
            strategy: LayoutStrategy::default_for(chamber),
            states,
            layout: None,
            selected: 0,
            show_detail: false,
            loader,
            tx,
            rx,
        }
    }

    /// Kick off the first load for the current chamber
    pub fn start(&mut self) {
        self.trigger_load(false);
    }

    pub fn state(&self) -> &LoadState {
        self.states.get(&self.chamber).unwrap_or(&IDLE)
    }

    fn state_mut(&mut self) -> &mut LoadState {
        self.states.entry(self.chamber).or_default()
    }

    pub fn roster(&self) -> Option<&Arc<Roster>> {
        self.state().roster()
    }

    pub fn trigger_load(&mut self, refresh: bool) {
        let chamber = self.chamber;
        let loader = match &self.loader {
            Ok(loader) => Arc::clone(loader),
            Err(err) => {
                // Bad configuration never reaches the network
                let err = err.clone();
                self.state_mut().fail(err);
                return;
            }
        };

        if self.state_mut().begin() {
            self.layout = None;
            loader.spawn_load(chamber, refresh, self.tx.clone());
        }
    }

    /// Apply any finished loads. Returns true if something changed.
    pub fn poll_outcomes(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            if let Some(state) = self.states.get_mut(&outcome.chamber) {
                changed |= state.finish(outcome.result);
            }
        }
        if changed {
            self.relayout();
        }
        changed
    }

    fn relayout(&mut self) {
        self.layout = self
            .roster()
            .map(|roster| layout_roster(roster, &self.strategy));
        let total = self.selectable();
        if self.selected >= total {
            self.selected = 0;
        }
    }

    pub fn switch_chamber(&mut self) {
        self.chamber = self.chamber.other();
        self.strategy = LayoutStrategy::named(self.strategy.name(), self.chamber)
            .unwrap_or_else(|| LayoutStrategy::default_for(self.chamber));
        self.selected = 0;
        self.relayout();

        if matches!(self.state(), LoadState::Idle) {
            self.trigger_load(false);
        }
    }

    pub fn cycle_strategy(&mut self) {
        self.strategy = self.strategy.cycle(self.chamber);
        self.relayout();
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    /// Seats plus the officer singleton, if shown
    pub fn selectable(&self) -> usize {
        match &self.layout {
            Some(layout) => layout.seats.len() + usize::from(layout.officer.is_some()),
            None => 0,
        }
    }

    pub fn next(&mut self) {
        self.step(1, true);
    }

    pub fn previous(&mut self) {
        self.step(-1, true);
    }

    pub fn jump_down(&mut self) {
        self.step(ROW_JUMP as isize, false);
    }

    pub fn jump_up(&mut self) {
        self.step(-(ROW_JUMP as isize), false);
    }

    fn step(&mut self, delta: isize, wrap: bool) {
        let len = self.selectable();
        if len == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = if wrap {
            target.rem_euclid(len as isize) as usize
        } else {
            target.clamp(0, len as isize - 1) as usize
        };
    }

    pub fn selected_detail(&self) -> Option<SeatDetail> {
        let layout = self.layout.as_ref()?;
        let roster = self.roster()?;

        match layout.seats.get(self.selected) {
            Some(seat) => Some(member_detail(&roster.members[seat.member_index], roster.chamber)),
            None => layout.officer.as_ref().map(|o| officer_detail(&o.officer)),
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.poll_outcomes();
        terminal.draw(|f| ui(f, app))?;

        // Poll so finished loads show up without a keypress
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Tab | KeyCode::BackTab => app.switch_chamber(),
                KeyCode::Char('s') => app.cycle_strategy(),
                KeyCode::Char('r') => app.trigger_load(true),
                KeyCode::Right | KeyCode::Char('l') => app.next(),
                KeyCode::Left | KeyCode::Char('h') => app.previous(),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => app.jump_down(),
                KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => app.jump_up(),
                KeyCode::Home => app.selected = 0,
                KeyCode::End => {
                    if app.selectable() > 0 {
                        app.selected = app.selectable() - 1;
                    }
                }
                _ => {}
            }
        }
    }
}

fn party_color(party: PartyCode) -> Color {
    match party {
        PartyCode::Democratic => Color::Blue,
        PartyCode::Republican => Color::Red,
        PartyCode::Independent => Color::Yellow,
        PartyCode::Unknown => Color::Gray,
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with chamber tabs
            Constraint::Min(0),    // Chart area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.state() {
        LoadState::Idle | LoadState::Loading => render_notice(
            f,
            chunks[1],
            " Loading ",
            &format!("Loading {} members...", app.chamber.api_name()),
            Color::Cyan,
        ),
        LoadState::Failed(err) => {
            let color = if err.is_empty_data() { Color::Yellow } else { Color::Red };
            render_notice(f, chunks[1], &format!(" {} ", err.title()), &err.to_string(), color);
        }
        LoadState::Ready(_) => {
            if app.show_detail {
                let content_chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(70), // Chart
                        Constraint::Percentage(30), // Detail panel
                    ])
                    .split(chunks[1]);

                render_chart(f, content_chunks[0], app);
                render_detail_panel(f, content_chunks[1], app);
            } else {
                render_chart(f, chunks[1], app);
            }
        }
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, chamber) in Chamber::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *chamber == app.chamber {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(chamber.title(), style));
    }

    if let Some(roster) = app.roster() {
        tab_spans.push(Span::raw("  |  "));
        for (party, count) in roster.party_breakdown() {
            tab_spans.push(Span::styled(
                format!("{} {}  ", party.code(), count),
                Style::default().fg(party_color(party)),
            ));
        }
    }

    tab_spans.push(Span::raw("|  "));
    tab_spans.push(Span::styled(
        format!("Layout: {}", app.strategy.name()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_notice(f: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let notice = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", message), Style::default().fg(color))),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title.to_string()),
    );

    f.render_widget(notice, area);
}

fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    let Some(layout) = &app.layout else {
        return;
    };
    let height = layout.height;

    let title = format!(" {} - {} seats ", app.chamber.title(), layout.seats.len());
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, layout.width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            // Canvas y grows upward; layout y grows downward
            for party in PartyCode::ALL {
                let coords: Vec<(f64, f64)> = layout
                    .seats
                    .iter()
                    .filter(|s| s.style.party == party)
                    .map(|s| (s.x, height - s.y))
                    .collect();
                ctx.draw(&Points {
                    coords: &coords,
                    color: party_color(party),
                });
            }

            for seat in &layout.seats {
                let color = match seat.style.border {
                    SeatBorder::PartyLeader => Color::Magenta,
                    SeatBorder::FloorLeader => Color::LightMagenta,
                    _ => party_color(seat.style.party),
                };
                ctx.draw(&Circle {
                    x: seat.x,
                    y: height - seat.y,
                    radius: SEAT_RADIUS,
                    color,
                });
            }

            if let Some(officer) = &layout.officer {
                ctx.draw(&Circle {
                    x: officer.x,
                    y: height - officer.y,
                    radius: OFFICER_RADIUS * 0.6,
                    color: party_color(officer.style.party),
                });
                ctx.draw(&Circle {
                    x: officer.x,
                    y: height - officer.y,
                    radius: OFFICER_RADIUS,
                    color: Color::LightYellow,
                });
            }

            let selected = layout
                .seats
                .get(app.selected)
                .map(|s| (s.x, s.y))
                .or_else(|| layout.officer.as_ref().map(|o| (o.x, o.y)));
            if let Some((x, y)) = selected {
                ctx.draw(&Circle {
                    x,
                    y: height - y,
                    radius: OFFICER_RADIUS + 0.2,
                    color: Color::White,
                });
            }
        });

    f.render_widget(canvas, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let total = app.selectable();
    let selected = if total > 0 { app.selected + 1 } else { 0 };

    let mut status_spans = vec![Span::styled(
        format!(" Seat: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(detail) = app.selected_detail() {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(detail.heading, Style::default().fg(Color::Green)));
    }

    for (key, label) in [
        ("Enter", " Details"),
        ("Tab", " Chamber"),
        ("s", " Layout"),
        ("r", " Refresh"),
        ("←/→", " Nav"),
    ] {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(label));
    }
    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Member Details ");

    let Some(detail) = app.selected_detail() else {
        f.render_widget(Paragraph::new("No seat selected").block(block), area);
        return;
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", detail.heading),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in &detail.lines {
        content.push(Line::from(format!("  {}", line)));
    }
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Press Enter to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    f.render_widget(Paragraph::new(content).wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use congress_seats::{FixtureFile, FixtureSource};
    use serde_json::json;

    fn loader() -> Arc<RosterLoader> {
        let senate = (0..50)
            .map(|i| json!({"name": format!("D{}", i), "partyName": "Democratic"}))
            .chain((0..50).map(|i| json!({"name": format!("R{}", i), "partyName": "Republican"})))
            .collect();
        let source = FixtureSource::new(FixtureFile {
            house: vec![],
            senate,
            vice_president: Some(json!({"firstName": "Vice", "lastName": "President", "partyName": "Democratic"})),
        });
        Arc::new(RosterLoader::with_source(Arc::new(source), chrono::Duration::minutes(5)))
    }

    async fn settle(app: &mut App) {
        for _ in 0..100 {
            if app.poll_outcomes() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_load_then_select_officer() {
        let mut app = App::new(Ok(loader()), Chamber::Senate);
        app.start();
        assert!(app.state().is_loading());

        settle(&mut app).await;
        assert!(app.roster().is_some());
        assert_eq!(app.selectable(), 101);

        app.selected = 100;
        let detail = app.selected_detail().unwrap();
        assert_eq!(detail.heading, "Vice President (Democratic)");

        app.next();
        assert_eq!(app.selected, 0, "selection wraps");
        app.jump_up();
        assert_eq!(app.selected, 0, "jumps clamp");
    }

    #[tokio::test]
    async fn test_configuration_error_without_loading() {
        let mut app = App::new(Err(ChartError::missing_api_key()), Chamber::House);
        app.start();
        assert!(matches!(app.state(), LoadState::Failed(ChartError::Configuration(_))));
        assert!(app.layout.is_none());
    }

    #[tokio::test]
    async fn test_empty_chamber_after_switch() {
        let mut app = App::new(Ok(loader()), Chamber::Senate);
        app.start();
        settle(&mut app).await;

        app.switch_chamber();
        assert_eq!(app.chamber, Chamber::House);
        settle(&mut app).await;
        assert!(app.state().error().unwrap().is_empty_data());
        assert_eq!(app.selectable(), 0);
    }

    #[tokio::test]
    async fn test_cycle_strategy_relayouts() {
        let mut app = App::new(Ok(loader()), Chamber::Senate);
        app.start();
        settle(&mut app).await;

        app.cycle_strategy();
        assert_eq!(app.strategy.name(), "grid");
        assert_eq!(app.layout.as_ref().unwrap().strategy.name(), "grid");
    }
}
