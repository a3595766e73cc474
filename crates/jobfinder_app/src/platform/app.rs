use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use jobfinder_core::{
    update, visible_jobs, AppState, AppViewModel, Country, ExperienceBracket, Msg, SourceFilter,
};
use jobfinder_engine::{EngineHandle, FetchSettings};
use jobfinder_logging::{finder_debug, finder_info};

use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP};
use super::ui::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Filters for a one-shot search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub source: SourceFilter,
    pub country: Option<Country>,
    pub region: Option<String>,
    pub experience: ExperienceBracket,
    pub page: u32,
    pub json: bool,
}

/// Owns the controller state and feeds every message through `update`.
pub struct App {
    state: AppState,
    effects: EffectRunner,
}

impl App {
    pub fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }

    /// Applies every engine result that has already arrived.
    pub fn pump_engine(&mut self) {
        while let Some(msg) = self.effects.poll() {
            self.dispatch(msg);
        }
    }

    /// Blocks until `done` holds for the state, applying engine results as they come.
    pub fn wait_until(&mut self, done: impl Fn(&AppState) -> bool) {
        while !done(&self.state) {
            if let Some(msg) = self.effects.wait(POLL_INTERVAL) {
                self.dispatch(msg);
            }
        }
    }

    pub fn render_if_dirty(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.state.consume_dirty() {
            write_lines(out, &render(&self.state.view()))?;
        }
        Ok(())
    }
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn start(settings: FetchSettings) -> anyhow::Result<App> {
    finder_info!("Using API at {}", settings.base_url);
    let engine = EngineHandle::new(settings).context("failed to start fetch engine")?;
    Ok(App::new(EffectRunner::new(engine)))
}

pub fn run_interactive(settings: FetchSettings) -> anyhow::Result<()> {
    let mut app = start(settings)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    writeln!(out, "{HELP}\n")?;
    app.dispatch(Msg::HealthCheckRequested);
    app.dispatch(Msg::SearchSubmitted);
    app.render_if_dirty(&mut out)?;

    loop {
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match parse_command(&line, &app.view()) {
                Command::Dispatch(msgs) => {
                    for msg in msgs {
                        app.dispatch(msg);
                    }
                }
                Command::ShowSaved => write_lines(&mut out, &saved_lines(&app))?,
                Command::Redraw => write_lines(&mut out, &render(&app.view()))?,
                Command::Help => writeln!(out, "{HELP}")?,
                Command::Quit => break,
                Command::Invalid(reason) => writeln!(out, "? {reason}")?,
                Command::Empty => {}
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                finder_debug!("stdin closed");
                break;
            }
        }
        app.pump_engine();
        app.render_if_dirty(&mut out)?;
    }

    finder_info!("Session ended");
    Ok(())
}

fn saved_lines(app: &App) -> Vec<String> {
    let state = app.state();
    let mut lines: Vec<String> = state
        .saved_ids()
        .map(|id| match state.jobs().iter().find(|job| job.id == id) {
            Some(job) => format!("[*] {} - {} ({id})", job.title, job.company),
            None => format!("[*] {id} (not on this page)"),
        })
        .collect();
    if lines.is_empty() {
        lines.push("No saved postings yet.".to_string());
    }
    lines
}

pub fn run_search(settings: FetchSettings, request: SearchRequest) -> anyhow::Result<()> {
    let mut app = start(settings)?;

    app.dispatch(Msg::SearchTextChanged(request.query));
    app.dispatch(Msg::SourceChanged(request.source));
    app.dispatch(Msg::CountryChanged(request.country));
    if let Some(region) = request.region {
        let known = request
            .country
            .and_then(|country| country.canonical_region(&region))
            .is_some();
        if !known {
            bail!("unknown region {region:?} for the selected country");
        }
        app.dispatch(Msg::RegionChanged(Some(region)));
    }
    app.dispatch(Msg::ExperienceChanged(request.experience));
    app.dispatch(Msg::PageRequested { page: request.page });
    app.wait_until(|state| !state.is_loading());

    let state = app.state();
    if let Some(failure) = state.error() {
        bail!("{failure}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if request.json {
        let view = state.view();
        let jobs = visible_jobs(state.jobs(), &view.search_text, view.source);
        serde_json::to_writer_pretty(&mut out, &jobs)?;
        writeln!(out)?;
    } else {
        write_lines(&mut out, &render(&state.view()))?;
    }
    Ok(())
}

pub fn run_health(settings: FetchSettings) -> anyhow::Result<()> {
    let base_url = settings.base_url.clone();
    let mut app = start(settings)?;
    app.dispatch(Msg::HealthCheckRequested);
    app.wait_until(|state| state.view().api_healthy.is_some());

    if app.view().api_healthy == Some(true) {
        println!("{base_url} is healthy");
        Ok(())
    } else {
        bail!("{base_url} is not healthy")
    }
}
