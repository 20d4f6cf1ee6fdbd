use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::config::Config;
use crate::engine::coach::CoachRoster;
use crate::engine::problem::ProblemBank;
use crate::engine::scoring;
use crate::engine::selector;
use crate::error::QuizError;
use crate::session::answer::{Answer, parse_answer};
use crate::session::observer::SessionObserver;
use crate::session::setup::SessionSetup;
use crate::session::state::{Feedback, SessionState};
use crate::session::summary::SessionSummary;
use crate::session::timer::{Stopwatch, TimerKind, Timers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Splash,
    Playing,
    LevelUp,
    Ended,
}

#[derive(Clone, Copy, Debug)]
pub struct Pacing {
    pub splash: Duration,
    pub level_up: Duration,
    pub exit: Duration,
}

impl Pacing {
    pub fn from_config(config: &Config) -> Self {
        Self {
            splash: config.splash_delay(),
            level_up: config.level_up_delay(),
            exit: config.exit_delay(),
        }
    }
}

/// Everything the render layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionView<'a> {
    pub screen: AppScreen,
    pub player: &'a str,
    pub question: Option<&'a str>,
    pub feedback: Option<&'a Feedback>,
    pub level: u32,
    pub progress: f64,
    pub elapsed: Option<Duration>,
    pub coach: &'a str,
    pub total_right: u32,
    pub total_wrong: u32,
}

pub struct App {
    pub screen: AppScreen,
    pub setup: SessionSetup,
    pub bank: ProblemBank,
    pub state: SessionState,
    pub feedback: Option<Feedback>,
    pub should_quit: bool,
    progress: f64,
    pacing: Pacing,
    timers: Timers,
    stopwatch: Option<Stopwatch>,
    observers: Vec<Box<dyn SessionObserver>>,
    rng: SmallRng,
}

impl App {
    pub fn new(
        setup: SessionSetup,
        config: &Config,
        mut rng: SmallRng,
        now: Instant,
    ) -> Result<Self, QuizError> {
        let bank = ProblemBank::generate(setup.operation, setup.param)?;
        let coaches = CoachRoster::new(config.coaches.clone(), &mut rng)?;
        let pacing = Pacing::from_config(config);

        let mut timers = Timers::default();
        timers.schedule(TimerKind::Splash, now, pacing.splash);

        info!(
            player = %setup.player,
            operation = %setup.operation,
            param = setup.param,
            problems = bank.len(),
            "session created"
        );

        Ok(Self {
            screen: AppScreen::Splash,
            setup,
            bank,
            state: SessionState::new(coaches),
            feedback: None,
            should_quit: false,
            progress: 0.0,
            pacing,
            timers,
            stopwatch: config.stopwatch.then(Stopwatch::default),
            observers: Vec::new(),
            rng,
        })
    }

    pub fn attach(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Fire every timer that is due.
    pub fn tick(&mut self, now: Instant) -> Result<(), QuizError> {
        for kind in self.timers.take_due(now) {
            match (kind, self.screen) {
                (TimerKind::Splash, AppScreen::Splash) => self.start_playing(now)?,
                (TimerKind::LevelUp, AppScreen::LevelUp) => {
                    self.screen = AppScreen::Playing;
                    self.progress = 0.0;
                }
                (TimerKind::Exit, AppScreen::Ended) => self.should_quit = true,
                (kind, screen) => debug!(?kind, ?screen, "stale timer ignored"),
            }
        }
        Ok(())
    }

    fn start_playing(&mut self, now: Instant) -> Result<(), QuizError> {
        self.state.current = Some(selector::select_next(&self.bank, &mut self.rng)?);
        self.screen = AppScreen::Playing;
        if let Some(sw) = self.stopwatch.as_mut() {
            sw.start(now);
        }
        Ok(())
    }

    /// Handle one completed entry from the answer prompt.
    pub fn submit(&mut self, raw: &str, now: Instant) -> Result<(), QuizError> {
        if self.screen != AppScreen::Playing {
            return Ok(());
        }
        match parse_answer(raw) {
            Ok(Answer::Empty) => Ok(()),
            Ok(Answer::Quit) => {
                self.end(now);
                Ok(())
            }
            Ok(Answer::Number(given)) => self.grade(given, now),
            Err(QuizError::NonNumericAnswer(input)) => {
                self.feedback = Some(Feedback::Invalid { input });
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn grade(&mut self, given: i64, now: Instant) -> Result<(), QuizError> {
        let (outcome, feedback) = self.state.grade(&mut self.bank, given)?;
        self.feedback = Some(feedback);

        if outcome.correct {
            self.progress = scoring::level_progress(self.state.total_right);
        }

        if outcome.leveled_up {
            self.screen = AppScreen::LevelUp;
            let coach = self.state.coaches.rotate(&mut self.rng).to_string();
            info!(level = self.state.level, coach = %coach, "level up");
            for observer in &mut self.observers {
                observer.on_level_up(self.state.level, &coach);
            }
            self.timers
                .schedule(TimerKind::LevelUp, now, self.pacing.level_up);
        }

        let next = selector::select_next(&self.bank, &mut self.rng)?;
        debug!(next = ?next, correct = outcome.correct, "next problem");
        self.state.current = Some(next);
        Ok(())
    }

    /// Quit signal: valid from every screen, overrides pending timers.
    pub fn quit(&mut self, now: Instant) {
        if self.screen != AppScreen::Ended {
            self.end(now);
        }
    }

    fn end(&mut self, now: Instant) {
        self.screen = AppScreen::Ended;
        self.timers.cancel_all();
        self.timers.schedule(TimerKind::Exit, now, self.pacing.exit);
        if let Some(sw) = self.stopwatch.as_mut() {
            sw.stop(now);
        }
        for observer in &mut self.observers {
            observer.on_end();
        }
        info!(
            right = self.state.total_right,
            wrong = self.state.total_wrong,
            level = self.state.level,
            "session ended"
        );
    }

    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.stopwatch.map(|sw| sw.elapsed(now))
    }

    pub fn question(&self) -> Option<&str> {
        self.state
            .current
            .and_then(|id| self.bank.get(id))
            .map(|p| p.question.as_str())
    }

    pub fn view(&self, now: Instant) -> SessionView<'_> {
        SessionView {
            screen: self.screen,
            player: &self.setup.player,
            question: self.question(),
            feedback: self.feedback.as_ref(),
            level: self.state.level,
            progress: self.progress,
            elapsed: self.elapsed(now),
            coach: self.state.coach(),
            total_right: self.state.total_right,
            total_wrong: self.state.total_wrong,
        }
    }

    pub fn summary(&self, now: Instant) -> SessionSummary {
        let elapsed = self.elapsed(now).unwrap_or_default().as_secs_f64();
        SessionSummary::from_session(&self.setup, &self.state, &self.bank, elapsed)
    }
}
