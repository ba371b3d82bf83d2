use crate::command::Command;
use crate::config::SpeedConfig;
use crate::game::Game;
use crossterm::event::{read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    speed: SpeedConfig,
    ticker: Ticker,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(speed: SpeedConfig, rng: R) -> App<R> {
        let game = Game::new_with_rng(rng);
        let ticker = Ticker::new(speed.period(game.heading().axis()));
        App {
            game,
            speed,
            ticker,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let events = spawn_input_reader()?;
        terminal.draw(|frame| self.game.draw(frame))?;
        while !self.quitting {
            match events.recv_timeout(self.ticker.remaining()) {
                Ok(Ok(event)) => {
                    if self.handle_event(event) {
                        terminal.draw(|frame| self.game.draw(frame))?;
                    }
                }
                Ok(Err(e)) => {
                    log::error!("Failed to read input event: {e}");
                    return Err(e);
                }
                Err(RecvTimeoutError::Timeout) => {
                    self.tick();
                    terminal.draw(|frame| self.game.draw(frame))?;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(io::Error::other("input reader thread stopped"));
                }
            }
        }
        log::info!(
            "Quitting with score {} and high score {}",
            self.game.score(),
            self.game.high_score()
        );
        Ok(())
    }

    fn tick(&mut self) {
        self.ticker.rearm();
        let outcome = self.game.update();
        log::trace!("Tick: {outcome:?}");
    }

    /// Handle an input event.  Returns `true` if the screen needs to be
    /// redrawn.
    fn handle_event(&mut self, event: Event) -> bool {
        if matches!(event, Event::Resize(..)) {
            return true;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return false;
        };
        match cmd {
            Command::Quit => {
                self.quitting = true;
                false
            }
            Command::Turn(direction) => {
                let axis = self.game.heading().axis();
                if self.game.set_direction(direction) && self.game.heading().axis() != axis {
                    self.retime();
                }
                false
            }
            Command::Restart => {
                if self.game.restart() {
                    self.retime();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Start ticking afresh at the period for the snake's heading
    fn retime(&mut self) {
        let period = self.speed.period(self.game.heading().axis());
        if period != self.ticker.period() {
            log::debug!("Tick period is now {period:?}");
        }
        self.ticker = Ticker::new(period);
    }
}

/// Start a thread that forwards terminal input events over a channel.  The
/// thread stops after a read error or once the receiver is dropped.
fn spawn_input_reader() -> io::Result<Receiver<io::Result<Event>>> {
    let (sender, receiver) = mpsc::channel();
    thread::Builder::new()
        .name(String::from("input-reader"))
        .spawn(move || loop {
            let r = read();
            let failed = r.is_err();
            if sender.send(r).is_err() || failed {
                break;
            }
        })?;
    Ok(receiver)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Ticker {
    period: Duration,
    deadline: Instant,
}

impl Ticker {
    fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            deadline: Instant::now() + period,
        }
    }

    fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next tick is due; zero if it's overdue
    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    fn rearm(&mut self) {
        self.deadline = Instant::now() + self.period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Axis, Direction};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn app() -> App<ChaCha12Rng> {
        App::new(SpeedConfig::default(), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    #[test]
    fn starts_horizontal() {
        let app = app();
        assert!(!app.quitting);
        assert_eq!(app.game.heading(), Direction::East);
        assert_eq!(
            app.ticker.period(),
            SpeedConfig::default().period(Axis::Horizontal)
        );
        assert!(app.ticker.remaining() <= app.ticker.period());
    }

    #[rstest]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case(KeyCode::Esc, KeyModifiers::NONE)]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL)]
    fn quit_keys(#[case] code: KeyCode, #[case] modifiers: KeyModifiers) {
        let mut app = app();
        assert!(!app.handle_event(Event::Key(KeyEvent::new(code, modifiers))));
        assert!(app.quitting);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let ev = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert!(!app.handle_event(Event::Key(ev)));
        assert!(!app.quitting);
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut app = app();
        assert!(!app.handle_event(key(KeyCode::Char('x'))));
        assert!(!app.quitting);
        assert_eq!(app.game.heading(), Direction::East);
    }

    #[test]
    fn resize_redraws() {
        let mut app = app();
        assert!(app.handle_event(Event::Resize(100, 40)));
        assert!(!app.quitting);
    }

    #[test]
    fn vertical_turn_slows_ticks() {
        let mut app = app();
        assert!(!app.handle_event(key(KeyCode::Down)));
        assert_eq!(app.game.heading(), Direction::South);
        assert_eq!(
            app.ticker.period(),
            SpeedConfig::default().period(Axis::Vertical)
        );
        app.tick();
        assert!(!app.handle_event(key(KeyCode::Char('d'))));
        assert_eq!(app.game.heading(), Direction::East);
        assert_eq!(
            app.ticker.period(),
            SpeedConfig::default().period(Axis::Horizontal)
        );
    }

    #[test]
    fn tick_rearms_ticker() {
        let mut app = app();
        let overdue = Instant::now();
        app.ticker.deadline = overdue;
        assert_eq!(app.ticker.remaining(), Duration::ZERO);
        app.tick();
        assert!(app.game.running());
        assert!(app.ticker.deadline > overdue);
        assert!(app.ticker.remaining() <= app.ticker.period());
    }

    #[test]
    fn reversal_keeps_period() {
        let mut app = app();
        let before = app.ticker;
        assert!(!app.handle_event(key(KeyCode::Left)));
        assert_eq!(app.game.heading(), Direction::East);
        assert_eq!(app.ticker, before);
    }

    #[test]
    fn same_axis_turn_keeps_deadline() {
        let mut app = app();
        assert!(!app.handle_event(key(KeyCode::Up)));
        let before = app.ticker;
        assert!(!app.handle_event(key(KeyCode::Down)));
        // The snake is still moving east, so south replaces the pending turn.
        assert_eq!(app.game.heading(), Direction::South);
        assert_eq!(app.ticker, before);
    }

    #[test]
    fn restart_ignored_while_running() {
        let mut app = app();
        let score = app.game.score();
        assert!(!app.handle_event(key(KeyCode::Char('r'))));
        assert!(app.game.running());
        assert_eq!(app.game.score(), score);
    }

    #[test]
    fn restart_after_game_over() {
        let mut app = app();
        assert!(!app.handle_event(key(KeyCode::Up)));
        app.game.end();
        assert!(!app.handle_event(key(KeyCode::Left)));
        assert!(app.handle_event(key(KeyCode::Char('r'))));
        assert!(app.game.running());
        assert_eq!(app.game.score(), 0);
        assert_eq!(app.game.heading(), Direction::East);
        assert_eq!(
            app.ticker.period(),
            SpeedConfig::default().period(Axis::Horizontal)
        );
    }
}
