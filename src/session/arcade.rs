//! The arcade facade: accounts, clock and sessions wired together.

use thiserror::Error;

use super::{Session, SessionEvent, Step};
use crate::account::{
    AccountSettings, Accounts, AuthError, JsonFileStore, MemoryStore, StoreError, UserRecord, UserStore,
};
use crate::config::ArcadeConfig;
use crate::core::{Clock, ConfigError, GameError, GameRng, SystemClock};
use crate::rules::ActivityResult;

/// Anything the arcade facade can fail with.
#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Game(#[from] GameError),
    /// The event was applied but its result could not be stored. The step
    /// is kept so the caller can show it and retry with [`Arcade::record`].
    #[error("Result was not recorded: {source}")]
    Unrecorded {
        step: Box<Step>,
        #[source]
        source: AuthError,
    },
}

/// Accounts plus the clock every session reads.
pub struct Arcade<S: UserStore, C: Clock> {
    config: ArcadeConfig,
    accounts: Accounts<S>,
    clock: C,
    rng: GameRng,
}

impl<S: UserStore, C: Clock> Arcade<S, C> {
    /// Validate `config` and build an arcade on an existing store.
    pub fn new(config: ArcadeConfig, store: S, clock: C, rng: GameRng) -> Result<Self, ArcadeError> {
        config.validate()?;
        let accounts = Accounts::new(store, &config.accounts)?;
        Ok(Self {
            config,
            accounts,
            clock,
            rng,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    #[must_use]
    pub fn accounts(&self) -> &Accounts<S> {
        &self.accounts
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<UserRecord, ArcadeError> {
        Ok(self.accounts.register(username, password)?)
    }

    /// Check credentials and start a session on the menu.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Session, ArcadeError> {
        let record = self.accounts.login(username, password)?;
        Ok(Session::new(record.username, self.config.clone(), self.rng.fork()))
    }

    /// Apply an event at the current time and record any result.
    ///
    /// The session has already moved on when recording fails, so the step
    /// comes back inside [`ArcadeError::Unrecorded`].
    pub fn dispatch(&mut self, session: &mut Session, event: SessionEvent) -> Result<Step, ArcadeError> {
        let step = session.dispatch(event, self.clock.now())?;
        if let Some(result) = &step.result {
            if let Err(source) = self.record(session, result) {
                log::warn!(
                    "Could not record {:?} for {}: {}",
                    result,
                    session.username(),
                    source
                );
                return Err(ArcadeError::Unrecorded {
                    step: Box::new(step),
                    source,
                });
            }
        }
        Ok(step)
    }

    /// Store one result for the session's user.
    pub fn record(&mut self, session: &Session, result: &ActivityResult) -> Result<UserRecord, AuthError> {
        let record = self.accounts.record_result(session.username(), result)?;
        log::debug!("Recorded {} result for {}", result.kind(), session.username());
        Ok(record)
    }

    /// Leave the current activity, record what it owes and end the session.
    pub fn logout(&mut self, mut session: Session) -> Result<Option<UserRecord>, ArcadeError> {
        self.dispatch(&mut session, SessionEvent::BackToMenu)?;
        log::info!("{} logged out", session.username());
        Ok(self.accounts.get(session.username()))
    }
}

impl<C: Clock> Arcade<MemoryStore, C> {
    /// Arcade whose users vanish with the process.
    pub fn in_memory(config: ArcadeConfig, clock: C) -> Result<Self, ArcadeError> {
        Self::new(config, MemoryStore::new(), clock, GameRng::from_entropy())
    }
}

impl Arcade<JsonFileStore, SystemClock> {
    /// Arcade backed by the JSON store at `accounts.store_path`.
    pub fn open(config: ArcadeConfig) -> Result<Self, ArcadeError> {
        let path = store_path(&config.accounts)?;
        let store = JsonFileStore::open(path)?;
        Self::new(config, store, SystemClock, GameRng::from_entropy())
    }
}

fn store_path(settings: &AccountSettings) -> Result<std::path::PathBuf, ConfigError> {
    settings
        .store_path
        .clone()
        .ok_or_else(|| ConfigError::Invalid("accounts.store_path is not set".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ManualClock, Millis};
    use crate::memory::MemorySettings;
    use crate::quiz::MathEvent;
    use crate::rules::ActivityKind;
    use std::cell::Cell;
    use std::rc::Rc;

    fn arcade() -> Arcade<MemoryStore, ManualClock> {
        let config = ArcadeConfig::default()
            .with_memory(MemorySettings::default().with_pairs(2))
            .with_accounts(AccountSettings::default().with_fast_hashing());
        Arcade::new(config, MemoryStore::new(), ManualClock::new(Millis(0)), GameRng::new(9)).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ArcadeConfig::default().with_memory(MemorySettings::default().with_pairs(0));
        assert!(matches!(
            Arcade::in_memory(config, ManualClock::new(Millis(0))),
            Err(ArcadeError::Config(_))
        ));
    }

    #[test]
    fn test_login_requires_registration() {
        let mut arcade = arcade();
        assert!(matches!(
            arcade.login("mia", "pw"),
            Err(ArcadeError::Auth(AuthError::InvalidCredentials))
        ));

        arcade.register("mia", "pw").unwrap();
        let session = arcade.login("mia", "pw").unwrap();
        assert_eq!(session.username(), "mia");
    }

    #[test]
    fn test_logout_records_open_quiz() {
        let mut arcade = arcade();
        arcade.register("mia", "pw").unwrap();
        let mut session = arcade.login("mia", "pw").unwrap();

        arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Math)).unwrap();
        arcade
            .dispatch(&mut session, SessionEvent::Math(MathEvent::Answer(-1)))
            .unwrap();
        arcade.clock().advance(1_000);
        arcade.dispatch(&mut session, SessionEvent::Math(MathEvent::Skip)).unwrap();

        let record = arcade.logout(session).unwrap().unwrap();
        assert_eq!(record.stats.math.sessions, 1);
        assert_eq!(record.stats.math.questions_answered, 1);
        assert_eq!(record.stats.math.correct_answers, 0);
        assert!(record.last_played.is_some());
    }

    /// Store that starts failing writes once `broken` is set.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        broken: Rc<Cell<bool>>,
    }

    impl UserStore for FlakyStore {
        fn get(&self, username: &str) -> Option<UserRecord> {
            self.inner.get(username)
        }

        fn put(&mut self, record: UserRecord) -> Result<(), StoreError> {
            if self.broken.get() {
                return Err(StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")));
            }
            self.inner.put(record)
        }

        fn usernames(&self) -> Vec<String> {
            self.inner.usernames()
        }
    }

    #[test]
    fn test_failed_write_keeps_step() {
        let store = FlakyStore::default();
        let broken = Rc::clone(&store.broken);
        let config = ArcadeConfig::default().with_accounts(AccountSettings::default().with_fast_hashing());
        let mut arcade = Arcade::new(config, store, ManualClock::new(Millis(0)), GameRng::new(3)).unwrap();
        arcade.register("mia", "pw").unwrap();
        let mut session = arcade.login("mia", "pw").unwrap();

        arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Math)).unwrap();
        arcade
            .dispatch(&mut session, SessionEvent::Math(MathEvent::Answer(-1)))
            .unwrap();

        broken.set(true);
        let err = arcade.dispatch(&mut session, SessionEvent::BackToMenu).unwrap_err();
        let (step, source) = match err {
            ArcadeError::Unrecorded { step, source } => (step, source),
            other => panic!("unexpected error: {other}"),
        };
        assert!(matches!(source, AuthError::Store(StoreError::Io(_))));
        assert_eq!(session.screen().kind(), None);
        assert_eq!(arcade.accounts().get("mia").unwrap().stats.math.sessions, 0);

        let result = step.result.expect("leaving the quiz owes a result");
        broken.set(false);
        let record = arcade.record(&session, &result).unwrap();
        assert_eq!(record.stats.math.sessions, 1);
        assert_eq!(record.stats.math.questions_answered, 1);
    }

    #[test]
    fn test_open_without_store_path() {
        assert!(matches!(
            Arcade::open(ArcadeConfig::default()),
            Err(ArcadeError::Config(ConfigError::Invalid(_)))
        ));
    }
}
