//! Game driver: runs oracle effects and publishes session snapshots.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, instrument};

use crate::language::Language;
use crate::oracle::{Oracle, run_effect};
use crate::session::Session;
use crate::transition::{Effect, Intent, Outcome};

/// Owns the live [`Session`] and drives it with an [`Oracle`].
///
/// Oracle calls run as tokio tasks; their completions are queued and only
/// applied when the owner calls [`Game::next_outcome`], [`Game::drain_outcomes`]
/// or [`Game::settle`], so the session has a single writer. After every
/// mutation a snapshot is published to subscribers.
pub struct Game<O> {
    session: Session,
    oracle: Arc<O>,
    snapshots: watch::Sender<Session>,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    in_flight: usize,
}

impl<O: Oracle + 'static> Game<O> {
    /// Creates a game that has not started a round yet.
    #[instrument(skip(oracle))]
    pub fn new(oracle: Arc<O>, language: Language) -> Self {
        let session = Session::new(language);
        let (snapshots, _) = watch::channel(session.clone());
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        debug!("Creating game");
        Self {
            session,
            oracle,
            snapshots,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
        }
    }

    /// The live session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Subscribes to session snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.snapshots.subscribe()
    }

    /// Number of oracle calls not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Applies an intent and starts the oracle call it needs.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        if let Some(effect) = self.session.apply(intent) {
            self.spawn(effect);
        }
        self.publish();
    }

    /// Waits for the next oracle completion and applies it.
    pub async fn next_outcome(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.resolve(outcome);
        }
    }

    /// Applies every completion that has already arrived, without waiting.
    ///
    /// Returns how many were applied.
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.resolve(outcome);
            applied += 1;
        }
        applied
    }

    /// Waits until every outstanding oracle call has been applied.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            self.next_outcome().await;
        }
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.session.resolve(outcome);
        self.publish();
    }

    fn spawn(&mut self, effect: Effect) {
        debug!(?effect, "Starting oracle call");
        self.in_flight += 1;
        let fallback = effect.failed();
        let oracle = Arc::clone(&self.oracle);
        let tx = self.outcome_tx.clone();
        let call = tokio::spawn(async move { run_effect(oracle.as_ref(), effect).await });
        tokio::spawn(async move {
            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(error = %e, "Oracle task failed, applying fallback");
                    fallback
                }
            };
            if tx.send(outcome).is_err() {
                debug!("Game dropped before oracle call completed");
            }
        });
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.session.clone());
    }
}
