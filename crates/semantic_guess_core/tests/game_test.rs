//! Tests for the game driver with a scripted oracle.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use semantic_guess_core::{
    Game, GuessVerdict, HintLevel, Intent, Language, Notice, Oracle, Phase, Score,
};

/// Oracle that answers from fixed tables.
#[derive(Default)]
struct ScriptedOracle {
    words: Mutex<VecDeque<String>>,
    verdicts: HashMap<String, GuessVerdict>,
    hint_calls: AtomicUsize,
    panic_on_evaluate: bool,
}

impl ScriptedOracle {
    fn with_words(words: &[&str]) -> Self {
        Self {
            words: Mutex::new(words.iter().map(|w| w.to_string()).collect()),
            ..Self::default()
        }
    }

    fn verdict(mut self, guess: &str, verdict: GuessVerdict) -> Self {
        self.verdicts.insert(guess.to_string(), verdict);
        self
    }
}

#[async_trait::async_trait]
impl Oracle for ScriptedOracle {
    async fn generate_target_word(&self, language: Language) -> String {
        self.words
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| language.failed_word_fallback().to_string())
    }

    async fn evaluate_guess(&self, _target: &str, guess: &str, _language: Language) -> GuessVerdict {
        if self.panic_on_evaluate {
            panic!("oracle exploded");
        }
        self.verdicts
            .get(guess)
            .cloned()
            .unwrap_or_else(GuessVerdict::rejected)
    }

    async fn generate_hint(&self, target: &str, _language: Language, level: HintLevel) -> String {
        self.hint_calls.fetch_add(1, Ordering::SeqCst);
        format!("hint {} for {}", level, target.len())
    }
}

async fn started(oracle: ScriptedOracle, language: Language) -> (Game<ScriptedOracle>, Arc<ScriptedOracle>) {
    let oracle = Arc::new(oracle);
    let mut game = Game::new(Arc::clone(&oracle), language);
    game.dispatch(Intent::StartRound);
    game.settle().await;
    (game, oracle)
}

async fn submit(game: &mut Game<ScriptedOracle>, text: &str) {
    game.dispatch(Intent::EditInput(text.to_string()));
    game.dispatch(Intent::Submit);
    game.settle().await;
}

#[tokio::test]
async fn test_round_starts_playing() {
    let (game, _) = started(ScriptedOracle::with_words(&["cat"]), Language::English).await;

    let session = game.session();
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.target_word(), Some("cat"));
    assert!(session.history().is_empty());
    assert_eq!(session.hints_used(), 0);
    assert!(session.latest_hint().is_none());
    assert_eq!(game.in_flight(), 0);
}

#[tokio::test]
async fn test_kitten_then_cat_wins() {
    let oracle = ScriptedOracle::with_words(&["cat"])
        .verdict("kitten", GuessVerdict::accepted(Score::new(92), "🐱", None))
        .verdict("cat", GuessVerdict::accepted(Score::PERFECT, "🐈", None));
    let (mut game, _) = started(oracle, Language::English).await;

    submit(&mut game, "kitten").await;
    assert_eq!(game.session().phase(), Phase::Playing);
    assert_eq!(game.session().history()[0].word(), "kitten");

    submit(&mut game, "xyzzy").await;
    assert_eq!(game.session().history().len(), 1);
    assert_eq!(game.session().notice(), Some(Notice::InvalidGuess));
    assert_eq!(game.session().input(), "xyzzy");

    submit(&mut game, "cat").await;
    assert_eq!(game.session().phase(), Phase::Won);
    assert_eq!(game.session().input(), "");
    assert!(game.session().history()[0].is_winning_guess());
}

#[tokio::test]
async fn test_fourth_hint_makes_no_call() {
    let (mut game, oracle) = started(ScriptedOracle::with_words(&["cat"]), Language::English).await;

    for _ in 0..4 {
        game.dispatch(Intent::RequestHint);
        game.settle().await;
    }

    assert_eq!(oracle.hint_calls.load(Ordering::SeqCst), 3);
    assert_eq!(game.session().hints_used(), 3);
    assert_eq!(game.session().latest_hint(), Some("hint 3 for 3"));
}

#[tokio::test]
async fn test_toggle_discards_round_and_loads_new_language() {
    let oracle = ScriptedOracle::with_words(&["cat", "แมว"])
        .verdict("dog", GuessVerdict::accepted(Score::new(40), "🐶", None));
    let (mut game, _) = started(oracle, Language::English).await;
    submit(&mut game, "dog").await;

    let mut snapshots = game.subscribe();
    game.dispatch(Intent::ToggleLanguage);
    assert_eq!(snapshots.borrow_and_update().phase(), Phase::Loading);

    game.settle().await;
    let snapshot = snapshots.borrow_and_update().clone();
    assert_eq!(snapshot.language(), Language::Thai);
    assert_eq!(snapshot.phase(), Phase::Playing);
    assert_eq!(snapshot.target_word(), Some("แมว"));
    assert!(snapshot.history().is_empty());
}

#[tokio::test]
async fn test_skip_while_loading_ignores_first_word() {
    let oracle = Arc::new(ScriptedOracle::with_words(&["first", "second"]));
    let mut game = Game::new(Arc::clone(&oracle), Language::English);

    game.dispatch(Intent::StartRound);
    game.dispatch(Intent::StartRound);
    game.settle().await;

    assert_eq!(game.session().round(), 2);
    assert_eq!(game.session().phase(), Phase::Playing);
    let target = game.session().target_word().unwrap_or_default().to_string();
    assert!(target == "first" || target == "second");
}

#[tokio::test]
async fn test_panicking_oracle_releases_submission_guard() {
    let oracle = ScriptedOracle {
        panic_on_evaluate: true,
        ..ScriptedOracle::with_words(&["cat"])
    };
    let (mut game, _) = started(oracle, Language::English).await;

    submit(&mut game, "dog").await;

    let session = game.session();
    assert!(!session.pending_submission());
    assert_eq!(session.notice(), Some(Notice::InvalidGuess));
    assert_eq!(session.phase(), Phase::Playing);
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_give_up_is_published() {
    let (mut game, _) = started(ScriptedOracle::with_words(&["cat"]), Language::English).await;
    let snapshots = game.subscribe();

    game.dispatch(Intent::GiveUp);

    let snapshot = snapshots.borrow();
    assert_eq!(snapshot.phase(), Phase::Lost);
    assert_eq!(snapshot.history().len(), 1);
    assert_eq!(snapshot.history()[0].word(), "cat");
}
