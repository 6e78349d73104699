//! End-to-end runs of the session loop on a logical clock.

use std::cell::Cell;

use feed_core::{
    GameEvent, GameSession, JsonFileStatsStore, PostSource, QuestionKind, SessionError, Verdict,
    STATS_KEY,
};
use feed_rules::{CampaignKind, FallacyKind, GameConfig, GeneratedPost};
use rand::RngCore;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Alternates state-sponsored and domestic political campaign posts.
struct CampaignFeed {
    served: Cell<u32>,
}

impl CampaignFeed {
    fn new() -> Self {
        Self { served: Cell::new(0) }
    }
}

impl PostSource for CampaignFeed {
    fn next_post(&self, _level: u32, now_ms: u64, _rng: &mut dyn RngCore) -> GeneratedPost {
        let n = self.served.get();
        self.served.set(n + 1);
        let kind = if n % 2 == 0 {
            CampaignKind::StateSponsored
        } else {
            CampaignKind::DomesticPolitical
        };
        GeneratedPost::campaign(
            kind,
            "ConcernedCitizen",
            "This is an urgent crisis and nobody is talking about it.",
            FallacyKind::AppealEmotion,
        )
        .with_timestamp(now_ms, "Just now")
    }
}

/// Serves the same fallacy forever.
struct SteadyFeed(FallacyKind);

impl PostSource for SteadyFeed {
    fn next_post(&self, _level: u32, now_ms: u64, _rng: &mut dyn RngCore) -> GeneratedPost {
        GeneratedPost::regular("Tester", "Same post again.", self.0).with_timestamp(now_ms, "Just now")
    }
}

/// Answer every post correctly until a quiz opens. Returns the clock and
/// the events seen.
fn play_until_quiz(session: &mut GameSession) -> (u64, Vec<GameEvent>) {
    let mut now = 0;
    let mut seen = Vec::new();
    session.start(now);

    for _ in 0..500 {
        now = session.next_deadline().expect("a timer should be pending");
        let events = session.advance(now);
        let spawned = events
            .iter()
            .any(|event| matches!(event, GameEvent::PostSpawned { .. }));
        let quiz = events
            .iter()
            .any(|event| matches!(event, GameEvent::QuizStarted(_)));
        seen.extend(events);

        if quiz {
            return (now, seen);
        }
        if spawned {
            session
                .submit_verdict(Verdict::new(FallacyKind::AppealEmotion, 1.0), now)
                .expect("verdict should be accepted");
            seen.extend(session.take_events());
        }
    }
    panic!("quiz never started");
}

#[test]
fn test_quiz_interlude_suspends_play() {
    init_tracing();
    let mut session = GameSession::new(GameConfig::default().with_seed(1)).with_source(CampaignFeed::new());

    let (now, seen) = play_until_quiz(&mut session);
    let level_ups = seen
        .iter()
        .filter(|event| matches!(event, GameEvent::LevelUp { .. }))
        .count();
    assert!(level_ups >= 2);
    for event in &seen {
        if let GameEvent::PostSpawned { post, hint, .. } = event {
            let hint = hint.as_ref().expect("campaign posts carry a hint");
            assert_eq!(Some(hint.campaign), post.campaign_kind());
        }
    }
    assert!(session.state().level >= 3);
    assert!(session.in_quiz());
    assert!(session.state().lives == 3);

    let question = session.active_quiz().cloned().expect("quiz should be open");
    assert_eq!(question.kind, QuestionKind::EmotionalTarget);
    assert_eq!(question.correct_index, 0);

    // Nothing moves while the question is open.
    assert_eq!(session.next_deadline(), None);
    assert!(session.advance(now + 60_000).is_empty());
    assert_eq!(
        session.submit_verdict(Verdict::new(FallacyKind::AppealEmotion, 1.0), now + 60_000),
        Ok(None)
    );

    let score_before = session.state().score;
    let result = session.answer_quiz(question.correct_index, now + 60_000).unwrap();
    assert!(result.correct);
    assert_eq!(session.state().score, score_before + 25);
    assert!(!session.in_quiz());
    assert_eq!(session.answer_time_remaining(now + 60_000), Some(15_000));

    let outcome = session
        .submit_verdict(Verdict::new(FallacyKind::AppealEmotion, 1.0), now + 61_000)
        .unwrap()
        .expect("the pending post should be judged");
    assert!(outcome.correct);
}

#[test]
fn test_player_pause_outlasts_quiz() {
    init_tracing();
    let mut session = GameSession::new(GameConfig::default().with_seed(2)).with_source(CampaignFeed::new());
    let (now, _) = play_until_quiz(&mut session);

    session.pause(now + 1000);
    let question = session.active_quiz().cloned().expect("quiz should be open");
    let wrong = (question.correct_index + 1) % question.options.len();
    let result = session.answer_quiz(wrong, now + 2000).unwrap();
    assert!(!result.correct);
    assert_eq!(result.points_awarded, 0);

    assert!(session.is_paused());
    assert_eq!(session.next_deadline(), None);

    session.resume(now + 5000);
    assert!(!session.is_paused());
    assert_eq!(session.answer_time_remaining(now + 5000), Some(15_000));
    assert!(session.next_deadline().is_some());
}

#[test]
fn test_invalid_quiz_answer_keeps_quiz_open() {
    init_tracing();
    let mut session = GameSession::new(GameConfig::default().with_seed(3)).with_source(CampaignFeed::new());
    let (now, _) = play_until_quiz(&mut session);

    assert_eq!(
        session.answer_quiz(9, now),
        Err(SessionError::InvalidQuizAnswer(9))
    );
    assert!(session.in_quiz());
}

#[test]
fn test_game_over_writes_stats_file() {
    init_tracing();
    let dir = std::env::temp_dir().join(format!("feed_core_flow_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut session = GameSession::new(GameConfig::default().with_seed(4))
        .with_source(SteadyFeed(FallacyKind::Strawman))
        .with_stats_store(JsonFileStatsStore::new(&dir));
    session.start(0);

    let mut summary = None;
    while let Some(deadline) = session.next_deadline() {
        for event in session.advance(deadline) {
            if let GameEvent::GameOver(s) = event {
                summary = Some(s);
            }
        }
    }

    let summary = summary.expect("game should end");
    assert_eq!(summary.final_level, 1);
    assert_eq!(summary.most_missed, Some(FallacyKind::Strawman));

    let saved = session.saved_stats().expect("stats should be saved");
    assert_eq!(saved.total_missed, 30);
    assert!(dir.join(format!("{STATS_KEY}.json")).exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_seeded_sessions_generate_the_same_feed() {
    init_tracing();

    let feed = |seed: u64| {
        let mut session = GameSession::new(GameConfig::default().with_seed(seed));
        session.start(0);
        let mut posts = Vec::new();
        while posts.len() < 20 {
            let Some(deadline) = session.next_deadline() else {
                break;
            };
            for event in session.advance(deadline) {
                if let GameEvent::PostSpawned { post, .. } = event {
                    posts.push((post.username, post.content, post.fallacy));
                }
            }
        }
        posts
    };

    let first = feed(99);
    assert_eq!(first.len(), 20);
    assert_eq!(first, feed(99));
}
