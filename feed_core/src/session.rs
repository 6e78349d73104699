//! Game Session - the timed loop that drives one run.
//!
//! The loop runs on a logical millisecond clock supplied by the caller and
//! never blocks:
//! 1. **Spawn**: a post is generated, passed through the detector, recorded
//!    by the campaign tracker and given its answer window
//! 2. **Judgment**: a verdict or the answer-window timeout settles the post
//! 3. **Progression**: level-up check, difficulty recalibration, combo timer
//! 4. **Next spawn**: armed only once the pending post is settled
//!
//! Events produced along the way queue up and are handed out by
//! [`GameSession::advance`] or [`GameSession::take_events`].

use feed_rules::{
    check_level_up, judge, judge_timeout, recalibrate, FallacyKind, GameConfig, GeneratedPost,
    Outcome, RulesError, SessionState, StatsSnapshot,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analysis::{select_question, Question, QuizResult};
use crate::detector::{FallacyDetector, NullDetector};
use crate::error::SessionError;
use crate::events::{GameEvent, GameOverSummary};
use crate::feedback::{CampaignHint, Feedback};
use crate::generator::{PostGenerator, PostSource};
use crate::persistence::{NullStatsStore, StatsStore, STATS_KEY};
use crate::scheduler::{DueTimer, Scheduler, TimerKind};

/// A player's answer to the pending post.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub selected: FallacyKind,
    pub reaction_time_secs: f64,
}

impl Verdict {
    pub fn new(selected: FallacyKind, reaction_time_secs: f64) -> Self {
        Self {
            selected,
            reaction_time_secs,
        }
    }
}

/// Values shown on the heads-up display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub level: u32,
    pub level_threshold: u64,
    pub lives: u32,
    pub shield: u32,
    pub combo: u32,
    pub combo_multiplier: f64,
    pub difficulty: f64,
    pub difficulty_bars: u32,
    pub shows_fallacy_cue: bool,
    pub spawn_interval_ms: u64,
    pub paused: bool,
    pub in_quiz: bool,
    pub game_over: bool,
}

/// One run of the game with its injected dependencies.
pub struct GameSession {
    config: GameConfig,
    rng: Box<dyn RngCore>,
    source: Box<dyn PostSource>,
    detector: Box<dyn FallacyDetector>,
    store: Box<dyn StatsStore>,

    state: SessionState,
    scheduler: Scheduler,
    active_post: Option<GeneratedPost>,
    active_quiz: Option<Question>,
    user_paused: bool,
    started: bool,
    clock_ms: u64,
    outbox: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session with the built-in generator, no detector and no
    /// stats persistence. The RNG is seeded from `config.seed` when set.
    pub fn new(config: GameConfig) -> Self {
        let rng: Box<dyn RngCore> = match config.seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(ChaCha8Rng::from_entropy()),
        };
        let state = SessionState::new(&config);

        Self {
            config,
            rng,
            source: Box::new(PostGenerator::with_defaults()),
            detector: Box::new(NullDetector),
            store: Box::new(NullStatsStore),
            state,
            scheduler: Scheduler::new(),
            active_post: None,
            active_quiz: None,
            user_paused: false,
            started: false,
            clock_ms: 0,
            outbox: Vec::new(),
        }
    }

    /// Create a session with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GameConfig::default())
    }

    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_source(mut self, source: impl PostSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn with_detector(mut self, detector: impl FallacyDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn with_stats_store(mut self, store: impl StatsStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn active_post(&self) -> Option<&GeneratedPost> {
        self.active_post.as_ref()
    }

    pub fn active_quiz(&self) -> Option<&Question> {
        self.active_quiz.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Paused by the player. A running quiz is reported by [`Self::in_quiz`].
    pub fn is_paused(&self) -> bool {
        self.user_paused
    }

    pub fn in_quiz(&self) -> bool {
        self.active_quiz.is_some()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Earliest armed timer deadline, for callers that sleep until it.
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    /// Time left to answer the pending post.
    pub fn answer_time_remaining(&self, now_ms: u64) -> Option<u64> {
        self.scheduler.remaining(TimerKind::AnswerWindow, now_ms)
    }

    /// Arm the first spawn. Starting twice is a no-op.
    pub fn start(&mut self, now_ms: u64) {
        if self.started {
            debug!(session = %self.state.id, "Session already started");
            return;
        }
        self.started = true;
        self.clock_ms = now_ms;

        let delay = if self.state.level == 1 {
            self.config.timing.first_spawn_delay_ms
        } else {
            self.config.timing.resume_spawn_delay_ms
        };
        self.scheduler.schedule(TimerKind::Spawn, now_ms, delay);

        info!(
            session = %self.state.id,
            level = self.state.level,
            first_spawn_ms = delay,
            "Session started"
        );
    }

    /// Fire every timer due at or before `now_ms`, each at its own deadline,
    /// and return all events produced since the last call.
    pub fn advance(&mut self, now_ms: u64) -> Vec<GameEvent> {
        self.fire_due(now_ms);
        self.take_events()
    }

    /// Drain queued events without touching the clock.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        let events = std::mem::take(&mut self.outbox);
        for event in &events {
            debug!(session = %self.state.id, event = event.name(), "Emitting event");
        }
        events
    }

    /// Judge the pending post.
    ///
    /// Returns `Ok(None)` when there is nothing to judge: no pending post,
    /// a player pause, or a quiz in progress.
    pub fn submit_verdict(
        &mut self,
        verdict: Verdict,
        now_ms: u64,
    ) -> Result<Option<Outcome>, SessionError> {
        if self.state.is_over() {
            return Err(RulesError::SessionOver.into());
        }
        if !self.started {
            return Err(SessionError::NotStarted);
        }

        // Timers that lapsed before the verdict settle first.
        self.fire_due(now_ms);
        if self.state.is_over() {
            return Err(RulesError::SessionOver.into());
        }

        if self.user_paused || self.active_quiz.is_some() {
            debug!(
                paused = self.user_paused,
                in_quiz = self.active_quiz.is_some(),
                "Verdict ignored while suspended"
            );
            return Ok(None);
        }
        let Some(post) = self.active_post.as_mut() else {
            debug!("Verdict ignored with no pending post");
            return Ok(None);
        };

        let outcome = judge(
            post,
            verdict.selected,
            verdict.reaction_time_secs,
            &mut self.state,
        )?;
        self.scheduler.cancel(TimerKind::AnswerWindow);

        if let Some(post) = self.active_post.take() {
            self.outbox.push(GameEvent::PostJudged {
                feedback: Feedback::for_judgment(&outcome, &post),
                outcome: outcome.clone(),
            });
        }
        self.settle(&outcome, now_ms);

        Ok(Some(outcome))
    }

    /// Suspend every pending timer.
    pub fn pause(&mut self, now_ms: u64) {
        if !self.started || self.state.is_over() || self.user_paused {
            return;
        }
        self.fire_due(now_ms);
        if self.state.is_over() {
            return;
        }
        self.user_paused = true;
        self.scheduler.pause(now_ms);
        info!(session = %self.state.id, "Session paused");
    }

    /// Resume with the remaining durations. A quiz in progress keeps the
    /// timers suspended until it is answered.
    pub fn resume(&mut self, now_ms: u64) {
        if !self.user_paused {
            return;
        }
        self.user_paused = false;
        self.clock_ms = self.clock_ms.max(now_ms);
        if self.active_quiz.is_none() {
            self.scheduler.resume(now_ms);
        }
        info!(session = %self.state.id, "Session resumed");
    }

    /// Answer the open quiz question and resume play unless the player has
    /// paused.
    pub fn answer_quiz(&mut self, index: usize, now_ms: u64) -> Result<QuizResult, SessionError> {
        let question = self.active_quiz.as_ref().ok_or(SessionError::NoActiveQuiz)?;
        let result = question.answer(index, u64::from(self.config.quiz.bonus))?;

        self.active_quiz = None;
        self.state.score += result.points_awarded;
        self.clock_ms = self.clock_ms.max(now_ms);
        if !self.user_paused {
            self.scheduler.resume(now_ms);
        }

        info!(
            question = ?result.kind,
            correct = result.correct,
            bonus = result.points_awarded,
            "Quiz answered"
        );
        self.outbox.push(GameEvent::QuizAnswered(result.clone()));

        Ok(result)
    }

    /// Start over with a fresh state, keeping the injected dependencies.
    pub fn reset(&mut self) {
        self.state = SessionState::new(&self.config);
        self.scheduler = Scheduler::new();
        self.active_post = None;
        self.active_quiz = None;
        self.user_paused = false;
        self.started = false;
        self.clock_ms = 0;
        self.outbox.clear();
        info!(session = %self.state.id, "Session reset");
    }

    pub fn snapshot(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.state.score,
            level: self.state.level,
            level_threshold: self.state.level_threshold(),
            lives: self.state.lives,
            shield: self.state.shield,
            combo: self.state.combo,
            combo_multiplier: self.state.combo_multiplier,
            difficulty: self.state.difficulty,
            difficulty_bars: self.state.difficulty_bars(),
            shows_fallacy_cue: self.state.shows_fallacy_cue(),
            spawn_interval_ms: self.state.spawn_interval_ms,
            paused: self.user_paused,
            in_quiz: self.active_quiz.is_some(),
            game_over: self.state.is_over(),
        }
    }

    /// Statistics saved by a previous run, if the store has any.
    pub fn saved_stats(&self) -> Option<StatsSnapshot> {
        match self.store.load(STATS_KEY) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Failed to load saved stats");
                None
            }
        }
    }

    fn fire_due(&mut self, now_ms: u64) {
        if !self.started {
            return;
        }
        while let Some(due) = self.scheduler.pop_due(now_ms) {
            self.clock_ms = self.clock_ms.max(due.deadline_ms);
            self.fire(due);
        }
        self.clock_ms = self.clock_ms.max(now_ms);
    }

    fn fire(&mut self, due: DueTimer) {
        if self.state.is_over() {
            return;
        }
        match due.kind {
            TimerKind::Spawn => self.spawn(due.deadline_ms),
            TimerKind::AnswerWindow => self.expire_post(due.deadline_ms),
            TimerKind::ComboDecay => {
                self.state.reset_combo();
                debug!(session = %self.state.id, "Combo expired");
                self.outbox.push(GameEvent::ComboExpired);
            }
        }
    }

    fn spawn(&mut self, now_ms: u64) {
        if self.active_post.is_some() {
            warn!(session = %self.state.id, "Spawn fired with a post still pending");
            return;
        }

        let post = self
            .source
            .next_post(self.state.level, now_ms, self.rng.as_mut());
        let detections = self.detector.detect(&post.content);
        self.state.tracker.record(&post);
        self.scheduler.schedule(
            TimerKind::AnswerWindow,
            now_ms,
            self.config.timing.answer_window_ms,
        );

        debug!(
            post = %post.id,
            fallacy = post.fallacy.as_str(),
            campaign = post.campaign_kind().map(|kind| kind.as_str()),
            detections = detections.len(),
            "Spawned post"
        );
        self.outbox.push(GameEvent::PostSpawned {
            hint: post.campaign_kind().map(CampaignHint::for_campaign),
            post: post.clone(),
            detections,
        });
        self.active_post = Some(post);

        if self.state.tracker.trigger(self.state.level) {
            let recent = self.state.tracker.recent(self.config.quiz.recent_window);
            let question = select_question(recent);
            self.scheduler.pause(now_ms);

            info!(
                level = self.state.level,
                question = ?question.kind,
                campaign_posts = self.state.tracker.records.len(),
                "Quiz started"
            );
            self.outbox.push(GameEvent::QuizStarted(question.clone()));
            self.active_quiz = Some(question);
        }
    }

    fn expire_post(&mut self, now_ms: u64) {
        let Some(mut post) = self.active_post.take() else {
            return;
        };
        match judge_timeout(&mut post, &mut self.state) {
            Ok(outcome) => {
                self.outbox.push(GameEvent::PostMissed {
                    feedback: Feedback::for_timeout(&post),
                    outcome: outcome.clone(),
                });
                self.settle(&outcome, now_ms);
            }
            Err(e) => warn!(post = %post.id, error = %e, "Timeout judgment rejected"),
        }
    }

    /// Shared follow-up of a verdict or timeout.
    fn settle(&mut self, outcome: &Outcome, now_ms: u64) {
        if outcome.life_lost {
            info!(lives = self.state.lives, "Life lost");
            self.outbox.push(GameEvent::LifeLost {
                lives_left: self.state.lives,
            });
        }
        if self.state.is_over() {
            self.finish();
            return;
        }

        if outcome.combo_after == 0 {
            self.scheduler.cancel(TimerKind::ComboDecay);
        } else if !outcome.timed_out {
            self.scheduler.schedule(
                TimerKind::ComboDecay,
                now_ms,
                self.config.timing.combo_window_ms,
            );
        }

        recalibrate(&mut self.state);
        let spawn_delay = match check_level_up(&mut self.state) {
            Some(level_up) => {
                self.scheduler.cancel(TimerKind::ComboDecay);
                self.outbox.push(GameEvent::LevelUp {
                    feedback: Feedback::for_level_up(&level_up),
                    level_up,
                });
                self.config.timing.resume_spawn_delay_ms
            }
            None => self.state.spawn_interval_ms,
        };
        self.scheduler.schedule(TimerKind::Spawn, now_ms, spawn_delay);
    }

    fn finish(&mut self) {
        self.scheduler.clear();
        self.active_post = None;
        self.active_quiz = None;

        let summary = GameOverSummary::from_state(&self.state);
        if let Err(e) = self.store.save(STATS_KEY, &self.state.stats.snapshot()) {
            warn!(error = %e, "Failed to save stats");
        }

        info!(
            session = %self.state.id,
            score = summary.final_score,
            level = summary.final_level,
            most_missed = %summary.most_missed_name,
            "Game over"
        );
        self.outbox.push(GameEvent::GameOver(summary));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStatsStore;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Serves a fixed sequence of labels, repeating the last one.
    struct ScriptedSource {
        labels: Vec<FallacyKind>,
        served: Cell<usize>,
    }

    impl ScriptedSource {
        fn new(labels: &[FallacyKind]) -> Self {
            Self {
                labels: labels.to_vec(),
                served: Cell::new(0),
            }
        }
    }

    impl PostSource for ScriptedSource {
        fn next_post(&self, _level: u32, now_ms: u64, _rng: &mut dyn RngCore) -> GeneratedPost {
            let index = self.served.get().min(self.labels.len() - 1);
            self.served.set(self.served.get() + 1);
            GeneratedPost::regular("Tester", "scripted post", self.labels[index])
                .with_timestamp(now_ms, "Just now")
        }
    }

    fn session(labels: &[FallacyKind]) -> GameSession {
        GameSession::new(GameConfig::default().with_seed(7)).with_source(ScriptedSource::new(labels))
    }

    /// Start and run until the first post is up.
    fn started(labels: &[FallacyKind]) -> GameSession {
        let mut session = session(labels);
        session.start(0);
        let events = session.advance(6000);
        assert!(matches!(events.as_slice(), [GameEvent::PostSpawned { .. }]));
        session
    }

    #[test]
    fn test_first_spawn_waits_for_delay() {
        let mut session = session(&[FallacyKind::Strawman]);
        session.start(0);
        assert!(session.advance(5999).is_empty());
        assert!(session.active_post().is_none());

        session.advance(6000);
        assert_eq!(session.active_post().map(|post| post.created_at_ms), Some(6000));
        assert_eq!(session.answer_time_remaining(6000), Some(15000));
    }

    #[test]
    fn test_verdict_before_start() {
        let mut session = session(&[FallacyKind::Strawman]);
        let result = session.submit_verdict(Verdict::new(FallacyKind::Strawman, 1.0), 0);
        assert_eq!(result, Err(SessionError::NotStarted));
    }

    #[test]
    fn test_correct_verdict_scores_and_arms_next_spawn() {
        let mut session = started(&[FallacyKind::Strawman]);

        let outcome = session
            .submit_verdict(Verdict::new(FallacyKind::Strawman, 0.0), 6000)
            .unwrap()
            .unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.points_awarded, 15);
        assert!(session.active_post().is_none());
        assert_eq!(session.state().combo, 1);

        let events = session.take_events();
        assert!(matches!(events.as_slice(), [GameEvent::PostJudged { .. }]));

        let interval = session.state().spawn_interval_ms;
        assert!(session.advance(6000 + interval - 1).is_empty());
        let events = session.advance(6000 + interval);
        assert!(matches!(events.as_slice(), [GameEvent::PostSpawned { .. }]));
    }

    #[test]
    fn test_level_up_judgment_recalibrates_twice() {
        let mut session = started(&[FallacyKind::Strawman]);
        session.state.score = 95;
        session.state.correct_streak = 5;
        session.state.stats.total_encountered = 5;
        session.state.difficulty = 1.0;

        session
            .submit_verdict(Verdict::new(FallacyKind::Strawman, 8.0), 6000)
            .unwrap()
            .unwrap();
        assert_eq!(session.state().level, 2);
        assert!((session.state().difficulty - 1.4).abs() < 1e-9);

        let events = session.take_events();
        match events.as_slice() {
            [GameEvent::PostJudged { .. }, GameEvent::LevelUp { level_up, feedback }] => {
                assert_eq!(level_up.new_level, 2);
                assert_eq!(feedback.header, "Level 2");
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn test_regular_posts_spawn_without_hint() {
        let mut session = session(&[FallacyKind::Strawman]);
        session.start(0);
        match session.advance(6000).as_slice() {
            [GameEvent::PostSpawned { hint, .. }] => assert!(hint.is_none()),
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn test_no_pending_post_is_a_no_op() {
        let mut session = session(&[FallacyKind::Strawman]);
        session.start(0);
        let result = session.submit_verdict(Verdict::new(FallacyKind::Strawman, 1.0), 100);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_invalid_reaction_time_keeps_post_pending() {
        let mut session = started(&[FallacyKind::Strawman]);
        let result = session.submit_verdict(Verdict::new(FallacyKind::Strawman, -1.0), 6000);
        assert_eq!(
            result,
            Err(SessionError::Rules(RulesError::InvalidReactionTime(-1.0)))
        );
        assert!(session.active_post().is_some());
    }

    #[test]
    fn test_timeout_costs_shield() {
        let mut session = started(&[FallacyKind::Strawman]);

        let events = session.advance(21000);
        match events.as_slice() {
            [GameEvent::PostMissed { outcome, feedback }] => {
                assert!(outcome.timed_out);
                assert!(!outcome.correct);
                assert!(feedback.is_some());
            }
            other => panic!("unexpected events: {other:?}"),
        }
        assert_eq!(session.state().shield, 90);
    }

    #[test]
    fn test_late_verdict_loses_to_timeout() {
        let mut session = started(&[FallacyKind::Strawman]);
        let result = session.submit_verdict(Verdict::new(FallacyKind::Strawman, 16.0), 22000);
        assert_eq!(result, Ok(None));
        let events = session.take_events();
        assert!(matches!(events[0], GameEvent::PostMissed { .. }));
    }

    #[test]
    fn test_pause_preserves_answer_window() {
        let mut session = started(&[FallacyKind::Strawman]);

        session.pause(10000);
        assert!(session.is_paused());
        assert!(session.advance(100_000).is_empty());
        assert_eq!(
            session.submit_verdict(Verdict::new(FallacyKind::Strawman, 1.0), 100_000),
            Ok(None)
        );

        session.resume(100_000);
        assert_eq!(session.answer_time_remaining(100_000), Some(11000));
        assert!(session.advance(110_999).is_empty());
        assert!(matches!(
            session.advance(111_000).as_slice(),
            [GameEvent::PostMissed { .. }]
        ));
    }

    #[test]
    fn test_combo_decays_after_window() {
        let mut session = started(&[FallacyKind::Strawman, FallacyKind::Strawman]);
        session
            .submit_verdict(Verdict::new(FallacyKind::Strawman, 1.0), 7000)
            .unwrap();
        session.take_events();
        assert_eq!(session.state().combo, 1);

        let events = session.advance(15000);
        assert!(events.contains(&GameEvent::ComboExpired));
        assert_eq!(session.state().combo, 0);
        assert_eq!(session.state().combo_multiplier, 1.0);
    }

    #[test]
    fn test_losing_every_life_ends_the_game() {
        let store = Rc::new(MemoryStatsStore::new());
        let mut session = session(&[FallacyKind::Strawman]).with_stats_store(SharedStore(store.clone()));
        session.start(0);

        let mut now = 0;
        let mut lives_lost = 0;
        let mut summary = None;
        while summary.is_none() && now < 10_000_000 {
            now += 500;
            for event in session.advance(now) {
                match event {
                    GameEvent::LifeLost { .. } => lives_lost += 1,
                    GameEvent::GameOver(s) => summary = Some(s),
                    _ => {}
                }
            }
        }

        let summary = summary.expect("game should end");
        assert_eq!(lives_lost, 3);
        assert!(session.is_over());
        assert_eq!(summary.most_missed, Some(FallacyKind::Strawman));
        assert_eq!(session.next_deadline(), None);
        assert_eq!(
            session.submit_verdict(Verdict::new(FallacyKind::Strawman, 1.0), now),
            Err(SessionError::Rules(RulesError::SessionOver))
        );
        assert_eq!(store.len(), 1);
        assert!(session.saved_stats().is_some());
    }

    #[test]
    fn test_reset_returns_to_fresh_state() {
        let mut session = started(&[FallacyKind::Strawman]);
        session
            .submit_verdict(Verdict::new(FallacyKind::Strawman, 1.0), 7000)
            .unwrap();
        session.reset();

        let hud = session.snapshot();
        assert_eq!(hud.score, 0);
        assert_eq!(hud.level, 1);
        assert_eq!(hud.lives, 3);
        assert_eq!(hud.shield, 100);
        assert!(!session.is_started());
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_answer_quiz_without_quiz() {
        let mut session = started(&[FallacyKind::Strawman]);
        assert_eq!(session.answer_quiz(0, 6000), Err(SessionError::NoActiveQuiz));
    }

    /// Lets a test keep a handle on the store it injects.
    struct SharedStore(Rc<MemoryStatsStore>);

    impl StatsStore for SharedStore {
        fn save(
            &self,
            key: &str,
            snapshot: &StatsSnapshot,
        ) -> Result<(), crate::error::PersistenceError> {
            self.0.save(key, snapshot)
        }

        fn load(&self, key: &str) -> Result<Option<StatsSnapshot>, crate::error::PersistenceError> {
            self.0.load(key)
        }
    }
}
