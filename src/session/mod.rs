// src/session/mod.rs
//
// One play-through of the quiz: a fixed deck of presentation questions,
// a per-question countdown, and a summary once the deck is exhausted.

pub mod driver;
pub mod result;

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::models::question::PlayQuestion;

/// Countdown per question, in seconds.
pub const QUESTION_TIME_SECS: u32 = 15;

/// Pause after an answer is revealed before the next question loads.
pub const REVEAL_DELAY_MS: u64 = 900;

/// Sentinel choice recorded when the countdown runs out.
pub const TIMED_OUT: i64 = -1;

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The question deck was empty; there is nothing to play.
    EmptyDeck,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyDeck => write!(f, "no questions available"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Per-question outcome record. Carries the full question context so a
/// review screen can be rendered from the summary alone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDetail {
    pub question: String,
    pub chosen_index: i64,
    pub correct_index: i64,
    pub options: Vec<String>,
    pub explanation: Option<String>,
    pub theme: String,
}

impl AnswerDetail {
    pub fn is_correct(&self) -> bool {
        self.chosen_index == self.correct_index
    }
}

/// Final result of a completed session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub score: u32,
    pub total: u32,

    /// Seconds elapsed from session start to the last answer's reveal.
    pub time_taken: u64,

    pub details: Vec<AnswerDetail>,
}

/// Where the session stands on the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Countdown running, no answer yet.
    Waiting { remaining: u32 },
    /// An answer (or the timeout sentinel) has been recorded.
    Answered { chosen: i64 },
    /// Every question has been played.
    Complete,
}

/// State machine for one play-through.
///
/// Exactly one answer is accepted per question. Once an answer is
/// recorded the countdown stops; further choices and ticks are ignored
/// until the session advances to the next question.
pub struct QuizSession {
    questions: Vec<PlayQuestion>,
    current: usize,
    score: u32,
    details: Vec<AnswerDetail>,
    started_at: Instant,
    phase: Phase,
}

impl QuizSession {
    pub fn new(questions: Vec<PlayQuestion>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        Ok(Self {
            questions,
            current: 0,
            score: 0,
            details: Vec::new(),
            started_at: Instant::now(),
            phase: Phase::Waiting {
                remaining: QUESTION_TIME_SECS,
            },
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Index of the question currently being played.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn details(&self) -> &[AnswerDetail] {
        &self.details
    }

    pub fn current_question(&self) -> Option<&PlayQuestion> {
        self.questions.get(self.current)
    }

    /// Records the player's choice. Returns false when no answer can be
    /// accepted right now (already answered, or session complete).
    pub fn choose(&mut self, index: i64) -> bool {
        match self.phase {
            Phase::Waiting { .. } => {
                self.record(index);
                true
            }
            _ => false,
        }
    }

    /// Advances the countdown by one second. At zero the question is
    /// recorded as timed out. Ticks outside Waiting are ignored.
    pub fn tick(&mut self) {
        let Phase::Waiting { remaining } = self.phase else {
            return;
        };
        if remaining <= 1 {
            self.record(TIMED_OUT);
        } else {
            self.phase = Phase::Waiting {
                remaining: remaining - 1,
            };
        }
    }

    /// Moves past an answered question. Returns the summary when the
    /// deck is exhausted, `None` while questions remain.
    pub fn advance(&mut self) -> Option<QuizSummary> {
        let Phase::Answered { .. } = self.phase else {
            return None;
        };
        self.current += 1;
        if self.current < self.questions.len() {
            self.phase = Phase::Waiting {
                remaining: QUESTION_TIME_SECS,
            };
            None
        } else {
            self.phase = Phase::Complete;
            Some(QuizSummary {
                score: self.score,
                total: self.questions.len() as u32,
                time_taken: self.started_at.elapsed().as_secs_f64().round() as u64,
                details: self.details.clone(),
            })
        }
    }

    fn record(&mut self, chosen: i64) {
        let q = &self.questions[self.current];
        if chosen == q.correct_index {
            self.score += 1;
        }
        self.details.push(AnswerDetail {
            question: q.text.clone(),
            chosen_index: chosen,
            correct_index: q.correct_index,
            options: q.options.clone(),
            explanation: q.explanation.clone(),
            theme: q.theme.clone(),
        });
        self.phase = Phase::Answered { chosen };
    }
}
