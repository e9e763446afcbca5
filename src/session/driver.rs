// src/session/driver.rs
//
// Real-time runner for `QuizSession`: a one-second cooperative tick
// raced against the player's answer channel.

use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use super::{Phase, QUESTION_TIME_SECS, QuizSession, QuizSummary, REVEAL_DELAY_MS, SessionError};
use crate::models::question::PlayQuestion;

/// Progress notifications emitted while a session runs.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A new question is up and its countdown has started.
    Question {
        index: usize,
        total: usize,
        text: String,
        options: Vec<String>,
        theme: String,
        remaining: u32,
    },
    /// One second elapsed without an answer.
    Countdown { remaining: u32 },
    /// An answer (or the timeout sentinel) was recorded.
    Outcome {
        chosen_index: i64,
        correct_index: i64,
        correct: bool,
        score: u32,
    },
    /// The deck is exhausted.
    Complete { summary: QuizSummary },
}

/// Drives a session to completion.
///
/// Answers arrive over `answers`; progress goes out over `events`. The
/// countdown timer for a question is dropped the moment an answer wins
/// the race, so no stale timeout fires after the question has advanced.
/// Answers landing during the reveal delay are discarded rather than
/// carried over to the next question. A closed answer channel lets the
/// remaining countdowns run out on their own.
pub async fn run(
    questions: Vec<PlayQuestion>,
    mut answers: mpsc::Receiver<i64>,
    events: mpsc::Sender<SessionEvent>,
) -> Result<QuizSummary, SessionError> {
    let mut session = QuizSession::new(questions)?;
    let total = session.total();
    let mut input_open = true;

    loop {
        if let Some(q) = session.current_question() {
            let _ = events
                .send(SessionEvent::Question {
                    index: session.position(),
                    total,
                    text: q.text.clone(),
                    options: q.options.clone(),
                    theme: q.theme.clone(),
                    remaining: QUESTION_TIME_SECS,
                })
                .await;
        }

        while matches!(session.phase(), Phase::Waiting { .. }) {
            tokio::select! {
                _ = sleep(Duration::from_secs(1)) => {
                    session.tick();
                    if let Phase::Waiting { remaining } = session.phase() {
                        let _ = events.send(SessionEvent::Countdown { remaining }).await;
                    }
                }
                chosen = answers.recv(), if input_open => {
                    match chosen {
                        Some(index) => {
                            session.choose(index);
                        }
                        // Player went away; let the countdown play out.
                        None => input_open = false,
                    }
                }
            }
        }

        if let Some(detail) = session.details().last() {
            let _ = events
                .send(SessionEvent::Outcome {
                    chosen_index: detail.chosen_index,
                    correct_index: detail.correct_index,
                    correct: detail.is_correct(),
                    score: session.score(),
                })
                .await;
        }

        sleep(Duration::from_millis(REVEAL_DELAY_MS)).await;

        // Clicks that landed during the reveal belong to no question.
        while answers.try_recv().is_ok() {}

        if let Some(summary) = session.advance() {
            let _ = events
                .send(SessionEvent::Complete {
                    summary: summary.clone(),
                })
                .await;
            return Ok(summary);
        }
    }
}
