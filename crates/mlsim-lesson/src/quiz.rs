//! Algorithm-vs-model analogy quiz.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::QuizError;

/// Which side of the algorithm/model distinction an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalogyChoice {
    Algorithm,
    Model,
}

impl AnalogyChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Algorithm => "Algorithm",
            Self::Model => "Model",
        }
    }
}

impl fmt::Display for AnalogyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalogyChoice {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "algorithm" => Ok(Self::Algorithm),
            "model" => Ok(Self::Model),
            _ => Err(QuizError::UnknownChoice(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analogy {
    pub pair: [&'static str; 2],
    pub answer: [AnalogyChoice; 2],
    pub explanation: &'static str,
}

impl Analogy {
    /// Position of `item` in the pair, ignoring ASCII case.
    pub fn position(&self, item: &str) -> Option<usize> {
        self.pair
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(item.trim()))
    }
}

pub const ANALOGIES: [Analogy; 3] = [
    Analogy {
        pair: ["Recipe", "Cake"],
        answer: [AnalogyChoice::Algorithm, AnalogyChoice::Model],
        explanation: "A recipe (algorithm) provides the step-by-step instructions, while the \
                      finished cake (model) is the result of following those instructions with \
                      specific ingredients (data).",
    },
    Analogy {
        pair: ["Blueprint", "House"],
        answer: [AnalogyChoice::Algorithm, AnalogyChoice::Model],
        explanation: "The blueprint (algorithm) is the design and plan, whereas the actual house \
                      (model) is the structure built from that plan using materials (data).",
    },
    Analogy {
        pair: ["Training Regimen", "Athlete's Skill"],
        answer: [AnalogyChoice::Algorithm, AnalogyChoice::Model],
        explanation: "A training regimen (algorithm) is the process of exercises and drills. The \
                      athlete's learned skill (model) is the outcome of that training.",
    },
];

/// Outcome of checking an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub correct: bool,
    pub explanation: &'static str,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        if self.correct {
            "Correct!"
        } else {
            "Not quite, here is the explanation:"
        }
    }
}

/// Cycles through [`ANALOGIES`], one answer per analogy.
///
/// Selections are frozen once the answer has been checked; [`next`](Self::next)
/// clears them and moves on, wrapping after the last analogy.
#[derive(Debug, Clone, Default)]
pub struct AnalogyQuiz {
    index: usize,
    selections: [Option<AnalogyChoice>; 2],
    feedback: Option<Feedback>,
}

impl AnalogyQuiz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the analogy with zero-based `index`, wrapping around.
    pub fn starting_at(index: usize) -> Self {
        Self {
            index: index % ANALOGIES.len(),
            ..Self::default()
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Analogy {
        &ANALOGIES[self.index]
    }

    pub fn selection(&self, item: &str) -> Option<AnalogyChoice> {
        self.current()
            .position(item)
            .and_then(|idx| self.selections[idx])
    }

    pub fn select(&mut self, item: &str, choice: AnalogyChoice) -> Result<(), QuizError> {
        if self.feedback.is_some() {
            return Err(QuizError::AlreadyChecked);
        }
        let idx = self
            .current()
            .position(item)
            .ok_or_else(|| QuizError::UnknownItem {
                item: item.to_string(),
            })?;
        self.selections[idx] = Some(choice);
        Ok(())
    }

    pub fn can_check(&self) -> bool {
        self.feedback.is_none() && self.selections.iter().all(Option::is_some)
    }

    pub fn check(&mut self) -> Result<Feedback, QuizError> {
        if self.feedback.is_some() {
            return Err(QuizError::AlreadyChecked);
        }
        if !self.selections.iter().all(Option::is_some) {
            return Err(QuizError::IncompleteSelection);
        }
        let analogy = self.current();
        let correct = self
            .selections
            .iter()
            .zip(analogy.answer)
            .all(|(selected, expected)| *selected == Some(expected));
        let feedback = Feedback {
            correct,
            explanation: analogy.explanation,
        };
        debug!(analogy = self.index, correct, "analogy answer checked");
        self.feedback = Some(feedback);
        Ok(feedback)
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Clear selections and feedback and move to the following analogy.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % ANALOGIES.len();
        self.selections = [None; 2];
        self.feedback = None;
    }
}
