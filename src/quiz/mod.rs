use anyhow::{anyhow, Result};
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::settings::Settings;

pub mod definition;

pub use definition::{QuizDefinition, QuizQuestion};

#[cfg(test)]
mod tests;

/// Outcome recorded for a question once its answer has been revealed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    Unanswered,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuizView {
    Browsing { selected: Option<u32> },
    AnswerRevealed { selected: Option<u32> },
}

impl Default for QuizView {
    fn default() -> Self {
        QuizView::Browsing { selected: None }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Progress {
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    pub unseen: usize,
}

pub struct QuizBank {
    questions: Vec<QuizQuestion>,
    statuses: HashMap<usize, AnswerStatus>,
    current: usize,
    view: QuizView,
    grid_columns: usize,
    images_dir: PathBuf,
}

impl QuizBank {
    pub fn new(definition: QuizDefinition, settings: &Settings) -> QuizBank {
        QuizBank {
            questions: definition.into_questions(),
            statuses: HashMap::new(),
            current: 0,
            view: QuizView::default(),
            grid_columns: settings.grid_columns.max(1),
            images_dir: settings.images_dir.clone(),
        }
    }

    pub fn empty(settings: &Settings) -> QuizBank {
        QuizBank::new(QuizDefinition::default(), settings)
    }

    pub fn open(source: &Path, settings: &Settings) -> Result<QuizBank> {
        let definition = QuizDefinition::open(source)?;
        Ok(QuizBank::new(definition, settings))
    }

    pub fn records(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    /// First question carrying this id, with its position.
    pub fn by_id(&self, stt: &str) -> Option<(usize, &QuizQuestion)> {
        self.questions
            .iter()
            .enumerate()
            .find(|(_, question)| question.stt == stt)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    pub fn view(&self) -> QuizView {
        self.view
    }

    pub fn status(&self, index: usize) -> Option<AnswerStatus> {
        self.statuses.get(&index).copied()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.questions.len() {
            return Err(anyhow!("There is no question {}", index + 1));
        }
        self.show(index);
        Ok(())
    }

    pub fn next_question(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.show(self.current + 1);
        true
    }

    pub fn previous_question(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.show(self.current - 1);
        true
    }

    /// Moves one row up in the question grid.
    pub fn up(&mut self) -> bool {
        if self.current < self.grid_columns {
            return false;
        }
        self.show(self.current - self.grid_columns);
        true
    }

    /// Moves one row down in the question grid.
    pub fn down(&mut self) -> bool {
        if self.current + self.grid_columns >= self.questions.len() {
            return false;
        }
        self.show(self.current + self.grid_columns);
        true
    }

    /// Picks an answer for the current question. Ignored once the answer is
    /// revealed or when the slot has no text.
    pub fn select(&mut self, label: u32) -> bool {
        let has_answer = self
            .current()
            .and_then(|question| question.answer(label))
            .is_some();
        match self.view {
            QuizView::Browsing { .. } if has_answer => {
                self.view = QuizView::Browsing {
                    selected: Some(label),
                };
                true
            }
            _ => false,
        }
    }

    pub fn toggle_answer(&mut self) -> QuizView {
        let question = match self.questions.get(self.current) {
            Some(question) => question,
            None => return self.view,
        };
        self.view = match self.view {
            QuizView::Browsing { selected } => {
                let status = match selected {
                    Some(label) if question.is_correct(label) => AnswerStatus::Correct,
                    Some(_) => AnswerStatus::Incorrect,
                    None => AnswerStatus::Unanswered,
                };
                debug!("Question {} revealed: {:?}", self.current + 1, status);
                self.statuses.insert(self.current, status);
                QuizView::AnswerRevealed { selected }
            }
            QuizView::AnswerRevealed { .. } => QuizView::default(),
        };
        self.view
    }

    pub fn progress(&self) -> Progress {
        let counts = self.statuses.values().copied().counts();
        let count = |status: AnswerStatus| counts.get(&status).copied().unwrap_or(0);
        Progress {
            correct: count(AnswerStatus::Correct),
            incorrect: count(AnswerStatus::Incorrect),
            unanswered: count(AnswerStatus::Unanswered),
            unseen: self.questions.len() - self.statuses.len(),
        }
    }

    pub fn image_path(&self, index: usize) -> Option<PathBuf> {
        self.questions
            .get(index)
            .filter(|question| question.has_image())
            .map(|question| self.images_dir.join(&question.image))
    }

    fn show(&mut self, index: usize) {
        self.current = index;
        self.view = QuizView::default();
    }
}
