use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::rows;

pub mod question;

pub use question::{QuizQuestion, RawQuestion};


#[derive(Clone, Debug, Default)]
pub struct QuizDefinition {
    questions: Vec<QuizQuestion>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let text = fs::read_to_string(source)
            .with_context(|| format!("could not read {}", source.display()))?;
        Ok(QuizDefinition::parse(&text))
    }

    pub fn parse(text: &str) -> QuizDefinition {
        let mut questions = Vec::new();
        for row in rows::read_rows(text) {
            let line = row.line;
            match RawQuestion::from_fields(row.fields) {
                Some(raw_question) => questions.push(raw_question.into()),
                None => debug!("Skipping short quiz line {}", line),
            }
        }
        info!("Loaded {} quiz questions", questions.len());
        QuizDefinition { questions }
    }

    pub fn get_questions(&self) -> &Vec<QuizQuestion> {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<QuizQuestion> {
        self.questions
    }
}
