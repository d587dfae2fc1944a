use std::convert::TryFrom;

use crate::fields;

/// Shortest line the quiz accepts: id, question, four answers, correct
/// answer, priority marker. The image column is optional.
pub const MIN_FIELDS: usize = 8;

pub const ANSWER_SLOTS: u32 = 4;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawQuestion {
    pub stt: String,
    pub question: String,
    pub answers: [String; 4],
    pub correct_answer: String,
    pub priority: String,
    pub image: String,
}

impl RawQuestion {
    pub fn from_fields(fields: Vec<String>) -> Option<RawQuestion> {
        if fields.len() < MIN_FIELDS {
            return None;
        }
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        Some(RawQuestion {
            stt: next(),
            question: next(),
            answers: [next(), next(), next(), next()],
            correct_answer: next(),
            priority: next(),
            image: next(),
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizQuestion {
    pub stt: String,
    pub question: String,
    pub answers: [String; 4],
    /// 1-based answer slot, 0 when the source value was not a number.
    pub correct_answer: u32,
    pub is_priority: bool,
    pub image: String,
}

impl QuizQuestion {
    /// Text of a 1-based answer slot, `None` when the slot is empty.
    pub fn answer(&self, label: u32) -> Option<&str> {
        if label == 0 || label > ANSWER_SLOTS {
            return None;
        }
        let text = self.answers[(label - 1) as usize].as_str();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn visible_answers(&self) -> Vec<(u32, &str)> {
        (1..=ANSWER_SLOTS)
            .filter_map(|label| self.answer(label).map(|text| (label, text)))
            .collect()
    }

    pub fn is_correct(&self, label: u32) -> bool {
        label == self.correct_answer
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

impl From<RawQuestion> for QuizQuestion {
    fn from(raw_question: RawQuestion) -> Self {
        let correct_answer = fields::lenient_int(&raw_question.correct_answer)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0);

        QuizQuestion {
            stt: raw_question.stt,
            question: raw_question.question,
            answers: raw_question
                .answers
                .map(|answer| fields::strip_answer_number(&answer)),
            correct_answer,
            is_priority: fields::flag(&raw_question.priority),
            image: raw_question.image.trim().to_owned(),
        }
    }
}
