use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::fields;

/// Shortest line the editor accepts: id, text, four option columns and the
/// correct answer. Priority, chapter and image columns are optional.
pub const MIN_FIELDS: usize = 7;

pub const DEFAULT_CHAPTER: &str = "1";

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminQuestion {
    pub id: String,
    pub text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    /// Kept as typed; only checked when the bank is exported.
    pub correct_answer: String,
    pub is_priority: bool,
    pub chapter: String,
    pub image: String,
}

impl AdminQuestion {
    pub fn from_fields(columns: Vec<String>) -> Option<AdminQuestion> {
        if columns.len() < MIN_FIELDS {
            return None;
        }
        let mut columns = columns.into_iter();
        let mut next = || columns.next();
        Some(AdminQuestion {
            id: next().unwrap_or_default(),
            text: next().unwrap_or_default(),
            option1: next().unwrap_or_default(),
            option2: next().unwrap_or_default(),
            option3: next().unwrap_or_default(),
            option4: next().unwrap_or_default(),
            correct_answer: next().unwrap_or_default(),
            is_priority: next().map(|f| fields::flag(&f)).unwrap_or(false),
            chapter: next()
                .map(|f| f.trim().to_owned())
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_CHAPTER.to_owned()),
            image: next().map(|f| f.trim().to_owned()).unwrap_or_default(),
        })
    }

    pub fn options(&self) -> [&str; 4] {
        [
            self.option1.as_str(),
            self.option2.as_str(),
            self.option3.as_str(),
            self.option4.as_str(),
        ]
    }

    /// Non-empty options with their 1-based number.
    pub fn visible_options(&self) -> Vec<(u32, &str)> {
        self.options()
            .iter()
            .zip(1..)
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, number)| (number, *text))
            .collect()
    }

    /// Numeric value of the id, 0 when it is not a number.
    pub fn numeric_id(&self) -> i64 {
        fields::lenient_int(&self.id).unwrap_or(0)
    }

    pub fn is_correct_option(&self, number: u32) -> bool {
        fields::lenient_int(&self.correct_answer) == Some(i64::from(number))
    }

    /// Checks that the correct answer names one of the non-empty options.
    pub fn check(&self) -> Result<()> {
        let number = fields::lenient_int(&self.correct_answer)
            .ok_or_else(|| anyhow!("correct answer {:?} is not a number", self.correct_answer))?;
        let options = self.options();
        if number < 1 || number > options.len() as i64 {
            return Err(anyhow!("correct answer {} is not between 1 and 4", number));
        }
        if options[(number - 1) as usize].is_empty() {
            return Err(anyhow!("correct answer {} points at an empty option", number));
        }
        Ok(())
    }

    /// Columns in export order.
    pub fn csv_row(&self) -> [&str; 10] {
        let chapter = if self.chapter.is_empty() {
            DEFAULT_CHAPTER
        } else {
            self.chapter.as_str()
        };
        [
            self.id.as_str(),
            self.text.as_str(),
            self.option1.as_str(),
            self.option2.as_str(),
            self.option3.as_str(),
            self.option4.as_str(),
            self.correct_answer.as_str(),
            fields::flag_text(self.is_priority),
            chapter,
            self.image.as_str(),
        ]
    }
}

/// Image file name the editor proposes for an illustrated question.
pub fn image_name_for(id: &str) -> String {
    format!("img_{}.png", id)
}
