use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::fields;
use crate::mirror::Mirror;
use crate::rows;

pub mod export;
pub mod question;

pub use question::{image_name_for, AdminQuestion};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditorState {
    Idle,
    Editing { index: usize },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Upserted {
    Added(usize),
    Updated(usize),
}

#[derive(Debug)]
pub struct AdminBank {
    questions: Vec<AdminQuestion>,
    max_source_id: i64,
    editor: EditorState,
    mirror: Option<Mirror>,
}

impl Default for AdminBank {
    fn default() -> Self {
        AdminBank {
            questions: Vec::new(),
            max_source_id: 0,
            editor: EditorState::Idle,
            mirror: None,
        }
    }
}

impl AdminBank {
    pub fn open(source: &Path) -> Result<AdminBank> {
        let text = fs::read_to_string(source)
            .with_context(|| format!("could not read {}", source.display()))?;
        Ok(AdminBank::parse(&text))
    }

    pub fn parse(text: &str) -> AdminBank {
        let mut questions = Vec::new();
        let mut max_source_id: i64 = 0;
        for row in rows::read_rows(text) {
            // Short lines still reserve their id.
            if let Some(id) = row.fields.first().and_then(|id| fields::lenient_int(id)) {
                max_source_id = max_source_id.max(id);
            }

            let line = row.line;
            match AdminQuestion::from_fields(row.fields) {
                Some(question) => questions.push(question),
                None => debug!("Skipping short editor line {}", line),
            }
        }
        info!(
            "Loaded {} questions for editing, highest id {}",
            questions.len(),
            max_source_id
        );
        AdminBank {
            questions,
            max_source_id,
            ..Default::default()
        }
    }

    pub fn with_mirror(mut self, mirror: Mirror) -> Self {
        self.mirror = Some(mirror);
        self
    }

    pub fn records(&self) -> &[AdminQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AdminQuestion> {
        self.questions.get(index)
    }

    /// First question carrying this id, with its position.
    pub fn by_id(&self, id: &str) -> Option<(usize, &AdminQuestion)> {
        self.questions
            .iter()
            .enumerate()
            .find(|(_, question)| question.id == id)
    }

    pub fn editor(&self) -> EditorState {
        self.editor
    }

    /// Smallest id above every id seen in the source file or in the bank.
    pub fn next_id(&self) -> i64 {
        self.questions
            .iter()
            .map(AdminQuestion::numeric_id)
            .fold(self.max_source_id, i64::max)
            .saturating_add(1)
    }

    /// Blank question carrying the next free id.
    pub fn draft(&self) -> AdminQuestion {
        AdminQuestion {
            id: self.next_id().to_string(),
            chapter: question::DEFAULT_CHAPTER.to_owned(),
            ..Default::default()
        }
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<&AdminQuestion> {
        let question = self
            .questions
            .get(index)
            .ok_or_else(|| anyhow!("There is no question at position {}", index + 1))?;
        self.editor = EditorState::Editing { index };
        Ok(question)
    }

    pub fn cancel_edit(&mut self) {
        self.editor = EditorState::Idle;
    }

    /// Replaces the question being edited, or appends a new one.
    pub fn upsert(&mut self, question: AdminQuestion) -> Upserted {
        let upserted = match self.editor {
            EditorState::Editing { index } if index < self.questions.len() => {
                self.questions[index] = question;
                Upserted::Updated(index)
            }
            _ => {
                self.questions.push(question);
                Upserted::Added(self.questions.len() - 1)
            }
        };
        self.editor = EditorState::Idle;
        self.save_mirror();
        upserted
    }

    pub fn remove(&mut self, index: usize) -> Result<AdminQuestion> {
        if index >= self.questions.len() {
            return Err(anyhow!("There is no question at position {}", index + 1));
        }
        let removed = self.questions.remove(index);
        self.editor = match self.editor {
            EditorState::Editing { index: editing } if editing == index => EditorState::Idle,
            EditorState::Editing { index: editing } if editing > index => EditorState::Editing {
                index: editing - 1,
            },
            state => state,
        };
        self.save_mirror();
        Ok(removed)
    }

    /// Drops every question. Ids from the source file stay reserved.
    pub fn clear(&mut self) {
        self.questions.clear();
        self.editor = EditorState::Idle;
        self.save_mirror();
    }

    pub fn serialize(&self) -> Result<String> {
        export::to_csv(&self.questions)
    }

    pub fn export(&self, destination: &Path) -> Result<()> {
        let csv = self.serialize()?;
        fs::write(destination, csv)
            .with_context(|| format!("could not write {}", destination.display()))?;
        info!(
            "Exported {} questions to {}",
            self.questions.len(),
            destination.display()
        );
        Ok(())
    }

    fn save_mirror(&self) {
        if let Some(mirror) = &self.mirror {
            if let Err(e) = mirror.save(&self.questions) {
                warn!(
                    "Could not mirror questions to {}: {:#}",
                    mirror.path().display(),
                    e
                );
            }
        }
    }
}
