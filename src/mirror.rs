use anyhow::*;
use directories_next::BaseDirs;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::admin::AdminQuestion;

const MIRROR_FILE_NAME: &str = "admin-questions.json";

fn get_cache_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .cache_dir()
        .to_path_buf();
    dir.push("quizbank");
    Ok(dir)
}

/// Write-only JSON copy of the editor's questions. Nothing reads it back.
#[derive(Clone, Debug)]
pub struct Mirror {
    path: PathBuf,
}

impl Mirror {
    pub fn new(path: PathBuf) -> Mirror {
        Mirror { path }
    }

    pub fn in_cache_dir() -> Result<Mirror> {
        let mut path = get_cache_dir()?;
        path.push(MIRROR_FILE_NAME);
        Ok(Mirror::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, questions: &[AdminQuestion]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(questions)?;
        fs::write(&self.path, json)
            .with_context(|| format!("could not write {}", self.path.display()))?;
        debug!(
            "Mirrored {} questions to {}",
            questions.len(),
            self.path.display()
        );
        Ok(())
    }
}
