use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub source_file: PathBuf,
    pub export_file: PathBuf,
    pub images_dir: PathBuf,
    pub grid_columns: usize,
    pub mirror_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source_file: PathBuf::from("Questions.csv"),
            export_file: PathBuf::from("CauHoi.csv"),
            images_dir: PathBuf::from("images"),
            grid_columns: 5,
            mirror_enabled: true,
        }
    }
}
