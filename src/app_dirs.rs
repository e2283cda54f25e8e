use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn results_log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("typemaster");
            Some(state_dir.join("results.csv"))
        } else {
            ProjectDirs::from("", "", "typemaster")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("results.csv"))
        }
    }
}
