use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
pub struct GameSettings {
    pub data_file: PathBuf,
    pub round_size: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<GameSettings>,
}

impl AppState {
    pub fn new(data_file: PathBuf, round_size: usize) -> Self {
        Self {
            settings: Arc::new(GameSettings {
                data_file,
                round_size,
            }),
        }
    }
}
