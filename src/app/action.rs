use std::path::PathBuf;

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AttachPhoto { path: PathBuf },
    SaveKeepsake { recipient: String, letter: String },
    Quit,
}
