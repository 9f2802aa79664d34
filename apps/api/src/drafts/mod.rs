// Draft workflow over HTTP: form intake, generation, edit step and download.
// Generation goes through the TextGenerator in AppState; rendering through assembly.

pub mod form;
pub mod handlers;
