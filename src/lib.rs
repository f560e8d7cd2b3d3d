#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod autosave;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod selection;
pub mod spatial;
pub mod state;
pub mod util;

pub use app::BuilderApp;
pub use document::{Document, LayerDirection};
pub use editor::Editor;
pub use element::{Dimension, Element, ElementType, Position, SectionType, Size};
pub use error::EditorError;
pub use history::{History, HistoryEntry};
pub use input::{Delta, DragEndEvent, DragPayload};
pub use selection::Selection;
pub use state::EditorState;
