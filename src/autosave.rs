use serde::Serialize;

use crate::state::EditorState;
use crate::util::time;

/// Seconds between autosave ticks.
pub const AUTOSAVE_INTERVAL_SECS: f64 = 30.0;

/// Periodic autosave observer.
///
/// Strictly a reader of the editor state: it serializes a snapshot on a
/// fixed interval and never mutates anything. The backend is currently a
/// stub that only logs; a real persistence layer would consume the same
/// snapshot.
#[derive(Debug)]
pub struct Autosave {
    interval_secs: f64,
    last_tick: f64,
}

#[derive(Serialize)]
struct SaveSnapshot<'a> {
    document: &'a crate::document::Document,
    selection: &'a crate::selection::Selection,
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(AUTOSAVE_INTERVAL_SECS)
    }
}

impl Autosave {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            last_tick: time::epoch_secs_f64(),
        }
    }

    /// Called once per frame; saves when the interval has elapsed and there
    /// is something to save. Returns whether a save happened.
    pub fn tick(&mut self, state: &EditorState) -> bool {
        let now = time::epoch_secs_f64();
        if now - self.last_tick < self.interval_secs {
            return false;
        }
        self.last_tick = now;
        if state.document.is_empty() {
            return false;
        }

        let snapshot = SaveSnapshot {
            document: &state.document,
            selection: &state.selection,
        };
        match serde_json::to_string(&snapshot) {
            Ok(encoded) => {
                // Stub backend: log only.
                log::info!("auto-saving {} elements ({} bytes)", state.document.len(), encoded.len());
                true
            }
            Err(err) => {
                log::warn!("autosave serialization failed: {err}");
                false
            }
        }
    }
}
