use egui::{Key, KeyboardShortcut, Modifiers};

use crate::autosave::Autosave;
use crate::editor::Editor;
use crate::panels;

/// In-flight drag of an existing canvas element; accumulated until the
/// pointer is released, then reduced to one drag-end event for the engine.
#[derive(Debug, Clone)]
pub(crate) struct ActiveDrag {
    pub id: String,
    pub accum: egui::Vec2,
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct BuilderApp {
    pub(crate) editor: Editor,
    pub(crate) show_layers_panel: bool,
    pub(crate) show_sections_panel: bool,
    #[serde(skip)]
    pub(crate) autosave: Autosave,
    #[serde(skip)]
    pub(crate) active_drag: Option<ActiveDrag>,
}

impl Default for BuilderApp {
    fn default() -> Self {
        Self {
            editor: Editor::new(),
            show_layers_panel: false,
            show_sections_panel: false,
            autosave: Autosave::default(),
            active_drag: None,
        }
    }
}

impl BuilderApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
        const REDO: KeyboardShortcut =
            KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
        const LOCK: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::L);

        if ctx.input_mut(|i| i.consume_shortcut(&REDO)) {
            self.editor.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO)) {
            self.editor.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&LOCK)) {
            self.editor.toggle_lock_selected();
        }

        // Bare-key shortcuts only fire when no text field has focus.
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace) {
                self.editor.delete_selected();
            }
            if i.key_pressed(Key::G) {
                self.editor.toggle_grid();
            }
            if i.key_pressed(Key::S) {
                self.editor.toggle_snap();
            }
            if i.key_pressed(Key::P) {
                self.editor.toggle_preview();
            }
        });
    }
}

impl eframe::App for BuilderApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::toolbar(self, ctx);

        let preview = self.editor.state().is_preview_mode;
        if !preview {
            panels::palette_panel(self, ctx);
            if self.show_layers_panel {
                panels::layers_panel(self, ctx);
            }
            panels::properties_panel(self, ctx);
        }

        panels::canvas_panel(self, ctx);

        self.autosave.tick(self.editor.state());
    }
}
