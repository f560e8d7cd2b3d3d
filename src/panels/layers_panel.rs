use crate::app::BuilderApp;
use crate::document::LayerDirection;

enum LayerAction {
    Select(String),
    Reorder(String, LayerDirection),
    Delete(String),
}

/// Right panel listing elements topmost-first with reorder and delete
/// controls per row.
pub fn layers_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::SidePanel::right("layers_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Layers");
            ui.separator();

            let state = app.editor.state();
            let mut rows: Vec<(String, String, bool, bool)> = state
                .document
                .elements_by_z()
                .into_iter()
                .map(|el| {
                    (
                        el.id.clone(),
                        format!("{} (z {})", el.kind.label(), el.z_index),
                        state.selection.contains(&el.id),
                        el.is_locked,
                    )
                })
                .collect();
            // Topmost layer first, like the paint order reversed.
            rows.reverse();

            let mut action: Option<LayerAction> = None;

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (id, label, selected, locked) in &rows {
                    ui.horizontal(|ui| {
                        let text = if *locked {
                            format!("🔒 {label}")
                        } else {
                            label.clone()
                        };
                        if ui.selectable_label(*selected, text).clicked() {
                            action = Some(LayerAction::Select(id.clone()));
                        }
                        if ui.small_button("⬆").on_hover_text("Bring forward").clicked() {
                            action = Some(LayerAction::Reorder(id.clone(), LayerDirection::Up));
                        }
                        if ui.small_button("⬇").on_hover_text("Send backward").clicked() {
                            action = Some(LayerAction::Reorder(id.clone(), LayerDirection::Down));
                        }
                        if ui.small_button("⤒").on_hover_text("Bring to front").clicked() {
                            action = Some(LayerAction::Reorder(id.clone(), LayerDirection::Top));
                        }
                        if ui.small_button("⤓").on_hover_text("Send to back").clicked() {
                            action = Some(LayerAction::Reorder(id.clone(), LayerDirection::Bottom));
                        }
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            action = Some(LayerAction::Delete(id.clone()));
                        }
                    });
                }
            });

            match action {
                Some(LayerAction::Select(id)) => app.editor.select_element(&id, false),
                Some(LayerAction::Reorder(id, direction)) => {
                    app.editor.reorder_layer(&id, direction)
                }
                Some(LayerAction::Delete(id)) => app.editor.delete_element(&id),
                None => {}
            }
        });
}
