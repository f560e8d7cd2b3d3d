use crate::app::BuilderApp;

/// Top toolbar: undo/redo, view toggles and the selection commands.
pub fn toolbar(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("PageForge");
            ui.separator();

            let can_undo = app.editor.can_undo();
            let can_redo = app.editor.can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.editor.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.editor.redo();
            }
            ui.separator();

            let state = app.editor.state();
            let show_grid = state.show_grid;
            let snap = state.snap_to_grid;
            let preview = state.is_preview_mode;
            let mut grid_size = state.grid_size;
            let selected = state.selection.len();

            if ui.selectable_label(show_grid, "Grid").clicked() {
                app.editor.toggle_grid();
            }
            if ui.selectable_label(snap, "Snap").clicked() {
                app.editor.toggle_snap();
            }
            let grid_resp = ui.add(
                egui::DragValue::new(&mut grid_size)
                    .range(1..=100)
                    .suffix("px"),
            );
            if grid_resp.changed() {
                if let Err(err) = app.editor.set_grid_size(grid_size) {
                    log::warn!("grid size rejected: {err}");
                }
            }
            ui.separator();

            if !preview {
                if ui.selectable_label(app.show_layers_panel, "Layers").clicked() {
                    app.show_layers_panel = !app.show_layers_panel;
                }
                ui.separator();

                let has_selection = selected > 0;
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete"))
                    .clicked()
                {
                    app.editor.delete_selected();
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Lock/Unlock"))
                    .clicked()
                {
                    app.editor.toggle_lock_selected();
                }
                if has_selection {
                    ui.label(format!("{selected} selected"));
                }
                ui.separator();
            }

            if ui.selectable_label(preview, "Preview").clicked() {
                app.editor.toggle_preview();
            }
        });
    });
}
