use egui::Id;

use crate::app::BuilderApp;
use crate::element::{ElementType, SectionType};
use crate::input::{NEW_ELEMENT_PREFIX, NEW_SECTION_PREFIX};

/// Left panel: draggable element or section templates. Each entry carries
/// its reserved-prefix drag id as the drop payload; the canvas forwards it
/// untouched, so the prefix contract is honored in exactly one place.
pub fn palette_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::SidePanel::left("palette_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(!app.show_sections_panel, "Elements")
                    .clicked()
                {
                    app.show_sections_panel = false;
                }
                if ui
                    .selectable_label(app.show_sections_panel, "Sections")
                    .clicked()
                {
                    app.show_sections_panel = true;
                }
            });
            ui.separator();

            if app.show_sections_panel {
                for kind in SectionType::ALL {
                    palette_entry(
                        ui,
                        format!("{NEW_SECTION_PREFIX}{kind}"),
                        kind.label(),
                    );
                }
            } else {
                for kind in ElementType::ALL {
                    palette_entry(
                        ui,
                        format!("{NEW_ELEMENT_PREFIX}{kind}"),
                        kind.label(),
                    );
                }
            }

            ui.separator();
            ui.small("Drag onto the canvas");
        });
}

fn palette_entry(ui: &mut egui::Ui, drag_id: String, label: &str) {
    let id = Id::new(("palette", drag_id.clone()));
    ui.dnd_drag_source(id, drag_id, |ui| {
        ui.add(egui::Button::new(label).min_size(egui::vec2(150.0, 28.0)));
    });
}
