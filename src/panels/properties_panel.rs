use serde_json::Value;

use crate::app::BuilderApp;

/// Right panel editing the selected element's open property mapping.
///
/// Rendering dispatches on the JSON value shape, not the element kind, so
/// any key the factory (or a future import) put in the map is editable.
/// Every committed change is its own undo step by design.
pub fn properties_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    let state = app.editor.state();

    // Property editing only makes sense for a single selection.
    if state.selection.len() != 1 {
        return;
    }
    let Some(element) = state
        .selection
        .iter()
        .next()
        .and_then(|id| state.document.find(id))
    else {
        return;
    };

    let element_id = element.id.clone();
    let header = format!("{} — {}", element.kind.label(), element.id);
    let locked = element.is_locked;
    let properties: Vec<(String, Value)> = element
        .properties
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let mut edit: Option<(String, Value)> = None;

    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            ui.label(header);
            if locked {
                ui.label("🔒 locked");
            }
            ui.separator();

            egui::Grid::new("properties_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for (key, value) in &properties {
                        ui.label(key);
                        if let Some(changed) = property_editor(ui, key, value) {
                            edit = Some((key.clone(), changed));
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some((key, value)) = edit {
        app.editor.update_property(&element_id, key, value);
    }
}

/// Render an editor widget for one property value; returns the new value
/// when the user changed it this frame.
fn property_editor(ui: &mut egui::Ui, key: &str, value: &Value) -> Option<Value> {
    match value {
        Value::String(text) => {
            let mut buffer = text.clone();
            let resp = ui.add(egui::TextEdit::singleline(&mut buffer).id_salt(("prop", key)));
            (resp.changed() && buffer != *text).then(|| Value::String(buffer))
        }
        Value::Number(num) => {
            let mut buffer = num.as_f64().unwrap_or(0.0);
            let resp = ui.add(egui::DragValue::new(&mut buffer).speed(1.0));
            resp.changed().then(|| {
                serde_json::Number::from_f64(buffer)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::Number(0.into()))
            })
        }
        Value::Bool(flag) => {
            let mut buffer = *flag;
            let resp = ui.checkbox(&mut buffer, "");
            resp.changed().then_some(Value::Bool(buffer))
        }
        Value::Array(items) => {
            // String lists (e.g. list items) edit as one line per item.
            let mut buffer = items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            let resp = ui.add(
                egui::TextEdit::multiline(&mut buffer)
                    .desired_rows(3)
                    .id_salt(("prop", key)),
            );
            resp.changed().then(|| {
                Value::Array(
                    buffer
                        .lines()
                        .map(|line| Value::String(line.to_owned()))
                        .collect(),
                )
            })
        }
        other => {
            ui.label(other.to_string());
            None
        }
    }
}
