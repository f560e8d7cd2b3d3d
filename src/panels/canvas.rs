use egui::{Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use crate::app::{ActiveDrag, BuilderApp};
use crate::element::{Element, ElementType};
use crate::input::{Delta, DragEndEvent, CANVAS_DROP_TARGET};

/// Everything the canvas needs to paint and hit-test one element, computed
/// up front so the editor state is not borrowed during interaction.
struct ElementView {
    id: String,
    rect: Rect,
    fill: Color32,
    radius: f32,
    label: String,
    selected: bool,
    locked: bool,
}

enum CanvasAction {
    Select { id: String, multi: bool },
    ClearSelection,
    DragEnd(DragEndEvent),
}

/// Central canvas: paints the grid and elements in z order and turns pointer
/// interaction into engine events. Pure view plumbing; every decision about
/// what a gesture means lives in the editor controller.
pub fn canvas_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click());
        let canvas_rect = response.rect;

        let state = app.editor.state();
        let preview = state.is_preview_mode;

        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);
        if state.show_grid && !preview {
            draw_grid(&painter, canvas_rect, state.grid_size);
        }

        let views: Vec<ElementView> = state
            .document
            .elements_by_z()
            .into_iter()
            .map(|el| element_view(el, canvas_rect.min, state.selection.contains(&el.id)))
            .collect();

        // Advisory alignment guides for the element being dragged.
        if let Some(drag) = &app.active_drag {
            if let Some(dragged) = state.document.find(&drag.id) {
                let guide = Stroke::new(1.0, Color32::from_rgb(0xf5, 0x9e, 0x0b));
                for other in state.document.elements() {
                    if other.id == dragged.id {
                        continue;
                    }
                    let alignment = crate::spatial::check_alignment(dragged, other);
                    if alignment.horizontal {
                        let y = canvas_rect.top() + other.position.y as f32;
                        painter.line_segment(
                            [Pos2::new(canvas_rect.left(), y), Pos2::new(canvas_rect.right(), y)],
                            guide,
                        );
                    }
                    if alignment.vertical {
                        let x = canvas_rect.left() + other.position.x as f32;
                        painter.line_segment(
                            [Pos2::new(x, canvas_rect.top()), Pos2::new(x, canvas_rect.bottom())],
                            guide,
                        );
                    }
                }
            }
        }

        let mut actions: Vec<CanvasAction> = Vec::new();

        for view in &views {
            painter.rect_filled(view.rect, Rounding::same(view.radius), view.fill);
            if view.selected {
                painter.rect_stroke(
                    view.rect.expand(2.0),
                    Rounding::same(view.radius),
                    Stroke::new(2.0, Color32::from_rgb(0x3b, 0x82, 0xf6)),
                );
            }
            painter.text(
                view.rect.left_top() + Vec2::new(6.0, 6.0),
                egui::Align2::LEFT_TOP,
                &view.label,
                FontId::proportional(13.0),
                Color32::DARK_GRAY,
            );

            if preview {
                continue;
            }
            let resp = ui.interact(
                view.rect,
                ui.id().with(("canvas-element", &view.id)),
                Sense::click_and_drag(),
            );
            if resp.clicked() {
                let multi = ui.input(|i| i.modifiers.command || i.modifiers.ctrl);
                actions.push(CanvasAction::Select {
                    id: view.id.clone(),
                    multi,
                });
            }
            if resp.drag_started() && !view.locked {
                if !view.selected {
                    actions.push(CanvasAction::Select {
                        id: view.id.clone(),
                        multi: false,
                    });
                }
                app.active_drag = Some(ActiveDrag {
                    id: view.id.clone(),
                    accum: Vec2::ZERO,
                });
            }
            if resp.dragged() {
                if let Some(drag) = app.active_drag.as_mut() {
                    if drag.id == view.id {
                        drag.accum += resp.drag_delta();
                    }
                }
            }
            if resp.drag_stopped() {
                if let Some(drag) = app.active_drag.take() {
                    actions.push(CanvasAction::DragEnd(DragEndEvent {
                        dragged_id: drag.id,
                        over_target: Some(CANVAS_DROP_TARGET.to_owned()),
                        delta: Delta::new(drag.accum.x.round() as i32, drag.accum.y.round() as i32),
                    }));
                }
            }
        }

        // Palette drops land on the canvas as a whole.
        if let Some(payload) = response.dnd_release_payload::<String>() {
            if let Some(pointer) = ui.input(|i| i.pointer.interact_pos()) {
                let drop = pointer - canvas_rect.min;
                actions.push(CanvasAction::DragEnd(DragEndEvent {
                    dragged_id: (*payload).clone(),
                    over_target: Some(CANVAS_DROP_TARGET.to_owned()),
                    delta: Delta::new(drop.x.round() as i32, drop.y.round() as i32),
                }));
            }
        }

        if response.clicked() {
            actions.push(CanvasAction::ClearSelection);
        }

        for action in actions {
            match action {
                CanvasAction::Select { id, multi } => app.editor.select_element(&id, multi),
                CanvasAction::ClearSelection => app.editor.clear_selection(),
                CanvasAction::DragEnd(event) => {
                    if let Err(err) = app.editor.handle_drag_end(&event) {
                        log::warn!("drag rejected: {err}");
                    }
                }
            }
        }
    });
}

fn draw_grid(painter: &egui::Painter, rect: Rect, grid_size: i32) {
    let step = grid_size.max(1) as f32;
    let stroke = Stroke::new(0.5, Color32::from_gray(225));
    let mut x = rect.left();
    while x <= rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += step;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += step;
    }
}

fn element_view(element: &Element, origin: Pos2, selected: bool) -> ElementView {
    let size = visual_size(element);
    let min = origin + Vec2::new(element.position.x as f32, element.position.y as f32);
    let fill = element
        .property("backgroundColor")
        .and_then(|v| v.as_str())
        .and_then(parse_hex_color)
        .unwrap_or_else(|| default_fill(element.kind));
    let radius = element
        .property("borderRadius")
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;

    let mut label = element
        .property("text")
        .and_then(|v| v.as_str())
        .unwrap_or(element.kind.label())
        .to_owned();
    if element.is_locked {
        label.push_str(" 🔒");
    }

    ElementView {
        id: element.id.clone(),
        rect: Rect::from_min_size(min, size),
        fill,
        radius,
        label,
        selected,
        locked: element.is_locked,
    }
}

/// Approximate on-canvas footprint: measured size when present, otherwise
/// pixel properties, otherwise a per-kind default.
fn visual_size(element: &Element) -> Vec2 {
    use crate::element::Dimension;

    let fallback = match element.kind {
        ElementType::Heading => Vec2::new(260.0, 40.0),
        ElementType::Text => Vec2::new(280.0, 48.0),
        ElementType::Image => Vec2::new(250.0, 150.0),
        ElementType::Button => Vec2::new(120.0, 36.0),
        ElementType::Container => Vec2::new(300.0, 200.0),
        ElementType::List => Vec2::new(160.0, 80.0),
        ElementType::Form => Vec2::new(400.0, 120.0),
    };

    if let Some(size) = element.size {
        let w = match size.width {
            Dimension::Px(v) => v as f32,
            Dimension::Auto => fallback.x,
        };
        let h = match size.height {
            Dimension::Px(v) => v as f32,
            Dimension::Auto => fallback.y,
        };
        return Vec2::new(w, h);
    }

    let from_prop = |key: &str, fallback: f32| {
        element
            .property(key)
            .and_then(|v| v.as_str())
            .and_then(|s| s.strip_suffix("px"))
            .and_then(|s| s.parse::<f32>().ok())
            .unwrap_or(fallback)
    };
    Vec2::new(from_prop("width", fallback.x), from_prop("height", fallback.y))
}

fn default_fill(kind: ElementType) -> Color32 {
    match kind {
        ElementType::Button => Color32::from_rgb(0x3b, 0x82, 0xf6),
        ElementType::Container => Color32::from_rgb(0xf3, 0xf4, 0xf6),
        ElementType::Image => Color32::from_gray(210),
        _ => Color32::from_gray(245),
    }
}

fn parse_hex_color(s: &str) -> Option<Color32> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}
