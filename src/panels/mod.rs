pub mod canvas;
pub mod layers_panel;
pub mod palette;
pub mod properties_panel;
pub mod toolbar;

pub use canvas::canvas_panel;
pub use layers_panel::layers_panel;
pub use palette::palette_panel;
pub use properties_panel::properties_panel;
pub use toolbar::toolbar;
