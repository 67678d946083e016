use egui::{Color32, Context, Stroke, Style, Visuals};

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    // Roomy spacing; the results grid gets dense on its own.
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(15);

    ctx.set_style(style);

    // Dark look, fitting the subject matter.
    let mut visuals = Visuals::dark();
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_gray(50));
    visuals.widgets.inactive.bg_fill = Color32::TRANSPARENT;
    visuals.widgets.hovered.bg_fill = Color32::from_gray(45);
    visuals.widgets.active.bg_fill = Color32::from_gray(55);

    visuals.selection.bg_fill = Color32::from_rgb(90, 40, 40);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_gray(180));

    ctx.set_visuals(visuals);
}
