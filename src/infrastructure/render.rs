use crate::domain::models::Exercise;

// Implementations must accept a None exercise and show a placeholder.
pub trait RenderSink: Send + Sync {
    fn show_phase_label(&self, text: &str);
    fn show_remaining(&self, formatted: &str);
    fn show_control_state(&self, label: &str, enabled: bool);
    fn show_exercise(&self, exercise: Option<&Exercise>);
}

#[derive(Debug, Default, Clone)]
pub struct NullRenderSink;

impl RenderSink for NullRenderSink {
    fn show_phase_label(&self, _text: &str) {}

    fn show_remaining(&self, _formatted: &str) {}

    fn show_control_state(&self, _label: &str, _enabled: bool) {}

    fn show_exercise(&self, _exercise: Option<&Exercise>) {}
}
