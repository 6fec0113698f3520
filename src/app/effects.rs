use crate::app::{App, Message, Model, ToastLevel};

impl App {
    /// Perform the I/O a message implies after [`update`](crate::app::update)
    /// has run.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::Save => Self::save_buffer(model),
            Message::Keystroke { .. } => {
                if let Some(intent) = &model.last_intent {
                    crate::intent_log::record(intent);
                }
            }
            _ => {}
        }
    }

    fn save_buffer(model: &mut Model) {
        match std::fs::write(&model.file_path, model.buffer.text()) {
            Ok(()) => {
                model.buffer.mark_clean();
                let name = model.file_path.display().to_string();
                model.show_toast(ToastLevel::Info, format!("Saved {name}"));
                tracing::info!(path = %name, "buffer saved");
            }
            Err(err) => {
                model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
                tracing::warn!(path = %model.file_path.display(), %err, "save failed");
            }
        }
    }
}
