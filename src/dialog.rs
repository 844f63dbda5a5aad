//! Confirmation Dialogs
//!
//! Dialog content model and the prompt capability the delete flow awaits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Icon shown at the top of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogIcon {
    Warning,
    Success,
    Error,
}

impl DialogIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            DialogIcon::Warning => "!",
            DialogIcon::Success => "✓",
            DialogIcon::Error => "×",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DialogIcon::Warning => "dialog-icon warning",
            DialogIcon::Success => "dialog-icon success",
            DialogIcon::Error => "dialog-icon error",
        }
    }
}

/// User-facing strings, defaulting to the dashboard's Spanish copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogTexts {
    pub confirm_title: String,
    pub confirm_text: String,
    pub confirm_button: String,
    pub cancel_button: String,
    pub deleted_title: String,
    pub deleted_text: String,
    pub failed_title: String,
    pub failed_text: String,
    pub ok_button: String,
}

impl Default for DialogTexts {
    fn default() -> Self {
        Self {
            confirm_title: "¿Estás seguro?".into(),
            confirm_text: "¡No podrás revertir esto!".into(),
            confirm_button: "Sí, eliminar".into(),
            cancel_button: "Cancelar".into(),
            deleted_title: "Eliminado!".into(),
            deleted_text: "Se eliminó correctamente.".into(),
            failed_title: "Error".into(),
            failed_text: "No se pudo eliminar.".into(),
            ok_button: "OK".into(),
        }
    }
}

/// Accent colors of the two prompt actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogColors {
    pub confirm: String,
    pub cancel: String,
}

impl Default for DialogColors {
    fn default() -> Self {
        Self {
            confirm: "#3085d6".into(),
            cancel: "#d33".into(),
        }
    }
}

/// A secondary action rendered next to the confirm button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelAction {
    pub text: String,
    pub color: String,
}

/// Everything needed to render one modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
    pub icon: DialogIcon,
    pub title: String,
    pub text: String,
    pub confirm_text: String,
    pub confirm_color: String,
    /// `None` for acknowledgment-only dialogs.
    pub cancel: Option<CancelAction>,
}

impl DialogSpec {
    /// The "are you sure" prompt shown before any request is sent.
    pub fn confirm_delete(texts: &DialogTexts, colors: &DialogColors) -> Self {
        Self {
            icon: DialogIcon::Warning,
            title: texts.confirm_title.clone(),
            text: texts.confirm_text.clone(),
            confirm_text: texts.confirm_button.clone(),
            confirm_color: colors.confirm.clone(),
            cancel: Some(CancelAction {
                text: texts.cancel_button.clone(),
                color: colors.cancel.clone(),
            }),
        }
    }

    /// Success acknowledgment.
    pub fn deleted(texts: &DialogTexts, colors: &DialogColors) -> Self {
        Self {
            icon: DialogIcon::Success,
            title: texts.deleted_title.clone(),
            text: texts.deleted_text.clone(),
            confirm_text: texts.ok_button.clone(),
            confirm_color: colors.confirm.clone(),
            cancel: None,
        }
    }

    /// Failure acknowledgment; the HTTP status, when there is one, is
    /// appended to the body.
    pub fn delete_failed(texts: &DialogTexts, colors: &DialogColors, status: Option<u16>) -> Self {
        let text = match status {
            Some(status) => format!("{} (HTTP {})", texts.failed_text, status),
            None => texts.failed_text.clone(),
        };
        Self {
            icon: DialogIcon::Error,
            title: texts.failed_title.clone(),
            text,
            confirm_text: texts.ok_button.clone(),
            confirm_color: colors.confirm.clone(),
            cancel: None,
        }
    }

    pub fn is_acknowledgment(&self) -> bool {
        self.cancel.is_none()
    }
}

/// How a dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
    /// Closed without picking an action (backdrop click, Escape, host dropped).
    Dismissed,
}

impl Decision {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Decision::Confirmed)
    }
}

/// Modal prompt capability.
///
/// Implementations must not block the event loop; the returned future
/// resolves once the user closes the dialog.
#[async_trait(?Send)]
pub trait ConfirmDialog {
    async fn prompt(&self, spec: DialogSpec) -> Decision;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_prompt_contrasts_actions() {
        let spec = DialogSpec::confirm_delete(&DialogTexts::default(), &DialogColors::default());
        assert_eq!(spec.icon, DialogIcon::Warning);
        assert_eq!(spec.title, "¿Estás seguro?");
        assert_eq!(spec.confirm_color, "#3085d6");
        let cancel = spec.cancel.expect("prompt has a cancel action");
        assert_eq!(cancel.text, "Cancelar");
        assert_eq!(cancel.color, "#d33");
    }

    #[test]
    fn acknowledgments_have_single_action() {
        let texts = DialogTexts::default();
        let colors = DialogColors::default();
        let ok = DialogSpec::deleted(&texts, &colors);
        assert!(ok.is_acknowledgment());
        assert_eq!(ok.icon, DialogIcon::Success);
        assert_eq!(ok.text, "Se eliminó correctamente.");

        let failed = DialogSpec::delete_failed(&texts, &colors, Some(500));
        assert!(failed.is_acknowledgment());
        assert_eq!(failed.text, "No se pudo eliminar. (HTTP 500)");

        let unreachable = DialogSpec::delete_failed(&texts, &colors, None);
        assert_eq!(unreachable.text, "No se pudo eliminar.");
    }

    #[test]
    fn only_confirmed_proceeds() {
        assert!(Decision::Confirmed.is_confirmed());
        assert!(!Decision::Cancelled.is_confirmed());
        assert!(!Decision::Dismissed.is_confirmed());
    }
}
