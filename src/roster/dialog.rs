use crate::i18n::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

/// A modal yes/no prompt.
///
/// Button labels default to the translated `proceed` and `cancel` texts.
/// Labels that were never customised follow language changes through
/// [`ConfirmDialog::relabel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub show: bool,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    custom_labels: bool,
}

impl ConfirmDialog {
    pub fn new(translator: &Translator) -> Self {
        Self {
            show: false,
            title: String::new(),
            message: String::new(),
            confirm_text: translator.translate("proceed").to_string(),
            cancel_text: translator.translate("cancel").to_string(),
            custom_labels: false,
        }
    }

    /// The delete prompt used by the list screen.
    pub fn delete_prompt(translator: &Translator, subject: &str) -> Self {
        let mut dialog = Self::new(translator);
        dialog.open(
            translator.translate("deleteConfirmation"),
            format!(
                "{}: {}",
                translator.translate("deleteConfirmationMessage"),
                subject
            ),
        );
        dialog
    }

    pub fn open(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.show = true;
    }

    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_text = confirm.into();
        self.cancel_text = cancel.into();
        self.custom_labels = true;
        self
    }

    pub fn relabel(&mut self, translator: &Translator) {
        if !self.custom_labels {
            self.confirm_text = translator.translate("proceed").to_string();
            self.cancel_text = translator.translate("cancel").to_string();
        }
    }

    pub fn confirm(&mut self) -> DialogOutcome {
        self.show = false;
        DialogOutcome::Confirmed
    }

    pub fn cancel(&mut self) -> DialogOutcome {
        self.show = false;
        DialogOutcome::Cancelled
    }

    /// Resolves the dialog from a typed answer. Anything other than a yes
    /// cancels.
    pub fn answer(&mut self, input: &str) -> DialogOutcome {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" | "e" | "evet" => self.confirm(),
            _ => self.cancel(),
        }
    }
}
