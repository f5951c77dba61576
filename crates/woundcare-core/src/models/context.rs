use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Optional patient details captured alongside a photo.
///
/// Carried to history and summaries only; classification never reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub diabetes: Option<bool>,
    /// Self-reported pain, 0–10.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pain: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl PatientContext {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.diabetes.is_none() && self.pain.is_none() && self.notes.is_none()
    }

    /// Populated fields as `(name, value)` pairs in a fixed order. Blank notes
    /// are skipped.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(age) = self.age {
            fields.push(("age", age.to_string()));
        }
        if let Some(diabetes) = self.diabetes {
            fields.push(("diabetes", if diabetes { "yes" } else { "no" }.to_string()));
        }
        if let Some(pain) = self.pain {
            fields.push(("pain", format!("{pain}/10")));
        }
        if let Some(notes) = self.notes.as_deref()
            && !notes.trim().is_empty()
        {
            fields.push(("notes", notes.trim().to_string()));
        }
        fields
    }
}
