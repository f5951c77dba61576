use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ReportError;

/// Render a one-off Tera template against any serializable value.
///
/// Template names should end in `.txt`; Tera only autoescapes HTML/XML names
/// and these outputs are plain text.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}
