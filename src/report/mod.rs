//! Report generator: one prediction, one short DOCX document
//!
//! Pure function of (input text, prediction). The caller owns the
//! resulting byte buffer; nothing here touches the filesystem.

use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run};

use crate::classifier::Prediction;
use crate::errors::{AdvisorError, Result};

/// Fixed filename the export command writes to
pub const REPORT_FILE_NAME: &str = "AI_Doctor_Report.docx";

/// Media type of the generated document
pub const REPORT_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Fixed document heading
pub const REPORT_HEADING: &str = "AI Doctor - Medical Report";

/// Generate the report document for one completed request
///
/// Layout is fixed: centered heading, then five labeled lines in the
/// literal order symptoms, disease, English medicine, Ayurvedic
/// medicine, diet. Byte-deterministic for identical inputs.
pub fn generate(symptoms: &str, prediction: &Prediction) -> Result<Vec<u8>> {
    let docx = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(REPORT_HEADING).bold().size(32)),
        )
        .add_paragraph(line("Symptoms", symptoms))
        .add_paragraph(line("Disease", &prediction.disease))
        .add_paragraph(line("English Medicine", &prediction.medicine_en))
        .add_paragraph(line("Ayurvedic Medicine", &prediction.medicine_ayurvedic))
        .add_paragraph(line("Diet Recommendation", &prediction.diet));

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|err| AdvisorError::ReportError(err.to_string()))?;

    Ok(buffer.into_inner())
}

/// One labeled report line
fn line(label: &str, value: &str) -> Paragraph {
    let text = format!("{label}: {value}");
    Paragraph::new().add_run(Run::new().add_text(text.as_str()))
}
