//! HTML rendering for the browser-facing pages.
//!
//! Pure string templating: the form page listing every symptom as a
//! checkbox, and the result page (or its error variant) for a
//! submitted selection. All user-influenced text is escaped before
//! embedding.

use crate::advisory::AdvisoryBundle;
use crate::predictor::Prediction;

/// Escape `& < > " '` for safe embedding in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Human-readable form of a symptom identifier:
/// `"runny_nose"` → `"Runny Nose"`.
pub fn display_name(symptom: &str) -> String {
    symptom
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Symptom-selection form: one checkbox per known symptom, posting the
/// repeated `symptoms` field to `/predict`.
pub fn index_page(symptoms: &[String]) -> String {
    let mut checkboxes = String::new();
    for (i, symptom) in symptoms.iter().enumerate() {
        let value = escape_html(symptom);
        let label = escape_html(&display_name(symptom));
        checkboxes.push_str(&format!(
            r#"        <div class="symptom-checkbox">
          <input type="checkbox" name="symptoms" value="{value}" id="symptom_{i}">
          <label for="symptom_{i}">{label}</label>
        </div>
"#
        ));
    }

    let content = format!(
        r#"    <div class="card">
      <div class="card-header">
        <h4>Select Your Symptoms</h4>
        <small>Choose all symptoms you are currently experiencing</small>
      </div>
      <form method="POST" action="/predict">
        <div class="symptom-grid">
{checkboxes}        </div>
        <div class="actions">
          <button type="submit">Get Diagnosis &amp; Recommendations</button>
        </div>
      </form>
    </div>
"#
    );

    page_shell("Personalized Medicine Recommendation System", &content)
}

/// Result page for a completed prediction.
pub fn result_page(
    prediction: &Prediction,
    selected: &[String],
    info: &AdvisoryBundle,
) -> String {
    let condition = escape_html(&prediction.condition);
    let confidence = format!("{:.2}", prediction.confidence);

    let badges: String = selected
        .iter()
        .map(|s| format!(r#"<span class="badge">{}</span> "#, escape_html(&display_name(s))))
        .collect();

    let description = if info.description.is_empty() {
        String::new()
    } else {
        format!(
            "      <h5>Description</h5>\n      <p>{}</p>\n",
            escape_html(&info.description)
        )
    };

    let content = format!(
        r#"    <div class="card">
      <div class="card-header">
        <h4>Diagnosis Result</h4>
      </div>
      <h3>{condition}</h3>
      <p>Based on your symptoms, our system predicts this condition with
         <strong>{confidence}% confidence</strong>.</p>
      <div class="progress">
        <div class="progress-bar" style="width: {confidence}%">{confidence}%</div>
      </div>
{description}      <h5>Your Selected Symptoms</h5>
      <p>{badges}</p>
    </div>
{medications}{diet}{precautions}{workouts}    <div class="card disclaimer">
      <h5>Important Medical Disclaimer</h5>
      <p>This system is designed for educational and informational purposes only.
         The predictions and recommendations provided should not replace
         professional medical advice, diagnosis, or treatment. Always consult
         with qualified healthcare professionals.</p>
    </div>
    <div class="actions">
      <a href="/" class="button">New Diagnosis</a>
    </div>
"#,
        medications = list_section("Recommended Medications", &info.medications),
        diet = list_section("Dietary Recommendations", &info.diet),
        precautions = list_section("Precautions", &info.precautions),
        workouts = list_section("Exercise Recommendations", &info.workouts),
    );

    page_shell("Diagnosis Results - Personalized Medicine System", &content)
}

/// Error variant of the result page.
pub fn error_page(message: &str) -> String {
    let content = format!(
        r#"    <div class="card error">
      <p>{}</p>
    </div>
    <div class="actions">
      <a href="/" class="button">Try Again</a>
    </div>
"#,
        escape_html(message)
    );

    page_shell("Diagnosis Results - Personalized Medicine System", &content)
}

/// One titled list card; empty lists render nothing.
fn list_section(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let entries: String = items
        .iter()
        .map(|item| format!("        <li>{}</li>\n", escape_html(item)))
        .collect();
    format!(
        "    <div class=\"card\">\n      <div class=\"card-header\"><h5>{title}</h5></div>\n      <ul>\n{entries}      </ul>\n    </div>\n"
    )
}

fn page_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    body {{
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      margin: 0;
    }}
    .main-container {{
      background: rgba(255, 255, 255, 0.95);
      border-radius: 15px;
      max-width: 960px;
      margin: 20px auto;
      padding: 30px;
    }}
    .header {{ text-align: center; margin-bottom: 30px; }}
    .header h1 {{ color: #667eea; }}
    .card {{
      border-radius: 15px;
      box-shadow: 0 5px 15px rgba(0, 0, 0, 0.08);
      margin-bottom: 20px;
      padding: 0 0 15px 0;
      overflow: hidden;
    }}
    .card > *:not(.card-header) {{ margin-left: 20px; margin-right: 20px; }}
    .card-header {{
      background: linear-gradient(45deg, #667eea, #764ba2);
      color: white;
      padding: 10px 20px;
    }}
    .card.error p {{ color: #b02a37; font-weight: 600; margin-top: 15px; }}
    .symptom-grid {{
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 6px;
      margin-top: 15px;
    }}
    .badge {{
      background: #667eea;
      color: white;
      border-radius: 10px;
      padding: 3px 10px;
      display: inline-block;
      margin: 2px;
    }}
    .progress {{ background: #e9ecef; border-radius: 10px; height: 20px; }}
    .progress-bar {{
      background: #198754;
      color: white;
      border-radius: 10px;
      height: 100%;
      text-align: center;
      font-size: 13px;
    }}
    .actions {{ text-align: center; margin: 20px 0; }}
    button, .button {{
      background: linear-gradient(45deg, #667eea, #764ba2);
      color: white;
      border: none;
      border-radius: 25px;
      padding: 12px 30px;
      font-weight: 600;
      text-decoration: none;
      display: inline-block;
      cursor: pointer;
    }}
    .footer {{ text-align: center; margin-top: 30px; font-size: 14px; }}
  </style>
</head>
<body>
  <div class="main-container">
    <div class="header">
      <h1>Personalized Medicine Recommendation System</h1>
      <p>Disease prediction and personalized treatment recommendations</p>
    </div>
{content}    <div class="footer">
      <p>This system is for educational purposes only. Always consult with
         healthcare professionals for medical advice.</p>
    </div>
  </div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prediction() -> Prediction {
        Prediction {
            condition: "Common Cold".to_string(),
            confidence: 100.0,
        }
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#x27;s");
    }

    #[test]
    fn display_name_titles_each_word() {
        assert_eq!(display_name("runny_nose"), "Runny Nose");
        assert_eq!(display_name("fever"), "Fever");
        assert_eq!(display_name("sensitivity_to_light"), "Sensitivity To Light");
    }

    #[test]
    fn index_page_lists_every_symptom_once() {
        let symptoms = vec!["cough".to_string(), "fever".to_string()];
        let page = index_page(&symptoms);
        assert_eq!(page.matches(r#"value="cough""#).count(), 1);
        assert_eq!(page.matches(r#"value="fever""#).count(), 1);
        assert!(page.contains(r#"action="/predict""#));
        assert!(page.contains("Cough"));
    }

    #[test]
    fn result_page_shows_prediction_and_sections() {
        let info = AdvisoryBundle {
            description: "A viral infection.".to_string(),
            medications: vec!["Decongestants".to_string()],
            diet: vec![],
            precautions: vec!["take vapour".to_string()],
            workouts: vec![],
        };
        let selected = vec!["cough".to_string()];
        let page = result_page(&sample_prediction(), &selected, &info);

        assert!(page.contains("Common Cold"));
        assert!(page.contains("100.00% confidence"));
        assert!(page.contains("Decongestants"));
        assert!(page.contains("take vapour"));
        // Empty sections are omitted entirely
        assert!(!page.contains("Dietary Recommendations"));
        assert!(!page.contains("Exercise Recommendations"));
        assert!(page.contains("Medical Disclaimer"));
    }

    #[test]
    fn result_page_escapes_advisory_text() {
        let info = AdvisoryBundle {
            description: "<b>bold claim</b>".to_string(),
            ..AdvisoryBundle::default()
        };
        let page = result_page(&sample_prediction(), &["cough".to_string()], &info);
        assert!(!page.contains("<b>bold claim</b>"));
        assert!(page.contains("&lt;b&gt;bold claim&lt;/b&gt;"));
    }

    #[test]
    fn error_page_escapes_the_message() {
        let page = error_page("<img src=x onerror=alert(1)>");
        assert!(!page.contains("<img"));
        assert!(page.contains("&lt;img"));
        assert!(page.contains("Try Again"));
    }
}
