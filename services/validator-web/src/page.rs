//! HTML rendering for the validator form.

const TITLE: &str = "South African ID Validator";

/// Message shown when the form is posted without an `id_number` field.
pub const MISSING_ID_NUMBER: &str = "Please enter an ID number.";

/// Renders the form page, with `message` below the form when present.
///
/// `message` is escaped, since it may echo user input.
pub fn render(message: Option<&str>) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{TITLE}</title></head>
<body>
<h1>{TITLE}</h1>
<form method="POST">
    <label for="id_number">Enter ID Number:</label>
    <input type="text" id="id_number" name="id_number" required>
    <button type="submit">Validate</button>
</form>
"#
    );
    if let Some(message) = message {
        html.push_str("<p>");
        html.push_str(&html_escape::encode_text(message));
        html.push_str("</p>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_has_no_result() {
        let html = render(None);
        assert!(html.contains("<h1>South African ID Validator</h1>"));
        assert!(html.contains(r#"name="id_number""#));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_result_is_rendered() {
        let html = render(Some("Invalid ID: Must be 13 digits long."));
        assert!(html.contains("<p>Invalid ID: Must be 13 digits long.</p>"));
    }

    #[test]
    fn test_result_is_escaped() {
        let html = render(Some("ID: <script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
