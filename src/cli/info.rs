use crate::cipher::PolybiosSquare;
use crate::error::Result;
use crate::method::{KeyKind, Method};
use serde::Serialize;

/// Render the Polybios square derived from `key`
pub fn show_matrix(key: &str) -> String {
    let square = PolybiosSquare::from_key(key);

    let mut output = String::new();
    output.push_str("Polybios Square\n");
    output.push_str("===============\n\n");
    if key.is_empty() {
        output.push_str("Key: (none)\n\n");
    } else {
        output.push_str(&format!("Key: {}\n\n", key));
    }
    output.push_str(&square.to_string());
    output
}

#[derive(Debug, Serialize)]
struct MethodInfo {
    name: &'static str,
    display_name: &'static str,
    parameter: KeyKind,
    bulk: bool,
}

fn parameter_hint(kind: KeyKind) -> &'static str {
    match kind {
        KeyKind::Rails => "--rails <N> (>= 1)",
        KeyKind::Shift => "--shift <N>",
        KeyKind::Key => "--key <KEY> (required)",
        KeyKind::OptionalKey => "--key <KEY> (optional)",
        KeyKind::None => "none",
    }
}

/// List every method with its parameter and bulk support
pub fn list_methods(as_json: bool) -> Result<String> {
    if as_json {
        let infos: Vec<MethodInfo> = Method::ALL
            .iter()
            .map(|m| MethodInfo {
                name: m.name(),
                display_name: m.display_name(),
                parameter: m.key_kind(),
                bulk: m.supports_bulk(),
            })
            .collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&infos)?));
    }

    let mut output = String::new();
    output.push_str("Methods\n");
    output.push_str("=======\n\n");
    for method in Method::ALL {
        output.push_str(&format!(
            "  {:<12} {:<12} {:<24} bulk: {}\n",
            method.name(),
            method.display_name(),
            parameter_hint(method.key_kind()),
            if method.supports_bulk() { "yes" } else { "no" }
        ));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_matrix() {
        let output = show_matrix("KEYWORD");
        assert!(output.contains("Key: KEYWORD"));
        assert!(output.contains("1 | K E Y W O"));
        assert!(output.contains("2 | R D A B C"));
    }

    #[test]
    fn test_show_matrix_without_key() {
        let output = show_matrix("");
        assert!(output.contains("Key: (none)"));
        assert!(output.contains("1 | A B C D E"));
    }

    #[test]
    fn test_list_methods_text() {
        let output = list_methods(false).unwrap();
        for method in Method::ALL {
            assert!(output.contains(method.name()));
        }
        assert!(output.contains("--rails <N>"));
    }

    #[test]
    fn test_list_methods_json() {
        let output = list_methods(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), Method::ALL.len());
        assert_eq!(entries[0]["name"], "rail-fence");
        assert_eq!(entries[0]["parameter"], "rails");
        assert_eq!(entries[0]["bulk"], true);
        assert_eq!(entries[4]["parameter"], "none");
    }
}
