use crate::S;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

pub fn has_template(template: &str) -> bool {
    TEMPLATE_REGEX.is_match(template)
}

/// Fill `${key}` placeholders from the given map. A placeholder with no value
/// is a template/code drift bug and must surface, not pass silently.
pub fn fill_template(template: &str, vars: &HashMap<String, String>) -> Result<String, String> {
    let mut invalid = None;

    let result = TEMPLATE_REGEX.replace_all(template, |captures: &regex::Captures| -> String {
        let key = captures[1].to_string();
        if let Some(value) = vars.get(&key) {
            value.clone()
        } else {
            invalid = Some(format!("Invalid key ({}) in pattern", key));
            S!("")
        }
    });
    match invalid {
        Some(err) => Err(err),
        None => Ok(S!(result)),
    }
}
