//! Small utility helpers used across modules.

/// Strict string templating.
/// Replaces every `{key}` in the template with the matching value. A placeholder
/// with no value is an error carrying the placeholder name. Braces that do not
/// wrap an identifier (code blocks, JSON examples) are copied untouched.
pub fn render_template(tpl: &str, pairs: &[(&str, &str)]) -> Result<String, String> {
  let mut out = String::with_capacity(tpl.len());
  let mut rest = tpl;

  while let Some(open) = rest.find('{') {
    out.push_str(&rest[..open]);
    let after = &rest[open + 1..];
    match after.find('}') {
      Some(close) if is_ident(&after[..close]) => {
        let key = &after[..close];
        let value = pairs
          .iter()
          .find(|(k, _)| *k == key)
          .map(|(_, v)| *v)
          .ok_or_else(|| key.to_string())?;
        out.push_str(value);
        rest = &after[close + 1..];
      }
      _ => {
        out.push('{');
        rest = after;
      }
    }
  }
  out.push_str(rest);
  Ok(out)
}

fn is_ident(s: &str) -> bool {
  let mut chars = s.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Filesystem-safe stem: spaces become underscores, punctuation is dropped.
pub fn sanitize_file_stem(title: &str) -> String {
  let stem: String = title
    .trim()
    .chars()
    .filter_map(|c| match c {
      ' ' => Some('_'),
      c if c.is_alphanumeric() || c == '_' || c == '-' => Some(c),
      _ => None,
    })
    .collect();
  if stem.is_empty() { "challenge".into() } else { stem }
}

/// Models like to wrap JSON in a markdown fence; peel it off.
pub fn strip_code_fence(text: &str) -> &str {
  let t = text.trim();
  let t = t
    .strip_prefix("```json")
    .or_else(|| t.strip_prefix("```"))
    .unwrap_or(t);
  t.strip_suffix("```").unwrap_or(t).trim()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    let head: String = s.chars().take(max).collect();
    format!("{}… ({} bytes total)", head, s.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_substitutes_all_placeholders() {
    let out = render_template("Learn {language}, {name}!", &[("name", "Ada"), ("language", "Rust")]).unwrap();
    assert_eq!(out, "Learn Rust, Ada!");
  }

  #[test]
  fn render_reports_missing_parameter() {
    let err = render_template("Hello {name}, welcome to {language}", &[("name", "Ada")]).unwrap_err();
    assert_eq!(err, "language");
  }

  #[test]
  fn render_leaves_code_braces_alone() {
    let tpl = "fn main() {\n    {comment} TODO\n}\n{ \"correct\": true }";
    let out = render_template(tpl, &[("comment", "//")]).unwrap();
    assert_eq!(out, "fn main() {\n    // TODO\n}\n{ \"correct\": true }");
  }

  #[test]
  fn sanitize_strips_punctuation() {
    assert_eq!(sanitize_file_stem("BEGINNER DRILL"), "BEGINNER_DRILL");
    assert_eq!(sanitize_file_stem("Mission: Impossible!?"), "Mission_Impossible");
    assert_eq!(sanitize_file_stem("  ::  "), "challenge");
  }

  #[test]
  fn strip_fence_variants() {
    assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
    assert_eq!(strip_code_fence("  {}  "), "{}");
  }

  #[test]
  fn trunc_is_char_safe() {
    assert_eq!(trunc_for_log("abc", 5), "abc");
    assert!(trunc_for_log("ééééé", 2).starts_with("éé…"));
  }
}
