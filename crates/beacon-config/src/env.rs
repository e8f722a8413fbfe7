use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// Runs before deserialization so config structs hold plain values.
/// Comment lines pass through untouched; a referenced variable that is not
/// set is an error.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\{\{\s*env\.([A-Za-z0-9_]+)\s*\}\}").expect("must be valid regex"))
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in re().captures_iter(line) {
            let overall = captures.get(0).expect("capture 0 always exists");
            let var_name = &captures[1];

            output.push_str(&line[last_end..overall.start()]);
            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => return Err(format!("environment variable not found: `{var_name}`")),
            }
            last_end = overall.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholders() {
        let input = "key = \"value\"";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn single_env_var() {
        temp_env::with_var("BEACON_TEST_VAR", Some("hello"), || {
            let result = expand_env("key = \"{{ env.BEACON_TEST_VAR }}\"").unwrap();
            assert_eq!(result, "key = \"hello\"");
        });
    }

    #[test]
    fn multiple_env_vars_on_separate_lines() {
        let vars = [("BEACON_FOO", Some("foo")), ("BEACON_BAR", Some("bar"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("a = \"{{ env.BEACON_FOO }}\"\nb = \"{{ env.BEACON_BAR }}\"").unwrap();
            assert_eq!(result, "a = \"foo\"\nb = \"bar\"");
        });
    }

    #[test]
    fn missing_env_var_is_an_error() {
        temp_env::with_var_unset("BEACON_MISSING_VAR", || {
            let err = expand_env("key = \"{{ env.BEACON_MISSING_VAR }}\"").unwrap_err();
            assert!(err.contains("BEACON_MISSING_VAR"));
        });
    }

    #[test]
    fn commented_lines_skip_expansion() {
        temp_env::with_var_unset("BEACON_MISSING_VAR", || {
            let input = "# key = \"{{ env.BEACON_MISSING_VAR }}\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let input = "key = \"value\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }
}
