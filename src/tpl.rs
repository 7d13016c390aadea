use std::collections::HashMap;

/// Variable table for resolving $VARIABLE references in filename templates
pub struct Vars {
    values: HashMap<String, String>,
}

impl Vars {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Register a variable with its value
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// Expand all $VARIABLE references in the input.
    /// Unknown variables are left untouched.
    pub fn expand(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(idx) = rest.find('$') {
            out.push_str(&rest[..idx]);
            rest = &rest[idx + 1..];

            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let key = &rest[..end];

            match self.values.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('$');
                    out.push_str(key);
                }
            }

            rest = &rest[end..];
        }

        out.push_str(rest);
        out
    }
}

impl Default for Vars {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_expansion() {
        let mut vars = Vars::new();
        vars.set("NAME", "libzip");
        vars.set("VERSION", "0.11.1");

        let result = vars.expand("$NAME-$VERSION-mod");
        assert_eq!(result, "libzip-0.11.1-mod");
    }

    #[test]
    fn test_multiple_occurrences() {
        let mut vars = Vars::new();
        vars.set("NAME", "test");

        let result = vars.expand("$NAME-$NAME");
        assert_eq!(result, "test-test");
    }

    #[test]
    fn test_unknown_variable_left_untouched() {
        let vars = Vars::new();

        let result = vars.expand("prefix-$UNKNOWN.tar.gz");
        assert_eq!(result, "prefix-$UNKNOWN.tar.gz");
    }

    #[test]
    fn test_trailing_dollar() {
        let vars = Vars::new();

        assert_eq!(vars.expand("cost$"), "cost$");
    }
}
