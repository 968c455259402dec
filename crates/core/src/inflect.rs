//! English word-casing adapter.
//!
//! Case conversion goes through `heck`; singularization uses an ordered table of
//! suffix rules where the first matching rule wins.

use heck::{ToSnakeCase, ToUpperCamelCase};
use namescope_api::WordCasing;
use once_cell::sync::Lazy;
use regex::Regex;

struct SuffixRule {
    pattern: Regex,
    replacement: &'static str,
}

fn rule(pattern: &str, replacement: &'static str) -> SuffixRule {
    SuffixRule {
        pattern: Regex::new(pattern).expect("invalid singular rule - this is a fatal error"),
        replacement,
    }
}

/// Singular rules, highest priority first.
static SINGULAR_RULES: Lazy<Vec<SuffixRule>> = Lazy::new(|| {
    vec![
        // irregulars
        rule(r"(?i)(z)ombies$", "${1}ombie"),
        rule(r"(?i)(m)oves$", "${1}ove"),
        rule(r"(?i)(s)exes$", "${1}ex"),
        rule(r"(?i)(c)hildren$", "${1}hild"),
        rule(r"(?i)(m)en$", "${1}an"),
        rule(r"(?i)(p)eople$", "${1}erson"),
        // regular suffixes
        rule(r"(?i)(database)s$", "${1}"),
        rule(r"(?i)(quiz)zes$", "${1}"),
        rule(r"(?i)(matr)ices$", "${1}ix"),
        rule(r"(?i)(vert|ind)ices$", "${1}ex"),
        rule(r"(?i)^(ox)en", "${1}"),
        rule(r"(?i)(alias|status)(es)?$", "${1}"),
        rule(r"(?i)(octop|vir)(us|i)$", "${1}us"),
        rule(r"(?i)^(a)x[ie]s$", "${1}xis"),
        rule(r"(?i)(cris|test)(is|es)$", "${1}is"),
        rule(r"(?i)(shoe)s$", "${1}"),
        rule(r"(?i)(o)es$", "${1}"),
        rule(r"(?i)(bus)(es)?$", "${1}"),
        rule(r"(?i)^(m|l)ice$", "${1}ouse"),
        rule(r"(?i)(x|ch|ss|sh)es$", "${1}"),
        rule(r"(?i)(m)ovies$", "${1}ovie"),
        rule(r"(?i)(s)eries$", "${1}eries"),
        rule(r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
        rule(r"(?i)([lr])ves$", "${1}f"),
        rule(r"(?i)(tive)s$", "${1}"),
        rule(r"(?i)(hive)s$", "${1}"),
        rule(r"(?i)([^f])ves$", "${1}fe"),
        rule(r"(?i)(^analy)(sis|ses)$", "${1}sis"),
        rule(
            r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
            "${1}sis",
        ),
        rule(r"(?i)([ti])a$", "${1}um"),
        rule(r"(?i)(n)ews$", "${1}ews"),
        rule(r"(?i)(ss)$", "${1}"),
        rule(r"(?i)s$", ""),
    ]
});

static UNCOUNTABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:equipment|information|rice|money|species|series|fish|sheep|jeans|police)$",
    )
    .expect("invalid uncountable pattern - this is a fatal error")
});

/// Title-case token made only of ASCII letters and digits, e.g. `UsersController`.
static TITLE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("invalid title pattern - this is a fatal error")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishInflector;

impl EnglishInflector {
    pub fn new() -> Self {
        Self
    }
}

impl WordCasing for EnglishInflector {
    fn classify(&self, word: &str) -> String {
        let singular = self.singularize(word);
        // Already title-case tokens keep their casing (including acronym runs).
        if TITLE_TOKEN.is_match(&singular) {
            singular
        } else {
            singular.to_upper_camel_case()
        }
    }

    fn underscore(&self, token: &str) -> String {
        token.to_snake_case()
    }

    fn singularize(&self, word: &str) -> String {
        if word.is_empty() || UNCOUNTABLE.is_match(word) {
            return word.to_string();
        }
        for rule in SINGULAR_RULES.iter() {
            if rule.pattern.is_match(word) {
                return rule.pattern.replace(word, rule.replacement).into_owned();
            }
        }
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singularize() {
        let inflector = EnglishInflector;
        let cases = [
            ("users", "user"),
            ("games", "game"),
            ("categories", "category"),
            ("Categories", "Category"),
            ("user_handlers", "user_handler"),
            ("user_handler", "user_handler"),
            ("statuses", "status"),
            ("status", "status"),
            ("addresses", "address"),
            ("indices", "index"),
            ("index", "index"),
            ("boxes", "box"),
            ("people", "person"),
            ("children", "child"),
            ("analyses", "analysis"),
            ("wolves", "wolf"),
            ("knives", "knife"),
            ("sheep", "sheep"),
            ("dummy", "dummy"),
        ];
        for (plural, singular) in cases {
            assert_eq!(inflector.singularize(plural), singular, "singularize({plural})");
        }
    }

    #[test]
    fn test_classify() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.classify("commands"), "Command");
        assert_eq!(inflector.classify("open_tags"), "OpenTag");
        assert_eq!(inflector.classify("Models"), "Model");
        assert_eq!(inflector.classify("dummy"), "Dummy");
        assert_eq!(inflector.classify("UsersController"), "UsersController");
        assert_eq!(inflector.classify("Index"), "Index");
        assert_eq!(inflector.classify("HTMLParser"), "HTMLParser");
    }

    #[test]
    fn test_underscore() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.underscore("UsersController"), "users_controller");
        assert_eq!(inflector.underscore("UserHandler"), "user_handler");
        assert_eq!(inflector.underscore("Dummy"), "dummy");
    }
}
