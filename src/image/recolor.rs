//! Flat-color rewriting of SVG markup.
//!
//! Pure textual transform: every paint-carrying attribute or inline-style
//! property (`fill`, `stroke`, `stop-color`, in hex/`rgb()`/`rgba()` forms)
//! is rewritten to a single flat color, gradient definitions are stripped,
//! and `url(#...)` paint references are replaced with the flat literal.
//!
//! No DOM parsing, only ordered regex substitution: per-attribute rules
//! first, then gradient-tag removal, then reference-URL replacement.
//! Paint applied through CSS classes in a `<style>` block, `currentColor`,
//! or nested `<use>` references is not rewritten; known limitation.

use regex::Regex;
use std::sync::LazyLock;

/// Flat recolor target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatColor {
    Black,
    White,
}

impl FlatColor {
    /// The CSS color literal written into the markup.
    pub fn literal(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

/// How a matched paint site is rewritten.
enum Rewrite {
    /// `name="..."` attribute form.
    Attr(&'static str),
    /// `name:value` inline-style form.
    Style(&'static str),
}

struct Rule {
    re: Regex,
    rewrite: Rewrite,
}

impl Rule {
    fn replacement(&self, color: &str) -> String {
        match self.rewrite {
            Rewrite::Attr(name) => format!("{name}=\"{color}\""),
            Rewrite::Style(name) => format!("{name}:{color}"),
        }
    }
}

/// Per-attribute substitution rules, applied in order.
static PAINT_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let mut rules = Vec::new();
    for name in ["fill", "stroke", "stop-color"] {
        rules.push(Rule {
            re: Regex::new(&format!(r#"{name}="[^"]*""#)).unwrap(),
            rewrite: Rewrite::Attr(name),
        });
        rules.push(Rule {
            re: Regex::new(&format!(r"{name}:#[0-9A-Fa-f]{{3,6}}")).unwrap(),
            rewrite: Rewrite::Style(name),
        });
        rules.push(Rule {
            re: Regex::new(&format!(r"{name}:rgb\([^)]*\)")).unwrap(),
            rewrite: Rewrite::Style(name),
        });
        rules.push(Rule {
            re: Regex::new(&format!(r"{name}:rgba\([^)]*\)")).unwrap(),
            rewrite: Rewrite::Style(name),
        });
    }
    rules
});

/// Gradient elements removed wholesale (their stops are useless once every
/// paint is flat).
static GRADIENT_TAGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?s)<linearGradient[^>]*>.*?</linearGradient>").unwrap(),
        Regex::new(r"(?s)<radialGradient[^>]*>.*?</radialGradient>").unwrap(),
    ]
});

/// `url(#...)` paint references left dangling by gradient removal.
static URL_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"url\(#[^)]+\)").unwrap());

/// Rewrite all paints in `markup` to the given flat color.
///
/// Idempotent for a given target: matched attributes are rewritten to the
/// same literal on every pass, and gradients can only be removed once.
pub fn recolor(markup: &str, target: FlatColor) -> String {
    let color = target.literal();

    let mut out = markup.to_string();
    for rule in PAINT_RULES.iter() {
        out = rule.re.replace_all(&out, rule.replacement(color)).into_owned();
    }
    for tag in GRADIENT_TAGS.iter() {
        out = tag.replace_all(&out, "").into_owned();
    }
    URL_REF.replace_all(&out, color).into_owned()
}
