//! Indentation-tracking text sink for generated Go source.

use std::borrow::Cow;

const TABS: &str = "\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t";
const SPACES: &str = "                                                                                                    ";

/// `n` tab characters. Borrowed from a fixed table for common depths.
pub fn tabs(n: usize) -> Cow<'static, str> {
    pad(TABS, '\t', n)
}

/// `n` spaces. Borrowed from a fixed table for common widths.
pub fn spaces(n: usize) -> Cow<'static, str> {
    pad(SPACES, ' ', n)
}

fn pad(table: &'static str, unit: char, n: usize) -> Cow<'static, str> {
    if n <= table.len() {
        Cow::Borrowed(&table[..n])
    } else {
        Cow::Owned(unit.to_string().repeat(n))
    }
}

/// Accumulates one generated file body, indenting by curly braces.
///
/// Leading and trailing whitespace of each line is dropped, so callers can
/// indent their templates for readability. A line starting with `}` is
/// written one level out; a line ending with `{` indents the following
/// lines.
///
/// Braces are counted per line with no lexing, so a brace at either end of
/// a string literal confuses it. Fix up with [`Printer::set_indent`] when
/// that happens.
#[derive(Debug, Default)]
pub struct Printer {
    buf: String,
    indent: isize,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line. An empty (or all-whitespace) line is a bare newline.
    pub fn line(&mut self, s: &str) {
        let s = s.trim();
        if s.is_empty() {
            self.buf.push('\n');
            return;
        }

        let closes = s.chars().take_while(|&c| c == '}').count();
        self.indent -= closes as isize;

        self.buf.push_str(&tabs(self.indent.max(0) as usize));
        self.buf.push_str(s);
        self.buf.push('\n');

        let opens = s.chars().rev().take_while(|&c| c == '{').count();
        self.indent += opens as isize;
    }

    /// Emit `text` as `//` comments, one per line. Blank text emits nothing.
    pub fn comment(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        for l in text.lines() {
            self.line(&format!("// {}", l.trim()));
        }
    }

    pub fn indent(&self) -> isize {
        self.indent
    }

    pub fn set_indent(&mut self, indent: isize) {
        self.indent = indent;
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Format and append one line to a [`Printer`].
macro_rules! p {
    ($printer:expr, $($arg:tt)*) => {
        $printer.line(&format!($($arg)*))
    };
}
pub(crate) use p;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brace_indentation() {
        let mut p = Printer::new();
        p.line("func f() {");
        p.line("if x {");
        p.line("return");
        p.line("}");
        p.line("}");
        p.line("");

        assert_eq!(p.as_str(), "func f() {\n\tif x {\n\t\treturn\n\t}\n}\n\n");
        assert_eq!(p.indent(), 0);
    }

    #[test]
    fn test_template_whitespace_is_trimmed() {
        let mut p = Printer::new();
        p.line("f(func() {");
        p.line("    return err");
        p.line("}, opts...)");

        assert_eq!(p.as_str(), "f(func() {\n\treturn err\n}, opts...)\n");
    }

    #[test]
    fn test_net_indentation_change() {
        let mut p = Printer::new();
        p.set_indent(2);
        p.line("}}");
        assert_eq!(p.indent(), 0);
        p.line("x := T{{");
        assert_eq!(p.indent(), 2);
        p.line("} else {");
        assert_eq!(p.indent(), 2);
        p.line("}");
        p.line("}");
        assert_eq!(p.indent(), 0);
        // Unbalanced closes still count; padding clamps at zero.
        p.line("}");
        assert_eq!(p.indent(), -1);
        assert!(p.as_str().ends_with("\n}\n"));
    }

    #[test]
    fn test_deep_indentation_past_table() {
        let mut p = Printer::new();
        p.set_indent(25);
        p.line("x");
        assert_eq!(p.as_str(), format!("{}x\n", "\t".repeat(25)));
    }

    #[test]
    fn test_comment() {
        let mut p = Printer::new();
        p.comment("  first line\n   second line \n");
        p.comment("   ");
        assert_eq!(p.as_str(), "// first line\n// second line\n");
    }

    #[test]
    fn test_padding() {
        assert_eq!(spaces(3), "   ");
        assert_eq!(spaces(150).len(), 150);
        assert_eq!(tabs(0), "");
        assert_eq!(tabs(30), "\t".repeat(30));
    }

    #[test]
    fn test_p_macro() {
        let mut printer = Printer::new();
        p!(printer, "type {}Client struct {{", "Foo");
        p!(printer, "}}");
        assert_eq!(printer.as_str(), "type FooClient struct {\n}\n");
    }
}
