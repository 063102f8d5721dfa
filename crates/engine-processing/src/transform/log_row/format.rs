use model::log::RowEvaluationContext;
use std::{fmt::Write, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// The platform convention: CRLF on Windows, LF elsewhere.
    #[default]
    Native,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native => "\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            "native" => Ok(LineEnding::Native),
            other => Err(format!(
                "unknown line ending '{other}', expected lf, crlf or native"
            )),
        }
    }
}

/// Renders the text of row log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageFormat {
    pub line_ending: LineEnding,
}

impl MessageFormat {
    pub fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    /// `inputRowMeta.size()=N, r.length=M`, with `>` instead of the comma
    /// when the row is short.
    pub fn basic_message(&self, ctx: &RowEvaluationContext<'_>) -> String {
        let mut buf = String::new();
        write_header(&mut buf, ctx);
        buf
    }

    /// The header followed by the field names and the row values on their own
    /// lines.
    pub fn detailed_message(&self, ctx: &RowEvaluationContext<'_>) -> String {
        let eol = self.line_ending.as_str();
        let mut buf = String::new();

        write_header(&mut buf, ctx);
        buf.push_str(eol);

        buf.push_str("META={");
        for (i, name) in ctx.field_names.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            buf.push_str(name);
        }
        buf.push('}');
        buf.push_str(eol);

        buf.push_str("ROW={");
        for (i, value) in ctx.values.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            let _ = write!(buf, "{value}");
        }
        buf.push('}');

        buf
    }
}

fn write_header(buf: &mut String, ctx: &RowEvaluationContext<'_>) {
    let separator = if ctx.is_under_run() { " > " } else { ", " };
    let _ = write!(
        buf,
        "inputRowMeta.size()={}{separator}r.length={}",
        ctx.expected_field_count, ctx.actual_value_count
    );
}
