//! crates/logging/src/format.rs
//! Renders a record into the line handed to a sink.

use std::fmt::Write as _;

use super::category::DisplayTag;
use super::config::LoggerConfig;
use super::record::LogRecord;

const ESCAPE: &str = "\u{1b}[";
const RESET: &str = "\u{1b}[0m";

/// Returns the last component of a `/` or `\` separated path.
///
/// ```
/// use logging::file_name;
///
/// assert_eq!(file_name("/a/b/Widget.ext"), "Widget.ext");
/// assert_eq!(file_name(r"src\ui\view.rs"), "view.rs");
/// assert_eq!(file_name("main.rs"), "main.rs");
/// ```
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Renders `record` as a single line.
///
/// Plain output: `PREFIX GLYPH [file:line] function - message`.
/// Color output drops the glyph and wraps the rest of the line in the tag's
/// SGR sequence: `ESC[{color}mPREFIX [file:line] function - messageESC[0m`.
/// An empty prefix is omitted together with its separating space. A missing
/// message renders as empty text.
///
/// The result depends only on the arguments and the configuration values
/// read during the call.
pub fn format_line(record: &LogRecord<'_>, tag: DisplayTag, config: &LoggerConfig) -> String {
    let color = config.use_color_output();
    let site = &record.call_site;
    let message = record.message.unwrap_or_default();

    let mut line = String::with_capacity(64 + message.len());
    if color {
        line.push_str(ESCAPE);
        line.push_str(tag.color);
        line.push('m');
    }

    config.with_source_prefix(|prefix| {
        if !prefix.is_empty() {
            line.push_str(prefix);
            line.push(' ');
        }
    });

    if !color {
        line.push_str(tag.glyph);
        line.push(' ');
    }

    // Writing into a String cannot fail.
    let _ = write!(
        line,
        "[{}:{}] {} - {}",
        file_name(site.file),
        site.line,
        site.function,
        message
    );

    if color {
        line.push_str(RESET);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::record::CallSite;

    fn record(message: &str) -> LogRecord<'_> {
        LogRecord::new(
            Category::Default,
            Some(message),
            Some("2016-Jul-28"),
            CallSite::new("/a/b/Widget.ext", "refresh", 42),
        )
    }

    #[test]
    fn plain_line_layout() {
        let config = LoggerConfig::default();
        let line = format_line(&record("data 42"), Category::Default.tag(), &config);
        assert_eq!(line, "DLOG ⚫ [Widget.ext:42] refresh - data 42");
    }

    #[test]
    fn empty_prefix_is_omitted() {
        let config = LoggerConfig::default();
        config.set_source_prefix("");
        let line = format_line(&record("x"), Category::Critical.tag(), &config);
        assert_eq!(line, "🔴 [Widget.ext:42] refresh - x");
    }

    #[test]
    fn color_line_wraps_everything_and_drops_glyph() {
        let config = LoggerConfig::default();
        config.set_use_color_output(true);
        let tag = Category::Critical.tag();
        let line = format_line(&record("boom"), tag, &config);

        assert_eq!(
            line,
            "\u{1b}[48;2;220;100;100mDLOG [Widget.ext:42] refresh - boom\u{1b}[0m"
        );
        assert!(!line.contains(tag.glyph));
    }

    #[test]
    fn plain_line_has_no_escape_sequences() {
        let config = LoggerConfig::default();
        for category in Category::ALL {
            let line = format_line(&record("m"), category.tag(), &config);
            assert!(!line.contains('\u{1b}'), "{category:?}: {line}");
            assert!(line.contains(category.tag().glyph));
        }
    }

    #[test]
    fn directories_are_stripped() {
        let config = LoggerConfig::default();
        let line = format_line(&record("m"), Category::Default.tag(), &config);
        assert!(line.contains("[Widget.ext:42]"));
        assert!(!line.contains("/a/b/"));
    }

    #[test]
    fn formatting_is_deterministic() {
        let config = LoggerConfig::default();
        let rec = record("same");
        let first = format_line(&rec, Category::Reviewed.tag(), &config);
        let second = format_line(&rec, Category::Reviewed.tag(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_message_renders_empty() {
        let config = LoggerConfig::default();
        let mut rec = record("ignored");
        rec.message = None;
        let line = format_line(&rec, Category::Default.tag(), &config);
        assert!(line.ends_with("refresh - "));
    }

    #[test]
    fn file_name_handles_edge_cases() {
        assert_eq!(file_name(""), "");
        assert_eq!(file_name("dir/"), "");
        assert_eq!(file_name("C:\\src\\lib.rs"), "lib.rs");
    }
}
