use super::ModulePath;
use regex::Regex;
use std::sync::LazyLock;

const LOG_TARGET: &str = "  manifest";

/// Matches `<module-path> v<version>` at the start of a line, after optional indentation.
///
/// Whitespace is the ASCII set `[\t\n\f\r ]` only, as in Go's `\s`; other Unicode
/// spaces are ordinary path characters.
static REQUIREMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\t\n\f\r ]*([^\t\n\f\r ]+) v([^\t\n\f\r ]+)").expect("requirement pattern is a valid regex")
});

/// Lazily extract repository identifiers from manifest lines, in line order.
///
/// Lines that don't look like a requirement, and requirements whose module path is too
/// short to name a repository, are skipped without error.
pub fn extract<I, S>(lines: I) -> impl Iterator<Item = ModulePath>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().filter_map(|line| parse_line(line.as_ref()))
}

/// Convenience wrapper around [`extract`] for manifest text already held in memory.
pub fn extract_from_str(text: &str) -> impl Iterator<Item = ModulePath> + '_ {
    extract(text.lines())
}

fn parse_line(line: &str) -> Option<ModulePath> {
    let module_path = REQUIREMENT_LINE.captures(line)?.get(1)?.as_str();
    let module = ModulePath::from_module_path(module_path);
    if module.is_none() {
        log::trace!(target: LOG_TARGET, "Ignoring module path '{module_path}' with too few segments");
    }

    module
}
