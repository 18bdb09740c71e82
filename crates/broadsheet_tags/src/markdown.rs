//! Small Markdown building blocks shared by tag renderers.

/// Wraps text in a GitHub caution alert blockquote.
///
/// Multi-line text stays inside the blockquote; every line gets a `> `
/// prefix after the `[!CAUTION]` marker line.
#[must_use]
pub fn caution_block(text: &str) -> String {
    let mut block = String::from("> [!CAUTION]");
    for line in text.lines() {
        block.push_str("\n> ");
        block.push_str(line);
    }
    block
}
