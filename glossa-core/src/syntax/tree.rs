//! Plain-text parse tree

use super::chunker::Phrase;

/// Render phrases as an indented tree rooted at `S`.
///
/// ```text
/// S
/// ├── NP
/// │   ├── the
/// │   └── cat
/// ```
pub fn render_parse_tree(phrases: &[Phrase]) -> String {
    let mut tree = String::from("S\n");
    for phrase in phrases {
        tree.push_str(&format!("├── {}\n", phrase.kind));
        let last = phrase.words.len().saturating_sub(1);
        for (i, word) in phrase.words.iter().enumerate() {
            let branch = if i == last { "└──" } else { "├──" };
            tree.push_str(&format!("│   {branch} {word}\n"));
        }
    }
    tree
}
