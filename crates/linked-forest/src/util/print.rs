use crate::types::Node;

use super::{get_l, get_r};

/// Renders the subtree under `root` one node per line, left before right.
///
/// ```text
/// └─ 5
///   ← 3
///   → 8
/// ```
///
/// Walks with an explicit stack, so degenerate trees of any depth print fine.
pub fn print_tree<N, F>(arena: &[N], root: Option<u32>, tab: &str, label: F) -> String
where
    N: Node,
    F: Fn(&N) -> String,
{
    let Some(root) = root else {
        return format!("{tab}∅");
    };
    let mut out = String::new();
    let mut stack = vec![(root, tab.to_string(), "└─")];
    while let Some((idx, prefix, side)) = stack.pop() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{prefix}{side} {}", label(&arena[idx as usize])));
        let child_prefix = format!("{prefix}  ");
        if let Some(r) = get_r(arena, idx) {
            stack.push((r, child_prefix.clone(), "→"));
        }
        if let Some(l) = get_l(arena, idx) {
            stack.push((l, child_prefix, "←"));
        }
    }
    out
}
