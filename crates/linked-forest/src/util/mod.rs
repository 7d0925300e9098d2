//! Arena-level link utilities.
//!
//! Everything here works on a plain node slice and `u32` indices and knows
//! nothing about positions or validation. [`crate::linked::LinkedBinaryTree`]
//! validates its inputs and then delegates to these functions.

pub mod print;

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Makes `child` the left (`left == true`) or right child of `parent`.
pub fn relink<N: Node>(arena: &mut [N], parent: u32, child: Option<u32>, left: bool) {
    if left {
        set_l(arena, parent, child);
    } else {
        set_r(arena, parent, child);
    }
    if let Some(c) = child {
        set_p(arena, c, Some(parent));
    }
}

/// Rotates `x` above its parent `y`.
///
/// ```text
///       y                x
///      / \              / \
///     x   c    →       a   y
///    / \                  / \
///   a   b                b   c
/// ```
///
/// The mirrored case is symmetric. In-order sequence is preserved. Returns the
/// new tree root, which is `x` when `y` was the root and `root` otherwise.
/// A root `x` is left untouched.
pub fn rotate<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let Some(y) = get_p(arena, x) else {
        return root;
    };
    let root = match get_p(arena, y) {
        Some(z) => {
            let y_is_left = get_l(arena, z) == Some(y);
            relink(arena, z, Some(x), y_is_left);
            root
        }
        None => {
            set_p(arena, x, None);
            Some(x)
        }
    };
    if get_l(arena, y) == Some(x) {
        let b = get_r(arena, x);
        relink(arena, y, b, true);
        relink(arena, x, Some(y), false);
    } else {
        let b = get_l(arena, x);
        relink(arena, y, b, false);
        relink(arena, x, Some(y), true);
    }
    root
}
