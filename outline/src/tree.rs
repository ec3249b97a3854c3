#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_HEADING_LEVEL;
use crate::heading::{Heading, anchor_id};

/// One entry of the outline tree.
///
/// `anchor` is the bare element id (`heading-3`), without the `#` fragment
/// prefix; [`OutlineNode::href`] produces the link form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub anchor: String,
    pub text: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Fragment link target for this entry (`#heading-3`).
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Build the nested outline for a post's headings, in document order.
///
/// The scan keeps an explicit stack of open lists: a list is pushed when the
/// heading level increases and popped (attached to the last entry of the
/// list below) when it decreases. The root list is index 0 and is never
/// popped.
///
/// Level jumps collapse to single structural steps: `[2,5]` nests the h5
/// exactly one level under the h2, with no synthetic empty levels for the
/// skipped ranks. Ascents walk up one list per rank but stop at the root,
/// so `[2,5,2]` ends with the final h2 back at the top level.
///
/// The i-th heading (1-based) always receives anchor `heading-{i}` and
/// produces exactly one node, so the output node count equals the input
/// heading count.
#[must_use]
pub fn build(headings: &[Heading]) -> Vec<OutlineNode> {
    let mut stack: Vec<Vec<OutlineNode>> = vec![Vec::new()];
    let mut current_level = MIN_HEADING_LEVEL;

    for (index, heading) in headings.iter().enumerate() {
        if heading.level > current_level {
            // One nesting step regardless of jump size. A descent only
            // opens a list when there is an entry to hang it on; if the
            // current list is still empty the entry stays at this depth.
            if stack.last().is_some_and(|list| !list.is_empty()) {
                stack.push(Vec::new());
            }
        } else if heading.level < current_level {
            for _ in 0..(current_level - heading.level) {
                if stack.len() == 1 {
                    break;
                }
                close_top(&mut stack);
            }
        }
        current_level = heading.level;

        if let Some(open) = stack.last_mut() {
            open.push(OutlineNode {
                anchor: anchor_id(index),
                text: heading.text.clone(),
                children: Vec::new(),
            });
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack.pop().unwrap_or_default()
}

/// Total number of entries in a built tree, all depths included.
#[must_use]
pub fn count(nodes: &[OutlineNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count(&node.children))
        .sum()
}

/// Pop the open list on top of the stack and attach it as the children of
/// the most recently appended entry one level down.
///
/// Callers guarantee the stack holds at least two lists. A list is only
/// ever pushed on top of a non-empty one, so the parent entry exists; if
/// the popped list is empty the parent simply keeps no children.
fn close_top(stack: &mut Vec<Vec<OutlineNode>>) {
    let Some(closed) = stack.pop() else {
        return;
    };
    if let Some(parent) = stack.last_mut().and_then(|list| list.last_mut()) {
        parent.children = closed;
    }
}
