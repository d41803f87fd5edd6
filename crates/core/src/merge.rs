//! Paragraph repair: fuse islands that continue an unfinished block.
//!
//! Blocks are taken from a working list in label order. A block whose text
//! has no terminal punctuation followed by a line break is *incomplete*; it
//! absorbs every remaining block that starts on a lower row and whose left
//! edge is within the indentation threshold of its own. Absorbed blocks leave
//! the working list. A freshly extended block is not examined again, so each
//! incomplete block merges at most once.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Block, SegmentOptions};

/// `true` when `text` contains terminal punctuation followed by optional
/// whitespace and a line break, anywhere in the text.
pub fn is_complete(text: &str) -> bool {
    static RE_TERMINAL: OnceLock<Regex> = OnceLock::new();
    let re = RE_TERMINAL.get_or_init(|| Regex::new(r"[.!?][^\S\n]*\n").unwrap());
    re.is_match(text)
}

/// `true` when the starting columns of `a` and `b` differ by strictly less
/// than `threshold`.
pub fn indentation_compatible(a: &Block, b: &Block, threshold: usize) -> bool {
    a.col_min.abs_diff(b.col_min) < threshold
}

/// Merge vertically continued blocks. `texts[i]` must be the text of
/// `blocks[i]`; the returned blocks carry no text.
pub fn merge_blocks<S: AsRef<str>>(
    blocks: &[Block],
    texts: &[S],
    options: &SegmentOptions,
) -> Vec<Block> {
    debug_assert_eq!(blocks.len(), texts.len());

    let mut work = WorkingList::new(blocks);
    let mut merged = Vec::with_capacity(blocks.len());

    while let Some((index, mut block)) = work.pop_front() {
        if is_complete(texts[index].as_ref()) {
            merged.push(block);
            continue;
        }

        let selected: Vec<usize> = work
            .remaining()
            .filter(|(_, other)| other.row_min > block.row_min)
            .filter(|(_, other)| {
                indentation_compatible(&block, other, options.indentation_threshold)
            })
            .map(|(i, _)| i)
            .collect();

        for &i in &selected {
            block.extend_to(blocks[i].bottom_right());
        }
        if !selected.is_empty() {
            log::debug!(
                "block {} at {:?} absorbed {:?}, now ends at {:?}",
                index,
                block.top_left(),
                selected,
                block.bottom_right()
            );
        }
        for i in selected {
            work.remove(i);
        }

        merged.push(block);
    }

    merged
}

/// Ordered working list with removal by index. Removed entries are
/// tombstoned, and removing one twice is a no-op.
struct WorkingList<'a> {
    blocks: &'a [Block],
    removed: Vec<bool>,
    next: usize,
}

impl<'a> WorkingList<'a> {
    fn new(blocks: &'a [Block]) -> Self {
        Self {
            blocks,
            removed: vec![false; blocks.len()],
            next: 0,
        }
    }

    fn pop_front(&mut self) -> Option<(usize, Block)> {
        while self.next < self.blocks.len() {
            let index = self.next;
            self.next += 1;
            if !self.removed[index] {
                self.removed[index] = true;
                return Some((index, self.blocks[index]));
            }
        }
        None
    }

    fn remaining(&self) -> impl Iterator<Item = (usize, &'a Block)> + '_ {
        let blocks = self.blocks;
        let removed = &self.removed;
        (self.next..blocks.len())
            .filter(move |&i| !removed[i])
            .map(move |i| (i, &blocks[i]))
    }

    /// Returns `false` when the entry was already gone.
    fn remove(&mut self, index: usize) -> bool {
        match self.removed.get_mut(index) {
            Some(removed) if !*removed => {
                *removed = true;
                true
            }
            _ => {
                log::debug!("block {} already left the working list", index);
                false
            }
        }
    }
}
