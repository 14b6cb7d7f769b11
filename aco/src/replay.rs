use antpack::entities::{ItemSet, Layout};
use antpack::geometry::{BinSize, Rectangle};

/// A single frame of a [`PackingReplay`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayStep {
    /// The item was placed, `rect` carries its position and orientation
    Placed { rect: Rectangle, remaining: usize },
    /// No position was found for the item in either orientation
    Skipped { item_id: usize, remaining: usize },
}

/// Packs the items of an [`ItemSet`] one by one in their canonical order, yielding one step per item.
///
/// Meant to drive a display frame by frame. The layout built so far is available through [`PackingReplay::layout`].
pub struct PackingReplay<'a> {
    items: &'a ItemSet,
    next: usize,
    layout: Layout,
}

impl<'a> PackingReplay<'a> {
    pub fn new(items: &'a ItemSet, bin: BinSize) -> Self {
        Self {
            items,
            next: 0,
            layout: Layout::new(bin),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Items which have not been replayed yet
    pub fn remaining(&self) -> usize {
        self.items.len() - self.next
    }
}

impl Iterator for PackingReplay<'_> {
    type Item = ReplayStep;

    fn next(&mut self) -> Option<ReplayStep> {
        let item = self.items.items().get(self.next)?;
        self.next += 1;
        let remaining = self.remaining();

        let step = match self.layout.try_place(Rectangle::from_item(item)) {
            Some(rect) => ReplayStep::Placed {
                rect: *rect,
                remaining,
            },
            None => ReplayStep::Skipped {
                item_id: item.id,
                remaining,
            },
        };
        Some(step)
    }
}
