//! Splits an outer extent among packed items along one axis.
use crate::policy::Stretch;
use log::{trace, warn};

const EPSILON: f32 = 0.001;

/// One packed item as seen by [`distribute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub natural: f32,
    pub stretch: Stretch,
    pub min: f32,
    pub max: Option<f32>,
}

impl Item {
    pub fn rigid(natural: f32) -> Self {
        Self {
            natural,
            stretch: Stretch::None,
            min: 0.0,
            max: None,
        }
    }

    pub fn stretchy(natural: f32, stretch: Stretch) -> Self {
        Self {
            natural,
            stretch,
            min: 0.0,
            max: None,
        }
    }
}

/// Sum of natural extents plus the gaps between them.
pub fn natural_extent(items: &[Item], spacing: f32) -> f32 {
    let gaps = spacing * items.len().saturating_sub(1) as f32;
    items.iter().map(|item| item.natural).sum::<f32>() + gaps
}

/// Returns the final extent of each item inside `outer`.
///
/// Items start at their natural extents. Leftover space goes to stretchable
/// items in proportion to their weight; items reaching their max bound are
/// frozen and the rest is shared again. When the items do not fit, stretchable
/// items give back space down to their min bound. Rigid items are never
/// shrunk and may overflow.
pub fn distribute(items: &[Item], outer: f32, spacing: f32) -> Vec<f32> {
    if outer <= 0.0 {
        return vec![0.0; items.len()];
    }

    let mut sizes: Vec<f32> = items.iter().map(|item| item.natural).collect();
    let free = outer - natural_extent(items, spacing);

    if free < -EPSILON {
        shrink(items, &mut sizes, -free);
    } else if free > EPSILON {
        grow(items, &mut sizes, free);
    }
    sizes
}

fn grow(items: &[Item], sizes: &mut [f32], free: f32) {
    let siblings_have_flex = items.iter().any(|item| item.stretch.is_flex());
    let weights: Vec<f32> = items
        .iter()
        .map(|item| item.stretch.weight(siblings_have_flex))
        .collect();
    let mut active: Vec<usize> = (0..items.len()).filter(|&i| weights[i] > 0.0).collect();
    let mut remaining = free;

    while !active.is_empty() && remaining > EPSILON {
        let total_weight: f32 = active.iter().map(|&i| weights[i]).sum();
        let frozen: Vec<usize> = active
            .iter()
            .copied()
            .filter(|&i| match items[i].max {
                Some(max) => sizes[i] + remaining * weights[i] / total_weight > max,
                None => false,
            })
            .collect();

        if frozen.is_empty() {
            for &i in &active {
                sizes[i] += remaining * weights[i] / total_weight;
            }
            trace!("Shared {:.2} among {} stretchable items.", remaining, active.len());
            return;
        }

        for &i in &frozen {
            if let Some(max) = items[i].max {
                let grown = (max - sizes[i]).max(0.0);
                sizes[i] += grown;
                remaining -= grown;
            }
        }
        trace!("Froze {} items at their max bound, {:.2} left to share.", frozen.len(), remaining);
        active.retain(|i| !frozen.contains(i));
    }
}

fn shrink(items: &[Item], sizes: &mut [f32], deficit: f32) {
    let slack: Vec<f32> = items
        .iter()
        .map(|item| {
            if item.stretch.is_stretchable() {
                (item.natural - item.min).max(0.0)
            } else {
                0.0
            }
        })
        .collect();
    let total_slack: f32 = slack.iter().sum();

    if total_slack > 0.0 {
        let taken = deficit.min(total_slack);
        for (size, slack) in sizes.iter_mut().zip(&slack) {
            *size -= taken * slack / total_slack;
        }
        trace!("Shrank stretchable items by {:.2}.", taken);
    }

    if deficit > total_slack + EPSILON {
        warn!(
            "Items overflow their container by {:.2}; rigid items are not shrunk.",
            deficit - total_slack
        );
    }
}

/// Start offsets of consecutive items of the given extents, separated by `spacing`.
pub fn offsets(sizes: &[f32], start: f32, spacing: f32) -> Vec<f32> {
    let mut cursor = start;
    sizes
        .iter()
        .map(|size| {
            let offset = cursor;
            cursor += size + spacing;
            offset
        })
        .collect()
}
