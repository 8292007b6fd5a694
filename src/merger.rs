use log::debug;

use crate::fragment::{Fragment, MergeError};

/// Condense a classified fragment stream by joining neighbours of
/// the same kind.
///
/// `Undefined` and `LineFeed` fragments always stay atomic. Empty
/// fragments are dropped. Order is preserved.
///
/// # Errors
///
/// Returns `MergeError` if a join is attempted across kinds, which
/// the kind check here rules out.
pub fn merge(fragments: Vec<Fragment>) -> Result<Vec<Fragment>, MergeError> {
    let total = fragments.len();
    let mut merged: Vec<Fragment> = Vec::with_capacity(total);

    for fragment in fragments {
        if fragment.content.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(current) if current.kind == fragment.kind && fragment.kind.is_mergeable() => {
                current.join(&fragment)?;
            }
            _ => merged.push(fragment),
        }
    }

    debug!("merged {total} fragments into {}", merged.len());
    Ok(merged)
}
