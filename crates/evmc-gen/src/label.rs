//! Label identifiers and backpatch bookkeeping shared by both emitters
//! (§3.5, §4.4).

use evmc_util::define_idx;

define_idx!(LabelId);

/// A placeholder push recorded at emission time and patched once the
/// whole program has been emitted and every label's offset is known.
#[derive(Clone, Copy, Debug)]
pub struct PendingPush {
    pub position: usize,
    pub label_id: LabelId,
    pub size: u8,
}
