pub mod k_best;
pub mod label_heap;

pub use k_best::KBestLabels;
pub use label_heap::LabelHeap;
