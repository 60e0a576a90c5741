pub mod label;
pub mod order;

pub use label::Label;
pub use order::LabelOrder;
