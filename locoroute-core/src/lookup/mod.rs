mod label_lookup;
mod prefix_label_lookup;

pub use label_lookup::LabelLookup;
pub use prefix_label_lookup::PrefixLabelLookup;
