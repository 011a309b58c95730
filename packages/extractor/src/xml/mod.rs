//! XML tree-walk utilities.

mod utils;

pub use utils::{
    attribute_or_empty, find_descendant, find_descendants, get_tag_name, has_tag, trimmed_text,
};
