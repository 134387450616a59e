use crate::display::display_guide;
use crate::models::{filter_guide, CategoryFilter};

pub fn show_guide(category: CategoryFilter, search: &str) {
    let categories = filter_guide(category, search);
    display_guide(&categories);
}
