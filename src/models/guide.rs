use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideCategoryKey {
    Plastic,
    Paper,
    Glass,
    Metal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CategoryFilter {
    #[default]
    All,
    Plastic,
    Paper,
    Glass,
    Metal,
}

impl CategoryFilter {
    fn accepts(&self, key: GuideCategoryKey) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Plastic => key == GuideCategoryKey::Plastic,
            CategoryFilter::Paper => key == GuideCategoryKey::Paper,
            CategoryFilter::Glass => key == GuideCategoryKey::Glass,
            CategoryFilter::Metal => key == GuideCategoryKey::Metal,
        }
    }
}

#[derive(Debug)]
pub struct GuideItem {
    pub name: &'static str,
    pub method: &'static str,
    pub tips: &'static [&'static str],
    pub can_recycle: bool,
}

#[derive(Debug)]
pub struct GuideCategory {
    pub key: GuideCategoryKey,
    pub title: &'static str,
    pub items: &'static [GuideItem],
}

pub const GENERAL_NOTICE: &str = "Always empty and rinse items before putting them out. \
Contaminated recyclables can spoil the whole batch.";

pub const REGIONAL_NOTICE: &str =
    "Rules differ between districts; check with your local office when in doubt.";

pub static GUIDE: &[GuideCategory] = &[
    GuideCategory {
        key: GuideCategoryKey::Plastic,
        title: "Plastic",
        items: &[
            GuideItem {
                name: "PET bottle",
                method: "Remove the label, crush, then put out",
                tips: &["Empty and rinse completely", "Caps go in general waste"],
                can_recycle: true,
            },
            GuideItem {
                name: "Plastic container",
                method: "Wash clean before putting out",
                tips: &["Remove all food residue", "No need to sort by color"],
                can_recycle: true,
            },
            GuideItem {
                name: "Plastic bag",
                method: "Collect only clean bags",
                tips: &["Soiled bags go in general waste", "Only clear, clean bags"],
                can_recycle: true,
            },
        ],
    },
    GuideCategory {
        key: GuideCategoryKey::Paper,
        title: "Paper",
        items: &[
            GuideItem {
                name: "Newspaper",
                method: "Tie up and keep dry",
                tips: &["Bundle with string or put in a box", "Leave out coated flyers"],
                can_recycle: true,
            },
            GuideItem {
                name: "Cardboard",
                method: "Remove tape and staples first",
                tips: &["Flatten to save space", "Wet cardboard cannot be recycled"],
                can_recycle: true,
            },
            GuideItem {
                name: "Coated paper cup",
                method: "Put in general waste",
                tips: &["Plastic coating prevents recycling", "Empty it completely"],
                can_recycle: false,
            },
        ],
    },
    GuideCategory {
        key: GuideCategoryKey::Glass,
        title: "Glass",
        items: &[
            GuideItem {
                name: "Glass bottle",
                method: "Remove the cap and sort by color",
                tips: &["Separate clear, brown and green", "Labels can stay on"],
                can_recycle: true,
            },
            GuideItem {
                name: "Broken glass",
                method: "Wrap in newspaper and put in general waste",
                tips: &["Wrap it for safety", "Not recyclable"],
                can_recycle: false,
            },
        ],
    },
    GuideCategory {
        key: GuideCategoryKey::Metal,
        title: "Cans",
        items: &[
            GuideItem {
                name: "Aluminum can",
                method: "Empty, crush, then put out",
                tips: &["Rinse with water", "Remove cigarette butts and other debris"],
                can_recycle: true,
            },
            GuideItem {
                name: "Steel can",
                method: "Remove the label, then put out",
                tips: &["Sticks to a magnet", "Rusty cans are still recyclable"],
                can_recycle: true,
            },
        ],
    },
];

/// Categories matching the filter. With a search term a category is kept
/// whole when its title or any item name contains the term.
pub fn filter_guide(filter: CategoryFilter, search: &str) -> Vec<&'static GuideCategory> {
    let needle = search.to_lowercase();

    GUIDE
        .iter()
        .filter(|category| filter.accepts(category.key))
        .filter(|category| {
            needle.is_empty()
                || category.title.to_lowercase().contains(&needle)
                || category
                    .items
                    .iter()
                    .any(|item| item.name.to_lowercase().contains(&needle))
        })
        .collect()
}
