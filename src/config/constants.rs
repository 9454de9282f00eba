pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://aurora-sdg.labs.vu.nl/classifier/classify/elsevier-sdg-multi";
pub const CLASSIFIER_URL_ENV: &str = "SDG_CLASSIFIER_URL";

pub const CONFIG_DIR_NAME: &str = "sdg-classifier";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DIAGRAM_TITLE: &str = "Achieved SDGs by Sustainability Dimension";
pub const GRID_COLUMNS: usize = 4;
