pub const CONFIG_PATH: &str = "assets/server/config.json";
pub const BLOCK_CLASS_LIST_PATH: &str = "assets/server/block_classes.json";
pub const BARRAGE_CLASS_MAP_PATH: &str = "assets/server/barrage_classes.json";
pub const SCENARIO_PATH: &str = "assets/server/scenario.json";
