pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-green-900 via-gray-900 to-gray-900 text-white";
pub const HEADER: &str = "bg-gray-900/80 shadow-lg fixed top-0 w-full z-50";
pub const HEADER_INNER: &str = "container mx-auto px-6 py-4 flex justify-between items-center";
pub const MAIN: &str = "container mx-auto px-6 pt-28 pb-10";

pub const CARD: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6 max-w-md mx-auto";
pub const CANDIDATE_CARD: &str = "candidate-card bg-white bg-opacity-20 backdrop-blur-md rounded-xl p-4 text-center border-2 border-transparent hover:border-green-400 transition";
pub const CANDIDATE_GRID: &str = "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6";
pub const CANDIDATE_PHOTO: &str = "w-24 h-24 object-cover rounded-full mx-auto my-4";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-green-500";
pub const INPUT_GROUP: &str = "flex flex-col gap-2";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-green-600 hover:bg-green-700 focus:ring-2 focus:ring-green-400 focus:outline-none";
pub const BUTTON_SECONDARY: &str = "bg-gray-600 hover:bg-gray-700 focus:ring-2 focus:ring-gray-400 focus:outline-none";
pub const BUTTON_DANGER: &str = "bg-red-600 hover:bg-red-700 focus:ring-2 focus:ring-red-400 focus:outline-none";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-gray-200";
pub const TEXT_CARD: &str = "text-green-300 text-sm";
pub const HEADING_LG: &str = "text-4xl text-center font-bold text-green-200 mb-8";
pub const HEADING_MD: &str = "text-2xl font-bold mb-4";
pub const HEADING_SM: &str = "text-xl font-bold text-white mb-1";

pub const HIDDEN: &str = "hidden";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button(variant: &str) -> String {
    combine_classes(BUTTON_BASE, variant)
}

pub fn visible_if(visible: bool, classes: &str) -> String {
    if visible {
        classes.to_string()
    } else {
        combine_classes(classes, HIDDEN)
    }
}

pub fn notice_style(style: &str) -> String {
    match style {
        "error" => combine_classes("text-center text-lg mb-4", "text-red-300"),
        "warning" => combine_classes("text-center text-lg mb-4", "text-yellow-300"),
        _ => "text-center text-lg mb-4".to_string(),
    }
}
