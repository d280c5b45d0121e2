// Service name -> bin category
use crate::types::BinCategory;

const GENERAL_WASTE: [&str; 4] = ["household waste", "domestic waste", "general waste", "rubbish"];

/// Classify a free-text service description. First match wins, so a
/// "rubbish and recycling" service is still a black bin.
pub fn classify(service: &str) -> BinCategory {
    let service = service.to_lowercase();
    if GENERAL_WASTE.iter().any(|needle| service.contains(needle)) {
        BinCategory::Black
    } else if service.contains("recycling") {
        BinCategory::Red
    } else if service.contains("garden") {
        BinCategory::Green
    } else {
        BinCategory::Unknown
    }
}
