//! Module role classification from fan-in / fan-out.

use carve_core::config::GraphConfig;

use super::types::ModuleTag;

/// Tags for a module with the given distinct fan-in and fan-out.
///
/// - hub: fan-in above the hub threshold
/// - god: fan-out above the god threshold
/// - leaf: depended upon, depends on nothing
/// - island: no edges at all
///
/// Hub and god may both apply; a module matching none gets no tag.
pub fn classify_module(fan_in: u32, fan_out: u32, config: &GraphConfig) -> Vec<ModuleTag> {
    let mut tags = Vec::new();
    if fan_in > config.effective_hub_fan_in() {
        tags.push(ModuleTag::Hub);
    }
    if fan_out > config.effective_god_fan_out() {
        tags.push(ModuleTag::God);
    }
    if fan_out == 0 && fan_in > 0 {
        tags.push(ModuleTag::Leaf);
    }
    if fan_in == 0 && fan_out == 0 {
        tags.push(ModuleTag::Island);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_and_leaf_can_coexist() {
        let tags = classify_module(4, 0, &GraphConfig::default());
        assert_eq!(tags, vec![ModuleTag::Hub, ModuleTag::Leaf]);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let config = GraphConfig::default();
        assert!(classify_module(3, 5, &config).is_empty());
        assert_eq!(classify_module(4, 6, &config), vec![ModuleTag::Hub, ModuleTag::God]);
    }

    #[test]
    fn isolated_module_is_island() {
        assert_eq!(classify_module(0, 0, &GraphConfig::default()), vec![ModuleTag::Island]);
    }
}
