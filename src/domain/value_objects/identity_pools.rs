//! Word lists the attribute roller draws display identity from

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityPools {
    pub names: Vec<String>,
    pub descriptions: Vec<String>,
    pub code_names: Vec<String>,
    pub images: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for IdentityPools {
    fn default() -> Self {
        Self {
            names: owned(&[
                "Aria", "Bastian", "Corvin", "Delphine", "Ezra", "Fiona", "Garrick", "Hana",
                "Ivo", "Juno", "Kestrel", "Lyra",
            ]),
            descriptions: owned(&[
                "Brave knight of the old guard",
                "Quiet, patient and never seen coming",
                "Talks to machines better than to people",
                "Patched up half the crew at least twice",
                "Left the order and kept the armor",
                "Reads every blueprint twice",
                "Owes favors in every port",
            ]),
            code_names: owned(&[
                "Nightjar", "Anvil", "Static", "Lantern", "Mockingbird", "Ghostline", "Tinder",
                "Halcyon", "Redshift",
            ]),
            images: owned(&[
                "knight.png",
                "cleric.png",
                "hacker.png",
                "infiltrator.png",
                "medic.png",
                "brawler.png",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pools_are_populated() {
        let pools = IdentityPools::default();
        assert!(pools.names.len() > 1);
        assert!(pools.descriptions.len() > 1);
        assert!(pools.code_names.len() > 1);
        assert!(pools.images.len() > 1);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let pools: IdentityPools =
            serde_json::from_str(r#"{"names": ["Solo"]}"#).expect("valid pools json");
        assert_eq!(pools.names, vec!["Solo".to_string()]);
        assert_eq!(pools.images, IdentityPools::default().images);
    }
}
