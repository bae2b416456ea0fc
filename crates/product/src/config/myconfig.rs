use crate::model::product::Product as ProductModel;
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port_str = lookup("PORT").context("Missing environment variable: PORT")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let seed_file = lookup("PRODUCT_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let is_dev = match lookup("DEV_MODE").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(anyhow!(
                    "DEV_MODE must be 'true', 'false', '1' or '0', got '{}'",
                    other
                ));
            }
        };

        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            port,
            seed_file,
            is_dev,
            enable_file_log,
        })
    }

    /// Reads the initial product list from `PRODUCT_SEED_FILE`, or an empty
    /// list when no seed file is configured.
    pub fn load_seed(&self) -> Result<Vec<ProductModel>> {
        let Some(path) = &self.seed_file else {
            return Ok(Vec::new());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Seed file {} is not a JSON product array", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn port_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn port_must_be_numeric() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
    }

    #[test]
    fn optional_values_default_off() {
        let config = Config::from_lookup(lookup(&[("PORT", "3000")])).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.seed_file.is_none());
        assert!(!config.is_dev);
        assert!(!config.enable_file_log);
        assert!(config.load_seed().unwrap().is_empty());
    }

    #[test]
    fn dev_mode_rejects_garbage() {
        let result = Config::from_lookup(lookup(&[("PORT", "3000"), ("DEV_MODE", "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn seed_file_is_parsed() {
        let path = std::env::temp_dir().join(format!("product-seed-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"Laptop","price":1000,"stock":5}]"#,
        )
        .unwrap();

        let config = Config::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("PRODUCT_SEED_FILE", path.to_str().unwrap()),
        ]))
        .unwrap();
        let seed = config.load_seed().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            seed,
            vec![ProductModel {
                id: 1,
                name: "Laptop".into(),
                price: 1000.0,
                stock: 5,
            }]
        );
    }
}
