//! Loading the static source collections.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use prodcat_catalog::{Catalog, Category, Product, User};
use prodcat_core::DomainError;

const EMBEDDED_USERS: &str = include_str!("../data/users.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../data/categories.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../data/products.json");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The three raw collections, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Dataset {
    /// Dataset compiled into the binary.
    pub fn embedded() -> Result<Self, DataError> {
        Ok(Self {
            users: parse("embedded users.json", EMBEDDED_USERS)?,
            categories: parse("embedded categories.json", EMBEDDED_CATEGORIES)?,
            products: parse("embedded products.json", EMBEDDED_PRODUCTS)?,
        })
    }

    pub fn from_dir(dir: &Path) -> Result<Self, DataError> {
        Ok(Self {
            users: read(&dir.join("users.json"))?,
            categories: read(&dir.join("categories.json"))?,
            products: read(&dir.join("products.json"))?,
        })
    }

    pub fn load(data_dir: Option<&Path>) -> Result<Self, DataError> {
        match data_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    /// Enrich into a [`Catalog`]; fails on a dangling category reference.
    pub fn into_catalog(self) -> Result<Catalog, DataError> {
        Ok(Catalog::new(self.users, self.categories, self.products)?)
    }
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&path.display().to_string(), &raw)
}

fn parse<T: DeserializeOwned>(origin: &str, raw: &str) -> Result<T, DataError> {
    serde_json::from_str(raw).map_err(|source| DataError::Parse {
        origin: origin.to_string(),
        source,
    })
}
