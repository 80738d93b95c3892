use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = SpecFormat::from_path(path);
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open {}", path.display()))?;

    Ok(Self { file, format })
  }

  pub fn parse(&self) -> anyhow::Result<Document> {
    parse_document(self.file.as_slice(), self.format)
  }
}

/// Deserializes a document, reporting the path of the first offending node on failure.
pub fn parse_document(bytes: &[u8], format: SpecFormat) -> anyhow::Result<Document> {
  match format {
    SpecFormat::Json => {
      let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        anyhow::anyhow!("invalid OpenAPI document at '{path}': {}", err.into_inner())
      })
    }
    SpecFormat::Yaml => {
      let deserializer = serde_yaml::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        anyhow::anyhow!("invalid OpenAPI document at '{path}': {}", err.into_inner())
      })
    }
  }
}
