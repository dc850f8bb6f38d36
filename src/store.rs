//! Generator store: the on-disk representation of generators, their
//! template bodies and their resolved instances.
//!
//! Layout under the store base directory:
//! - `generators/<name>/schema` — serialized generator schema
//! - `generators/<name>/templates/<id>` — raw template body
//! - `generators/<name>/<instance>/schema` — serialized instance schema
//!
//! Schemas and bodies are read-only for the duration of one invocation;
//! output writes overwrite unconditionally (last-writer-wins).

use crate::error::{Error, Result};
use crate::schema::{GeneratorSchema, InstanceSchema};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence seam between the engine and the filesystem.
pub trait GeneratorStore {
    fn read_generator_schema(&self, generator: &str) -> Result<GeneratorSchema>;
    fn write_generator_schema(
        &self,
        generator: &str,
        schema: &GeneratorSchema,
    ) -> Result<()>;
    fn read_template_body(&self, generator: &str, template_id: &str) -> Result<String>;
    fn write_template_body(
        &self,
        generator: &str,
        template_id: &str,
        body: &str,
    ) -> Result<()>;
    fn read_instance_schema(
        &self,
        generator: &str,
        instance: &str,
    ) -> Result<InstanceSchema>;
    fn write_instance_schema(
        &self,
        generator: &str,
        instance: &str,
        schema: &InstanceSchema,
    ) -> Result<()>;

    /// Writes a materialized output file, creating intermediate
    /// directories as needed.
    fn write_output(&self, destination: &Path, content: &str) -> Result<()>;
}

/// Filesystem-backed generator store rooted at a base directory.
pub struct FileSystemStore {
    base: PathBuf,
}

impl FileSystemStore {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self { base: base.as_ref().to_path_buf() }
    }

    fn generator_dir(&self, generator: &str) -> PathBuf {
        self.base.join("generators").join(generator)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        debug!("Reading {}", path.display());
        fs::read_to_string(path)
            .map_err(|e| Error::StoreError(format!("cannot read '{}': {}", path.display(), e)))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        debug!("Writing {}", path.display());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::StoreError(format!("cannot create '{}': {}", parent.display(), e))
            })?;
        }
        fs::write(path, content)
            .map_err(|e| Error::StoreError(format!("cannot write '{}': {}", path.display(), e)))
    }

    fn read_schema<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = self.read_text(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::SchemaError(format!("invalid schema '{}': {}", path.display(), e)))
    }

    fn write_schema<T: serde::Serialize>(&self, path: &Path, schema: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(schema)
            .map_err(|e| Error::SchemaError(e.to_string()))?;
        self.write_text(path, &content)
    }
}

impl GeneratorStore for FileSystemStore {
    fn read_generator_schema(&self, generator: &str) -> Result<GeneratorSchema> {
        self.read_schema(&self.generator_dir(generator).join("schema"))
    }

    fn write_generator_schema(
        &self,
        generator: &str,
        schema: &GeneratorSchema,
    ) -> Result<()> {
        self.write_schema(&self.generator_dir(generator).join("schema"), schema)
    }

    fn read_template_body(&self, generator: &str, template_id: &str) -> Result<String> {
        self.read_text(&self.generator_dir(generator).join("templates").join(template_id))
    }

    fn write_template_body(
        &self,
        generator: &str,
        template_id: &str,
        body: &str,
    ) -> Result<()> {
        self.write_text(
            &self.generator_dir(generator).join("templates").join(template_id),
            body,
        )
    }

    fn read_instance_schema(
        &self,
        generator: &str,
        instance: &str,
    ) -> Result<InstanceSchema> {
        self.read_schema(&self.generator_dir(generator).join(instance).join("schema"))
    }

    fn write_instance_schema(
        &self,
        generator: &str,
        instance: &str,
        schema: &InstanceSchema,
    ) -> Result<()> {
        self.write_schema(&self.generator_dir(generator).join(instance).join("schema"), schema)
    }

    fn write_output(&self, destination: &Path, content: &str) -> Result<()> {
        let target = if destination.is_absolute() {
            destination.to_path_buf()
        } else {
            self.base.join(destination)
        };
        self.write_text(&target, content)
    }
}
