//! Component resolution.

use std::path::PathBuf;

use crate::definition::ComponentDefinition;
use crate::error::{ComponentError, Result};

/// Resolves a component identifier into a module name and image path.
pub trait ComponentLocator: Send + Sync {
    /// Fill in `definition.name` and `definition.path` from
    /// `definition.id()`, or fail with
    /// [`ComponentError::ComponentNotFound`].
    fn locate(&self, definition: &mut ComponentDefinition) -> Result<()>;
}

/// Locator mapping ids to platform-named library images in one directory.
///
/// The module name is the last `.`-separated segment of the id; the image
/// file carries the platform's library prefix and extension. `acme.widget`
/// resolves to `<dir>/libwidget.so` on Linux, `<dir>/libwidget.dylib` on
/// macOS and `<dir>/widget.dll` on Windows.
pub struct DirectoryLocator {
    dir: PathBuf,
}

impl DirectoryLocator {
    /// Create a locator over `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform file name for a module called `name`.
    pub fn image_file_name(name: &str) -> String {
        #[cfg(target_os = "windows")]
        {
            format!("{}.dll", name)
        }
        #[cfg(target_os = "macos")]
        {
            format!("lib{}.dylib", name)
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            format!("lib{}.so", name)
        }
    }
}

impl ComponentLocator for DirectoryLocator {
    fn locate(&self, definition: &mut ComponentDefinition) -> Result<()> {
        let name = definition
            .id()
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_string();
        let path = self.dir.join(Self::image_file_name(&name));

        if !path.exists() {
            return Err(ComponentError::ComponentNotFound {
                id: definition.id().to_string(),
                reason: format!("no module image at {}", path.display()),
            });
        }

        definition.name = name;
        definition.path = path.to_string_lossy().into_owned();
        Ok(())
    }
}
