//! The fixed corpus of test presentations.
//!
//! Each recipe builds one [`MutablePresentation`] from literal geometry,
//! colors and text; [`generate_all`] saves every recipe into one directory.

pub mod basic_shapes;
pub mod comprehensive;
pub mod gradients;
pub mod images;
pub mod multi_slide;
pub mod tables;
pub mod text_formatting;

use crate::common::RGBColor;
use crate::common::error::{Error, Result};
use crate::common::unit::inches;
use crate::ooxml::pptx::{BoundingBox, MutablePresentation, ShapeKind};
use std::path::{Path, PathBuf};

/// Width of the rule printed around the per-file progress lines.
const RULE_WIDTH: usize = 50;

/// A named, deterministic presentation builder.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    /// Short name, also the file stem
    pub name: &'static str,
    pub file_name: &'static str,
    /// Appended to the progress line in parentheses
    pub note: Option<&'static str>,
    pub build: fn() -> Result<MutablePresentation>,
}

impl Recipe {
    /// Build the presentation and save it as `dir/<file_name>`.
    pub fn create(&self, dir: &Path) -> Result<PathBuf> {
        let pres = (self.build)()?;
        let path = dir.join(self.file_name);
        pres.save(&path)?;

        tracing::info!(
            fixture = self.name,
            slides = pres.slide_count(),
            path = %path.display(),
            "fixture written"
        );
        match self.note {
            Some(note) => println!("Created {} ({})", self.file_name, note),
            None => println!("Created {}", self.file_name),
        }
        Ok(path)
    }
}

/// Every recipe, in generation order.
pub const RECIPES: [Recipe; 7] = [
    Recipe {
        name: "basic-shapes",
        file_name: "basic-shapes.pptx",
        note: None,
        build: basic_shapes::build,
    },
    Recipe {
        name: "text-formatting",
        file_name: "text-formatting.pptx",
        note: None,
        build: text_formatting::build,
    },
    Recipe {
        name: "gradients",
        file_name: "gradients.pptx",
        note: None,
        build: gradients::build,
    },
    Recipe {
        name: "tables",
        file_name: "tables.pptx",
        note: None,
        build: tables::build,
    },
    Recipe {
        name: "multi-slide",
        file_name: "multi-slide.pptx",
        note: None,
        build: multi_slide::build,
    },
    Recipe {
        name: "comprehensive",
        file_name: "comprehensive.pptx",
        note: None,
        build: comprehensive::build,
    },
    Recipe {
        name: "images",
        file_name: "images.pptx",
        note: Some("placeholder"),
        build: images::build,
    },
];

/// Look up a recipe by name.
pub fn recipe(name: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|recipe| recipe.name == name)
}

/// `tests/fixtures` under the crate root.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Create `dir` and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| Error::OutputDirectory {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write every fixture into `dir`, overwriting existing files.
///
/// Stops at the first failure; files written before it are left in place.
/// Returns the written paths in generation order.
pub fn generate_all<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    ensure_output_dir(dir)?;

    let rule = "-".repeat(RULE_WIDTH);
    println!("Generating test PPTX files in {}...", dir.display());
    println!("{}", rule);

    let mut written = Vec::with_capacity(RECIPES.len());
    for recipe in &RECIPES {
        written.push(recipe.create(dir)?);
    }

    println!("{}", rule);
    println!("Done! Test files created in tests/fixtures/");
    Ok(written)
}

/// Bounding box from inch values.
pub(crate) fn bbox(left: f64, top: f64, width: f64, height: f64) -> Result<BoundingBox> {
    Ok(BoundingBox::new(
        inches(left),
        inches(top),
        inches(width),
        inches(height),
    )?)
}

/// A solid-filled preset shape, geometry in inches.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ShapeSpec {
    pub kind: ShapeKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub fill: RGBColor,
    pub label: Option<&'static str>,
}

impl ShapeSpec {
    pub fn bbox(&self) -> Result<BoundingBox> {
        bbox(self.left, self.top, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recipe_order_and_names() {
        let names: Vec<_> = RECIPES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "basic-shapes",
                "text-formatting",
                "gradients",
                "tables",
                "multi-slide",
                "comprehensive",
                "images"
            ]
        );
        for recipe in &RECIPES {
            assert_eq!(recipe.file_name, format!("{}.pptx", recipe.name));
        }
        let unique: HashSet<_> = RECIPES.iter().map(|r| r.file_name).collect();
        assert_eq!(unique.len(), RECIPES.len());
    }

    #[test]
    fn test_every_recipe_builds() {
        for recipe in &RECIPES {
            let pres = (recipe.build)().unwrap();
            assert!(pres.slide_count() >= 1, "{} has no slides", recipe.name);
            assert!(pres.to_bytes().is_ok(), "{} failed to serialize", recipe.name);
        }
    }

    #[test]
    fn test_recipe_lookup() {
        assert_eq!(recipe("tables").map(|r| r.file_name), Some("tables.pptx"));
        assert!(recipe("charts").is_none());
    }

    #[test]
    fn test_default_output_dir() {
        assert!(default_output_dir().ends_with("tests/fixtures"));
    }

    #[test]
    fn test_ensure_output_dir_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let target = blocker.join("fixtures");
        let err = ensure_output_dir(&target).unwrap_err();
        match err {
            Error::OutputDirectory { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {}", other),
        }

        let nested = tmp.path().join("a").join("b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_bbox_rejects_negative() {
        assert!(bbox(0.5, 0.5, 2.0, 1.0).is_ok());
        assert!(matches!(
            bbox(0.5, 0.5, -2.0, 1.0),
            Err(Error::InvalidGeometry(_))
        ));
    }
}
