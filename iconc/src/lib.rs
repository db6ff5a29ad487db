//! An icon font compiler.
//!
//! Icons are SVG path data keyed by name. Each distinct outline is given a
//! permanent Private Use Area code point by a [`DefinitionStore`] and drawn
//! into a glyph.

mod config;
mod error;
pub mod serialize;

pub use config::Options;
pub use error::Error;

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use icondrasil::types::GlyphName;
use iconir::{
    arc::{ArcExpander, KurboArcExpander},
    error::IconError,
    glyph::{FontMetrics, Glyph},
    interpret::Interpreter,
    path::{PathTokenizer, SvgPathTokenizer},
    store::{DefinitionStore, IconDefinition, IconEntry},
};
use indexmap::IndexMap;
use log::{debug, warn};
use rayon::prelude::*;

/// Everything a font serializer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSet {
    pub family_name: String,
    pub style_name: String,
    pub metrics: FontMetrics,
    /// Ordered by index, `.notdef` first
    pub glyphs: Vec<Glyph>,
}

/// The glyphs that could be drawn, and the icons that couldn't.
#[derive(Debug)]
pub struct DrawnGlyphs {
    pub glyph_set: GlyphSet,
    pub failures: Vec<IconError>,
}

impl DrawnGlyphs {
    /// Fail if any icon failed.
    pub fn into_result(self) -> Result<GlyphSet, Error> {
        if !self.failures.is_empty() {
            return Err(Error::IconFailures(self.failures));
        }
        Ok(self.glyph_set)
    }
}

/// Result of [`compile`].
#[derive(Debug)]
pub struct CompiledIcons {
    pub glyph_set: GlyphSet,
    /// The character for every submitted icon, in submission order.
    ///
    /// Icons that failed to draw still have their character.
    pub characters: IndexMap<String, char>,
    pub failures: Vec<IconError>,
}

impl CompiledIcons {
    /// Fail if any icon failed.
    pub fn into_result(self) -> Result<(GlyphSet, IndexMap<String, char>), Error> {
        if !self.failures.is_empty() {
            return Err(Error::IconFailures(self.failures));
        }
        Ok((self.glyph_set, self.characters))
    }
}

/// Compiles icons against a store, with replaceable path collaborators.
pub struct Compiler<'a> {
    options: Options,
    store: &'a dyn DefinitionStore,
    tokenizer: Box<dyn PathTokenizer>,
    arcs: Box<dyn ArcExpander>,
}

impl<'a> Compiler<'a> {
    pub fn new(options: Options, store: &'a dyn DefinitionStore) -> Result<Compiler<'a>, Error> {
        options.validate()?;
        let arcs = Box::new(KurboArcExpander::new(options.arc_tolerance));
        Ok(Compiler {
            options,
            store,
            tokenizer: Box::new(SvgPathTokenizer),
            arcs,
        })
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn PathTokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_arc_expander(mut self, arcs: Box<dyn ArcExpander>) -> Self {
        self.arcs = arcs;
        self
    }

    /// Submit icons to the store, returning the character each resolved to.
    pub fn register(
        &self,
        icons: &IndexMap<String, String>,
    ) -> Result<IndexMap<String, char>, Error> {
        let definitions = self.assign(icons)?;
        Ok(characters(icons, &definitions))
    }

    /// Submit icons to the store and draw a glyph for each of them.
    pub fn compile(&self, icons: &IndexMap<String, String>) -> Result<CompiledIcons, Error> {
        let definitions = self.assign(icons)?;
        let characters = characters(icons, &definitions);

        // Several names may share one outline; the store keeps the last name
        let unique: BTreeMap<_, _> = definitions
            .into_iter()
            .map(|def| (def.key(), def))
            .collect();
        let unique: Vec<_> = unique.into_values().collect();

        let DrawnGlyphs {
            glyph_set,
            failures,
        } = self.draw(&unique)?;
        Ok(CompiledIcons {
            glyph_set,
            characters,
            failures,
        })
    }

    /// Draw a glyph for every definition in the store.
    pub fn build_glyph_set(&self) -> Result<DrawnGlyphs, Error> {
        self.draw(&self.store.query_all())
    }

    fn assign(&self, icons: &IndexMap<String, String>) -> Result<Vec<IconDefinition>, Error> {
        let entries: Vec<_> = icons
            .iter()
            .map(|(name, value)| IconEntry::new(name.as_str(), value.as_str()))
            .collect();
        Ok(self.store.assign(&entries)?)
    }

    /// Draws glyphs for definitions that are already key ascending and unique.
    fn draw(&self, definitions: &[IconDefinition]) -> Result<DrawnGlyphs, Error> {
        let transform = self.options.transform();
        let metrics = FontMetrics::new(&transform);
        let interpreter = Interpreter::new(transform, self.arcs.as_ref());
        let tokenizer = self.tokenizer.as_ref();

        let drawn: Vec<_> = definitions
            .par_iter()
            .map(|def| -> Result<_, IconError> {
                let name = GlyphName::new(def.name());
                let outline = interpreter.draw(tokenizer, &name, def.value())?;
                debug!(
                    "Drew '{name}' {} with {} elements",
                    def.code_point(),
                    outline.elements().len()
                );
                Ok((def, name, outline))
            })
            .collect();

        let mut glyphs = Vec::with_capacity(drawn.len() + 1);
        glyphs.push(Glyph::notdef(metrics.advance_width)?);
        let mut failures = Vec::new();
        let mut seen_names = HashSet::new();
        for result in drawn {
            match result {
                Ok((def, name, outline)) => {
                    if !seen_names.insert(name.clone()) {
                        warn!("Multiple glyphs are named '{name}'");
                    }
                    glyphs.push(Glyph::new(
                        def.index(),
                        name,
                        Some(def.code_point()),
                        metrics.advance_width,
                        outline,
                    )?);
                }
                Err(e) => {
                    warn!("{e}");
                    failures.push(e);
                }
            }
        }

        Ok(DrawnGlyphs {
            glyph_set: GlyphSet {
                family_name: self.options.name.clone(),
                style_name: self.options.style_name.clone(),
                metrics,
                glyphs,
            },
            failures,
        })
    }
}

fn characters(
    icons: &IndexMap<String, String>,
    definitions: &[IconDefinition],
) -> IndexMap<String, char> {
    icons
        .keys()
        .zip(definitions)
        .map(|(name, def)| (name.clone(), def.code_point().to_char()))
        .collect()
}

/// Assign code points to `icons` and draw their glyphs.
pub fn compile(
    icons: &IndexMap<String, String>,
    options: &Options,
    store: &dyn DefinitionStore,
) -> Result<CompiledIcons, Error> {
    Compiler::new(options.clone(), store)?.compile(icons)
}

/// Assign code points to `icons` without drawing anything.
///
/// Call [`build_glyph_set`] once every icon has been registered to get a
/// single font covering all of them.
pub fn register_icons(
    icons: &IndexMap<String, String>,
    store: &dyn DefinitionStore,
) -> Result<IndexMap<String, char>, Error> {
    Compiler::new(Options::default(), store)?.register(icons)
}

/// Draw every icon ever registered with `store`.
pub fn build_glyph_set(
    options: &Options,
    store: &dyn DefinitionStore,
) -> Result<DrawnGlyphs, Error> {
    Compiler::new(options.clone(), store)?.build_glyph_set()
}

/// Read a yaml mapping of icon name to path data, keeping file order.
pub fn load_icons(path: &Path) -> Result<IndexMap<String, String>, Error> {
    let yml = fs::read_to_string(path).map_err(|source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&yml)?)
}
