//! Draws absolute path commands into a glyph outline.

use icondrasil::{coords::CoordTransform, types::GlyphName};
use kurbo::{BezPath, Point};
use log::{debug, trace};

use crate::{
    arc::ArcExpander,
    error::{IconError, PathError},
    path::{PathCommand, PathTokenizer},
    path_builder::OutlineBuilder,
};

/// The point symmetric to `control` about `center`.
fn mirror(center: Point, control: Point) -> Point {
    center + (center - control)
}

/// Walks a command stream once, left to right, emitting outline operations.
///
/// The only state carried between commands is the previous command, which the
/// smooth curve commands reflect against.
pub struct Interpreter<'a> {
    transform: CoordTransform,
    arcs: &'a dyn ArcExpander,
}

impl<'a> Interpreter<'a> {
    pub fn new(transform: CoordTransform, arcs: &'a dyn ArcExpander) -> Interpreter<'a> {
        Interpreter { transform, arcs }
    }

    pub fn interpret(&self, commands: &[PathCommand]) -> Result<BezPath, PathError> {
        let mut builder = OutlineBuilder::new(self.transform, commands.len());
        let mut previous: Option<&PathCommand> = None;

        for command in commands {
            trace!("{command:?}");
            match command {
                PathCommand::MoveTo { to, .. } => builder.move_to(*to),
                PathCommand::LineTo { to, .. } => builder.line_to(*to)?,
                PathCommand::CubicTo { c1, c2, to, .. } => builder.curve_to(*c1, *c2, *to)?,
                PathCommand::SmoothCubicTo { from, c2, to } => {
                    let Some(PathCommand::CubicTo { c2: prev_c2, .. }) = previous else {
                        return Err(PathError::MalformedPath {
                            command: 'S',
                            required: 'C',
                        });
                    };
                    builder.curve_to(mirror(*from, *prev_c2), *c2, *to)?;
                }
                PathCommand::QuadTo { c1, to, .. } => builder.quad_to(*c1, *to)?,
                PathCommand::SmoothQuadTo { from, to } => {
                    let Some(PathCommand::QuadTo { c1: prev_c1, .. }) = previous else {
                        return Err(PathError::MalformedPath {
                            command: 'T',
                            required: 'Q',
                        });
                    };
                    builder.quad_to(mirror(*from, *prev_c1), *to)?;
                }
                PathCommand::ArcTo(arc) => {
                    for segment in self.arcs.expand(arc)? {
                        builder.curve_to(segment.c1, segment.c2, segment.to)?;
                    }
                }
                PathCommand::ClosePath { .. } => builder.close()?,
                PathCommand::Unrecognized { tag } => {
                    debug!("Ignoring unrecognized command '{tag}'");
                }
            }
            previous = Some(command);
        }
        Ok(builder.build())
    }

    /// Tokenize and interpret one icon, attaching the icon to any failure.
    pub fn draw(
        &self,
        tokenizer: &dyn PathTokenizer,
        name: &GlyphName,
        value: &str,
    ) -> Result<BezPath, IconError> {
        tokenizer
            .tokenize(value)
            .and_then(|commands| self.interpret(&commands))
            .map_err(|source| IconError {
                name: name.clone(),
                value: value.to_string(),
                source,
            })
    }
}
