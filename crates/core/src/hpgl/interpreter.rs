//! HPGL command interpreter.
//!
//! Scans two-letter mnemonics off a [`StreamCursor`] and dispatches each to
//! a handler that mutates the [`PlottingState`]. Plotted paths and label
//! characters accumulate in a [`Drawing`]; nothing is resolved to final
//! device coordinates until the whole stream has been read.

use itertools::Itertools;
use tracing::{debug, trace};

use super::HpglOptions;
use super::command::Mnemonic;
use super::plot::{Drawing, LabelPlacement, PlotSegment};
use super::state::{
    CharSize, DEFAULT_TERMINATOR, FontSlot, Measure, PlotPoint, PlottingState, UNITS_PER_CM,
};
use super::transform::{CoordinateTransform, Scaling};
use crate::error::{PlotError, Result};
use crate::parser::StreamCursor;

/// Label cursor advance, in character widths.
const CHAR_ADVANCE: f64 = 1.5;
/// Line feed advance, in character heights.
const LINE_ADVANCE: f64 = 2.0;

const BACKSPACE: u8 = 0x08;

const fn is_separator(b: u8) -> bool {
    matches!(b, b';' | b' ' | b'\r' | b'\n')
}

/// Stateful HPGL interpreter over one in-memory stream.
pub struct HpglInterpreter<'a> {
    cursor: StreamCursor<'a>,
    options: &'a HpglOptions,
    state: PlottingState,
    drawing: Drawing,
}

impl<'a> HpglInterpreter<'a> {
    pub fn new(data: &'a [u8], options: &'a HpglOptions) -> Self {
        Self {
            cursor: StreamCursor::new(data),
            options,
            state: PlottingState::new(options),
            drawing: Drawing::default(),
        }
    }

    pub fn state(&self) -> &PlottingState {
        &self.state
    }

    /// Interpret the whole stream.
    pub fn run(mut self) -> Result<Drawing> {
        while let Some((mnemonic, pos)) = self.next_mnemonic()? {
            trace!(command = mnemonic.as_str(), pos, "hpgl command");
            self.execute(mnemonic, pos)?;
        }
        debug!(
            segments = self.drawing.segments.len(),
            labels = self.drawing.labels.len(),
            "hpgl stream interpreted"
        );
        Ok(self.drawing)
    }

    fn next_mnemonic(&mut self) -> Result<Option<(Mnemonic, usize)>> {
        self.cursor.skip_while(is_separator);
        let pos = self.cursor.tell();
        let Some(first) = self.cursor.advance() else {
            return Ok(None);
        };
        let Some(second) = self.cursor.advance() else {
            return Err(PlotError::eof(
                String::from_utf8_lossy(&[first]).into_owned(),
                pos,
            ));
        };
        Ok(Some((Mnemonic::from_bytes([first, second]), pos)))
    }

    fn execute(&mut self, mnemonic: Mnemonic, pos: usize) -> Result<()> {
        match mnemonic {
            Mnemonic::PenUp => self.do_pen_up(pos),
            Mnemonic::PenDown => self.do_pen_down(pos),
            Mnemonic::PlotAbsolute => self.plot("PA", pos),
            Mnemonic::SelectPen => self.do_select_pen(pos),
            Mnemonic::LineType => self.cursor.read_params("LT").map(|_| ()),
            Mnemonic::SelectAlternate => {
                self.state.font = FontSlot::Alternate;
                Ok(())
            }
            Mnemonic::SelectStandard => {
                self.state.font = FontSlot::Standard;
                Ok(())
            }
            Mnemonic::DesignateStandard => {
                self.state.standard_set = self.optional_index("CS", pos)?.unwrap_or(0);
                Ok(())
            }
            Mnemonic::DesignateAlternate => {
                self.state.alternate_set = self.optional_index("CA", pos)?.unwrap_or(0);
                Ok(())
            }
            Mnemonic::RelativeSize => self.do_relative_size(pos),
            Mnemonic::AbsoluteSize => self.do_absolute_size(pos),
            Mnemonic::AbsoluteDirection => {
                // run and rise are validated but do not rotate labels
                self.pair_or_nothing("DI", pos).map(|_| ())
            }
            Mnemonic::DefineTerminator => self.do_define_terminator(pos),
            Mnemonic::Label => self.do_label(pos),
            Mnemonic::Scale => self.do_scale(pos),
            Mnemonic::InputP1P2 => self.do_input_window("IP", pos, false),
            Mnemonic::InputRelative => self.do_input_window("IR", pos, true),
            Mnemonic::Defaults | Mnemonic::Initialize => {
                self.state.reset(self.options);
                Ok(())
            }
            Mnemonic::OutputP1P2 => Ok(()),
            Mnemonic::Unknown(_) => Err(PlotError::UnknownCommand {
                command: mnemonic.name(),
                pos,
            }),
        }
    }

    fn do_pen_up(&mut self, pos: usize) -> Result<()> {
        if self.state.pen_down && !self.state.drawn {
            // an isolated pen-down/pen-up still leaves a dot
            self.drawing.segments.push(PlotSegment {
                pen: self.state.pen,
                width: self.state.pen_width,
                points: vec![self.state.pen_position],
            });
        }
        self.state.pen_down = false;
        self.state.drawn = true;
        self.plot("PU", pos)
    }

    fn do_pen_down(&mut self, pos: usize) -> Result<()> {
        self.state.pen_down = true;
        self.state.drawn = false;
        self.plot("PD", pos)
    }

    /// Move through the coordinate pairs of `PA`/`PU`/`PD`, drawing when the
    /// pen is down. A bare `PA` goes to the user origin; bare `PU`/`PD` only
    /// change the pen state.
    fn plot(&mut self, command: &str, pos: usize) -> Result<()> {
        let mut params = self.cursor.read_params(command)?;
        if params.len() % 2 != 0 {
            return Err(PlotError::malformed(
                command,
                pos,
                format!("odd number of coordinates ({})", params.len()),
            ));
        }
        if params.is_empty() {
            if command != "PA" {
                return Ok(());
            }
            params = vec![0.0, 0.0];
        }

        let mut points = Vec::with_capacity(params.len() / 2 + 1);
        points.push(self.state.pen_position);
        for (x, y) in params.into_iter().tuples() {
            let p = PlotPoint::absolute(self.state.transform.apply((x, y)));
            points.push(p);
            self.state.pen_position = p;
        }

        if self.state.pen_down {
            self.drawing.segments.push(PlotSegment {
                pen: self.state.pen,
                width: self.state.pen_width,
                points,
            });
            self.state.drawn = true;
        }
        Ok(())
    }

    fn do_select_pen(&mut self, pos: usize) -> Result<()> {
        if let Some(pen) = self.optional_index("SP", pos)? {
            self.state.pen = pen;
        }
        Ok(())
    }

    fn do_relative_size(&mut self, pos: usize) -> Result<()> {
        self.state.char_size = match self.pair_or_nothing("SR", pos)? {
            Some((w, h)) => CharSize::Relative {
                width: w / 100.0,
                height: h / 100.0,
            },
            None => CharSize::default_relative(),
        };
        Ok(())
    }

    fn do_absolute_size(&mut self, pos: usize) -> Result<()> {
        self.state.char_size = match self.pair_or_nothing("SI", pos)? {
            Some((w, h)) => CharSize::Absolute {
                width: w * UNITS_PER_CM,
                height: h * UNITS_PER_CM,
            },
            None => CharSize::default_absolute(),
        };
        Ok(())
    }

    fn do_define_terminator(&mut self, pos: usize) -> Result<()> {
        let Some(terminator) = self.cursor.advance() else {
            return Ok(());
        };
        if terminator == b';' {
            self.state.label_terminator = DEFAULT_TERMINATOR;
            self.state.terminator_printed = false;
            return Ok(());
        }

        let mode = if self.cursor.peek() == Some(b',') {
            self.cursor.advance();
            match self.cursor.read_params("DT")?.as_slice() {
                [mode] => *mode,
                _ => {
                    return Err(PlotError::malformed(
                        "DT",
                        pos,
                        "expected a single mode after the terminator",
                    ));
                }
            }
        } else {
            if self.cursor.peek() == Some(b';') {
                self.cursor.advance();
            }
            1.0
        };

        self.state.terminator_printed = match mode {
            0.0 => true,
            1.0 => false,
            other => {
                return Err(PlotError::malformed(
                    "DT",
                    pos,
                    format!("terminator mode must be 0 or 1, got {}", other),
                ));
            }
        };
        self.state.label_terminator = terminator;
        Ok(())
    }

    fn do_label(&mut self, pos: usize) -> Result<()> {
        let (width, height) = self.state.char_size.measures();
        let advance = width * CHAR_ADVANCE;
        let mut line_start = self.state.pen_position;
        let mut cursor = line_start;

        loop {
            let Some(b) = self.cursor.advance() else {
                return Err(PlotError::eof("LB", pos));
            };

            if b == self.state.label_terminator {
                if self.state.terminator_printed {
                    self.place_char(cursor, width, height, b);
                    cursor.x = cursor.x + advance;
                }
                break;
            }

            match b {
                BACKSPACE => cursor.x = cursor.x - advance,
                b'\r' => cursor.x = line_start.x,
                b'\n' => {
                    line_start.y = line_start.y - height * LINE_ADVANCE;
                    cursor = line_start;
                }
                b if b < 0x20 => {}
                b => {
                    self.place_char(cursor, width, height, b);
                    cursor.x = cursor.x + advance;
                }
            }
        }

        self.state.pen_position = cursor;
        Ok(())
    }

    fn place_char(&mut self, anchor: PlotPoint, width: Measure, height: Measure, b: u8) {
        self.drawing.labels.push(LabelPlacement {
            anchor,
            width,
            height,
            pen: self.state.pen,
            font: self.state.font,
            character_set: self.state.character_set(),
            ch: char::from(b),
            stroke_weight: self.state.stroke_weight,
            pen_width: self.state.pen_width,
        });
    }

    fn do_scale(&mut self, pos: usize) -> Result<()> {
        let params = self.cursor.read_params("SC")?;
        let scaling = match *params.as_slice() {
            [] => Scaling::Off,
            [xmin, xmax, ymin, ymax] | [xmin, xmax, ymin, ymax, 0.0] => {
                check_window(xmin, xmax, ymin, ymax, pos)?;
                Scaling::Anisotropic {
                    xmin,
                    xmax,
                    ymin,
                    ymax,
                }
            }
            [xmin, xmax, ymin, ymax, 1.0] => {
                check_window(xmin, xmax, ymin, ymax, pos)?;
                Scaling::Isotropic {
                    xmin,
                    xmax,
                    ymin,
                    ymax,
                    left: 0.5,
                    bottom: 0.5,
                }
            }
            [xmin, xmax, ymin, ymax, 1.0, left, bottom] => {
                check_window(xmin, xmax, ymin, ymax, pos)?;
                Scaling::Isotropic {
                    xmin,
                    xmax,
                    ymin,
                    ymax,
                    left: left / 100.0,
                    bottom: bottom / 100.0,
                }
            }
            [xmin, xfactor, ymin, yfactor, 2.0] => Scaling::PointFactor {
                xmin,
                xfactor,
                ymin,
                yfactor,
            },
            _ => {
                return Err(PlotError::malformed(
                    "SC",
                    pos,
                    format!("unsupported argument list {:?}", params),
                ));
            }
        };
        self.state.transform.set_scaling(scaling);
        Ok(())
    }

    fn do_input_window(&mut self, command: &str, pos: usize, relative: bool) -> Result<()> {
        let params = self.cursor.read_params(command)?;
        let transform = &mut self.state.transform;
        let to_device = |t: &CoordinateTransform, x: f64, y: f64| {
            if relative {
                t.page_percent(x, y)
            } else {
                (x, y)
            }
        };

        match *params.as_slice() {
            [] => transform.reset_corners(),
            [x1, y1] => {
                let p1 = to_device(transform, x1, y1);
                transform.move_p1(p1);
            }
            [x1, y1, x2, y2] => {
                let p1 = to_device(transform, x1, y1);
                let p2 = to_device(transform, x2, y2);
                transform.set_corners(p1, p2);
            }
            _ => {
                return Err(PlotError::malformed(
                    command,
                    pos,
                    format!("expected 0, 2 or 4 arguments, got {}", params.len()),
                ));
            }
        }
        Ok(())
    }

    /// Read an optional non-negative integer argument.
    fn optional_index(&mut self, command: &str, pos: usize) -> Result<Option<u32>> {
        match *self.cursor.read_params(command)?.as_slice() {
            [] => Ok(None),
            [v] if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) => Ok(Some(v as u32)),
            [v] => Err(PlotError::malformed(
                command,
                pos,
                format!("expected a non-negative integer, got {}", v),
            )),
            ref other => Err(PlotError::malformed(
                command,
                pos,
                format!("expected at most one argument, got {}", other.len()),
            )),
        }
    }

    /// Read either nothing or exactly two arguments.
    fn pair_or_nothing(&mut self, command: &str, pos: usize) -> Result<Option<(f64, f64)>> {
        match *self.cursor.read_params(command)?.as_slice() {
            [] => Ok(None),
            [a, b] => Ok(Some((a, b))),
            ref other => Err(PlotError::malformed(
                command,
                pos,
                format!("expected 0 or 2 arguments, got {}", other.len()),
            )),
        }
    }
}

fn check_window(xmin: f64, xmax: f64, ymin: f64, ymax: f64, pos: usize) -> Result<()> {
    if xmin == xmax || ymin == ymax {
        return Err(PlotError::malformed(
            "SC",
            pos,
            "scaling window has zero width or height",
        ));
    }
    Ok(())
}
