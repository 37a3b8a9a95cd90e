//! HP RTL command interpreter.
//!
//! Commands have the shape `ESC * <class> [-]digits <subclass>`. Everything
//! between commands (PJL headers, filler, non-`*` escapes) is skipped. Row
//! transfer commands are followed by exactly `#` bytes of row payload.

use tracing::{debug, trace};

use super::command::RasterCommand;
use super::palette::Rgb;
use super::planes::{PixelGrid, PlaneBuffer};
use super::state::{ColorMode, MAX_RASTER_WIDTH, RasterState};
use crate::codec::decode_row;
use crate::error::{PlotError, Result};
use crate::parser::{StreamCursor, parse_int};

const ESC: u8 = 0x1b;

/// One scanned `ESC *` command.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterToken {
    pub command: RasterCommand,
    /// Digits and sign between class and subclass, NUL bytes removed
    pub arg: Vec<u8>,
    /// Offset of the introducing escape byte
    pub pos: usize,
}

/// Stateful HP RTL interpreter over one in-memory stream.
pub struct HprtlInterpreter<'a> {
    cursor: StreamCursor<'a>,
    state: RasterState,
    planes: Option<PlaneBuffer>,
}

impl<'a> HprtlInterpreter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: StreamCursor::new(data),
            state: RasterState::new(),
            planes: None,
        }
    }

    pub fn state(&self) -> &RasterState {
        &self.state
    }

    /// Rows captured so far.
    pub fn rows(&self) -> usize {
        self.planes.as_ref().map_or(0, PlaneBuffer::rows)
    }

    /// Interpret the whole stream and combine the captured planes.
    pub fn run(mut self) -> Result<PixelGrid> {
        while let Some(token) = self.next_token()? {
            trace!(command = %token.command.name(), pos = token.pos, "rtl command");
            self.execute(token)?;
        }

        let grid = match &self.planes {
            Some(planes) => planes.combine(
                self.state.plane_count(),
                self.state.width,
                &self.state.palette,
            )?,
            None => PixelGrid::default(),
        };
        debug!(
            width = grid.width,
            height = grid.height,
            mode = ?self.state.color_mode,
            "raster decoded"
        );
        Ok(grid)
    }

    /// Scan forward to the next `ESC *` command.
    pub fn next_token(&mut self) -> Result<Option<RasterToken>> {
        loop {
            if !self.cursor.skip_past(ESC) {
                return Ok(None);
            }
            let pos = self.cursor.tell() - 1;
            match self.cursor.advance() {
                None => return Ok(None),
                Some(b'*') => {}
                Some(other) => {
                    trace!(byte = other, pos, "skipping non-raster escape");
                    continue;
                }
            }

            let Some(class) = self.cursor.advance() else {
                return Err(PlotError::eof("ESC*", pos));
            };

            let mut arg = Vec::new();
            let subclass = loop {
                let Some(b) = self.cursor.advance() else {
                    return Err(PlotError::eof(format!("*{}", char::from(class)), pos));
                };
                match b {
                    0 => {}
                    b'0'..=b'9' | b'-' => arg.push(b),
                    b => break b,
                }
            };

            return Ok(Some(RasterToken {
                command: RasterCommand::from_bytes(class, subclass),
                arg,
                pos,
            }));
        }
    }

    fn execute(&mut self, token: RasterToken) -> Result<()> {
        let RasterToken { command, arg, pos } = token;
        let name = command.name();
        let int = || parse_int(&arg, &name, pos);

        match command {
            RasterCommand::ColorMode => {
                let mode = ColorMode::from_code(int()?, pos)?;
                debug!(?mode, pos, "color mode selected");
                self.state.set_color_mode(mode);
            }
            RasterCommand::StartRaster => {
                // an unclosed capture is closed by the next start, and only
                // the first section that yields rows is kept
                self.state.in_raster = false;
                if self.rows() == 0 {
                    debug!(pos, "raster capture started");
                    self.state.in_raster = true;
                }
            }
            RasterCommand::EndRaster => {
                if self.state.in_raster {
                    debug!(pos, rows = self.rows(), "raster capture ended");
                }
                self.state.in_raster = false;
            }
            RasterCommand::RasterWidth => {
                let width = usize::try_from(int()?)
                    .map_err(|_| PlotError::malformed(&name, pos, "negative raster width"))?;
                if width > MAX_RASTER_WIDTH {
                    return Err(PlotError::malformed(
                        &name,
                        pos,
                        format!("raster width {} exceeds {}", width, MAX_RASTER_WIDTH),
                    ));
                }
                self.state.set_width(width);
            }
            RasterCommand::Compression => self.state.compression = int()?,
            RasterCommand::Resolution => self.state.resolution = int()?,
            RasterCommand::Red => self.state.pending.0 = component(int()?, &name, pos)?,
            RasterCommand::Green => self.state.pending.1 = component(int()?, &name, pos)?,
            RasterCommand::Blue => self.state.pending.2 = component(int()?, &name, pos)?,
            RasterCommand::AssignColor => {
                let (r, g, b) = self.state.pending;
                self.state.palette.set(int()?, Rgb(r, g, b))?;
            }
            RasterCommand::TransferPlane => self.transfer(int()?, false, &name, pos)?,
            RasterCommand::TransferRow => self.transfer(int()?, true, &name, pos)?,
            RasterCommand::LegacyEnd
            | RasterCommand::RasterHeight
            | RasterCommand::PatternNumber
            | RasterCommand::PatternTransparency
            | RasterCommand::SourceTransparency
            | RasterCommand::MoveX
            | RasterCommand::MoveY => {}
            RasterCommand::Unknown(..) => {
                return Err(PlotError::UnknownCommand { command: name, pos });
            }
        }
        Ok(())
    }

    /// Handle `*b#V` / `*b#W`: read the payload and store it on the active
    /// plane while a capture is open.
    fn transfer(&mut self, len: i64, all_planes: bool, command: &str, pos: usize) -> Result<()> {
        let len = usize::try_from(len)
            .map_err(|_| PlotError::malformed(command, pos, "negative row length"))?;

        if len == 0 {
            if all_planes {
                self.state.current_plane = 0;
            }
            return Ok(());
        }

        let payload = self
            .cursor
            .take(len)
            .ok_or_else(|| PlotError::eof(command, pos))?;

        if !self.state.in_raster {
            trace!(len, pos, "row outside raster capture dropped");
            return Ok(());
        }

        // without *r#S every row is taken at its transmitted length
        if self.state.width == 0 {
            self.state.width = len * 8;
        }
        if self.state.byte_width == 0 {
            self.state.byte_width = len;
        }

        let row = decode_row(self.state.compression, payload, self.state.byte_width)?;
        let plane_count = self.state.plane_count();
        self.planes
            .get_or_insert_with(|| PlaneBuffer::new(plane_count))
            .push_row(self.state.current_plane, row);
        self.state.advance_plane(all_planes);
        Ok(())
    }
}

fn component(value: i64, command: &str, pos: usize) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        PlotError::malformed(
            command,
            pos,
            format!("color component {} outside 0..=255", value),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_skips_filler_and_nul() {
        let mut interp = HprtlInterpreter::new(b"junk\x1bE\x1b*r1\x002U");
        let token = interp.next_token().unwrap().unwrap();
        assert_eq!(token.command, RasterCommand::ColorMode);
        assert_eq!(token.arg, b"12");
        assert_eq!(token.pos, 6);
        assert_eq!(interp.next_token().unwrap(), None);
    }

    #[test]
    fn test_tokenizer_negative_argument() {
        let mut interp = HprtlInterpreter::new(b"\x1b*r-4U");
        let token = interp.next_token().unwrap().unwrap();
        assert_eq!(token.arg, b"-4");
    }

    #[test]
    fn test_tokenizer_truncated_command() {
        let mut interp = HprtlInterpreter::new(b"\x1b*r12");
        assert!(matches!(
            interp.next_token(),
            Err(PlotError::UnexpectedEof { pos: 0, .. })
        ));
    }

    #[test]
    fn test_rows_before_start_are_dropped() {
        let grid = HprtlInterpreter::new(b"\x1b*b1W\xff\x1b*r1A\x1b*b1W\x0f\x1b*rC")
            .run()
            .unwrap();
        assert_eq!((grid.width, grid.height), (8, 1));
        assert_eq!(grid.get(0, 0), Some(Rgb::WHITE));
        assert_eq!(grid.get(7, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn test_only_first_section_is_kept() {
        let data = b"\x1b*rA\x1b*b1W\xff\x1b*rC\x1b*rA\x1b*b1W\x00\x1b*rC";
        let grid = HprtlInterpreter::new(data).run().unwrap();
        assert_eq!(grid.height, 1);
    }

    #[test]
    fn test_assign_color() {
        let data = b"\x1b*v10A\x1b*v20B\x1b*v30C\x1b*v1I";
        let mut interp = HprtlInterpreter::new(data);
        while let Some(token) = interp.next_token().unwrap() {
            interp.execute(token).unwrap();
        }
        assert_eq!(interp.state().palette.get(1).unwrap(), Rgb(10, 20, 30));
    }

    #[test]
    fn test_component_out_of_range() {
        assert!(matches!(
            HprtlInterpreter::new(b"\x1b*v300A").run(),
            Err(PlotError::MalformedArgument { .. })
        ));
    }

    #[test]
    fn test_truncated_payload() {
        assert!(matches!(
            HprtlInterpreter::new(b"\x1b*rA\x1b*b4W\xff\xff").run(),
            Err(PlotError::UnexpectedEof { pos: 4, .. })
        ));
    }
}
