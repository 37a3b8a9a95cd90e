//! HP RTL `ESC *` class/subclass commands.

/// Recognized raster commands, keyed by class and subclass letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterCommand {
    /// `*r#U`
    ColorMode,
    /// `*r#A`
    StartRaster,
    /// `*r#C`
    EndRaster,
    /// `*r#B`
    LegacyEnd,
    /// `*r#S`
    RasterWidth,
    /// `*r#T`
    RasterHeight,
    /// `*b#M`
    Compression,
    /// `*t#R`
    Resolution,
    /// `*v#A`
    Red,
    /// `*v#B`
    Green,
    /// `*v#C`
    Blue,
    /// `*v#I`
    AssignColor,
    /// `*p#N`
    PatternNumber,
    /// `*v#O`
    PatternTransparency,
    /// `*v#N`
    SourceTransparency,
    /// `*p#X`
    MoveX,
    /// `*p#Y`
    MoveY,
    /// `*b#V`, one plane of a row
    TransferPlane,
    /// `*b#W`, last plane of a row
    TransferRow,
    Unknown(u8, u8),
}

impl RasterCommand {
    /// Decode a class byte and terminating subclass letter.
    ///
    /// The class is matched exactly (always lower case on the wire); the
    /// subclass ignores case.
    pub fn from_bytes(class: u8, subclass: u8) -> Self {
        match (class, subclass.to_ascii_lowercase()) {
            (b'r', b'u') => RasterCommand::ColorMode,
            (b'r', b'a') => RasterCommand::StartRaster,
            (b'r', b'c') => RasterCommand::EndRaster,
            (b'r', b'b') => RasterCommand::LegacyEnd,
            (b'r', b's') => RasterCommand::RasterWidth,
            (b'r', b't') => RasterCommand::RasterHeight,
            (b'b', b'm') => RasterCommand::Compression,
            (b't', b'r') => RasterCommand::Resolution,
            (b'v', b'a') => RasterCommand::Red,
            (b'v', b'b') => RasterCommand::Green,
            (b'v', b'c') => RasterCommand::Blue,
            (b'v', b'i') => RasterCommand::AssignColor,
            (b'p', b'n') => RasterCommand::PatternNumber,
            (b'v', b'o') => RasterCommand::PatternTransparency,
            (b'v', b'n') => RasterCommand::SourceTransparency,
            (b'p', b'x') => RasterCommand::MoveX,
            (b'p', b'y') => RasterCommand::MoveY,
            (b'b', b'v') => RasterCommand::TransferPlane,
            (b'b', b'w') => RasterCommand::TransferRow,
            _ => RasterCommand::Unknown(class, subclass),
        }
    }

    /// Printable form such as `*b#W`.
    pub fn name(&self) -> String {
        let (class, subclass) = match self {
            RasterCommand::ColorMode => (b'r', b'U'),
            RasterCommand::StartRaster => (b'r', b'A'),
            RasterCommand::EndRaster => (b'r', b'C'),
            RasterCommand::LegacyEnd => (b'r', b'B'),
            RasterCommand::RasterWidth => (b'r', b'S'),
            RasterCommand::RasterHeight => (b'r', b'T'),
            RasterCommand::Compression => (b'b', b'M'),
            RasterCommand::Resolution => (b't', b'R'),
            RasterCommand::Red => (b'v', b'A'),
            RasterCommand::Green => (b'v', b'B'),
            RasterCommand::Blue => (b'v', b'C'),
            RasterCommand::AssignColor => (b'v', b'I'),
            RasterCommand::PatternNumber => (b'p', b'N'),
            RasterCommand::PatternTransparency => (b'v', b'O'),
            RasterCommand::SourceTransparency => (b'v', b'N'),
            RasterCommand::MoveX => (b'p', b'X'),
            RasterCommand::MoveY => (b'p', b'Y'),
            RasterCommand::TransferPlane => (b'b', b'V'),
            RasterCommand::TransferRow => (b'b', b'W'),
            RasterCommand::Unknown(class, subclass) => (*class, *subclass),
        };
        format!("*{}#{}", char::from(class), char::from(subclass))
    }
}
