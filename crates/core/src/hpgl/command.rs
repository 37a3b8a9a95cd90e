//! HPGL two-letter mnemonics.

/// Recognized HPGL instructions. Unknown mnemonics keep their raw bytes
/// for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Pen control
    PenUp,
    PenDown,
    SelectPen,
    PlotAbsolute,
    LineType,

    // Character sets and sizes
    SelectAlternate,
    SelectStandard,
    DesignateStandard,
    DesignateAlternate,
    RelativeSize,
    AbsoluteSize,
    AbsoluteDirection,
    DefineTerminator,
    Label,

    // Window mapping
    Scale,
    InputP1P2,
    InputRelative,

    // Device
    Defaults,
    Initialize,
    OutputP1P2,

    Unknown([u8; 2]),
}

impl Mnemonic {
    /// Decode a mnemonic, ignoring case.
    pub fn from_bytes(b: [u8; 2]) -> Self {
        match [b[0].to_ascii_uppercase(), b[1].to_ascii_uppercase()] {
            [b'P', b'U'] => Mnemonic::PenUp,
            [b'P', b'D'] => Mnemonic::PenDown,
            [b'S', b'P'] => Mnemonic::SelectPen,
            [b'P', b'A'] => Mnemonic::PlotAbsolute,
            [b'L', b'T'] => Mnemonic::LineType,
            [b'S', b'A'] => Mnemonic::SelectAlternate,
            [b'S', b'S'] => Mnemonic::SelectStandard,
            [b'C', b'S'] => Mnemonic::DesignateStandard,
            [b'C', b'A'] => Mnemonic::DesignateAlternate,
            [b'S', b'R'] => Mnemonic::RelativeSize,
            [b'S', b'I'] => Mnemonic::AbsoluteSize,
            [b'D', b'I'] => Mnemonic::AbsoluteDirection,
            [b'D', b'T'] => Mnemonic::DefineTerminator,
            [b'L', b'B'] => Mnemonic::Label,
            [b'S', b'C'] => Mnemonic::Scale,
            [b'I', b'P'] => Mnemonic::InputP1P2,
            [b'I', b'R'] => Mnemonic::InputRelative,
            [b'D', b'F'] => Mnemonic::Defaults,
            [b'I', b'N'] => Mnemonic::Initialize,
            [b'O', b'P'] => Mnemonic::OutputP1P2,
            _ => Mnemonic::Unknown(b),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mnemonic::PenUp => "PU",
            Mnemonic::PenDown => "PD",
            Mnemonic::SelectPen => "SP",
            Mnemonic::PlotAbsolute => "PA",
            Mnemonic::LineType => "LT",
            Mnemonic::SelectAlternate => "SA",
            Mnemonic::SelectStandard => "SS",
            Mnemonic::DesignateStandard => "CS",
            Mnemonic::DesignateAlternate => "CA",
            Mnemonic::RelativeSize => "SR",
            Mnemonic::AbsoluteSize => "SI",
            Mnemonic::AbsoluteDirection => "DI",
            Mnemonic::DefineTerminator => "DT",
            Mnemonic::Label => "LB",
            Mnemonic::Scale => "SC",
            Mnemonic::InputP1P2 => "IP",
            Mnemonic::InputRelative => "IR",
            Mnemonic::Defaults => "DF",
            Mnemonic::Initialize => "IN",
            Mnemonic::OutputP1P2 => "OP",
            Mnemonic::Unknown(_) => "??",
        }
    }

    /// Printable name, including the raw bytes of unknown mnemonics.
    pub fn name(&self) -> String {
        match self {
            Mnemonic::Unknown(b) => String::from_utf8_lossy(b).into_owned(),
            known => known.as_str().to_string(),
        }
    }
}
