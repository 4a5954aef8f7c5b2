//! Banner kinds and rendered banner attachments.

/// Which membership event a banner announces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Welcome,
    Leave,
}

impl BannerKind {
    /// Title drawn across the banner.
    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "WELCOME",
            Self::Leave => "GOODBYE",
        }
    }

    /// Attachment file name for the rendered PNG.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Welcome => "welcome.png",
            Self::Leave => "leave.png",
        }
    }

    /// Start and end RGB stops of the diagonal background gradient.
    pub fn gradient(self) -> ([u8; 3], [u8; 3]) {
        match self {
            Self::Welcome => ([0x66, 0x7e, 0xea], [0x76, 0x4b, 0xa2]),
            Self::Leave => ([0xff, 0x7e, 0x5f], [0xfe, 0xb4, 0x7b]),
        }
    }
}

/// An encoded PNG banner ready to be attached to one outbound message.
#[derive(Clone, Debug)]
pub struct RenderedBanner {
    pub file_name: String,
    pub png: Vec<u8>,
}
