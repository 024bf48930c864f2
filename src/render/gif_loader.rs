use image::RgbImage;
use std::collections::TryReserveError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open GIF file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read GIF data: {0}")]
    Decode(#[from] gif::DecodingError),

    #[error("GIF has no images")]
    NoFrames,

    #[error("no color map in GIF")]
    NoColorMap,

    #[error("palette index {index} out of range (palette has {len} colors)")]
    PaletteIndexOutOfRange { index: u8, len: usize },

    #[error("cannot allocate RGB buffer: {0}")]
    Allocation(#[from] TryReserveError),
}

/// How pixel indices beyond the color table are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Substitute index 0. Malformed files still render something.
    #[default]
    Clamp,
    Strict,
}

/// Indexed first frame. Built only through `new`, so `pixels.len() == width * height`.
#[derive(Debug, Clone)]
pub struct SourceImage {
    width: u32,
    height: u32,
    palette: Vec<[u8; 3]>,
    pixels: Vec<u8>,
}

impl SourceImage {
    /// `palette` is a flat RGB table as stored in the file; a trailing partial
    /// entry is dropped. `pixels` is padded or cut to `width * height`.
    pub fn new(width: u32, height: u32, palette: &[u8], mut pixels: Vec<u8>) -> Self {
        let palette = palette
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        pixels.resize(width as usize * height as usize, 0);
        Self {
            width,
            height,
            palette,
            pixels,
        }
    }

    pub fn to_rgb(&self, mode: PaletteMode) -> Result<RgbFrame, LoadError> {
        if self.palette.is_empty() {
            return Err(LoadError::NoColorMap);
        }

        let len = self.pixels.len().saturating_mul(3);
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;

        for &index in &self.pixels {
            let color = match self.palette.get(index as usize) {
                Some(c) => c,
                None if mode == PaletteMode::Strict => {
                    return Err(LoadError::PaletteIndexOutOfRange {
                        index,
                        len: self.palette.len(),
                    });
                }
                None => &self.palette[0],
            };
            data.extend_from_slice(color);
        }

        Ok(RgbFrame::from_raw(self.width, self.height, data))
    }
}

/// Dense RGB copy of one decoded frame, row-major, 3 bytes per pixel.
#[derive(Debug, Clone)]
pub struct RgbFrame {
    image: RgbImage,
}

impl RgbFrame {
    fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        // Length is width * height * 3 by construction in `SourceImage::to_rgb`.
        let image = RgbImage::from_raw(width, height, data)
            .unwrap_or_else(|| RgbImage::new(width, height));
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn data(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }
}

pub fn load(path: &Path, mode: PaletteMode) -> Result<RgbFrame, LoadError> {
    let source = decode_first_frame(path)?;
    let frame = source.to_rgb(mode)?;
    log::debug!(
        "decoded {}: {}x{}, {} colors, {} rgb bytes",
        path.display(),
        source.width,
        source.height,
        source.palette.len(),
        frame.data().len()
    );
    Ok(frame)
}

/// The decoder lives only inside this function, so it is released on every return.
fn decode_first_frame(path: &Path) -> Result<SourceImage, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    // The decoder reports these cases as generic format/EOF errors.
    if let Some(layout) = scan_layout(&bytes) {
        match layout.first_image {
            None => return Err(LoadError::NoFrames),
            Some(false) if !layout.global_table => return Err(LoadError::NoColorMap),
            Some(_) => {}
        }
    }

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(bytes.as_slice())?;

    let global = decoder.global_palette().map(<[u8]>::to_vec);
    let frame = decoder.read_next_frame()?.ok_or(LoadError::NoFrames)?;

    let palette = frame
        .palette
        .as_deref()
        .or(global.as_deref())
        .ok_or(LoadError::NoColorMap)?;

    Ok(SourceImage::new(
        u32::from(frame.width),
        u32::from(frame.height),
        palette,
        frame.buffer.to_vec(),
    ))
}

/// Block-level summary of a GIF container, read without decoding pixels.
#[derive(Debug, PartialEq, Eq)]
struct Layout {
    global_table: bool,
    /// Local-table flag of the first image; `None` when the trailer comes first.
    first_image: Option<bool>,
}

const TABLE_FLAG: u8 = 0x80;

/// `None` when the bytes are not a well-formed block sequence; the decoder
/// then produces the error.
fn scan_layout(bytes: &[u8]) -> Option<Layout> {
    if bytes.len() < 13 || !bytes.starts_with(b"GIF") {
        return None;
    }
    let flags = bytes[10];
    let global_table = flags & TABLE_FLAG != 0;
    let mut pos = 13;
    if global_table {
        pos += color_table_len(flags);
    }

    loop {
        // Ending cleanly between blocks is read the same as a trailer.
        if pos == bytes.len() {
            return Some(Layout {
                global_table,
                first_image: None,
            });
        }
        match *bytes.get(pos)? {
            0x2C => {
                let packed = *bytes.get(pos + 9)?;
                return Some(Layout {
                    global_table,
                    first_image: Some(packed & TABLE_FLAG != 0),
                });
            }
            0x21 => pos = skip_sub_blocks(bytes, pos + 2)?,
            0x3B => {
                return Some(Layout {
                    global_table,
                    first_image: None,
                })
            }
            _ => return None,
        }
    }
}

fn color_table_len(flags: u8) -> usize {
    3 * (1usize << ((flags & 0x07) + 1))
}

fn skip_sub_blocks(bytes: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        let len = usize::from(*bytes.get(pos)?);
        pos += 1;
        if len == 0 {
            return Some(pos);
        }
        pos += len;
    }
}
