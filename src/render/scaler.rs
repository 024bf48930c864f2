pub const MAX_DISPLAY_WIDTH: u32 = 40;

/// Nearest-neighbor mapping from a source raster onto a terminal cell grid.
///
/// Rows are halved because character cells are about twice as tall as wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGrid {
    pub width: u32,
    pub height: u32,
    src_width: u32,
    src_height: u32,
}

impl DisplayGrid {
    pub fn fit(src_width: u32, src_height: u32, max_width: u32) -> Self {
        if src_width == 0 {
            return Self {
                width: 0,
                height: 0,
                src_width,
                src_height,
            };
        }

        let width = src_width.min(max_width);
        let height = (u64::from(src_height) * u64::from(width)) / u64::from(src_width) / 2;
        Self {
            width,
            height: height as u32,
            src_width,
            src_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn source_x(&self, dest_x: u32) -> u32 {
        if self.is_empty() {
            return 0;
        }
        let x = u64::from(dest_x) * u64::from(self.src_width) / u64::from(self.width);
        clamp_index(x, self.src_width)
    }

    pub fn source_y(&self, dest_y: u32) -> u32 {
        if self.is_empty() {
            return 0;
        }
        let y = u64::from(dest_y) * u64::from(self.src_height) * 2 / u64::from(self.height);
        clamp_index(y, self.src_height)
    }
}

fn clamp_index(v: u64, len: u32) -> u32 {
    v.min(u64::from(len.saturating_sub(1))) as u32
}
