// File: crates/graph-core/src/container.rs
// Summary: Dashboard region flow layout; one container per chart request.

use anyhow::Result;

use crate::geometry::RectI32;
use crate::types::{HEIGHT, WIDTH};

/// Gap around each container, matching the page layout the charts
/// originally flowed in.
const MARGIN: i32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

pub type ContainerId = usize;

/// One chart's slot in the region. Created at request time, owned by the
/// region thereafter; this component never destroys one.
#[derive(Clone, Debug)]
pub struct ChartContainer {
    rect: RectI32,
    png: Option<Vec<u8>>,
}

impl ChartContainer {
    fn new(rect: RectI32) -> Self {
        Self { rect, png: None }
    }

    pub fn rect(&self) -> RectI32 {
        self.rect
    }

    /// Rendered PNG bytes, once an engine has drawn into this slot.
    pub fn png(&self) -> Option<&[u8]> {
        self.png.as_deref()
    }

    pub fn set_png(&mut self, bytes: Vec<u8>) {
        self.png = Some(bytes);
    }

    /// Write the rendered chart to disk.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png.as_ref().ok_or_else(|| anyhow::anyhow!("container has not been drawn"))?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Shared parent region. Containers take 90% of the viewport width and
/// 40% of its height and flow inline with wrapping, so successive charts
/// stack the way blocks do on a page.
pub struct DashboardRegion {
    viewport: Viewport,
    containers: Vec<ChartContainer>,
    cursor_x: i32,
    cursor_y: i32,
    row_height: i32,
}

impl DashboardRegion {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            containers: Vec::new(),
            cursor_x: 0,
            cursor_y: 0,
            row_height: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Allocate the next container slot and return its id.
    pub fn append(&mut self) -> ContainerId {
        let w = self.viewport.width * 9 / 10;
        let h = self.viewport.height * 2 / 5;
        let outer_w = w + 2 * MARGIN;

        if self.cursor_x > 0 && self.cursor_x + outer_w > self.viewport.width {
            self.cursor_x = 0;
            self.cursor_y += self.row_height;
            self.row_height = 0;
        }

        let rect = RectI32::from_ltwh(self.cursor_x + MARGIN, self.cursor_y + MARGIN, w, h);
        self.cursor_x += outer_w;
        self.row_height = self.row_height.max(h + 2 * MARGIN);

        self.containers.push(ChartContainer::new(rect));
        self.containers.len() - 1
    }

    pub fn get(&self, id: ContainerId) -> Option<&ChartContainer> {
        self.containers.get(id)
    }

    pub fn get_mut(&mut self, id: ContainerId) -> Option<&mut ChartContainer> {
        self.containers.get_mut(id)
    }

    pub fn containers(&self) -> &[ChartContainer] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl Default for DashboardRegion {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
