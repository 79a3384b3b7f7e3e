//! Display surfaces and the scroll viewport
//!
//! Renderers never talk to a concrete display. They address named surfaces
//! through the `SurfaceTree` port, and the snap controller moves the page
//! through the `ScrollSurface` port. Any surface may be absent; writing to
//! an absent surface reports `SurfaceMissing` and changes nothing.

use std::collections::HashMap;

use crate::{KioskError, KioskResult};

/// Stable identifiers of the dashboard's display surfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurfaceId {
    // Clock page
    DigitalTimeMain,
    DigitalTimeSeconds,
    DateDisplay,
    SecondHand,
    MinuteHand,
    HourHand,
    // Calendar
    CalendarMonth,
    CalendarDays,
    // World clocks
    TimeSanJuan,
    TimeNewYork,
    TimeLosAngeles,
    TimeDubai,
    // Weather
    WeatherTemp,
    WeatherIcon,
    WeatherDesc,
    WeatherLocation,
    HourlyForecast,
    DailyForecast,
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 18] = [
        SurfaceId::DigitalTimeMain,
        SurfaceId::DigitalTimeSeconds,
        SurfaceId::DateDisplay,
        SurfaceId::SecondHand,
        SurfaceId::MinuteHand,
        SurfaceId::HourHand,
        SurfaceId::CalendarMonth,
        SurfaceId::CalendarDays,
        SurfaceId::TimeSanJuan,
        SurfaceId::TimeNewYork,
        SurfaceId::TimeLosAngeles,
        SurfaceId::TimeDubai,
        SurfaceId::WeatherTemp,
        SurfaceId::WeatherIcon,
        SurfaceId::WeatherDesc,
        SurfaceId::WeatherLocation,
        SurfaceId::HourlyForecast,
        SurfaceId::DailyForecast,
    ];

    /// Markup identifier of the surface
    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceId::DigitalTimeMain => "digital-time-main",
            SurfaceId::DigitalTimeSeconds => "digital-time-seconds",
            SurfaceId::DateDisplay => "date-display",
            SurfaceId::SecondHand => "second-hand",
            SurfaceId::MinuteHand => "minute-hand",
            SurfaceId::HourHand => "hour-hand",
            SurfaceId::CalendarMonth => "calendar-month",
            SurfaceId::CalendarDays => "calendar-days",
            SurfaceId::TimeSanJuan => "time-sanjuan",
            SurfaceId::TimeNewYork => "time-newyork",
            SurfaceId::TimeLosAngeles => "time-losangeles",
            SurfaceId::TimeDubai => "time-dubai",
            SurfaceId::WeatherTemp => "weather-temp",
            SurfaceId::WeatherIcon => "weather-icon",
            SurfaceId::WeatherDesc => "weather-desc",
            SurfaceId::WeatherLocation => "weather-location",
            SurfaceId::HourlyForecast => "hourly-forecast",
            SurfaceId::DailyForecast => "daily-forecast",
        }
    }

    /// Look a surface up by its markup identifier
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == name)
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of a list surface (calendar day, hourly slot, daily row)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Space-separated style classes, e.g. "calendar-day today"
    pub class: String,
    /// Text lines, top to bottom
    pub lines: Vec<String>,
}

impl Tile {
    pub fn new(class: impl Into<String>) -> Self {
        Tile {
            class: class.into(),
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn add_class(&mut self, class: &str) {
        self.class.push(' ');
        self.class.push_str(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split(' ').any(|c| c == class)
    }
}

/// A single write to a surface
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceUpdate {
    /// Replace the text content
    Text(String),
    /// Rotate the element, degrees clockwise
    Rotation(f64),
    /// Replace all child tiles
    Tiles(Vec<Tile>),
}

/// Surface lookup port
pub trait SurfaceTree {
    /// Whether the surface exists
    fn contains(&self, id: SurfaceId) -> bool;

    /// Apply an update. Fails with `SurfaceMissing` if the surface is absent.
    fn write(&mut self, id: SurfaceId, update: SurfaceUpdate) -> KioskResult<()>;
}

/// The paged scroll viewport
pub trait ScrollSurface {
    /// Current scroll offset in pixels
    fn offset(&self) -> f64;

    /// Move the viewport. Implementations may clamp.
    fn set_offset(&mut self, offset: f64);

    /// Height of one page, read fresh on every call
    fn page_height(&self) -> f64;
}

/// Last written state of one surface
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceState {
    pub text: Option<String>,
    pub rotation: Option<f64>,
    pub tiles: Vec<Tile>,
    /// Number of writes applied
    pub writes: u64,
}

impl SurfaceState {
    fn apply(&mut self, update: SurfaceUpdate) {
        match update {
            SurfaceUpdate::Text(text) => self.text = Some(text),
            SurfaceUpdate::Rotation(deg) => self.rotation = Some(deg),
            SurfaceUpdate::Tiles(tiles) => self.tiles = tiles,
        }
        self.writes += 1;
    }

    /// Same visible content, ignoring the write counter
    pub fn same_content(&self, other: &SurfaceState) -> bool {
        self.text == other.text && self.rotation == other.rotation && self.tiles == other.tiles
    }
}

/// In-memory surface tree
#[derive(Clone, Debug, Default)]
pub struct MemoryBoard {
    surfaces: HashMap<SurfaceId, SurfaceState>,
}

impl MemoryBoard {
    /// Board with every known surface present
    pub fn full() -> Self {
        Self::with_surfaces(SurfaceId::ALL)
    }

    /// Board with exactly the given surfaces present
    pub fn with_surfaces(ids: impl IntoIterator<Item = SurfaceId>) -> Self {
        MemoryBoard {
            surfaces: ids
                .into_iter()
                .map(|id| (id, SurfaceState::default()))
                .collect(),
        }
    }

    /// Board with every surface except the given ones
    pub fn without(missing: &[SurfaceId]) -> Self {
        Self::with_surfaces(
            SurfaceId::ALL
                .iter()
                .copied()
                .filter(|id| !missing.contains(id)),
        )
    }

    pub fn state(&self, id: SurfaceId) -> Option<&SurfaceState> {
        self.surfaces.get(&id)
    }

    pub fn text(&self, id: SurfaceId) -> Option<&str> {
        self.surfaces.get(&id)?.text.as_deref()
    }

    pub fn rotation(&self, id: SurfaceId) -> Option<f64> {
        self.surfaces.get(&id)?.rotation
    }

    pub fn tiles(&self, id: SurfaceId) -> &[Tile] {
        self.surfaces
            .get(&id)
            .map(|s| s.tiles.as_slice())
            .unwrap_or(&[])
    }

    /// Total writes applied across all surfaces
    pub fn total_writes(&self) -> u64 {
        self.surfaces.values().map(|s| s.writes).sum()
    }

    /// Same visible content on every surface
    pub fn same_content(&self, other: &MemoryBoard) -> bool {
        self.surfaces.len() == other.surfaces.len()
            && self.surfaces.iter().all(|(id, state)| {
                other
                    .surfaces
                    .get(id)
                    .is_some_and(|o| state.same_content(o))
            })
    }
}

impl SurfaceTree for MemoryBoard {
    fn contains(&self, id: SurfaceId) -> bool {
        self.surfaces.contains_key(&id)
    }

    fn write(&mut self, id: SurfaceId, update: SurfaceUpdate) -> KioskResult<()> {
        let state = self
            .surfaces
            .get_mut(&id)
            .ok_or(KioskError::SurfaceMissing(id))?;
        state.apply(update);
        Ok(())
    }
}

/// In-memory paged viewport. Offsets are clamped to the scrollable range.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualViewport {
    offset: f64,
    page_height: f64,
    pages: u32,
    writes: u64,
}

impl VirtualViewport {
    pub fn new(page_height: f64, pages: u32) -> Self {
        VirtualViewport {
            offset: 0.0,
            page_height,
            pages,
            writes: 0,
        }
    }

    /// Largest reachable offset
    pub fn max_offset(&self) -> f64 {
        (self.page_height * self.pages.saturating_sub(1) as f64).max(0.0)
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Number of offset writes so far
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Page nearest to the current offset
    pub fn current_page(&self) -> u32 {
        if self.page_height > 0.0 {
            (self.offset / self.page_height).round() as u32
        } else {
            0
        }
    }

    /// Change the viewport height, e.g. on a window resize
    pub fn resize(&mut self, page_height: f64) {
        self.page_height = page_height;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}

impl ScrollSurface for VirtualViewport {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        self.offset = offset.clamp(0.0, self.max_offset());
        self.writes += 1;
    }

    fn page_height(&self) -> f64 {
        self.page_height
    }
}
