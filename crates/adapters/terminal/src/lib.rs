//! # flueview-adapter-terminal
//!
//! Terminal implementation of the [`StatusDisplay`] port.
//!
//! The display regions are lines, repainted in place with ANSI cursor
//! movement. The status line carries a color, mapped from the domain's
//! status colors to ANSI red/green.
//!
//! ## Dependency rule
//!
//! Depends on `flueview-app` (port traits) and `flueview-domain` only.

use std::future::Future;
use std::io::Write;

use tokio::sync::Mutex;

use flueview_app::ports::StatusDisplay;
use flueview_domain::error::DisplayError;
use flueview_domain::view::{Region, StatusColor, StatusView};

/// ANSI terminal screen holding one line per display region.
///
/// Overlapping poll cycles apply through a mutex: applies are serialized
/// but not ordered, so the last one to run wins. An apply is all-or-nothing
/// — every target region is resolved before any line is touched.
pub struct AnsiScreen<W> {
    inner: Mutex<ScreenState<W>>,
}

struct ScreenState<W> {
    out: W,
    lines: Vec<Line>,
    painted: bool,
}

struct Line {
    region: Region,
    prefix: &'static str,
    text: String,
    color: Option<StatusColor>,
}

impl<W: Write + Send> AnsiScreen<W> {
    /// Screen with all display regions, in display order.
    pub fn new(out: W) -> Self {
        Self::with_regions(out, &Region::ALL)
    }

    fn with_regions(out: W, regions: &[Region]) -> Self {
        let lines = regions
            .iter()
            .map(|&region| Line {
                region,
                prefix: prefix(region),
                text: String::new(),
                color: None,
            })
            .collect();
        Self {
            inner: Mutex::new(ScreenState {
                out,
                lines,
                painted: false,
            }),
        }
    }
}

impl AnsiScreen<std::io::Stdout> {
    /// Screen painting to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> StatusDisplay for AnsiScreen<W> {
    fn apply(&self, view: &StatusView) -> impl Future<Output = Result<(), DisplayError>> + Send {
        async move {
            let mut state = self.inner.lock().await;
            state.apply(view)
        }
    }
}

impl<W: Write> ScreenState<W> {
    fn apply(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        // Resolve every region before touching any line, so a failed apply
        // leaves the whole screen unchanged.
        let mut updates = Vec::with_capacity(view.regions().len());
        for (region, text) in view.regions() {
            let index = self
                .lines
                .iter()
                .position(|line| line.region == region)
                .ok_or(DisplayError::UnknownRegion(region))?;
            updates.push((index, text.to_string()));
        }

        for (index, text) in updates {
            let line = &mut self.lines[index];
            line.text = text;
            line.color = (line.region == Region::Status).then_some(view.status_color);
        }
        self.repaint()
    }

    fn repaint(&mut self) -> Result<(), DisplayError> {
        if self.painted {
            write!(self.out, "\x1b[{}A", self.lines.len())?;
        }
        for line in &self.lines {
            write!(self.out, "\x1b[2K{}", line.prefix)?;
            match line.color {
                Some(color) => writeln!(self.out, "{}{}\x1b[0m", ansi(color), line.text)?,
                None => writeln!(self.out, "{}", line.text)?,
            }
        }
        self.out.flush()?;
        self.painted = true;
        Ok(())
    }
}

/// The flue reading is a bare value; every other region self-labels.
const fn prefix(region: Region) -> &'static str {
    match region {
        Region::FlueTemperature => "Flue Temp: ",
        _ => "",
    }
}

const fn ansi(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Alert => "\x1b[31m",
        StatusColor::Normal => "\x1b[32m",
    }
}
