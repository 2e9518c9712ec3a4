//! JSON page description: a variant, a viewport and a trace of host events to replay.

use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::{Rect, Size},
        error::{RevealError, RevealResult},
    },
    host::memory::MemoryHost,
    scroll::observer::{HostEvent, ObserverOpts, PassReport},
    section::contact::ContactForm,
    site::{Page, Variant, layout::synthetic_host},
};

/// Element extent in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RectDef {
    #[serde(default)]
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectDef {
    /// Convert to a kurbo rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// One step of the replayed trace.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
pub enum Action {
    /// Scroll to an absolute offset.
    Scroll { to: f64 },
    /// Resize the viewport.
    Resize { width: f64, height: f64 },
    /// Advance `repeat` frames of `dt` seconds each.
    Frame {
        dt: f64,
        #[serde(default = "one")]
        repeat: u32,
    },
    /// Submit the contact form.
    Submit {
        #[serde(default)]
        form: ContactForm,
    },
}

fn one() -> u32 {
    1
}

fn default_viewport() -> Size {
    Size::new(1280.0, 800.0)
}

/// Page description loaded from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDef {
    pub variant: Variant,
    #[serde(default = "default_viewport")]
    pub viewport: Size,
    #[serde(default)]
    pub observer: ObserverOpts,
    /// Extents that replace (or add to) the synthetic layout.
    #[serde(default)]
    pub elements: BTreeMap<String, RectDef>,
    /// Element ids to drop from the layout, e.g. to simulate markup that never rendered.
    #[serde(default)]
    pub remove: Vec<String>,
    #[serde(default)]
    pub trace: Vec<Action>,
}

/// Outcome of one replayed step.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepReport {
    /// Index in the trace; `None` for the evaluation pass right after mounting.
    pub step: Option<usize>,
    pub action: Option<Action>,
    pub report: PassReport,
    /// Acknowledgment text for form submissions.
    pub acknowledgment: Option<String>,
}

impl PageDef {
    /// Parse a page description from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse page description JSON: {e}")))
    }

    /// Parse a page description from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::configuration(format!(
                "open page description '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check sizes, offsets and durations.
    pub fn validate(&self) -> RevealResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(self.viewport.width) && positive(self.viewport.height)) {
            return Err(RevealError::configuration("viewport must have a positive size"));
        }
        if !positive(self.observer.max_frame_dt) {
            return Err(RevealError::configuration("observer.max_frame_dt must be > 0"));
        }
        for (id, r) in &self.elements {
            let finite = [r.x, r.y, r.width, r.height].iter().all(|v| v.is_finite());
            if id.is_empty() || !finite || r.width < 0.0 || r.height < 0.0 {
                return Err(RevealError::configuration(format!(
                    "element '{id}' has an invalid extent"
                )));
            }
        }
        for (i, action) in self.trace.iter().enumerate() {
            let ok = match action {
                Action::Scroll { to } => to.is_finite() && *to >= 0.0,
                Action::Resize { width, height } => positive(*width) && positive(*height),
                Action::Frame { dt, repeat } => dt.is_finite() && *dt >= 0.0 && *repeat >= 1,
                Action::Submit { .. } => true,
            };
            if !ok {
                return Err(RevealError::configuration(format!(
                    "trace step {i} is invalid: {action:?}"
                )));
            }
        }
        Ok(())
    }

    /// The synthetic layout of the variant with this description's overrides applied.
    pub fn host(&self) -> MemoryHost {
        let mut host = synthetic_host(self.variant, self.viewport);
        for (id, rect) in &self.elements {
            host.set_element(id.clone(), rect.to_rect());
        }
        for id in &self.remove {
            host.remove_element(id);
        }
        host
    }

    /// Mount the page, run one evaluation pass, then replay the trace.
    ///
    /// Returns the reports together with the host in its final state.
    #[tracing::instrument(skip(self), fields(variant = %self.variant, steps = self.trace.len()))]
    pub fn simulate(&self) -> RevealResult<(Vec<StepReport>, MemoryHost)> {
        self.validate()?;
        let mut host = self.host();
        let mut page = Page::mount_with(self.variant, self.observer.clone(), &mut host)?;

        let mut out = Vec::with_capacity(self.trace.len() + 1);
        out.push(StepReport {
            step: None,
            action: None,
            report: page.refresh(&mut host)?,
            acknowledgment: None,
        });

        for (i, action) in self.trace.iter().enumerate() {
            let mut acknowledgment = None;
            let report = match action {
                Action::Scroll { to } => {
                    host.scroll_to(*to);
                    page.handle(HostEvent::Scroll, &mut host)?
                }
                Action::Resize { width, height } => {
                    host.resize(Size::new(*width, *height));
                    page.handle(HostEvent::Resize, &mut host)?
                }
                Action::Frame { dt, repeat } => {
                    let mut total = PassReport::default();
                    for _ in 0..*repeat {
                        total.advanced +=
                            page.handle(HostEvent::Frame { dt: *dt }, &mut host)?.advanced;
                    }
                    total
                }
                Action::Submit { form } => {
                    acknowledgment = Some(page.submit_contact(form)?);
                    PassReport::default()
                }
            };
            out.push(StepReport {
                step: Some(i),
                action: Some(action.clone()),
                report,
                acknowledgment,
            });
        }
        drop(page);
        Ok((out, host))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/page.rs"]
mod tests;
