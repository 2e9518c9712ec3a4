//! The two landing-page variants and the page that mounts their sections.

use std::{fmt, str::FromStr};

use crate::{
    foundation::error::{RevealError, RevealResult},
    host::Host,
    scroll::observer::{HostEvent, ObserverOpts, PassReport, ScrollObserver},
    section::{
        MountedSection, SectionController, about,
        contact::{self, ContactForm, LocalAcknowledgment, SubmitHandler},
        footer::Footer,
        hero::Hero,
        navbar::Navbar,
        protocol::Protocol,
        specialties::{self, Features},
        testimonials,
    },
};

pub(crate) mod content;
pub(crate) mod layout;
pub(crate) mod page;

use content::SiteContent;

/// Which landing page to assemble.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Light, stone-and-gold clinic page.
    #[default]
    Clinic,
    /// Dark page with pinned protocol cards and interactive feature cards.
    Noir,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Clinic, Variant::Noir];

    /// Lowercase id (`clinic` / `noir`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Clinic => "clinic",
            Self::Noir => "noir",
        }
    }

    /// Static content of this variant.
    pub fn content(self) -> &'static SiteContent {
        SiteContent::for_variant(self)
    }

    /// Section controllers in page order.
    pub fn sections(self) -> Vec<Box<dyn SectionController>> {
        let content = self.content();
        match self {
            Self::Clinic => vec![
                Box::new(Navbar::new(self)),
                Box::new(Hero::new(content)),
                Box::new(about::about()),
                Box::new(specialties::specialties(content)),
                Box::new(about::philosophy(content)),
                Box::new(testimonials::testimonials(content)),
                Box::new(contact::contact(content)),
                Box::new(Footer::new(self)),
            ],
            Self::Noir => vec![
                Box::new(Navbar::new(self)),
                Box::new(Hero::new(content)),
                Box::new(about::stats(content)),
                Box::new(Features::new(content)),
                Box::new(about::philosophy(content)),
                Box::new(Protocol::new(content)),
                Box::new(specialties::conditions(content)),
                Box::new(testimonials::testimonials(content)),
                Box::new(contact::contact(content)),
                Box::new(Footer::new(self)),
            ],
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Variant {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clinic" => Ok(Self::Clinic),
            "noir" => Ok(Self::Noir),
            other => Err(RevealError::configuration(format!(
                "unknown variant \"{other}\" (expected clinic or noir)"
            ))),
        }
    }
}

/// A mounted landing page: one observer and every section of one variant.
///
/// Dropping the page unmounts every section, which releases the last observer lease.
pub struct Page {
    variant: Variant,
    observer: ScrollObserver,
    sections: Vec<MountedSection>,
    submit: Box<dyn SubmitHandler>,
}

impl Page {
    /// Mount every section of `variant` against `host` with default observer options.
    pub fn mount<H: Host>(variant: Variant, host: &mut H) -> RevealResult<Self> {
        Self::mount_with(variant, ObserverOpts::default(), host)
    }

    /// Mount with explicit observer options.
    #[tracing::instrument(skip(opts, host))]
    pub fn mount_with<H: Host>(
        variant: Variant,
        opts: ObserverOpts,
        host: &mut H,
    ) -> RevealResult<Self> {
        let observer = ScrollObserver::new(opts);
        let mut sections = Vec::new();
        for controller in variant.sections() {
            sections.push(MountedSection::mount(controller.as_ref(), &observer, host)?);
        }
        tracing::debug!(
            sections = sections.len(),
            regions = observer.region_count(),
            "page mounted"
        );
        Ok(Self {
            variant,
            observer,
            sections,
            submit: Box::new(LocalAcknowledgment::new(variant.content().acknowledgment)),
        })
    }

    /// Replace the contact form handler.
    pub fn with_submit_handler(mut self, handler: Box<dyn SubmitHandler>) -> Self {
        self.submit = handler;
        self
    }

    /// Which page this is.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The page's shared scroll observer.
    pub fn observer(&self) -> &ScrollObserver {
        &self.observer
    }

    /// Mounted sections in page order.
    pub fn sections(&self) -> &[MountedSection] {
        &self.sections
    }

    /// Evaluate every region against the current scroll offset.
    pub fn refresh<H: Host>(&mut self, host: &mut H) -> RevealResult<PassReport> {
        self.observer.evaluate(host)
    }

    /// Dispatch a host notification. Frames also drive intro timelines and timers.
    pub fn handle<H: Host>(&mut self, event: HostEvent, host: &mut H) -> RevealResult<PassReport> {
        let mut report = self.observer.handle(event, host)?;
        if let HostEvent::Frame { dt } = event {
            if !report.ignored {
                report.advanced += self.frame_sections(dt, host);
            }
        }
        Ok(report)
    }

    /// Advance one animation frame. Returns how many timelines and timers changed.
    pub fn frame<H: Host>(&mut self, dt: f64, host: &mut H) -> usize {
        self.observer.tick(dt, host) + self.frame_sections(dt, host)
    }

    fn frame_sections<H: Host>(&mut self, dt: f64, host: &mut H) -> usize {
        let dt = dt.min(self.observer.opts().max_frame_dt);
        let mut changed = 0;
        for section in &mut self.sections {
            changed += section.frame(dt, &mut *host);
        }
        changed
    }

    /// Submit the contact form. Only the Clinic page has one.
    pub fn submit_contact(&mut self, form: &ContactForm) -> RevealResult<String> {
        if self.variant != Variant::Clinic {
            return Err(RevealError::configuration(format!(
                "the {} page has no contact form",
                self.variant
            )));
        }
        Ok(self.submit.on_submit(form))
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("variant", &self.variant)
            .field("observer", &self.observer)
            .field("sections", &self.sections)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/mod.rs"]
mod tests;
