//! Contact (Clinic) and call-to-action (Noir) sections, plus the local-only form submission.

use crate::{
    foundation::core::TargetId,
    section::{
        Block, Extent, SectionLayout,
        reveal::{RevealGroup, RevealSection, children},
    },
    site::{Variant, content::SiteContent},
};

/// Fields of the Clinic contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Receives contact form submissions.
pub trait SubmitHandler {
    /// Handle one submission and return the acknowledgment shown to the visitor.
    fn on_submit(&mut self, form: &ContactForm) -> String;
}

/// Acknowledges submissions locally and sends nothing anywhere.
#[derive(Clone, Debug)]
pub struct LocalAcknowledgment {
    message: String,
    received: Vec<ContactForm>,
}

impl LocalAcknowledgment {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            received: Vec::new(),
        }
    }

    /// Submissions acknowledged so far.
    pub fn received(&self) -> &[ContactForm] {
        &self.received
    }
}

impl SubmitHandler for LocalAcknowledgment {
    fn on_submit(&mut self, form: &ContactForm) -> String {
        tracing::info!(
            name = %form.name,
            has_email = !form.email.is_empty(),
            has_phone = !form.phone.is_empty(),
            "contact form acknowledged locally"
        );
        self.received.push(form.clone());
        self.message.clone()
    }
}

/// Contact or call-to-action section of `content`'s variant.
pub fn contact(content: &'static SiteContent) -> RevealSection {
    let anchor = TargetId::new("contato");
    let (kind, extent) = match content.variant {
        Variant::Clinic => ("reveal", 1000.0),
        Variant::Noir => ("block", 1100.0),
    };
    let blocks = children(&anchor, kind, content.contact_blocks.len());
    let layout = SectionLayout::flow(
        anchor.clone(),
        Extent::Px(extent),
        blocks.iter().cloned().map(Block::leaf).collect(),
    );
    let group = RevealGroup::new("contact", anchor, blocks);
    let group = match content.variant {
        Variant::Clinic => group
            .from_y(32.0)
            .duration(0.85)
            .stagger(0.1)
            .ease("power2.out")
            .start(72.0),
        Variant::Noir => group.from_y(40.0).duration(0.8).stagger(0.15).start(80.0),
    };
    RevealSection::new("contact", layout, vec![group])
}

#[cfg(test)]
#[path = "../../tests/unit/section/contact.rs"]
mod tests;
