//! Staggered entrance reveals, the building block most sections are made of.

use crate::{
    animation::{
        step::{AnimationStep, StepBuilder},
        timeline::{SharedTimeline, Timeline},
        value::Property,
    },
    foundation::{core::TargetId, error::RevealResult},
    section::{SectionController, SectionLayout, SectionPlan},
    trigger::{boundary::Boundary, region::TriggerRegion},
};

/// How the targets of a group are sequenced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sequencing {
    /// One region and one timeline; target `i` starts `i * each` after the first.
    Staggered { each: f64 },
    /// One region per target, triggered by the target itself; target `i` waits `i * step`.
    Individually { step: f64 },
}

/// Targets that fade in from an offset when their trigger scrolls into view.
#[derive(Clone, Debug)]
pub struct RevealGroup {
    label: String,
    trigger: TargetId,
    targets: Vec<TargetId>,
    offset: (Property, f64),
    duration: f64,
    ease: &'static str,
    start: f64,
    sequencing: Sequencing,
}

impl RevealGroup {
    /// Reveal `targets` when the top of `trigger` reaches 80% of the viewport.
    ///
    /// Defaults: rise 40px, 0.8s, `power3.out`, no stagger.
    pub fn new(label: impl Into<String>, trigger: TargetId, targets: Vec<TargetId>) -> Self {
        Self {
            label: label.into(),
            trigger,
            targets,
            offset: (Property::TranslateY, 40.0),
            duration: 0.8,
            ease: "power3.out",
            start: 80.0,
            sequencing: Sequencing::Staggered { each: 0.0 },
        }
    }

    /// Rise from `px` below.
    pub fn from_y(mut self, px: f64) -> Self {
        self.offset = (Property::TranslateY, px);
        self
    }

    /// Slide in from `px` horizontally.
    pub fn from_x(mut self, px: f64) -> Self {
        self.offset = (Property::TranslateX, px);
        self
    }

    /// Length of each reveal tween in seconds.
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    /// Named easing for the reveal tweens.
    pub fn ease(mut self, id: &'static str) -> Self {
        self.ease = id;
        self
    }

    /// Viewport percentage the trigger's top must reach (`top <percent>%`).
    pub fn start(mut self, percent: f64) -> Self {
        self.start = percent;
        self
    }

    /// One region for the whole group, targets offset by `each` seconds.
    pub fn stagger(mut self, each: f64) -> Self {
        self.sequencing = Sequencing::Staggered { each };
        self
    }

    /// One region per target, the i-th delayed by `i * step` seconds.
    pub fn individually(mut self, step: f64) -> Self {
        self.sequencing = Sequencing::Individually { step };
        self
    }

    /// Region label prefix.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Elements revealed by this group, in order.
    pub fn targets(&self) -> &[TargetId] {
        &self.targets
    }

    fn template(&self, target: TargetId) -> StepBuilder {
        let (property, from) = self.offset.clone();
        AnimationStep::builder(target)
            .fade_in()
            .from(property, from)
            .duration(self.duration)
            .ease(self.ease)
    }

    /// Timelines of this group, one per region.
    pub fn timelines(&self) -> RevealResult<Vec<SharedTimeline>> {
        match self.sequencing {
            Sequencing::Staggered { each } => {
                let first = self.targets.first().cloned().unwrap_or_else(|| self.trigger.clone());
                let tl = Timeline::builder(self.label.clone())
                    .stagger(self.targets.iter().cloned(), each, self.template(first))
                    .build()?;
                Ok(vec![tl.shared()])
            }
            Sequencing::Individually { step } => self
                .targets
                .iter()
                .enumerate()
                .map(|(i, target)| {
                    Timeline::builder(format!("{}[{i}]", self.label))
                        .delay(i as f64 * step)
                        .step(self.template(target.clone()))
                        .build()
                        .map(Timeline::shared)
                })
                .collect(),
        }
    }

    /// One-shot regions driving this group's timelines.
    pub fn regions(&self) -> RevealResult<Vec<TriggerRegion>> {
        let timelines = self.timelines()?;
        let start = Boundary::top_at(self.start);
        Ok(match self.sequencing {
            Sequencing::Staggered { .. } => timelines
                .into_iter()
                .map(|tl| {
                    TriggerRegion::one_shot(self.label.clone(), start)
                        .trigger(self.trigger.as_str())
                        .animation(tl)
                })
                .collect(),
            Sequencing::Individually { .. } => self
                .targets
                .iter()
                .zip(timelines)
                .enumerate()
                .map(|(i, (target, tl))| {
                    TriggerRegion::one_shot(format!("{}[{i}]", self.label), start)
                        .trigger(target.as_str())
                        .animation(tl)
                })
                .collect(),
        })
    }
}

/// A section made only of reveal groups.
#[derive(Clone, Debug)]
pub struct RevealSection {
    name: &'static str,
    layout: SectionLayout,
    groups: Vec<RevealGroup>,
}

impl RevealSection {
    /// Section named `name` whose only choreography is `groups`.
    pub fn new(name: &'static str, layout: SectionLayout, groups: Vec<RevealGroup>) -> Self {
        Self {
            name,
            layout,
            groups,
        }
    }

    /// Reveal groups in mount order.
    pub fn groups(&self) -> &[RevealGroup] {
        &self.groups
    }
}

impl SectionController for RevealSection {
    fn name(&self) -> &str {
        self.name
    }

    fn layout(&self) -> SectionLayout {
        self.layout.clone()
    }

    fn build(&self) -> RevealResult<SectionPlan> {
        let mut plan = SectionPlan::default();
        for group in &self.groups {
            plan.regions.extend(group.regions()?);
        }
        Ok(plan)
    }
}

/// `count` children of `anchor` named `anchor/kind/i`.
pub fn children(anchor: &TargetId, kind: &str, count: usize) -> Vec<TargetId> {
    (0..count).map(|i| anchor.child(kind, i)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/section/reveal.rs"]
mod tests;
