//! Page layout: the fixed datasets mapped to display blocks in page order.
//!
//! A [`Layout`] is plain data. Renderers walk [`Layout::regions`] front to back
//! and never reorder, filter or re-derive anything, which keeps the browser app
//! and the static export identical.

use crate::{
    content::{cheat_sheet, footer, hardening, hero, resources, timeline},
    Guide, QuickCheck, ResourceLink, StopCodeEntry, TroubleshootingStep,
};

/// Identifies one of the six page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Title, summary and quick response checklist.
    Hero,
    /// Diagnostic timeline.
    Timeline,
    /// Stop code cheat sheet.
    CheatSheet,
    /// Proactive hardening list.
    Hardening,
    /// Reference resources.
    Resources,
    /// Closing notes.
    Footer,
}

impl RegionKind {
    /// Regions in the order they appear on the page.
    pub const ORDER: [RegionKind; 6] = [
        RegionKind::Hero,
        RegionKind::Timeline,
        RegionKind::CheatSheet,
        RegionKind::Hardening,
        RegionKind::Resources,
        RegionKind::Footer,
    ];
}

/// Rendered quick check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickCheckBlock {
    /// Source record.
    pub check: &'static QuickCheck,
    /// Set on the first checklist item only.
    pub emphasized: bool,
}

/// Which optional list of a step a [`Sublist`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SublistKind {
    /// `TroubleshootingStep::items`.
    Items,
    /// `TroubleshootingStep::next_actions`.
    NextActions,
}

impl SublistKind {
    /// Stable markup identifier.
    pub fn slug(self) -> &'static str {
        match self {
            SublistKind::Items => "items",
            SublistKind::NextActions => "next-actions",
        }
    }
}

/// Plain enumerated list under a timeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sublist {
    /// Source field.
    pub kind: SublistKind,
    /// Entries in source order, never empty.
    pub entries: &'static [&'static str],
}

/// Rendered diagnostic step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepBlock {
    /// Step title.
    pub title: &'static str,
    /// Step summary.
    pub description: &'static str,
    /// Items first, then next actions; absent or empty lists are left out.
    pub sublists: Vec<Sublist>,
}

impl StepBlock {
    fn from_step(step: &TroubleshootingStep) -> Self {
        let sublists = [
            (SublistKind::Items, step.items),
            (SublistKind::NextActions, step.next_actions),
        ]
        .into_iter()
        .filter_map(|(kind, entries)| match entries {
            Some(entries) if !entries.is_empty() => Some(Sublist {
                kind,
                entries,
            }),
            _ => None,
        })
        .collect();

        Self {
            title: step.title,
            description: step.description,
            sublists,
        }
    }

    /// Sub-list of the given kind, if rendered.
    pub fn sublist(&self, kind: SublistKind) -> Option<&Sublist> {
        self.sublists.iter().find(|sublist| sublist.kind == kind)
    }
}

/// Rendered cheat sheet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopCodeBlock {
    /// Stop code label.
    pub code: &'static str,
    /// Advice text.
    pub advice: &'static str,
}

/// Rendered external link card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceBlock {
    /// Card title.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
    /// Link target, identical to the source href.
    pub href: &'static str,
    /// Browsing context the link opens in.
    pub target: &'static str,
    /// Rel attribute.
    pub rel: &'static str,
    /// Trailing indicator text.
    pub indicator: &'static str,
}

impl From<&ResourceLink> for ResourceBlock {
    fn from(link: &ResourceLink) -> Self {
        Self {
            title: link.title,
            description: link.description,
            href: link.href,
            target: resources::LINK_TARGET,
            rel: resources::LINK_REL,
            indicator: resources::OPEN_INDICATOR,
        }
    }
}

impl From<&StopCodeEntry> for StopCodeBlock {
    fn from(entry: &StopCodeEntry) -> Self {
        Self {
            code: entry.code,
            advice: entry.advice,
        }
    }
}

/// Hero region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRegion {
    /// Title text before the emphasized phrase.
    pub title_lead: &'static str,
    /// Emphasized phrase.
    pub title_emphasis: &'static str,
    /// Title text after the emphasized phrase.
    pub title_tail: &'static str,
    /// Summary paragraph.
    pub summary: &'static str,
    /// Checklist card heading.
    pub checklist_heading: &'static str,
    /// First checklist item.
    pub featured: QuickCheckBlock,
    /// Other checklist items in source order.
    pub remaining: Vec<QuickCheckBlock>,
}

impl HeroRegion {
    /// Plain-text page title.
    pub fn title(&self) -> String {
        format!("{}{}{}", self.title_lead, self.title_emphasis, self.title_tail)
    }

    /// Every checklist block, featured first.
    pub fn checklist(&self) -> impl Iterator<Item = &QuickCheckBlock> {
        std::iter::once(&self.featured).chain(self.remaining.iter())
    }
}

/// A titled section holding a list of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRegion<T> {
    /// Section heading.
    pub heading: &'static str,
    /// Badge next to the heading.
    pub badge: &'static str,
    /// Blocks in source order.
    pub blocks: Vec<T>,
}

impl<T> ListRegion<T> {
    fn new(heading: &'static str, badge: &'static str, blocks: Vec<T>) -> Self {
        Self {
            heading,
            badge,
            blocks,
        }
    }
}

/// Footer paragraph with a bold lead-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterNote {
    /// Bold heading.
    pub heading: &'static str,
    /// Paragraph text.
    pub body: &'static str,
}

/// Footer region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterRegion {
    /// Notes in display order.
    pub notes: [FooterNote; 2],
}

/// One top-level page area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// See [`RegionKind::Hero`].
    Hero(HeroRegion),
    /// See [`RegionKind::Timeline`].
    Timeline(ListRegion<StepBlock>),
    /// See [`RegionKind::CheatSheet`].
    CheatSheet(ListRegion<StopCodeBlock>),
    /// See [`RegionKind::Hardening`].
    Hardening(ListRegion<&'static str>),
    /// See [`RegionKind::Resources`].
    Resources(ListRegion<ResourceBlock>),
    /// See [`RegionKind::Footer`].
    Footer(FooterRegion),
}

impl Region {
    /// Kind tag of this region.
    pub fn kind(&self) -> RegionKind {
        match self {
            Region::Hero(_) => RegionKind::Hero,
            Region::Timeline(_) => RegionKind::Timeline,
            Region::CheatSheet(_) => RegionKind::CheatSheet,
            Region::Hardening(_) => RegionKind::Hardening,
            Region::Resources(_) => RegionKind::Resources,
            Region::Footer(_) => RegionKind::Footer,
        }
    }

    /// Number of blocks the region renders.
    pub fn block_count(&self) -> usize {
        match self {
            Region::Hero(hero) => 1 + hero.remaining.len(),
            Region::Timeline(region) => region.blocks.len(),
            Region::CheatSheet(region) => region.blocks.len(),
            Region::Hardening(region) => region.blocks.len(),
            Region::Resources(region) => region.blocks.len(),
            Region::Footer(footer) => footer.notes.len(),
        }
    }
}

/// The whole page, regions in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Hero, timeline, cheat sheet, hardening, resources, footer.
    pub regions: Vec<Region>,
}

impl Layout {
    /// Map the guide's datasets to display blocks.
    pub fn build(guide: &Guide) -> Self {
        let checks = guide.quick_checks();
        let hero = HeroRegion {
            title_lead: hero::TITLE_LEAD,
            title_emphasis: hero::TITLE_EMPHASIS,
            title_tail: hero::TITLE_TAIL,
            summary: hero::SUMMARY,
            checklist_heading: hero::CHECKLIST_HEADING,
            featured: QuickCheckBlock {
                check: checks.first,
                emphasized: true,
            },
            remaining: checks
                .rest
                .iter()
                .map(|check| QuickCheckBlock {
                    check,
                    emphasized: false,
                })
                .collect(),
        };

        let steps = guide
            .troubleshooting_steps()
            .iter()
            .map(StepBlock::from_step)
            .collect();
        let stop_codes = guide.stop_codes().iter().map(StopCodeBlock::from).collect();
        let links = guide.resources().iter().map(ResourceBlock::from).collect();

        let regions = vec![
            Region::Hero(hero),
            Region::Timeline(ListRegion::new(timeline::HEADING, timeline::BADGE, steps)),
            Region::CheatSheet(ListRegion::new(
                cheat_sheet::HEADING,
                cheat_sheet::BADGE,
                stop_codes,
            )),
            Region::Hardening(ListRegion::new(
                hardening::HEADING,
                hardening::BADGE,
                guide.proactive_actions().to_vec(),
            )),
            Region::Resources(ListRegion::new(resources::HEADING, resources::BADGE, links)),
            Region::Footer(FooterRegion {
                notes: [
                    FooterNote {
                        heading: footer::ESCALATE_HEADING,
                        body: footer::ESCALATE_BODY,
                    },
                    FooterNote {
                        heading: footer::RECOVERY_HEADING,
                        body: footer::RECOVERY_BODY,
                    },
                ],
            }),
        ];

        Self {
            regions,
        }
    }

    /// Region of the given kind.
    pub fn region(&self, kind: RegionKind) -> Option<&Region> {
        self.regions.iter().find(|region| region.kind() == kind)
    }

    /// Number of blocks in the given region, zero if absent.
    pub fn block_count(&self, kind: RegionKind) -> usize {
        self.region(kind).map_or(0, Region::block_count)
    }

    /// The hero region.
    pub fn hero(&self) -> Option<&HeroRegion> {
        self.regions.iter().find_map(|region| match region {
            Region::Hero(hero) => Some(hero),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content, guide::GuideContent};

    const MIXED_STEPS: &[TroubleshootingStep] = &[
        TroubleshootingStep {
            title: "Both lists",
            description: "items and next actions",
            items: Some(&["check a", "check b"]),
            next_actions: Some(&["follow up"]),
        },
        TroubleshootingStep {
            title: "Empty items",
            description: "present but empty",
            items: Some(&[]),
            next_actions: Some(&["only follow up"]),
        },
        TroubleshootingStep {
            title: "No lists",
            description: "neither list",
            items: None,
            next_actions: None,
        },
    ];

    fn builtin_layout() -> Layout {
        Layout::build(&Guide::builtin().expect("builtin content"))
    }

    fn timeline(layout: &Layout) -> &ListRegion<StepBlock> {
        match layout.region(RegionKind::Timeline) {
            Some(Region::Timeline(region)) => region,
            other => panic!("unexpected region: {other:?}"),
        }
    }

    #[test]
    fn regions_follow_page_order() {
        let layout = builtin_layout();
        let kinds: Vec<_> = layout.regions.iter().map(Region::kind).collect();
        assert_eq!(kinds, RegionKind::ORDER);
    }

    #[test]
    fn block_counts_match_datasets() {
        let layout = builtin_layout();
        assert_eq!(layout.block_count(RegionKind::Hero), content::QUICK_CHECKS.len());
        assert_eq!(
            layout.block_count(RegionKind::Timeline),
            content::TROUBLESHOOTING_STEPS.len()
        );
        assert_eq!(layout.block_count(RegionKind::CheatSheet), content::STOP_CODES.len());
        assert_eq!(layout.block_count(RegionKind::Hardening), content::PROACTIVE_ACTIONS.len());
        assert_eq!(layout.block_count(RegionKind::Resources), content::RESOURCES.len());
        assert_eq!(layout.block_count(RegionKind::Footer), 2);
    }

    #[test]
    fn first_quick_check_is_the_only_emphasized_one() {
        let layout = builtin_layout();
        let hero = layout.hero().expect("hero region");

        assert_eq!(hero.featured.check, &content::QUICK_CHECKS[0]);
        assert!(hero.featured.emphasized);

        let rendered: Vec<_> = hero.checklist().map(|block| block.check.title).collect();
        let source: Vec<_> = content::QUICK_CHECKS.iter().map(|check| check.title).collect();
        assert_eq!(rendered, source);
        assert!(hero.remaining.iter().all(|block| !block.emphasized));
    }

    #[test]
    fn sublists_render_only_when_present_and_non_empty() {
        let guide = Guide::new(GuideContent {
            troubleshooting_steps: MIXED_STEPS,
            ..GuideContent::BUILTIN
        })
        .expect("valid content");
        let layout = Layout::build(&guide);
        let steps = &timeline(&layout).blocks;

        let kinds: Vec<_> = steps[0].sublists.iter().map(|sublist| sublist.kind).collect();
        assert_eq!(kinds, [SublistKind::Items, SublistKind::NextActions]);

        assert!(steps[1].sublist(SublistKind::Items).is_none());
        assert_eq!(
            steps[1]
                .sublist(SublistKind::NextActions)
                .map(|sublist| sublist.entries),
            Some(&["only follow up"][..])
        );

        assert!(steps[2].sublists.is_empty());
    }

    #[test]
    fn builtin_steps_render_items_only() {
        let layout = builtin_layout();
        for step in &timeline(&layout).blocks {
            assert!(step.sublist(SublistKind::Items).is_some(), "{}", step.title);
            assert!(step.sublist(SublistKind::NextActions).is_none(), "{}", step.title);
        }
    }

    #[test]
    fn resource_links_keep_source_href() {
        let layout = builtin_layout();
        let Some(Region::Resources(region)) = layout.region(RegionKind::Resources) else {
            panic!("resources region missing");
        };

        for (block, link) in region.blocks.iter().zip(content::RESOURCES) {
            assert_eq!(block.href, link.href);
            assert_eq!(block.target, "_blank");
            assert_eq!(block.indicator, "Open resource ↗");
        }
    }

    #[test]
    fn irql_advice_is_rendered_verbatim() {
        let layout = builtin_layout();
        let Some(Region::CheatSheet(region)) = layout.region(RegionKind::CheatSheet) else {
            panic!("cheat sheet region missing");
        };

        let block = region
            .blocks
            .iter()
            .find(|block| block.code == "IRQL_NOT_LESS_OR_EQUAL (0xA)")
            .expect("IRQL entry");
        assert_eq!(
            block.advice,
            "Usually faulty drivers accessing invalid memory. Update chipset/network/storage \
             drivers and review pool tags in WinDbg."
        );
    }

    #[test]
    fn building_twice_yields_equal_layouts() {
        let guide = Guide::builtin().expect("builtin content");
        assert_eq!(Layout::build(&guide), Layout::build(&guide));
    }

    #[test]
    fn hero_title_reads_as_one_sentence() {
        let layout = builtin_layout();
        assert_eq!(
            layout.hero().map(HeroRegion::title).as_deref(),
            Some("Resolve Blue Screen of Death Incidents with Confidence")
        );
    }
}
